mod manager;
mod persistence;
mod store;

pub use manager::{CalculatorState, Event};
pub use persistence::{
    load_history, load_inputs, load_theme, remove_history, save_history, save_inputs,
    save_theme,
};
pub use store::{open_store, FileStore, KeyValueStore, MemoryStore};
