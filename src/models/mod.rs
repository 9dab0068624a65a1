mod inputs;
mod record;
mod theme;

pub use inputs::{FuelType, Inputs};
pub use record::{CalcResult, HistoryEntry};
pub use theme::Theme;
