pub mod calculator;
pub mod cli;
pub mod error;
pub mod export;
pub mod interface;
pub mod models;
pub mod state;

pub use error::{FuelError, Result};
pub use models::{CalcResult, FuelType, HistoryEntry, Inputs, Theme};
