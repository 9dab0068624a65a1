pub mod compute;
pub mod constants;

pub use compute::{compute, effective_distance, format_2dp, fuel_needed, parse_field};
pub use constants::*;
