/// Preset price per liter for 91 octane.
pub const PRICE_91: f64 = 2.60;

/// Preset price per liter for 95 octane.
pub const PRICE_95: f64 = 2.66;

/// Preset price per liter for 98 octane.
pub const PRICE_98: f64 = 2.75;

/// Preset price per liter for diesel.
pub const PRICE_DIESEL: f64 = 1.85;

/// Mileage is expressed per this many kilometers.
pub const MILEAGE_DISTANCE_KM: f64 = 100.0;

/// Roundtrip multiplies the entered one-way distance by this factor.
pub const ROUNDTRIP_FACTOR: f64 = 2.0;

/// Maximum number of entries kept in the history log.
pub const HISTORY_CAPACITY: usize = 10;

// ─────────────────────────────────────────────────────────────────────────────
// Storage keys
// ─────────────────────────────────────────────────────────────────────────────

pub const INPUTS_KEY: &str = "fuelCalculatorInputs";
pub const HISTORY_KEY: &str = "fuelCalculatorHistory";
pub const THEME_KEY: &str = "fuelCalculatorTheme";

/// Date format used for history entries.
pub const HISTORY_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
