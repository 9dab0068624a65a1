use serde::{Deserialize, Serialize};

use crate::models::FuelType;

/// Result derived from the current inputs.
///
/// Values keep full floating-point precision; rounding happens at display.
#[derive(Debug, Clone, PartialEq)]
pub struct CalcResult {
    pub fuel_needed_liters: f64,
    pub total_cost: f64,
    pub effective_distance_km: f64,
    pub fuel_type: FuelType,
}

impl CalcResult {
    /// Label of the fuel type this result was computed for.
    pub fn fuel_type_label(&self) -> &'static str {
        self.fuel_type.label()
    }
}

/// A saved calculation in the history log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Creation timestamp in milliseconds since the epoch.
    pub id: i64,

    /// Human-readable creation date.
    pub date: String,

    pub fuel_needed_liters: f64,
    pub total_cost: f64,
    pub effective_distance_km: f64,
    pub fuel_type_label: String,
}

impl HistoryEntry {
    pub fn from_result(result: &CalcResult, id: i64, date: String) -> Self {
        Self {
            id,
            date,
            fuel_needed_liters: result.fuel_needed_liters,
            total_cost: result.total_cost,
            effective_distance_km: result.effective_distance_km,
            fuel_type_label: result.fuel_type_label().to_string(),
        }
    }
}
