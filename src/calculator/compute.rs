use crate::calculator::constants::{MILEAGE_DISTANCE_KM, ROUNDTRIP_FACTOR};
use crate::models::{CalcResult, Inputs};

/// Parse a free-text numeric field.
///
/// Empty text, garbage and non-finite values all count as absent.
pub fn parse_field(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Effective distance, doubled for a roundtrip.
#[inline]
pub fn effective_distance(distance_km: f64, is_roundtrip: bool) -> f64 {
    if is_roundtrip {
        distance_km * ROUNDTRIP_FACTOR
    } else {
        distance_km
    }
}

/// Liters consumed over a distance at the given mileage (L/100km).
#[inline]
pub fn fuel_needed(distance_km: f64, mileage_l_per_100km: f64) -> f64 {
    distance_km * mileage_l_per_100km / MILEAGE_DISTANCE_KM
}

/// Compute the result for the current inputs.
///
/// Returns `None` unless price, distance and mileage all parse. Negative and
/// zero values are passed through arithmetically.
pub fn compute(inputs: &Inputs) -> Option<CalcResult> {
    let price = parse_field(&inputs.fuel_price_per_liter)?;
    let distance = parse_field(&inputs.distance_km)?;
    let mileage = parse_field(&inputs.mileage_l_per_100km)?;

    let effective_distance_km = effective_distance(distance, inputs.is_roundtrip);
    let fuel_needed_liters = fuel_needed(effective_distance_km, mileage);

    Some(CalcResult {
        fuel_needed_liters,
        total_cost: fuel_needed_liters * price,
        effective_distance_km,
        fuel_type: inputs.fuel_type,
    })
}

/// Format a value with exactly two decimal places.
pub fn format_2dp(value: f64) -> String {
    format!("{:.2}", value)
}
