use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calculator::constants::{PRICE_91, PRICE_95, PRICE_98, PRICE_DIESEL};
use crate::error::FuelError;

/// Fuel grade selected in the preset dropdown.
///
/// Every grade except `Custom` carries a default per-liter price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FuelType {
    #[serde(rename = "91")]
    Unleaded91,

    #[default]
    #[serde(rename = "95")]
    Unleaded95,

    #[serde(rename = "98")]
    Unleaded98,

    Diesel,

    Custom,
}

impl FuelType {
    /// All selectable fuel types, in dropdown order.
    pub const ALL: [FuelType; 5] = [
        FuelType::Unleaded91,
        FuelType::Unleaded95,
        FuelType::Unleaded98,
        FuelType::Diesel,
        FuelType::Custom,
    ];

    /// Display label, also used to tag results and history entries.
    pub fn label(self) -> &'static str {
        match self {
            FuelType::Unleaded91 => "91",
            FuelType::Unleaded95 => "95",
            FuelType::Unleaded98 => "98",
            FuelType::Diesel => "Diesel",
            FuelType::Custom => "Custom",
        }
    }

    /// Preset price per liter, or `None` for `Custom`.
    pub fn preset_price(self) -> Option<f64> {
        match self {
            FuelType::Unleaded91 => Some(PRICE_91),
            FuelType::Unleaded95 => Some(PRICE_95),
            FuelType::Unleaded98 => Some(PRICE_98),
            FuelType::Diesel => Some(PRICE_DIESEL),
            FuelType::Custom => None,
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FuelType {
    type Err = FuelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        FuelType::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FuelError::UnknownFuelType(wanted.to_string()))
    }
}

/// Current form values.
///
/// Numeric fields hold the raw text as typed; parsing happens at compute time
/// so an empty or half-typed field simply yields no result.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Inputs {
    pub fuel_price_per_liter: String,
    pub fuel_type: FuelType,
    pub distance_km: String,
    #[serde(rename = "mileageLper100km")]
    pub mileage_l_per_100km: String,
    pub is_roundtrip: bool,
}

impl Inputs {
    /// Create inputs from the three numeric fields, with a custom fuel type.
    pub fn new(price: &str, distance: &str, mileage: &str, is_roundtrip: bool) -> Self {
        Self {
            fuel_price_per_liter: price.to_string(),
            fuel_type: FuelType::Custom,
            distance_km: distance.to_string(),
            mileage_l_per_100km: mileage.to_string(),
            is_roundtrip,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fuel_type_case_insensitive() {
        assert_eq!("diesel".parse::<FuelType>().unwrap(), FuelType::Diesel);
        assert_eq!(" 98 ".parse::<FuelType>().unwrap(), FuelType::Unleaded98);
        assert_eq!("CUSTOM".parse::<FuelType>().unwrap(), FuelType::Custom);
        assert!("e10".parse::<FuelType>().is_err());
    }

    #[test]
    fn test_preset_prices() {
        assert_eq!(FuelType::Unleaded95.preset_price(), Some(2.66));
        assert_eq!(FuelType::Diesel.preset_price(), Some(1.85));
        assert_eq!(FuelType::Custom.preset_price(), None);
    }

    #[test]
    fn test_inputs_json_layout() {
        let inputs = Inputs {
            fuel_price_per_liter: "2.66".to_string(),
            fuel_type: FuelType::Unleaded95,
            distance_km: "120".to_string(),
            mileage_l_per_100km: "7.5".to_string(),
            is_roundtrip: true,
        };
        let json = serde_json::to_value(&inputs).unwrap();
        assert_eq!(json["fuelPricePerLiter"], "2.66");
        assert_eq!(json["fuelType"], "95");
        assert_eq!(json["distanceKm"], "120");
        assert_eq!(json["mileageLper100km"], "7.5");
        assert_eq!(json["isRoundtrip"], true);
    }

    #[test]
    fn test_inputs_missing_fields_default() {
        let inputs: Inputs = serde_json::from_str(r#"{"distanceKm": "50"}"#).unwrap();
        assert_eq!(inputs.distance_km, "50");
        assert_eq!(inputs.fuel_price_per_liter, "");
        assert_eq!(inputs.fuel_type, FuelType::Unleaded95);
        assert!(!inputs.is_roundtrip);
    }
}
