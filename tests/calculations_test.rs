#[macro_use]
extern crate assert_float_eq;

use fuel_cost_calc_rs::calculator::{compute, format_2dp};
use fuel_cost_calc_rs::models::{FuelType, Inputs};

#[test]
fn test_formula_for_non_negative_inputs() {
    let cases = [
        (2.66, 120.0, 7.5),
        (1.85, 0.0, 6.0),
        (0.0, 350.0, 9.2),
        (3.1, 42.195, 0.0),
    ];

    for (price, distance, mileage) in cases {
        let inputs = Inputs::new(
            &price.to_string(),
            &distance.to_string(),
            &mileage.to_string(),
            false,
        );
        let result = compute(&inputs).unwrap();

        let expected_fuel = distance * mileage / 100.0;
        assert_float_absolute_eq!(result.fuel_needed_liters, expected_fuel, 1e-9);
        assert_float_absolute_eq!(result.total_cost, expected_fuel * price, 1e-9);
        assert_eq!(format_2dp(result.total_cost), format!("{:.2}", expected_fuel * price));
    }
}

#[test]
fn test_roundtrip_doubles_distance() {
    let result = compute(&Inputs::new("2", "100", "8", true)).unwrap();

    assert_float_absolute_eq!(result.effective_distance_km, 200.0, 1e-9);
    assert_eq!(format_2dp(result.fuel_needed_liters), "16.00");
    assert_eq!(format_2dp(result.total_cost), "32.00");
}

#[test]
fn test_any_empty_input_gives_no_result() {
    assert!(compute(&Inputs::new("", "", "", false)).is_none());
    assert!(compute(&Inputs::new("", "100", "8", true)).is_none());
    assert!(compute(&Inputs::new("2", "", "8", false)).is_none());
    assert!(compute(&Inputs::new("2", "100", "", false)).is_none());
    assert!(compute(&Inputs::default()).is_none());
}

#[test]
fn test_negative_values_propagate() {
    let result = compute(&Inputs::new("2", "-50", "8", false)).unwrap();

    assert_float_absolute_eq!(result.fuel_needed_liters, -4.0, 1e-9);
    assert_float_absolute_eq!(result.total_cost, -8.0, 1e-9);
}

#[test]
fn test_full_precision_is_kept() {
    let result = compute(&Inputs::new("2.666", "33.3", "7.77", false)).unwrap();

    let fuel = 33.3 * 7.77 / 100.0;
    assert_float_absolute_eq!(result.fuel_needed_liters, fuel, 1e-12);
    assert_float_absolute_eq!(result.total_cost, fuel * 2.666, 1e-12);
}

#[test]
fn test_result_label_matches_fuel_type() {
    let mut inputs = Inputs::new("2.75", "10", "10", false);
    inputs.fuel_type = FuelType::Unleaded98;

    assert_eq!(compute(&inputs).unwrap().fuel_type_label(), "98");
}
