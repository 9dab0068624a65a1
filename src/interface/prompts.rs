use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{FuelError, Result};
use crate::interface::render::{display_history, display_inputs, display_result};
use crate::models::FuelType;
use crate::state::{CalculatorState, Event, KeyValueStore};

/// Minimum similarity for a fuel type suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Closest fuel type to a mistyped name, if any is similar enough.
pub fn suggest_fuel_type(input: &str) -> Option<FuelType> {
    let input = input.trim().to_lowercase();
    FuelType::ALL
        .into_iter()
        .map(|t| (t, jaro_winkler(&t.label().to_lowercase(), &input)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(t, _)| t)
}

/// Parse a fuel type name without prompting.
///
/// An unknown name is an error, with the closest match as a hint.
pub fn parse_fuel_type(input: &str) -> Result<FuelType> {
    input.parse::<FuelType>().map_err(|_| {
        let name = input.trim();
        match suggest_fuel_type(name) {
            Some(candidate) => FuelError::UnknownFuelType(format!(
                "{} (did you mean '{}'?)",
                name, candidate
            )),
            None => FuelError::UnknownFuelType(name.to_string()),
        }
    })
}

/// Prompt for a fuel type from the preset list.
pub fn prompt_fuel_type(current: FuelType) -> Result<FuelType> {
    let options: Vec<String> = FuelType::ALL
        .iter()
        .map(|t| match t.preset_price() {
            Some(price) => format!("{} ({:.2}/liter)", t, price),
            None => t.to_string(),
        })
        .collect();

    let default = FuelType::ALL
        .iter()
        .position(|t| *t == current)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Fuel type")
        .items(&options)
        .default(default)
        .interact()?;

    Ok(FuelType::ALL[selection])
}

/// Prompt for a free-text numeric field. Empty input clears the field.
pub fn prompt_field(prompt: &str, current: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;

    Ok(input.trim().to_string())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

const ACTIONS: [&str; 11] = [
    "Select fuel type",
    "Edit fuel price",
    "Edit distance",
    "Edit mileage",
    "Toggle roundtrip",
    "Save to history",
    "Show history",
    "Clear history",
    "Toggle theme",
    "Reset inputs",
    "Quit",
];

/// Run the interactive form until the user quits.
pub fn run_interactive<S: KeyValueStore>(state: &mut CalculatorState<S>) -> Result<()> {
    loop {
        display_inputs(state.inputs(), state.theme());
        display_result(state.result().as_ref(), state.theme());
        println!();

        let selection = Select::new()
            .with_prompt("Action")
            .items(&ACTIONS[..])
            .default(0)
            .interact()?;

        let event = match selection {
            0 => Event::SelectFuelType(prompt_fuel_type(state.inputs().fuel_type)?),
            1 => Event::SetPrice(prompt_field(
                "Fuel price (per liter)",
                &state.inputs().fuel_price_per_liter,
            )?),
            2 => Event::SetDistance(prompt_field(
                "Distance (km)",
                &state.inputs().distance_km,
            )?),
            3 => Event::SetMileage(prompt_field(
                "Mileage (liters per 100km)",
                &state.inputs().mileage_l_per_100km,
            )?),
            4 => Event::SetRoundtrip(!state.inputs().is_roundtrip),
            5 => {
                match state.save_to_history()? {
                    Some(entry) => println!("Saved calculation from {}.", entry.date),
                    None => println!("Nothing to save yet."),
                }
                continue;
            }
            6 => {
                display_history(state.history(), state.theme());
                continue;
            }
            7 => {
                if !prompt_yes_no("Remove all saved calculations?", false)? {
                    continue;
                }
                Event::ClearHistory
            }
            8 => Event::ToggleTheme,
            9 => Event::Reset,
            _ => break,
        };

        state.apply(event)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_fuel_type() {
        assert_eq!(suggest_fuel_type("disel"), Some(FuelType::Diesel));
        assert_eq!(suggest_fuel_type("Custm"), Some(FuelType::Custom));
        assert_eq!(suggest_fuel_type("kerosene"), None);
    }

    #[test]
    fn test_parse_fuel_type_exact() {
        assert_eq!(parse_fuel_type("Diesel").unwrap(), FuelType::Diesel);
        assert_eq!(parse_fuel_type(" 91").unwrap(), FuelType::Unleaded91);
    }

    #[test]
    fn test_parse_fuel_type_rejects_unknown() {
        match parse_fuel_type("kerosene") {
            Err(FuelError::UnknownFuelType(msg)) => assert_eq!(msg, "kerosene"),
            other => panic!("expected unknown fuel type, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_fuel_type_near_miss_is_error_with_hint() {
        match parse_fuel_type("disel") {
            Err(FuelError::UnknownFuelType(msg)) => {
                assert_eq!(msg, "disel (did you mean 'Diesel'?)")
            }
            other => panic!("expected unknown fuel type, got {:?}", other),
        }
    }
}
