use clap::Parser;
use std::path::Path;

use fuel_cost_calc_rs::calculator::format_2dp;
use fuel_cost_calc_rs::cli::{Cli, Command};
use fuel_cost_calc_rs::error::Result;
use fuel_cost_calc_rs::export::export_history_csv;
use fuel_cost_calc_rs::interface::{
    display_history, display_inputs, display_result, parse_fuel_type, run_interactive,
};
use fuel_cost_calc_rs::models::Theme;
use fuel_cost_calc_rs::state::{open_store, CalculatorState, Event, KeyValueStore};

type State = CalculatorState<Box<dyn KeyValueStore>>;

fn main() {
    pretty_env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    let store = open_store(cli.scope, &cli.store);
    let mut state = CalculatorState::load(store, Theme::system_preference());

    match command {
        Command::Interactive => run_interactive(&mut state),
        Command::Calc {
            fuel_type,
            price,
            distance,
            mileage,
            roundtrip,
            one_way,
        } => cmd_calc(
            &mut state,
            fuel_type,
            price,
            distance,
            mileage,
            roundtrip_flag(roundtrip, one_way),
        ),
        Command::Save => cmd_save(&mut state),
        Command::History => {
            display_history(state.history(), state.theme());
            Ok(())
        }
        Command::Export { out } => cmd_export(&state, &out),
        Command::Theme { toggle } => cmd_theme(&mut state, toggle),
        Command::ClearHistory => {
            state.apply(Event::ClearHistory)?;
            println!("History cleared.");
            Ok(())
        }
        Command::Reset => {
            state.apply(Event::Reset)?;
            println!("Inputs reset.");
            Ok(())
        }
    }
}

fn roundtrip_flag(roundtrip: bool, one_way: bool) -> Option<bool> {
    match (roundtrip, one_way) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

/// Apply the given edits, then show the form and its result.
///
/// The fuel type goes first so an explicit price overrides the preset. An
/// unknown fuel type fails the command before anything is changed.
fn cmd_calc(
    state: &mut State,
    fuel_type: Option<String>,
    price: Option<String>,
    distance: Option<String>,
    mileage: Option<String>,
    roundtrip: Option<bool>,
) -> Result<()> {
    if let Some(name) = fuel_type {
        let fuel_type = parse_fuel_type(&name)?;
        state.apply(Event::SelectFuelType(fuel_type))?;
    }
    if let Some(price) = price {
        state.apply(Event::SetPrice(price))?;
    }
    if let Some(distance) = distance {
        state.apply(Event::SetDistance(distance))?;
    }
    if let Some(mileage) = mileage {
        state.apply(Event::SetMileage(mileage))?;
    }
    if let Some(roundtrip) = roundtrip {
        state.apply(Event::SetRoundtrip(roundtrip))?;
    }

    display_inputs(state.inputs(), state.theme());
    display_result(state.result().as_ref(), state.theme());
    Ok(())
}

fn cmd_save(state: &mut State) -> Result<()> {
    match state.save_to_history()? {
        Some(entry) => {
            println!(
                "Saved: {} liters, ${} ({} entries in history).",
                format_2dp(entry.fuel_needed_liters),
                format_2dp(entry.total_cost),
                state.history().len()
            );
        }
        None => println!("Nothing to save: price, distance and mileage are required."),
    }
    Ok(())
}

fn cmd_export(state: &State, out: &Path) -> Result<()> {
    if state.history().is_empty() {
        println!("History is empty, nothing to export.");
        return Ok(());
    }

    export_history_csv(state.history(), out)?;
    println!(
        "Exported {} entries to {}.",
        state.history().len(),
        out.display()
    );
    Ok(())
}

fn cmd_theme(state: &mut State, toggle: bool) -> Result<()> {
    if toggle {
        state.apply(Event::ToggleTheme)?;
    }
    println!("Theme: {}", state.theme());
    Ok(())
}
