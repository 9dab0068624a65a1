use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Fuel cost calculator: fuel needed and trip cost from price, distance and mileage.
#[derive(Parser, Debug)]
#[command(name = "fuel_cost_calc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the persisted state JSON file (local scope only).
    #[arg(short, long, default_value = "fuel_state.json")]
    pub store: PathBuf,

    /// Where inputs, history and theme are kept.
    #[arg(long, value_enum, default_value_t = Scope::Local)]
    pub scope: Scope,
}

/// Lifetime of the persisted state.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    /// Kept in the store file across runs.
    Local,
    /// Kept in memory for this run only.
    Session,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Edit the form interactively.
    Interactive,

    /// Update inputs and print the result.
    Calc {
        /// Fuel type preset (91, 95, 98, Diesel, Custom).
        #[arg(short = 't', long)]
        fuel_type: Option<String>,

        /// Price per liter. Overrides any preset and switches to Custom.
        #[arg(short, long, allow_hyphen_values = true)]
        price: Option<String>,

        /// One-way distance in km.
        #[arg(short, long, allow_hyphen_values = true)]
        distance: Option<String>,

        /// Consumption in liters per 100 km.
        #[arg(short, long, allow_hyphen_values = true)]
        mileage: Option<String>,

        /// Set the roundtrip flag (doubles the distance).
        #[arg(long, conflicts_with = "one_way")]
        roundtrip: bool,

        /// Clear the roundtrip flag.
        #[arg(long)]
        one_way: bool,
    },

    /// Save the current result to history.
    Save,

    /// Show saved calculations.
    History,

    /// Export saved calculations to CSV.
    Export {
        /// Output CSV file.
        #[arg(short, long, default_value = "fuel_history.csv")]
        out: PathBuf,
    },

    /// Show the current theme.
    Theme {
        /// Switch between light and dark.
        #[arg(long)]
        toggle: bool,
    },

    /// Remove all saved calculations.
    ClearHistory,

    /// Restore default inputs.
    Reset,
}

impl Default for Command {
    fn default() -> Self {
        Command::Interactive
    }
}
