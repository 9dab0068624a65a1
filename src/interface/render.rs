use std::io::IsTerminal;

use crate::calculator::format_2dp;
use crate::models::{CalcResult, HistoryEntry, Inputs, Theme};

/// Terminal colours for one theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub heading: &'static str,
    pub value: &'static str,
    pub muted: &'static str,
}

const RESET: &str = "\x1b[0m";

impl Palette {
    /// Palette for printing to stdout: themed on a terminal, plain otherwise.
    pub fn for_stdout(theme: Theme) -> Self {
        if std::io::stdout().is_terminal() {
            Self::for_theme(theme)
        } else {
            Self::plain()
        }
    }

    /// No colour codes at all.
    pub fn plain() -> Self {
        Palette {
            heading: "",
            value: "",
            muted: "",
        }
    }

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Palette {
                heading: "\x1b[1;34m",
                value: "\x1b[32m",
                muted: "\x1b[90m",
            },
            Theme::Dark => Palette {
                heading: "\x1b[1;96m",
                value: "\x1b[93m",
                muted: "\x1b[37m",
            },
        }
    }

    pub fn paint(&self, colour: &str, text: &str) -> String {
        if colour.is_empty() {
            return text.to_string();
        }
        format!("{}{}{}", colour, text, RESET)
    }
}

/// Show a text field, with a placeholder when empty.
fn field(text: &str) -> &str {
    if text.trim().is_empty() { "-" } else { text }
}

/// Display the current form values.
pub fn display_inputs(inputs: &Inputs, theme: Theme) {
    let p = Palette::for_stdout(theme);

    println!();
    println!("{}", p.paint(p.heading, "=== Fuel Cost Calculator ==="));
    println!("  Fuel type:            {}", inputs.fuel_type);
    println!("  Fuel price (/liter):  {}", field(&inputs.fuel_price_per_liter));
    println!("  Distance (km):        {}", field(&inputs.distance_km));
    println!("  Mileage (L/100km):    {}", field(&inputs.mileage_l_per_100km));
    println!(
        "  Roundtrip:            {}",
        if inputs.is_roundtrip { "yes" } else { "no" }
    );
}

/// Display the calculation result. Nothing is shown when there is none.
pub fn display_result(result: Option<&CalcResult>, theme: Theme) {
    let Some(result) = result else {
        return;
    };
    let p = Palette::for_stdout(theme);

    println!();
    println!("{}", p.paint(p.heading, "--- Calculation Results ---"));
    println!(
        "  Fuel type:     {}",
        p.paint(p.value, result.fuel_type_label())
    );
    println!(
        "  Distance:      {} km",
        p.paint(p.value, &format_2dp(result.effective_distance_km))
    );
    println!(
        "  Fuel needed:   {} liters",
        p.paint(p.value, &format_2dp(result.fuel_needed_liters))
    );
    println!(
        "  Total cost:    ${}",
        p.paint(p.value, &format_2dp(result.total_cost))
    );
}

/// Display the history log, newest first.
pub fn display_history(history: &[HistoryEntry], theme: Theme) {
    let p = Palette::for_stdout(theme);

    if history.is_empty() {
        println!("{}", p.paint(p.muted, "History: (none)"));
        return;
    }

    println!();
    println!(
        "{}",
        p.paint(p.heading, &format!("=== History ({} items) ===", history.len()))
    );

    for (i, entry) in history.iter().enumerate() {
        println!(
            "{:>3}. {} | {:<6} | {:>8} km | {:>7} L | ${}",
            i + 1,
            p.paint(p.muted, &entry.date),
            entry.fuel_type_label,
            format_2dp(entry.effective_distance_km),
            format_2dp(entry.fuel_needed_liters),
            p.paint(p.value, &format_2dp(entry.total_cost)),
        );
    }
    println!();
}
