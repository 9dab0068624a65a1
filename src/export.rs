use std::path::Path;

use crate::calculator::format_2dp;
use crate::error::Result;
use crate::models::HistoryEntry;

/// Write the history log to a CSV file, newest entry first.
pub fn export_history_csv(history: &[HistoryEntry], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "id",
        "date",
        "fuel_type",
        "distance_km",
        "fuel_needed_liters",
        "total_cost",
    ])?;

    for entry in history {
        wtr.write_record([
            entry.id.to_string(),
            entry.date.clone(),
            entry.fuel_type_label.clone(),
            format_2dp(entry.effective_distance_km),
            format_2dp(entry.fuel_needed_liters),
            format_2dp(entry.total_cost),
        ])?;
    }

    wtr.flush()?;
    log::info!("Exported {} history entries to {}", history.len(), path.display());
    Ok(())
}
