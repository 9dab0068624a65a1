use crate::calculator::constants::{HISTORY_CAPACITY, HISTORY_KEY, INPUTS_KEY, THEME_KEY};
use crate::error::Result;
use crate::models::{HistoryEntry, Inputs, Theme};
use crate::state::store::KeyValueStore;

/// Load the saved input snapshot.
///
/// Missing or malformed data yields default inputs.
pub fn load_inputs<S: KeyValueStore + ?Sized>(store: &S) -> Inputs {
    let Some(raw) = store.get(INPUTS_KEY) else {
        return Inputs::default();
    };

    serde_json::from_str(&raw).unwrap_or_else(|e| {
        log::warn!("Discarding malformed input snapshot: {}", e);
        Inputs::default()
    })
}

/// Save the input snapshot.
pub fn save_inputs<S: KeyValueStore + ?Sized>(store: &mut S, inputs: &Inputs) -> Result<()> {
    let json = serde_json::to_string(inputs)?;
    store.set(INPUTS_KEY, json)
}

/// Load the history log, newest first.
///
/// Missing or malformed data yields an empty log. An overlong log is cut to
/// the capacity.
pub fn load_history<S: KeyValueStore + ?Sized>(store: &S) -> Vec<HistoryEntry> {
    let Some(raw) = store.get(HISTORY_KEY) else {
        return Vec::new();
    };

    let mut history: Vec<HistoryEntry> = serde_json::from_str(&raw).unwrap_or_else(|e| {
        log::warn!("Discarding malformed history: {}", e);
        Vec::new()
    });
    history.truncate(HISTORY_CAPACITY);
    history
}

/// Save the history log.
pub fn save_history<S: KeyValueStore + ?Sized>(
    store: &mut S,
    history: &[HistoryEntry],
) -> Result<()> {
    let json = serde_json::to_string(history)?;
    store.set(HISTORY_KEY, json)
}

/// Drop the history log from the store.
pub fn remove_history<S: KeyValueStore + ?Sized>(store: &mut S) -> Result<()> {
    store.remove(HISTORY_KEY)
}

/// Load the theme preference, falling back to `fallback` when absent or invalid.
pub fn load_theme<S: KeyValueStore + ?Sized>(store: &S, fallback: Theme) -> Theme {
    match store.get(THEME_KEY) {
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            log::warn!("Ignoring stored theme: {}", e);
            fallback
        }),
        None => fallback,
    }
}

/// Save the theme preference.
pub fn save_theme<S: KeyValueStore + ?Sized>(store: &mut S, theme: Theme) -> Result<()> {
    store.set(THEME_KEY, theme.as_str().to_string())
}
