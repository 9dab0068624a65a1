use chrono::{DateTime, Local};

use crate::calculator::constants::{HISTORY_CAPACITY, HISTORY_DATE_FORMAT};
use crate::calculator::{compute, format_2dp};
use crate::error::Result;
use crate::models::{CalcResult, FuelType, HistoryEntry, Inputs, Theme};
use crate::state::persistence::{
    load_history, load_inputs, load_theme, remove_history, save_history, save_inputs,
    save_theme,
};
use crate::state::store::KeyValueStore;

/// A discrete user action.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    SetPrice(String),
    SetDistance(String),
    SetMileage(String),
    SetRoundtrip(bool),
    SelectFuelType(FuelType),
    SaveToHistory,
    ClearHistory,
    ToggleTheme,
    Reset,
}

/// Calculator state: current inputs, history log and theme.
///
/// Every mutation is written through to the backing store.
pub struct CalculatorState<S: KeyValueStore> {
    inputs: Inputs,
    history: Vec<HistoryEntry>,
    theme: Theme,
    store: S,
}

impl<S: KeyValueStore> CalculatorState<S> {
    /// Restore state from `store`, using `system_theme` when no theme is stored.
    pub fn load(store: S, system_theme: Theme) -> Self {
        let inputs = load_inputs(&store);
        let history = load_history(&store);
        let theme = load_theme(&store, system_theme);

        log::debug!(
            "Loaded state: {} history entries, theme {}",
            history.len(),
            theme
        );

        Self {
            inputs,
            history,
            theme,
            store,
        }
    }

    pub fn inputs(&self) -> &Inputs {
        &self.inputs
    }

    /// Saved calculations, newest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Result for the current inputs, recomputed on every call.
    pub fn result(&self) -> Option<CalcResult> {
        compute(&self.inputs)
    }

    /// Apply a single event.
    pub fn apply(&mut self, event: Event) -> Result<()> {
        log::debug!("Applying {:?}", event);
        match event {
            Event::SetPrice(text) => self.set_price(text),
            Event::SetDistance(text) => self.set_distance(text),
            Event::SetMileage(text) => self.set_mileage(text),
            Event::SetRoundtrip(flag) => self.set_roundtrip(flag),
            Event::SelectFuelType(fuel_type) => self.select_fuel_type(fuel_type),
            Event::SaveToHistory => self.save_to_history().map(|_| ()),
            Event::ClearHistory => self.clear_history(),
            Event::ToggleTheme => self.toggle_theme().map(|_| ()),
            Event::Reset => self.reset(),
        }
    }

    /// Edit the price field. A manual edit always switches to `Custom`.
    pub fn set_price(&mut self, text: String) -> Result<()> {
        self.inputs.fuel_price_per_liter = text;
        self.inputs.fuel_type = FuelType::Custom;
        self.persist_inputs()
    }

    pub fn set_distance(&mut self, text: String) -> Result<()> {
        self.inputs.distance_km = text;
        self.persist_inputs()
    }

    pub fn set_mileage(&mut self, text: String) -> Result<()> {
        self.inputs.mileage_l_per_100km = text;
        self.persist_inputs()
    }

    pub fn set_roundtrip(&mut self, is_roundtrip: bool) -> Result<()> {
        self.inputs.is_roundtrip = is_roundtrip;
        self.persist_inputs()
    }

    /// Select a fuel type. Presets overwrite the price field; `Custom` keeps it.
    pub fn select_fuel_type(&mut self, fuel_type: FuelType) -> Result<()> {
        if let Some(price) = fuel_type.preset_price() {
            self.inputs.fuel_price_per_liter = format_2dp(price);
        }
        self.inputs.fuel_type = fuel_type;
        self.persist_inputs()
    }

    /// Save the current result to history, stamped with the current time.
    pub fn save_to_history(&mut self) -> Result<Option<HistoryEntry>> {
        self.save_to_history_at(Local::now())
    }

    /// Save the current result to history, stamped with `now`.
    ///
    /// Returns `None` without touching the log when there is no result.
    pub fn save_to_history_at(&mut self, now: DateTime<Local>) -> Result<Option<HistoryEntry>> {
        let Some(result) = self.result() else {
            log::debug!("Nothing to save: no result for current inputs");
            return Ok(None);
        };

        let entry = HistoryEntry::from_result(
            &result,
            now.timestamp_millis(),
            now.format(HISTORY_DATE_FORMAT).to_string(),
        );

        self.history.insert(0, entry.clone());
        self.history.truncate(HISTORY_CAPACITY);
        save_history(&mut self.store, &self.history)?;

        log::info!(
            "Saved calculation {} ({} entries in history)",
            entry.id,
            self.history.len()
        );
        Ok(Some(entry))
    }

    pub fn clear_history(&mut self) -> Result<()> {
        self.history.clear();
        remove_history(&mut self.store)?;
        log::info!("Cleared history");
        Ok(())
    }

    /// Flip the theme and persist it. Returns the new theme.
    pub fn toggle_theme(&mut self) -> Result<Theme> {
        self.theme = self.theme.toggled();
        save_theme(&mut self.store, self.theme)?;
        Ok(self.theme)
    }

    /// Restore default inputs. History and theme are kept.
    pub fn reset(&mut self) -> Result<()> {
        self.inputs = Inputs::default();
        self.persist_inputs()
    }

    fn persist_inputs(&mut self) -> Result<()> {
        save_inputs(&mut self.store, &self.inputs)
    }
}
