//! Selection state: trip length, active tags, and packed items.
//!
//! The state is an owned value. Commands mutate it one change at a time and
//! the engine reads it by reference; nothing here is global.
use crate::catalog::Catalog;
use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

pub const MIN_NIGHTS: u8 = 0;
/// Upper bound of the nights range; it stands for "10 or more".
pub const MAX_NIGHTS: u8 = 10;
pub const DEFAULT_NIGHTS: u8 = 1;

/// Mutable user input for one checklist session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    nights: u8,
    pub active_tags: BTreeSet<String>,
    pub checked: BTreeMap<String, bool>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            nights: DEFAULT_NIGHTS,
            active_tags: BTreeSet::new(),
            checked: BTreeMap::new(),
        }
    }
}

impl SelectionState {
    pub fn nights(&self) -> u8 {
        self.nights
    }

    /// Set the trip length, rounding and clamping into range.
    pub fn set_nights(&mut self, nights: f64) {
        self.nights = clamp_nights(nights);
    }

    pub fn set_tag(&mut self, tag_id: &str, active: bool) {
        if active {
            self.active_tags.insert(tag_id.to_string());
        } else {
            self.active_tags.remove(tag_id);
        }
    }

    pub fn set_checked(&mut self, item_id: &str, checked: bool) {
        self.checked.insert(item_id.to_string(), checked);
    }

    pub fn reset(&mut self) {
        *self = SelectionState::default();
    }

    /// Serializable form written to the state store.
    pub fn to_persisted(&self) -> PersistedSelection {
        PersistedSelection {
            nights: self.nights,
            tags: self.active_tags.iter().cloned().collect(),
            checked: self.checked.clone(),
        }
    }

    /// Rebuild state from persisted text.
    ///
    /// Unparsable text or a non-object document yields the defaults. Fields
    /// that are present but malformed keep their default value. Tag ids the
    /// catalog no longer declares are dropped.
    pub fn restore(raw: &str, catalog: &Catalog) -> SelectionState {
        let mut state = SelectionState::default();
        let parsed = match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(parsed)) => parsed,
            Ok(_) => {
                tracing::warn!("persisted selection is not an object; using defaults");
                return state;
            }
            Err(err) => {
                tracing::warn!(error = %err, "persisted selection unreadable; using defaults");
                return state;
            }
        };

        if let Some(nights) = parsed.get("nights").and_then(Value::as_f64) {
            state.set_nights(nights);
        }
        if let Some(tags) = parsed.get("tags").and_then(Value::as_array) {
            let (kept, dropped): (Vec<&str>, Vec<&str>) = tags
                .iter()
                .filter_map(Value::as_str)
                .partition(|id| catalog.has_tag(id));
            if !dropped.is_empty() {
                tracing::debug!(?dropped, "dropping tags missing from catalog");
            }
            state.active_tags = kept.into_iter().map(str::to_string).collect();
        }
        if let Some(checked) = parsed.get("checked").and_then(Value::as_object) {
            state.checked = checked
                .iter()
                .map(|(id, flag)| (id.clone(), truthy(flag)))
                .collect();
        }
        state
    }
}

/// Persisted shape of [`SelectionState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersistedSelection {
    pub nights: u8,
    pub tags: Vec<String>,
    pub checked: BTreeMap<String, bool>,
}

/// Round to the nearest integer (halves up) and clamp into the nights range.
/// Non-finite input falls back to the default trip length.
pub fn clamp_nights(value: f64) -> u8 {
    if !value.is_finite() {
        return DEFAULT_NIGHTS;
    }
    let mut rounded = value.round();
    // `round` takes negative halves away from zero; they go up instead.
    if value - rounded == 0.5 {
        rounded += 1.0;
    }
    let clamped = rounded.clamp(f64::from(MIN_NIGHTS), f64::from(MAX_NIGHTS));
    // In range after the clamp above.
    clamped as u8
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod tests;
