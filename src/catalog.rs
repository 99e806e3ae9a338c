//! Catalog model: tags, conditional items, and group priorities.
//!
//! Catalogs arrive as loosely-shaped JSON. Everything here normalizes that
//! input into closed types once, so the engine never has to second-guess a
//! field again.
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Marker inside an `any` list that matches every selection.
pub const WILDCARD_TAG: &str = "*";

/// User-selectable trip attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub id: String,
    pub label: String,
}

/// Inclusion predicate attached to an item.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WhenRule {
    /// Absent or non-object rule.
    #[default]
    Always,
    Any(Vec<String>),
    All(Vec<String>),
}

/// Quantity rule attached to an item.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum QtyRule {
    /// Absent or non-object rule; resolves to one.
    #[default]
    Default,
    Fixed { value: f64 },
    PerNight { value: f64, cap: Option<f64> },
    /// Object rule with a missing or unrecognized `type`.
    Other { value: f64 },
}

/// One potential packing entry. Entries sharing an `id` merge when compiled.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: String,
    pub label: String,
    pub group: String,
    pub when: WhenRule,
    pub qty: QtyRule,
}

/// Sort rank per group name; only finite ranks are kept.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupPriorities(BTreeMap<String, f64>);

impl GroupPriorities {
    /// Rank for `group`, or `+inf` when the group is unranked.
    pub fn rank(&self, group: &str) -> f64 {
        self.0.get(group).copied().unwrap_or(f64::INFINITY)
    }

    pub fn insert(&mut self, group: impl Into<String>, rank: f64) {
        if rank.is_finite() {
            self.0.insert(group.into(), rank);
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for GroupPriorities {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut priorities = GroupPriorities::default();
        for (group, rank) in iter {
            priorities.insert(group, rank);
        }
        priorities
    }
}

/// Immutable catalog loaded once per session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    pub tags: Vec<Tag>,
    pub items: Vec<Item>,
    pub group_priorities: GroupPriorities,
}

impl Catalog {
    /// Normalize a raw catalog document. Never fails: malformed sections
    /// collapse to empty ones and malformed entries are skipped.
    pub fn from_value(raw: &Value) -> Catalog {
        let tags: Vec<Tag> = raw
            .get("tags")
            .and_then(Value::as_array)
            .map(|entries| entries.iter().filter_map(tag_from_value).collect())
            .unwrap_or_default();
        let items: Vec<Item> = raw
            .get("items")
            .and_then(Value::as_array)
            .map(|entries| entries.iter().filter_map(item_from_value).collect())
            .unwrap_or_default();
        let group_priorities = raw
            .get("groupPriorities")
            .and_then(Value::as_object)
            .map(priorities_from_map)
            .unwrap_or_default();
        Catalog {
            tags,
            items,
            group_priorities,
        }
    }

    /// Parse catalog JSON text. Only syntax errors fail; shape problems are
    /// normalized away by [`Catalog::from_value`].
    pub fn from_json_str(text: &str) -> Result<Catalog> {
        let raw: Value = serde_json::from_str(text).context("parse catalog JSON")?;
        Ok(Catalog::from_value(&raw))
    }

    pub fn has_tag(&self, id: &str) -> bool {
        self.tags.iter().any(|tag| tag.id == id)
    }
}

/// Read and normalize a catalog file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read catalog {}", path.display()))?;
    let catalog = Catalog::from_json_str(&text)
        .with_context(|| format!("load catalog {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        tags = catalog.tags.len(),
        items = catalog.items.len(),
        groups = catalog.group_priorities.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

impl From<&Value> for WhenRule {
    fn from(raw: &Value) -> Self {
        let Some(rule) = raw.as_object() else {
            return WhenRule::Always;
        };
        if let Some(any) = rule.get("any").and_then(Value::as_array) {
            return WhenRule::Any(string_entries(any));
        }
        if let Some(all) = rule.get("all").and_then(Value::as_array) {
            return WhenRule::All(string_entries(all));
        }
        WhenRule::Always
    }
}

impl From<&Value> for QtyRule {
    fn from(raw: &Value) -> Self {
        let rule = match raw {
            Value::Object(rule) => rule,
            // Arrays are objects without `type` or `value`.
            Value::Array(_) => return QtyRule::Other { value: 0.0 },
            _ => return QtyRule::Default,
        };
        let value = rule.get("value").map(loose_number).unwrap_or(0.0);
        match rule.get("type").and_then(Value::as_str) {
            Some("fixed") => QtyRule::Fixed { value },
            Some("perNight") => QtyRule::PerNight {
                value,
                cap: rule
                    .get("cap")
                    .and_then(Value::as_f64)
                    .filter(|cap| cap.is_finite()),
            },
            _ => QtyRule::Other { value },
        }
    }
}

/// Loose numeric coercion for rule values, read the way a browser form
/// field would be. Anything that does not read as a number becomes zero.
pub fn loose_number(raw: &Value) -> f64 {
    let number = match raw {
        Value::Number(number) => number.as_f64().unwrap_or(0.0),
        Value::Bool(flag) => f64::from(u8::from(*flag)),
        Value::String(text) => number_from_text(text),
        // A single-element list reads as its element's text.
        Value::Array(values) => match values.as_slice() {
            [] => 0.0,
            [only @ (Value::Number(_) | Value::String(_) | Value::Array(_))] => {
                loose_number(only)
            }
            _ => 0.0,
        },
        Value::Null | Value::Object(_) => 0.0,
    };
    if number.is_nan() {
        0.0
    } else {
        number
    }
}

fn number_from_text(text: &str) -> f64 {
    let trimmed = text.trim_matches(|ch: char| ch.is_whitespace() || ch == '\u{feff}');
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    let radix = match trimmed.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return radix_digits(&trimmed[2..], radix).unwrap_or(0.0);
    }
    // `str::parse` also takes `inf` and `nan` spellings; plain decimals only.
    let decimal = trimmed
        .chars()
        .all(|ch| ch.is_ascii_digit() || matches!(ch, '.' | 'e' | 'E' | '+' | '-'));
    if !decimal {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(0.0)
}

fn radix_digits(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0, |acc: f64, ch| {
        ch.to_digit(radix)
            .map(|digit| acc * f64::from(radix) + f64::from(digit))
    })
}

fn string_entries(values: &[Value]) -> Vec<String> {
    // Non-string entries can never equal a tag id, so dropping them is lossless.
    values
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
}

fn tag_from_value(raw: &Value) -> Option<Tag> {
    let Some(id) = raw.get("id").and_then(Value::as_str) else {
        tracing::warn!(entry = %raw, "skipping catalog tag without a string id");
        return None;
    };
    let label = raw
        .get("label")
        .and_then(Value::as_str)
        .unwrap_or(id)
        .to_string();
    Some(Tag {
        id: id.to_string(),
        label,
    })
}

fn item_from_value(raw: &Value) -> Option<Item> {
    let Some(id) = raw.get("id").and_then(Value::as_str) else {
        tracing::warn!(entry = %raw, "skipping catalog item without a string id");
        return None;
    };
    let label = raw
        .get("label")
        .and_then(Value::as_str)
        .unwrap_or(id)
        .to_string();
    let group = raw
        .get("group")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    Some(Item {
        id: id.to_string(),
        label,
        group,
        when: raw.get("when").map(WhenRule::from).unwrap_or_default(),
        qty: raw.get("qty").map(QtyRule::from).unwrap_or_default(),
    })
}

fn priorities_from_map(raw: &Map<String, Value>) -> GroupPriorities {
    raw.iter()
        .filter_map(|(group, rank)| rank.as_f64().map(|rank| (group.as_str(), rank)))
        .collect()
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
