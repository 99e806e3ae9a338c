//! Text and JSON views of a compiled checklist.
//!
//! Rendering only consumes engine output; it never decides inclusion,
//! quantity, or order.
use crate::catalog::Catalog;
use crate::group::{display_label, ItemGroup};
use crate::selection::{SelectionState, MAX_NIGHTS};
use serde::Serialize;

pub const EMPTY_STATE_MESSAGE: &str =
    "Pro zvolené parametry není potřeba nic balit. Zkuste upravit štítky nebo počet nocí.";

/// Human label for the trip length.
pub fn nights_label(nights: u8) -> String {
    match nights {
        0 => "bez přenocování".to_string(),
        MAX_NIGHTS => format!("{MAX_NIGHTS}+"),
        other => other.to_string(),
    }
}

/// Serializable checklist snapshot for `--json` output.
#[derive(Debug, Serialize)]
pub struct ChecklistView {
    pub nights: u8,
    pub nights_label: String,
    pub tags: Vec<String>,
    pub groups: Vec<GroupView>,
}

#[derive(Debug, Serialize)]
pub struct GroupView {
    pub name: String,
    pub items: Vec<ItemView>,
}

#[derive(Debug, Serialize)]
pub struct ItemView {
    pub id: String,
    pub label: String,
    pub display: String,
    pub qty: f64,
    pub checked: bool,
}

impl ChecklistView {
    pub fn new(state: &SelectionState, groups: &[ItemGroup]) -> Self {
        Self {
            nights: state.nights(),
            nights_label: nights_label(state.nights()),
            tags: state.active_tags.iter().cloned().collect(),
            groups: groups
                .iter()
                .map(|group| GroupView {
                    name: group.name.clone(),
                    items: group
                        .items
                        .iter()
                        .map(|item| ItemView {
                            id: item.id.clone(),
                            label: item.label.clone(),
                            display: display_label(item),
                            qty: item.qty,
                            checked: item.checked,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// Plain-text checklist: a header with the trip parameters, then one block
/// per group with a checkbox per item.
pub fn render_checklist(
    catalog: &Catalog,
    state: &SelectionState,
    groups: &[ItemGroup],
) -> String {
    let mut out = String::new();
    push_line(&mut out, &format!("Nocí: {}", nights_label(state.nights())));
    push_line(&mut out, &format!("Štítky: {}", active_tag_labels(catalog, state)));

    if groups.is_empty() {
        push_line(&mut out, "");
        push_line(&mut out, EMPTY_STATE_MESSAGE);
        return out;
    }

    for group in groups {
        push_line(&mut out, "");
        push_line(&mut out, &group.name.to_uppercase());
        for item in &group.items {
            let mark = if item.checked { "x" } else { " " };
            push_line(&mut out, &format!("  [{mark}] {}", display_label(item)));
        }
    }
    out
}

/// Catalog tags with their selection mark, in catalog order.
pub fn render_tags(catalog: &Catalog, state: &SelectionState) -> String {
    let mut out = String::new();
    for tag in &catalog.tags {
        let mark = if state.active_tags.contains(&tag.id) {
            "x"
        } else {
            " "
        };
        push_line(&mut out, &format!("[{mark}] {} ({})", tag.label, tag.id));
    }
    out
}

fn active_tag_labels(catalog: &Catalog, state: &SelectionState) -> String {
    let labels: Vec<&str> = catalog
        .tags
        .iter()
        .filter(|tag| state.active_tags.contains(&tag.id))
        .map(|tag| tag.label.as_str())
        .collect();
    if labels.is_empty() {
        "žádné".to_string()
    } else {
        labels.join(", ")
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}
