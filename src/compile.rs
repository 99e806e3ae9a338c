//! Checklist compilation: filter, quantify, and merge catalog items.
use crate::catalog::{Catalog, Item};
use crate::predicate::matches;
use crate::quantity::resolve_qty;
use crate::selection::SelectionState;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// One merged checklist entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedItem {
    pub id: String,
    pub label: String,
    pub group: String,
    pub qty: f64,
    pub checked: bool,
}

/// Resolve `items` against the selection.
///
/// Entries whose predicate fails or whose quantity is not positive are
/// skipped. Entries sharing an id merge into the first one: quantities add
/// up while label, group, and checked state stay as first seen. Output keeps
/// first-occurrence order.
pub fn compile(
    items: &[Item],
    nights: u8,
    active_tags: &BTreeSet<String>,
    checked: &BTreeMap<String, bool>,
) -> Vec<ResolvedItem> {
    let mut resolved: Vec<ResolvedItem> = Vec::new();
    let mut index_by_id: HashMap<&str, usize> = HashMap::new();

    for item in items {
        if !matches(&item.when, active_tags) {
            continue;
        }
        let qty = resolve_qty(&item.qty, nights);
        if qty <= 0.0 {
            continue;
        }
        match index_by_id.get(item.id.as_str()) {
            Some(&index) => resolved[index].qty += qty,
            None => {
                index_by_id.insert(&item.id, resolved.len());
                resolved.push(ResolvedItem {
                    id: item.id.clone(),
                    label: item.label.clone(),
                    group: item.group.clone(),
                    qty,
                    checked: checked.get(&item.id).copied().unwrap_or(false),
                });
            }
        }
    }

    tracing::debug!(
        catalog_items = items.len(),
        resolved = resolved.len(),
        nights,
        "compiled checklist"
    );
    resolved
}

/// [`compile`] over a whole catalog and selection.
pub fn compile_selection(catalog: &Catalog, selection: &SelectionState) -> Vec<ResolvedItem> {
    compile(
        &catalog.items,
        selection.nights(),
        &selection.active_tags,
        &selection.checked,
    )
}

#[cfg(test)]
#[path = "compile_tests.rs"]
mod tests;
