//! Grouping and ordering of compiled checklist items.
use crate::catalog::GroupPriorities;
use crate::collate::CzechCollator;
use crate::compile::ResolvedItem;
use serde::Serialize;
use std::collections::HashMap;

/// Items of one group, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemGroup {
    pub name: String,
    pub items: Vec<ResolvedItem>,
}

/// Partition resolved items by group and order both levels.
///
/// Groups sort by priority rank (unranked groups last), then by Czech
/// collation of the name. Items sort by label under the same collation; the
/// sort is stable, so equal labels keep compile order.
pub fn group_and_sort(
    resolved: Vec<ResolvedItem>,
    priorities: &GroupPriorities,
    collator: &CzechCollator,
) -> Vec<ItemGroup> {
    let mut groups: Vec<ItemGroup> = Vec::new();
    let mut index_by_name: HashMap<String, usize> = HashMap::new();
    for item in resolved {
        match index_by_name.get(&item.group) {
            Some(&index) => groups[index].items.push(item),
            None => {
                index_by_name.insert(item.group.clone(), groups.len());
                groups.push(ItemGroup {
                    name: item.group.clone(),
                    items: vec![item],
                });
            }
        }
    }

    groups.sort_by(|a, b| {
        priorities
            .rank(&a.name)
            .total_cmp(&priorities.rank(&b.name))
            .then_with(|| collator.compare(&a.name, &b.name))
    });
    for group in &mut groups {
        group.items.sort_by(|a, b| collator.compare(&a.label, &b.label));
    }
    groups
}

/// Display text for a checklist line: `"{label} × {qty}"` above one.
pub fn display_label(item: &ResolvedItem) -> String {
    if item.qty > 1.0 {
        format!("{} × {}", item.label, item.qty)
    } else {
        item.label.clone()
    }
}

#[cfg(test)]
#[path = "group_tests.rs"]
mod tests;
