use super::{display_label, group_and_sort, ItemGroup};
use crate::catalog::{Catalog, GroupPriorities};
use crate::collate::CzechCollator;
use crate::compile::{compile_selection, ResolvedItem};
use crate::selection::SelectionState;
use serde_json::json;

fn resolved(id: &str, label: &str, group: &str, qty: f64) -> ResolvedItem {
    ResolvedItem {
        id: id.to_string(),
        label: label.to_string(),
        group: group.to_string(),
        qty,
        checked: false,
    }
}

fn sort(items: Vec<ResolvedItem>, priorities: &GroupPriorities) -> Vec<ItemGroup> {
    let collator = CzechCollator::new().expect("collator");
    group_and_sort(items, priorities, &collator)
}

fn group_names(groups: &[ItemGroup]) -> Vec<&str> {
    groups.iter().map(|group| group.name.as_str()).collect()
}

#[test]
fn ranked_groups_precede_unranked() {
    let priorities: GroupPriorities = [("Oblečení", 1.0), ("Technika", 2.0)].into_iter().collect();
    let items = vec![
        resolved("aspirin", "Aspirin", "Léky", 1.0),
        resolved("phone", "Telefon", "Technika", 1.0),
        resolved("shirt", "Tričko", "Oblečení", 3.0),
    ];
    let groups = sort(items, &priorities);
    assert_eq!(group_names(&groups), vec!["Oblečení", "Technika", "Léky"]);
}

#[test]
fn unranked_groups_tie_break_by_collation() {
    let items = vec![
        resolved("a", "A", "Chata", 1.0),
        resolved("b", "B", "Hygiena", 1.0),
        resolved("c", "C", "Doklady", 1.0),
    ];
    let groups = sort(items, &GroupPriorities::default());
    assert_eq!(group_names(&groups), vec!["Doklady", "Hygiena", "Chata"]);
}

#[test]
fn equal_ranks_tie_break_by_collation() {
    let priorities: GroupPriorities = [("Obuv", 1.0), ("Jídlo", 1.0)].into_iter().collect();
    let items = vec![
        resolved("boots", "Boty", "Obuv", 1.0),
        resolved("bread", "Chleba", "Jídlo", 1.0),
    ];
    let groups = sort(items, &priorities);
    assert_eq!(group_names(&groups), vec!["Jídlo", "Obuv"]);
}

#[test]
fn items_sort_by_label_within_group() {
    let items = vec![
        resolved("tea", "Čaj", "Jídlo", 1.0),
        resolved("bread", "Chleba", "Jídlo", 1.0),
        resolved("sugar", "Cukr", "Jídlo", 1.0),
        resolved("honey", "Med", "Jídlo", 1.0),
        resolved("cup", "Hrnek", "Jídlo", 1.0),
    ];
    let groups = sort(items, &GroupPriorities::default());
    let labels: Vec<&str> = groups[0]
        .items
        .iter()
        .map(|item| item.label.as_str())
        .collect();
    assert_eq!(labels, vec!["Cukr", "Čaj", "Hrnek", "Chleba", "Med"]);
}

#[test]
fn labels_with_punctuation_and_digits_sort_before_letters() {
    let items = vec![
        resolved("rope", "Uzel", "Výbava", 1.0),
        resolved("book", "„Kniha“", "Výbava", 1.0),
        resolved("map", "a–z mapa", "Výbava", 1.0),
        resolved("spoon", "1 lžíce", "Výbava", 1.0),
        resolved("salt", "Sůl", "Výbava", 1.0),
    ];
    let groups = sort(items, &GroupPriorities::default());
    let labels: Vec<&str> = groups[0]
        .items
        .iter()
        .map(|item| item.label.as_str())
        .collect();
    assert_eq!(labels, vec!["„Kniha“", "1 lžíce", "a–z mapa", "Sůl", "Uzel"]);
}

#[test]
fn grouping_drops_nothing() {
    let items = vec![
        resolved("a", "A", "X", 1.0),
        resolved("b", "B", "Y", 2.0),
        resolved("c", "C", "X", 1.0),
        resolved("d", "D", "", 1.0),
    ];
    let groups = sort(items, &GroupPriorities::default());
    let total: usize = groups.iter().map(|group| group.items.len()).sum();
    assert_eq!(total, 4);
    assert_eq!(group_names(&groups), vec!["", "X", "Y"]);
}

#[test]
fn display_label_shows_quantity_above_one() {
    assert_eq!(display_label(&resolved("tent", "Stan", "V", 1.0)), "Stan");
    assert_eq!(
        display_label(&resolved("socks", "Ponožky", "O", 5.0)),
        "Ponožky × 5"
    );
    assert_eq!(
        display_label(&resolved("water", "Voda", "J", 1.5)),
        "Voda × 1.5"
    );
    assert_eq!(display_label(&resolved("gel", "Gel", "H", 0.5)), "Gel");
}

#[test]
fn recompute_is_idempotent() {
    let catalog = Catalog::from_value(&json!({
        "tags": [{"id": "hiking", "label": "Turistika"}],
        "groupPriorities": {"Oblečení": 1, "Technika": 2},
        "items": [
            {"id": "socks", "label": "Ponožky", "group": "Oblečení",
             "qty": {"type": "perNight", "value": 1, "cap": 7}},
            {"id": "socks", "label": "Ponožky", "group": "Oblečení",
             "when": {"any": ["hiking"]}, "qty": {"type": "fixed", "value": 2}},
            {"id": "lamp", "label": "Čelovka", "group": "Technika", "when": {"any": ["*"]}},
            {"id": "pills", "label": "Léky", "group": "Léky"}
        ]
    }));
    let mut state = SelectionState::default();
    state.set_nights(3.0);
    state.set_tag("hiking", true);

    let first = sort(compile_selection(&catalog, &state), &catalog.group_priorities);
    let second = sort(compile_selection(&catalog, &state), &catalog.group_priorities);
    assert_eq!(
        serde_json::to_string(&first).expect("serialize first"),
        serde_json::to_string(&second).expect("serialize second")
    );
    assert_eq!(group_names(&first), vec!["Oblečení", "Technika", "Léky"]);
    assert_eq!(first[0].items[0].qty, 5.0);
}
