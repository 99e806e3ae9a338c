//! Inclusion predicates for catalog items.
use crate::catalog::{WhenRule, WILDCARD_TAG};
use std::collections::BTreeSet;

/// Decide whether an item gated by `when` applies to the active tag set.
///
/// An empty `any` list never matches; an empty `all` list always does.
pub fn matches(when: &WhenRule, active_tags: &BTreeSet<String>) -> bool {
    match when {
        WhenRule::Always => true,
        WhenRule::Any(tags) => tags
            .iter()
            .any(|tag| tag == WILDCARD_TAG || active_tags.contains(tag)),
        WhenRule::All(tags) => tags.iter().all(|tag| active_tags.contains(tag)),
    }
}
