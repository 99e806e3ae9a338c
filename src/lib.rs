//! Packing checklist engine.
//!
//! [`compile::compile`] and [`group::group_and_sort`] are pure functions of a
//! [`catalog::Catalog`] and a [`selection::SelectionState`]; the remaining
//! modules load, persist, and display around them.
pub mod catalog;
pub mod cli;
pub mod collate;
pub mod compile;
pub mod group;
pub mod predicate;
pub mod quantity;
pub mod render;
pub mod selection;
pub mod store;
pub mod workflow;
