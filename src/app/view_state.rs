//! Ephemeral state of the cheat sheet view: the active tab and which cards
//! show their example.
//!
//! State lives for as long as the view that owns it and is never persisted.
//! Both transitions are single-step and independent of each other: switching
//! tabs never collapses a card, and toggling a card never changes the tab.

use crate::app::catalog::{CategoryFilter, CategoryKey, Principle, PrincipleId};
use std::collections::HashMap;

/// Principles visible under `active`, in their original order.
pub fn filter(active: CategoryFilter, principles: &[Principle]) -> Vec<&Principle> {
    principles.iter().filter(|p| active.matches(p)).collect()
}

/// Same as [`filter`] for a raw tab key. Unknown keys select nothing.
pub fn filter_by_key<'a>(key: &str, principles: &'a [Principle]) -> Vec<&'a Principle> {
    match CategoryFilter::parse(key) {
        Some(active) => filter(active, principles),
        None => Vec::new(),
    }
}

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    active_category: CategoryFilter,
    expanded: HashMap<PrincipleId, bool>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_category(&self) -> CategoryFilter {
        self.active_category
    }

    /// Absent ids read as collapsed.
    pub fn is_expanded(&self, id: PrincipleId) -> bool {
        self.expanded.get(&id).copied().unwrap_or(false)
    }

    /// Ids currently expanded, in ascending order.
    pub fn expanded_ids(&self) -> Vec<PrincipleId> {
        let mut ids: Vec<PrincipleId> = self
            .expanded
            .iter()
            .filter_map(|(id, open)| open.then_some(*id))
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Flip one card and return its new flag.
    pub fn toggle(&mut self, id: PrincipleId) -> bool {
        let flag = self.expanded.entry(id).or_insert(false);
        *flag = !*flag;
        trace_debug!("Principle {} expanded: {}", id, *flag);
        *flag
    }

    pub fn select_category(&mut self, key: CategoryFilter) {
        if self.active_category != key {
            trace_debug!("Category tab changed from {} to {}", self.active_category, key);
        }
        self.active_category = key;
    }

    /// Convenience for the keyboard shortcuts and tests.
    pub fn select_only(&mut self, key: CategoryKey) {
        self.select_category(CategoryFilter::Only(key));
    }

    pub fn visible<'a>(&self, principles: &'a [Principle]) -> Vec<&'a Principle> {
        filter(self.active_category, principles)
    }
}

/// Equality is over what a user can observe: a card explicitly collapsed
/// equals one that was never touched.
impl PartialEq for ViewState {
    fn eq(&self, other: &Self) -> bool {
        self.active_category == other.active_category
            && self.expanded_ids() == other.expanded_ids()
    }
}

impl Eq for ViewState {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::catalog::principles;

    #[test]
    fn toggle_returns_new_flag() {
        let mut state = ViewState::new();
        assert!(state.toggle(4));
        assert!(state.is_expanded(4));
        assert!(!state.toggle(4));
        assert!(!state.is_expanded(4));
    }

    #[test]
    fn collapsed_entry_equals_absent_entry() {
        let mut toggled = ViewState::new();
        toggled.toggle(9);
        toggled.toggle(9);
        assert_eq!(toggled, ViewState::new());
    }

    #[test]
    fn expanded_ids_are_sorted() {
        let mut state = ViewState::new();
        for id in [20, 3, 11] {
            state.toggle(id);
        }
        assert_eq!(state.expanded_ids(), vec![3, 11, 20]);
    }

    #[test]
    fn unknown_key_filters_to_nothing() {
        assert!(filter_by_key("bogus", principles()).is_empty());
        assert_eq!(filter_by_key("all", principles()).len(), 26);
        assert_eq!(filter_by_key("motivation", principles()).len(), 4);
    }
}
