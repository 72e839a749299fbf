//! Deterministic projection of catalog and view state into the display tree
//! the egui renderer walks.

use crate::app::catalog::{self, Category, CategoryFilter, Principle, PrincipleId};
use crate::app::view_state::ViewState;

pub const COLLAPSED_GLYPH: &str = "+";
pub const EXPANDED_GLYPH: &str = "−";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabModel {
    pub key: CategoryFilter,
    pub label: String,
    pub color_tag: &'static str,
    pub active: bool,
}

impl TabModel {
    fn from_category(category: &Category, active: CategoryFilter) -> Self {
        Self {
            key: category.key,
            label: format!("{} ({})", category.name, category.count),
            color_tag: category.color_tag,
            active: category.key == active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardModel {
    pub id: PrincipleId,
    pub badge: String,
    pub title: &'static str,
    pub description: &'static str,
    pub toggle_glyph: &'static str,
    /// Present only while the card is expanded.
    pub example: Option<&'static str>,
}

impl CardModel {
    fn from_principle(principle: &Principle, state: &ViewState) -> Self {
        let expanded = state.is_expanded(principle.id);
        Self {
            id: principle.id,
            badge: principle.id.to_string(),
            title: principle.title,
            description: principle.description,
            toggle_glyph: if expanded {
                EXPANDED_GLYPH
            } else {
                COLLAPSED_GLYPH
            },
            example: expanded.then_some(principle.example),
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.example.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLayout {
    pub tabs: Vec<TabModel>,
    pub cards: Vec<CardModel>,
}

impl SheetLayout {
    pub fn build(state: &ViewState) -> Self {
        Self::build_from(catalog::principles(), catalog::categories(), state)
    }

    pub fn build_from(
        principles: &[Principle],
        categories: &[Category],
        state: &ViewState,
    ) -> Self {
        let active = state.active_category();
        Self {
            tabs: categories
                .iter()
                .map(|c| TabModel::from_category(c, active))
                .collect(),
            cards: state
                .visible(principles)
                .into_iter()
                .map(|p| CardModel::from_principle(p, state))
                .collect(),
        }
    }

    pub fn active_tab(&self) -> Option<&TabModel> {
        self.tabs.iter().find(|t| t.active)
    }

    pub fn card(&self, id: PrincipleId) -> Option<&CardModel> {
        self.cards.iter().find(|c| c.id == id)
    }
}

/// Number of grid columns for a given available width, in points.
pub fn grid_columns(available_width: f32) -> usize {
    if available_width >= 1024.0 {
        3
    } else if available_width >= 768.0 {
        2
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints() {
        assert_eq!(grid_columns(320.0), 1);
        assert_eq!(grid_columns(767.9), 1);
        assert_eq!(grid_columns(768.0), 2);
        assert_eq!(grid_columns(1023.0), 2);
        assert_eq!(grid_columns(1280.0), 3);
    }

    #[test]
    fn badge_is_the_id() {
        let layout = SheetLayout::build(&ViewState::new());
        assert_eq!(layout.cards[0].badge, "1");
        assert_eq!(layout.cards[25].badge, "26");
    }
}
