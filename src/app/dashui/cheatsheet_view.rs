//! egui rendering of the prompt cheat sheet.
//!
//! The view owns its [`ViewState`]. Each frame it builds a [`SheetLayout`],
//! draws it, and applies at most one user action after drawing so the
//! layout is never mutated while it is being walked.

use crate::app::catalog::{
    self, CategoryFilter, PrincipleId, QuickTip, PAPER_LABEL, PAPER_URL, SHEET_SUBTITLE,
    SHEET_TITLE,
};
use crate::app::layout::{grid_columns, CardModel, SheetLayout, TabModel};
use crate::app::view_state::ViewState;
use catppuccin_egui::Theme;
use eframe::egui;
use egui::{Align, Color32, CornerRadius, Layout, Margin, RichText, Stroke, Ui};

/// Interaction collected while drawing a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetAction {
    SelectCategory(CategoryFilter),
    Toggle(PrincipleId),
}

#[derive(Debug, Default)]
pub struct CheatSheetView {
    state: ViewState,
}

impl CheatSheetView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn layout(&self) -> SheetLayout {
        SheetLayout::build(&self.state)
    }

    pub fn apply(&mut self, action: SheetAction) {
        match action {
            SheetAction::SelectCategory(key) => self.state.select_category(key),
            SheetAction::Toggle(id) => {
                self.state.toggle(id);
            }
        }
    }

    /// Select the tab at `index` in display order. Out of range is ignored.
    pub fn select_tab_index(&mut self, index: usize) {
        if let Some(key) = CategoryFilter::TABS.get(index) {
            self.apply(SheetAction::SelectCategory(*key));
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, palette: &Theme) {
        let layout = self.layout();
        let mut action = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                header_ui(ui, palette);
                ui.add_space(16.0);
                if let Some(key) = tabs_ui(ui, &layout.tabs, palette) {
                    action = Some(SheetAction::SelectCategory(key));
                }
                ui.add_space(12.0);
                if let Some(id) = cards_ui(ui, &layout.cards, palette) {
                    action = Some(SheetAction::Toggle(id));
                }
                ui.add_space(16.0);
                footer_ui(ui, catalog::quick_tips(), palette);
            });

        if let Some(action) = action {
            self.apply(action);
        }
    }
}

/// Resolve a catalog color tag to the current theme.
pub fn accent_color(palette: &Theme, color_tag: &str) -> Color32 {
    match color_tag {
        "blue" => palette.blue,
        "green" => palette.green,
        "purple" => palette.mauve,
        "orange" => palette.peach,
        "red" => palette.red,
        _ => palette.overlay1,
    }
}

fn header_ui(ui: &mut Ui, palette: &Theme) {
    ui.vertical_centered(|ui| {
        ui.add_space(8.0);
        ui.label(
            RichText::new(SHEET_TITLE)
                .size(30.0)
                .strong()
                .color(palette.text),
        );
        ui.add_space(6.0);
        ui.label(
            RichText::new(SHEET_SUBTITLE)
                .size(16.0)
                .color(palette.subtext0),
        );
        ui.add_space(6.0);
        ui.hyperlink_to(
            RichText::new(format!("📄 {}", PAPER_LABEL))
                .small()
                .color(palette.blue),
            PAPER_URL,
        );
    });
}

fn tabs_ui(ui: &mut Ui, tabs: &[TabModel], palette: &Theme) -> Option<CategoryFilter> {
    let mut selected = None;

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);
        for tab in tabs {
            let button = if tab.active {
                egui::Button::new(RichText::new(&tab.label).strong().color(palette.text))
                    .fill(accent_color(palette, tab.color_tag).gamma_multiply(0.35))
                    .stroke(Stroke::new(1.0, palette.overlay1))
            } else {
                egui::Button::new(RichText::new(&tab.label).color(palette.subtext0))
                    .fill(palette.base)
                    .stroke(Stroke::new(1.0, palette.surface1))
            };

            let response = ui.add(
                button
                    .selected(tab.active)
                    .corner_radius(CornerRadius::same(6))
                    .min_size(egui::vec2(0.0, 30.0)),
            );
            if response.clicked() {
                selected = Some(tab.key);
            }
        }
    });

    selected
}

fn cards_ui(ui: &mut Ui, cards: &[CardModel], palette: &Theme) -> Option<PrincipleId> {
    let columns = grid_columns(ui.available_width());
    let mut toggled = None;

    for row in cards.chunks(columns) {
        ui.columns(columns, |cols| {
            for (col, card) in cols.iter_mut().zip(row) {
                if card_ui(col, card, palette) {
                    toggled = Some(card.id);
                }
            }
        });
        ui.add_space(8.0);
    }

    toggled
}

/// Draw one card. Returns `true` when its toggle was clicked.
fn card_ui(ui: &mut Ui, card: &CardModel, palette: &Theme) -> bool {
    let mut clicked = false;

    egui::Frame::new()
        .fill(palette.base)
        .stroke(Stroke::new(1.0, palette.surface1))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!(" {} ", card.badge))
                        .small()
                        .strong()
                        .color(palette.base)
                        .background_color(palette.text),
                );
                ui.label(RichText::new(card.title).strong().color(palette.text));

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let hint = if card.is_expanded() {
                        "Hide example"
                    } else {
                        "Show example"
                    };
                    let toggle = egui::Button::new(
                        RichText::new(card.toggle_glyph)
                            .size(16.0)
                            .color(palette.overlay1),
                    )
                    .frame(false);
                    if ui.add(toggle).on_hover_text(hint).clicked() {
                        clicked = true;
                    }
                });
            });

            ui.add_space(4.0);
            ui.label(
                RichText::new(card.description)
                    .small()
                    .color(palette.subtext0),
            );

            if let Some(example) = card.example {
                ui.add_space(8.0);
                example_ui(ui, example, palette);
            }
        });

    clicked
}

fn example_ui(ui: &mut Ui, example: &str, palette: &Theme) {
    egui::Frame::new()
        .fill(palette.mantle)
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new("EXAMPLE:")
                    .small()
                    .strong()
                    .color(palette.subtext1),
            );
            ui.add_space(4.0);
            egui::Frame::new()
                .fill(palette.base)
                .stroke(Stroke::new(1.0, palette.surface1))
                .corner_radius(CornerRadius::same(4))
                .inner_margin(Margin::same(8))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(
                        RichText::new(example)
                            .monospace()
                            .small()
                            .color(palette.text),
                    );
                });
        });
}

fn footer_ui(ui: &mut Ui, tips: &[QuickTip], palette: &Theme) {
    egui::Frame::new()
        .fill(palette.mantle)
        .stroke(Stroke::new(1.0, palette.surface1))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new("🚀 Quick Implementation Tips")
                    .strong()
                    .color(palette.text),
            );
            ui.add_space(8.0);

            let columns = grid_columns(ui.available_width());
            for row in tips.chunks(columns) {
                ui.columns(columns, |cols| {
                    for (col, tip) in cols.iter_mut().zip(row) {
                        col.horizontal_wrapped(|ui| {
                            ui.label(
                                RichText::new(format!("{}:", tip.label))
                                    .strong()
                                    .color(accent_color(palette, tip.color_tag)),
                            );
                            ui.label(tip.text);
                        });
                    }
                });
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_colors_follow_theme() {
        let palette = catppuccin_egui::MOCHA;
        assert_eq!(accent_color(&palette, "blue"), palette.blue);
        assert_eq!(accent_color(&palette, "purple"), palette.mauve);
        assert_eq!(accent_color(&palette, "orange"), palette.peach);
        assert_eq!(accent_color(&palette, "gray"), palette.overlay1);
        assert_eq!(accent_color(&palette, "unknown"), palette.overlay1);
    }

    #[test]
    fn select_tab_index_ignores_out_of_range() {
        let mut view = CheatSheetView::new();
        view.select_tab_index(2);
        assert_eq!(
            view.state().active_category(),
            CategoryFilter::Only(catalog::CategoryKey::Clarity)
        );
        view.select_tab_index(6);
        assert_eq!(
            view.state().active_category(),
            CategoryFilter::Only(catalog::CategoryKey::Clarity)
        );
    }

    #[test]
    fn apply_toggle_keeps_tab() {
        let mut view = CheatSheetView::new();
        view.apply(SheetAction::SelectCategory(CategoryFilter::Only(
            catalog::CategoryKey::Execution,
        )));
        view.apply(SheetAction::Toggle(18));
        assert!(view.state().is_expanded(18));
        assert_eq!(view.layout().cards.len(), 7);
    }
}
