use super::window_focus::{FocusableWindow, SimpleShowParams, WindowFocusManager};
use crate::app::catalog::{self, CategoryFilter, PAPER_URL};
use eframe::egui;
use egui::{Context, RichText, Ui};

/// Shortcut keys for the category tabs, in tab display order.
pub const TAB_SHORTCUTS: [egui::Key; 6] = [
    egui::Key::Num1,
    egui::Key::Num2,
    egui::Key::Num3,
    egui::Key::Num4,
    egui::Key::Num5,
    egui::Key::Num6,
];

#[derive(Debug, Default)]
pub struct HelpWindow {
    pub open: bool,
}

impl HelpWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn show_with_focus(&mut self, ctx: &Context, bring_to_front: bool) {
        if !self.open {
            return;
        }

        let available = ctx.available_rect().size();
        let window = egui::Window::new("Help")
            .open(&mut self.open)
            .fixed_size([available.x.min(460.0), available.y.min(420.0)])
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .resizable(false)
            .collapsible(false);

        WindowFocusManager::apply_focus_order(window, bring_to_front).show(ctx, |ui| {
            Self::ui_content(ui);
        });
    }

    fn ui_content(ui: &mut Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(5.0);
            ui.heading("Keyboard Shortcuts");
            ui.add_space(5.0);

            for (key, filter) in TAB_SHORTCUTS.iter().zip(CategoryFilter::TABS) {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(key.symbol_or_name()).strong());
                    ui.label(format!("- Show {}", catalog::category(filter).name));
                });
            }
            ui.horizontal(|ui| {
                ui.label(RichText::new("F1").strong());
                ui.label("- Toggle this help");
            });
            ui.horizontal(|ui| {
                ui.label(RichText::new("Escape").strong());
                ui.label("- Close this help");
            });

            ui.add_space(15.0);
            ui.heading("Using the sheet");
            ui.add_space(5.0);
            ui.label("Click + on a card to show its example and − to hide it.");
            ui.label("Expanded cards stay expanded when you switch tabs.");

            ui.add_space(15.0);
            ui.hyperlink_to("Source paper", PAPER_URL);
            ui.label(
                RichText::new(format!(
                    "v{} ({})",
                    env!("CARGO_PKG_VERSION"),
                    env!("GIT_COMMIT")
                ))
                .small()
                .weak(),
            );
        });
    }
}

impl FocusableWindow for HelpWindow {
    type ShowParams = SimpleShowParams;

    fn window_id(&self) -> &'static str {
        "help_window"
    }

    fn window_title(&self) -> String {
        "Help".to_string()
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn show_with_focus(&mut self, ctx: &egui::Context, _params: Self::ShowParams, bring_to_front: bool) {
        HelpWindow::show_with_focus(self, ctx, bring_to_front);
    }
}
