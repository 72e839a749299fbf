use crate::app::dashui::app::ThemeChoice;
use eframe::egui;
use egui::RichText;

#[derive(Debug, PartialEq)]
pub enum MenuAction {
    None,
    ThemeChanged,
    HelpToggled,
}

pub fn build_menu(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    theme: &mut ThemeChoice,
    help_open: &mut bool,
) -> MenuAction {
    let mut menu_action = MenuAction::None;
    let original_theme = *theme;

    ui.menu_button(RichText::new("🎨").size(18.0), |ui| {
        for choice in ThemeChoice::ALL {
            if ui
                .selectable_label(*theme == choice, choice.to_string())
                .clicked()
            {
                catppuccin_egui::set_theme(ctx, choice.palette());
                *theme = choice;
                ui.close();
            }
        }
    });

    if original_theme != *theme {
        menu_action = MenuAction::ThemeChanged;
    }

    ui.separator();

    if ui.toggle_value(help_open, "Help").changed() {
        menu_action = MenuAction::HelpToggled;
    }

    menu_action
}
