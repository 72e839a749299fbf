use super::cheatsheet_view::CheatSheetView;
use super::help_window::{HelpWindow, TAB_SHORTCUTS};
use super::menu;
use super::window_focus::{FocusableWindow, WindowFocusManager};
use crate::trace_info;
use eframe::egui;

#[derive(serde::Deserialize, serde::Serialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeChoice {
    #[default]
    Latte,
    Frappe,
    Macchiato,
    Mocha,
}

impl ThemeChoice {
    pub const ALL: [ThemeChoice; 4] = [
        ThemeChoice::Latte,
        ThemeChoice::Frappe,
        ThemeChoice::Macchiato,
        ThemeChoice::Mocha,
    ];

    pub fn palette(self) -> catppuccin_egui::Theme {
        match self {
            ThemeChoice::Latte => catppuccin_egui::LATTE,
            ThemeChoice::Frappe => catppuccin_egui::FRAPPE,
            ThemeChoice::Macchiato => catppuccin_egui::MACCHIATO,
            ThemeChoice::Mocha => catppuccin_egui::MOCHA,
        }
    }
}

impl std::fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeChoice::Latte => write!(f, "Latte"),
            ThemeChoice::Frappe => write!(f, "Frappe"),
            ThemeChoice::Macchiato => write!(f, "Macchiato"),
            ThemeChoice::Mocha => write!(f, "Mocha"),
        }
    }
}

/// Top-level eframe application hosting the cheat sheet.
///
/// Only the theme survives a restart. The sheet's tab and expanded cards
/// start fresh on every launch.
#[derive(serde::Deserialize, serde::Serialize, Default)]
#[serde(default)]
pub struct PromptSheetApp {
    pub theme: ThemeChoice,

    #[serde(skip)]
    pub cheatsheet: CheatSheetView,
    #[serde(skip)]
    pub help_window: HelpWindow,
    #[serde(skip)]
    window_focus_manager: WindowFocusManager,
}

impl PromptSheetApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let app: Self = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        trace_info!("Restored theme {}", app.theme);
        app.apply_theme(&cc.egui_ctx);

        app
    }

    fn apply_theme(&self, ctx: &egui::Context) {
        catppuccin_egui::set_theme(ctx, self.theme.palette());

        let mut style = (*ctx.style()).clone();
        style.visuals.window_corner_radius = egui::CornerRadius::same(2);
        ctx.set_style(style);
    }

    fn open_help(&mut self, open: bool) {
        self.help_window.open = open;
        if open {
            self.window_focus_manager
                .request_focus(self.help_window.window_id());
        }
    }

    /// Tab and help shortcuts. Ignored while a widget has keyboard focus.
    pub fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        let (tab_index, f1, escape) = ctx.input(|i| {
            (
                TAB_SHORTCUTS.iter().position(|key| i.key_pressed(*key)),
                i.key_pressed(egui::Key::F1),
                i.key_pressed(egui::Key::Escape),
            )
        });

        if let Some(index) = tab_index {
            self.cheatsheet.select_tab_index(index);
        }
        if f1 {
            self.open_help(!self.help_window.open);
        } else if escape && self.help_window.open {
            self.open_help(false);
        }
    }

    fn render_top_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                let menu_action =
                    menu::build_menu(ui, ctx, &mut self.theme, &mut self.help_window.open);

                match menu_action {
                    menu::MenuAction::ThemeChanged => {
                        trace_info!("Theme changed to {}", self.theme);
                    }
                    menu::MenuAction::HelpToggled => {
                        let open = self.help_window.open;
                        self.open_help(open);
                    }
                    menu::MenuAction::None => {}
                }
            });
        });
    }

    fn render_central_panel(&mut self, ctx: &egui::Context) {
        let palette = self.theme.palette();
        egui::CentralPanel::default().show(ctx, |ui| {
            self.cheatsheet.ui(ui, &palette);
        });
    }

    fn handle_help_window(&mut self, ctx: &egui::Context) {
        if self.help_window.is_open() {
            let window_id = self.help_window.window_id();
            let bring_to_front = self.window_focus_manager.take_focus_request(window_id);
            FocusableWindow::show_with_focus(&mut self.help_window, ctx, (), bring_to_front);
        }
    }
}

impl eframe::App for PromptSheetApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard_input(ctx);

        self.render_top_menu_bar(ctx);
        self.render_central_panel(ctx);

        self.handle_help_window(ctx);
    }
}
