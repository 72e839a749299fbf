//! Desktop user interface for the prompt cheat sheet.
//!
//! [`app::PromptSheetApp`] is the eframe entry point. It draws the menu bar,
//! hosts the [`cheatsheet_view::CheatSheetView`] in the central panel and layers
//! the [`help_window::HelpWindow`] on top. Floating windows implement
//! [`window_focus::FocusableWindow`].

pub mod app;
pub mod cheatsheet_view;
pub mod help_window;
pub mod menu;
pub mod window_focus;

pub use app::{PromptSheetApp, ThemeChoice};
pub use cheatsheet_view::{CheatSheetView, SheetAction};
pub use help_window::HelpWindow;
pub use window_focus::{FocusableWindow, SimpleShowParams, WindowFocusManager};
