//! Focus handling for the floating windows layered over the cheat sheet.
//!
//! Windows implement [`FocusableWindow`] so the app can show them uniformly,
//! and [`WindowFocusManager`] carries a one-shot "bring to front" request from
//! the frame that opened a window to the frame that draws it.

use eframe::egui;

/// A floating window that can be raised above the rest of the UI.
pub trait FocusableWindow {
    /// Extra data the window needs to draw itself.
    type ShowParams;

    /// Stable identifier, unique across the app.
    fn window_id(&self) -> &'static str;

    /// Text shown in the title bar.
    fn window_title(&self) -> String;

    fn is_open(&self) -> bool;

    /// Draw the window. With `bring_to_front` the window is placed on the
    /// foreground order for this frame.
    fn show_with_focus(&mut self, ctx: &egui::Context, params: Self::ShowParams, bring_to_front: bool);
}

/// Windows that need nothing beyond the egui context.
pub type SimpleShowParams = ();

#[derive(Debug, Default)]
pub struct WindowFocusManager {
    bring_to_front_window: Option<&'static str>,
}

impl WindowFocusManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_focus(&mut self, window_id: &'static str) {
        self.bring_to_front_window = Some(window_id);
    }

    pub fn should_bring_to_front(&self, window_id: &str) -> bool {
        self.bring_to_front_window == Some(window_id)
    }

    /// Consume the pending request if it targets `window_id`.
    pub fn take_focus_request(&mut self, window_id: &str) -> bool {
        let pending = self.should_bring_to_front(window_id);
        if pending {
            self.bring_to_front_window = None;
        }
        pending
    }

    pub fn apply_focus_order(window: egui::Window<'_>, bring_to_front: bool) -> egui::Window<'_> {
        if bring_to_front {
            window.order(egui::Order::Foreground)
        } else {
            window
        }
    }
}
