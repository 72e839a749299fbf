//! Core modules of the prompt cheat sheet.
//!
//! - [`catalog`] - compiled-in principles, derived categories, start-up check
//! - [`view_state`] - active tab and expanded cards, with the filter selector
//! - [`layout`] - projection of catalog and state into a display tree
//! - [`dashui`] - egui rendering and the eframe application shell

pub mod catalog;
pub mod dashui;
pub mod layout;
pub mod view_state;

pub use dashui::app::PromptSheetApp;
