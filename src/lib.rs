//! Prompt Sheet - a desktop reference card of principled prompting instructions
//!
//! The application shows the 26 principles from "Principled Instructions Are All
//! You Need for Questioning LLaMA-1/2, GPT-3.5/4" as a grid of cards. Users filter
//! the grid by category tab and expand any card to reveal an example prompt.
//!
//! # Architecture
//!
//! - **Catalog** ([`app::catalog`]): compiled-in principle table; category counts
//!   are derived from it and re-checked by [`app::catalog::verify_catalog`] at start-up
//! - **View state** ([`app::view_state`]): the active tab and the set of expanded
//!   cards, plus the pure filter selector
//! - **Layout** ([`app::layout`]): deterministic projection of catalog and state
//!   into tabs and cards
//! - **UI** ([`app::dashui`]): egui renderer, menu bar, help window and the
//!   [`PromptSheetApp`] eframe shell
//!
//! Nothing is fetched or stored except the theme choice, which eframe persists
//! between runs.

#![warn(clippy::all, rust_2018_idioms)]

// Macros first so every module below can use them.
#[macro_use]
pub mod logging_macros;

pub mod app;
pub use app::PromptSheetApp;
