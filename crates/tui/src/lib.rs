//! # dropnav TUI
//!
//! Terminal front end for dropnav: a horizontal nav bar whose caret item opens
//! a dropdown menu with nested, sliding panels.
//!
//! ## Architecture
//!
//! The TUI follows a component-based architecture. Each UI element (nav bar,
//! dropdown, hint bar) implements a shared `Component` trait, mutates the
//! central `App` state, and reports side effects as `Effect`s that the runtime
//! applies after each event.

mod app;
mod ui;

use std::sync::Arc;

use anyhow::Result;
use dropnav_registry::MenuGraph;

pub use ui::theme::THEME_NAMES;

/// Presentation options for the TUI.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Theme name; falls back to `TUI_THEME` and capability detection
    pub theme: Option<String>,
    /// Use ASCII glyphs for named icons
    pub ascii_icons: bool,
}

/// Runs the TUI until the user quits.
///
/// # Errors
///
/// Returns an error when the terminal cannot be put into (or restored from)
/// raw mode and the alternate screen, or when drawing fails.
pub async fn run(graph: Arc<MenuGraph>, options: RunOptions) -> Result<()> {
    let app = app::App::new(graph, &options);
    ui::runtime::run_app(app).await
}
