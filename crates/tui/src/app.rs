//! Application state for the dropnav TUI.
//!
//! `App` owns the nav bar (and through it the open dropdown), which area has
//! keyboard focus, and the shared context every component renders with.
//! Components report [`Effect`]s; the runtime hands them back to
//! [`App::apply_effect`].

use std::sync::Arc;
use std::time::Instant;

use dropnav_registry::MenuGraph;
use dropnav_types::{Effect, Msg};
use tracing::{debug, info};

use crate::RunOptions;
use crate::ui::components::nav_bar::NavBarState;
use crate::ui::icons::{IconProvider, icon_provider};
use crate::ui::theme::{self, Theme};

/// Cross-cutting shared context owned by the App.
#[derive(Debug)]
pub struct SharedCtx {
    pub theme: Box<dyn Theme>,
    /// Name the theme was selected under
    pub theme_name: &'static str,
    pub icons: Box<dyn IconProvider>,
    /// Menu shown by the caret item
    pub graph: Arc<MenuGraph>,
}

impl SharedCtx {
    pub fn new(graph: Arc<MenuGraph>, options: &RunOptions) -> Self {
        let loaded = theme::load(options.theme.as_deref());
        Self {
            theme: loaded.theme,
            theme_name: loaded.name,
            icons: icon_provider(options.ascii_icons),
            graph,
        }
    }
}

/// Which part of the screen receives key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusArea {
    #[default]
    NavBar,
    Dropdown,
}

#[derive(Debug)]
pub struct App {
    pub ctx: SharedCtx,
    pub nav_bar: NavBarState,
    pub focus: FocusArea,
    /// Last status line shown in the hint bar
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(graph: Arc<MenuGraph>, options: &RunOptions) -> Self {
        let nav_bar = NavBarState::defaults(Arc::clone(&graph));
        let ctx = SharedCtx::new(graph, options);
        debug!(theme = ctx.theme_name, ascii = options.ascii_icons, "initialized app");
        Self {
            ctx,
            nav_bar,
            focus: FocusArea::NavBar,
            status: None,
            should_quit: false,
        }
    }

    /// Handles runtime messages. Ticks advance the open dropdown.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        match msg {
            Msg::Tick => {
                self.nav_bar.tick(Instant::now());
            }
            Msg::Resize(width, height) => {
                debug!(width, height, "terminal resized");
            }
        }
        Vec::new()
    }

    /// True while the open dropdown is mid-transition.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.nav_bar.is_animating(now)
    }

    pub fn apply_effect(&mut self, effect: Effect, now: Instant) {
        match effect {
            Effect::ToggleNavItem(index) => self.toggle_nav_item(index, now),
            Effect::MenuChanged { from, to } => {
                info!(%from, %to, "dropdown menu changed");
            }
            Effect::EntryActivated { menu, label } => {
                info!(%menu, %label, "menu entry activated");
                self.status = Some(format!("{menu}: {label}"));
            }
            Effect::Quit => {
                info!("quit requested");
                self.should_quit = true;
            }
        }
    }

    /// Toggles a nav item and moves focus into its dropdown when one opens.
    pub fn toggle_nav_item(&mut self, index: usize, now: Instant) {
        let Some(open) = self.nav_bar.toggle(index, now) else {
            debug!(index, "ignoring toggle of unknown nav item");
            return;
        };
        self.nav_bar.focused_index = index;
        let label = self.nav_bar.items.get(index).map(|item| item.label.as_str()).unwrap_or_default();
        info!(item = label, open, "nav item toggled");
        let toggled_dropdown = self.nav_bar.items.get(index).is_some_and(|item| item.dropdown().is_some());
        self.focus = if toggled_dropdown {
            FocusArea::Dropdown
        } else {
            FocusArea::NavBar
        };
    }
}

#[cfg(test)]
mod tests {
    use dropnav_types::MenuId;

    use super::*;

    fn app() -> App {
        let graph = Arc::new(MenuGraph::from_embedded().expect("embedded menu"));
        let options = RunOptions {
            theme: Some("dracula".to_string()),
            ascii_icons: true,
        };
        App::new(graph, &options)
    }

    #[test]
    fn opening_the_caret_focuses_its_dropdown_and_closing_returns_focus() {
        let now = Instant::now();
        let mut app = app();
        app.apply_effect(Effect::ToggleNavItem(3), now);
        assert_eq!(app.focus, FocusArea::Dropdown);
        assert!(app.nav_bar.items[3].is_open());

        app.apply_effect(Effect::ToggleNavItem(3), now);
        assert_eq!(app.focus, FocusArea::NavBar);
        assert!(!app.nav_bar.items[3].is_open());
    }

    #[test]
    fn items_without_a_menu_keep_focus_on_the_bar() {
        let mut app = app();
        app.apply_effect(Effect::ToggleNavItem(2), Instant::now());
        assert!(app.nav_bar.items[2].is_open());
        assert_eq!(app.focus, FocusArea::NavBar);
        assert_eq!(app.nav_bar.focused_index, 2);
    }

    #[test]
    fn toggling_another_item_twice_keeps_the_caret_open() {
        let now = Instant::now();
        let mut app = app();
        app.apply_effect(Effect::ToggleNavItem(3), now);
        app.apply_effect(Effect::ToggleNavItem(0), now);
        assert!(app.nav_bar.items[0].is_open());
        assert_eq!(app.focus, FocusArea::NavBar);

        app.apply_effect(Effect::ToggleNavItem(0), now);
        assert!(!app.nav_bar.items[0].is_open());
        assert!(app.nav_bar.items[3].is_open());
        assert!(app.nav_bar.open_dropdown().is_some());
    }

    #[test]
    fn leaf_activation_updates_the_status_line() {
        let mut app = app();
        app.apply_effect(
            Effect::EntryActivated {
                menu: MenuId::new("main"),
                label: "My Profile".to_string(),
            },
            Instant::now(),
        );
        assert_eq!(app.status.as_deref(), Some("main: My Profile"));

        app.apply_effect(Effect::Quit, Instant::now());
        assert!(app.should_quit);
    }
}
