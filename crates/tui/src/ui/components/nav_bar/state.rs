use std::sync::Arc;
use std::time::Instant;

use dropnav_registry::MenuGraph;
use dropnav_types::IconRef;
use ratatui::layout::Rect;
use tracing::debug;

use crate::ui::components::dropdown::DropdownState;

/// A single toggleable item of the nav bar.
///
/// Items that carry a menu mount a fresh [`DropdownState`] each time they open
/// and drop it when they close, so a reopened dropdown always starts on its
/// root panel.
#[derive(Debug, Clone)]
pub struct NavItemState {
    pub icon: IconRef,
    /// Human-friendly description of the item (e.g., "Notifications").
    pub label: String,
    open: bool,
    menu: Option<Arc<MenuGraph>>,
    dropdown: Option<DropdownState>,
}

impl NavItemState {
    pub fn new(icon: IconRef, label: impl Into<String>) -> Self {
        Self {
            icon,
            label: label.into(),
            open: false,
            menu: None,
            dropdown: None,
        }
    }

    /// Attaches the menu shown while this item is open.
    pub fn with_menu(mut self, graph: Arc<MenuGraph>) -> Self {
        self.menu = Some(graph);
        self
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flips the open flag and returns the new value.
    pub fn toggle(&mut self, now: Instant) -> bool {
        self.open = !self.open;
        self.dropdown = match (&self.menu, self.open) {
            (Some(graph), true) => Some(DropdownState::new(Arc::clone(graph), now)),
            _ => None,
        };
        debug!(item = %self.label, open = self.open, "toggled nav item");
        self.open
    }

    /// The mounted dropdown, present only while the item is open.
    pub fn dropdown(&self) -> Option<&DropdownState> {
        self.dropdown.as_ref()
    }

    pub fn dropdown_mut(&mut self) -> Option<&mut DropdownState> {
        self.dropdown.as_mut()
    }
}

/// State for the horizontal navigation bar.
#[derive(Debug, Clone, Default)]
pub struct NavBarState {
    pub items: Vec<NavItemState>,
    /// Index of the item that receives keyboard input.
    pub focused_index: usize,
    /// Last rendered area of the nav bar; used for mouse hit testing.
    pub last_area: Rect,
    /// Last computed per-item areas for hit testing.
    pub per_item_areas: Vec<Rect>,
}

impl NavBarState {
    pub fn new(items: Vec<NavItemState>) -> Self {
        Self {
            items,
            focused_index: 0,
            last_area: Rect::default(),
            per_item_areas: Vec::new(),
        }
    }

    /// The stock bar: plus, messenger, bell, and a caret that opens `graph`.
    pub fn defaults(graph: Arc<MenuGraph>) -> Self {
        let mut state = Self::new(vec![
            NavItemState::new(IconRef::named("plus"), "New"),
            NavItemState::new(IconRef::named("messenger"), "Messages"),
            NavItemState::new(IconRef::named("bell"), "Notifications"),
            NavItemState::new(IconRef::named("caret"), "Menu").with_menu(graph),
        ]);
        state.focused_index = state.items.len().saturating_sub(1);
        state
    }

    pub fn focus_next(&mut self) {
        let len = self.items.len();
        if len > 0 {
            self.focused_index = (self.focused_index + 1) % len;
        }
    }

    pub fn focus_prev(&mut self) {
        let len = self.items.len();
        if len > 0 {
            self.focused_index = (self.focused_index + len - 1) % len;
        }
    }

    /// Toggles the item at `index`; every other item keeps its state.
    ///
    /// Returns the item's new open state, or `None` for an unknown index.
    pub fn toggle(&mut self, index: usize, now: Instant) -> Option<bool> {
        self.items.get_mut(index).map(|item| item.toggle(now))
    }

    /// The open item's dropdown together with the item index.
    pub fn open_dropdown_mut(&mut self) -> Option<(usize, &mut DropdownState)> {
        self.items
            .iter_mut()
            .enumerate()
            .find_map(|(index, item)| item.dropdown_mut().map(|dropdown| (index, dropdown)))
    }

    pub fn open_dropdown(&self) -> Option<(usize, &DropdownState)> {
        self.items
            .iter()
            .enumerate()
            .find_map(|(index, item)| item.dropdown().map(|dropdown| (index, dropdown)))
    }

    /// Last rendered area of the item whose dropdown is open.
    pub fn open_dropdown_anchor(&self) -> Option<Rect> {
        let (index, _) = self.open_dropdown()?;
        self.per_item_areas.get(index).copied()
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.open_dropdown().is_some_and(|(_, dropdown)| dropdown.is_animating(now))
    }

    /// Advances the open dropdown; returns whether it needs a redraw.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.open_dropdown_mut().is_some_and(|(_, dropdown)| dropdown.tick(now))
    }
}
