//! Component system for the dropnav TUI.
//!
//! Components are self-contained UI elements. They read and mutate the shared
//! [`App`] state, render themselves into a provided `Rect`, and report side
//! effects back to the runtime as [`Effect`]s instead of performing them.

use crossterm::event::{KeyEvent, MouseEvent};
use dropnav_types::{Effect, Msg};
use ratatui::{Frame, layout::Rect, text::Span};

use crate::app::App;

/// A UI element with localized behavior.
///
/// # Component Lifecycle
///
/// 1. **Event Handling**: input arrives through `handle_key_events` and
///    `handle_mouse_events` while the component has focus
/// 2. **Messages**: `handle_message` sees runtime messages such as ticks
/// 3. **Rendering**: `render` draws into the frame and records hit areas
pub(crate) trait Component {
    /// Handle an application-level message the component cares about.
    fn handle_message(&mut self, _app: &mut App, _msg: &Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle key events when this component has focus.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events routed to this component.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    ///
    /// Implementations may record the areas they drew into on the state they
    /// render so later mouse events can be hit tested.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Key hints shown in the hint bar while this component has focus.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'static>> {
        Vec::new()
    }

    /// Sub-areas the component lays its children out in.
    fn get_preferred_layout(&self, _app: &App, _area: Rect) -> Vec<Rect> {
        Vec::new()
    }
}

/// Returns the index of the target rect containing `(x, y)`, provided the
/// point also lies inside `container`.
pub fn find_target_index_by_mouse_position(container: &Rect, targets: &[Rect], x: u16, y: u16) -> Option<usize> {
    if !contains(container, x, y) {
        return None;
    }
    targets.iter().position(|target| contains(target, x, y))
}

fn contains(area: &Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x.saturating_add(area.width) && y >= area.y && y < area.y.saturating_add(area.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_testing_requires_the_point_inside_container_and_target() {
        let container = Rect::new(10, 0, 20, 3);
        let targets = [Rect::new(10, 0, 5, 3), Rect::new(15, 0, 5, 3)];

        assert_eq!(find_target_index_by_mouse_position(&container, &targets, 16, 1), Some(1));
        assert_eq!(find_target_index_by_mouse_position(&container, &targets, 25, 1), None);
        assert_eq!(find_target_index_by_mouse_position(&container, &targets, 2, 1), None);
    }
}
