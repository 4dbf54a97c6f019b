use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use dropnav_types::Effect;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Borders, Paragraph},
};

use super::NavBarState;
use crate::app::{App, FocusArea};
use crate::ui::components::{Component, find_target_index_by_mouse_position};
use crate::ui::theme::theme_helpers::{self as th, ButtonRenderOptions, render_button};

/// Width of a single nav item button, borders included.
pub const NAV_ITEM_WIDTH: u16 = 7;
/// Height of the nav bar.
pub const NAV_BAR_HEIGHT: u16 = 3;

/// Horizontal bar of icon buttons, right-aligned, with a title on the left.
#[derive(Debug)]
pub struct NavBarComponent {
    pub title: Option<String>,
}

impl Default for NavBarComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl NavBarComponent {
    pub fn new() -> Self {
        Self {
            title: Some("dropnav".to_string()),
        }
    }
}

impl Component for NavBarComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let state = &mut app.nav_bar;
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                state.focus_prev();
                Vec::new()
            }
            KeyCode::Right | KeyCode::Char('l') => {
                state.focus_next();
                Vec::new()
            }
            KeyCode::Enter | KeyCode::Char(' ') => vec![Effect::ToggleNavItem(state.focused_index)],
            KeyCode::Down => {
                let focused_is_open = state.items.get(state.focused_index).is_some_and(|item| item.dropdown().is_some());
                if focused_is_open {
                    app.focus = FocusArea::Dropdown;
                    Vec::new()
                } else {
                    vec![Effect::ToggleNavItem(state.focused_index)]
                }
            }
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let NavBarState {
            last_area, per_item_areas, ..
        } = &app.nav_bar;
        let Some(index) = find_target_index_by_mouse_position(last_area, per_item_areas, mouse.column, mouse.row) else {
            return Vec::new();
        };
        app.nav_bar.focused_index = index;
        app.focus = FocusArea::NavBar;
        vec![Effect::ToggleNavItem(index)]
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let icons = &*app.ctx.icons;
        let bar_focused = app.focus == FocusArea::NavBar;

        frame.render_widget(Paragraph::default().style(th::background_style(theme)), area);
        if let Some(title) = self.title.as_deref() {
            let title_area = Rect::new(area.x, area.y.saturating_add(area.height / 2), area.width, area.height.min(1));
            let line = Line::from(vec![Span::raw(" "), Span::styled(title.to_string(), theme.accent_primary_style())]);
            frame.render_widget(Paragraph::new(line), title_area);
        }

        let item_areas = self.get_preferred_layout(app, area);
        for (index, item) in app.nav_bar.items.iter().enumerate() {
            let Some(item_area) = item_areas.get(index).copied() else {
                continue;
            };
            let is_focused = bar_focused && index == app.nav_bar.focused_index;
            let borders = if is_focused { Borders::ALL } else { Borders::NONE };
            render_button(
                frame,
                item_area,
                &icons.resolve(&item.icon),
                theme,
                ButtonRenderOptions::new(true, is_focused, item.is_open(), borders),
            );
        }
        app.nav_bar.last_area = area;
        app.nav_bar.per_item_areas = item_areas;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        th::build_hint_spans(
            &*app.ctx.theme,
            &[(" ←/→", " Move"), (" Enter", " Toggle"), (" Tab", " Menu"), (" q", " Quit")],
        )
    }

    /// One fixed-width slot per item, pinned to the right edge.
    fn get_preferred_layout(&self, app: &App, area: Rect) -> Vec<Rect> {
        let item_count = app.nav_bar.items.len();
        if item_count == 0 {
            return Vec::new();
        }
        let mut constraints = Vec::with_capacity(item_count + 1);
        constraints.push(Constraint::Min(0));
        constraints.extend(vec![Constraint::Length(NAV_ITEM_WIDTH); item_count]);

        let mut layout = Layout::horizontal(constraints).split(area).to_vec();
        layout.remove(0);
        layout
    }
}
