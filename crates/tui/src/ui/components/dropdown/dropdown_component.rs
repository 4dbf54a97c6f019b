use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use dropnav_types::{Effect, PanelStyle};
use ratatui::{
    Frame,
    layout::Rect,
    text::Span,
    widgets::{Block, Clear, Paragraph},
};

use super::entry::{body_style, panel_lines};
use super::state::{Activation, DropdownState, MountedPanel};
use crate::app::{App, FocusArea};
use crate::ui::components::Component;
use crate::ui::icons::IconProvider;
use crate::ui::theme::{Theme, theme_helpers as th};
use crate::ui::transition::TransitionPhase;

/// Preferred dropdown width in columns.
pub const DROPDOWN_WIDTH: u16 = 34;

/// Renders the open dropdown below its nav item and routes input to it.
#[derive(Debug, Default)]
pub struct DropdownComponent;

impl DropdownComponent {
    pub fn new() -> Self {
        Self
    }

    fn effects_for(activation: Activation, state: &DropdownState) -> Vec<Effect> {
        match activation {
            Activation::Navigated { from, to } => vec![Effect::MenuChanged { from, to }],
            Activation::Leaf { label } => vec![Effect::EntryActivated {
                menu: state.active_menu().clone(),
                label,
            }],
            Activation::Unchanged | Activation::OutOfRange => Vec::new(),
        }
    }

    /// Computes where the dropdown container goes: right-aligned under its
    /// nav item, clamped to the screen.
    fn container_area(anchor: Rect, screen: Rect, height: u16) -> Rect {
        let width = DROPDOWN_WIDTH.min(screen.width);
        let right = anchor.x.saturating_add(anchor.width).min(screen.x.saturating_add(screen.width));
        let x = right.saturating_sub(width).max(screen.x);
        let y = anchor.y.saturating_add(anchor.height);
        let available = screen.y.saturating_add(screen.height).saturating_sub(y);
        Rect::new(x, y, width, height.min(available))
    }

    fn render_panel(
        frame: &mut Frame,
        inner: Rect,
        panel: &MountedPanel,
        state: &DropdownState,
        theme: &dyn Theme,
        icons: &dyn IconProvider,
        now: Instant,
    ) {
        let Some(menu_panel) = state.graph().panel(&panel.id) else {
            return;
        };
        let is_active = panel.id == *state.active_menu();
        let selected = is_active.then(|| state.selected());
        let lines = panel_lines(menu_panel, icons, theme, inner.width, selected);

        let offset = slide_offset(panel.style, panel.transition.phase(), panel.transition.progress(now), inner.width);
        let width = i32::from(inner.width);
        if offset.abs() >= width {
            return;
        }

        let paragraph = Paragraph::new(lines).style(body_style(theme));
        if offset >= 0 {
            let shift = offset as u16;
            let area = Rect::new(inner.x + shift, inner.y, inner.width - shift, inner.height);
            frame.render_widget(paragraph, area);
        } else {
            let hidden = offset.unsigned_abs() as u16;
            frame.render_widget(paragraph.scroll((0, hidden)), inner);
        }
    }
}

/// Horizontal offset of a sliding panel: primary panels come from and leave to
/// the left, secondary panels to the right.
pub fn slide_offset(style: PanelStyle, phase: TransitionPhase, progress: f32, width: u16) -> i32 {
    let width = f32::from(width);
    let travel = match phase {
        TransitionPhase::Entering => 1.0 - progress,
        TransitionPhase::Exiting => progress,
        TransitionPhase::Entered | TransitionPhase::Exited => 0.0,
    };
    let distance = (travel * width).round() as i32;
    match style {
        PanelStyle::Primary => -distance,
        PanelStyle::Secondary => distance,
    }
}

impl Component for DropdownComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let now = Instant::now();
        let Some((index, state)) = app.nav_bar.open_dropdown_mut() else {
            return Vec::new();
        };
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                state.select_next();
                Vec::new()
            }
            KeyCode::Up | KeyCode::Char('k') => {
                state.select_prev();
                Vec::new()
            }
            KeyCode::Enter | KeyCode::Right | KeyCode::Char(' ') => {
                let activation = state.activate_selected(now);
                Self::effects_for(activation, state)
            }
            KeyCode::Esc => vec![Effect::ToggleNavItem(index)],
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let now = Instant::now();
        let Some((_, state)) = app.nav_bar.open_dropdown_mut() else {
            return Vec::new();
        };
        let Some(entry_index) = state.entry_at(mouse.column, mouse.row) else {
            return Vec::new();
        };
        state.select(entry_index);
        let activation = state.activate(entry_index, now);
        let effects = Self::effects_for(activation, state);
        app.focus = FocusArea::Dropdown;
        effects
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let now = Instant::now();
        let focused = app.focus == FocusArea::Dropdown;
        let App { ctx, nav_bar, .. } = app;
        let Some(anchor) = nav_bar.open_dropdown_anchor() else {
            return;
        };
        let Some((_, state)) = nav_bar.open_dropdown_mut() else {
            return;
        };
        let Some(height) = state.displayed_height(now) else {
            return;
        };

        let theme = &*ctx.theme;
        let container = Self::container_area(anchor, area, height);
        frame.render_widget(Clear, container);
        let block: Block = th::block(theme, None, focused);
        let inner = block.inner(container);
        frame.render_widget(block, container);

        for panel in state.mounted_panels() {
            Self::render_panel(frame, inner, panel, state, theme, &*ctx.icons, now);
        }

        let entry_rows = state.active_panel().map(|panel| panel.entries.len()).unwrap_or(0);
        let per_entry_areas = (0..entry_rows)
            .map(|row| Rect::new(inner.x, inner.y.saturating_add(row as u16), inner.width, 1))
            .filter(|row_area| row_area.y < inner.y.saturating_add(inner.height))
            .collect();
        state.last_area = container;
        state.per_entry_areas = per_entry_areas;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        th::build_hint_spans(
            &*app.ctx.theme,
            &[(" ↑/↓", " Move"), (" Enter", " Open"), (" Esc", " Close"), (" Tab", " Nav bar")],
        )
    }
}
