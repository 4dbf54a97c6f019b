//! Hint bar component for keyboard shortcuts and the last status message.
//!
//! Renders a single line: the hints of whichever component has focus on the
//! left, the most recent status (e.g. the last activated entry) on the right.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;

#[derive(Debug, Default)]
pub struct HintBarComponent {
    hints: Vec<Span<'static>>,
}

impl HintBarComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the hints shown on the next render.
    pub fn set_hints(&mut self, hints: Vec<Span<'static>>) {
        self.hints = hints;
    }
}

impl Component for HintBarComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        frame.render_widget(Paragraph::default().style(th::background_style(theme)), rect);

        let status = app.status.clone().unwrap_or_default();
        let status_width = u16::try_from(status.chars().count() + 1).unwrap_or(u16::MAX);
        let [hints_area, status_area] = Layout::horizontal([Constraint::Min(0), Constraint::Length(status_width)]).areas(rect);

        frame.render_widget(Paragraph::new(Line::from(self.hints.clone())), hints_area);
        frame.render_widget(
            Paragraph::new(Span::styled(status, theme.text_secondary_style())).right_aligned(),
            status_area,
        );
    }
}
