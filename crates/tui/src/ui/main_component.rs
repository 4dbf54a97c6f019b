use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use dropnav_types::{Effect, Msg};
use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use super::components::{Component, DropdownComponent, HintBarComponent, NavBarComponent};
use super::components::nav_bar::NAV_BAR_HEIGHT;
use super::theme::theme_helpers as th;
use crate::app::{App, FocusArea};

/// Root component: lays out the nav bar, the body, and the hint bar, and
/// routes input to whichever area has focus.
#[derive(Debug, Default)]
pub struct MainView {
    pub nav_bar_view: NavBarComponent,
    pub dropdown_view: DropdownComponent,
    pub hint_bar_view: HintBarComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self {
            nav_bar_view: NavBarComponent::new(),
            dropdown_view: DropdownComponent::new(),
            hint_bar_view: HintBarComponent::new(),
        }
    }

    fn focused_component(&self, app: &App) -> &dyn Component {
        match app.focus {
            FocusArea::Dropdown if app.nav_bar.open_dropdown().is_some() => &self.dropdown_view,
            _ => &self.nav_bar_view,
        }
    }
}

impl Component for MainView {
    fn handle_message(&mut self, app: &mut App, msg: &Msg) -> Vec<Effect> {
        app.update(msg)
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if key.code == KeyCode::Char('q') || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)) {
            return vec![Effect::Quit];
        }

        let dropdown_open = app.nav_bar.open_dropdown().is_some();
        if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
            app.focus = match app.focus {
                FocusArea::NavBar if dropdown_open => FocusArea::Dropdown,
                _ => FocusArea::NavBar,
            };
            return Vec::new();
        }

        match app.focus {
            FocusArea::Dropdown if dropdown_open => self.dropdown_view.handle_key_events(app, key),
            _ => {
                app.focus = FocusArea::NavBar;
                self.nav_bar_view.handle_key_events(app, key)
            }
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let mut effects = self.dropdown_view.handle_mouse_events(app, mouse);
        if effects.is_empty() {
            effects.extend(self.nav_bar_view.handle_mouse_events(app, mouse));
        }
        effects
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        frame.render_widget(Paragraph::default().style(th::background_style(&*app.ctx.theme)), area);

        let layout = self.get_preferred_layout(app, area);
        self.nav_bar_view.render(frame, layout[0], app);

        let body = Paragraph::new(Line::from(Span::styled(
            "Open the menu from the nav bar with Enter or a click.",
            app.ctx.theme.text_muted_style(),
        )))
        .wrap(Wrap { trim: true })
        .centered();
        frame.render_widget(body, layout[1].inner(Margin::new(1, 1)));

        let hints = self.focused_component(app).get_hint_spans(app);
        self.hint_bar_view.set_hints(hints);
        self.hint_bar_view.render(frame, layout[2], app);

        // Drawn last so the dropdown overlays the body and hint bar.
        self.dropdown_view.render(frame, area, app);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        self.focused_component(app).get_hint_spans(app)
    }

    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        Layout::vertical([
            Constraint::Length(NAV_BAR_HEIGHT), // Nav bar
            Constraint::Min(0),                 // Body
            Constraint::Length(1),              // Hints
        ])
        .split(area)
        .to_vec()
    }
}
