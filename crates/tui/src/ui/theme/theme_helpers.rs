use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use super::roles::{Theme, ThemeRoles};

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(t, theme.text_secondary_style().add_modifier(Modifier::BOLD)));
    }
    block
}

/// Style for panel-like containers (set background on widget using `.style`).
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Style for the bar and screen background.
pub fn background_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { background, text, .. } = *theme.roles();
    Style::default().bg(background).fg(text)
}

/// Icon button style: accent glyph, selection background while pressed.
pub fn button_secondary_style<T: Theme + ?Sized>(theme: &T, enabled: bool, selected: bool) -> Style {
    if !enabled {
        return theme.text_muted_style();
    }
    let ThemeRoles {
        accent_secondary,
        selection_bg,
        surface_muted,
        ..
    } = *theme.roles();
    let style = Style::default().fg(accent_secondary).bg(surface_muted);
    if selected { style.bg(selection_bg).add_modifier(Modifier::BOLD) } else { style }
}

#[derive(Debug, Clone, Copy)]
pub struct ButtonRenderOptions {
    pub enabled: bool,
    pub focused: bool,
    pub selected: bool,
    pub borders: Borders,
}

impl ButtonRenderOptions {
    pub fn new(enabled: bool, focused: bool, selected: bool, borders: Borders) -> Self {
        Self {
            enabled,
            focused,
            selected,
            borders,
        }
    }
}

/// Renders a standard button
pub fn render_button<T: Theme + ?Sized>(frame: &mut Frame, area: Rect, label: &str, theme: &T, options: ButtonRenderOptions) {
    let border_style = if options.enabled {
        theme.border_style(options.focused)
    } else {
        theme.text_muted_style()
    };
    let button_style = button_secondary_style(theme, options.enabled, options.selected);

    // Pad borderless buttons so they line up with bordered ones.
    let padding = if options.borders.is_empty() {
        Padding::uniform(1)
    } else {
        Padding::ZERO
    };

    frame.render_widget(
        Paragraph::new(label)
            .centered()
            .block(
                Block::bordered()
                    .borders(options.borders)
                    .border_type(BorderType::Rounded)
                    .border_style(border_style)
                    .padding(padding),
            )
            .style(button_style),
        area,
    );
}

/// Builds `key description` hint pairs for the hint bar.
pub fn build_hint_spans<T: Theme + ?Sized>(theme: &T, hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, description) in hints {
        spans.push(Span::styled(*key, theme.accent_emphasis_style()));
        spans.push(Span::styled(*description, theme.text_muted_style()));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::DraculaTheme;

    #[test]
    fn hint_spans_alternate_key_and_description() {
        let theme = DraculaTheme::new();
        let spans = build_hint_spans(&theme, &[(" Enter", " Select"), (" Esc", " Close")]);
        let text: Vec<_> = spans.iter().map(|span| span.content.as_ref()).collect();
        assert_eq!(text, vec![" Enter", " Select", " Esc", " Close"]);
        assert_eq!(spans[0].style, theme.accent_emphasis_style());
    }

    #[test]
    fn selected_buttons_use_selection_background() {
        let theme = DraculaTheme::new();
        let selected = button_secondary_style(&theme, true, true);
        assert_eq!(selected.bg, Some(theme.roles().selection_bg));
        assert_eq!(button_secondary_style(&theme, false, true), theme.text_muted_style());
    }
}
