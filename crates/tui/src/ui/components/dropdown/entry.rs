//! Stateless rendering of dropdown entries.
//!
//! An entry row knows nothing about navigation; callers decide what
//! activating it means.

use dropnav_registry::{MenuEntry, MenuPanel};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::icons::IconProvider;
use crate::ui::theme::Theme;

/// Columns reserved for the left icon.
const ICON_CELL_WIDTH: usize = 2;
const ELLIPSIS: char = '…';

/// Builds one full-width row: `␠icon␠label ⋯ right-icon␠`.
pub fn entry_line(entry: &MenuEntry, icons: &dyn IconProvider, theme: &dyn Theme, width: u16, selected: bool) -> Line<'static> {
    let row_style = if selected {
        theme.selection_style()
    } else {
        theme.text_primary_style()
    };
    let icon_style = row_style.fg(theme.roles().accent_secondary);

    let left_icon = entry.left_icon.as_ref().map(|icon| icons.resolve(icon)).unwrap_or_default();
    let right_icon = entry.right_icon.as_ref().map(|icon| icons.resolve(icon)).unwrap_or_default();

    let left_cell = pad_to_width(&left_icon, ICON_CELL_WIDTH);
    let right_cell = if right_icon.is_empty() {
        " ".to_string()
    } else {
        format!("{right_icon} ")
    };

    let fixed = 1 + left_cell.width() + 1 + right_cell.width();
    let label_room = usize::from(width).saturating_sub(fixed);
    let label = truncate_to_width(&entry.label, label_room);
    let fill = label_room.saturating_sub(label.width());

    Line::from(vec![
        Span::styled(" ", row_style),
        Span::styled(left_cell, icon_style),
        Span::styled(" ", row_style),
        Span::styled(label, row_style),
        Span::styled(" ".repeat(fill), row_style),
        Span::styled(right_cell, icon_style),
    ])
}

/// Rows for every entry of a panel; `selected` highlights one of them.
pub fn panel_lines(
    panel: &MenuPanel,
    icons: &dyn IconProvider,
    theme: &dyn Theme,
    width: u16,
    selected: Option<usize>,
) -> Vec<Line<'static>> {
    panel
        .entries
        .iter()
        .enumerate()
        .map(|(index, entry)| entry_line(entry, icons, theme, width, selected == Some(index)))
        .collect()
}

fn pad_to_width(text: &str, width: usize) -> String {
    let current = text.width();
    if current >= width {
        return text.to_string();
    }
    format!("{text}{}", " ".repeat(width - current))
}

fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > max_width - 1 {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out.push(ELLIPSIS);
    out
}

/// Style shared by the empty rows of the dropdown body.
pub fn body_style(theme: &dyn Theme) -> Style {
    theme.text_primary_style().bg(theme.roles().surface)
}

#[cfg(test)]
mod tests {
    use dropnav_types::IconRef;

    use super::*;
    use crate::ui::icons::UnicodeIcons;
    use crate::ui::theme::DraculaTheme;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn row_fills_the_requested_width() {
        let entry = MenuEntry::new("Settings")
            .left_icon(IconRef::named("cog"))
            .right_icon(IconRef::named("chevron"))
            .go_to_menu("settings");
        let line = entry_line(&entry, &UnicodeIcons, &DraculaTheme::new(), 20, false);
        let rendered = text(&line);
        assert_eq!(rendered.width(), 20);
        assert!(rendered.starts_with(" ⚙  Settings"), "row: {rendered:?}");
        assert!(rendered.ends_with("› "), "row: {rendered:?}");
    }

    #[test]
    fn long_labels_are_truncated_with_an_ellipsis() {
        let entry = MenuEntry::new("A very long label that does not fit").left_icon(IconRef::text("😀"));
        let rendered = text(&entry_line(&entry, &UnicodeIcons, &DraculaTheme::new(), 16, false));
        assert_eq!(rendered.width(), 16);
        assert!(rendered.contains('…'), "row: {rendered:?}");
    }

    #[test]
    fn selected_rows_use_the_selection_style() {
        let theme = DraculaTheme::new();
        let entry = MenuEntry::new("My Profile");
        let line = entry_line(&entry, &UnicodeIcons, &theme, 20, true);
        assert_eq!(line.spans[3].style, theme.selection_style());
    }
}
