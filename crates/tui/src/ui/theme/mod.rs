//! Theme styling module for the TUI UI layer.
//!
//! Defines the Dracula palette, an ANSI 256-color fallback, semantic theme
//! roles, and helper builders for Ratatui widgets and styles.

use std::env;

use tracing::debug;

pub mod ansi256;
pub mod dracula;
pub mod roles;
pub mod theme_helpers;

pub use ansi256::Ansi256Theme;
pub use dracula::DraculaTheme;
pub use roles::Theme;

/// Theme plus the name it was selected under.
pub struct LoadedTheme {
    pub name: &'static str,
    pub theme: Box<dyn Theme>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorCapability {
    Truecolor,
    Ansi256,
}

/// Names accepted by `--theme` and `TUI_THEME`.
pub const THEME_NAMES: [&str; 2] = ["dracula", "ansi256"];

/// Selects a theme: explicit preference, then `TUI_THEME`, then terminal
/// capability detection.
pub fn load(preferred_theme: Option<&str>) -> LoadedTheme {
    if let Some(loaded) = preferred_theme.and_then(|name| resolve(name.trim())) {
        return loaded;
    }

    if let Ok(theme_name) = env::var("TUI_THEME")
        && let Some(loaded) = resolve(theme_name.trim())
    {
        return loaded;
    }

    match detect_color_capability() {
        ColorCapability::Truecolor => resolve_known("dracula"),
        ColorCapability::Ansi256 => {
            debug!("ANSI-only terminal detected; using fallback palette.");
            resolve_known("ansi256")
        }
    }
}

/// Resolves a theme by name, case-insensitively.
pub fn resolve(name: &str) -> Option<LoadedTheme> {
    match name.to_ascii_lowercase().as_str() {
        "dracula" => Some(LoadedTheme {
            name: "dracula",
            theme: Box::new(DraculaTheme::new()),
        }),
        "ansi256" | "ansi" | "256" => Some(LoadedTheme {
            name: "ansi256",
            theme: Box::new(Ansi256Theme::new()),
        }),
        _ => None,
    }
}

fn resolve_known(name: &'static str) -> LoadedTheme {
    resolve(name).unwrap_or_else(|| LoadedTheme {
        name: "dracula",
        theme: Box::new(DraculaTheme::new()),
    })
}

fn detect_color_capability() -> ColorCapability {
    if let Some(mode) = env::var("TUI_COLOR_MODE").ok().and_then(|value| parse_color_mode(value.trim())) {
        return mode;
    }

    let color_term = env::var("COLORTERM").unwrap_or_default().to_ascii_lowercase();
    if color_term.contains("truecolor") || color_term.contains("24bit") {
        return ColorCapability::Truecolor;
    }

    let term = env::var("TERM").unwrap_or_default().to_ascii_lowercase();
    if term.contains("truecolor") {
        return ColorCapability::Truecolor;
    }

    ColorCapability::Ansi256
}

fn parse_color_mode(value: &str) -> Option<ColorCapability> {
    match value.to_ascii_lowercase().as_str() {
        "truecolor" | "24bit" => Some(ColorCapability::Truecolor),
        "ansi256" | "256" | "8bit" => Some(ColorCapability::Ansi256),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_theme_names_resolve() {
        assert_eq!(load(Some("ansi256")).name, "ansi256");
        assert_eq!(load(Some(" Dracula ")).name, "dracula");
        assert!(resolve("solarized").is_none());
    }

    #[test]
    fn color_modes_parse() {
        assert_eq!(parse_color_mode("24bit"), Some(ColorCapability::Truecolor));
        assert_eq!(parse_color_mode("8BIT"), Some(ColorCapability::Ansi256));
        assert_eq!(parse_color_mode("mono"), None);
    }
}
