//! Icon providers: map icon keys from the menu configuration to glyphs.
//!
//! The dropdown never inspects icons; it asks a provider for something
//! paintable and renders whatever comes back.

use std::fmt::Debug;

use dropnav_types::IconRef;

/// Glyph painted for a key the provider does not know.
pub const PLACEHOLDER_GLYPH: &str = "?";

pub trait IconProvider: Send + Sync + Debug {
    /// Returns the glyph for a named icon.
    fn glyph(&self, key: &str) -> Option<&'static str>;

    /// Resolves any icon reference to paintable text.
    fn resolve(&self, icon: &IconRef) -> String {
        match icon {
            IconRef::Named { icon } => self.glyph(icon).unwrap_or(PLACEHOLDER_GLYPH).to_string(),
            IconRef::Text(text) => text.clone(),
        }
    }
}

/// Unicode glyphs for terminals with a reasonable font.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeIcons;

impl IconProvider for UnicodeIcons {
    fn glyph(&self, key: &str) -> Option<&'static str> {
        let glyph = match key {
            "plus" => "+",
            "messenger" => "✉",
            "bell" => "♪",
            "caret" => "▾",
            "cog" => "⚙",
            "chevron" => "›",
            "arrow" => "←",
            "bolt" => "ϟ",
            _ => return None,
        };
        Some(glyph)
    }
}

/// Plain ASCII glyphs for minimal terminals.
#[derive(Debug, Default, Clone, Copy)]
pub struct AsciiIcons;

impl IconProvider for AsciiIcons {
    fn glyph(&self, key: &str) -> Option<&'static str> {
        let glyph = match key {
            "plus" => "+",
            "messenger" => "@",
            "bell" => "!",
            "caret" => "v",
            "cog" => "*",
            "chevron" => ">",
            "arrow" => "<",
            "bolt" => "~",
            _ => return None,
        };
        Some(glyph)
    }
}

pub fn icon_provider(ascii: bool) -> Box<dyn IconProvider> {
    if ascii { Box::new(AsciiIcons) } else { Box::new(UnicodeIcons) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_icons_resolve_and_unknown_keys_get_a_placeholder() {
        let icons = UnicodeIcons;
        assert_eq!(icons.resolve(&IconRef::named("chevron")), "›");
        assert_eq!(icons.resolve(&IconRef::named("rocket")), PLACEHOLDER_GLYPH);
    }

    #[test]
    fn literal_text_is_painted_verbatim() {
        let icons = AsciiIcons;
        assert_eq!(icons.resolve(&IconRef::text("😀")), "😀");
        assert_eq!(icons.resolve(&IconRef::named("arrow")), "<");
    }
}
