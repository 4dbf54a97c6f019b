//! Value types describing dropdown menu panels.
//!
//! These are shared by the configuration loader and the terminal UI so that
//! neither side has to know how the other represents a menu internally.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier for one dropdown panel (e.g. "main", "settings").
///
/// The set of valid ids is open-ended: it is whatever the loaded menu
/// configuration declares.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuId(String);

impl MenuId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MenuId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for MenuId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for MenuId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Reference to something paintable next to an entry label.
///
/// In configuration a named icon is written as `{ icon: cog }` and is resolved
/// by the UI's icon provider; any plain string is painted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IconRef {
    /// Icon looked up by key in the icon provider.
    Named { icon: String },
    /// Literal text (typically a single emoji).
    Text(String),
}

impl IconRef {
    pub fn named(key: impl Into<String>) -> Self {
        Self::Named { icon: key.into() }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }
}

/// Cosmetic transition style of a panel.
///
/// Purely visual: the root panel slides in from the left (`Primary`), nested
/// panels slide in from the right (`Secondary`). It never affects navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelStyle {
    Primary,
    Secondary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_ref_deserializes_named_and_text_forms() {
        let named: IconRef = serde_json::from_str(r#"{"icon":"cog"}"#).unwrap();
        assert_eq!(named, IconRef::named("cog"));

        let text: IconRef = serde_json::from_str(r#""😀""#).unwrap();
        assert_eq!(text, IconRef::text("😀"));
    }

    #[test]
    fn menu_id_is_transparent_on_the_wire() {
        let id: MenuId = serde_json::from_str(r#""settings""#).unwrap();
        assert_eq!(id.as_str(), "settings");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""settings""#);
    }

    #[test]
    fn panel_style_uses_lowercase_names() {
        let style: PanelStyle = serde_json::from_str(r#""secondary""#).unwrap();
        assert_eq!(style, PanelStyle::Secondary);
    }
}
