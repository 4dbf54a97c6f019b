//! Error types for menu configuration loading and validation.

use std::path::PathBuf;

use dropnav_types::MenuId;
use thiserror::Error;

/// Everything that can make a menu configuration unusable.
///
/// All of these are static configuration defects: they are reported when the
/// menu is loaded, never while a user is navigating it.
#[derive(Debug, Error)]
pub enum MenuConfigError {
    #[error("failed to read menu file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse menu YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse menu JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("menu declares no panels")]
    NoPanels,

    #[error("invalid menu id '{id}': {reason}")]
    InvalidMenuId { id: String, reason: String },

    #[error("panel '{id}' is declared more than once")]
    DuplicatePanel { id: MenuId },

    #[error("root menu '{root}' is not a declared panel")]
    UnknownRoot { root: MenuId },

    #[error("panel '{id}' has no entries")]
    EmptyPanel { id: MenuId },

    #[error("entry {entry} ('{label}') of panel '{panel}' targets unknown menu '{target}'")]
    UnknownTarget {
        panel: MenuId,
        entry: usize,
        label: String,
        target: MenuId,
    },

    #[error("transition duration must be greater than zero")]
    ZeroDuration,
}
