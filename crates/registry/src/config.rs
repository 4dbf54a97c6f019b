use std::{env, path::PathBuf};

use dirs_next::config_dir;
use tracing::debug;

use crate::error::MenuConfigError;
use crate::models::MenuGraph;

/// Environment variable naming a menu file to load instead of the default.
pub const MENU_PATH_ENV: &str = "DROPNAV_MENU";

/// Where a menu configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuSource {
    /// A YAML or JSON file on disk
    File(PathBuf),
    /// The menu compiled into the binary
    Embedded,
}

impl MenuSource {
    /// Resolves the menu source.
    ///
    /// Precedence: an explicit path, then `DROPNAV_MENU`, then
    /// `<config dir>/dropnav/menu.yaml` when that file exists, then the
    /// embedded menu.
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        if let Some(path) = explicit {
            return MenuSource::File(path);
        }

        if let Ok(path) = env::var(MENU_PATH_ENV)
            && !path.trim().is_empty()
        {
            return MenuSource::File(expand_tilde(path.trim()));
        }

        let user_menu = default_menu_path();
        if user_menu.is_file() {
            return MenuSource::File(user_menu);
        }

        MenuSource::Embedded
    }

    pub fn load(&self) -> Result<MenuGraph, MenuConfigError> {
        debug!(source = %self, "loading menu");
        match self {
            MenuSource::File(path) => MenuGraph::from_path(path),
            MenuSource::Embedded => MenuGraph::from_embedded(),
        }
    }
}

impl std::fmt::Display for MenuSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuSource::File(path) => write!(f, "{}", path.display()),
            MenuSource::Embedded => f.write_str("<embedded>"),
        }
    }
}

/// Get the default path for a user menu file.
pub fn default_menu_path() -> PathBuf {
    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dropnav")
        .join("menu.yaml")
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs_next::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
