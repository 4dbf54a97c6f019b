//! Menu configuration for dropnav.
//!
//! This crate loads dropdown menu definitions (embedded or from a YAML/JSON
//! file), validates the panel graph eagerly and exposes it as a `MenuGraph`.

pub mod config;
pub mod error;
pub mod models;
pub mod validation;

pub use config::{MENU_PATH_ENV, MenuSource, default_menu_path};
pub use error::MenuConfigError;
pub use models::{MenuDocument, MenuEntry, MenuGraph, MenuPanel, PanelDocument, TransitionClasses, TransitionConfig};
