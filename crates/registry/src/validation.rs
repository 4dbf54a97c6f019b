//! Eager validation of menu documents.
//!
//! Every navigation target is resolved here, at load time, so a dangling
//! `go_to_menu` can never be discovered by a user clicking on it.

use std::collections::HashSet;

use dropnav_types::MenuId;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::MenuConfigError;
use crate::models::MenuDocument;

static MENU_ID_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z0-9._-]+$").expect("menu id regex should compile"));

/// Validate a whole menu document.
pub fn validate_document(document: &MenuDocument) -> Result<(), MenuConfigError> {
    if document.panels.is_empty() {
        return Err(MenuConfigError::NoPanels);
    }
    if document.transition.duration_ms == 0 {
        return Err(MenuConfigError::ZeroDuration);
    }

    let mut declared: HashSet<&MenuId> = HashSet::with_capacity(document.panels.len());
    for panel in &document.panels {
        validate_menu_id(&panel.id)?;
        if !declared.insert(&panel.id) {
            return Err(MenuConfigError::DuplicatePanel { id: panel.id.clone() });
        }
        if panel.entries.is_empty() {
            return Err(MenuConfigError::EmptyPanel { id: panel.id.clone() });
        }
    }

    if !declared.contains(&document.root) {
        return Err(MenuConfigError::UnknownRoot {
            root: document.root.clone(),
        });
    }

    for panel in &document.panels {
        for (index, entry) in panel.entries.iter().enumerate() {
            let Some(target) = entry.go_to_menu.as_ref() else {
                continue;
            };
            if !declared.contains(target) {
                return Err(MenuConfigError::UnknownTarget {
                    panel: panel.id.clone(),
                    entry: index,
                    label: entry.label.clone(),
                    target: target.clone(),
                });
            }
        }
        debug!(panel = %panel.id, entries = panel.entries.len(), "validated menu panel");
    }

    Ok(())
}

/// Validate a single menu id.
pub fn validate_menu_id(id: &MenuId) -> Result<(), MenuConfigError> {
    if id.as_str().is_empty() {
        return Err(MenuConfigError::InvalidMenuId {
            id: String::new(),
            reason: "Menu id cannot be empty".to_string(),
        });
    }

    if !MENU_ID_REGEX.is_match(id.as_str()) {
        return Err(MenuConfigError::InvalidMenuId {
            id: id.to_string(),
            reason: "Menu id must contain only lowercase letters, numbers, dots, underscores, and hyphens".to_string(),
        });
    }

    Ok(())
}
