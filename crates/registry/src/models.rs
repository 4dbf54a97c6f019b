use std::collections::VecDeque;
use std::path::Path;
use std::time::Duration;

use dropnav_types::{IconRef, MenuId, PanelStyle};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::MenuConfigError;
use crate::validation::validate_document;

/// The default menu, embedded at compile time.
const EMBEDDED_MENU: &str = include_str!("../menus/default.yaml");

const DEFAULT_DURATION_MS: u64 = 300;

/// One selectable or informational row of a panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuEntry {
    /// Text shown for the entry
    pub label: String,
    /// Icon painted before the label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_icon: Option<IconRef>,
    /// Icon painted at the right edge of the row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_icon: Option<IconRef>,
    /// Panel to switch to when the entry is activated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub go_to_menu: Option<MenuId>,
}

impl MenuEntry {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            left_icon: None,
            right_icon: None,
            go_to_menu: None,
        }
    }

    pub fn left_icon(mut self, icon: IconRef) -> Self {
        self.left_icon = Some(icon);
        self
    }

    pub fn right_icon(mut self, icon: IconRef) -> Self {
        self.right_icon = Some(icon);
        self
    }

    pub fn go_to_menu(mut self, target: impl Into<MenuId>) -> Self {
        self.go_to_menu = Some(target.into());
        self
    }

    /// Entries without a target are leaves: activating them never navigates.
    pub fn is_leaf(&self) -> bool {
        self.go_to_menu.is_none()
    }
}

/// Names of the two cosmetic transition classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransitionClasses {
    pub primary: String,
    pub secondary: String,
}

impl Default for TransitionClasses {
    fn default() -> Self {
        Self {
            primary: "menu-primary".to_string(),
            secondary: "menu-secondary".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransitionConfig {
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    #[serde(default)]
    pub classes: TransitionClasses,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            classes: TransitionClasses::default(),
        }
    }
}

fn default_duration_ms() -> u64 {
    DEFAULT_DURATION_MS
}

/// A panel as written in a menu file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PanelDocument {
    pub id: MenuId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<PanelStyle>,
    #[serde(default)]
    pub entries: Vec<MenuEntry>,
}

/// Raw, unvalidated menu file contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuDocument {
    pub root: MenuId,
    #[serde(default)]
    pub transition: TransitionConfig,
    #[serde(default)]
    pub panels: Vec<PanelDocument>,
}

/// One named screen of the dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuPanel {
    pub id: MenuId,
    pub style: PanelStyle,
    pub entries: Vec<MenuEntry>,
}

/// A validated menu: panels keyed by id, with every navigation target known
/// to exist.
///
/// The panel graph is directed and may contain cycles (every "Go Back" entry
/// closes one). Panels keep their declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuGraph {
    root: MenuId,
    panels: IndexMap<MenuId, MenuPanel>,
    transition_duration: Duration,
    classes: TransitionClasses,
}

impl MenuGraph {
    /// Validates a document and builds the graph from it.
    ///
    /// Panels without an explicit style get `Primary` when they are the root
    /// and `Secondary` otherwise.
    pub fn from_document(document: MenuDocument) -> Result<Self, MenuConfigError> {
        validate_document(&document)?;
        let MenuDocument { root, transition, panels } = document;

        let panels = panels
            .into_iter()
            .map(|panel| {
                let style = panel.style.unwrap_or(if panel.id == root {
                    PanelStyle::Primary
                } else {
                    PanelStyle::Secondary
                });
                let menu_panel = MenuPanel {
                    id: panel.id.clone(),
                    style,
                    entries: panel.entries,
                };
                (panel.id, menu_panel)
            })
            .collect::<IndexMap<_, _>>();

        debug!(root = %root, panels = panels.len(), "loaded menu graph");
        Ok(Self {
            root,
            panels,
            transition_duration: Duration::from_millis(transition.duration_ms),
            classes: transition.classes,
        })
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, MenuConfigError> {
        let document: MenuDocument = serde_yaml::from_str(content)?;
        Self::from_document(document)
    }

    pub fn from_json_str(content: &str) -> Result<Self, MenuConfigError> {
        let document: MenuDocument = serde_json::from_str(content)?;
        Self::from_document(document)
    }

    /// Loads a menu file; `.json` files are parsed as JSON, anything else as YAML.
    pub fn from_path(path: &Path) -> Result<Self, MenuConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| MenuConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path
            .extension()
            .and_then(|extension| extension.to_str())
            .is_some_and(|extension| extension.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    /// Loads the menu bundled with the binary.
    pub fn from_embedded() -> Result<Self, MenuConfigError> {
        Self::from_yaml_str(EMBEDDED_MENU)
    }

    /// Replaces the transition duration (e.g. from a command line override).
    pub fn with_transition_duration(mut self, duration: Duration) -> Result<Self, MenuConfigError> {
        if duration.is_zero() {
            return Err(MenuConfigError::ZeroDuration);
        }
        self.transition_duration = duration;
        Ok(self)
    }

    pub fn root(&self) -> &MenuId {
        &self.root
    }

    pub fn panel(&self, id: &MenuId) -> Option<&MenuPanel> {
        self.panels.get(id)
    }

    pub fn contains(&self, id: &MenuId) -> bool {
        self.panels.contains_key(id)
    }

    pub fn panels(&self) -> impl Iterator<Item = &MenuPanel> {
        self.panels.values()
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn transition_duration(&self) -> Duration {
        self.transition_duration
    }

    pub fn classes(&self) -> &TransitionClasses {
        &self.classes
    }

    /// Transition class name used for panels of the given style.
    pub fn class_for(&self, style: PanelStyle) -> &str {
        match style {
            PanelStyle::Primary => &self.classes.primary,
            PanelStyle::Secondary => &self.classes.secondary,
        }
    }

    /// Panels reachable from the root by following entry targets, in
    /// breadth-first order.
    pub fn reachable_from_root(&self) -> IndexSet<MenuId> {
        let mut seen = IndexSet::new();
        let mut queue = VecDeque::from([self.root.clone()]);
        while let Some(id) = queue.pop_front() {
            if !seen.insert(id.clone()) {
                continue;
            }
            let Some(panel) = self.panels.get(&id) else {
                continue;
            };
            for target in panel.entries.iter().filter_map(|entry| entry.go_to_menu.as_ref()) {
                if !seen.contains(target) {
                    queue.push_back(target.clone());
                }
            }
        }
        seen
    }

    /// Declared panels a user can never navigate to.
    pub fn unreachable_panels(&self) -> Vec<&MenuId> {
        let reachable = self.reachable_from_root();
        self.panels.keys().filter(|id| !reachable.contains(*id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_menu_loads_and_defaults_styles() {
        let graph = MenuGraph::from_embedded().expect("embedded menu should be valid");
        assert_eq!(graph.root().as_str(), "main");
        assert_eq!(graph.len(), 4);
        assert_eq!(graph.transition_duration(), Duration::from_millis(300));

        let main = graph.panel(&MenuId::new("main")).unwrap();
        assert_eq!(main.style, PanelStyle::Primary);
        let settings = graph.panel(&MenuId::new("settings")).unwrap();
        assert_eq!(settings.style, PanelStyle::Secondary);
        assert_eq!(graph.class_for(settings.style), "menu-secondary");
    }

    #[test]
    fn unreachable_panels_are_reported() {
        let graph = MenuGraph::from_yaml_str(
            r#"
root: main
panels:
  - id: main
    entries: [{ label: Profile }]
  - id: orphan
    entries: [{ label: Back, go_to_menu: main }]
"#,
        )
        .unwrap();
        assert_eq!(graph.unreachable_panels(), vec![&MenuId::new("orphan")]);
        assert_eq!(graph.reachable_from_root().len(), 1);
    }

    #[test]
    fn duration_override_rejects_zero() {
        let graph = MenuGraph::from_embedded().unwrap();
        assert!(matches!(
            graph.clone().with_transition_duration(Duration::ZERO),
            Err(MenuConfigError::ZeroDuration)
        ));
        let faster = graph.with_transition_duration(Duration::from_millis(120)).unwrap();
        assert_eq!(faster.transition_duration(), Duration::from_millis(120));
    }

    #[test]
    fn json_documents_are_accepted() {
        let graph = MenuGraph::from_json_str(
            r#"{"root":"main","panels":[{"id":"main","entries":[{"label":"Profile","left_icon":"😀"}]}]}"#,
        )
        .unwrap();
        let main = graph.panel(&MenuId::new("main")).unwrap();
        assert_eq!(main.entries[0].left_icon, Some(IconRef::text("😀")));
    }
}
