use std::io::Write;
use std::time::Duration;

use dropnav_registry::{MenuConfigError, MenuGraph};
use dropnav_types::{IconRef, MenuId, PanelStyle};

fn load_fixture() -> MenuGraph {
    let menu = include_str!("data/menu_fixture.yaml");
    MenuGraph::from_yaml_str(menu).expect("load menu from fixture")
}

#[test]
fn fixture_panels_keep_declaration_order() {
    let graph = load_fixture();
    let ids: Vec<_> = graph.panels().map(|panel| panel.id.as_str()).collect();
    assert_eq!(ids, vec!["home", "account"]);
    assert_eq!(graph.transition_duration(), Duration::from_millis(150));
}

#[test]
fn explicit_style_overrides_the_default() {
    let graph = load_fixture();
    let account = graph.panel(&MenuId::new("account")).expect("account panel");
    assert_eq!(account.style, PanelStyle::Primary, "explicit style should be kept");
    let home = graph.panel(&MenuId::new("home")).expect("home panel");
    assert_eq!(home.style, PanelStyle::Primary, "root defaults to primary");
}

#[test]
fn embedded_menu_matches_the_shipped_layout() {
    let graph = MenuGraph::from_embedded().expect("embedded menu");
    let labels = |id: &str| -> Vec<String> {
        graph
            .panel(&MenuId::new(id))
            .map(|panel| panel.entries.iter().map(|entry| entry.label.clone()).collect())
            .unwrap_or_default()
    };

    assert_eq!(labels("main"), vec!["My Profile", "Settings", "List Test"]);
    assert_eq!(labels("settings"), vec!["Go Back"]);
    assert_eq!(labels("listtest").len(), 6);
    assert_eq!(labels("sublisttest").len(), 5);

    let nested = &graph.panel(&MenuId::new("listtest")).unwrap().entries[1];
    assert_eq!(nested.label, "Nested List Item");
    assert_eq!(nested.go_to_menu, Some(MenuId::new("sublisttest")));
    assert_eq!(nested.right_icon, Some(IconRef::named("chevron")));

    assert!(graph.unreachable_panels().is_empty(), "every shipped panel should be reachable");
}

#[test]
fn loads_yaml_and_json_files_from_disk() {
    let mut yaml = tempfile::Builder::new().suffix(".yaml").tempfile().expect("temp yaml");
    yaml.write_all(include_str!("data/menu_fixture.yaml").as_bytes()).unwrap();
    let graph = MenuGraph::from_path(yaml.path()).expect("yaml file loads");
    assert_eq!(graph.root().as_str(), "home");

    let mut json = tempfile::Builder::new().suffix(".json").tempfile().expect("temp json");
    json.write_all(br#"{"root":"only","panels":[{"id":"only","entries":[{"label":"Item"}]}]}"#)
        .unwrap();
    let graph = MenuGraph::from_path(json.path()).expect("json file loads");
    assert_eq!(graph.len(), 1);
}

#[test]
fn missing_file_reports_the_path() {
    let err = MenuGraph::from_path(std::path::Path::new("/definitely/not/here.yaml")).unwrap_err();
    assert!(matches!(err, MenuConfigError::Io { .. }));
    assert!(err.to_string().contains("/definitely/not/here.yaml"), "error: {err}");
}

#[test]
fn unknown_fields_are_parse_errors() {
    let err = MenuGraph::from_yaml_str(
        r#"
root: main
panels:
  - id: main
    entries:
      - { label: Settings, goToMenu: settings }
"#,
    )
    .unwrap_err();
    assert!(matches!(err, MenuConfigError::Yaml(_)), "unexpected: {err}");
}
