//! Integration tests for loading menu button configuration from files.

use std::fs;

use menu_button::prelude::*;
use tempfile::TempDir;

const TOML_CONFIG: &str = r#"
button_id = "menubutton1"
menu_id = "menu1"
label = "Actions"
typeahead_timeout_ms = 750
reopen_policy = "reseed"

[[items]]
label = "Action 1"
action = "first"

[[items]]
label = "Action 2"
"#;

const JSON_CONFIG: &str = r#"{
    "button_id": "menubutton2",
    "menu_id": "menu2",
    "label": "More",
    "close_on_blur": false,
    "items": [{ "label": "Currency" }, { "label": "Help", "action": "help" }]
}"#;

#[test]
fn load_toml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("menu.toml");
    fs::write(&path, TOML_CONFIG).unwrap();

    let config = MenuButtonConfig::from_path(&path).unwrap();
    assert_eq!(config.button_id, "menubutton1");
    assert_eq!(config.typeahead_timeout_ms, 750);
    assert_eq!(config.reopen_policy, ReopenPolicy::Reseed);
    assert!(config.close_on_blur);

    let button = MenuButton::from_config(&config).unwrap();
    assert_eq!(button.menu().item(0).unwrap().action().as_str(), "first");
    assert_eq!(button.menu().item(1).unwrap().action().as_str(), "Action 2");
    assert_eq!(button.reopen_policy(), ReopenPolicy::Reseed);
}

#[test]
fn load_json_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("menu.JSON");
    fs::write(&path, JSON_CONFIG).unwrap();

    let config = MenuButtonConfig::from_path(&path).unwrap();
    assert_eq!(config.label, "More");
    assert!(!config.close_on_blur);
    assert_eq!(config.items[1], ItemConfig::new("Help").with_action("help"));

    let mut button = MenuButton::from_config(&config).unwrap();
    button.click();
    button.blur();
    assert!(button.is_open());
}

#[test]
fn missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let err = MenuButtonConfig::from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn invalid_toml_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "button_id = ").unwrap();

    assert!(matches!(
        MenuButtonConfig::from_path(&path),
        Err(ConfigError::Toml(_))
    ));
}

#[test]
fn empty_item_list_is_rejected_at_build() {
    let config = MenuButtonConfig::from_json_str(
        r#"{ "button_id": "b", "menu_id": "m", "items": [] }"#,
    )
    .unwrap();
    assert!(matches!(
        MenuButton::from_config(&config),
        Err(MenuError::EmptyMenu)
    ));
}

#[test]
fn toml_round_trip_through_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.toml");

    let config = MenuButtonConfig::new("menubutton1", "menu1")
        .with_label("Actions")
        .with_items(["Action 1", "Action 2"])
        .with_close_on_blur(false);
    fs::write(&path, config.to_toml_string().unwrap()).unwrap();

    assert_eq!(MenuButtonConfig::from_path(&path).unwrap(), config);
}

#[test]
fn config_error_converts_into_menu_error() {
    fn load(text: &str) -> Result<MenuButton, MenuError> {
        let config = MenuButtonConfig::from_toml_str(text)?;
        MenuButton::from_config(&config)
    }

    assert!(matches!(load("not toml ="), Err(MenuError::Config(ConfigError::Toml(_)))));
}
