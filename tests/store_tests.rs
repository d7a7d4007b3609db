use serde::{Deserialize, Serialize};
use serde_jsonkit::{store, Category, Config, JsonOptions, Window};
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

const CONFIG: &str = r#"{
    "timeout": 30,
    "pluginsPath": "",
    "window": {
        "width": 800,
        "height": 600,
        "x": 0,
        "y": 0
    }
}"#;

#[test]
fn test_load_modify_save() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, CONFIG).unwrap();

    let mut config: Config = store::load(&path).unwrap();
    assert_eq!(config.timeout, 30.0);
    assert_eq!(
        config.window,
        Window {
            width: 800,
            height: 600,
            x: 0,
            y: 0
        }
    );

    config.plugins_path = "usr/bin/plugins/".to_string();
    store::save(&path, &config).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(
        written,
        CONFIG.replace("\"pluginsPath\": \"\"", "\"pluginsPath\": \"usr/bin/plugins/\"")
    );

    let reloaded: Config = store::load(&path).unwrap();
    assert_eq!(reloaded, config);
}

#[test]
fn test_load_ignores_unknown_and_defaults_missing() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("partial.json");
    fs::write(&path, r#"{"window": {"height": 480}, "theme": "dark"}"#).unwrap();

    let config: Config = store::load(&path).unwrap();
    assert_eq!(config.timeout, 0.0);
    assert_eq!(config.plugins_path, "");
    assert_eq!(config.window.height, 480);
    assert_eq!(config.window.width, 0);
}

#[test]
fn test_error_categories() {
    init_tracing();
    let dir = TempDir::new().unwrap();

    let missing = store::load::<Config, _>(dir.path().join("missing.json")).unwrap_err();
    assert_eq!(missing.category(), Category::Io);

    let path = dir.path().join("mismatch.json");
    fs::write(&path, r#"{"timeout": "soon"}"#).unwrap();
    let mismatch = store::load::<Config, _>(&path).unwrap_err();
    assert_eq!(mismatch.category(), Category::Decode);
    assert_eq!(mismatch.position(), Some((1, 13)));

    let nan = store::save(dir.path().join("nan.json"), &f64::NAN).unwrap_err();
    assert_eq!(nan.category(), Category::Encode);
    assert!(!dir.path().join("nan.json").exists());

    let is_dir = store::save(dir.path(), &Config::default()).unwrap_err();
    assert_eq!(is_dir.category(), Category::Io);
}

#[test]
fn test_generic_map_file() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Inventory {
        fruits: HashMap<String, u32>,
    }

    init_tracing();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");

    let mut fruits = HashMap::new();
    fruits.insert("mangos".to_string(), 20);
    fruits.insert("apples".to_string(), 10);
    fruits.insert("grapes".to_string(), 20);
    let inventory = Inventory { fruits };

    store::save_with_options(&path, &inventory, JsonOptions::new().with_indent(2)).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "{\n  \"fruits\": {\n    \"apples\": 10,\n    \"grapes\": 20,\n    \"mangos\": 20\n  }\n}"
    );

    let loaded: Inventory = store::load(&path).unwrap();
    assert_eq!(loaded, inventory);
}
