use electrical_quote_toolbox::config::{self, Config};
use std::path::PathBuf;

#[test]
fn missing_file_writes_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("config.toml");

    let cfg = config::load_or_default_at(&path).expect("defaults");
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.language, "auto");
    assert_eq!(cfg.log_level, "info");
    assert!(path.exists());
}

#[test]
fn saved_settings_are_reloaded() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("config.toml");

    let cfg = Config {
        language: "en".to_string(),
        catalog_path: Some(PathBuf::from("catalogue-2025.toml")),
        log_level: "debug".to_string(),
        show_row_details: false,
    };
    cfg.save_to(&path).expect("save");

    let loaded = config::load_or_default_at(&path).expect("load");
    assert_eq!(loaded, cfg);
}

#[test]
fn partial_file_fills_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "language = \"fr\"\n").expect("write");

    let cfg = config::load_or_default_at(&path).expect("load");
    assert_eq!(cfg.language, "fr");
    assert_eq!(cfg.log_level, "info");
    assert!(cfg.show_row_details);
    assert!(cfg.catalog_path.is_none());
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "language = [").expect("write");
    assert!(matches!(
        config::load_or_default_at(&path),
        Err(config::ConfigError::Serde(_))
    ));
}

#[test]
fn catalog_path_is_loaded() {
    let dir = tempfile::tempdir().expect("temp dir");
    let catalog_path = dir.path().join("catalog.toml");
    std::fs::write(&catalog_path, "version = \"vide\"\n").expect("write");

    let cfg = Config {
        catalog_path: Some(catalog_path),
        ..Config::default()
    };
    let catalog = cfg.load_catalog().expect("catalog");
    assert_eq!(catalog.version, "vide");
    assert!(catalog.circuit_breakers.is_empty());

    let builtin = Config::default().load_catalog().expect("builtin");
    assert!(!builtin.circuit_breakers.is_empty());
}
