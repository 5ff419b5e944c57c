//! Unit tests for settings module
//!
//! Filesystem access is confined to temp dirs; environment is never read.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use std::{collections::HashMap, fs, time::Duration};

use tempfile::TempDir;

use crate::{
    GantryError,
    settings::{ENV_ACCESS_TOKEN, ENV_API_BASE_URL, LogLevel, Settings},
};

#[test]
fn settings_default() {
    let settings = Settings::default();

    assert_eq!(settings.api_base_url, "https://api.fly.io");
    assert_eq!(settings.log_level, LogLevel::Warn);
    assert_eq!(settings.max_render_depth, 64);
    assert!(settings.access_token.is_none());
    assert!(settings.timeout().is_none());
}

#[test]
fn missing_file_is_created_with_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gantry").join("config.toml");

    let settings = Settings::load_file(&path).unwrap();

    assert!(path.exists());
    assert_eq!(settings, Settings::default());
}

#[test]
fn file_values_are_read() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
api_base_url = "http://localhost:4000/"
log_level = "debug"
max_render_depth = 8
timeout_secs = 30
"#,
    )
    .unwrap();

    let settings = Settings::load_file(&path).unwrap();

    assert_eq!(settings.endpoint(), "http://localhost:4000/graphql");
    assert_eq!(settings.log_level, LogLevel::Debug);
    assert_eq!(settings.max_render_depth, 8);
    assert_eq!(settings.timeout(), Some(Duration::from_secs(30)));
}

#[test]
fn invalid_file_is_toml_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "log_level = \"loud\"\n").unwrap();

    let err = Settings::load_file(&path).unwrap_err();
    assert!(matches!(err, GantryError::TomlParseError { .. }));
}

#[test]
fn overrides_replace_file_values() {
    let env: HashMap<&str, &str> = HashMap::from([
        (ENV_API_BASE_URL, "http://127.0.0.1:9000"),
        (ENV_ACCESS_TOKEN, "secret"),
    ]);
    let mut settings = Settings::default();

    settings.apply_overrides(|name| env.get(name).map(|v| v.to_string()));

    assert_eq!(settings.endpoint(), "http://127.0.0.1:9000/graphql");
    assert_eq!(settings.access_token.as_deref(), Some("secret"));
}

#[test]
fn empty_overrides_are_ignored() {
    let mut settings = Settings::default();
    settings.apply_overrides(|_| Some(String::new()));

    assert_eq!(settings, Settings::default());
}

#[test]
fn redacted_masks_token() {
    let settings = Settings {
        access_token: Some("secret".to_string()),
        ..Settings::default()
    };

    let shown = toml::to_string(&settings.redacted()).unwrap();
    assert!(!shown.contains("secret"));
    assert!(shown.contains("********"));
}

#[test]
fn json_schema_lists_fields() {
    let schema = Settings::json_schema().unwrap();

    assert!(schema.contains("api_base_url"));
    assert!(schema.contains("max_render_depth"));
}

#[test]
fn log_level_display_matches_serde() {
    for level in [LogLevel::Error, LogLevel::Warn, LogLevel::Info, LogLevel::Debug, LogLevel::Trace] {
        let serialized = toml::Value::try_from(level).unwrap();
        assert_eq!(serialized.as_str().unwrap(), level.to_string());
    }
}
