//! Unit tests for the orchestrator module
//!
//! Remote calls are answered by `StaticTransport`; files live in temp dirs.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use std::fs;

use serde_json::{Value, json};
use tempfile::TempDir;

use crate::{
    GantryError,
    api::{ApiClient, tests::StaticTransport},
    app_config::AppConfigFile,
    orchestrator::{ConfigOrchestrator, OutputMode, SaveOutcome},
    prompt::FixedAnswer,
    render::{ConfigTree, Renderer},
};

fn config_response(definition: Value) -> Value {
    json!({"app": {"config": {"definition": definition}}})
}

fn orchestrator(
    transport: &StaticTransport,
    answer: bool,
) -> ConfigOrchestrator<&StaticTransport, FixedAnswer> {
    ConfigOrchestrator::new(ApiClient::new(transport), FixedAnswer(answer), Renderer::default())
}

#[test]
fn fetch_returns_definition_tree() {
    let transport = StaticTransport::replying(config_response(json!({"kill_timeout": 5})));

    let tree = orchestrator(&transport, true).fetch("web").unwrap();

    assert_eq!(tree, ConfigTree::mapping([("kill_timeout", ConfigTree::Integer(5))]));
    assert_eq!(transport.requests.borrow()[0].variables()["appName"], json!("web"));
}

#[test]
fn fetch_null_definition_is_missing_field() {
    let transport = StaticTransport::replying(config_response(Value::Null));

    let err = orchestrator(&transport, true).fetch("web").unwrap_err();
    assert!(matches!(err, GantryError::MissingField { .. }));
}

#[test]
fn show_human_renders_under_services_label() {
    let transport = StaticTransport::replying(config_response(json!({
        "internal_port": 8080,
        "protocol": "tcp"
    })));
    let mut out = Vec::new();

    let diagnostics = orchestrator(&transport, true)
        .show("web", OutputMode::Human, &mut out)
        .unwrap();

    assert!(diagnostics.is_empty());
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "\nServices\n  Internal Port: 8080\n  Protocol: tcp\n\n"
    );
}

#[test]
fn show_json_writes_raw_definition() {
    let definition = json!({"internal_port": 8080, "auto": true});
    let transport = StaticTransport::replying(config_response(definition.clone()));
    let mut out = Vec::new();

    orchestrator(&transport, true)
        .show("web", OutputMode::Json, &mut out)
        .unwrap();

    let written: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(written, definition);
}

#[test]
fn save_writes_new_artifact() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fly.toml");
    let transport = StaticTransport::replying(config_response(json!({"kill_timeout": 5})));

    let outcome = orchestrator(&transport, false).save("web", &path).unwrap();

    assert_eq!(outcome, SaveOutcome::Written(path.clone()));
    let saved = AppConfigFile::load(&path).unwrap();
    assert_eq!(saved.app, "web");
    assert_eq!(saved.definition_json().unwrap(), json!({"kill_timeout": 5}));
}

#[test]
fn save_declined_overwrite_is_success_without_write() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fly.toml");
    fs::write(&path, "app = \"keep\"\n").unwrap();
    let transport = StaticTransport::default();

    let outcome = orchestrator(&transport, false).save("web", &path).unwrap();

    assert_eq!(outcome, SaveOutcome::Declined);
    assert_eq!(fs::read_to_string(&path).unwrap(), "app = \"keep\"\n");
    assert_eq!(transport.request_count(), 0);
}

#[test]
fn save_confirmed_overwrite_replaces_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fly.toml");
    fs::write(&path, "app = \"old\"\n").unwrap();
    let transport = StaticTransport::replying(config_response(json!({"kill_timeout": 5})));

    let outcome = orchestrator(&transport, true).save("web", &path).unwrap();

    assert!(matches!(outcome, SaveOutcome::Written(_)));
    assert_eq!(AppConfigFile::load(&path).unwrap().app, "web");
}

#[test]
fn save_fetch_failure_leaves_no_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fly.toml");
    let transport = StaticTransport::failing(GantryError::Remote {
        messages: vec!["Could not resolve App".to_string()],
    });

    let err = orchestrator(&transport, true).save("web", &path).unwrap_err();

    assert!(err.remote_messages().is_some());
    assert!(!path.exists());
}

#[test]
fn validate_valid_prints_confirmation() {
    let transport = StaticTransport::replying(json!({
        "app": {"parseConfig": {"definition": {}, "valid": true, "errors": []}}
    }));
    let mut out = Vec::new();

    let result = orchestrator(&transport, true)
        .validate("web", &json!({}), &mut out)
        .unwrap();

    assert!(result.valid);
    assert!(result.errors.is_empty());
    assert_eq!(String::from_utf8(out).unwrap(), "✓ Configuration is valid\n");
}

#[test]
fn validate_invalid_returns_formatted_errors() {
    let transport = StaticTransport::replying(json!({
        "app": {"parseConfig": {"definition": {}, "valid": false, "errors": ["port 8080 invalid"]}}
    }));
    let mut out = Vec::new();

    let err = orchestrator(&transport, true)
        .validate("web", &json!({"services": []}), &mut out)
        .unwrap_err();

    assert_eq!(
        err.validation_errors().unwrap(),
        &["✘ port 8080 invalid".to_string()]
    );
    assert_eq!(String::from_utf8(out).unwrap(), "\n    ✘ port 8080 invalid\n\n");
}

#[test]
fn validate_call_failure_is_not_validation_failure() {
    let transport = StaticTransport::failing(GantryError::Transport {
        endpoint: "http://localhost".to_string(),
        details: "timed out".to_string(),
    });
    let mut out = Vec::new();

    let err = orchestrator(&transport, true)
        .validate("web", &json!({}), &mut out)
        .unwrap_err();

    assert!(err.is_transport());
    assert!(err.validation_errors().is_none());
    assert!(out.is_empty());
}
