//! Unit tests for the render module
//!
//! All rendering goes to in-memory buffers.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use serde_json::json;

use crate::render::{ConfigTree, RenderDiagnostic, Renderer, format_key};

fn render(tree: &ConfigTree, key: &str, depth: usize) -> String {
    Renderer::default().render_to_string(tree, key, depth).0
}

#[test]
fn format_key_replaces_underscores_and_titles_words() {
    assert_eq!(format_key("primary_region"), "Primary Region");
    assert_eq!(format_key("kill_timeout"), "Kill Timeout");
    assert_eq!(format_key("services"), "Services");
    assert_eq!(format_key("already Title"), "Already Title");
    assert_eq!(format_key("tcp_checks"), "Tcp Checks");
    assert_eq!(format_key("x__y"), "X  Y");
    assert_eq!(format_key(""), "");
}

#[test]
fn format_key_keeps_inner_casing() {
    assert_eq!(format_key("internalPort"), "InternalPort");
    assert_eq!(format_key("HTTP_service"), "HTTP Service");
}

#[test]
fn string_and_integer_scalars_use_indent() {
    assert_eq!(render(&ConfigTree::string("ord"), "primary_region", 0), "Primary Region: ord\n");
    assert_eq!(render(&ConfigTree::Integer(8080), "internal_port", 2), "    Internal Port: 8080\n");
}

#[test]
fn float_scalars_truncate_toward_zero() {
    assert_eq!(render(&ConfigTree::Float(3.9), "value", 0), "Value: 3\n");
    assert_eq!(render(&ConfigTree::Float(-2.5), "value", 0), "Value: -2\n");
    assert_eq!(render(&ConfigTree::Float(0.99), "value", 0), "Value: 0\n");
}

#[test]
fn null_scalar_renders_literal() {
    let tree = ConfigTree::mapping([("image", ConfigTree::Null)]);
    assert_eq!(render(&tree, "", 0), "  Image: null\n\n");
}

#[test]
fn handlers_of_scalars_render_inline() {
    let tree = ConfigTree::Sequence(vec![ConfigTree::string("http"), ConfigTree::string("tls")]);
    assert_eq!(render(&tree, "handlers", 0), "Handlers: [ http,tls ]\n");
}

#[test]
fn handlers_inline_keeps_float_fraction() {
    let tree = ConfigTree::Sequence(vec![ConfigTree::Integer(1), ConfigTree::Float(2.5)]);
    assert_eq!(render(&tree, "handlers", 1), "  Handlers: [ 1,2.5 ]\n");
}

#[test]
fn handlers_with_nested_elements_fall_back_to_block() {
    let tree = ConfigTree::Sequence(vec![ConfigTree::mapping([("a", ConfigTree::string("b"))])]);
    assert_eq!(render(&tree, "handlers", 0), "\nHandlers\n    A: b\n\n");
}

#[test]
fn other_sequences_never_inline() {
    let tree = ConfigTree::Sequence(vec![ConfigTree::string("http"), ConfigTree::string("tls")]);
    assert_eq!(render(&tree, "protocols", 0), "\nProtocols\n  : http\n  : tls\n");
}

#[test]
fn sequence_of_mappings_renders_header_then_unkeyed_elements() {
    let tree = ConfigTree::Sequence(vec![
        ConfigTree::mapping([("name", ConfigTree::string("a"))]),
        ConfigTree::mapping([("name", ConfigTree::string("b"))]),
    ]);

    assert_eq!(
        render(&tree, "nodes", 0),
        "\nNodes\n    Name: a\n\n    Name: b\n\n"
    );
}

#[test]
fn unkeyed_mapping_has_no_header() {
    let tree = ConfigTree::mapping([("port", ConfigTree::Integer(80))]);
    assert_eq!(render(&tree, "", 0), "  Port: 80\n\n");
}

#[test]
fn mapping_output_ignores_insertion_order() {
    let forward = ConfigTree::mapping([
        ("app", ConfigTree::string("web")),
        ("kill_signal", ConfigTree::string("SIGINT")),
        ("kill_timeout", ConfigTree::Integer(5)),
    ]);
    let backward = ConfigTree::mapping([
        ("kill_timeout", ConfigTree::Integer(5)),
        ("kill_signal", ConfigTree::string("SIGINT")),
        ("app", ConfigTree::string("web")),
    ]);

    let expected = "\nServices\n  App: web\n  Kill Signal: SIGINT\n  Kill Timeout: 5\n\n";
    assert_eq!(render(&forward, "services", 0), expected);
    assert_eq!(render(&backward, "services", 0), expected);
}

#[test]
fn mapping_repeated_key_replaces_value() {
    let tree = ConfigTree::mapping([
        ("port", ConfigTree::Integer(80)),
        ("port", ConfigTree::Integer(443)),
    ]);

    assert_eq!(tree, ConfigTree::Mapping(vec![("port".to_string(), ConfigTree::Integer(443))]));
}

#[test]
fn nested_definition_renders_deterministically() {
    let tree = ConfigTree::from(json!({
        "services": [{
            "ports": [{"port": 80, "handlers": ["http"]}],
            "internal_port": 8080
        }],
        "kill_timeout": 5
    }));

    assert_eq!(
        render(&tree, "definition", 0),
        "\nDefinition\n  Kill Timeout: 5\n\n  Services\n      Internal Port: 8080\n\n      Ports\n          Handlers: [ http ]\n          Port: 80\n\n\n\n"
    );
}

#[test]
fn unknown_values_emit_diagnostic_and_continue() {
    let tree = ConfigTree::from(json!({"auto_rollback": true, "b": "x"}));

    let (text, diagnostics) = Renderer::default().render_to_string(&tree, "", 0);

    assert_eq!(
        text,
        "  ! unrenderable value for 'Auto Rollback'\n    true (bool)\n  B: x\n\n"
    );
    assert_eq!(
        diagnostics,
        vec![RenderDiagnostic::UnrenderableValue {
            key: "auto_rollback".to_string(),
            depth: 1,
            raw: "true".to_string(),
            type_name: "bool".to_string(),
        }]
    );
}

#[test]
fn depth_limit_stops_descent_but_not_siblings() {
    let tree = ConfigTree::from(json!({"a": {"b": {"c": 1}}, "z": 2}));

    let (text, diagnostics) = Renderer::new(1).render_to_string(&tree, "", 0);

    assert_eq!(
        text,
        "\n  A\n    ! depth limit 1 exceeded at 'B'\n\n  Z: 2\n\n"
    );
    assert!(matches!(
        diagnostics.as_slice(),
        [RenderDiagnostic::DepthExceeded { depth: 2, limit: 1, .. }]
    ));
}

#[test]
fn json_numbers_decode_to_integer_or_float() {
    assert_eq!(ConfigTree::from(json!(3)), ConfigTree::Integer(3));
    assert_eq!(ConfigTree::from(json!(3.5)), ConfigTree::Float(3.5));
    assert_eq!(ConfigTree::from(json!(null)), ConfigTree::Null);
    assert_eq!(ConfigTree::from(json!(false)).type_str(), "bool");
}

#[test]
fn integers_beyond_signed_range_keep_their_digits() {
    let tree = ConfigTree::from(json!({"max": 18446744073709551615u64}));
    assert_eq!(tree, ConfigTree::mapping([("max", ConfigTree::Integer(18446744073709551615))]));

    let (text, diagnostics) = Renderer::default().render_to_string(&tree, "", 0);
    assert_eq!(text, "  Max: 18446744073709551615\n\n");
    assert!(diagnostics.is_empty());
}

#[test]
fn render_writes_to_any_writer() {
    let mut out = Vec::new();
    let diagnostics = Renderer::default()
        .render(&mut out, &ConfigTree::Integer(1), "count", 1)
        .unwrap();

    assert!(diagnostics.is_empty());
    assert_eq!(String::from_utf8(out).unwrap(), "  Count: 1\n");
}
