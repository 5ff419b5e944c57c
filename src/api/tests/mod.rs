//! Unit tests for the api module
//!
//! Every test runs against `StaticTransport`; no network involved.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use std::{cell::RefCell, collections::VecDeque};

use serde_json::{Value, json};

use crate::{
    GantryError, Result,
    api::{
        ApiClient, AttachPostgresClusterInput, FieldPath, OperationKind, OperationRequest,
        RemoteEnvelope, RemoteErrorEntry, Transport, operations, unwrap, unwrap_value,
    },
};

/// Transport double answering from a queue and recording every request.
#[derive(Default)]
pub(crate) struct StaticTransport {
    responses: RefCell<VecDeque<Result<RemoteEnvelope>>>,
    pub(crate) requests: RefCell<Vec<OperationRequest>>,
}

impl StaticTransport {
    pub(crate) fn replying(data: Value) -> Self {
        let transport = Self::default();
        transport.push(Ok(RemoteEnvelope::with_data(data)));
        transport
    }

    pub(crate) fn failing(error: GantryError) -> Self {
        let transport = Self::default();
        transport.push(Err(error));
        transport
    }

    pub(crate) fn push(&self, response: Result<RemoteEnvelope>) {
        self.responses.borrow_mut().push_back(response);
    }

    pub(crate) fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl Transport for StaticTransport {
    fn execute(&self, request: &OperationRequest) -> Result<RemoteEnvelope> {
        self.requests.borrow_mut().push(request.clone());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("no canned response for request"))
    }
}

fn envelope_with_errors(messages: &[&str]) -> RemoteEnvelope {
    RemoteEnvelope {
        data: Some(json!({"app": null})),
        errors: messages
            .iter()
            .map(|m| RemoteErrorEntry {
                message: m.to_string(),
                extra: Default::default(),
            })
            .collect(),
    }
}

#[test]
fn request_kind_follows_document_keyword() {
    assert_eq!(
        OperationRequest::new(operations::CREATE_POSTGRES_CLUSTER).kind(),
        OperationKind::Mutation
    );
    assert_eq!(
        OperationRequest::new(operations::GET_CONFIG).kind(),
        OperationKind::Query
    );
}

#[test]
fn request_var_rebinding_keeps_last_value() {
    let request = OperationRequest::new("query { x }")
        .var("appName", "first")
        .var("appName", "second");

    assert_eq!(request.variables().len(), 1);
    assert_eq!(request.variables()["appName"], json!("second"));
}

#[test]
fn request_body_has_query_and_variables() {
    let request = OperationRequest::new("query { x }").var("id", "abc");

    assert_eq!(
        request.to_body(),
        json!({"query": "query { x }", "variables": {"id": "abc"}})
    );
}

#[test]
fn envelope_decodes_errors_with_extra_members() {
    let envelope = RemoteEnvelope::from_body(
        r#"{"data":null,"errors":[{"message":"not found","path":["app"]},{"message":"second"}]}"#,
    )
    .unwrap();

    assert_eq!(envelope.error_messages(), vec!["not found", "second"]);
    assert_eq!(envelope.errors[0].extra["path"], json!(["app"]));
}

#[test]
fn envelope_rejects_non_json_body() {
    let err = RemoteEnvelope::from_body("<html>").unwrap_err();
    assert!(matches!(err, GantryError::Decode { .. }));
}

#[test]
fn unwrap_reports_remote_errors_in_order() {
    let envelope = envelope_with_errors(&["first", "second"]);

    let err = unwrap_value(&envelope, &FieldPath::parse("app")).unwrap_err();

    assert_eq!(
        err.remote_messages().unwrap(),
        &["first".to_string(), "second".to_string()]
    );
}

#[test]
fn unwrap_null_nested_field_is_missing_field() {
    let envelope = RemoteEnvelope::with_data(json!({"app": {"postgresAppRole": null}}));

    let err = unwrap::<Vec<Value>>(&envelope, &FieldPath::parse("app.postgresAppRole.databases"))
        .unwrap_err();

    match err {
        GantryError::MissingField { path } => assert_eq!(path, "app.postgresAppRole"),
        other => panic!("expected MissingField, got {other:?}"),
    }
}

#[test]
fn unwrap_absent_field_is_missing_field() {
    let envelope = RemoteEnvelope::with_data(json!({"app": {"postgresAppRole": {"name": "x"}}}));

    let err = unwrap::<Vec<Value>>(&envelope, &FieldPath::parse("app.postgresAppRole.users"))
        .unwrap_err();

    match err {
        GantryError::MissingField { path } => assert_eq!(path, "app.postgresAppRole.users"),
        other => panic!("expected MissingField, got {other:?}"),
    }
}

#[test]
fn unwrap_null_data_is_missing_field() {
    let envelope = RemoteEnvelope {
        data: None,
        errors: Vec::new(),
    };

    let err = unwrap_value(&envelope, &FieldPath::parse("app")).unwrap_err();
    assert!(matches!(err, GantryError::MissingField { path } if path == "data"));
}

#[test]
fn unwrap_indexes_into_sequences() {
    let envelope = RemoteEnvelope::with_data(json!({"nodes": [{"name": "a"}, {"name": "b"}]}));

    let name: String = unwrap(&envelope, &FieldPath::parse("nodes.1.name")).unwrap();
    assert_eq!(name, "b");

    let err = unwrap_value(&envelope, &FieldPath::parse("nodes.5")).unwrap_err();
    assert!(matches!(err, GantryError::MissingField { .. }));
}

#[test]
fn unwrap_shape_mismatch_is_decode_error() {
    let envelope = RemoteEnvelope::with_data(json!({"count": "seven"}));

    let err = unwrap::<u32>(&envelope, &FieldPath::parse("count")).unwrap_err();
    assert!(matches!(err, GantryError::Decode { path, .. } if path == "count"));
}

#[test]
fn unwrap_does_not_touch_envelope() {
    let envelope = RemoteEnvelope::with_data(json!({"a": {"b": 1}}));
    let before = envelope.clone();

    let _: i64 = unwrap(&envelope, &FieldPath::parse("a.b")).unwrap();
    assert_eq!(envelope, before);
}

#[test]
fn client_create_flattens_app_nodes() {
    let transport = StaticTransport::replying(json!({
        "createPostgresCluster": {
            "templateDeployment": {
                "id": "td_1",
                "status": "pending",
                "apps": {"nodes": [{"name": "pg-db", "state": "deployed", "status": "running"}]}
            }
        }
    }));
    let client = ApiClient::new(&transport);

    let deployment = client
        .create_postgres_cluster("org_1", "pg-db", "ord")
        .unwrap();

    assert_eq!(deployment.id, "td_1");
    assert_eq!(deployment.apps.len(), 1);
    assert_eq!(deployment.apps[0].name, "pg-db");

    let requests = transport.requests.borrow();
    assert_eq!(
        requests[0].variables()["input"],
        json!({"organizationId": "org_1", "name": "pg-db", "region": "ord"})
    );
}

#[test]
fn deployment_apps_default_to_empty() {
    for apps in [json!(null), json!({}), json!({"nodes": null})] {
        let transport = StaticTransport::replying(json!({
            "templateDeploymentNode": {"id": "td_2", "status": "pending", "apps": apps}
        }));

        let deployment = ApiClient::new(&transport).get_template_deployment("td_2").unwrap();
        assert!(deployment.apps.is_empty());
    }

    let transport = StaticTransport::replying(json!({
        "templateDeploymentNode": {"id": "td_3", "status": "pending"}
    }));
    let deployment = ApiClient::new(&transport).get_template_deployment("td_3").unwrap();
    assert!(deployment.apps.is_empty());
}

#[test]
fn client_unresolved_deployment_is_missing_field() {
    let transport = StaticTransport::replying(json!({"templateDeploymentNode": null}));
    let client = ApiClient::new(&transport);

    let err = client.get_template_deployment("nope").unwrap_err();
    assert!(matches!(err, GantryError::MissingField { path } if path == "templateDeploymentNode"));
}

#[test]
fn client_attach_returns_both_apps() {
    let transport = StaticTransport::replying(json!({
        "attachPostgresCluster": {
            "app": {"name": "web"},
            "postgresClusterApp": {"name": "pg"}
        }
    }));
    let client = ApiClient::new(&transport);
    let input = AttachPostgresClusterInput {
        app_id: "web".to_string(),
        postgres_cluster_app_id: "pg".to_string(),
        database_name: None,
        variable_name: Some("DATABASE_URL".to_string()),
    };

    let (app, cluster) = client.attach_postgres_cluster(&input).unwrap();

    assert_eq!(app.name, "web");
    assert_eq!(cluster.name, "pg");
    assert_eq!(
        transport.requests.borrow()[0].variables()["input"],
        json!({"appId": "web", "postgresClusterAppId": "pg", "variableName": "DATABASE_URL"})
    );
}

#[test]
fn client_detach_checks_acknowledgement() {
    let transport = StaticTransport::replying(json!({"detachPostgresCluster": {"clientMutationId": null}}));
    let client = ApiClient::new(&transport);

    client.detach_postgres_cluster("pg", "web").unwrap();
}

#[test]
fn client_lists_databases_and_users() {
    let transport = StaticTransport::replying(json!({
        "app": {"postgresAppRole": {
            "name": "postgres_cluster",
            "databases": [{"name": "web", "users": ["web_user"]}]
        }}
    }));
    transport.push(Ok(RemoteEnvelope::with_data(json!({
        "app": {"postgresAppRole": {
            "name": "postgres_cluster",
            "users": [{"username": "admin", "isSuperuser": true, "databases": ["web"]}]
        }}
    }))));
    let client = ApiClient::new(&transport);

    let databases = client.list_postgres_databases("pg").unwrap();
    assert_eq!(databases[0].users, vec!["web_user"]);

    let users = client.list_postgres_users("pg").unwrap();
    assert!(users[0].is_superuser);
    assert_eq!(transport.request_count(), 2);
}

#[test]
fn client_passes_transport_errors_through() {
    let transport = StaticTransport::failing(GantryError::Transport {
        endpoint: "http://localhost".to_string(),
        details: "connection refused".to_string(),
    });
    let client = ApiClient::new(&transport);

    let err = client.get_config("web").unwrap_err();
    assert!(err.is_transport());
}

#[test]
fn client_parse_config_reads_verdict() {
    let transport = StaticTransport::replying(json!({
        "app": {"parseConfig": {"definition": {}, "valid": false, "errors": ["port 8080 invalid"]}}
    }));
    let client = ApiClient::new(&transport);

    let config = client.parse_config("web", &json!({"services": []})).unwrap();

    assert!(!config.valid);
    assert_eq!(config.errors, vec!["port 8080 invalid"]);
}
