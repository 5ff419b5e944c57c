use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// An app as returned by deployment and attach operations.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct App {
    /// App name
    pub name: String,
    /// Lifecycle state, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Deployment status, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// A deployment created from a template, e.g. a postgres cluster.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TemplateDeployment {
    /// Node id of the deployment
    pub id: String,
    /// Overall deployment status
    pub status: String,
    /// Apps that make up the deployment
    #[serde(default, deserialize_with = "deserialize_nodes")]
    pub apps: Vec<App>,
}

/// Input of the attach operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachPostgresClusterInput {
    /// App that will consume the database
    pub app_id: String,
    /// Postgres cluster app to attach
    pub postgres_cluster_app_id: String,
    /// Database to create or reuse; server picks one when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    /// Secret name holding the connection string; server default when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_name: Option<String>,
}

/// Result of a successful attach.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachPostgresClusterPayload {
    /// The consuming app
    pub app: App,
    /// The attached postgres cluster app
    pub postgres_cluster_app: App,
}

/// A database in a postgres cluster.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PostgresClusterDatabase {
    /// Database name
    pub name: String,
    /// Users with access to the database
    #[serde(default)]
    pub users: Vec<String>,
}

/// A user of a postgres cluster.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostgresClusterUser {
    /// Login name
    pub username: String,
    /// Whether the user is a superuser
    #[serde(default)]
    pub is_superuser: bool,
    /// Databases the user can access
    #[serde(default)]
    pub databases: Vec<String>,
}

/// Server-side view of an app's configuration.
///
/// `get_config` fills only `definition`; `parse_config` also reports
/// validity and the validator's error strings.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Service definition tree
    #[serde(default)]
    pub definition: Value,
    /// Validator verdict
    #[serde(default)]
    pub valid: bool,
    /// Validator error strings, present when `valid` is false
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub errors: Vec<String>,
}

#[derive(Deserialize)]
struct Connection<T> {
    nodes: Option<Vec<T>>,
}

fn deserialize_nodes<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let connection = Option::<Connection<T>>::deserialize(deserializer)?;
    Ok(connection.and_then(|c| c.nodes).unwrap_or_default())
}

fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
