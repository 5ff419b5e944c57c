use std::sync::Arc;

use serde_json::json;

use crate::{
    api::AttachPostgresClusterInput,
    cli::{
        CliError, Command, CommandContext, CommandResult,
        commands::emit,
        types::{ArgType, CommandArg, CommandMetadata},
    },
};

/// Command for attaching a postgres cluster to an app.
///
/// The server creates the database and stores its connection string as a
/// secret on the app.
///
/// # Example Usage
///
/// ```bash
/// gantry postgres attach my-app my-db
/// gantry postgres attach my-app my-db orders ORDERS_DATABASE_URL
/// ```
pub struct AttachCommand {
    context: Arc<CommandContext>,
}

impl AttachCommand {
    /// Creates a new AttachCommand.
    ///
    /// # Arguments
    ///
    /// * `context` - Shared command context
    pub fn new(context: Arc<CommandContext>) -> Self {
        Self { context }
    }
}

impl Command for AttachCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let (Some(app), Some(cluster)) = (args.first(), args.get(1)) else {
            return Err(CliError::InvalidArguments(
                "Expected <app> <postgres-app> for 'attach' command".to_string(),
            ));
        };

        let input = AttachPostgresClusterInput {
            app_id: app.clone(),
            postgres_cluster_app_id: cluster.clone(),
            database_name: args.get(2).cloned(),
            variable_name: args.get(3).cloned(),
        };

        let (app, cluster) = self.context.client().attach_postgres_cluster(&input)?;
        let payload = json!({ "app": app, "postgresClusterApp": cluster });

        emit(&self.context, &payload, |_| {
            format!("Postgres cluster {} is now attached to {}", cluster.name, app.name)
        })
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "attach".to_string(),
            description: "Attach a postgres cluster to an app".to_string(),
            category: "postgres".to_string(),
            args: vec![
                CommandArg::required("app", "App that will use the database", ArgType::Identifier),
                CommandArg::required("postgres-app", "Postgres cluster app", ArgType::Identifier),
                CommandArg::optional("database", "Database name", ArgType::String),
                CommandArg::optional("variable", "Secret name for the connection string", ArgType::String),
            ],
            examples: vec![
                "gantry postgres attach my-app my-db".to_string(),
                "gantry postgres attach my-app my-db orders ORDERS_DATABASE_URL".to_string(),
            ],
        }
    }
}
