use std::sync::Arc;

use serde_json::json;

use crate::cli::{
    CliError, Command, CommandContext, CommandResult,
    commands::emit,
    types::{ArgType, CommandArg, CommandMetadata},
};

/// Command for detaching a postgres cluster from an app.
pub struct DetachCommand {
    context: Arc<CommandContext>,
}

impl DetachCommand {
    /// Creates a new DetachCommand.
    ///
    /// # Arguments
    ///
    /// * `context` - Shared command context
    pub fn new(context: Arc<CommandContext>) -> Self {
        Self { context }
    }
}

impl Command for DetachCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let [cluster, app] = args else {
            return Err(CliError::InvalidArguments(
                "Expected <postgres-app> <app> for 'detach' command".to_string(),
            ));
        };

        self.context
            .client()
            .detach_postgres_cluster(cluster, app)?;

        let payload = json!({ "detached": true, "app": app, "postgresClusterApp": cluster });
        emit(&self.context, &payload, |_| {
            format!("Postgres cluster {cluster} is now detached from {app}")
        })
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "detach".to_string(),
            description: "Detach a postgres cluster from an app".to_string(),
            category: "postgres".to_string(),
            args: vec![
                CommandArg::required("postgres-app", "Postgres cluster app", ArgType::Identifier),
                CommandArg::required("app", "App using the database", ArgType::Identifier),
            ],
            examples: vec!["gantry postgres detach my-db my-app".to_string()],
        }
    }
}
