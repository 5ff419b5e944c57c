use std::sync::Arc;

use crate::cli::{
    CliError, Command, CommandContext, CommandResult,
    commands::emit,
    types::{ArgType, CommandArg, CommandMetadata},
};

use super::describe_deployment;

/// Command for creating a postgres cluster.
///
/// # Example Usage
///
/// ```bash
/// gantry postgres create my-org my-db ord
/// ```
pub struct CreateCommand {
    context: Arc<CommandContext>,
}

impl CreateCommand {
    /// Creates a new CreateCommand.
    ///
    /// # Arguments
    ///
    /// * `context` - Shared command context
    pub fn new(context: Arc<CommandContext>) -> Self {
        Self { context }
    }
}

impl Command for CreateCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let [organization, name, region] = args else {
            return Err(CliError::InvalidArguments(
                "Expected <organization> <name> <region> for 'create' command".to_string(),
            ));
        };

        let deployment = self
            .context
            .client()
            .create_postgres_cluster(organization, name, region)?;

        emit(&self.context, &deployment, describe_deployment)
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "create".to_string(),
            description: "Create a postgres cluster".to_string(),
            category: "postgres".to_string(),
            args: vec![
                CommandArg::required("organization", "Organization id", ArgType::Identifier),
                CommandArg::required("name", "Cluster app name", ArgType::Identifier),
                CommandArg::required("region", "Region code", ArgType::String),
            ],
            examples: vec!["gantry postgres create my-org my-db ord".to_string()],
        }
    }
}
