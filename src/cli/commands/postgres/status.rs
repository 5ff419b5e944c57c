use std::sync::Arc;

use crate::cli::{
    CliError, Command, CommandContext, CommandResult,
    commands::emit,
    types::{ArgType, CommandArg, CommandMetadata},
};

use super::describe_deployment;

/// Command for checking the progress of a cluster deployment.
pub struct StatusCommand {
    context: Arc<CommandContext>,
}

impl StatusCommand {
    /// Creates a new StatusCommand.
    ///
    /// # Arguments
    ///
    /// * `context` - Shared command context
    pub fn new(context: Arc<CommandContext>) -> Self {
        Self { context }
    }
}

impl Command for StatusCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let id = args.first().ok_or_else(|| {
            CliError::InvalidArguments(
                "Expected <deployment> argument for 'status' command".to_string(),
            )
        })?;

        let deployment = self.context.client().get_template_deployment(id)?;

        emit(&self.context, &deployment, describe_deployment)
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "status".to_string(),
            description: "Show the status of a cluster deployment".to_string(),
            category: "postgres".to_string(),
            args: vec![CommandArg::required(
                "deployment",
                "Template deployment id",
                ArgType::Identifier,
            )],
            examples: vec!["gantry postgres status dep_123".to_string()],
        }
    }
}
