use std::sync::Arc;

use crate::cli::{
    CliError, Command, CommandContext, CommandResult,
    types::{ArgType, CommandArg, CommandMetadata},
};

/// Command for displaying an app's server-side configuration.
///
/// Renders the definition as indented text, or prints it as JSON with
/// `--json`.
///
/// # Example Usage
///
/// ```bash
/// gantry config show my-app
/// gantry config show my-app --json
/// ```
pub struct ShowCommand {
    context: Arc<CommandContext>,
}

impl ShowCommand {
    /// Creates a new ShowCommand.
    ///
    /// # Arguments
    ///
    /// * `context` - Shared command context
    pub fn new(context: Arc<CommandContext>) -> Self {
        Self { context }
    }
}

impl Command for ShowCommand {
    /// Fetches and formats the configuration of the named app.
    ///
    /// # Errors
    ///
    /// * `CliError::InvalidArguments` - If no app argument is provided
    /// * `CliError::Operation` - If the remote call fails
    fn execute(&self, args: &[String]) -> CommandResult {
        let app = args.first().ok_or_else(|| {
            CliError::InvalidArguments("Expected <app> argument for 'show' command".to_string())
        })?;

        let mut buffer = Vec::new();
        self.context
            .orchestrator()
            .show(app, self.context.output(), &mut buffer)?;

        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "show".to_string(),
            description: "Show an app's configuration".to_string(),
            category: "config".to_string(),
            args: vec![CommandArg::required("app", "App name", ArgType::Identifier)],
            examples: vec![
                "gantry config show my-app".to_string(),
                "gantry config show my-app --json".to_string(),
            ],
        }
    }
}
