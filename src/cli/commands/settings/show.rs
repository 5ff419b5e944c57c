use std::sync::Arc;

use crate::{
    GantryError,
    cli::{
        Command, CommandContext, CommandResult,
        commands::emit,
        types::CommandMetadata,
    },
};

/// Command for printing the effective settings.
///
/// The access token is masked.
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
    fn execute(&self, _args: &[String]) -> CommandResult {
        let settings = self.context.settings().redacted();
        let human = toml::to_string_pretty(&settings)
            .map_err(|e| GantryError::Settings(format!("cannot serialize settings: {e}")))?;

        emit(&self.context, &settings, |_| human.trim_end().to_string())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "show".to_string(),
            description: "Show effective settings".to_string(),
            category: "settings".to_string(),
            args: vec![],
            examples: vec![
                "gantry settings show".to_string(),
                "gantry settings show --json".to_string(),
            ],
        }
    }
}
