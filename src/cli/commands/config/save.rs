use std::{path::PathBuf, sync::Arc};

use crate::{
    app_config::DEFAULT_APP_CONFIG_FILE,
    cli::{
        CliError, Command, CommandContext, CommandResult,
        formatting::format_warning,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    orchestrator::SaveOutcome,
};

/// Command for saving an app's configuration to a local file.
///
/// Asks before replacing an existing file unless `--yes` is given.
pub struct SaveCommand {
    context: Arc<CommandContext>,
}

impl SaveCommand {
    /// Creates a new SaveCommand.
    ///
    /// # Arguments
    ///
    /// * `context` - Shared command context
    pub fn new(context: Arc<CommandContext>) -> Self {
        Self { context }
    }
}

impl Command for SaveCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let app = args.first().ok_or_else(|| {
            CliError::InvalidArguments("Expected <app> argument for 'save' command".to_string())
        })?;
        let path = args
            .get(1)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_APP_CONFIG_FILE));

        if path.exists() {
            eprintln!(
                "{}",
                format_warning("An existing configuration file has been found.")
            );
        }

        match self.context.orchestrator().save(app, &path)? {
            SaveOutcome::Written(path) => Ok(format!("Wrote config file {}", path.display())),
            SaveOutcome::Declined => Ok(String::new()),
        }
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "save".to_string(),
            description: "Save an app's configuration to a local file".to_string(),
            category: "config".to_string(),
            args: vec![
                CommandArg::required("app", "App name", ArgType::Identifier),
                CommandArg::optional("path", "Destination file (default: fly.toml)", ArgType::Path),
            ],
            examples: vec![
                "gantry config save my-app".to_string(),
                "gantry config save my-app deploy/fly.toml --yes".to_string(),
            ],
        }
    }
}
