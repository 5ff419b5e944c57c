use std::{path::PathBuf, sync::Arc};

use crate::{
    GantryError,
    app_config::{AppConfigFile, DEFAULT_APP_CONFIG_FILE},
    cli::{
        CliError, Command, CommandContext, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
};

/// Command for validating a local configuration file against the server.
///
/// Exits with status 2 and lists every error when the configuration is
/// rejected.
pub struct ValidateCommand {
    context: Arc<CommandContext>,
}

impl ValidateCommand {
    /// Creates a new ValidateCommand.
    ///
    /// # Arguments
    ///
    /// * `context` - Shared command context
    pub fn new(context: Arc<CommandContext>) -> Self {
        Self { context }
    }
}

impl Command for ValidateCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let app = args.first().ok_or_else(|| {
            CliError::InvalidArguments("Expected <app> argument for 'validate' command".to_string())
        })?;
        let path = args
            .get(1)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_APP_CONFIG_FILE));

        let definition = AppConfigFile::load(&path)?.definition_json()?;
        eprintln!("Validating {}", path.display());

        let mut buffer = Vec::new();
        let result = self
            .context
            .orchestrator()
            .validate(app, &definition, &mut buffer);
        let report = String::from_utf8_lossy(&buffer).into_owned();

        match result {
            Ok(_) => Ok(report),
            Err(GantryError::ValidationFailed { .. }) => Err(CliError::ValidationFailed { report }),
            Err(e) => Err(e.into()),
        }
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "validate".to_string(),
            description: "Validate a local configuration file".to_string(),
            category: "config".to_string(),
            args: vec![
                CommandArg::required("app", "App name", ArgType::Identifier),
                CommandArg::optional("path", "Configuration file (default: fly.toml)", ArgType::Path),
            ],
            examples: vec!["gantry config validate my-app fly.toml".to_string()],
        }
    }
}
