use std::{collections::HashMap, sync::Arc};

use super::{
    CliError, Command, CommandContext,
    commands::{config, postgres, settings},
    types::CommandMetadata,
};

/// Registry for CLI commands organized by category.
///
/// # Example Structure
///
/// ```text
/// registry
/// ├── config
/// │   ├── show
/// │   ├── save
/// │   └── validate
/// ├── postgres
/// │   ├── create
/// │   ├── attach
/// │   └── ...
/// └── settings
///     ├── show
///     └── schema
/// ```
pub struct CommandRegistry {
    /// Nested HashMap structure: category name -> (command name -> command implementation)
    categories: HashMap<String, HashMap<String, Box<dyn Command>>>,
    context: Arc<CommandContext>,
}

impl CommandRegistry {
    /// Creates a new empty command registry.
    ///
    /// The registry starts with no commands registered. Commands must be added
    /// using `register_command` or `register_all_commands`.
    pub fn new(context: Arc<CommandContext>) -> Self {
        Self {
            categories: HashMap::new(),
            context,
        }
    }

    /// Registers a command in the specified category.
    ///
    /// The command's metadata name is its key within the category; a
    /// command with the same name replaces the earlier one.
    pub fn register_command(&mut self, category: &str, command: Box<dyn Command>) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(command.metadata().name, command);
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `CliError::CommandNotFound` if the category or command doesn't
    /// exist, `CliError::InvalidArguments` if the argument count doesn't fit
    /// the command's metadata. Other errors come from the command itself.
    pub fn execute(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        let found_category = self.categories.get(category).ok_or_else(|| {
            CliError::CommandNotFound(format!("Failed to find category '{category}'"))
        })?;

        let found_command = found_category.get(command_name).ok_or_else(|| {
            CliError::CommandNotFound(format!(
                "Failed to find command '{command_name}' in category '{category}'"
            ))
        })?;

        Self::validate_args(&found_command.metadata(), args)?;

        found_command.execute(args)
    }

    /// Lists all registered commands organized by category.
    ///
    /// Categories and commands are sorted alphabetically for consistent display.
    pub fn list_commands(&self) -> Vec<(String, Vec<CommandMetadata>)> {
        let mut categories: Vec<(String, Vec<CommandMetadata>)> = self
            .categories
            .iter()
            .map(|(category, commands)| {
                let mut command_list: Vec<CommandMetadata> =
                    commands.values().map(|command| command.metadata()).collect();
                command_list.sort_by(|a, b| a.name.cmp(&b.name));

                (category.clone(), command_list)
            })
            .collect();

        categories.sort_by(|a, b| a.0.cmp(&b.0));

        categories
    }

    fn validate_args(metadata: &CommandMetadata, args: &[String]) -> Result<(), CliError> {
        let required_count = metadata.args.iter().filter(|arg| arg.required).count();
        let total_count = metadata.args.len();

        if args.len() < required_count {
            return Err(CliError::InvalidArguments(format!(
                "Expected at least {} arguments, got {}",
                required_count,
                args.len(),
            )));
        }

        if args.len() > total_count {
            return Err(CliError::InvalidArguments(format!(
                "Expected at most {} arguments, got {}",
                total_count,
                args.len(),
            )));
        }

        Ok(())
    }

    /// Registers all available CLI commands in their respective categories.
    pub fn register_all_commands(&mut self) {
        let context = self.context.clone();

        config::register_commands(self, context.clone());
        postgres::register_commands(self, context.clone());
        settings::register_commands(self, context);
    }
}
