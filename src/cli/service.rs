use std::sync::Arc;

use super::{
    CliError, CommandContext, CommandRegistry,
    formatting::{format_category, format_command, format_description, format_header, format_usage},
};

/// High-level service for managing and executing CLI commands.
///
/// Commands are organized by category and can be listed or executed by name.
pub struct CliService {
    registry: CommandRegistry,
}

impl CliService {
    /// Creates a new CLI service with all available commands registered.
    ///
    /// # Arguments
    /// * `context` - Settings and global flags shared by every command
    pub fn new(context: CommandContext) -> Self {
        let mut registry = CommandRegistry::new(Arc::new(context));
        registry.register_all_commands();

        CliService { registry }
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// The `help` category, or an empty one, returns the command overview.
    ///
    /// # Errors
    /// Returns `CliError::CommandNotFound` if the command doesn't exist in the category.
    /// Other errors come from the command itself.
    pub fn execute_command(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        if category.is_empty() || category == "help" {
            return Ok(self.help());
        }

        self.registry.execute(category, command_name, args)
    }

    /// Lists all available command names organized by category.
    pub fn list_all(&self) -> Vec<(String, Vec<String>)> {
        self.registry
            .list_commands()
            .into_iter()
            .map(|(category, commands)| {
                (category, commands.into_iter().map(|c| c.name).collect())
            })
            .collect()
    }

    /// Overview of every command with its arguments and description.
    pub fn help(&self) -> String {
        let mut out = format!(
            "{}\n\n{}\n",
            format_header("gantry - control-plane client"),
            format_usage("Usage: gantry <category> <command> [args...] [--json] [--yes] [--config <path>]")
        );

        for (category, commands) in self.registry.list_commands() {
            out.push_str(&format!("\n{}\n", format_category(&category)));

            for metadata in commands {
                let usage: Vec<String> = metadata.args.iter().map(|arg| arg.usage()).collect();
                out.push_str(&format!(
                    "  {} {}\n      {}\n",
                    format_command(&metadata.name),
                    usage.join(" "),
                    format_description(&metadata.description)
                ));
            }
        }

        out
    }
}
