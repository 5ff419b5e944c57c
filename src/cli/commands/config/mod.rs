//! App configuration commands.
mod save;
mod show;
mod validate;

use std::sync::Arc;

pub use save::SaveCommand;
pub use show::ShowCommand;
pub use validate::ValidateCommand;

use crate::cli::{CommandContext, CommandRegistry};

/// Registers all configuration commands with the command registry.
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
/// * `context` - Shared command context
pub fn register_commands(registry: &mut CommandRegistry, context: Arc<CommandContext>) {
    const CATEGORY_NAME: &str = "config";

    registry.register_command(CATEGORY_NAME, Box::new(ShowCommand::new(context.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(SaveCommand::new(context.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(ValidateCommand::new(context)));
}
