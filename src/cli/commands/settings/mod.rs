//! Settings inspection commands.
mod schema;
mod show;

use std::sync::Arc;

pub use schema::SchemaCommand;
pub use show::ShowCommand;

use crate::cli::{CommandContext, CommandRegistry};

/// Registers all settings commands with the command registry.
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
/// * `context` - Shared command context
pub fn register_commands(registry: &mut CommandRegistry, context: Arc<CommandContext>) {
    const CATEGORY_NAME: &str = "settings";

    registry.register_command(CATEGORY_NAME, Box::new(ShowCommand::new(context)));
    registry.register_command(CATEGORY_NAME, Box::new(SchemaCommand));
}
