//! Postgres cluster commands.
mod attach;
mod create;
mod databases;
mod detach;
mod status;
mod users;

use std::sync::Arc;

pub use attach::AttachCommand;
pub use create::CreateCommand;
pub use databases::DatabasesCommand;
pub use detach::DetachCommand;
pub use status::StatusCommand;
pub use users::UsersCommand;

use crate::cli::{CommandContext, CommandRegistry};

/// Registers all postgres commands with the command registry.
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
/// * `context` - Shared command context
pub fn register_commands(registry: &mut CommandRegistry, context: Arc<CommandContext>) {
    const CATEGORY_NAME: &str = "postgres";

    registry.register_command(CATEGORY_NAME, Box::new(CreateCommand::new(context.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(StatusCommand::new(context.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(AttachCommand::new(context.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(DetachCommand::new(context.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(DatabasesCommand::new(context.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(UsersCommand::new(context)));
}

/// Human summary shared by `create` and `status`.
fn describe_deployment(deployment: &crate::api::TemplateDeployment) -> String {
    let mut out = format!("Deployment {} is {}\n", deployment.id, deployment.status);

    for app in &deployment.apps {
        out.push_str(&format!(
            "  {} ({})\n",
            app.name,
            app.status.as_deref().unwrap_or("unknown")
        ));
    }

    out.trim_end().to_string()
}
