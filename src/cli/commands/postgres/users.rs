use std::sync::Arc;

use crate::cli::{
    CliError, Command, CommandContext, CommandResult,
    commands::emit,
    formatting::format_table,
    types::{ArgType, CommandArg, CommandMetadata},
};

/// Command for listing the users of a postgres cluster.
pub struct UsersCommand {
    context: Arc<CommandContext>,
}

impl UsersCommand {
    /// Creates a new UsersCommand.
    ///
    /// # Arguments
    ///
    /// * `context` - Shared command context
    pub fn new(context: Arc<CommandContext>) -> Self {
        Self { context }
    }
}

impl Command for UsersCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let cluster = args.first().ok_or_else(|| {
            CliError::InvalidArguments(
                "Expected <postgres-app> argument for 'users' command".to_string(),
            )
        })?;

        let users = self.context.client().list_postgres_users(cluster)?;

        emit(&self.context, &users, |users| {
            let rows: Vec<Vec<String>> = users
                .iter()
                .map(|user| {
                    vec![
                        user.username.clone(),
                        user.is_superuser.to_string(),
                        user.databases.join(","),
                    ]
                })
                .collect();
            format_table(&["USERNAME", "SUPERUSER", "DATABASES"], &rows)
                .trim_end()
                .to_string()
        })
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "users".to_string(),
            description: "List users in a postgres cluster".to_string(),
            category: "postgres".to_string(),
            args: vec![CommandArg::required(
                "postgres-app",
                "Postgres cluster app",
                ArgType::Identifier,
            )],
            examples: vec!["gantry postgres users my-db".to_string()],
        }
    }
}
