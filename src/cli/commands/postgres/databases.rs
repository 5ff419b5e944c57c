use std::sync::Arc;

use crate::cli::{
    CliError, Command, CommandContext, CommandResult,
    commands::emit,
    formatting::format_table,
    types::{ArgType, CommandArg, CommandMetadata},
};

/// Command for listing the databases of a postgres cluster.
pub struct DatabasesCommand {
    context: Arc<CommandContext>,
}

impl DatabasesCommand {
    /// Creates a new DatabasesCommand.
    ///
    /// # Arguments
    ///
    /// * `context` - Shared command context
    pub fn new(context: Arc<CommandContext>) -> Self {
        Self { context }
    }
}

impl Command for DatabasesCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let cluster = args.first().ok_or_else(|| {
            CliError::InvalidArguments(
                "Expected <postgres-app> argument for 'databases' command".to_string(),
            )
        })?;

        let databases = self.context.client().list_postgres_databases(cluster)?;

        emit(&self.context, &databases, |databases| {
            let rows: Vec<Vec<String>> = databases
                .iter()
                .map(|db| vec![db.name.clone(), db.users.join(",")])
                .collect();
            format_table(&["NAME", "USERS"], &rows).trim_end().to_string()
        })
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "databases".to_string(),
            description: "List databases in a postgres cluster".to_string(),
            category: "postgres".to_string(),
            args: vec![CommandArg::required(
                "postgres-app",
                "Postgres cluster app",
                ArgType::Identifier,
            )],
            examples: vec!["gantry postgres databases my-db".to_string()],
        }
    }
}
