use crate::{
    cli::{Command, CommandResult, types::CommandMetadata},
    settings::Settings,
};

/// Command for printing the JSON schema of the settings file.
pub struct SchemaCommand;

impl Command for SchemaCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        Ok(Settings::json_schema()?)
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "schema".to_string(),
            description: "Print the settings JSON schema".to_string(),
            category: "settings".to_string(),
            args: vec![],
            examples: vec!["gantry settings schema > gantry.schema.json".to_string()],
        }
    }
}
