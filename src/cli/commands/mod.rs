pub mod config;
pub mod postgres;
pub mod settings;

use serde::Serialize;

use crate::orchestrator::{OutputMode, write_json};

use super::{CommandContext, CommandResult};

/// Renders `value` as JSON in machine mode, otherwise through `human`.
pub(crate) fn emit<T: Serialize>(
    context: &CommandContext,
    value: &T,
    human: impl FnOnce(&T) -> String,
) -> CommandResult {
    match context.output() {
        OutputMode::Json => {
            let mut buffer = Vec::new();
            write_json(&mut buffer, value)?;
            Ok(String::from_utf8_lossy(&buffer).trim_end().to_string())
        }
        OutputMode::Human => Ok(human(value)),
    }
}
