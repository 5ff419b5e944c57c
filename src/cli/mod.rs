//! Command-line interface for the control-plane client.
//!
//! Provides a hierarchical command system: commands are organized by
//! category and help text is generated from their metadata.

mod commands;
mod context;
pub mod formatting;
mod registry;
mod service;
mod types;


pub use context::{CommandContext, GlobalOptions};
pub use registry::CommandRegistry;
pub use service::CliService;
pub use types::{
    ArgType, CliError, Command, CommandArg, CommandMetadata, CommandResult, EXIT_GENERIC_FAILURE,
    EXIT_VALIDATION_FAILURE,
};
