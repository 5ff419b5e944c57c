use thiserror::Error;

use crate::GantryError;

/// Exit code for any failure other than an invalid configuration.
pub const EXIT_GENERIC_FAILURE: i32 = 1;

/// Exit code when the remote validator rejected the configuration.
pub const EXIT_VALIDATION_FAILURE: i32 = 2;

/// Errors that can occur during CLI command execution.
///
/// Wraps operation errors from the library layers unchanged, so the
/// original error kind stays visible to `main`.
#[derive(Error, Debug)]
pub enum CliError {
    /// A command or category was not found in the registry.
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// Invalid arguments were provided to a command.
    ///
    /// Missing required arguments, too many arguments, or an unknown
    /// global flag.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The configuration was checked and rejected.
    ///
    /// `report` holds the already formatted error listing for stdout.
    #[error("App configuration is not valid")]
    ValidationFailed {
        /// Formatted listing printed before exiting
        report: String,
    },

    /// A remote operation or local file operation failed.
    #[error("{0}")]
    Operation(#[from] GantryError),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::ValidationFailed { .. } => EXIT_VALIDATION_FAILURE,
            CliError::Operation(GantryError::ValidationFailed { .. }) => EXIT_VALIDATION_FAILURE,
            _ => EXIT_GENERIC_FAILURE,
        }
    }
}

/// Type alias for command execution results.
///
/// All CLI commands return this type, providing either the text to print
/// on stdout or a CliError describing what went wrong.
pub type CommandResult = Result<String, CliError>;

/// Declaration of a single command argument.
#[derive(Debug, Clone)]
pub struct CommandArg {
    /// The name of the argument (e.g., "app", "path").
    pub name: String,

    /// Human-readable description of what this argument does.
    pub description: String,

    /// Whether this argument is required for command execution.
    pub required: bool,

    /// The expected type of this argument for help display.
    pub value_type: ArgType,
}

impl CommandArg {
    /// A required argument.
    pub fn required(name: &str, description: &str, value_type: ArgType) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            required: true,
            value_type,
        }
    }

    /// An optional argument.
    pub fn optional(name: &str, description: &str, value_type: ArgType) -> Self {
        Self {
            required: false,
            ..Self::required(name, description, value_type)
        }
    }

    /// Usage token, `<name>` when required and `[name]` otherwise.
    pub fn usage(&self) -> String {
        if self.required {
            format!("<{}>", self.name)
        } else {
            format!("[{}]", self.name)
        }
    }
}

/// Type classification for command arguments.
#[derive(Debug, Clone)]
pub enum ArgType {
    /// A general string value.
    String,

    /// A name or id of a remote resource (app, organization, deployment).
    Identifier,

    /// A file system path.
    Path,
}

/// Complete metadata for a CLI command.
///
/// Single source of truth for a command's identity, arguments and usage
/// examples; used for help generation and argument count validation.
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    /// The command name (e.g., "show", "save", "attach").
    pub name: String,

    /// Brief description of what this command does.
    pub description: String,

    /// All arguments this command accepts.
    pub args: Vec<CommandArg>,

    /// Example usage strings to show in help text.
    pub examples: Vec<String>,

    /// Category this command belongs to (e.g., "config", "postgres").
    pub category: String,
}

/// Trait defining the interface for all CLI commands.
///
/// Commands receive their dependencies through their constructors.
pub trait Command: Send + Sync {
    /// Executes the command with the provided arguments.
    ///
    /// The registry has already checked the argument count against the
    /// command's metadata.
    ///
    /// # Errors
    ///
    /// Returns `CliError` for any execution failure, including remote
    /// operation errors and I/O failures.
    fn execute(&self, args: &[String]) -> CommandResult;

    /// Returns the complete metadata for this command.
    fn metadata(&self) -> CommandMetadata;
}
