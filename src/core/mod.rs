use std::{fmt, path::Path};

use thiserror::Error;

/// Error types for gantry operations.
///
/// The first four variants are the remote-operation taxonomy: each keeps
/// the original kind intact as it travels up through the client,
/// unwrapper and orchestrator layers.
#[derive(Error, Debug)]
pub enum GantryError {
    /// Network, connection or protocol failure talking to the endpoint
    #[error("transport error talking to '{endpoint}': {details}")]
    Transport {
        /// Endpoint the request was sent to
        endpoint: String,
        /// Underlying failure description
        details: String,
    },

    /// The remote side reported one or more errors
    #[error("{}", messages.join("; "))]
    Remote {
        /// Server-reported messages, in the order received
        messages: Vec<String>,
    },

    /// An expected field was null or absent in an otherwise successful response
    #[error("expected field '{path}' is missing from the response")]
    MissingField {
        /// Dotted path of the field that was expected
        path: String,
    },

    /// A present field did not have the shape the caller expected
    #[error("failed to decode field '{path}': {details}")]
    Decode {
        /// Dotted path of the field being decoded
        path: String,
        /// Decoder error details
        details: String,
    },

    /// The remote validator rejected the configuration
    #[error("app configuration is not valid")]
    ValidationFailed {
        /// Error lines, already prefixed with the failure marker
        errors: Vec<String>,
    },

    /// Client settings could not be resolved
    #[error("settings error: {0}")]
    Settings(String),

    /// The local app config artifact could not be read or written
    #[error("app config error on '{path}': {details}")]
    AppConfig {
        /// Path of the artifact
        path: String,
        /// Error details
        details: String,
    },

    /// Standard I/O operation error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParseError {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },
}

/// A specialized `Result` type for gantry operations.
pub type Result<T> = std::result::Result<T, GantryError>;

impl GantryError {
    /// Creates a TOML parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn toml_parse(error: impl fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        GantryError::TomlParseError {
            location,
            details: error.to_string(),
        }
    }

    /// Creates an app config error for the given artifact path.
    pub fn app_config(error: impl fmt::Display, path: &Path) -> Self {
        GantryError::AppConfig {
            path: path.display().to_string(),
            details: error.to_string(),
        }
    }

    /// True when the failure happened before the remote side answered.
    pub fn is_transport(&self) -> bool {
        matches!(self, GantryError::Transport { .. })
    }

    /// Remote-reported messages, if this is a remote error.
    pub fn remote_messages(&self) -> Option<&[String]> {
        match self {
            GantryError::Remote { messages } => Some(messages),
            _ => None,
        }
    }

    /// Formatted validation error lines, if this is a validation failure.
    pub fn validation_errors(&self) -> Option<&[String]> {
        match self {
            GantryError::ValidationFailed { errors } => Some(errors),
            _ => None,
        }
    }
}
