use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Logging level for the client.
///
/// Controls the verbosity of log output on stderr, from critical errors
/// only to detailed trace information.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Only show errors.
    Error,

    /// Show warnings and errors (default level).
    #[default]
    Warn,

    /// Show informational messages, warnings, and errors.
    Info,

    /// Show request and unwrap details useful for troubleshooting.
    Debug,

    /// Show detailed trace information including span entry/exit (very verbose).
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}
