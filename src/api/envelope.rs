use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{GantryError, Result};

/// One entry of the remote `errors` list.
///
/// Only `message` is interpreted; `path`, `extensions` and anything else the
/// server attaches is kept verbatim.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoteErrorEntry {
    /// Human-readable message
    pub message: String,

    /// Remaining members of the entry
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Decoded top-level response of an operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RemoteEnvelope {
    /// Operation payload keyed by field name
    #[serde(default)]
    pub data: Option<Value>,

    /// Server-reported errors, in order
    #[serde(default)]
    pub errors: Vec<RemoteErrorEntry>,
}

impl RemoteEnvelope {
    /// Creates an envelope carrying only data.
    pub fn with_data(data: Value) -> Self {
        Self {
            data: Some(data),
            errors: Vec::new(),
        }
    }

    /// Decodes an envelope from a response body.
    ///
    /// # Errors
    /// Returns `GantryError::Decode` if the body is not a JSON envelope.
    pub fn from_body(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| GantryError::Decode {
            path: "<envelope>".to_string(),
            details: e.to_string(),
        })
    }

    /// Messages of every remote error, in order.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.message.clone()).collect()
    }

    /// Fails with `Remote` if the server reported any error.
    ///
    /// # Errors
    /// Returns `GantryError::Remote` carrying every message when the error
    /// list is non-empty, even if data is also present.
    pub fn check_errors(&self) -> Result<()> {
        if self.errors.is_empty() {
            return Ok(());
        }

        Err(GantryError::Remote {
            messages: self.error_messages(),
        })
    }

    /// Borrows the data tree after checking for remote errors.
    ///
    /// # Errors
    /// * `GantryError::Remote` - If the server reported errors
    /// * `GantryError::MissingField` - If `data` is null or absent
    pub fn data(&self) -> Result<&Value> {
        self.check_errors()?;

        match &self.data {
            Some(Value::Null) | None => Err(GantryError::MissingField {
                path: "data".to_string(),
            }),
            Some(data) => Ok(data),
        }
    }
}
