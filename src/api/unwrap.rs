use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{GantryError, Result};

use super::RemoteEnvelope;

/// Dot-separated location of a field inside an envelope's data tree.
///
/// Segments that parse as an index select an element of a sequence,
/// e.g. `"app.postgresAppRole.databases"` or `"nodes.0.name"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Parses a dotted path. An empty string addresses the data root.
    pub fn parse(path: &str) -> Self {
        let segments = path
            .split('.')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Self { segments }
    }

    /// Returns a new path with `segment` appended.
    pub fn join(&self, segment: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.to_string());
        Self { segments }
    }

    fn prefix(&self, len: usize) -> String {
        self.segments[..len].join(".")
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

/// Walks `path` through `value` without dereferencing past a null.
///
/// # Errors
/// Returns `GantryError::MissingField` naming the first path prefix that is
/// null, absent, out of bounds, or not a container.
pub fn navigate<'a>(value: &'a Value, path: &FieldPath) -> Result<&'a Value> {
    let mut current = value;

    for (i, part) in path.segments.iter().enumerate() {
        let missing = || GantryError::MissingField {
            path: path.prefix(i + 1),
        };

        current = match current {
            Value::Object(map) => map.get(part).ok_or_else(missing)?,
            Value::Array(items) => {
                let index = part.parse::<usize>().map_err(|_| missing())?;
                items.get(index).ok_or_else(missing)?
            }
            _ => return Err(missing()),
        };

        if current.is_null() {
            return Err(missing());
        }
    }

    Ok(current)
}

/// Extracts the raw subtree at `path` from an envelope.
///
/// # Errors
/// * `GantryError::Remote` - If the envelope carries remote errors
/// * `GantryError::MissingField` - If `data` or any step of `path` is null/absent
pub fn unwrap_value<'a>(envelope: &'a RemoteEnvelope, path: &FieldPath) -> Result<&'a Value> {
    let data = envelope.data()?;
    navigate(data, path)
}

/// Extracts the field at `path` and decodes it into `T`.
///
/// Pure: the envelope is only borrowed and the decoded value is a copy.
///
/// # Errors
/// * `GantryError::Remote` - If the envelope carries remote errors
/// * `GantryError::MissingField` - If `data` or any step of `path` is null/absent
/// * `GantryError::Decode` - If the field is present but does not fit `T`
pub fn unwrap<T: DeserializeOwned>(envelope: &RemoteEnvelope, path: &FieldPath) -> Result<T> {
    let value = unwrap_value(envelope, path)?;

    T::deserialize(value).map_err(|e| GantryError::Decode {
        path: path.to_string(),
        details: e.to_string(),
    })
}
