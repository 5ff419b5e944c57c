use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::{info, instrument};

use crate::{GantryError, Result};

/// File name used when no explicit path is given.
pub const DEFAULT_APP_CONFIG_FILE: &str = "fly.toml";

/// Local app configuration artifact.
///
/// Stored as TOML: the app name at the top level and the service
/// definition under `[definition]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfigFile {
    /// App the definition belongs to
    pub app: String,

    /// Service definition
    #[serde(default)]
    pub definition: toml::Table,
}

impl AppConfigFile {
    /// Builds an artifact from a server-side definition.
    ///
    /// Null-valued keys are dropped, TOML has no representation for them.
    ///
    /// # Errors
    /// Returns `GantryError::Decode` if the definition is not a mapping or
    /// a sequence holds a null element.
    pub fn from_definition(app: impl Into<String>, definition: &Value) -> Result<Self> {
        let decode_error = |details: String| GantryError::Decode {
            path: "definition".to_string(),
            details,
        };

        let stripped = strip_nulls(definition, "definition")?;
        let definition = match toml::Value::try_from(stripped) {
            Ok(toml::Value::Table(table)) => table,
            Ok(other) => {
                return Err(decode_error(format!(
                    "expected a mapping, got {}",
                    other.type_str()
                )));
            }
            Err(e) => return Err(decode_error(e.to_string())),
        };

        Ok(Self {
            app: app.into(),
            definition,
        })
    }

    /// The definition as a JSON tree, ready to send to the server.
    ///
    /// # Errors
    /// Returns `GantryError::Decode` if a TOML value has no JSON form.
    pub fn definition_json(&self) -> Result<Value> {
        serde_json::to_value(&self.definition).map_err(|e| GantryError::Decode {
            path: "definition".to_string(),
            details: e.to_string(),
        })
    }

    /// Loads an artifact from disk.
    ///
    /// # Errors
    /// * `GantryError::AppConfig` - If the file cannot be read
    /// * `GantryError::TomlParseError` - If the file is not a valid artifact
    #[instrument]
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| GantryError::app_config(e, path))?;
        toml::from_str(&content).map_err(|e| GantryError::toml_parse(e, Some(path)))
    }

    /// Writes the artifact to `path`, replacing any existing file.
    ///
    /// The content goes to a temporary file in the same directory which is
    /// renamed over `path` only after a complete write. On any failure the
    /// temporary file is removed and `path` is left untouched.
    ///
    /// # Errors
    /// Returns `GantryError::AppConfig` if serializing, writing or renaming fails.
    #[instrument(skip(self))]
    pub fn write_atomic(&self, path: &Path) -> Result<PathBuf> {
        let content = toml::to_string_pretty(self).map_err(|e| GantryError::app_config(e, path))?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut staged = NamedTempFile::new_in(dir).map_err(|e| GantryError::app_config(e, path))?;
        staged
            .write_all(content.as_bytes())
            .and_then(|()| staged.flush())
            .and_then(|()| staged.as_file().sync_all())
            .map_err(|e| GantryError::app_config(e, path))?;

        staged
            .persist(path)
            .map_err(|e| GantryError::app_config(e.error, path))?;

        info!(path = %path.display(), "wrote app config");
        Ok(path.to_path_buf())
    }
}

/// Drops null-valued keys. A null sequence element cannot be dropped
/// without shifting its siblings, so it is an error naming its path.
fn strip_nulls(value: &Value, path: &str) -> Result<Value> {
    match value {
        Value::Object(map) => map
            .iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| Ok((k.clone(), strip_nulls(v, &format!("{path}.{k}"))?)))
            .collect::<Result<serde_json::Map<String, Value>>>()
            .map(Value::Object),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let item_path = format!("{path}.{i}");
                if v.is_null() {
                    return Err(GantryError::Decode {
                        path: item_path,
                        details: "null sequence element has no TOML form".to_string(),
                    });
                }
                strip_nulls(v, &item_path)
            })
            .collect::<Result<Vec<Value>>>()
            .map(Value::Array),
        other => Ok(other.clone()),
    }
}
