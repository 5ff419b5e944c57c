//! Client settings: where to reach the control plane and how to behave.
//!
//! Settings are read from `config.toml` in the gantry settings directory.
//! A commented default file is created on first use. Environment
//! variables override file values.

mod log_level;
mod paths;

#[cfg(test)]
mod tests;

pub use log_level::LogLevel;
pub use paths::SettingsPaths;

use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{GantryError, Result, render::DEFAULT_MAX_DEPTH};

/// Control plane used when none is configured.
pub const DEFAULT_API_BASE_URL: &str = "https://api.fly.io";

/// Environment variable overriding `api_base_url`.
pub const ENV_API_BASE_URL: &str = "GANTRY_API_BASE_URL";

/// Environment variable overriding `access_token`.
pub const ENV_ACCESS_TOKEN: &str = "GANTRY_ACCESS_TOKEN";

const DEFAULT_SETTINGS_FILE: &str = "# gantry settings\n\
# api_base_url = \"https://api.fly.io\"\n\
# access_token = \"\"\n\
# log_level = \"warn\"\n";

/// Client settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the control plane; operations are posted to `<base>/graphql`.
    pub api_base_url: String,

    /// Bearer token sent with every operation.
    pub access_token: Option<String>,

    /// Log verbosity on stderr. `RUST_LOG` takes precedence when set.
    pub log_level: LogLevel,

    /// Directory for daily-rotated log files. No file logging when unset.
    pub log_dir: Option<PathBuf>,

    /// Deepest tree level the renderer walks before emitting a depth diagnostic.
    pub max_render_depth: usize,

    /// Whole-request timeout in seconds. No timeout when unset.
    pub timeout_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            access_token: None,
            log_level: LogLevel::default(),
            log_dir: None,
            max_render_depth: DEFAULT_MAX_DEPTH,
            timeout_secs: None,
        }
    }
}

impl Settings {
    /// Loads settings from `path`, or from the default location when `None`,
    /// then applies environment overrides.
    ///
    /// # Errors
    /// * `GantryError::Settings` - If the settings location cannot be determined or created
    /// * `GantryError::TomlParseError` - If the file is not valid settings TOML
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => SettingsPaths::main_config().map_err(|e| GantryError::Settings(e.to_string()))?,
        };

        let mut settings = Self::load_file(&path)?;
        settings.apply_overrides(|name| env::var(name).ok());
        Ok(settings)
    }

    /// Reads settings from `path`, creating a default file if it is missing.
    ///
    /// # Errors
    /// * `GantryError::Settings` - If the default file cannot be created
    /// * `GantryError::TomlParseError` - If the file is not valid settings TOML
    pub fn load_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            create_default_settings_file(path)?;
        }

        debug!(path = %path.display(), "loading settings");
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| GantryError::toml_parse(e, Some(path)))
    }

    /// Applies overrides from an environment lookup.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_API_BASE_URL).filter(|v| !v.is_empty()) {
            self.api_base_url = url;
        }

        if let Some(token) = lookup(ENV_ACCESS_TOKEN).filter(|v| !v.is_empty()) {
            self.access_token = Some(token);
        }
    }

    /// Endpoint operations are posted to.
    pub fn endpoint(&self) -> String {
        format!("{}/graphql", self.api_base_url.trim_end_matches('/'))
    }

    /// Request timeout, if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Copy safe to print: the access token is masked.
    pub fn redacted(&self) -> Self {
        Self {
            access_token: self.access_token.as_ref().map(|_| "********".to_string()),
            ..self.clone()
        }
    }

    /// JSON schema of the settings file.
    ///
    /// # Errors
    /// Returns `GantryError::Settings` if the schema cannot be serialized.
    pub fn json_schema() -> Result<String> {
        let schema = schemars::schema_for!(Settings);
        serde_json::to_string_pretty(&schema).map_err(|e| GantryError::Settings(e.to_string()))
    }
}

/// Creates a commented settings file if it doesn't exist
fn create_default_settings_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            GantryError::Settings(format!(
                "Failed to create settings directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    fs::write(path, DEFAULT_SETTINGS_FILE).map_err(|e| {
        GantryError::Settings(format!(
            "Failed to create settings file {}: {}",
            path.display(),
            e
        ))
    })
}
