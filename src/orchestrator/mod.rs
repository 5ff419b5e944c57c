//! Configuration use cases: show, save and validate an app's configuration.
//!
//! Composes the api client, the renderer, the local artifact writer and the
//! confirmation prompt. Errors from every collaborator are passed through
//! with their kind intact.

#[cfg(test)]
mod tests;

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use serde_json::Value;
use tracing::{info, instrument};

use crate::{
    GantryError, Result,
    api::{ApiClient, Transport},
    app_config::AppConfigFile,
    prompt::Confirm,
    render::{ConfigTree, RenderDiagnostic, Renderer},
};

/// Section label the definition is rendered under.
pub const DEFINITION_SECTION: &str = "services";

/// Marker printed before each validation error.
pub const FAILURE_MARKER: &str = "✘";

/// Marker printed before the success line.
pub const SUCCESS_MARKER: &str = "✓";

/// How results are written for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Indented text for an operator
    #[default]
    Human,
    /// Pretty-printed JSON for scripts
    Json,
}

/// What `save` ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The artifact was written to this path
    Written(PathBuf),
    /// A file existed and the operator declined to overwrite it
    Declined,
}

/// Verdict of the remote validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the definition is valid
    pub valid: bool,
    /// Formatted error lines; empty when valid
    pub errors: Vec<String>,
}

/// Fetches, saves and validates app configuration.
pub struct ConfigOrchestrator<T: Transport, C: Confirm> {
    client: ApiClient<T>,
    confirm: C,
    renderer: Renderer,
}

impl<T: Transport, C: Confirm> ConfigOrchestrator<T, C> {
    /// Creates an orchestrator.
    pub fn new(client: ApiClient<T>, confirm: C, renderer: Renderer) -> Self {
        Self {
            client,
            confirm,
            renderer,
        }
    }

    /// The api client used for remote calls.
    pub fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    /// Fetches the raw server-side definition of `app`.
    ///
    /// # Errors
    /// Returns transport, remote, missing-field or decode errors.
    pub fn fetch_definition(&self, app: &str) -> Result<Value> {
        let config = self.client.get_config(app)?;

        if config.definition.is_null() {
            return Err(GantryError::MissingField {
                path: "app.config.definition".to_string(),
            });
        }

        Ok(config.definition)
    }

    /// Fetches the definition of `app` as a [`ConfigTree`].
    ///
    /// # Errors
    /// Returns transport, remote, missing-field or decode errors.
    #[instrument(skip(self))]
    pub fn fetch(&self, app: &str) -> Result<ConfigTree> {
        self.fetch_definition(app).map(ConfigTree::from)
    }

    /// Writes the definition of `app` to `out`, rendered or as JSON.
    ///
    /// Render diagnostics are written inline and returned; they are not
    /// errors.
    ///
    /// # Errors
    /// Returns fetch errors, or `Io` if writing to `out` fails.
    #[instrument(skip(self, out))]
    pub fn show<W: Write>(
        &self,
        app: &str,
        mode: OutputMode,
        out: &mut W,
    ) -> Result<Vec<RenderDiagnostic>> {
        let definition = self.fetch_definition(app)?;

        match mode {
            OutputMode::Json => {
                write_json(out, &definition)?;
                Ok(Vec::new())
            }
            OutputMode::Human => {
                let tree = ConfigTree::from(&definition);
                Ok(self.renderer.render(out, &tree, DEFINITION_SECTION, 0)?)
            }
        }
    }

    /// Saves the definition of `app` to a local artifact at `path`.
    ///
    /// When `path` already exists the operator is asked first; declining
    /// returns [`SaveOutcome::Declined`] without touching the network or
    /// the file.
    ///
    /// # Errors
    /// Returns fetch errors, prompt I/O errors, or `AppConfig` if the
    /// artifact cannot be written.
    #[instrument(skip(self))]
    pub fn save(&self, app: &str, path: &Path) -> Result<SaveOutcome> {
        if path.exists() {
            let prompt = format!("Overwrite file '{}'", path.display());
            if !self.confirm.confirm(&prompt)? {
                info!(path = %path.display(), "overwrite declined");
                return Ok(SaveOutcome::Declined);
            }
        }

        let definition = self.fetch_definition(app)?;
        let written = AppConfigFile::from_definition(app, &definition)?.write_atomic(path)?;

        Ok(SaveOutcome::Written(written))
    }

    /// Validates `definition` against the server for `app`.
    ///
    /// Writes `✓ Configuration is valid` on success. On an invalid
    /// definition writes every error with the failure marker and returns
    /// `ValidationFailed`.
    ///
    /// # Errors
    /// * `GantryError::ValidationFailed` - The call succeeded and the definition is invalid
    /// * transport, remote, missing-field or decode errors if the call failed
    #[instrument(skip(self, definition, out))]
    pub fn validate<W: Write>(
        &self,
        app: &str,
        definition: &Value,
        out: &mut W,
    ) -> Result<ValidationResult> {
        let verdict = self.client.parse_config(app, definition)?;

        if verdict.valid {
            writeln!(out, "{SUCCESS_MARKER} Configuration is valid")?;
            return Ok(ValidationResult {
                valid: true,
                errors: Vec::new(),
            });
        }

        let errors = format_validation_errors(&verdict.errors);

        writeln!(out)?;
        for error in &errors {
            writeln!(out, "    {error}")?;
        }
        writeln!(out)?;

        Err(GantryError::ValidationFailed { errors })
    }
}

/// Prefixes each validator error with the failure marker.
pub fn format_validation_errors(errors: &[String]) -> Vec<String> {
    errors
        .iter()
        .map(|error| format!("{FAILURE_MARKER} {error}"))
        .collect()
}

/// Writes `value` as pretty JSON followed by a newline.
///
/// # Errors
/// Returns `Io` if writing fails.
pub fn write_json<W: Write>(out: &mut W, value: &impl serde::Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(std::io::Error::from)?;
    writeln!(out)?;
    Ok(())
}
