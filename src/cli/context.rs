use std::path::PathBuf;

use crate::{
    api::{ApiClient, HttpTransport},
    orchestrator::{ConfigOrchestrator, OutputMode},
    prompt::{Confirm, FixedAnswer, StdinConfirm},
    render::Renderer,
    settings::Settings,
};

use super::CliError;

/// Flags accepted anywhere on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalOptions {
    /// `--json`: machine-readable output
    pub output: OutputMode,
    /// `--yes` / `-y`: answer yes to every confirmation
    pub assume_yes: bool,
    /// `--config <path>`: settings file to use instead of the default
    pub config: Option<PathBuf>,
}

impl GlobalOptions {
    /// Splits global flags from positional arguments.
    ///
    /// # Errors
    /// Returns `CliError::InvalidArguments` for an unknown `--flag` or a
    /// `--config` without a value.
    pub fn extract(args: &[String]) -> Result<(Self, Vec<String>), CliError> {
        let mut options = Self::default();
        let mut positional = Vec::new();
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--json" => options.output = OutputMode::Json,
                "--yes" | "-y" => options.assume_yes = true,
                "--config" => {
                    let path = iter.next().ok_or_else(|| {
                        CliError::InvalidArguments("Expected a path after '--config'".to_string())
                    })?;
                    options.config = Some(PathBuf::from(path));
                }
                flag if flag.starts_with("--") => {
                    return Err(CliError::InvalidArguments(format!("Unknown flag '{flag}'")));
                }
                _ => positional.push(arg.clone()),
            }
        }

        Ok((options, positional))
    }
}

/// Everything a command needs to talk to the control plane.
pub struct CommandContext {
    settings: Settings,
    options: GlobalOptions,
}

impl CommandContext {
    /// Creates a context from resolved settings and global flags.
    pub fn new(settings: Settings, options: GlobalOptions) -> Self {
        Self { settings, options }
    }

    /// Effective settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Requested output mode.
    pub fn output(&self) -> OutputMode {
        self.options.output
    }

    /// HTTP transport configured from settings.
    pub fn transport(&self) -> HttpTransport {
        let transport = HttpTransport::new(self.settings.endpoint(), self.settings.timeout());

        match &self.settings.access_token {
            Some(token) => transport.with_access_token(token),
            None => transport,
        }
    }

    /// Api client over a fresh transport.
    pub fn client(&self) -> ApiClient<HttpTransport> {
        ApiClient::new(self.transport())
    }

    /// Renderer honoring the configured depth limit.
    pub fn renderer(&self) -> Renderer {
        Renderer::new(self.settings.max_render_depth)
    }

    /// Configuration orchestrator; prompts on stdin unless `--yes` was given.
    pub fn orchestrator(&self) -> ConfigOrchestrator<HttpTransport, Box<dyn Confirm>> {
        let confirm: Box<dyn Confirm> = if self.options.assume_yes {
            Box::new(FixedAnswer(true))
        } else {
            Box::new(StdinConfirm)
        };

        ConfigOrchestrator::new(self.client(), confirm, self.renderer())
    }
}
