//! Logging setup for the gantry binary.
//!
//! Logs always go to stderr so stdout carries only command output.

use std::{env, io, path::Path};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::settings::Settings;

/// Environment variable selecting `json` or `compact` (default) log output.
pub const LOG_FORMAT_ENV: &str = "GANTRY_LOG_FORMAT";

fn env_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_level.to_string()))
}

fn json_requested() -> bool {
    env::var(LOG_FORMAT_ENV).is_ok_and(|format| format == "json")
}

/// Initialize tracing for CLI commands
///
/// Uses the `RUST_LOG` environment variable if set, otherwise the settings'
/// `log_level`. When `log_dir` is configured, log lines are also written
/// to daily-rotated files there and the returned guard must be kept alive
/// until exit.
///
/// # Errors
/// Returns error if the log directory cannot be used or a subscriber is
/// already installed
pub fn init_cli_mode(
    settings: &Settings,
) -> Result<Option<WorkerGuard>, Box<dyn std::error::Error>> {
    match &settings.log_dir {
        Some(dir) => init_with_file(settings, dir).map(Some),
        None => {
            init_stderr(settings)?;
            Ok(None)
        }
    }
}

fn init_stderr(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let registry = tracing_subscriber::registry().with(env_filter(settings));

    if json_requested() {
        registry
            .with(fmt::layer().json().with_target(true).with_writer(io::stderr))
            .try_init()?;
    } else {
        registry
            .with(fmt::layer().compact().with_target(false).with_writer(io::stderr))
            .try_init()?;
    }

    Ok(())
}

/// Initialize tracing with file output
///
/// Similar to [`init_cli_mode`] without a log directory, but also writes
/// logs to a daily-rotated file in `log_dir`.
///
/// # Errors
/// Returns error if file creation or tracing subscriber initialization fails
pub fn init_with_file(
    settings: &Settings,
    log_dir: &Path,
) -> Result<WorkerGuard, Box<dyn std::error::Error>> {
    const DAYS_TO_KEEP: usize = 7;

    std::fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::Builder::new()
        .rotation(tracing_appender::rolling::Rotation::DAILY)
        .max_log_files(DAYS_TO_KEEP)
        .filename_prefix("gantry")
        .filename_suffix("log")
        .build(log_dir)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let registry = tracing_subscriber::registry().with(env_filter(settings));

    if json_requested() {
        registry
            .with(fmt::layer().json().with_target(true).with_writer(io::stderr))
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(non_blocking)
                    .with_ansi(false),
            )
            .try_init()?;
    } else {
        registry
            .with(fmt::layer().compact().with_target(false).with_writer(io::stderr))
            .with(
                fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_writer(non_blocking)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(guard)
}
