//! Gantry entry point.
//!
//! Global flags are split off first so settings and logging are ready
//! before any command runs.

use std::{env, error::Error, process};

use gantry::{
    cli::{CliError, CliService, CommandContext, GlobalOptions, formatting::format_error},
    settings::Settings,
    tracing_config,
};
use tracing::debug;

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();

    let (options, positional) = match GlobalOptions::extract(&args) {
        Ok(split) => split,
        Err(e) => fail(&e),
    };

    let settings = match Settings::load(options.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => fail(&CliError::from(e)),
    };

    let _guard = tracing_config::init_cli_mode(&settings)?;
    debug!(endpoint = %settings.endpoint(), "settings loaded");

    run_cli_command(CommandContext::new(settings, options), &positional);

    Ok(())
}

/// Routes `<category> <command> [args...]` to the CLI service.
///
/// Prints command output on stdout. On failure the error goes to stderr
/// and the process exits with the error's exit code.
fn run_cli_command(context: CommandContext, args: &[String]) {
    let cli_service = CliService::new(context);

    let category = args.first().map(|s| s.as_str()).unwrap_or("help");
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("");
    let command_args = args.get(2..).unwrap_or(&[]);

    match cli_service.execute_command(category, command, command_args) {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{}", output.trim_end());
            }
        }
        Err(e) => fail(&e),
    }
}

fn fail(error: &CliError) -> ! {
    if let CliError::ValidationFailed { report } = error {
        print!("{report}");
    }

    eprintln!("{}", format_error(&error.to_string()));
    process::exit(error.exit_code());
}
