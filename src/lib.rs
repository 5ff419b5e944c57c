//! Gantry - client for a hosted application platform's control plane.
//!
//! The crate is layered bottom-up:
//!
//! - [`api`] builds typed remote operations, sends them over a
//!   [`api::Transport`] and unwraps the fields callers expect
//! - [`render`] turns untyped configuration trees into indented text
//! - [`orchestrator`] fetches, saves and validates an app's configuration
//! - [`cli`] exposes all of it as `gantry <category> <command>`
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use gantry::{api::{ApiClient, HttpTransport}, settings::Settings};
//!
//! let settings = Settings::load(None)?;
//! let client = ApiClient::new(HttpTransport::new(settings.endpoint(), settings.timeout()));
//!
//! let config = client.get_config("my-app")?;
//! println!("{}", config.definition);
//! # Ok::<(), gantry::GantryError>(())
//! ```

/// Typed remote operations and their transport.
pub mod api;

/// Local app configuration file.
pub mod app_config;

/// Command-line interface.
pub mod cli;

/// Core error types and result aliases.
pub mod core;

/// Configuration fetch, save and validate workflows.
pub mod orchestrator;

/// Interactive confirmation.
pub mod prompt;

/// Configuration tree rendering.
pub mod render;

/// Client settings.
pub mod settings;

/// Tracing subscriber setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use core::{GantryError, Result};
