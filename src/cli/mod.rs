//! cli
//!
//! Command-line interface layer for gitdrop.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Resolve the GitHub token from the flag or environment
//! - Delegate to command handlers
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! handlers in [`commands`]; all GitHub interaction flows through the
//! library's gateway and orchestrator.

pub mod args;
pub mod commands;

pub use args::{Cli, Command};

use crate::github::Gateway;
use crate::ui::output::Verbosity;
use anyhow::{Context, Result};

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub async fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);

    let token = cli
        .token
        .or_else(|| std::env::var("GITHUB_TOKEN").ok())
        .context("a GitHub token is required (use --token or set GITHUB_TOKEN)")?;
    let gateway = Gateway::new(token)?;

    commands::dispatch(cli.command, &gateway, verbosity).await
}
