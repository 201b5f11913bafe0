//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Calls into the github module to execute the operation
//! 3. Formats and displays output
//!
//! Handlers are async because every operation involves network I/O.

mod branch;
mod commit;
mod issue;
mod release;
mod repos;

pub use branch::branch;
pub use commit::commit;
pub use issue::issue;
pub use release::release;
pub use repos::repos;

use crate::cli::args::Command;
use crate::github::Gateway;
use crate::ui::output::Verbosity;
use anyhow::Result;

/// Dispatch a command to its handler.
pub async fn dispatch(command: Command, gateway: &Gateway, verbosity: Verbosity) -> Result<()> {
    match command {
        Command::Commit {
            repo,
            message,
            branch,
            dest,
            files,
        } => commit(gateway, verbosity, repo, message, branch, dest, files).await,
        Command::Branch(cmd) => branch(gateway, verbosity, cmd).await,
        Command::Issue(cmd) => issue(gateway, verbosity, cmd).await,
        Command::Release(cmd) => release(gateway, verbosity, cmd).await,
        Command::Repos { page } => repos(gateway, verbosity, page).await,
    }
}
