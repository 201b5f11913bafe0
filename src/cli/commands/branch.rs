//! cli::commands::branch
//!
//! The `branch` command family: list branches, create a branch from an
//! existing one.

use anyhow::Result;

use crate::cli::args::BranchCommand;
use crate::github::objects::ObjectBuilder;
use crate::github::repos::fetch_branches;
use crate::github::{Gateway, RepoRef};
use crate::ui::output::{self, Verbosity};

/// Dispatch a branch subcommand.
pub async fn branch(gateway: &Gateway, verbosity: Verbosity, cmd: BranchCommand) -> Result<()> {
    match cmd {
        BranchCommand::List { repo } => list(gateway, verbosity, &repo).await,
        BranchCommand::Create { repo, name, from } => {
            create(gateway, verbosity, &repo, &name, &from).await
        }
    }
}

async fn list(gateway: &Gateway, verbosity: Verbosity, repo_url: &str) -> Result<()> {
    let repo = RepoRef::parse_url(repo_url)?;
    let branches = fetch_branches(gateway, &repo).await?;
    if branches.is_empty() {
        output::print("no branches", verbosity);
        return Ok(());
    }
    for branch in branches {
        let marker = if branch.protected { " (protected)" } else { "" };
        output::print(
            format!("{} {}{}", branch.name, branch.commit.sha, marker),
            verbosity,
        );
    }
    Ok(())
}

async fn create(
    gateway: &Gateway,
    verbosity: Verbosity,
    repo_url: &str,
    name: &str,
    from: &str,
) -> Result<()> {
    let repo = RepoRef::parse_url(repo_url)?;
    ObjectBuilder::new(gateway, &repo)
        .create_branch(name, from)
        .await?;
    output::success(format!("created branch {name} from {from}"), verbosity);
    Ok(())
}
