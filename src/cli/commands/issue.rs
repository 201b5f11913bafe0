//! cli::commands::issue
//!
//! The `issue` command family: list and create issues.

use anyhow::Result;

use crate::cli::args::IssueCommand;
use crate::github::issues::{self, CreateIssueRequest};
use crate::github::{Gateway, RepoRef};
use crate::refine::{Passthrough, RefineContext, Refiner};
use crate::ui::output::{self, Verbosity};

/// Dispatch an issue subcommand.
pub async fn issue(gateway: &Gateway, verbosity: Verbosity, cmd: IssueCommand) -> Result<()> {
    match cmd {
        IssueCommand::List { repo } => list(gateway, verbosity, &repo).await,
        IssueCommand::Create { repo, title, body } => {
            create(gateway, verbosity, &repo, title, body).await
        }
    }
}

async fn list(gateway: &Gateway, verbosity: Verbosity, repo_url: &str) -> Result<()> {
    let repo = RepoRef::parse_url(repo_url)?;
    let issues = issues::list_issues(gateway, &repo).await?;
    if issues.is_empty() {
        output::print("no open issues", verbosity);
        return Ok(());
    }
    for issue in issues {
        output::print(
            format!("#{} {} ({})", issue.number, issue.title, issue.html_url),
            verbosity,
        );
    }
    Ok(())
}

async fn create(
    gateway: &Gateway,
    verbosity: Verbosity,
    repo_url: &str,
    title: String,
    body: String,
) -> Result<()> {
    let repo = RepoRef::parse_url(repo_url)?;

    // Refinement is best-effort: a failure is reported and the original
    // text is submitted.
    let refiner = Passthrough;
    let body = if body.is_empty() {
        body
    } else {
        match refiner.refine(&body, RefineContext::Issue).await {
            Ok(refined) => refined,
            Err(err) => {
                output::error(err);
                body
            }
        }
    };

    let issue = issues::create_issue(gateway, &repo, &CreateIssueRequest { title, body }).await?;
    output::success(
        format!("opened issue #{}: {}", issue.number, issue.html_url),
        verbosity,
    );
    Ok(())
}
