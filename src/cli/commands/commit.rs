//! cli::commands::commit
//!
//! The `commit` command: push local files to a branch as one commit.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::github::{commit_to_repo, CommitRequest, FileChange, Gateway};
use crate::ui::output::{self, Verbosity};

/// Commit local files to a repository branch.
pub async fn commit(
    gateway: &Gateway,
    verbosity: Verbosity,
    repo: String,
    message: String,
    branch: Option<String>,
    dest: Option<String>,
    files: Vec<PathBuf>,
) -> Result<()> {
    let mut changes = Vec::with_capacity(files.len());
    for path in &files {
        let bytes =
            std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        changes.push(FileChange::from_bytes(repo_path(path), &bytes));
        output::debug(format!("staged {}", path.display()), verbosity);
    }

    let request = CommitRequest {
        repo_url: repo,
        message,
        files: changes,
        branch,
        destination_path: dest,
    };
    let outcome = commit_to_repo(gateway, &request).await?;

    output::success(
        format!(
            "committed {} file(s) to {}: {}",
            files.len(),
            outcome.branch,
            outcome.commit_url
        ),
        verbosity,
    );
    Ok(())
}

/// Repository-relative path for a local file: the path as given, with
/// forward slashes and without a leading `./`.
fn repo_path(path: &Path) -> String {
    let raw = path.to_string_lossy().replace('\\', "/");
    raw.strip_prefix("./").unwrap_or(&raw).to_string()
}
