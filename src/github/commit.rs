//! github::commit
//!
//! Commit orchestration: strategy selection and recovery.
//!
//! # Design
//!
//! One orchestration pushes an ordered set of files to a branch as a single
//! commit. The flow:
//!
//! ```text
//! validate -> probe(repo, branch)
//!   empty      -> InitializeEmpty (tree without base, parentless commit, ref create)
//!   non-empty  -> AppendExisting  (tree on tip's tree, one parent, ref patch)
//!   AppendExisting fails with BranchNotFound
//!              -> retry once with InitializeEmpty semantics on the same branch
//!   anything else -> propagate
//! ```
//!
//! Initializing an empty repository is one atomic multi-file commit through
//! the git data API, not a per-file contents-API loop; every run produces
//! exactly one commit.
//!
//! This module is the only place an error may be caught and reinterpreted as
//! a strategy transition. All validation happens before any network call.

use serde::Deserialize;

use super::errors::GitHubError;
use super::gateway::Gateway;
use super::objects::ObjectBuilder;
use super::probe;
use super::types::{CommitOutcome, FileChange, RepoRef};

/// Branch used when neither the caller nor the repository names one.
const FALLBACK_BRANCH: &str = "main";

/// A request to commit files to a repository.
#[derive(Debug, Clone)]
pub struct CommitRequest {
    /// Repository web URL (`https://github.com/<owner>/<repo>`)
    pub repo_url: String,
    /// Commit message, passed through verbatim
    pub message: String,
    /// Ordered, non-empty list of files to commit
    pub files: Vec<FileChange>,
    /// Target branch; defaults to the repository's default branch
    pub branch: Option<String>,
    /// Optional path prefix prepended to every file path
    pub destination_path: Option<String>,
}

/// How the orchestrator will construct the commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitStrategy {
    /// First commit of an empty repository: no base tree, no parents,
    /// branch ref created.
    InitializeEmpty,
    /// Append to existing history: base tree from the tip, one parent,
    /// branch ref patched forward.
    AppendExisting,
}

/// Minimal repository metadata read during orchestration.
#[derive(Debug, Deserialize)]
struct RepoMetadata {
    default_branch: Option<String>,
}

/// Push `request.files` to the target branch as one commit.
///
/// # Errors
///
/// - `InvalidInput` for an empty file list or malformed repository URL,
///   raised before any network call
/// - `BranchNotFound` never escapes: it triggers the one-shot initialize
///   retry instead
/// - everything else propagates from the gateway unchanged
pub async fn commit_to_repo(
    gateway: &Gateway,
    request: &CommitRequest,
) -> Result<CommitOutcome, GitHubError> {
    if request.files.is_empty() {
        return Err(GitHubError::InvalidInput(
            "at least one file is required".into(),
        ));
    }
    let repo = RepoRef::parse_url(&request.repo_url)?;

    let files: Vec<FileChange> = match request.destination_path.as_deref() {
        Some(prefix) => request
            .files
            .iter()
            .map(|f| FileChange {
                path: prefix_path(prefix, &f.path),
                content: f.content.clone(),
            })
            .collect(),
        None => request.files.clone(),
    };

    let metadata: RepoMetadata = gateway.get(&format!("/repos/{repo}")).await?;
    let branch = request
        .branch
        .clone()
        .or(metadata.default_branch)
        .unwrap_or_else(|| FALLBACK_BRANCH.to_string());

    let strategy = if probe::is_repo_empty(gateway, &repo, &branch).await? {
        CommitStrategy::InitializeEmpty
    } else {
        CommitStrategy::AppendExisting
    };

    let builder = ObjectBuilder::new(gateway, &repo);
    let commit = match strategy {
        CommitStrategy::InitializeEmpty => {
            builder.initial_commit(&branch, &files, &request.message).await?
        }
        CommitStrategy::AppendExisting => {
            match builder.append_commit(&branch, &files, &request.message).await {
                // The probe said non-empty but the ref is gone (deleted
                // branch, ambiguous server state). Fall back to initialize
                // semantics on the same branch, once.
                Err(GitHubError::BranchNotFound(_)) => {
                    builder.initial_commit(&branch, &files, &request.message).await?
                }
                other => other?,
            }
        }
    };

    Ok(CommitOutcome {
        commit_sha: commit.sha,
        commit_url: commit.html_url,
        branch,
    })
}

/// Join a destination prefix and a file path with exactly one separator.
///
/// Leading and trailing separators on the prefix are stripped; an empty
/// prefix leaves the path unchanged.
fn prefix_path(prefix: &str, path: &str) -> String {
    let trimmed = prefix.trim_matches('/');
    if trimmed.is_empty() {
        path.to_string()
    } else {
        format!("{trimmed}/{path}")
    }
}
