//! github::types
//!
//! Domain and wire types for GitHub operations.
//!
//! # Design
//!
//! Domain types (`RepoRef`, `FileChange`, `BranchTip`) are owned by this
//! crate and carry no serde baggage beyond what the API needs. Wire types
//! mirror the subset of GitHub's response shapes we actually read, so
//! unrelated fields in responses are ignored rather than parsed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::GitHubError;

/// File mode for regular (non-executable) blobs.
pub const BLOB_MODE: &str = "100644";

/// Identifies a repository by owner and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub name: String,
}

impl RepoRef {
    /// Parse a repository web URL of the form `https://github.com/<owner>/<repo>`.
    ///
    /// A trailing `.git` suffix and trailing slashes are tolerated.
    ///
    /// # Errors
    ///
    /// Returns `GitHubError::InvalidInput` if the URL is not a GitHub web URL
    /// or has fewer than two path segments.
    pub fn parse_url(url: &str) -> Result<Self, GitHubError> {
        let rest = url
            .strip_prefix("https://github.com/")
            .or_else(|| url.strip_prefix("http://github.com/"))
            .ok_or_else(|| {
                GitHubError::InvalidInput(format!("not a GitHub repository URL: {url}"))
            })?;
        let rest = rest.trim_end_matches('/');
        let rest = rest.strip_suffix(".git").unwrap_or(rest);

        let mut segments = rest.splitn(2, '/');
        let owner = segments.next().unwrap_or_default();
        let name = segments.next().unwrap_or_default();
        if owner.is_empty() || name.is_empty() {
            return Err(GitHubError::InvalidInput(format!(
                "repository URL must contain owner and name: {url}"
            )));
        }

        Ok(RepoRef {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl std::fmt::Display for RepoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// One file to be committed.
///
/// `content` is base64-encoded text; the object builder passes it through
/// without re-encoding.
#[derive(Debug, Clone)]
pub struct FileChange {
    /// Repository-relative path, forward-slash separated
    pub path: String,
    /// Base64-encoded file content
    pub content: String,
}

impl FileChange {
    /// Build a file change from raw bytes, encoding them as base64.
    pub fn from_bytes(path: impl Into<String>, bytes: &[u8]) -> Self {
        use base64::Engine;
        FileChange {
            path: path.into(),
            content: base64::engine::general_purpose::STANDARD.encode(bytes),
        }
    }
}

/// Where a branch currently points.
///
/// `commit_sha` is `None` when the branch does not exist yet. This is the
/// single point of truth for "where does the branch point now" during an
/// orchestration run.
#[derive(Debug, Clone)]
pub struct BranchTip {
    /// Branch name (without the `refs/heads/` prefix)
    pub branch: String,
    /// Commit sha the branch points at, if the branch exists
    pub commit_sha: Option<String>,
}

/// Successful outcome of a commit orchestration.
#[derive(Debug, Clone)]
pub struct CommitOutcome {
    /// Sha of the created commit
    pub commit_sha: String,
    /// Web URL of the created commit
    pub commit_url: String,
    /// Branch the commit landed on
    pub branch: String,
}

// --------------------------------------------------------------------------
// Wire types: repository metadata and listings
// --------------------------------------------------------------------------

/// Repository metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct Repo {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub updated_at: DateTime<Utc>,
    pub owner: RepoOwner,
    pub default_branch: String,
    #[serde(default)]
    pub topics: Vec<String>,
}

/// Repository owner login.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoOwner {
    pub login: String,
}

/// A branch as returned by the branches listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Branch {
    pub name: String,
    pub commit: CommitPointer,
    #[serde(default)]
    pub protected: bool,
}

/// A tag as returned by the tags listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Tag {
    pub name: String,
    pub commit: CommitPointer,
}

/// Sha + URL pair embedded in branch and tag listings.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitPointer {
    pub sha: String,
    pub url: String,
}

/// Kind of entry in a contents listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    File,
    Dir,
    Symlink,
    Submodule,
}

/// One entry in a repository contents listing.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoContent {
    pub name: String,
    pub path: String,
    pub sha: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub html_url: String,
    pub download_url: Option<String>,
}

/// An issue as returned by the issues listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub id: u64,
    pub number: u64,
    pub title: String,
    pub html_url: String,
    pub state: String,
    pub created_at: DateTime<Utc>,
    pub user: IssueAuthor,
}

/// Issue author login and avatar.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueAuthor {
    pub login: String,
    pub avatar_url: String,
}

/// A release as returned by the releases listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    pub id: u64,
    pub tag_name: String,
    pub name: Option<String>,
    pub body: Option<String>,
    pub html_url: String,
    pub upload_url: String,
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

/// An asset attached to a release.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
    pub id: u64,
    pub name: String,
    pub browser_download_url: String,
}

// --------------------------------------------------------------------------
// Wire types: git data API
// --------------------------------------------------------------------------

/// Response from the single-ref endpoints (`git/ref/...`, `git/refs/...`).
#[derive(Debug, Clone, Deserialize)]
pub struct GitRef {
    #[serde(rename = "ref")]
    pub ref_name: String,
    pub object: GitObject,
}

/// Object a ref points at.
#[derive(Debug, Clone, Deserialize)]
pub struct GitObject {
    pub sha: String,
    #[serde(rename = "type")]
    pub object_type: String,
}

/// Response from the commit-object endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct GitCommit {
    pub sha: String,
    pub html_url: String,
    pub tree: GitTreePointer,
}

/// Tree sha embedded in a commit object.
#[derive(Debug, Clone, Deserialize)]
pub struct GitTreePointer {
    pub sha: String,
}

/// Response from blob creation.
#[derive(Debug, Clone, Deserialize)]
pub struct GitBlob {
    pub sha: String,
}

/// Response from tree creation.
#[derive(Debug, Clone, Deserialize)]
pub struct GitTree {
    pub sha: String,
}

/// One entry in a tree creation request.
#[derive(Debug, Clone, Serialize)]
pub struct TreeEntry {
    pub path: String,
    pub mode: &'static str,
    #[serde(rename = "type")]
    pub entry_type: &'static str,
    pub sha: String,
}

impl TreeEntry {
    /// A regular-file blob entry.
    pub fn blob(path: impl Into<String>, sha: impl Into<String>) -> Self {
        TreeEntry {
            path: path.into(),
            mode: BLOB_MODE,
            entry_type: "blob",
            sha: sha.into(),
        }
    }
}

/// Response from annotated tag object creation.
#[derive(Debug, Clone, Deserialize)]
pub struct GitTagObject {
    pub sha: String,
}
