//! github::repos
//!
//! Repository, branch, and tag listings, plus contents browsing.
//!
//! Branch and tag listings are empty-tolerant: probing them on a repository
//! with no commits fails with the same shapes the prober recognizes, and
//! callers want an empty list there, not an error.

use reqwest::Method;

use super::errors::GitHubError;
use super::gateway::Gateway;
use super::probe;
use super::types::{Branch, ContentKind, Repo, RepoContent, RepoRef, Tag};

/// What the contents endpoint returned for a path.
#[derive(Debug, Clone)]
pub enum RepoContents {
    /// A single file's content, decoded from base64
    File(String),
    /// A directory listing, directories first, then by name
    Entries(Vec<RepoContent>),
}

/// Fetch one page of the authenticated user's own repositories, most
/// recently updated first.
pub async fn fetch_user_repos(
    gateway: &Gateway,
    page: u32,
    per_page: u32,
) -> Result<Vec<Repo>, GitHubError> {
    gateway
        .get(&format!(
            "/user/repos?type=owner&sort=updated&per_page={per_page}&page={page}"
        ))
        .await
}

/// Fetch all branches of a repository. Empty repositories yield an empty list.
pub async fn fetch_branches(
    gateway: &Gateway,
    repo: &RepoRef,
) -> Result<Vec<Branch>, GitHubError> {
    match gateway.get(&format!("/repos/{repo}/branches")).await {
        Ok(branches) => Ok(branches),
        Err(err) if probe::is_empty_signal(&err) => Ok(Vec::new()),
        Err(err) => Err(err),
    }
}

/// Fetch all tags of a repository. Empty repositories yield an empty list.
pub async fn fetch_tags(gateway: &Gateway, repo: &RepoRef) -> Result<Vec<Tag>, GitHubError> {
    match gateway.get(&format!("/repos/{repo}/tags")).await {
        Ok(tags) => Ok(tags),
        Err(err) if probe::is_empty_signal(&err) => Ok(Vec::new()),
        Err(err) => Err(err),
    }
}

/// Browse a repository path.
///
/// The contents endpoint returns an array for a directory and an object for a
/// file, so the result is an enum: directories come back as a listing sorted
/// directories-first then by name, files come back with their content decoded
/// from base64. Empty repositories and missing paths yield an empty listing.
pub async fn fetch_repo_contents(
    gateway: &Gateway,
    repo: &RepoRef,
    path: &str,
) -> Result<RepoContents, GitHubError> {
    let trimmed = path.trim_matches('/');
    let api_path = if trimmed.is_empty() {
        format!("/repos/{repo}/contents")
    } else {
        format!("/repos/{repo}/contents/{trimmed}")
    };

    let value = match gateway.invoke(Method::GET, &api_path, None).await {
        Ok(value) => value,
        Err(err) if probe::is_empty_signal(&err) => {
            return Ok(RepoContents::Entries(Vec::new()))
        }
        Err(err) => return Err(err),
    };
    let Some(value) = value else {
        return Ok(RepoContents::Entries(Vec::new()));
    };

    if value.is_array() {
        let mut entries: Vec<RepoContent> =
            serde_json::from_value(value).map_err(|err| GitHubError::Api {
                status: 200,
                message: format!("unexpected contents listing shape: {err}"),
            })?;
        sort_entries(&mut entries);
        return Ok(RepoContents::Entries(entries));
    }

    if value["type"] == "file" && value["encoding"] == "base64" {
        if let Some(content) = value["content"].as_str() {
            return Ok(RepoContents::File(decode_base64_text(content)?));
        }
    }
    Ok(RepoContents::Entries(Vec::new()))
}

/// Directories first, then lexicographic by name.
fn sort_entries(entries: &mut [RepoContent]) {
    entries.sort_by(|a, b| {
        let a_dir = a.kind == ContentKind::Dir;
        let b_dir = b.kind == ContentKind::Dir;
        b_dir.cmp(&a_dir).then_with(|| a.name.cmp(&b.name))
    });
}

/// GitHub wraps blob content in base64 with embedded line breaks.
fn decode_base64_text(content: &str) -> Result<String, GitHubError> {
    use base64::Engine;
    let compact: String = content.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(compact.as_bytes())
        .map_err(|err| GitHubError::Api {
            status: 200,
            message: format!("file content is not valid base64: {err}"),
        })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, kind: ContentKind) -> RepoContent {
        RepoContent {
            name: name.to_string(),
            path: name.to_string(),
            sha: "abc123".to_string(),
            size: 0,
            kind,
            html_url: format!("https://github.com/octo/widgets/{name}"),
            download_url: None,
        }
    }

    #[test]
    fn directories_sort_before_files() {
        let mut entries = vec![
            entry("zeta.rs", ContentKind::File),
            entry("docs", ContentKind::Dir),
            entry("alpha.rs", ContentKind::File),
            entry("assets", ContentKind::Dir),
        ];
        sort_entries(&mut entries);
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["assets", "docs", "alpha.rs", "zeta.rs"]);
    }

    #[test]
    fn decode_tolerates_line_breaks() {
        assert_eq!(
            decode_base64_text("aGVsbG8g\nd29ybGQ=").unwrap(),
            "hello world"
        );
    }

    #[test]
    fn decode_rejects_garbage() {
        let err = decode_base64_text("!!not-base64!!").unwrap_err();
        assert!(matches!(err, GitHubError::Api { status: 200, .. }));
    }
}
