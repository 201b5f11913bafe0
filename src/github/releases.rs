//! github::releases
//!
//! Release listing, creation, tagging, and asset upload.
//!
//! Asset uploads go to a separate upload host; GitHub hands back a
//! RFC 6570-templated `upload_url` ending in `{?name,label}` which must be
//! expanded before use. Uploads run one at a time; a failure is reported
//! with the server's message and earlier uploads stay in place.

use serde::Serialize;

use super::errors::GitHubError;
use super::gateway::Gateway;
use super::objects::ObjectBuilder;
use super::types::{GitTagObject, Release, RepoRef};

/// Request to publish a release.
#[derive(Debug, Clone, Serialize)]
pub struct CreateReleaseRequest {
    /// Tag to release; created at `target_commitish` if it does not exist
    pub tag_name: String,
    /// Branch name or commit sha the tag should point at. Omitted, GitHub
    /// tags the tip of the repository's default branch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_commitish: Option<String>,
    /// Release title
    pub name: String,
    /// Release notes, passed through verbatim
    pub body: String,
    /// Publish as draft
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub draft: bool,
    /// Mark as prerelease
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub prerelease: bool,
}

/// List releases, newest first.
pub async fn list_releases(
    gateway: &Gateway,
    repo: &RepoRef,
) -> Result<Vec<Release>, GitHubError> {
    gateway.get(&format!("/repos/{repo}/releases")).await
}

/// Publish a release.
///
/// GitHub creates a lightweight tag at `target_commitish` when `tag_name`
/// does not exist yet, so callers can pass the branch name and let the tag
/// land on the branch tip.
pub async fn create_release(
    gateway: &Gateway,
    repo: &RepoRef,
    request: &CreateReleaseRequest,
) -> Result<Release, GitHubError> {
    gateway.post(&format!("/repos/{repo}/releases"), request).await
}

/// Create an annotated tag object at `commit_sha` and the ref pointing at it.
///
/// Two ordered steps: the tag object must exist before the ref can name it.
pub async fn create_annotated_tag(
    gateway: &Gateway,
    repo: &RepoRef,
    tag: &str,
    commit_sha: &str,
) -> Result<(), GitHubError> {
    let tag_object: GitTagObject = gateway
        .post(
            &format!("/repos/{repo}/git/tags"),
            &serde_json::json!({
                "tag": tag,
                "message": format!("Release {tag}"),
                "object": commit_sha,
                "type": "commit",
            }),
        )
        .await?;
    ObjectBuilder::new(gateway, repo)
        .create_ref(&format!("refs/tags/{tag}"), &tag_object.sha)
        .await
}

/// Upload one asset to a release.
///
/// `upload_url` is the templated URL from the release response.
pub async fn upload_release_asset(
    gateway: &Gateway,
    upload_url: &str,
    name: &str,
    content_type: &str,
    bytes: Vec<u8>,
) -> Result<(), GitHubError> {
    let url = expand_upload_url(upload_url, name)?;
    gateway.upload(&url, content_type, bytes).await?;
    Ok(())
}

/// Expand the `{?name,label}` template with the asset name.
fn expand_upload_url(upload_url: &str, name: &str) -> Result<String, GitHubError> {
    let base = upload_url
        .split('{')
        .next()
        .unwrap_or(upload_url)
        .to_string();
    let mut url = reqwest::Url::parse(&base)
        .map_err(|_| GitHubError::InvalidInput(format!("invalid upload URL: {upload_url}")))?;
    url.query_pairs_mut().append_pair("name", name);
    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_templated_upload_url() {
        let url = expand_upload_url(
            "https://uploads.github.com/repos/o/r/releases/1/assets{?name,label}",
            "app.zip",
        )
        .unwrap();
        assert_eq!(
            url,
            "https://uploads.github.com/repos/o/r/releases/1/assets?name=app.zip"
        );
    }

    #[test]
    fn encodes_asset_name() {
        let url = expand_upload_url(
            "https://uploads.github.com/repos/o/r/releases/1/assets{?name,label}",
            "my file.tar.gz",
        )
        .unwrap();
        assert!(url.ends_with("?name=my+file.tar.gz"));
    }

    #[test]
    fn untemplated_url_passes_through() {
        let url = expand_upload_url("https://uploads.github.com/assets", "a.zip").unwrap();
        assert_eq!(url, "https://uploads.github.com/assets?name=a.zip");
    }

    #[test]
    fn rejects_garbage_url() {
        assert!(expand_upload_url("not a url", "a.zip").is_err());
    }

    #[test]
    fn release_request_omits_false_flags() {
        let request = CreateReleaseRequest {
            tag_name: "v1.0.0".into(),
            target_commitish: Some("main".into()),
            name: "v1.0.0".into(),
            body: "notes".into(),
            draft: false,
            prerelease: false,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("draft").is_none());
        assert!(json.get("prerelease").is_none());
        assert_eq!(json["tag_name"], "v1.0.0");
        assert_eq!(json["target_commitish"], "main");
    }
}
