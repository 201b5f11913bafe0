//! github::issues
//!
//! Issue listing and creation. Single-call operations, no orchestration.

use serde::Serialize;

use super::errors::GitHubError;
use super::gateway::Gateway;
use super::types::{Issue, RepoRef};

/// Request to create an issue.
#[derive(Debug, Clone, Serialize)]
pub struct CreateIssueRequest {
    /// Issue title
    pub title: String,
    /// Issue body, passed through verbatim
    pub body: String,
}

/// List open issues, newest first.
pub async fn list_issues(gateway: &Gateway, repo: &RepoRef) -> Result<Vec<Issue>, GitHubError> {
    gateway
        .get(&format!(
            "/repos/{repo}/issues?state=open&sort=created&direction=desc"
        ))
        .await
}

/// Open a new issue.
pub async fn create_issue(
    gateway: &Gateway,
    repo: &RepoRef,
    request: &CreateIssueRequest,
) -> Result<Issue, GitHubError> {
    gateway.post(&format!("/repos/{repo}/issues"), request).await
}
