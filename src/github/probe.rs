//! github::probe
//!
//! Repository emptiness detection.
//!
//! # Design
//!
//! GitHub has no single endpoint that reliably says "this repository has no
//! commits yet". Probing a branch ref on an empty repository instead fails
//! with one of a few recognizable shapes. This module is the one place that
//! maps those shapes to the semantic signal "empty"; genuine failures (bad
//! token, rate limit, network) propagate unchanged.
//!
//! The classification keys on HTTP status first (404, 409) and falls back to
//! a message substring for the prose-only variant. String matching against
//! server text is fragile by nature; the table below is the single surface
//! to revalidate when GitHub's error contracts change.

use super::errors::GitHubError;
use super::gateway::Gateway;
use super::types::{GitRef, RepoRef};

/// HTTP statuses that signal "no commit history" when probing a branch ref.
const EMPTY_STATUS_SIGNATURES: &[u16] = &[404, 409];

/// Message substrings that signal "no commit history".
const EMPTY_MESSAGE_SIGNATURES: &[&str] =
    &["Git Repository is empty", "This repository is empty"];

/// Check whether an error from a ref probe means the repository is empty.
///
/// Only meaningful for errors raised while reading a specific branch ref;
/// a 404 from an unrelated endpoint means something else.
pub fn is_empty_signal(err: &GitHubError) -> bool {
    if let Some(status) = err.status() {
        if EMPTY_STATUS_SIGNATURES.contains(&status) {
            return true;
        }
    }
    if let GitHubError::Api { message, .. } = err {
        return EMPTY_MESSAGE_SIGNATURES
            .iter()
            .any(|sig| message.contains(sig));
    }
    false
}

/// Determine whether `branch` has any commit history in `repo`.
///
/// Resolves the branch ref; a successful read means history exists. Errors
/// matching the recognized empty signatures return `Ok(true)`; anything else
/// propagates.
pub async fn is_repo_empty(
    gateway: &Gateway,
    repo: &RepoRef,
    branch: &str,
) -> Result<bool, GitHubError> {
    let path = format!("/repos/{repo}/git/ref/heads/{branch}");
    match gateway.get::<GitRef>(&path).await {
        Ok(_) => Ok(false),
        Err(err) if is_empty_signal(&err) => Ok(true),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_is_empty_signal() {
        let err = GitHubError::Api {
            status: 409,
            message: "Git Repository is empty.".into(),
        };
        assert!(is_empty_signal(&err));
    }

    #[test]
    fn ref_not_found_is_empty_signal() {
        let err = GitHubError::Api {
            status: 404,
            message: "Not Found".into(),
        };
        assert!(is_empty_signal(&err));
    }

    #[test]
    fn empty_message_without_status_is_empty_signal() {
        let err = GitHubError::Api {
            status: 500,
            message: "Git Repository is empty.".into(),
        };
        assert!(is_empty_signal(&err));
        let err = GitHubError::Api {
            status: 500,
            message: "This repository is empty.".into(),
        };
        assert!(is_empty_signal(&err));
    }

    #[test]
    fn auth_failure_is_not_empty_signal() {
        assert!(!is_empty_signal(&GitHubError::AuthFailed(
            "invalid or expired token".into()
        )));
        assert!(!is_empty_signal(&GitHubError::RateLimited));
        assert!(!is_empty_signal(&GitHubError::Network(
            "connection refused".into()
        )));
    }

    #[test]
    fn unrelated_api_error_is_not_empty_signal() {
        let err = GitHubError::Api {
            status: 422,
            message: "Validation Failed".into(),
        };
        assert!(!is_empty_signal(&err));
    }
}
