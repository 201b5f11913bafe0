//! github::errors
//!
//! Error types for GitHub API operations.
//!
//! # Design
//!
//! The taxonomy separates caller mistakes (`InvalidInput`) from server
//! responses (`Api`, `AuthFailed`, `RateLimited`) and transport problems
//! (`Network`). `BranchNotFound` is the one recoverable sub-case: the commit
//! orchestrator reinterprets it as "fall back to initializing the branch"
//! rather than surfacing it. No other component is allowed to catch and
//! reinterpret errors.
//!
//! Error messages never contain token values.

use thiserror::Error;

/// Errors from GitHub API operations.
#[derive(Debug, Clone, Error)]
pub enum GitHubError {
    /// The caller supplied invalid input (missing token, empty file list,
    /// malformed repository URL). Detected before any network call.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Authentication failed (invalid token, expired, insufficient permissions).
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// The target branch ref does not exist.
    ///
    /// Recoverable: the orchestrator retries once with initialize semantics.
    #[error("branch not found: {0}")]
    BranchNotFound(String),

    /// Rate limit exceeded.
    #[error("rate limited")]
    RateLimited,

    /// The API returned a non-2xx response.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Network or connection error.
    #[error("network error: {0}")]
    Network(String),

    /// A release asset upload failed.
    #[error("asset upload failed ({status}): {message}")]
    UploadFailed {
        /// HTTP status code
        status: u16,
        /// Error message from the upload endpoint
        message: String,
    },
}

impl GitHubError {
    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            GitHubError::Api { status, .. } | GitHubError::UploadFailed { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            format!("{}", GitHubError::InvalidInput("empty file list".into())),
            "invalid input: empty file list"
        );
        assert_eq!(
            format!("{}", GitHubError::AuthFailed("expired token".into())),
            "authentication failed: expired token"
        );
        assert_eq!(
            format!("{}", GitHubError::BranchNotFound("main".into())),
            "branch not found: main"
        );
        assert_eq!(format!("{}", GitHubError::RateLimited), "rate limited");
        assert_eq!(
            format!(
                "{}",
                GitHubError::Api {
                    status: 422,
                    message: "Validation failed".into()
                }
            ),
            "API error: 422 - Validation failed"
        );
        assert_eq!(
            format!("{}", GitHubError::Network("connection refused".into())),
            "network error: connection refused"
        );
        assert_eq!(
            format!(
                "{}",
                GitHubError::UploadFailed {
                    status: 422,
                    message: "already_exists".into()
                }
            ),
            "asset upload failed (422): already_exists"
        );
    }

    #[test]
    fn status_is_carried_for_api_errors() {
        let err = GitHubError::Api {
            status: 409,
            message: "Conflict".into(),
        };
        assert_eq!(err.status(), Some(409));
        assert_eq!(GitHubError::RateLimited.status(), None);
    }
}
