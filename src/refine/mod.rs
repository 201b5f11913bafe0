//! refine
//!
//! Free-text refinement seam.
//!
//! # Design
//!
//! Issue bodies and release notes can optionally be polished by an external
//! rewriting service before submission. The service is a collaborator, not
//! part of this crate: callers inject a [`Refiner`] implementation.
//! Refinement is best-effort; a failure surfaces to the caller, who decides
//! whether to proceed with the original text. It never silently blocks the
//! base operation.

use async_trait::async_trait;
use thiserror::Error;

/// What kind of text is being refined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefineContext {
    /// An issue description
    Issue,
    /// Release notes
    ReleaseNotes,
}

impl std::fmt::Display for RefineContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefineContext::Issue => write!(f, "issue"),
            RefineContext::ReleaseNotes => write!(f, "release notes"),
        }
    }
}

/// Errors from a refinement service.
#[derive(Debug, Clone, Error)]
pub enum RefineError {
    /// The service was unreachable or returned an error.
    #[error("refinement failed: {0}")]
    ServiceFailed(String),
}

/// A text refinement service.
#[async_trait]
pub trait Refiner: Send + Sync {
    /// Rewrite `text` for the given context.
    async fn refine(&self, text: &str, context: RefineContext) -> Result<String, RefineError>;
}

/// Refiner that returns the input unchanged. The CLI default when no
/// refinement service is configured.
#[derive(Debug, Default)]
pub struct Passthrough;

#[async_trait]
impl Refiner for Passthrough {
    async fn refine(&self, text: &str, _context: RefineContext) -> Result<String, RefineError> {
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn passthrough_returns_input() {
        let refiner = Passthrough;
        let out = refiner
            .refine("fix the bug", RefineContext::Issue)
            .await
            .unwrap();
        assert_eq!(out, "fix the bug");
    }

    #[test]
    fn context_display() {
        assert_eq!(RefineContext::Issue.to_string(), "issue");
        assert_eq!(RefineContext::ReleaseNotes.to_string(), "release notes");
    }
}
