//! github
//!
//! GitHub REST API integration.
//!
//! # Architecture
//!
//! - [`gateway`]: single-attempt HTTP invocation with error normalization
//! - [`probe`]: classifies "repository has no commits" from error shapes
//! - [`objects`]: low-level git object construction (blob/tree/commit/ref)
//! - [`commit`]: the commit orchestrator (strategy selection + recovery)
//! - [`repos`], [`issues`], [`releases`]: thin single-call collaborators
//!
//! Data flows one direction: a caller hands the orchestrator a repository
//! URL, branch, file list, and message; the prober classifies repository
//! state; the object builder drives gateway calls in dependency order; a
//! commit URL or typed failure bubbles back.
//!
//! The bearer token is threaded explicitly through [`gateway::Gateway`]
//! construction and never read from ambient state.

pub mod commit;
pub mod errors;
pub mod gateway;
pub mod issues;
pub mod objects;
pub mod probe;
pub mod releases;
pub mod repos;
pub mod types;

pub use commit::{commit_to_repo, CommitRequest, CommitStrategy};
pub use errors::GitHubError;
pub use gateway::Gateway;
pub use types::{CommitOutcome, FileChange, RepoRef};
