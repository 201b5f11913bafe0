//! gitdrop - push files, issues, and releases to GitHub repositories
//!
//! gitdrop is a single-binary tool for three repository operations: commit
//! files to a branch, open issues, and publish releases, against the GitHub
//! REST API. The heart of the crate is the commit orchestration in
//! [`github::commit`]: a multi-step git data API flow (blobs → tree →
//! commit → ref) with divergent paths for empty and existing repositories
//! and recovery from missing branches.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to handlers)
//! - [`github`] - Gateway, prober, object builder, orchestrator, and thin
//!   issue/release collaborators
//! - [`refine`] - Optional free-text refinement seam (injected collaborator)
//! - [`archive`] - Archive extraction seam (injected collaborator)
//! - [`ui`] - Output utilities
//!
//! # Correctness Invariants
//!
//! 1. A commit's tree is always built on its parent's tree (or no base tree
//!    for a parentless initial commit); prior repository content is never
//!    silently dropped
//! 2. Object construction runs in strict dependency order: blobs, then
//!    tree, then commit, then ref
//! 3. Input validation happens before any network call
//! 4. Tokens are explicit inputs, never ambient state

pub mod archive;
pub mod cli;
pub mod github;
pub mod refine;
pub mod ui;
