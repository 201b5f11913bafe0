//! github::objects
//!
//! Low-level git object construction: blobs, trees, commits, refs.
//!
//! # Design
//!
//! The GitHub object model offers no atomic "blobs + tree + commit + ref"
//! transaction, so a commit is a saga: blob creation fans out concurrently
//! (blobs have no interdependencies), then tree, commit, and ref run in
//! strict dependency order. A failure at any step aborts the remainder and
//! leaves earlier objects orphaned on the server; unreferenced objects are
//! never linked to a ref and get garbage-collected upstream, so no rollback
//! is attempted.
//!
//! The central invariant: a commit's tree must have been built with
//! `base_tree` equal to its sole parent's tree sha, or with no base tree
//! when the commit has no parent. Getting this wrong silently drops prior
//! repository content.
//!
//! Ref updates are plain fast-forward PATCHes with no compare-and-swap, so
//! a concurrent writer on the same branch can be overwritten; last write
//! wins. Known gap, matching the upstream contract this crate consumes.

use futures::future::try_join_all;
use serde_json::json;

use super::errors::GitHubError;
use super::gateway::Gateway;
use super::types::{
    BranchTip, FileChange, GitBlob, GitCommit, GitRef, GitTree, RepoRef, TreeEntry,
};

/// Server message observed when a ref exists but has no commit behind it.
const NO_COMMIT_FOR_REF: &str = "No commit found for the ref";

/// Builds git objects for one repository through the gateway.
pub struct ObjectBuilder<'a> {
    gateway: &'a Gateway,
    repo: &'a RepoRef,
}

impl<'a> ObjectBuilder<'a> {
    pub fn new(gateway: &'a Gateway, repo: &'a RepoRef) -> Self {
        ObjectBuilder { gateway, repo }
    }

    /// Resolve where `branch` currently points.
    ///
    /// # Errors
    ///
    /// Returns `GitHubError::BranchNotFound` when the ref does not resolve
    /// to a commit (missing ref, or GitHub's "No commit found for the ref"
    /// shape). Other failures propagate unchanged.
    pub async fn resolve_branch_tip(&self, branch: &str) -> Result<BranchTip, GitHubError> {
        let path = format!("/repos/{}/git/ref/heads/{}", self.repo, branch);
        match self.gateway.get::<GitRef>(&path).await {
            Ok(git_ref) => Ok(BranchTip {
                branch: branch.to_string(),
                commit_sha: Some(git_ref.object.sha),
            }),
            Err(GitHubError::Api { status, message })
                if status == 404 || message.contains(NO_COMMIT_FOR_REF) =>
            {
                Err(GitHubError::BranchNotFound(branch.to_string()))
            }
            Err(err) => Err(err),
        }
    }

    /// Fetch the tree sha of a commit object.
    pub async fn commit_tree_sha(&self, commit_sha: &str) -> Result<String, GitHubError> {
        let path = format!("/repos/{}/git/commits/{}", self.repo, commit_sha);
        let commit: GitCommit = self.gateway.get(&path).await?;
        Ok(commit.tree.sha)
    }

    /// Create one blob per file, concurrently, preserving input order in the
    /// returned entries.
    ///
    /// Content is already base64; it is passed through without re-encoding.
    /// Identical file contents produce identical server-side shas, which is
    /// fine; no client-side deduplication.
    pub async fn create_blobs(
        &self,
        files: &[FileChange],
    ) -> Result<Vec<TreeEntry>, GitHubError> {
        let path = format!("/repos/{}/git/blobs", self.repo);
        try_join_all(files.iter().map(|file| {
            let path = path.clone();
            async move {
                let blob: GitBlob = self
                    .gateway
                    .post(
                        &path,
                        &json!({ "content": file.content, "encoding": "base64" }),
                    )
                    .await?;
                Ok(TreeEntry::blob(file.path.clone(), blob.sha))
            }
        }))
        .await
    }

    /// Create a tree from `entries`.
    ///
    /// With `base_tree`, the server upserts the entries into the existing
    /// tree by path and preserves everything else. Without it, the tree
    /// contains only `entries` (first commit of an empty repository).
    pub async fn create_tree(
        &self,
        base_tree: Option<&str>,
        entries: &[TreeEntry],
    ) -> Result<String, GitHubError> {
        let path = format!("/repos/{}/git/trees", self.repo);
        let body = match base_tree {
            Some(base) => json!({ "base_tree": base, "tree": entries }),
            None => json!({ "tree": entries }),
        };
        let tree: GitTree = self.gateway.post(&path, &body).await?;
        Ok(tree.sha)
    }

    /// Create a commit pointing at `tree_sha`.
    ///
    /// `parents` is empty only for the initial commit of an empty repository;
    /// otherwise exactly one parent (no merge commits).
    pub async fn create_commit(
        &self,
        message: &str,
        tree_sha: &str,
        parents: &[String],
    ) -> Result<GitCommit, GitHubError> {
        let path = format!("/repos/{}/git/commits", self.repo);
        self.gateway
            .post(
                &path,
                &json!({ "message": message, "tree": tree_sha, "parents": parents }),
            )
            .await
    }

    /// Fast-forward an existing branch ref to `sha`.
    pub async fn update_ref(&self, branch: &str, sha: &str) -> Result<(), GitHubError> {
        let path = format!("/repos/{}/git/refs/heads/{}", self.repo, branch);
        self.gateway.patch(&path, &json!({ "sha": sha })).await
    }

    /// Create a new ref (`refs/heads/...` or `refs/tags/...`) at `sha`.
    pub async fn create_ref(&self, full_ref: &str, sha: &str) -> Result<(), GitHubError> {
        let path = format!("/repos/{}/git/refs", self.repo);
        let _: serde_json::Value = self
            .gateway
            .post(&path, &json!({ "ref": full_ref, "sha": sha }))
            .await?;
        Ok(())
    }

    /// Append a commit to an existing branch (tree layered on the tip's tree,
    /// commit parented on the tip, ref patched forward).
    pub async fn append_commit(
        &self,
        branch: &str,
        files: &[FileChange],
        message: &str,
    ) -> Result<GitCommit, GitHubError> {
        let tip = self.resolve_branch_tip(branch).await?;
        let tip_sha = tip
            .commit_sha
            .ok_or_else(|| GitHubError::BranchNotFound(branch.to_string()))?;
        let base_tree = self.commit_tree_sha(&tip_sha).await?;

        let entries = self.create_blobs(files).await?;
        let tree_sha = self.create_tree(Some(&base_tree), &entries).await?;
        let commit = self
            .create_commit(message, &tree_sha, std::slice::from_ref(&tip_sha))
            .await?;
        self.update_ref(branch, &commit.sha).await?;
        Ok(commit)
    }

    /// Create the first commit of an empty repository: a tree with no base,
    /// a parentless commit, and a newly created branch ref.
    pub async fn initial_commit(
        &self,
        branch: &str,
        files: &[FileChange],
        message: &str,
    ) -> Result<GitCommit, GitHubError> {
        let entries = self.create_blobs(files).await?;
        let tree_sha = self.create_tree(None, &entries).await?;
        let commit = self.create_commit(message, &tree_sha, &[]).await?;
        self.create_ref(&format!("refs/heads/{branch}"), &commit.sha)
            .await?;
        Ok(commit)
    }

    /// Create a new branch pointing at the tip of `source_branch`.
    pub async fn create_branch(
        &self,
        new_branch: &str,
        source_branch: &str,
    ) -> Result<(), GitHubError> {
        let tip = self.resolve_branch_tip(source_branch).await?;
        let sha = tip
            .commit_sha
            .ok_or_else(|| GitHubError::BranchNotFound(source_branch.to_string()))?;
        self.create_ref(&format!("refs/heads/{new_branch}"), &sha)
            .await
    }
}
