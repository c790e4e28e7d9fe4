//! Remote forge service
//!
//! Provides the seam between the workflow and the hosting service's REST
//! API. The workflow only ever talks to [`ForgeService`]; tests substitute
//! their own implementation.

mod github;

pub use github::GitHubForge;

use crate::error::Result;
use crate::types::{
    Commit, NewCommit, NewPullRequest, PullRequest, Reference, RepoId, Repository, Tree, TreeEntry,
};
use async_trait::async_trait;

/// The remote API surface the workflow consumes
///
/// One authenticated handle is created at startup and reused read-only for
/// every call; methods take the target repository explicitly so a single
/// handle serves an entire organization sweep.
#[async_trait]
pub trait ForgeService: Send + Sync {
    /// List all repositories belonging to an organization, in listing order
    async fn list_org_repos(&self, org: &str) -> Result<Vec<Repository>>;

    /// Fetch a branch reference; `None` when the branch does not exist
    async fn get_ref(&self, repo: &RepoId, branch: &str) -> Result<Option<Reference>>;

    /// Create a branch reference pointing at an existing commit
    async fn create_ref(&self, repo: &RepoId, branch: &str, sha: &str) -> Result<Reference>;

    /// Fetch a commit by sha
    async fn get_commit(&self, repo: &RepoId, sha: &str) -> Result<Commit>;

    /// Create a tree anchored at `base_tree` with the given entries merged in
    ///
    /// The service preserves unlisted existing paths; no local tree diffing
    /// happens on this side.
    async fn create_tree(&self, repo: &RepoId, base_tree: &str, entries: &[TreeEntry])
    -> Result<Tree>;

    /// Create a commit object, obtaining its service-assigned sha
    async fn create_commit(&self, repo: &RepoId, commit: &NewCommit) -> Result<Commit>;

    /// Advance a branch reference to a new commit (non-force)
    ///
    /// Fails with [`crate::error::Error::Conflict`] when the reference has
    /// moved concurrently.
    async fn update_ref(&self, repo: &RepoId, branch: &str, sha: &str) -> Result<Reference>;

    /// Open a pull request
    async fn create_pull_request(&self, repo: &RepoId, pr: &NewPullRequest)
    -> Result<PullRequest>;
}
