//! Progress callback trait for interface-agnostic updates

use crate::error::Error;
use crate::types::{Commit, LicenseInfo, PullRequest, Reference, RepoId, Repository};
use async_trait::async_trait;
use std::fmt;

/// Workflow phase for a single repository
///
/// Phases always advance strictly forward; a failure in any phase aborts
/// the repository's workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fetching or creating the commit-branch reference
    ResolvingRef,
    /// Staging local files into a new tree
    BuildingTree,
    /// Creating the commit and advancing the branch
    Pushing,
    /// Opening the pull request
    OpeningPr,
    /// Workflow complete for this repository
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ResolvingRef => "Resolving branch",
            Self::BuildingTree => "Building tree",
            Self::Pushing => "Pushing commit",
            Self::OpeningPr => "Opening pull request",
            Self::Complete => "Done",
        };
        f.write_str(name)
    }
}

/// Progress callback trait
///
/// Implement this trait to receive progress updates during a sweep.
/// CLI implementations print to the terminal; tests record calls.
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when a repository without a license enters the workflow
    async fn on_repo_start(&self, repo: &RepoId);

    /// Called when a repository is skipped because it already has a license
    async fn on_repo_skipped(&self, repo: &Repository, license: &LicenseInfo);

    /// Called when entering a new phase
    async fn on_phase(&self, phase: Phase);

    /// Called when the commit-branch reference has been fetched or created
    async fn on_ref_resolved(&self, reference: &Reference);

    /// Called when the commit has been pushed and the branch advanced
    async fn on_commit_pushed(&self, commit: &Commit);

    /// Called when the pull request has been opened
    async fn on_pr_opened(&self, pr: &PullRequest);

    /// Called when PR creation is skipped because the title is empty
    async fn on_pr_skipped(&self);

    /// Called when a repository's workflow fails
    async fn on_error(&self, error: &Error);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_repo_start(&self, _repo: &RepoId) {}
    async fn on_repo_skipped(&self, _repo: &Repository, _license: &LicenseInfo) {}
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_ref_resolved(&self, _reference: &Reference) {}
    async fn on_commit_pushed(&self, _commit: &Commit) {}
    async fn on_pr_opened(&self, _pr: &PullRequest) {}
    async fn on_pr_skipped(&self) {}
    async fn on_error(&self, _error: &Error) {}
    async fn on_message(&self, _message: &str) {}
}
