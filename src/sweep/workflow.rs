//! Per-repository workflow
//!
//! The workflow is an explicit state machine so that each repository's run
//! has a single abort point and partial-failure handling lives in the
//! organization loop, not in control flow scattered across steps.

use crate::config::SweepConfig;
use crate::error::{Error, Result};
use crate::forge::ForgeService;
use crate::sweep::progress::{Phase, ProgressCallback};
use crate::sweep::tree::load_entries;
use crate::types::{
    Commit, CommitAuthor, NewCommit, NewPullRequest, PullRequest, Reference, RepoId, Tree,
};
use chrono::Utc;
use tracing::debug;

/// Result of one repository's workflow
#[derive(Debug, Clone)]
pub struct WorkflowOutcome {
    /// Repository the workflow ran against
    pub repo: RepoId,
    /// The commit pushed onto the commit branch
    pub commit: Commit,
    /// The opened pull request; `None` when PR creation was skipped
    pub pull_request: Option<PullRequest>,
}

/// Workflow state machine; each state carries the data the next step needs
enum Step {
    ResolveRef,
    BuildTree {
        reference: Reference,
    },
    PushCommit {
        reference: Reference,
        tree: Tree,
    },
    OpenPr {
        commit: Commit,
    },
    Done {
        commit: Commit,
        pull_request: Option<PullRequest>,
    },
}

/// Fetch the commit-branch reference, creating it from the base branch if absent
///
/// Idempotent: when the commit branch already exists it is returned
/// unchanged and no creation call is issued.
pub async fn resolve_ref(
    forge: &dyn ForgeService,
    repo: &RepoId,
    commit_branch: &str,
    base_branch: &str,
) -> Result<Reference> {
    if let Some(reference) = forge.get_ref(repo, commit_branch).await? {
        debug!(%repo, commit_branch, sha = %reference.sha, "commit branch exists");
        return Ok(reference);
    }

    if commit_branch == base_branch {
        return Err(Error::Config(format!(
            "branch {commit_branch} does not exist and `--base-branch` equals `--commit-branch`"
        )));
    }
    if base_branch.is_empty() {
        return Err(Error::Config(format!(
            "`--base-branch` must not be empty when branch {commit_branch} does not exist"
        )));
    }

    let base = forge
        .get_ref(repo, base_branch)
        .await?
        .ok_or_else(|| Error::NotFound(format!("base branch {base_branch} in {repo}")))?;

    forge.create_ref(repo, commit_branch, &base.sha).await
}

/// Create a commit on top of the reference and advance it (non-force)
///
/// The parent is whatever the reference points at when this runs; the
/// returned reference points at the new commit.
pub async fn push_commit(
    forge: &dyn ForgeService,
    repo: &RepoId,
    reference: &Reference,
    tree: &Tree,
    author: &CommitAuthor,
    message: &str,
) -> Result<(Commit, Reference)> {
    let parent = forge.get_commit(repo, &reference.sha).await?;

    let new_commit = NewCommit {
        message: message.to_string(),
        tree: tree.sha.clone(),
        parents: vec![parent.sha],
        author: author.clone(),
        date: Utc::now(),
    };
    let created = forge.create_commit(repo, &new_commit).await?;

    let branch = branch_name(reference);
    let updated = forge.update_ref(repo, branch, &created.sha).await?;
    Ok((created, updated))
}

/// Open a pull request proposing `commit_branch` into `merge_branch`
///
/// An empty title is a configuration error; callers that want to skip PR
/// creation intentionally check the title before calling. The head branch is
/// owner-qualified when the head repository's owner differs from the base
/// repository's owner.
pub async fn open_pull_request(
    forge: &dyn ForgeService,
    base_repo: &RepoId,
    head_owner: &str,
    commit_branch: &str,
    merge_branch: &str,
    title: &str,
    body: &str,
) -> Result<PullRequest> {
    if title.is_empty() {
        return Err(Error::Config(
            "`--pr-title` is empty; pull request creation skipped".to_string(),
        ));
    }

    let head = if head_owner == base_repo.owner {
        commit_branch.to_string()
    } else {
        format!("{head_owner}:{commit_branch}")
    };

    forge
        .create_pull_request(
            base_repo,
            &NewPullRequest {
                title: title.to_string(),
                head,
                base: merge_branch.to_string(),
                body: body.to_string(),
                maintainer_can_modify: true,
            },
        )
        .await
}

/// Repository the pull request targets; defaults to the source repository
fn pr_target(repo: &RepoId, config: &SweepConfig) -> RepoId {
    RepoId {
        owner: config
            .merge_owner
            .clone()
            .unwrap_or_else(|| repo.owner.clone()),
        name: config
            .merge_repo
            .clone()
            .unwrap_or_else(|| repo.name.clone()),
    }
}

/// Run the full workflow for one repository
///
/// Drives the state machine strictly forward; the first error aborts this
/// repository's run and propagates to the caller.
pub async fn run_workflow(
    forge: &dyn ForgeService,
    repo: &RepoId,
    config: &SweepConfig,
    progress: &dyn ProgressCallback,
) -> Result<WorkflowOutcome> {
    config.validate()?;

    let mut step = Step::ResolveRef;
    loop {
        step = match step {
            Step::ResolveRef => {
                progress.on_phase(Phase::ResolvingRef).await;
                let reference =
                    resolve_ref(forge, repo, &config.commit_branch, &config.base_branch).await?;
                progress.on_ref_resolved(&reference).await;
                Step::BuildTree { reference }
            }
            Step::BuildTree { reference } => {
                progress.on_phase(Phase::BuildingTree).await;
                let entries = load_entries(&config.files).await?;
                let tree = forge.create_tree(repo, &reference.sha, &entries).await?;
                Step::PushCommit { reference, tree }
            }
            Step::PushCommit { reference, tree } => {
                progress.on_phase(Phase::Pushing).await;
                let (commit, _reference) = push_commit(
                    forge,
                    repo,
                    &reference,
                    &tree,
                    &config.author,
                    &config.commit_message,
                )
                .await?;
                progress.on_commit_pushed(&commit).await;
                Step::OpenPr { commit }
            }
            Step::OpenPr { commit } => {
                progress.on_phase(Phase::OpeningPr).await;
                if config.pr_title.is_empty() {
                    // Intentional skip, not a failure.
                    progress.on_pr_skipped().await;
                    Step::Done {
                        commit,
                        pull_request: None,
                    }
                } else {
                    let base_repo = pr_target(repo, config);
                    let pr = open_pull_request(
                        forge,
                        &base_repo,
                        &repo.owner,
                        &config.commit_branch,
                        &config.merge_branch,
                        &config.pr_title,
                        &config.pr_body,
                    )
                    .await?;
                    progress.on_pr_opened(&pr).await;
                    Step::Done {
                        commit,
                        pull_request: Some(pr),
                    }
                }
            }
            Step::Done {
                commit,
                pull_request,
            } => {
                progress.on_phase(Phase::Complete).await;
                return Ok(WorkflowOutcome {
                    repo: repo.clone(),
                    commit,
                    pull_request,
                });
            }
        };
    }
}

fn branch_name(reference: &Reference) -> &str {
    reference
        .name
        .strip_prefix("refs/heads/")
        .unwrap_or(&reference.name)
}
