//! Organization-wide sweep loop
//!
//! Repositories are processed strictly one at a time, in listing order. A
//! repository is selected iff its license descriptor is absent, regardless
//! of what a present descriptor contains.

use crate::config::SweepConfig;
use crate::error::{Error, Result};
use crate::forge::ForgeService;
use crate::sweep::progress::ProgressCallback;
use crate::sweep::workflow::{WorkflowOutcome, run_workflow};
use crate::types::{RepoId, Repository};
use tracing::{info, warn};

/// A repository whose workflow failed during a sweep
#[derive(Debug)]
pub struct RepoFailure {
    /// Repository that failed
    pub repo: RepoId,
    /// The error that aborted its workflow
    pub error: Error,
}

/// Result of an organization sweep
#[derive(Debug, Default)]
pub struct SweepOutcome {
    /// Repositories that went through the full workflow
    pub processed: Vec<WorkflowOutcome>,
    /// Repositories skipped because they already carry a license
    pub skipped: Vec<Repository>,
    /// Repositories whose workflow failed (empty under `--fail-fast`)
    pub failures: Vec<RepoFailure>,
}

impl SweepOutcome {
    /// Whether every selected repository completed its workflow
    pub fn success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Sweep an organization: run the workflow for every unlicensed repository
///
/// With `fail_fast` the first failing repository aborts the whole sweep,
/// matching the behavior of a plain sequential script. Otherwise failures
/// are isolated per repository and collected into the outcome.
pub async fn sweep_org(
    forge: &dyn ForgeService,
    org: &str,
    config: &SweepConfig,
    progress: &dyn ProgressCallback,
    fail_fast: bool,
) -> Result<SweepOutcome> {
    config.validate()?;

    let repos = forge.list_org_repos(org).await?;
    info!(org, count = repos.len(), "listed organization repositories");
    progress
        .on_message(&format!("{} repositories in {org}", repos.len()))
        .await;

    let mut outcome = SweepOutcome::default();
    for repo in repos {
        if let Some(license) = &repo.license {
            progress.on_repo_skipped(&repo, license).await;
            outcome.skipped.push(repo);
            continue;
        }

        let id = RepoId::new(repo.owner.clone(), repo.name.clone());
        progress.on_repo_start(&id).await;

        match run_workflow(forge, &id, config, progress).await {
            Ok(done) => outcome.processed.push(done),
            Err(error) => {
                warn!(repo = %id, %error, "workflow failed");
                progress.on_error(&error).await;
                if fail_fast {
                    return Err(error);
                }
                outcome.failures.push(RepoFailure { repo: id, error });
            }
        }
    }

    Ok(outcome)
}
