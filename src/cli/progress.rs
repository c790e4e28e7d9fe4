//! Shared CLI progress callback with styled output

use crate::cli::style::{Stream, Stylize, check, cross, hyperlink_url};
use anstream::{eprintln, println};
use async_trait::async_trait;
use lichen::error::Error;
use lichen::sweep::{Phase, ProgressCallback};
use lichen::types::{Commit, LicenseInfo, PullRequest, Reference, RepoId, Repository};

/// CLI progress callback that prints to stdout with styled output
///
/// Verbose mode (single-repo `propose`) announces every phase; compact mode
/// (`sweep`) prints one indented block per repository.
pub struct CliProgress {
    verbose: bool,
}

impl CliProgress {
    /// Create verbose progress (for the propose command)
    pub const fn verbose() -> Self {
        Self { verbose: true }
    }

    /// Create compact progress (for the sweep command)
    pub const fn compact() -> Self {
        Self { verbose: false }
    }
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_repo_start(&self, repo: &RepoId) {
        println!("{}", repo.to_string().emphasis());
    }

    async fn on_repo_skipped(&self, repo: &Repository, license: &LicenseInfo) {
        println!(
            "{} {}",
            format!("{}/{}", repo.owner, repo.name).muted(),
            format!("skipped ({})", license.name).warn(),
        );
    }

    async fn on_phase(&self, phase: Phase) {
        if self.verbose && phase != Phase::Complete {
            println!("{}...", phase.to_string().muted());
        }
    }

    async fn on_ref_resolved(&self, reference: &Reference) {
        if self.verbose {
            println!(
                "  {} {} at {}",
                check(),
                reference.name.accent(),
                short_sha(&reference.sha).muted()
            );
        }
    }

    async fn on_commit_pushed(&self, commit: &Commit) {
        println!(
            "  {} committed {}",
            check(),
            short_sha(&commit.sha).accent()
        );
    }

    async fn on_pr_opened(&self, pr: &PullRequest) {
        println!(
            "  {} PR {} opened: {}",
            check(),
            format!("#{}", pr.number).accent(),
            hyperlink_url(Stream::Stdout, &pr.html_url)
        );
    }

    async fn on_pr_skipped(&self) {
        println!("  {} no PR title configured, skipping pull request", "-".muted());
    }

    async fn on_error(&self, error: &Error) {
        eprintln!("  {} {}", cross(), error.to_string().error());
    }

    async fn on_message(&self, message: &str) {
        println!("{}", message.muted());
    }
}

fn short_sha(sha: &str) -> &str {
    &sha[..8.min(sha.len())]
}
