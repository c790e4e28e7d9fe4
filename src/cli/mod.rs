//! CLI commands
//!
//! Command implementations for the `lichen` binary, plus the shared flag
//! surface and the flags-to-config translation.

mod auth;
mod progress;
mod propose;
mod style;
mod sweep;

pub use auth::{run_auth_setup, run_auth_test};
pub use propose::run_propose;
pub use sweep::run_sweep;

use anyhow::Result;
use clap::Args;
use dialoguer::Input;
use lichen::auth::Credentials;
use lichen::config::SweepConfig;
use lichen::sweep::parse_file_specs;
use lichen::types::CommitAuthor;

/// Flags shared by the `sweep` and `propose` commands
#[derive(Debug, Args)]
pub struct CommitFlags {
    /// Content of the commit message
    #[arg(long, default_value = "Add License to project")]
    pub commit_message: String,

    /// Branch to create the commit in; created from `--base-branch` if absent
    #[arg(long, default_value = "license")]
    pub commit_branch: String,

    /// Branch to create `--commit-branch` from
    #[arg(long, default_value = "master")]
    pub base_branch: String,

    /// Branch the pull request proposes to merge into
    #[arg(long, default_value = "master")]
    pub merge_branch: String,

    /// Title of the pull request; empty skips PR creation
    #[arg(long, default_value = "Add license file")]
    pub pr_title: String,

    /// Description body of the pull request
    #[arg(long, default_value = "Add license file to project")]
    pub pr_body: String,

    /// Comma-separated `localPath[:targetPath]` files to commit
    #[arg(long, default_value = "LICENSE")]
    pub files: String,

    /// Commit author name; defaults to the authenticated username
    #[arg(long, default_value = "")]
    pub author_name: String,

    /// Commit author email; prompted for when empty
    #[arg(long, default_value = "")]
    pub author_email: String,

    /// Owner of the repo the PR targets, when different from the source owner
    #[arg(long)]
    pub merge_owner: Option<String>,

    /// Name of the repo the PR targets, when different from the source repo
    #[arg(long)]
    pub merge_repo: Option<String>,
}

impl CommitFlags {
    /// Validate what can be checked before credentials exist
    ///
    /// Keeps obviously broken invocations from reaching the interactive
    /// credential prompt.
    fn check_early(&self) -> Result<()> {
        if self.commit_branch.is_empty() {
            anyhow::bail!("non-empty value required for `--commit-branch`");
        }
        parse_file_specs(&self.files)?;
        Ok(())
    }
}

/// Build the immutable run configuration from flags and credentials
///
/// The author name falls back to the authenticated username and the email is
/// prompted for interactively when not supplied, mirroring the flag surface
/// defaults. The result is validated before any remote call is made.
fn build_config(flags: &CommitFlags, credentials: &Credentials) -> Result<SweepConfig> {
    let name = if flags.author_name.is_empty() {
        credentials.username.clone()
    } else {
        flags.author_name.clone()
    };

    let email = if flags.author_email.is_empty() {
        Input::new()
            .with_prompt("Commit author email")
            .interact_text()?
    } else {
        flags.author_email.clone()
    };

    let config = SweepConfig {
        commit_branch: flags.commit_branch.clone(),
        base_branch: flags.base_branch.clone(),
        merge_branch: flags.merge_branch.clone(),
        commit_message: flags.commit_message.clone(),
        pr_title: flags.pr_title.clone(),
        pr_body: flags.pr_body.clone(),
        files: parse_file_specs(&flags.files)?,
        author: CommitAuthor { name, email },
        merge_owner: flags.merge_owner.clone(),
        merge_repo: flags.merge_repo.clone(),
    };
    config.validate()?;
    Ok(config)
}
