//! Propose command - run the workflow against a single repository

use crate::cli::progress::CliProgress;
use crate::cli::style::{Stylize, check};
use crate::cli::{CommitFlags, build_config};
use anstream::println;
use anyhow::Result;
use lichen::auth::get_credentials;
use lichen::forge::GitHubForge;
use lichen::sweep::run_workflow;
use lichen::types::RepoId;

/// Run the propose command
pub async fn run_propose(
    owner: &str,
    repo: &str,
    flags: &CommitFlags,
    host: Option<&str>,
) -> Result<()> {
    flags.check_early()?;
    if owner.is_empty() || repo.is_empty() {
        anyhow::bail!("non-empty values required for `--owner` and `--repo`");
    }

    let credentials = get_credentials()?;
    let config = build_config(flags, &credentials)?;
    let forge = GitHubForge::new(&credentials, host);

    let id = RepoId::new(owner, repo);
    println!("{}", id.to_string().emphasis());

    let progress = CliProgress::verbose();
    let outcome = run_workflow(&forge, &id, &config, &progress).await?;

    println!();
    match &outcome.pull_request {
        Some(pr) => println!(
            "{} opened {} for {}",
            check(),
            format!("#{}", pr.number).accent(),
            id.to_string().accent()
        ),
        None => println!("{} committed without a pull request", check()),
    }

    Ok(())
}
