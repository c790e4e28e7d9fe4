//! Sweep command - license PRs for every unlicensed repository of an org

use crate::cli::progress::CliProgress;
use crate::cli::style::{Stylize, check};
use crate::cli::{CommitFlags, build_config};
use anstream::{eprintln, println};
use anyhow::Result;
use lichen::auth::get_credentials;
use lichen::forge::GitHubForge;
use lichen::sweep::sweep_org;

/// Run the sweep command
pub async fn run_sweep(
    org: &str,
    flags: &CommitFlags,
    host: Option<&str>,
    fail_fast: bool,
) -> Result<()> {
    flags.check_early()?;

    let credentials = get_credentials()?;
    let config = build_config(flags, &credentials)?;
    let forge = GitHubForge::new(&credentials, host);

    let progress = CliProgress::compact();
    let outcome = sweep_org(&forge, org, &config, &progress, fail_fast).await?;

    println!();
    println!(
        "{} {} processed, {} skipped, {} failed",
        check(),
        outcome.processed.len().accent(),
        outcome.skipped.len().accent(),
        outcome.failures.len().accent(),
    );

    if !outcome.success() {
        for failure in &outcome.failures {
            eprintln!(
                "{}: {}",
                failure.repo.to_string().emphasis().for_stderr(),
                failure.error.to_string().error()
            );
        }
        anyhow::bail!(
            "sweep finished with {} failed repositor{}",
            outcome.failures.len(),
            if outcome.failures.len() == 1 { "y" } else { "ies" }
        );
    }

    Ok(())
}
