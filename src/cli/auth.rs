//! Auth command - test and manage authentication

use crate::cli::style::{Stylize, check, spinner_style};
use anstream::println;
use anyhow::Result;
use indicatif::ProgressBar;
use lichen::auth::get_credentials;
use lichen::forge::GitHubForge;
use std::time::Duration;

/// Run the auth test command
pub async fn run_auth_test(host: Option<&str>) -> Result<()> {
    let credentials = get_credentials()?;
    let forge = GitHubForge::new(&credentials, host);

    let spinner = ProgressBar::new_spinner().with_style(spinner_style());
    spinner.set_message("Verifying credentials...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let login = forge.authenticated_user().await;
    spinner.finish_and_clear();

    let login = login?;
    println!("{} authenticated as {}", check(), login.accent());
    println!("Credential source: {:?}", credentials.source);
    Ok(())
}

/// Run the auth setup command (show instructions)
pub fn run_auth_setup() {
    println!("{}", "GitHub Authentication Setup".emphasis());
    println!();
    println!("Option 1: Environment variables");
    println!("  Set GITHUB_USER and GITHUB_PASSWORD (or GITHUB_TOKEN)");
    println!();
    println!("Option 2: Interactive prompt");
    println!("  Run any command and enter username and password when asked;");
    println!("  password input is not echoed");
    println!();
    println!("For GitHub Enterprise:");
    println!("  Pass --host with your instance hostname");
}
