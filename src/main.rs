//! lichen - license pull requests for whole organizations
//!
//! CLI binary wrapping the sweep workflow.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "lichen")]
#[command(about = "Open license pull requests across an organization's repositories")]
#[command(version)]
struct Cli {
    /// GitHub Enterprise host (defaults to github.com)
    #[arg(long, global = true)]
    host: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sweep an organization and open a license PR per unlicensed repository
    Sweep {
        /// Organization whose repositories are inspected
        #[arg(long)]
        org: String,

        /// Abort the whole sweep on the first failing repository
        #[arg(long)]
        fail_fast: bool,

        #[command(flatten)]
        flags: cli::CommitFlags,
    },

    /// Run the commit-and-PR workflow against a single repository
    Propose {
        /// Owner (user or org) of the repo to create the commit in
        #[arg(long)]
        owner: String,

        /// Name of the repo to create the commit in
        #[arg(long)]
        repo: String,

        #[command(flatten)]
        flags: cli::CommitFlags,
    },

    /// Authentication management
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Test authentication
    Test,
    /// Show authentication setup instructions
    Setup,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let host = cli.host.as_deref();

    match cli.command {
        Commands::Sweep {
            org,
            fail_fast,
            flags,
        } => {
            cli::run_sweep(&org, &flags, host, fail_fast).await?;
        }
        Commands::Propose { owner, repo, flags } => {
            cli::run_propose(&owner, &repo, &flags, host).await?;
        }
        Commands::Auth { action } => match action {
            AuthAction::Test => cli::run_auth_test(host).await?,
            AuthAction::Setup => cli::run_auth_setup(),
        },
    }

    Ok(())
}
