//! CLI argument parsing for infra-tools.
//!
//! Uses clap derive macros for declarative argument definitions.
//! Implementations live in the `commands` module.

use crate::exit_codes;
use crate::gcp::DEFAULT_COMPUTE_ENDPOINT;
use crate::github::DEFAULT_GITHUB_ENDPOINT;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Infrastructure helpers for the CI repository.
///
/// Renders CI configuration from templates and reports load-balancer
/// leftovers of closed pull requests.
#[derive(Parser, Debug)]
#[command(name = "infra-tools")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render every target listed in a templates config file.
    ///
    /// Each output gets an autogenerated header pointing back at its template.
    RenderTemplates(RenderTemplatesArgs),

    /// Report global forwarding rules left behind by closed pull requests.
    ///
    /// Nothing is deleted; matching rules are only listed.
    CleanFirewall(CleanFirewallArgs),
}

#[derive(Args, Debug)]
pub struct RenderTemplatesArgs {
    /// Path to the templates config file.
    #[arg(long)]
    pub config: PathBuf,
}

#[derive(Args, Debug)]
pub struct CleanFirewallArgs {
    /// GCP project to inspect.
    #[arg(long)]
    pub project: String,

    /// Only report what would be deleted.
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub dry_run: bool,

    /// Owner of the GitHub repository whose pull requests are checked.
    #[arg(long)]
    pub github_owner: String,

    /// GitHub repository name.
    #[arg(long)]
    pub github_repo: String,

    /// GitHub API token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// OAuth2 access token for the Compute Engine API.
    #[arg(long, env = "GCP_ACCESS_TOKEN", hide_env_values = true)]
    pub gcp_token: Option<String>,

    #[arg(long, default_value = DEFAULT_COMPUTE_ENDPOINT)]
    pub compute_endpoint: String,

    #[arg(long, default_value = DEFAULT_GITHUB_ENDPOINT)]
    pub github_endpoint: String,
}

impl Cli {
    /// Parse command line arguments.
    ///
    /// Help and version output is returned as an error too; see
    /// [`usage_exit_code`].
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Cli::try_parse()
    }
}

/// Exit code for a clap parse outcome.
///
/// `--help` and `--version` succeed. Anything else is a missing or invalid
/// flag, which is a configuration error.
pub fn usage_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        exit_codes::CONFIG_ERROR
    } else {
        exit_codes::SUCCESS
    }
}
