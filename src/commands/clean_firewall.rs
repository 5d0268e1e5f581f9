//! Implementation of the `infra-tools clean-firewall` command.

use crate::cleaner::{Cleaner, print_report};
use crate::cli::CleanFirewallArgs;
use crate::error::Result;
use crate::gcp::GceClient;
use crate::github::GithubClient;


/// Execute the `infra-tools clean-firewall` command.
///
/// Lists closed pull requests, finds the global forwarding rules named after
/// them and prints what would be deleted.
pub fn cmd_clean_firewall(args: CleanFirewallArgs) -> Result<()> {
    let compute = GceClient::with_endpoint(args.compute_endpoint, args.gcp_token)?;
    let github = GithubClient::with_endpoint(
        args.github_endpoint,
        &args.github_owner,
        &args.github_repo,
        args.github_token,
    )?;

    let report = Cleaner::new(compute, github).run(args.dry_run, &args.project)?;
    print_report(&report);
    Ok(())
}
