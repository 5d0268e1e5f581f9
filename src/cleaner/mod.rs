//! Load-balancer cleaner.
//!
//! Cross-references closed pull requests with the global forwarding rules of
//! a project. A rule belongs to pull request `N` when its name contains
//! `-pr-N`.
//!
//! # Deletion
//!
//! Matches are reported only. `ComputeApi::delete_global_forwarding_rule`
//! exists but the cleaner never calls it, and `dry_run` does not change
//! that.
//!
//! # Errors
//!
//! Failing to list closed pull requests is fatal. Failing to list forwarding
//! rules is logged and the run continues with no rules, so every pull
//! request is still reported.

mod display;
mod types;

#[cfg(test)]
mod tests;

pub use display::{match_line, print_report, pull_request_line, report_lines};
pub use types::{CleanupReport, RuleMatch};

use crate::error::Result;
use crate::gcp::ComputeApi;
use crate::github::GithubApi;
use tracing::{info, warn};

/// Whether `rule_name` belongs to pull request `pull_number`.
pub fn rule_belongs_to(rule_name: &str, pull_number: u64) -> bool {
    rule_name.contains(&format!("-pr-{}", pull_number))
}

/// Finds forwarding rules left behind by closed pull requests.
pub struct Cleaner<C, G> {
    compute: C,
    github: G,
}

impl<C: ComputeApi, G: GithubApi> Cleaner<C, G> {
    pub fn new(compute: C, github: G) -> Self {
        Self { compute, github }
    }

    /// Run one find pass over `project`.
    pub fn run(&self, dry_run: bool, project: &str) -> Result<CleanupReport> {
        info!(project, dry_run, "looking for forwarding rules of closed pull requests");

        let pull_requests = self.github.closed_pull_requests()?;

        let mut report = CleanupReport::default();
        let rules = match self.compute.lookup_global_forwarding_rules(project) {
            Ok(rules) => rules,
            Err(err) => {
                warn!(project, error = %err, "cannot list global forwarding rules");
                report.lookup_error = Some(err.to_string());
                Vec::new()
            }
        };

        for pull in &pull_requests {
            for rule in rules.iter().filter(|r| rule_belongs_to(&r.name, pull.number)) {
                info!(pull = pull.number, rule = %rule.name, "forwarding rule of closed pull request");
                report.matches.push(RuleMatch {
                    pull_number: pull.number,
                    rule_name: rule.name.clone(),
                });
            }
        }

        report.pull_requests = pull_requests;
        Ok(report)
    }
}
