//! Data types for the load-balancer cleaner.

use crate::github::PullRequest;

/// A global forwarding rule that belongs to a closed pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    pub pull_number: u64,
    pub rule_name: String,
}

/// Everything one cleaner run found.
#[derive(Debug, Default)]
pub struct CleanupReport {
    /// Closed pull requests, in the order GitHub returned them.
    pub pull_requests: Vec<PullRequest>,
    /// Matches, grouped by pull request in the same order.
    pub matches: Vec<RuleMatch>,
    /// Set when the forwarding rule lookup failed and no rules were checked.
    pub lookup_error: Option<String>,
}

impl CleanupReport {
    /// Matches for one pull request.
    pub fn matches_for(&self, pull_number: u64) -> impl Iterator<Item = &RuleMatch> {
        self.matches
            .iter()
            .filter(move |m| m.pull_number == pull_number)
    }
}
