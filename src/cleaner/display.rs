//! Report formatting for the cleaner.

use super::types::{CleanupReport, RuleMatch};
use crate::github::PullRequest;

/// Header line for one pull request.
pub fn pull_request_line(pull: &PullRequest) -> String {
    format!("PR #{}: \"{}\" is {}", pull.number, pull.title, pull.state)
}

/// Line for a forwarding rule that would be deleted.
pub fn match_line(rule_match: &RuleMatch) -> String {
    format!(
        "  would delete global forwarding rule {} (PR #{})",
        rule_match.rule_name, rule_match.pull_number
    )
}

/// All report lines: each pull request followed by its matches.
pub fn report_lines(report: &CleanupReport) -> Vec<String> {
    let mut lines = Vec::with_capacity(report.pull_requests.len() + report.matches.len());
    for pull in &report.pull_requests {
        lines.push(pull_request_line(pull));
        lines.extend(report.matches_for(pull.number).map(match_line));
    }
    lines
}

/// Print the report to stdout.
pub fn print_report(report: &CleanupReport) {
    for line in report_lines(report) {
        println!("{}", line);
    }

    println!();
    if let Some(err) = &report.lookup_error {
        println!("Forwarding rules could not be listed: {}", err);
    }
    println!(
        "Closed pull requests: {}, matching forwarding rules: {}",
        report.pull_requests.len(),
        report.matches.len()
    );
}
