//! Tests for the cleaner.

use super::*;
use crate::error::InfraError;
use crate::gcp::{BackendService, ForwardingRule, TargetHttpProxy, TargetPool, UrlMap};
use crate::github::PullRequest;
use std::cell::RefCell;

/// Compute fake serving a fixed rule list and recording delete calls.
struct FakeCompute {
    rules: std::result::Result<Vec<ForwardingRule>, String>,
    deleted: RefCell<Vec<String>>,
}

impl FakeCompute {
    fn with_rules(names: &[&str]) -> Self {
        Self {
            rules: Ok(names
                .iter()
                .map(|name| ForwardingRule {
                    name: name.to_string(),
                    ip_address: None,
                    target: None,
                    region: None,
                    creation_timestamp: None,
                })
                .collect()),
            deleted: RefCell::new(Vec::new()),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            rules: Err(message.to_string()),
            deleted: RefCell::new(Vec::new()),
        }
    }

    fn record(&self, what: String) -> crate::error::Result<()> {
        self.deleted.borrow_mut().push(what);
        Ok(())
    }
}

impl ComputeApi for FakeCompute {
    fn lookup_global_forwarding_rules(&self, _: &str) -> crate::error::Result<Vec<ForwardingRule>> {
        self.rules.clone().map_err(InfraError::Compute)
    }
    fn lookup_url_maps(&self, _: &str) -> crate::error::Result<Vec<UrlMap>> {
        Ok(Vec::new())
    }
    fn lookup_backend_services(&self, _: &str) -> crate::error::Result<Vec<BackendService>> {
        Ok(Vec::new())
    }
    fn lookup_target_pools(&self, _: &str) -> crate::error::Result<Vec<TargetPool>> {
        Ok(Vec::new())
    }
    fn lookup_http_proxies(&self, _: &str) -> crate::error::Result<Vec<TargetHttpProxy>> {
        Ok(Vec::new())
    }
    fn lookup_zones(&self, _: &str, _: &str) -> crate::error::Result<Vec<String>> {
        Ok(Vec::new())
    }
    fn lookup_instance_groups(&self, _: &str, _: &str) -> crate::error::Result<Vec<String>> {
        Ok(Vec::new())
    }
    fn check_instance(&self, _: &str, _: &str, _: &str) -> crate::error::Result<bool> {
        Ok(false)
    }
    fn delete_http_proxy(&self, _: &str, name: &str) -> crate::error::Result<()> {
        self.record(format!("proxy/{}", name))
    }
    fn delete_url_map(&self, _: &str, name: &str) -> crate::error::Result<()> {
        self.record(format!("urlmap/{}", name))
    }
    fn delete_backend_service(&self, _: &str, name: &str) -> crate::error::Result<()> {
        self.record(format!("backend/{}", name))
    }
    fn delete_instance_group(&self, _: &str, _: &str, name: &str) -> crate::error::Result<()> {
        self.record(format!("group/{}", name))
    }
    fn delete_health_checks(&self, _: &str, names: &[String]) -> crate::error::Result<()> {
        self.record(format!("healthchecks/{}", names.join(",")))
    }
    fn delete_forwarding_rule(&self, _: &str, _: &str, name: &str) -> crate::error::Result<()> {
        self.record(format!("rule/{}", name))
    }
    fn delete_global_forwarding_rule(&self, _: &str, name: &str) -> crate::error::Result<()> {
        self.record(format!("globalrule/{}", name))
    }
    fn delete_target_pool(&self, _: &str, _: &str, name: &str) -> crate::error::Result<()> {
        self.record(format!("pool/{}", name))
    }
}

struct FakeGithub(std::result::Result<Vec<PullRequest>, String>);

impl FakeGithub {
    fn closed(numbers: &[u64]) -> Self {
        Self(Ok(numbers
            .iter()
            .map(|&number| PullRequest {
                number,
                title: format!("Change {}", number),
                state: "closed".to_string(),
                closed_at: None,
                merged_at: None,
            })
            .collect()))
    }
}

impl GithubApi for FakeGithub {
    fn closed_pull_requests(&self) -> crate::error::Result<Vec<PullRequest>> {
        self.0.clone().map_err(InfraError::Github)
    }
}

#[test]
fn test_rule_belongs_to() {
    assert!(rule_belongs_to("lb-pr-42-abc", 42));
    assert!(rule_belongs_to("k8s-fw-pr-42", 42));
    assert!(!rule_belongs_to("lb-pr-43-abc", 42));
    assert!(!rule_belongs_to("lb-42-abc", 42));
    assert!(!rule_belongs_to("lbpr42", 42));
}

#[test]
fn test_reports_matching_rule() {
    let cleaner = Cleaner::new(
        FakeCompute::with_rules(&["lb-pr-42-abc", "lb-pr-43-abc", "lb-main"]),
        FakeGithub::closed(&[42]),
    );

    let report = cleaner.run(true, "my-project").unwrap();

    assert_eq!(
        report.matches,
        vec![RuleMatch {
            pull_number: 42,
            rule_name: "lb-pr-42-abc".to_string(),
        }]
    );

    let lines = report_lines(&report);
    assert_eq!(lines[0], "PR #42: \"Change 42\" is closed");
    assert!(lines[1].contains("lb-pr-42-abc"));
    assert!(lines[1].contains("PR #42"));
    assert_eq!(lines.len(), 2);
}

#[test]
fn test_multiple_rules_per_pull_request() {
    let cleaner = Cleaner::new(
        FakeCompute::with_rules(&["a-pr-7-x", "b-pr-7-y", "c-pr-8-z"]),
        FakeGithub::closed(&[7, 8, 9]),
    );

    let report = cleaner.run(false, "p").unwrap();

    let seven: Vec<_> = report.matches_for(7).map(|m| m.rule_name.as_str()).collect();
    assert_eq!(seven, vec!["a-pr-7-x", "b-pr-7-y"]);
    assert_eq!(report.matches_for(8).count(), 1);
    assert_eq!(report.matches_for(9).count(), 0);

    // Every pull request is reported, matched or not
    let lines = report_lines(&report);
    assert_eq!(lines.len(), 3 + 3);
    assert!(lines[5].starts_with("PR #9:"));
}

#[test]
fn test_never_deletes_regardless_of_dry_run() {
    for dry_run in [true, false] {
        let compute = FakeCompute::with_rules(&["lb-pr-42-abc"]);
        let cleaner = Cleaner::new(compute, FakeGithub::closed(&[42]));

        let report = cleaner.run(dry_run, "p").unwrap();

        assert_eq!(report.matches.len(), 1);
        assert!(cleaner.compute.deleted.borrow().is_empty());
    }
}

#[test]
fn test_rule_lookup_failure_is_not_fatal() {
    let cleaner = Cleaner::new(
        FakeCompute::failing("403 Forbidden"),
        FakeGithub::closed(&[1, 2]),
    );

    let report = cleaner.run(true, "p").unwrap();

    assert!(report.matches.is_empty());
    assert_eq!(report.pull_requests.len(), 2);
    assert!(report.lookup_error.unwrap().contains("403 Forbidden"));
}

#[test]
fn test_pull_request_lookup_failure_is_fatal() {
    let cleaner = Cleaner::new(
        FakeCompute::with_rules(&["lb-pr-1"]),
        FakeGithub(Err("rate limited".to_string())),
    );

    let err = cleaner.run(true, "p").unwrap_err();
    assert!(matches!(err, InfraError::Github(_)));
}

#[test]
fn test_no_closed_pull_requests() {
    let cleaner = Cleaner::new(FakeCompute::with_rules(&["lb-pr-1"]), FakeGithub::closed(&[]));

    let report = cleaner.run(true, "p").unwrap();
    assert!(report.pull_requests.is_empty());
    assert!(report_lines(&report).is_empty());
}
