//! Prow job configuration model.
//!
//! Covers the subset of the Prow job schema that job assertions inspect.
//! Unknown fields are ignored.

use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Top-level job file: jobs keyed by `org/repo`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct JobConfig {
    pub presubmits: BTreeMap<String, Vec<Presubmit>>,
    pub postsubmits: BTreeMap<String, Vec<Postsubmit>>,
}

/// Fields shared by every job type.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct JobBase {
    pub name: String,
    pub labels: BTreeMap<String, String>,
    pub max_concurrency: u32,
    pub decorate: bool,
    pub path_alias: String,
    pub extra_refs: Vec<Refs>,
    pub spec: Option<PodSpec>,
}

/// An additional repository checked out next to the job's own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Refs {
    pub org: String,
    pub repo: String,
    pub base_ref: String,
    pub path_alias: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PodSpec {
    pub containers: Vec<Container>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Container {
    pub image: String,
    pub command: Vec<String>,
    pub args: Vec<String>,
    pub env: Vec<EnvVar>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EnvVar {
    pub name: String,
    pub value: String,
}

/// Branch filters. Entries are regular expressions matched against the
/// whole branch name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Brancher {
    pub branches: Vec<String>,
    pub skip_branches: Vec<String>,
}

impl Brancher {
    /// Whether a job with this brancher runs against `branch`.
    ///
    /// `skip_branches` wins over `branches`; no `branches` means every branch.
    /// Invalid patterns never match.
    pub fn should_run(&self, branch: &str) -> bool {
        if self.skip_branches.iter().any(|p| full_match(p, branch)) {
            return false;
        }
        self.branches.is_empty() || self.branches.iter().any(|p| full_match(p, branch))
    }
}

fn full_match(pattern: &str, value: &str) -> bool {
    Regex::new(&format!("^(?:{})$", pattern))
        .map(|re| re.is_match(value))
        .unwrap_or(false)
}

fn changes_match(run_if_changed: &str, path: &str) -> bool {
    if run_if_changed.is_empty() {
        return false;
    }
    Regex::new(run_if_changed)
        .map(|re| re.is_match(path))
        .unwrap_or(false)
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Presubmit {
    #[serde(flatten)]
    pub base: JobBase,
    #[serde(flatten)]
    pub brancher: Brancher,
    pub always_run: bool,
    pub optional: bool,
    pub skip_report: bool,
    pub run_if_changed: String,
    pub context: String,
}

impl Presubmit {
    /// Whether a change to `path` triggers this job.
    pub fn runs_against_changes(&self, path: &str) -> bool {
        changes_match(&self.run_if_changed, path)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Postsubmit {
    #[serde(flatten)]
    pub base: JobBase,
    #[serde(flatten)]
    pub brancher: Brancher,
    pub run_if_changed: String,
}

impl Postsubmit {
    /// Whether a change to `path` triggers this job.
    pub fn runs_against_changes(&self, path: &str) -> bool {
        changes_match(&self.run_if_changed, path)
    }
}
