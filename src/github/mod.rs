//! GitHub pull request lookups used by the load-balancer cleaner.

mod client;


pub use client::{DEFAULT_GITHUB_ENDPOINT, GithubClient};

use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A pull request as reported by the GitHub REST API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    #[serde(default)]
    pub title: String,
    /// `open` or `closed`; merged pull requests are `closed`.
    pub state: String,
    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub merged_at: Option<DateTime<Utc>>,
}

impl PullRequest {
    /// Whether the pull request was merged rather than abandoned.
    pub fn is_merged(&self) -> bool {
        self.merged_at.is_some()
    }
}

/// Source of closed pull requests for one repository.
pub trait GithubApi {
    fn closed_pull_requests(&self) -> Result<Vec<PullRequest>>;
}
