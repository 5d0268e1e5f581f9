//! GitHub REST v3 client for closed pull requests.

use super::{GithubApi, PullRequest};
use crate::error::{InfraError, Result};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;

/// Public GitHub API endpoint.
pub const DEFAULT_GITHUB_ENDPOINT: &str = "https://api.github.com";

/// Maximum page size the pulls endpoint accepts.
const PER_PAGE: usize = 100;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Pull request lookups for a single `owner/repo`.
pub struct GithubClient {
    http: Client,
    endpoint: String,
    owner: String,
    repo: String,
    token: Option<String>,
}

impl GithubClient {
    pub fn new(owner: &str, repo: &str, token: Option<String>) -> Result<Self> {
        Self::with_endpoint(DEFAULT_GITHUB_ENDPOINT, owner, repo, token)
    }

    pub fn with_endpoint(
        endpoint: impl Into<String>,
        owner: &str,
        repo: &str,
        token: Option<String>,
    ) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("infra-tools/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| InfraError::Github(format!("cannot build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            owner: owner.to_string(),
            repo: repo.to_string(),
            token,
        })
    }

    /// Fetch one page of closed pull requests (pages start at 1).
    fn closed_page(&self, page: usize) -> Result<Vec<PullRequest>> {
        let url = format!(
            "{}/repos/{}/{}/pulls",
            self.endpoint, self.owner, self.repo
        );
        debug!(url = %url, page, "listing closed pull requests");

        let mut request = self
            .http
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .query(&[
                ("state", "closed".to_string()),
                ("per_page", PER_PAGE.to_string()),
                ("page", page.to_string()),
            ]);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .map_err(|e| InfraError::Github(format!("{}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(InfraError::Github(format!(
                "{} returned {}: {}",
                url,
                status,
                body.trim()
            )));
        }

        response
            .json()
            .map_err(|e| InfraError::Github(format!("invalid response from {}: {}", url, e)))
    }
}

impl GithubApi for GithubClient {
    /// All closed pull requests, newest first, across every page.
    fn closed_pull_requests(&self) -> Result<Vec<PullRequest>> {
        let mut pulls = Vec::new();
        let mut page = 1;

        loop {
            let batch = self.closed_page(page)?;
            let last_page = batch.len() < PER_PAGE;
            pulls.extend(batch);
            if last_page {
                break;
            }
            page += 1;
        }

        Ok(pulls)
    }
}
