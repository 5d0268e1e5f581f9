//! Compute Engine v1 REST client.
//!
//! Blocking, one attempt per request. List calls follow `nextPageToken`
//! until the last page. Delete calls return as soon as the API accepts the
//! operation; they do not wait for it to finish.

use super::ComputeApi;
use super::types::{
    AggregatedTargetPools, BackendService, ForwardingRule, InstanceGroup, ListPage, Page,
    TargetHttpProxy, TargetPool, UrlMap, Zone,
};
use crate::error::{InfraError, Result};
use regex::Regex;
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

/// Public Compute Engine v1 endpoint.
pub const DEFAULT_COMPUTE_ENDPOINT: &str = "https://compute.googleapis.com/compute/v1";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Compute Engine client authenticated with an OAuth2 access token.
pub struct GceClient {
    http: Client,
    endpoint: String,
    token: Option<String>,
}

impl GceClient {
    /// Client for the public endpoint.
    pub fn new(token: Option<String>) -> Result<Self> {
        Self::with_endpoint(DEFAULT_COMPUTE_ENDPOINT, token)
    }

    /// Client for a custom endpoint (e.g. a local fake).
    pub fn with_endpoint(endpoint: impl Into<String>, token: Option<String>) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("infra-tools/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| InfraError::Compute(format!("cannot build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            token,
        })
    }

    fn url(&self, project: &str, path: &str) -> String {
        format!("{}/projects/{}/{}", self.endpoint, project, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn send(&self, request: RequestBuilder, what: &str) -> Result<Response> {
        request
            .send()
            .map_err(|e| InfraError::Compute(format!("{}: {}", what, e)))
    }

    /// Fetch every page of a `list` or `aggregatedList` call.
    fn list_all<P: Page>(&self, project: &str, path: &str) -> Result<Vec<P::Item>> {
        let url = self.url(project, path);
        let mut items = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self.authorized(self.http.get(&url));
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token)]);
            }
            debug!(url = %url, page_token = ?page_token, "listing compute resources");

            let page: P = parse_json(self.send(request, &url)?, &url)?;
            let (page_items, next_page_token) = page.into_parts();
            items.extend(page_items);

            match next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        Ok(items)
    }

    fn delete(&self, project: &str, path: &str) -> Result<()> {
        let url = self.url(project, path);
        let response = self.send(self.authorized(self.http.delete(&url)), &url)?;
        check_status(response, &url)?;
        info!(url = %url, "requested deletion");
        Ok(())
    }
}

fn check_status(response: Response, url: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(InfraError::Compute(format!(
        "{} returned {}: {}",
        url,
        status,
        body.trim()
    )))
}

fn parse_json<T: DeserializeOwned>(response: Response, url: &str) -> Result<T> {
    check_status(response, url)?
        .json()
        .map_err(|e| InfraError::Compute(format!("invalid response from {}: {}", url, e)))
}

impl ComputeApi for GceClient {
    fn lookup_global_forwarding_rules(&self, project: &str) -> Result<Vec<ForwardingRule>> {
        self.list_all::<ListPage<ForwardingRule>>(project, "global/forwardingRules")
    }

    fn lookup_url_maps(&self, project: &str) -> Result<Vec<UrlMap>> {
        self.list_all::<ListPage<UrlMap>>(project, "global/urlMaps")
    }

    fn lookup_backend_services(&self, project: &str) -> Result<Vec<BackendService>> {
        self.list_all::<ListPage<BackendService>>(project, "global/backendServices")
    }

    fn lookup_target_pools(&self, project: &str) -> Result<Vec<TargetPool>> {
        self.list_all::<AggregatedTargetPools>(project, "aggregated/targetPools")
    }

    fn lookup_http_proxies(&self, project: &str) -> Result<Vec<TargetHttpProxy>> {
        self.list_all::<ListPage<TargetHttpProxy>>(project, "global/targetHttpProxies")
    }

    fn lookup_zones(&self, project: &str, pattern: &str) -> Result<Vec<String>> {
        let re = Regex::new(pattern)
            .map_err(|e| InfraError::Compute(format!("invalid zone pattern '{}': {}", pattern, e)))?;
        let zones = self.list_all::<ListPage<Zone>>(project, "zones")?;
        Ok(zones
            .into_iter()
            .map(|z| z.name)
            .filter(|name| re.is_match(name))
            .collect())
    }

    fn lookup_instance_groups(&self, project: &str, zone: &str) -> Result<Vec<String>> {
        let groups = self
            .list_all::<ListPage<InstanceGroup>>(project, &format!("zones/{}/instanceGroups", zone))?;
        Ok(groups.into_iter().map(|g| g.name).collect())
    }

    fn check_instance(&self, project: &str, zone: &str, name: &str) -> Result<bool> {
        let url = self.url(project, &format!("zones/{}/instances/{}", zone, name));
        let response = self.send(self.authorized(self.http.get(&url)), &url)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        check_status(response, &url)?;
        Ok(true)
    }

    fn delete_http_proxy(&self, project: &str, name: &str) -> Result<()> {
        self.delete(project, &format!("global/targetHttpProxies/{}", name))
    }

    fn delete_url_map(&self, project: &str, name: &str) -> Result<()> {
        self.delete(project, &format!("global/urlMaps/{}", name))
    }

    fn delete_backend_service(&self, project: &str, name: &str) -> Result<()> {
        self.delete(project, &format!("global/backendServices/{}", name))
    }

    fn delete_instance_group(&self, project: &str, zone: &str, name: &str) -> Result<()> {
        self.delete(project, &format!("zones/{}/instanceGroups/{}", zone, name))
    }

    fn delete_health_checks(&self, project: &str, names: &[String]) -> Result<()> {
        for name in names {
            self.delete(project, &format!("global/httpHealthChecks/{}", name))?;
        }
        Ok(())
    }

    fn delete_forwarding_rule(&self, project: &str, region: &str, name: &str) -> Result<()> {
        self.delete(project, &format!("regions/{}/forwardingRules/{}", region, name))
    }

    fn delete_global_forwarding_rule(&self, project: &str, name: &str) -> Result<()> {
        self.delete(project, &format!("global/forwardingRules/{}", name))
    }

    fn delete_target_pool(&self, project: &str, region: &str, name: &str) -> Result<()> {
        self.delete(project, &format!("regions/{}/targetPools/{}", region, name))
    }
}
