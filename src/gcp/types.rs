//! Read-only projections of Compute Engine resources.
//!
//! Only the fields the tools look at are kept; everything else in the API
//! response is ignored.

use serde::Deserialize;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwardingRule {
    pub name: String,
    #[serde(default, rename = "IPAddress")]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub creation_timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlMap {
    pub name: String,
    #[serde(default)]
    pub default_service: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendService {
    pub name: String,
    #[serde(default)]
    pub health_checks: Vec<String>,
    #[serde(default)]
    pub backends: Vec<Backend>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Backend {
    /// Instance group URL.
    pub group: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetPool {
    pub name: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub instances: Vec<String>,
    #[serde(default)]
    pub health_checks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetHttpProxy {
    pub name: String,
    #[serde(default)]
    pub url_map: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Zone {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InstanceGroup {
    pub name: String,
}

/// One page of a `list` response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListPage<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// One page of a target pool `aggregatedList` response, keyed by scope
/// (`regions/us-east1`).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AggregatedTargetPools {
    #[serde(default)]
    pub items: std::collections::BTreeMap<String, TargetPoolsScope>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Scopes without target pools carry only a warning.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TargetPoolsScope {
    #[serde(default)]
    pub target_pools: Vec<TargetPool>,
}

/// A page of a paginated Compute Engine response.
pub(crate) trait Page: DeserializeOwned {
    type Item;

    /// Consume the page into its items and the token of the next page.
    fn into_parts(self) -> (Vec<Self::Item>, Option<String>);
}

impl<T: DeserializeOwned> Page for ListPage<T> {
    type Item = T;

    fn into_parts(self) -> (Vec<T>, Option<String>) {
        (self.items, self.next_page_token)
    }
}

impl Page for AggregatedTargetPools {
    type Item = TargetPool;

    fn into_parts(self) -> (Vec<TargetPool>, Option<String>) {
        let pools = self
            .items
            .into_values()
            .flat_map(|scope| scope.target_pools)
            .collect();
        (pools, self.next_page_token)
    }
}
