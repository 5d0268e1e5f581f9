//! Compute Engine API surface used by the load-balancer cleaner.
//!
//! [`ComputeApi`] is the seam the cleaner talks to; [`GceClient`] implements
//! it against the Compute Engine v1 REST API.

mod client;
mod types;


pub use client::{DEFAULT_COMPUTE_ENDPOINT, GceClient};
pub use types::{
    Backend, BackendService, ForwardingRule, InstanceGroup, TargetHttpProxy, TargetPool, UrlMap,
    Zone,
};

use crate::error::Result;

/// Lookups and deletes for the load-balancer resources of a project.
pub trait ComputeApi {
    fn lookup_global_forwarding_rules(&self, project: &str) -> Result<Vec<ForwardingRule>>;
    fn lookup_url_maps(&self, project: &str) -> Result<Vec<UrlMap>>;
    fn lookup_backend_services(&self, project: &str) -> Result<Vec<BackendService>>;
    fn lookup_target_pools(&self, project: &str) -> Result<Vec<TargetPool>>;
    fn lookup_http_proxies(&self, project: &str) -> Result<Vec<TargetHttpProxy>>;

    /// Names of zones in `project` matching the regex `pattern`.
    fn lookup_zones(&self, project: &str, pattern: &str) -> Result<Vec<String>>;

    /// Names of instance groups in one zone.
    fn lookup_instance_groups(&self, project: &str, zone: &str) -> Result<Vec<String>>;

    /// Whether the named instance exists.
    fn check_instance(&self, project: &str, zone: &str, name: &str) -> Result<bool>;

    fn delete_http_proxy(&self, project: &str, name: &str) -> Result<()>;
    fn delete_url_map(&self, project: &str, name: &str) -> Result<()>;
    fn delete_backend_service(&self, project: &str, name: &str) -> Result<()>;
    fn delete_instance_group(&self, project: &str, zone: &str, name: &str) -> Result<()>;
    fn delete_health_checks(&self, project: &str, names: &[String]) -> Result<()>;
    fn delete_forwarding_rule(&self, project: &str, region: &str, name: &str) -> Result<()>;
    fn delete_global_forwarding_rule(&self, project: &str, name: &str) -> Result<()>;
    fn delete_target_pool(&self, project: &str, region: &str, name: &str) -> Result<()>;
}
