//! Predicates deciding which PagerDuty services are stale staging services.
//!
//! Both predicates are pure: no I/O and no logging.

use crate::config::types::StagingConfig;
use crate::pagerduty::Service;

/// Escalation policy of staging cluster services ("Silent Test")
pub const DEFAULT_ESCALATION_POLICY: &str = "PNCPMTV";

/// Text contained in the description of every hive-managed cluster service
pub const MANAGED_CLUSTER_MARKER: &str = "A managed hive created cluster";

/// Name suffixes of the two staging hive regions
pub const STAGING_SUFFIXES: [&str; 2] = [
    "s1.devshift.org-hive-cluster",
    "s2.devshift.org-hive-cluster",
];

/// Description marker and name suffixes identifying staging services
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagingRules {
    pub description_marker: String,
    pub name_suffixes: Vec<String>,
}

impl Default for StagingRules {
    fn default() -> Self {
        Self {
            description_marker: MANAGED_CLUSTER_MARKER.to_string(),
            name_suffixes: STAGING_SUFFIXES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl From<&StagingConfig> for StagingRules {
    fn from(config: &StagingConfig) -> Self {
        Self {
            description_marker: config.description_marker.clone(),
            name_suffixes: config.name_suffixes.clone(),
        }
    }
}

impl StagingRules {
    /// True iff the service routes to `escalation_policy`, is hive-managed and
    /// is named after a staging region. Checks run in that order.
    pub fn is_staging(&self, service: &Service, escalation_policy: &str) -> bool {
        if service.escalation_policy.id != escalation_policy {
            return false;
        }
        if !service.description().contains(&self.description_marker) {
            return false;
        }
        self.name_suffixes
            .iter()
            .any(|suffix| service.name.ends_with(suffix.as_str()))
    }
}

/// [`StagingRules::is_staging`] with the default marker and suffixes
pub fn is_staging(service: &Service, escalation_policy: &str) -> bool {
    StagingRules::default().is_staging(service, escalation_policy)
}

/// True iff some cluster base domain occurs in the service name
pub fn is_active<S: AsRef<str>>(service: &Service, clusters: &[S]) -> bool {
    clusters
        .iter()
        .any(|cluster| service.name.contains(cluster.as_ref()))
}
