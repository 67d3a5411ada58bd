use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub pagerduty: PagerDutyConfig,
    pub ocm: OcmConfig,
    pub staging: StagingConfig,
}

/// PagerDuty API configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagerDutyConfig {
    /// Base URL of the REST API
    pub api_url: String,
    /// Token used when neither `--pd_api_token` nor `PD_API_TOKEN` is set.
    /// May also be a path to a file holding the token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
    /// Text filter applied when listing services
    pub service_query: String,
    /// Number of services requested per page
    pub page_size: u32,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for PagerDutyConfig {
    fn default() -> Self {
        Self {
            api_url: crate::pagerduty::PAGERDUTY_API_URL.to_string(),
            api_token: None,
            service_query: "devshift.org-hive-cluster".to_string(),
            page_size: 20,
            timeout_secs: 30,
        }
    }
}

/// OCM CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OcmConfig {
    /// Executable used to list managed clusters
    pub binary: String,
}

impl Default for OcmConfig {
    fn default() -> Self {
        Self {
            binary: "ocm".to_string(),
        }
    }
}

/// Rules identifying staging cluster services
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StagingConfig {
    /// Escalation policy used when `--escalation_policy` is not given
    pub escalation_policy: String,
    /// Text every hive-managed service description contains
    pub description_marker: String,
    /// Name suffixes of staging regions
    pub name_suffixes: Vec<String>,
}

impl Default for StagingConfig {
    fn default() -> Self {
        Self {
            escalation_policy: crate::reconcile::classifier::DEFAULT_ESCALATION_POLICY.to_string(),
            description_marker: crate::reconcile::classifier::MANAGED_CLUSTER_MARKER.to_string(),
            name_suffixes: crate::reconcile::classifier::STAGING_SUFFIXES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
