//! Response types for the PagerDuty REST API v2
//!
//! Only the fields the sync reads are modelled; everything else in the
//! payload is ignored by serde.

use serde::{Deserialize, Serialize};

/// Reference to another PagerDuty object, e.g. a service's escalation policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectReference {
    /// Object identifier (e.g. `PNCPMTV`)
    pub id: String,
    /// Object type (e.g. `escalation_policy_reference`)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Short human readable summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl ObjectReference {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: None,
            summary: None,
        }
    }
}

/// A PagerDuty service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Opaque service identifier
    pub id: String,
    /// Service name; for cluster services this embeds the cluster base domain
    pub name: String,
    /// Free text description; PagerDuty sends `null` when unset
    #[serde(default)]
    pub description: Option<String>,
    /// Escalation policy the service routes to
    pub escalation_policy: ObjectReference,
}

impl Service {
    /// Description text, empty when PagerDuty returned none
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Resource path used for deleting this service
    pub fn resource_path(&self) -> String {
        format!("/services/{}", self.id)
    }
}

/// One page of `GET /services`
#[derive(Debug, Clone, Deserialize)]
pub struct ServicePage {
    /// Services on this page
    #[serde(default)]
    pub services: Vec<Service>,
    /// Page size the server applied
    #[serde(default)]
    pub limit: Option<u32>,
    /// Offset of the first service on this page
    #[serde(default)]
    pub offset: Option<u32>,
    /// Whether more pages follow
    #[serde(default)]
    pub more: bool,
    /// Total count, only present when requested
    #[serde(default)]
    pub total: Option<u32>,
}

/// Error body returned by PagerDuty
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl ApiErrorResponse {
    /// Get the error message, with any detail lines appended
    pub fn get_message(&self) -> String {
        let base = self
            .error
            .message
            .clone()
            .unwrap_or_else(|| "Unknown error".to_string());

        if self.error.errors.is_empty() {
            base
        } else {
            format!("{} ({})", base, self.error.errors.join("; "))
        }
    }
}
