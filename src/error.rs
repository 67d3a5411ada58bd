use crate::auth::CredentialsError;
use crate::clusters::ClusterListError;
use crate::config::ConfigError;
use crate::pagerduty::PagerDutyError;
use thiserror::Error;

/// Every way a sync run can fail
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Cluster listing failed: {0}")]
    ClusterList(#[from] ClusterListError),

    #[error("PagerDuty request failed: {0}")]
    PagerDuty(#[from] PagerDutyError),

    #[error("Failed to delete service {name} / {id}: {source}")]
    DeleteFailed {
        id: String,
        name: String,
        #[source]
        source: PagerDutyError,
    },

    #[error("Credentials error: {0}")]
    Credentials(#[from] CredentialsError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, SyncError>;
