use super::{parse_cluster_table, ClusterDomain, ClusterListError, ClusterSource};
use crate::common::command_utils::{display_command, execute_command};
use crate::config::types::OcmConfig;
use log::{debug, info};

/// Arguments asking OCM for the API URL of every managed cluster
pub const LIST_CLUSTERS_ARGS: &[&str] = &[
    "list",
    "clusters",
    "--managed",
    "--columns",
    "api.url",
    "--padding",
    "100",
];

/// Lists managed clusters by shelling out to the `ocm` CLI
#[derive(Debug, Clone)]
pub struct OcmCli {
    binary: String,
}

impl Default for OcmCli {
    fn default() -> Self {
        Self::from_config(&OcmConfig::default())
    }
}

impl OcmCli {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn from_config(config: &OcmConfig) -> Self {
        Self::new(config.binary.clone())
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }
}

impl ClusterSource for OcmCli {
    fn list_clusters(&self) -> Result<Vec<ClusterDomain>, ClusterListError> {
        let command = display_command(&self.binary, LIST_CLUSTERS_ARGS);
        debug!("Running {}", command);

        let output = execute_command(&self.binary, LIST_CLUSTERS_ARGS).map_err(|source| {
            ClusterListError::Spawn {
                command: command.clone(),
                source,
            }
        })?;

        if !output.status.success() {
            return Err(ClusterListError::CommandFailed {
                command,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|_| ClusterListError::InvalidOutput { command })?;

        let clusters = parse_cluster_table(&stdout)?;
        info!("Found {} managed clusters", clusters.len());
        Ok(clusters)
    }
}
