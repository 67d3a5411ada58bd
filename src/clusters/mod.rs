//! Managed cluster inventory
//!
//! Lists the base domains of all clusters currently managed through OCM.

pub mod ocm;
pub mod parser;

use std::fmt;
use thiserror::Error;

pub use ocm::OcmCli;
pub use parser::parse_cluster_table;

/// Base domain of a managed cluster, e.g. `abc123.s1.devshift.org-hive-cluster`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClusterDomain(String);

impl ClusterDomain {
    pub fn new(domain: impl Into<String>) -> Self {
        Self(domain.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ClusterDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClusterDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors produced while listing managed clusters
#[derive(Debug, Error)]
pub enum ClusterListError {
    /// The CLI could not be started (usually not installed)
    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The CLI ran but exited unsuccessfully
    #[error("`{command}` exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// Standard output was not valid UTF-8
    #[error("Output of `{command}` is not valid UTF-8")]
    InvalidOutput { command: String },

    /// A line that is neither a header, a placeholder nor an API URL
    #[error("Unexpected line {line_number} in cluster listing: {line:?}")]
    UnexpectedLine { line_number: usize, line: String },
}

/// Source of the live managed-cluster list
pub trait ClusterSource {
    fn list_clusters(&self) -> Result<Vec<ClusterDomain>, ClusterListError>;
}
