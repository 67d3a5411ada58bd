//! Reconciliation of PagerDuty services against live managed clusters
//!
//! A pass lists the clusters, lists the services, and deletes every staging
//! service whose cluster is gone. Everything runs sequentially and the first
//! error ends the pass.

pub mod classifier;

use crate::clusters::{ClusterDomain, ClusterSource};
use crate::error::{Result, SyncError};
use crate::pagerduty::{Service, ServiceDirectory};
use classifier::{is_active, StagingRules, DEFAULT_ESCALATION_POLICY};
use log::{debug, info};

/// Settings of a single reconciliation pass
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Escalation policy staging services route to
    pub escalation_policy: String,
    /// Team whose services are examined; `None` lists across all teams
    pub team: Option<String>,
    /// Log deletion candidates without deleting them
    pub dry_run: bool,
    pub rules: StagingRules,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            escalation_policy: DEFAULT_ESCALATION_POLICY.to_string(),
            team: None,
            dry_run: false,
            rules: StagingRules::default(),
        }
    }
}

/// What a pass decided for one service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Not a staging cluster service; left alone
    NotStaging,
    /// Staging service whose cluster still exists
    Active,
    /// Staging service whose cluster is gone
    Delete,
}

/// A service selected for deletion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionCandidate {
    pub id: String,
    pub name: String,
    /// False when the pass ran in dry-run mode
    pub deleted: bool,
}

/// Outcome of a completed pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub clusters: usize,
    pub examined: usize,
    pub not_staging: usize,
    pub active: usize,
    pub candidates: Vec<DeletionCandidate>,
    pub dry_run: bool,
}

impl SyncReport {
    pub fn deleted(&self) -> usize {
        self.candidates.iter().filter(|c| c.deleted).count()
    }
}

/// Classify one service against the live cluster list
pub fn classify(
    service: &Service,
    clusters: &[ClusterDomain],
    options: &SyncOptions,
) -> Verdict {
    if !options.rules.is_staging(service, &options.escalation_policy) {
        Verdict::NotStaging
    } else if is_active(service, clusters) {
        Verdict::Active
    } else {
        Verdict::Delete
    }
}

/// Drives one reconciliation pass over a cluster source and a service directory
pub struct Reconciler<'a, C: ClusterSource, D: ServiceDirectory> {
    clusters: &'a C,
    directory: &'a D,
    options: SyncOptions,
}

impl<'a, C: ClusterSource, D: ServiceDirectory> Reconciler<'a, C, D> {
    pub fn new(clusters: &'a C, directory: &'a D, options: SyncOptions) -> Self {
        Self {
            clusters,
            directory,
            options,
        }
    }

    pub fn options(&self) -> &SyncOptions {
        &self.options
    }

    /// Run the pass. Deletions happen one by one; a failed delete aborts the
    /// remaining ones.
    pub fn run(&self) -> Result<SyncReport> {
        info!("Retrieving current list of OCM staging clusters");
        let clusters = self.clusters.list_clusters()?;

        info!("Retrieving current list of PagerDuty services");
        let services = self.directory.list_services(self.options.team.as_deref())?;

        let mut report = SyncReport {
            clusters: clusters.len(),
            examined: services.len(),
            dry_run: self.options.dry_run,
            ..SyncReport::default()
        };

        for service in &services {
            match classify(service, &clusters, &self.options) {
                Verdict::NotStaging => report.not_staging += 1,
                Verdict::Active => {
                    debug!("Keeping service {} / {}", service.name, service.id);
                    report.active += 1;
                }
                Verdict::Delete => {
                    let deleted = self.delete(service)?;
                    report.candidates.push(DeletionCandidate {
                        id: service.id.clone(),
                        name: service.name.clone(),
                        deleted,
                    });
                }
            }
        }

        info!(
            "Examined {} services: {} not staging, {} active, {} {}",
            report.examined,
            report.not_staging,
            report.active,
            report.candidates.len(),
            if report.dry_run {
                "would be deleted"
            } else {
                "deleted"
            }
        );
        Ok(report)
    }

    fn delete(&self, service: &Service) -> Result<bool> {
        if self.options.dry_run {
            info!("[dry-run] Deleting service {} / {}", service.name, service.id);
            return Ok(false);
        }

        info!("Deleting service {} / {}", service.name, service.id);
        self.directory
            .delete_service(service)
            .map_err(|source| SyncError::DeleteFailed {
                id: service.id.clone(),
                name: service.name.clone(),
                source,
            })?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagerduty::ObjectReference;

    fn service(name: &str, policy: &str) -> Service {
        Service {
            id: format!("P{}", name.len()),
            name: name.to_string(),
            description: Some("A managed hive created cluster".to_string()),
            escalation_policy: ObjectReference::new(policy),
        }
    }

    #[test]
    fn test_classify() {
        let clusters = vec![ClusterDomain::new("abc.s1.devshift.org-hive-cluster")];
        let options = SyncOptions::default();

        assert_eq!(
            classify(&service("abc.s1.devshift.org-hive-cluster", "PNCPMTV"), &clusters, &options),
            Verdict::Active
        );
        assert_eq!(
            classify(&service("xyz.s2.devshift.org-hive-cluster", "PNCPMTV"), &clusters, &options),
            Verdict::Delete
        );
        assert_eq!(
            classify(&service("xyz.s2.devshift.org-hive-cluster", "POTHER1"), &clusters, &options),
            Verdict::NotStaging
        );
    }

    #[test]
    fn test_classify_uses_configured_policy() {
        let options = SyncOptions {
            escalation_policy: "POTHER1".to_string(),
            ..SyncOptions::default()
        };
        assert_eq!(
            classify(&service("xyz.s2.devshift.org-hive-cluster", "POTHER1"), &[], &options),
            Verdict::Delete
        );
    }

    #[test]
    fn test_report_counts_deleted() {
        let report = SyncReport {
            candidates: vec![
                DeletionCandidate {
                    id: "P1".to_string(),
                    name: "a".to_string(),
                    deleted: true,
                },
                DeletionCandidate {
                    id: "P2".to_string(),
                    name: "b".to_string(),
                    deleted: false,
                },
            ],
            ..SyncReport::default()
        };
        assert_eq!(report.deleted(), 1);
    }
}
