//! # pd-service-sync
//!
//! Removes PagerDuty services that belong to staging clusters which OCM no
//! longer manages.
//!
//! A run lists the API URLs of all managed clusters through the `ocm` CLI,
//! lists the team's PagerDuty services, and deletes every service that
//!
//! - routes to the staging escalation policy,
//! - is described as a hive-managed cluster,
//! - is named after a staging region,
//! - and whose cluster base domain is no longer in the OCM listing.
//!
//! ## Example
//!
//! ```rust,no_run
//! use pd_service_sync::{clusters::OcmCli, pagerduty::PagerDutyClient, Reconciler, SyncOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let ocm = OcmCli::default();
//! let pagerduty = PagerDutyClient::new("my-api-token")?;
//! let options = SyncOptions {
//!     team: Some("PTEAM01".to_string()),
//!     dry_run: true,
//!     ..SyncOptions::default()
//! };
//!
//! let report = Reconciler::new(&ocm, &pagerduty, options).run()?;
//! println!("{} services would be deleted", report.candidates.len());
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod cli;
pub mod clusters;
pub mod common;
pub mod config;
pub mod error;
pub mod pagerduty;
pub mod reconcile;

pub use error::{Result, SyncError};
pub use reconcile::classifier::{is_active, is_staging};
pub use reconcile::{Reconciler, SyncOptions, SyncReport};

use cli::Cli;
use clusters::OcmCli;
use pagerduty::PagerDutyClient;
use reconcile::classifier::StagingRules;

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run one sync pass as configured by the command line.
///
/// The logger must already be initialised.
pub fn run_sync(cli: &Cli) -> Result<SyncReport> {
    let config = config::load_config(cli.config.as_deref())?;

    let token = auth::resolve_api_token(
        cli.pd_api_token.as_deref(),
        config.pagerduty.api_token.as_deref(),
    )?;
    let pagerduty = PagerDutyClient::from_config(&config.pagerduty, token)?;
    let ocm = OcmCli::from_config(&config.ocm);

    let options = SyncOptions {
        escalation_policy: cli
            .escalation_policy
            .clone()
            .unwrap_or_else(|| config.staging.escalation_policy.clone()),
        team: cli.team.clone(),
        dry_run: cli.dry_run,
        rules: StagingRules::from(&config.staging),
    };

    Reconciler::new(&ocm, &pagerduty, options).run()
}
