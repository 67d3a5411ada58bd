//! PagerDuty REST API module
//!
//! Lists and deletes PagerDuty services. The reconciler talks to PagerDuty
//! only through the [`ServiceDirectory`] trait.
//!
//! # Example
//!
//! ```rust,no_run
//! use pd_service_sync::pagerduty::{PagerDutyClient, ServiceDirectory};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PagerDutyClient::new("my-api-token")?;
//!
//!     for service in client.list_services(Some("PTEAM01"))? {
//!         println!("{} / {}", service.name, service.id);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod types;

pub use client::{PagerDutyClient, PAGERDUTY_API_URL};
pub use error::{PagerDutyError, Result};
pub use types::{ObjectReference, Service, ServicePage};

/// Read and delete access to a team's services
pub trait ServiceDirectory {
    /// All services matching the configured query, optionally restricted to a team
    fn list_services(&self, team: Option<&str>) -> Result<Vec<Service>>;

    /// Delete a single service
    fn delete_service(&self, service: &Service) -> Result<()>;
}
