//! Credentials for the PagerDuty API

pub mod credentials;

pub use credentials::{resolve_api_token, resolve_token, CredentialsError};
