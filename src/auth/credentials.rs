//! PagerDuty API token resolution
//!
//! A token value is either the token itself or a path to a file holding it.

use log::debug;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CredentialsError {
    #[error("No PagerDuty API token - pass --pd_api_token or set PD_API_TOKEN")]
    Missing,

    #[error("Failed to read token file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Token file {0} is empty")]
    Empty(String),
}

/// Resolve a token value.
///
/// If `value` names an existing file its trimmed contents are returned,
/// otherwise `value` is returned verbatim. A token file that is empty after
/// trimming is rejected with [`CredentialsError::Empty`] rather than sending
/// an empty token to PagerDuty.
pub fn resolve_token(value: &str) -> Result<String, CredentialsError> {
    let path = Path::new(value);
    if !path.is_file() {
        return Ok(value.to_string());
    }

    debug!("Reading PagerDuty API token from {}", path.display());
    let content = fs::read_to_string(path).map_err(|source| CredentialsError::Read {
        path: value.to_string(),
        source,
    })?;

    let token = content.trim();
    if token.is_empty() {
        return Err(CredentialsError::Empty(value.to_string()));
    }
    Ok(token.to_string())
}

/// Pick the first available token source and resolve it.
///
/// `cli_value` already carries the `PD_API_TOKEN` fallback applied by clap;
/// `config_value` comes from the `[pagerduty]` config section.
pub fn resolve_api_token(
    cli_value: Option<&str>,
    config_value: Option<&str>,
) -> Result<String, CredentialsError> {
    match cli_value.or(config_value) {
        Some(value) => resolve_token(value),
        None => Err(CredentialsError::Missing),
    }
}
