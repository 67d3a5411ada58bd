//! Failures of PagerDuty list and delete calls
//!
//! None of these are retried: whichever call fails first ends the sync pass.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PagerDutyError {
    /// Rejected token (HTTP 401)
    #[error("PagerDuty rejected the API token")]
    Unauthorized,

    /// Token lacks the role needed for the call (HTTP 403), e.g. a read-only key
    /// used for a delete
    #[error("PagerDuty denied access: {0}")]
    PermissionDenied(String),

    /// Service or endpoint does not exist (HTTP 404)
    #[error("PagerDuty resource not found: {0}")]
    NotFound(String),

    /// Account rate limit hit (HTTP 429); the pass stops here
    #[error("PagerDuty rate limit reached, sync aborted without retrying")]
    RateLimited,

    /// 5xx answer from PagerDuty
    #[error("PagerDuty server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Any other non-success status, typically 400 for a malformed filter
    #[error("PagerDuty returned {status}: {message}")]
    ApiError { status: u16, message: String },

    /// Connect, TLS or timeout failure before a status was received
    #[error("Request to PagerDuty failed: {0}")]
    Http(#[from] reqwest::Error),

    /// `api_url` plus the request path is not a valid URL
    #[error("Invalid PagerDuty URL: {0}")]
    InvalidUrl(String),

    /// Success status with a body that is not a service page
    #[error("Unexpected PagerDuty response body: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, PagerDutyError>;
