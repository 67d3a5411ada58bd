//! Blocking PagerDuty REST client
//!
//! Lists services with offset pagination and deletes services by id.
//! Requests are sent one at a time; nothing is retried.

use super::error::{PagerDutyError, Result};
use super::types::{ApiErrorResponse, Service, ServicePage};
use super::ServiceDirectory;
use crate::config::types::PagerDutyConfig;
use log::{debug, warn};
use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Production API URL
pub const PAGERDUTY_API_URL: &str = "https://api.pagerduty.com";

/// Media type selecting version 2 of the REST API
const PAGERDUTY_ACCEPT: &str = "application/vnd.pagerduty+json;version=2";

/// User agent for API requests
const USER_AGENT: &str = concat!("pd-service-sync/", env!("CARGO_PKG_VERSION"));

/// Client for the PagerDuty REST API
pub struct PagerDutyClient {
    /// HTTP client with configured timeout and user agent
    http_client: Client,
    /// Base API URL without trailing slash
    api_url: String,
    /// REST API token
    token: String,
    /// Text filter sent as `query` when listing services
    service_query: String,
    /// Page size sent as `limit`
    page_size: u32,
}

impl std::fmt::Debug for PagerDutyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PagerDutyClient")
            .field("api_url", &self.api_url)
            .field("service_query", &self.service_query)
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

impl PagerDutyClient {
    /// Create a client against the production API with default settings
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::from_config(&PagerDutyConfig::default(), token)
    }

    /// Create a client from the `[pagerduty]` config section
    pub fn from_config(config: &PagerDutyConfig, token: impl Into<String>) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(PagerDutyError::Http)?;

        Ok(Self {
            http_client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token: token.into(),
            service_query: config.service_query.clone(),
            page_size: config.page_size.max(1),
        })
    }

    /// Get the configured API URL
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Page size used for listing
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    fn url(&self, path: &str, params: &[(&str, String)]) -> Result<Url> {
        let raw = format!("{}{}", self.api_url, path);
        let parsed = if params.is_empty() {
            Url::parse(&raw)
        } else {
            Url::parse_with_params(&raw, params)
        };
        parsed.map_err(|e| PagerDutyError::InvalidUrl(e.to_string()))
    }

    /// Make an authenticated GET request
    fn get<T: DeserializeOwned>(&self, path: &str, params: &[(&str, String)]) -> Result<T> {
        let url = self.url(path, params)?;
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(url)
            .header(AUTHORIZATION, format!("Token token={}", self.token))
            .header(ACCEPT, PAGERDUTY_ACCEPT)
            .send()?;

        let response = Self::check_status(response)?;
        response
            .json::<T>()
            .map_err(|e| PagerDutyError::Parse(e.to_string()))
    }

    /// Make an authenticated DELETE request, discarding the (empty) body
    fn delete(&self, path: &str) -> Result<()> {
        let url = self.url(path, &[])?;
        debug!("DELETE {}", url);

        let response = self
            .http_client
            .delete(url)
            .header(AUTHORIZATION, format!("Token token={}", self.token))
            .header(ACCEPT, PAGERDUTY_ACCEPT)
            .send()?;

        Self::check_status(response).map(|_| ())
    }

    /// Pass successful responses through, convert the rest into errors
    fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let status_code = status.as_u16();
        let error_body = response.text().unwrap_or_default();
        Err(status_error(status_code, &error_body))
    }

    /// Fetch a single page of services starting at `offset`
    pub fn list_services_page(&self, team: Option<&str>, offset: u32) -> Result<ServicePage> {
        let mut params = vec![
            ("query", self.service_query.clone()),
            ("limit", self.page_size.to_string()),
            ("offset", offset.to_string()),
        ];
        if let Some(team) = team {
            params.push(("team_ids[]", team.to_string()));
        }

        self.get("/services", &params)
    }
}

impl ServiceDirectory for PagerDutyClient {
    fn list_services(&self, team: Option<&str>) -> Result<Vec<Service>> {
        if team.is_none() {
            warn!("No team given, listing services across all teams");
        }
        collect_pages(|offset| self.list_services_page(team, offset))
    }

    fn delete_service(&self, service: &Service) -> Result<()> {
        self.delete(&service.resource_path())
    }
}

/// Map a non-success status and body onto a [`PagerDutyError`]
pub(crate) fn status_error(status_code: u16, error_body: &str) -> PagerDutyError {
    let error_message = serde_json::from_str::<ApiErrorResponse>(error_body)
        .map(|e| e.get_message())
        .unwrap_or_else(|_| error_body.to_string());

    match status_code {
        401 => PagerDutyError::Unauthorized,
        403 => PagerDutyError::PermissionDenied(error_message),
        404 => PagerDutyError::NotFound(error_message),
        429 => PagerDutyError::RateLimited,
        500..=599 => PagerDutyError::ServerError {
            status: status_code,
            message: error_message,
        },
        _ => PagerDutyError::ApiError {
            status: status_code,
            message: error_message,
        },
    }
}

/// Walk offset pagination until the server reports no further pages
pub(crate) fn collect_pages<F>(mut fetch: F) -> Result<Vec<Service>>
where
    F: FnMut(u32) -> Result<ServicePage>,
{
    let mut services = Vec::new();
    let mut offset = 0u32;

    loop {
        let page = fetch(offset)?;
        let fetched = page.services.len() as u32;
        debug!(
            "Fetched {} services at offset {} (more: {})",
            fetched, offset, page.more
        );
        services.extend(page.services);

        if !page.more {
            break;
        }
        if fetched == 0 {
            warn!("PagerDuty reported more services but returned an empty page, stopping");
            break;
        }
        offset += fetched;
    }

    Ok(services)
}
