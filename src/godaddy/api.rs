//! Low-level GoDaddy domains API client.
//!
//! This module sends the raw HTTP requests and decodes the wire shapes.
//! Status codes are not categorized here; see [`super::DomainClient`].
//!
//! # API Reference
//!
//! - [Domains API](https://developer.godaddy.com/doc/endpoint/domains)

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, RETRY_AFTER};
use reqwest::{Client as HttpClient, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::credentials::Credentials;
use crate::types::Environment;
use crate::HttpClientConfig;

/// GoDaddy API endpoints.
const PRODUCTION_API_URL: &str = "https://api.godaddy.com";
const SANDBOX_API_URL: &str = "https://api.ote-godaddy.com";

const USER_AGENT: &str = concat!("regdomains/", env!("CARGO_PKG_VERSION"));

/// Returns the API base URL for an environment.
pub fn api_url(environment: Environment) -> &'static str {
    match environment {
        Environment::Production => PRODUCTION_API_URL,
        Environment::Sandbox => SANDBOX_API_URL,
    }
}

/// Errors that may occur when talking to the GoDaddy API.
#[derive(Debug, Error)]
pub enum GoDaddyError {
    /// Sending the request or reading the body failed.
    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API returned status {status}: {body}")]
    Status {
        status: u16,
        retry_after: Option<Duration>,
        body: String,
    },

    /// A success body did not match the expected shape.
    #[error("failed to decode response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// The request URL could not be built.
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    /// The credentials cannot be encoded as a header value.
    #[error("invalid authorization header: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

impl GoDaddyError {
    /// The `message` field of an API error body, if there is one.
    pub fn api_message(&self) -> Option<String> {
        match self {
            GoDaddyError::Status { body, .. } => serde_json::from_str::<ApiErrorBody>(body)
                .ok()
                .and_then(|e| e.message),
            _ => None,
        }
    }
}

/// Error body returned alongside 4xx/5xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    /// Machine-readable code, e.g. `UNABLE_TO_AUTHENTICATE`.
    #[serde(default)]
    pub code: Option<String>,
    /// Human-readable message.
    #[serde(default)]
    pub message: Option<String>,
}

/// Availability check mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CheckType {
    /// Faster, possibly non-definitive check.
    #[default]
    Fast,
    /// Slower check that is more likely to be definitive.
    Full,
}

impl CheckType {
    /// Returns the query parameter value.
    pub const fn as_str(&self) -> &'static str {
        match self {
            CheckType::Fast => "FAST",
            CheckType::Full => "FULL",
        }
    }
}

// =============================================================================
// Wire Types
// =============================================================================

/// Body of `GET /v1/domains/available`.
#[derive(Debug, Clone, Deserialize)]
pub struct AvailabilityResponse {
    pub domain: String,
    pub available: bool,
    pub definitive: bool,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub period: Option<u32>,
    /// Micro-unit integer, decimal string/number, or `{amount, currency}`.
    #[serde(default)]
    pub price: Option<serde_json::Value>,
}

/// One entry of `GET /v1/domains/suggest`.
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionEntry {
    pub domain: String,
    #[serde(default)]
    pub available: Option<bool>,
    #[serde(default)]
    pub price: Option<serde_json::Value>,
    #[serde(default)]
    pub currency: Option<String>,
}

/// One entry of `GET /v1/domains/tlds`.
#[derive(Debug, Clone, Deserialize)]
pub struct TldEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub tld_type: String,
}

// =============================================================================
// API Client
// =============================================================================

/// GoDaddy API client.
#[derive(Debug, Clone)]
pub struct Client {
    http_client: HttpClient,
    base_url: String,
}

impl Client {
    /// Creates a client for the given environment.
    pub fn new(
        credentials: &Credentials,
        environment: Environment,
        config: HttpClientConfig,
    ) -> Result<Self, GoDaddyError> {
        Self::with_base_url(credentials, api_url(environment), config)
    }

    /// Creates a client with a custom base URL.
    ///
    /// This is primarily useful for testing with mock servers.
    pub fn with_base_url(
        credentials: &Credentials,
        base_url: &str,
        config: HttpClientConfig,
    ) -> Result<Self, GoDaddyError> {
        let mut headers = HeaderMap::new();
        let mut auth_value = HeaderValue::from_str(&credentials.authorization())?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = HttpClient::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(config.effective_timeout());

        if let Some(addr) = config.local_address {
            builder = builder.local_address(addr);
        }

        #[cfg(any(
            target_os = "android",
            target_os = "fuchsia",
            target_os = "linux",
            target_os = "macos",
            target_os = "ios",
            target_os = "tvos",
            target_os = "watchos",
            target_os = "illumos",
            target_os = "solaris",
        ))]
        if let Some(ref iface) = config.interface {
            builder = builder.interface(iface);
        }

        let http_client = builder.build()?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request and decode the JSON body.
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, GoDaddyError> {
        let raw = format!("{}{}", self.base_url, path);
        let url = if params.is_empty() {
            Url::parse(&raw)
        } else {
            Url::parse_with_params(&raw, params)
        }
        .map_err(|e| GoDaddyError::InvalidUrl(e.to_string()))?;

        tracing::debug!(path, "sending registrar request");
        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        let retry_after = parse_retry_after(response.headers());
        let body = response.text().await?;
        tracing::debug!(path, status = status.as_u16(), bytes = body.len(), "registrar response");

        if !status.is_success() {
            return Err(GoDaddyError::Status {
                status: status.as_u16(),
                retry_after,
                body,
            });
        }

        serde_json::from_str(&body).map_err(|source| GoDaddyError::Decode { source, body })
    }

    /// Checks whether a domain is available for registration.
    pub async fn available(
        &self,
        domain: &str,
        check_type: CheckType,
    ) -> Result<AvailabilityResponse, GoDaddyError> {
        self.get(
            "/v1/domains/available",
            &[
                ("domain", domain),
                ("checkType", check_type.as_str()),
                ("forTransfer", "false"),
            ],
        )
        .await
    }

    /// Fetches suggested domain names for a query.
    pub async fn suggest(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<SuggestionEntry>, GoDaddyError> {
        let limit = limit.to_string();
        self.get(
            "/v1/domains/suggest",
            &[("query", query), ("limit", limit.as_str())],
        )
        .await
    }

    /// Fetches the TLD catalog.
    pub async fn tlds(&self) -> Result<Vec<TldEntry>, GoDaddyError> {
        self.get("/v1/domains/tlds", &[]).await
    }
}

/// Reads a `Retry-After` header given in delta-seconds.
///
/// HTTP-date values are ignored.
fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}
