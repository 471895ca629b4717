//! Categorized failures surfaced by [`DomainClient`](crate::DomainClient).

use std::time::Duration;

use thiserror::Error;

use crate::types::DomainNameError;

/// Errors returned by client operations.
///
/// Variants are categories rather than raw status codes:
///
/// | Variant | Network I/O performed | Retry? |
/// |---------|-----------------------|--------|
/// | [`Authentication`](Self::Authentication) | maybe | never with the same credentials |
/// | [`InvalidDomain`](Self::InvalidDomain), [`InvalidRequest`](Self::InvalidRequest) | no | no |
/// | [`RateLimited`](Self::RateLimited) | yes | after backoff |
/// | [`TransientNetwork`](Self::TransientNetwork) | yes | yes |
/// | [`Upstream`](Self::Upstream), [`MalformedResponse`](Self::MalformedResponse) | yes | caller decides |
#[derive(Debug, Error)]
pub enum DomainError {
    /// Credentials are missing, malformed, or were rejected (401/403).
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The domain failed local validation; no request was sent.
    #[error("invalid domain {domain:?}: {reason}")]
    InvalidDomain {
        domain: String,
        #[source]
        reason: DomainNameError,
    },

    /// Another argument failed local validation; no request was sent.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The API signalled throttling (429).
    #[error("rate limited by registrar API{}", retry_after_suffix(.retry_after))]
    RateLimited { retry_after: Option<Duration> },

    /// Connecting, sending, or reading the response failed, including timeouts.
    #[error("network error: {0}")]
    TransientNetwork(#[source] reqwest::Error),

    /// Any other non-success status.
    #[error("registrar API returned {status}: {body}")]
    Upstream { status: u16, body: String },

    /// A success response whose body could not be decoded or normalized.
    #[error("malformed registrar response: {reason}")]
    MalformedResponse { reason: String, body: String },
}

fn retry_after_suffix(retry_after: &Option<Duration>) -> String {
    match retry_after {
        Some(d) => format!(" (retry after {}s)", d.as_secs()),
        None => String::new(),
    }
}

impl DomainError {
    /// Whether repeating the same call later may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited { .. } | Self::TransientNetwork(_))
    }

    /// The server-provided backoff for rate limited calls.
    #[must_use]
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimited { retry_after } => *retry_after,
            _ => None,
        }
    }

    /// Whether the failure was detected before any network I/O.
    #[must_use]
    pub fn is_local(&self) -> bool {
        matches!(self, Self::InvalidDomain { .. } | Self::InvalidRequest(_))
    }

    /// HTTP status of the response that caused the error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            Self::RateLimited { .. } => Some(429),
            _ => None,
        }
    }
}
