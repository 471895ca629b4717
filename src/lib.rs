//! Credential-scoped client for registrar domain APIs.
//!
//! The crate wraps a registrar's read-only domain endpoints (availability
//! checks, name suggestions and the TLD catalog) and normalizes their
//! responses into small immutable records. Prices are always reported in
//! [`Micros`], so comparing two prices is an integer comparison.
//!
//! # Example
//!
//! ```no_run
//! use regdomains::{Credentials, DomainClient};
//!
//! # async fn example() -> Result<(), regdomains::DomainError> {
//! let credentials = Credentials::new("your_api_key", "your_api_secret");
//! let client = DomainClient::new(credentials)?;
//!
//! let result = client.check_domain("example.com").await?;
//! if result.available {
//!     println!("{} is available", result.domain);
//! }
//!
//! for suggestion in client.suggest_domains("tech", 5).await? {
//!     println!("{} ({} {})", suggestion.domain, suggestion.price, suggestion.currency);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Credentials
//!
//! Credentials are injected at construction. A key prefixed with `test_` (or
//! an empty key or secret) marks the pair as [`CredentialTier::Sandbox`];
//! the client still talks to its configured endpoint, it never fabricates
//! responses. Callers decide whether to run live calls by inspecting
//! [`DomainClient::tier`].
//!
//! # Errors
//!
//! Every operation fails with a categorized [`DomainError`]. Nothing is
//! retried automatically; see [`DomainError::is_retryable`].

use std::net::IpAddr;
use std::time::Duration;

pub mod credentials;
pub mod error;
pub mod godaddy;
pub mod types;

pub use credentials::Credentials;
pub use error::DomainError;
pub use godaddy::{
    CheckType, ClientConfig, DomainCheckResult, DomainClient, DomainSuggestion, TldInfo,
    DEFAULT_SUGGEST_LIMIT,
};
pub use types::{
    CredentialTier, DomainName, DomainNameError, Environment, Micros, PriceError, TldType,
};

/// Default per-request timeout when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Network configuration for the underlying HTTP client.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use regdomains::HttpClientConfig;
///
/// let config = HttpClientConfig::new()
///     .timeout(Duration::from_secs(10))
///     .local_address("127.0.0.1".parse().unwrap());
/// assert_eq!(config.timeout, Some(Duration::from_secs(10)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Request timeout. Falls back to [`DEFAULT_TIMEOUT`] when unset.
    pub timeout: Option<Duration>,
    /// Local address to bind outgoing connections to.
    pub local_address: Option<IpAddr>,
    /// Network interface to bind to (only honoured on platforms that support it).
    pub interface: Option<String>,
}

impl HttpClientConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Binds outgoing connections to `addr`.
    pub fn local_address(mut self, addr: IpAddr) -> Self {
        self.local_address = Some(addr);
        self
    }

    /// Binds outgoing connections to the named interface.
    pub fn interface(mut self, iface: impl Into<String>) -> Self {
        self.interface = Some(iface.into());
        self
    }

    /// The effective request timeout.
    pub fn effective_timeout(&self) -> Duration {
        self.timeout.unwrap_or(DEFAULT_TIMEOUT)
    }
}
