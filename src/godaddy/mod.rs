//! GoDaddy domains client.
//!
//! Wraps the low-level [`api::Client`] with local input validation, error
//! categorization and response normalization.
//!
//! # Authentication
//!
//! Requires a GoDaddy API key and secret, sent as
//! `Authorization: sso-key <key>:<secret>`:
//! - Create a key pair at: <https://developer.godaddy.com/keys>
//!
//! # Example
//!
//! ```no_run
//! use regdomains::{ClientConfig, Credentials, DomainClient, Environment};
//!
//! # async fn example() -> Result<(), regdomains::DomainError> {
//! let credentials = Credentials::from_env()
//!     .unwrap_or_else(|| Credentials::new("test_key", "test_secret"));
//! let config = ClientConfig::new().environment(Environment::Sandbox);
//! let client = DomainClient::with_config(credentials, config)?;
//!
//! for tld in client.list_tlds().await? {
//!     println!("{} ({})", tld.name, tld.kind);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Cancellation
//!
//! Every operation is a single request. Dropping the returned future
//! abandons it; the only side effect left behind is a request that may
//! already have reached the registrar.

pub mod api;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use api::{CheckType, GoDaddyError};

use crate::credentials::Credentials;
use crate::error::DomainError;
use crate::types::{CredentialTier, DomainName, Environment, Micros, PriceError, TldType};
use crate::HttpClientConfig;

/// Suggestion count used by [`DomainClient::suggest_domains_default`].
pub const DEFAULT_SUGGEST_LIMIT: usize = 10;

/// Currency the API prices in when the request names none.
const DEFAULT_CURRENCY: &str = "USD";

/// Registration period (years) the API quotes when the request names none.
const DEFAULT_PERIOD: u32 = 1;

/// Result of an availability check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainCheckResult {
    /// The domain exactly as the caller passed it.
    pub domain: String,
    pub available: bool,
    /// ISO 4217 code. `"USD"` when the registrar omits it, which is the
    /// currency GoDaddy quotes in when the request names none.
    pub currency: String,
    /// `false` when the registrar could not confirm availability synchronously.
    pub definitive: bool,
    /// Registration period in years. `1` when the registrar omits it.
    pub period: u32,
    /// Registration price, when the registrar quoted one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Micros>,
}

impl DomainCheckResult {
    /// Whether the answer should only be treated as a hint.
    pub fn is_advisory(&self) -> bool {
        !self.definitive
    }
}

/// A suggested domain name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainSuggestion {
    pub domain: String,
    pub available: bool,
    pub price: Micros,
    /// ISO 4217 code.
    pub currency: String,
}

/// An entry of the registrar's TLD catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TldInfo {
    /// TLD without the leading dot, e.g. `com`.
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TldType,
}

/// Client configuration.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Which registrar endpoint to talk to.
    pub environment: Environment,
    /// Network settings.
    pub http: HttpClientConfig,
}

impl ClientConfig {
    /// Production endpoint, default network settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the endpoint environment.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Sets the network settings.
    pub fn http(mut self, http: HttpClientConfig) -> Self {
        self.http = http;
        self
    }
}

/// Registrar domain client.
///
/// Cheap to clone; clones share the connection pool. Holds no mutable
/// state, so one instance can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct DomainClient {
    api_client: Arc<api::Client>,
    tier: CredentialTier,
    environment: Environment,
}

impl DomainClient {
    /// Creates a client against the production endpoint.
    ///
    /// Fails with [`DomainError::Authentication`] if the credentials are
    /// missing or malformed. Placeholder credentials are accepted.
    pub fn new(credentials: Credentials) -> Result<Self, DomainError> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Creates a client with an explicit configuration.
    pub fn with_config(
        credentials: Credentials,
        config: ClientConfig,
    ) -> Result<Self, DomainError> {
        credentials.validate()?;
        let api_client = api::Client::new(&credentials, config.environment, config.http)?;
        Ok(Self::from_parts(api_client, &credentials, config.environment))
    }

    /// Creates a client with a custom API base URL.
    ///
    /// This is primarily useful for testing with mock servers.
    pub fn with_base_url(credentials: Credentials, base_url: &str) -> Result<Self, DomainError> {
        Self::with_base_url_and_config(credentials, base_url, HttpClientConfig::default())
    }

    /// Creates a client with a custom API base URL and network settings.
    pub fn with_base_url_and_config(
        credentials: Credentials,
        base_url: &str,
        http: HttpClientConfig,
    ) -> Result<Self, DomainError> {
        credentials.validate()?;
        let api_client = api::Client::with_base_url(&credentials, base_url, http)?;
        Ok(Self::from_parts(api_client, &credentials, Environment::Production))
    }

    fn from_parts(
        api_client: api::Client,
        credentials: &Credentials,
        environment: Environment,
    ) -> Self {
        let tier = credentials.tier();
        tracing::debug!(%tier, %environment, base_url = api_client.base_url(), "domain client ready");
        Self {
            api_client: Arc::new(api_client),
            tier,
            environment,
        }
    }

    /// Classification of the credentials this client was built with.
    pub fn tier(&self) -> CredentialTier {
        self.tier
    }

    /// The configured endpoint environment.
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Checks whether `domain` can be registered, using a fast check.
    ///
    /// The domain is validated before any request is made.
    pub async fn check_domain(&self, domain: &str) -> Result<DomainCheckResult, DomainError> {
        self.check_domain_with(domain, CheckType::Fast).await
    }

    /// Checks whether `domain` can be registered with the given check mode.
    pub async fn check_domain_with(
        &self,
        domain: &str,
        check_type: CheckType,
    ) -> Result<DomainCheckResult, DomainError> {
        let name = DomainName::parse(domain).map_err(|reason| DomainError::InvalidDomain {
            domain: domain.to_string(),
            reason,
        })?;

        let response = self
            .api_client
            .available(name.as_str(), check_type)
            .await
            .map_err(categorize)?;

        if !response.domain.eq_ignore_ascii_case(name.as_str()) {
            tracing::debug!(
                requested = name.as_str(),
                returned = response.domain.as_str(),
                "registrar echoed a different domain"
            );
        }

        let (price, tagged_currency) = match &response.price {
            Some(value) => {
                let (price, currency) = normalize_price(value).map_err(|e| malformed(e, value))?;
                (Some(price), currency)
            }
            None => (None, None),
        };

        Ok(DomainCheckResult {
            domain: domain.to_string(),
            available: response.available,
            currency: tagged_currency
                .or(response.currency)
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            definitive: response.definitive,
            period: response.period.unwrap_or(DEFAULT_PERIOD),
            price,
        })
    }

    /// Fetches up to `limit` suggestions for `query`, in registrar order.
    ///
    /// An empty list is a valid answer.
    pub async fn suggest_domains(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<DomainSuggestion>, DomainError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(DomainError::InvalidRequest(
                "suggestion query must not be empty".to_string(),
            ));
        }
        if limit == 0 {
            return Err(DomainError::InvalidRequest(
                "suggestion limit must be greater than zero".to_string(),
            ));
        }

        let mut entries = self
            .api_client
            .suggest(query, limit)
            .await
            .map_err(categorize)?;

        if entries.len() > limit {
            tracing::debug!(returned = entries.len(), limit, "truncating suggestions");
            entries.truncate(limit);
        }

        entries.into_iter().map(normalize_suggestion).collect()
    }

    /// Like [`suggest_domains`](Self::suggest_domains) with [`DEFAULT_SUGGEST_LIMIT`].
    pub async fn suggest_domains_default(
        &self,
        query: &str,
    ) -> Result<Vec<DomainSuggestion>, DomainError> {
        self.suggest_domains(query, DEFAULT_SUGGEST_LIMIT).await
    }

    /// Fetches the registrar's TLD catalog. Always issues a fresh request.
    pub async fn list_tlds(&self) -> Result<Vec<TldInfo>, DomainError> {
        let entries = self.api_client.tlds().await.map_err(categorize)?;

        Ok(entries
            .into_iter()
            .map(|entry| {
                let kind = TldType::from_wire(&entry.tld_type);
                if kind == TldType::Unknown {
                    tracing::debug!(
                        tld = entry.name.as_str(),
                        wire_type = entry.tld_type.as_str(),
                        "unrecognized TLD type"
                    );
                }
                TldInfo {
                    name: entry.name.trim_start_matches('.').to_string(),
                    kind,
                }
            })
            .collect())
    }
}

/// Maps a low-level failure onto the public taxonomy.
fn categorize(err: GoDaddyError) -> DomainError {
    match err {
        GoDaddyError::Request(e) if e.is_builder() => DomainError::InvalidRequest(e.to_string()),
        GoDaddyError::Request(e) => DomainError::TransientNetwork(e),
        GoDaddyError::Status { status: 401 | 403, .. } => {
            let message = err
                .api_message()
                .unwrap_or_else(|| "credentials rejected".to_string());
            DomainError::Authentication(message)
        }
        GoDaddyError::Status {
            status: 429,
            retry_after,
            ..
        } => {
            tracing::warn!(?retry_after, "registrar API rate limit hit");
            DomainError::RateLimited { retry_after }
        }
        GoDaddyError::Status { status, body, .. } => DomainError::Upstream { status, body },
        GoDaddyError::Decode { source, body } => DomainError::MalformedResponse {
            reason: source.to_string(),
            body,
        },
        GoDaddyError::InvalidUrl(message) => DomainError::InvalidRequest(message),
        GoDaddyError::InvalidHeader(e) => DomainError::Authentication(e.to_string()),
    }
}

impl From<GoDaddyError> for DomainError {
    fn from(err: GoDaddyError) -> Self {
        categorize(err)
    }
}

fn malformed(err: PriceError, value: &Value) -> DomainError {
    DomainError::MalformedResponse {
        reason: err.to_string(),
        body: value.to_string(),
    }
}

fn normalize_suggestion(entry: api::SuggestionEntry) -> Result<DomainSuggestion, DomainError> {
    let missing = |field: &str| DomainError::MalformedResponse {
        reason: format!("suggestion for {} has no {}", entry.domain, field),
        body: entry.domain.clone(),
    };

    let value = entry.price.as_ref().ok_or_else(|| missing("price"))?;
    let (price, tagged_currency) = normalize_price(value).map_err(|e| malformed(e, value))?;
    let currency = tagged_currency
        .or_else(|| entry.currency.clone())
        .ok_or_else(|| missing("currency"))?;

    Ok(DomainSuggestion {
        domain: entry.domain,
        available: entry.available.unwrap_or(false),
        price,
        currency,
    })
}

/// Converts a wire price into micro-units.
///
/// Integers are already micro-units. Fractional numbers, strings and
/// `{"amount": .., "currency": ..}` objects hold decimal major units. The
/// second element is the currency carried by a tagged object.
pub fn normalize_price(value: &Value) -> Result<(Micros, Option<String>), PriceError> {
    match value {
        Value::Number(n) => match n.as_u64() {
            Some(micros) => Ok((Micros::new(micros), None)),
            None => decimal_number(n).map(|m| (m, None)),
        },
        Value::String(s) => Micros::from_decimal_str(s).map(|m| (m, None)),
        Value::Object(map) => {
            let amount = map
                .get("amount")
                .ok_or_else(|| PriceError::Empty(value.to_string()))?;
            let price = match amount {
                Value::Number(n) => decimal_number(n)?,
                Value::String(s) => Micros::from_decimal_str(s)?,
                other => return Err(PriceError::InvalidCharacter(other.to_string())),
            };
            let currency = map
                .get("currency")
                .and_then(Value::as_str)
                .map(str::to_string);
            Ok((price, currency))
        }
        other => Err(PriceError::InvalidCharacter(other.to_string())),
    }
}

/// A JSON number read as decimal major units.
fn decimal_number(n: &serde_json::Number) -> Result<Micros, PriceError> {
    if n.as_i64().is_some_and(|v| v < 0) || n.as_f64().is_some_and(|v| v < 0.0) {
        return Err(PriceError::Negative(n.to_string()));
    }
    match n.as_u64() {
        Some(units) => {
            Micros::from_whole_units(units).ok_or_else(|| PriceError::Overflow(n.to_string()))
        }
        None => Micros::from_decimal_str(&n.to_string()),
    }
}
