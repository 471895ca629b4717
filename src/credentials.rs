//! API key/secret pair.

use std::env;
use std::fmt;

use crate::error::DomainError;
use crate::types::CredentialTier;

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "GODADDY_API_KEY";

/// Environment variable holding the API secret.
pub const API_SECRET_VAR: &str = "GODADDY_API_SECRET";

/// Key prefix reserved for placeholder credentials.
pub const PLACEHOLDER_KEY_PREFIX: &str = "test_";

/// A registrar API key and secret.
///
/// The secret never appears in `Debug` output.
///
/// # Example
///
/// ```
/// use regdomains::{CredentialTier, Credentials};
///
/// let creds = Credentials::new("test_key_12345", "test_secret_67890");
/// assert_eq!(creds.tier(), CredentialTier::Sandbox);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    key: String,
    secret: String,
}

impl Credentials {
    /// Creates a credential pair.
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }

    /// Reads `GODADDY_API_KEY` and `GODADDY_API_SECRET`.
    ///
    /// Returns `None` if either variable is unset or not valid unicode.
    pub fn from_env() -> Option<Self> {
        Self::from_env_vars(API_KEY_VAR, API_SECRET_VAR)
    }

    /// Reads the key and secret from the named environment variables.
    pub fn from_env_vars(key_var: &str, secret_var: &str) -> Option<Self> {
        let key = env::var(key_var).ok()?;
        let secret = env::var(secret_var).ok()?;
        Some(Self::new(key, secret))
    }

    /// Returns the API key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the API secret.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Classifies the pair.
    ///
    /// Only a non-empty key without the `test_` prefix, paired with a
    /// non-empty secret, counts as [`CredentialTier::Production`].
    pub fn tier(&self) -> CredentialTier {
        if !self.key.is_empty()
            && !self.secret.is_empty()
            && !self.key.starts_with(PLACEHOLDER_KEY_PREFIX)
        {
            CredentialTier::Production
        } else {
            CredentialTier::Sandbox
        }
    }

    /// Checks that the pair can be sent in an authorization header.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.key.is_empty() || self.secret.is_empty() {
            return Err(DomainError::Authentication(
                "API key and secret must both be set".to_string(),
            ));
        }
        if !is_header_safe(&self.key) || !is_header_safe(&self.secret) {
            return Err(DomainError::Authentication(
                "API key and secret must not contain whitespace or control characters"
                    .to_string(),
            ));
        }
        // ':' separates key from secret in the sso-key header.
        if self.key.contains(':') {
            return Err(DomainError::Authentication(
                "API key must not contain ':'".to_string(),
            ));
        }
        Ok(())
    }

    /// Value of the `Authorization` header.
    pub(crate) fn authorization(&self) -> String {
        format!("sso-key {}:{}", self.key, self.secret)
    }
}

fn is_header_safe(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_graphic())
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .finish()
    }
}
