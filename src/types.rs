//! Validated value types shared by the client.
//!
//! | Type | Constraint |
//! |------|------------|
//! | [`DomainName`] | labels 1-63 octets, total ≤253 octets, at least one dot (RFC 1035 §2.3.4) |
//! | [`Micros`] | non-negative millionths of the major currency unit |
//! | [`TldType`] | generic, country-code, or unknown |

use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum length of a single DNS label (RFC 1035 §2.3.4).
pub const MAX_LABEL_LEN: usize = 63;

/// Maximum length of a domain name in dotted presentation form.
///
/// The 255 octet wire limit minus the leading length octet and the root
/// terminator.
pub const MAX_DOMAIN_LEN: usize = 253;

/// Number of [`Micros`] in one major currency unit.
pub const MICROS_PER_UNIT: u64 = 1_000_000;

/// Registrar API environment.
///
/// Registrars expose a sandbox (for GoDaddy, the "OTE" environment) that
/// accepts the same calls as production without touching real registrations.
///
/// # Example
///
/// ```
/// use regdomains::Environment;
///
/// let env = Environment::Sandbox;
/// assert!(!env.is_production());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Environment {
    /// Production environment.
    #[default]
    Production,
    /// Sandbox/testing environment.
    Sandbox,
}

impl Environment {
    /// Returns `true` if this is the production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Returns `true` if this is the sandbox environment.
    pub fn is_sandbox(&self) -> bool {
        matches!(self, Environment::Sandbox)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Sandbox => write!(f, "sandbox"),
        }
    }
}

/// Classification of a credential pair.
///
/// Computed once when a client is built. `Sandbox` credentials are
/// placeholders (a `test_` prefixed key, or a missing half of the pair);
/// test suites use this to decide whether live network tests can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CredentialTier {
    /// Potentially real credentials.
    Production,
    /// Placeholder credentials.
    Sandbox,
}

impl CredentialTier {
    /// Returns `true` for potentially real credentials.
    pub fn is_production(&self) -> bool {
        matches!(self, CredentialTier::Production)
    }

    /// Returns `true` for placeholder credentials.
    pub fn is_sandbox(&self) -> bool {
        matches!(self, CredentialTier::Sandbox)
    }
}

impl fmt::Display for CredentialTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialTier::Production => write!(f, "production"),
            CredentialTier::Sandbox => write!(f, "sandbox"),
        }
    }
}

/// Reasons a string is rejected as a domain name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainNameError {
    #[error("domain name is empty")]
    Empty,
    #[error("domain name is {0} octets long (max 253)")]
    TooLong(usize),
    #[error("domain name has no dot")]
    MissingDot,
    #[error("domain name contains an empty label")]
    EmptyLabel,
    #[error("label {label:?} is {len} octets long (max 63)")]
    LabelTooLong { label: String, len: usize },
    #[error("label {label:?} starts or ends with a hyphen")]
    HyphenBoundary { label: String },
    #[error("invalid character {0:?}")]
    InvalidCharacter(char),
}

/// A syntactically valid DNS name in dotted form (e.g. `example.com`).
///
/// Validation follows the hostname rules of RFC 1035 §2.3.1: ASCII letters,
/// digits and hyphens, no hyphen at either end of a label. A single trailing
/// dot is accepted and dropped. Case is preserved.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DomainName(String);

impl DomainName {
    /// Parses and validates a dotted domain name.
    pub fn parse(s: &str) -> Result<Self, DomainNameError> {
        let name = s.strip_suffix('.').unwrap_or(s);
        if name.is_empty() {
            return Err(DomainNameError::Empty);
        }
        if name.len() > MAX_DOMAIN_LEN {
            return Err(DomainNameError::TooLong(name.len()));
        }
        if !name.contains('.') {
            return Err(DomainNameError::MissingDot);
        }

        for label in name.split('.') {
            if label.is_empty() {
                return Err(DomainNameError::EmptyLabel);
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(DomainNameError::LabelTooLong {
                    label: label.to_string(),
                    len: label.len(),
                });
            }
            if let Some(c) = label
                .chars()
                .find(|c| !(c.is_ascii_alphanumeric() || *c == '-'))
            {
                return Err(DomainNameError::InvalidCharacter(c));
            }
            if label.starts_with('-') || label.ends_with('-') {
                return Err(DomainNameError::HyphenBoundary {
                    label: label.to_string(),
                });
            }
        }

        Ok(Self(name.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates over the labels, leftmost first.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Returns the top-level label (e.g. `com`).
    pub fn tld(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }

    /// Consumes the name, returning the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl core::str::FromStr for DomainName {
    type Err = DomainNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for DomainName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DomainName({:?})", self.0)
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Category of a top-level domain.
///
/// Wire values are `GENERIC` and `COUNTRY_CODE`; anything else maps to
/// [`TldType::Unknown`] instead of failing the whole listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TldType {
    /// Generic TLD (`com`, `org`, ...).
    Generic,
    /// Country-code TLD (`io`, `de`, ...).
    CountryCode,
    /// A type the client does not recognize.
    #[serde(other)]
    Unknown,
}

impl TldType {
    /// Maps a wire string to a type, case-insensitively.
    pub fn from_wire(s: &str) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "GENERIC" => Self::Generic,
            "COUNTRY_CODE" => Self::CountryCode,
            _ => Self::Unknown,
        }
    }

    /// Returns the wire representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Generic => "GENERIC",
            Self::CountryCode => "COUNTRY_CODE",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for TldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reasons a decimal price string cannot be converted to [`Micros`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceError {
    #[error("price {0:?} contains no amount")]
    Empty(String),
    #[error("price {0:?} is negative")]
    Negative(String),
    #[error("price {0:?} contains an invalid character")]
    InvalidCharacter(String),
    #[error("price {0:?} has more than six significant fractional digits")]
    TooPrecise(String),
    #[error("price {0:?} does not fit in 64 bits of micro-units")]
    Overflow(String),
}

/// A price in millionths of the major currency unit.
///
/// `Micros(1_299_000_000)` is 1299.00 in whatever currency accompanies it.
/// The unit is the same for every currency, so prices compare as integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Micros(u64);

impl Micros {
    /// Zero.
    pub const ZERO: Micros = Micros(0);

    /// Wraps a raw micro-unit amount.
    #[inline]
    pub const fn new(micros: u64) -> Self {
        Self(micros)
    }

    /// Builds an amount from whole major units, returning `None` on overflow.
    #[inline]
    pub const fn from_whole_units(units: u64) -> Option<Self> {
        match units.checked_mul(MICROS_PER_UNIT) {
            Some(m) => Some(Self(m)),
            None => None,
        }
    }

    /// Returns the raw micro-unit amount.
    #[inline]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Whole major units (`price / 1_000_000`).
    #[inline]
    pub const fn whole_units(&self) -> u64 {
        self.0 / MICROS_PER_UNIT
    }

    /// The fractional part, in micro-units.
    #[inline]
    pub const fn fractional_micros(&self) -> u64 {
        self.0 % MICROS_PER_UNIT
    }

    /// Parses a decimal amount in major units.
    ///
    /// Currency symbols or codes around the number and `,` thousands
    /// separators are ignored, so `"$1,299.00"` and `"1299.00 USD"` both
    /// yield `1_299_000_000`. A comma anywhere but a thousands boundary is
    /// rejected rather than guessed at, so `"12,99"` is an error. Conversion
    /// is exact: fractional digits beyond the sixth must be zero.
    pub fn from_decimal_str(input: &str) -> Result<Self, PriceError> {
        let amount = input
            .trim()
            .trim_matches(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | ',' | '-')));

        if !amount.chars().any(|c| c.is_ascii_digit()) {
            return Err(PriceError::Empty(input.to_string()));
        }
        if amount.starts_with('-') {
            return Err(PriceError::Negative(input.to_string()));
        }

        let (whole, frac) = amount.split_once('.').unwrap_or((amount, ""));

        let invalid = || PriceError::InvalidCharacter(input.to_string());
        let overflow = || PriceError::Overflow(input.to_string());

        if !has_valid_grouping(whole) {
            return Err(invalid());
        }

        let mut units: u64 = 0;
        for c in whole.chars().filter(|c| *c != ',') {
            let digit = c.to_digit(10).ok_or_else(invalid)?;
            units = units
                .checked_mul(10)
                .and_then(|u| u.checked_add(u64::from(digit)))
                .ok_or_else(overflow)?;
        }

        if !frac.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let significant = frac.trim_end_matches('0');
        if significant.len() > 6 {
            return Err(PriceError::TooPrecise(input.to_string()));
        }

        let mut fraction: u64 = 0;
        let mut digits = significant.chars();
        for _ in 0..6 {
            let digit = digits.next().and_then(|c| c.to_digit(10)).unwrap_or(0);
            fraction = fraction * 10 + u64::from(digit);
        }

        units
            .checked_mul(MICROS_PER_UNIT)
            .and_then(|m| m.checked_add(fraction))
            .map(Self)
            .ok_or_else(overflow)
    }
}

/// Commas may only separate thousands: a leading group of 1-3 digits, then
/// groups of exactly 3. `"12,99"` (decimal comma) and `"1,2,3"` fail.
fn has_valid_grouping(whole: &str) -> bool {
    if !whole.contains(',') {
        return true;
    }
    let mut groups = whole.split(',');
    let leading_ok = groups.next().is_some_and(|g| (1..=3).contains(&g.len()));
    leading_ok && groups.all(|g| g.len() == 3)
}

impl From<u64> for Micros {
    #[inline]
    fn from(micros: u64) -> Self {
        Self(micros)
    }
}

impl From<Micros> for u64 {
    #[inline]
    fn from(m: Micros) -> Self {
        m.0
    }
}

impl core::str::FromStr for Micros {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal_str(s)
    }
}

impl fmt::Display for Micros {
    /// Renders the decimal amount with at least two fractional digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let frac = format!("{:06}", self.fractional_micros());
        let trimmed = frac.trim_end_matches('0');
        let shown = if trimmed.len() < 2 { &frac[..2] } else { trimmed };
        write!(f, "{}.{}", self.whole_units(), shown)
    }
}
