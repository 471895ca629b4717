//! Unit tests for core value types.
//!
//! Tests DomainName, Micros, TldType, Environment and CredentialTier.

use regdomains::types::{DomainNameError, MAX_DOMAIN_LEN, MAX_LABEL_LEN, MICROS_PER_UNIT};
use regdomains::{CredentialTier, DomainName, Environment, Micros, PriceError, TldType};

// =============================================================================
// DomainName Tests
// =============================================================================

#[test]
fn test_domain_name_creation() {
    let name = DomainName::parse("www.example.com").unwrap();
    assert_eq!(name.as_str(), "www.example.com");
    assert_eq!(name.labels().collect::<Vec<_>>(), vec!["www", "example", "com"]);
    assert_eq!(name.tld(), "com");
    assert_eq!(name.to_string(), "www.example.com");
}

#[test]
fn test_domain_name_label_limits() {
    // Max length is OK
    let max = format!("{}.com", "a".repeat(MAX_LABEL_LEN));
    assert!(DomainName::parse(&max).is_ok());

    // Too long
    let long = format!("{}.com", "a".repeat(MAX_LABEL_LEN + 1));
    assert!(matches!(
        DomainName::parse(&long),
        Err(DomainNameError::LabelTooLong { len: 64, .. })
    ));
}

#[test]
fn test_domain_name_total_limit() {
    // 4 labels of 63 plus 3 dots = 255, two over
    let label = "a".repeat(63);
    let too_long = [label.as_str(); 4].join(".");
    assert_eq!(
        DomainName::parse(&too_long),
        Err(DomainNameError::TooLong(255))
    );

    // 3 labels of 63, one of 61, 3 dots = 253
    let exact = format!("{}.{}", [label.as_str(); 3].join("."), "b".repeat(61));
    assert_eq!(exact.len(), MAX_DOMAIN_LEN);
    assert!(DomainName::parse(&exact).is_ok());
}

#[test]
fn test_domain_name_requires_dot() {
    assert_eq!(DomainName::parse("com"), Err(DomainNameError::MissingDot));
    assert_eq!(DomainName::parse("com."), Err(DomainNameError::MissingDot));
}

#[test]
fn test_domain_name_from_str() {
    let name: DomainName = "example.io".parse().unwrap();
    assert_eq!(name.tld(), "io");
    assert!("under_score.com".parse::<DomainName>().is_err());
}

// =============================================================================
// Micros Tests
// =============================================================================

#[test]
fn test_micros_round_trip() {
    let price = Micros::from_decimal_str("$1,299.00").unwrap();
    assert_eq!(price.as_u64(), 1_299_000_000);
    assert_eq!(price.as_u64() / MICROS_PER_UNIT, 1299);
    assert_eq!(price.fractional_micros(), 0);
    assert_eq!(price.to_string(), "1299.00");
}

#[test]
fn test_micros_decimal_formats() {
    assert_eq!(Micros::from_decimal_str("12.99"), Ok(Micros::new(12_990_000)));
    assert_eq!(Micros::from_decimal_str("1299.00 USD"), Ok(Micros::new(1_299_000_000)));
    assert_eq!(Micros::from_decimal_str("€7"), Ok(Micros::new(7_000_000)));
    assert_eq!(Micros::from_decimal_str("¥1,500"), Ok(Micros::new(1_500_000_000)));
    assert_eq!(Micros::from_decimal_str("0.000001"), Ok(Micros::new(1)));
    assert_eq!(
        Micros::from_decimal_str("5.1000000000"),
        Ok(Micros::new(5_100_000))
    );
}

#[test]
fn test_micros_rejections() {
    assert!(matches!(Micros::from_decimal_str(""), Err(PriceError::Empty(_))));
    assert!(matches!(Micros::from_decimal_str("USD"), Err(PriceError::Empty(_))));
    assert!(matches!(
        Micros::from_decimal_str("-1.00"),
        Err(PriceError::Negative(_))
    ));
    assert!(matches!(
        Micros::from_decimal_str("0.0000001"),
        Err(PriceError::TooPrecise(_))
    ));
    assert!(matches!(
        Micros::from_decimal_str("1.2.3"),
        Err(PriceError::InvalidCharacter(_))
    ));
    assert!(matches!(
        Micros::from_decimal_str("99999999999999999999"),
        Err(PriceError::Overflow(_))
    ));
    assert!(matches!(Micros::from_decimal_str("-"), Err(PriceError::Empty(_))));
    assert!(matches!(Micros::from_decimal_str(","), Err(PriceError::Empty(_))));
}

#[test]
fn test_micros_rejects_misplaced_commas() {
    for input in ["12,99", "12,99 EUR", "1,2,3", "1,2345.00", ",999", "1,000,", "1234,567"] {
        assert!(
            matches!(Micros::from_decimal_str(input), Err(PriceError::InvalidCharacter(_))),
            "{:?} should be rejected",
            input
        );
    }

    assert_eq!(Micros::from_decimal_str("1,000,000"), Ok(Micros::new(1_000_000 * MICROS_PER_UNIT)));
    assert_eq!(Micros::from_decimal_str("12,345.67"), Ok(Micros::new(12_345_670_000)));
}

#[test]
fn test_micros_ordering() {
    let cheap = Micros::from_decimal_str("9.99").unwrap();
    let pricey = Micros::new(399_900_000);
    assert!(cheap < pricey);
    assert_eq!(Micros::from_whole_units(3), Some(Micros::new(3_000_000)));
    assert_eq!(Micros::from_whole_units(u64::MAX), None);
}

// =============================================================================
// TldType Tests
// =============================================================================

#[test]
fn test_tld_type_from_wire() {
    assert_eq!(TldType::from_wire("GENERIC"), TldType::Generic);
    assert_eq!(TldType::from_wire("COUNTRY_CODE"), TldType::CountryCode);
    assert_eq!(TldType::from_wire("generic"), TldType::Generic);
    assert_eq!(TldType::from_wire("SPONSORED"), TldType::Unknown);
    assert_eq!(TldType::from_wire(""), TldType::Unknown);
}

#[test]
fn test_tld_type_serde_fallback() {
    let kind: TldType = serde_json::from_str("\"COUNTRY_CODE\"").unwrap();
    assert_eq!(kind, TldType::CountryCode);

    let kind: TldType = serde_json::from_str("\"BRAND\"").unwrap();
    assert_eq!(kind, TldType::Unknown);
}

// =============================================================================
// Environment / Tier Tests
// =============================================================================

#[test]
fn test_environment_default_is_production() {
    assert_eq!(Environment::default(), Environment::Production);
    assert!(Environment::Sandbox.is_sandbox());
    assert_eq!(Environment::Sandbox.to_string(), "sandbox");
}

#[test]
fn test_credential_tier_predicates() {
    assert!(CredentialTier::Production.is_production());
    assert!(CredentialTier::Sandbox.is_sandbox());
    assert_eq!(CredentialTier::Production.to_string(), "production");
}
