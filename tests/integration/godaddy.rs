//! Integration tests for the GoDaddy domains API.
//!
//! These tests require real GoDaddy credentials and are ignored by default.
//! To run them:
//!
//! 1. Create a `.env` file in the project root (see `.env.example`)
//!
//! 2. Run with: `cargo test -- --ignored`
//!
//! # Environment Variables
//!
//! | Variable | Required | Description |
//! |----------|----------|-------------|
//! | `GODADDY_API_KEY` | Yes | API key (a `test_` prefix marks it as a placeholder) |
//! | `GODADDY_API_SECRET` | Yes | API secret |
//! | `GODADDY_USE_SANDBOX` | No | `true` to target the OTE endpoint |
//!
//! Tests skip themselves when the credentials are placeholders.

use std::env;

use regdomains::{ClientConfig, Credentials, DomainClient, DomainError, Environment, TldType};

use crate::common::constants::{SAMPLE_DOMAIN, SAMPLE_QUERY};
use crate::common::has_real_credentials;

/// Helper to build a live client.
/// Returns None if production-tier credentials are not available.
fn get_test_client() -> Option<DomainClient> {
    if !has_real_credentials() {
        println!("Skipping: real GoDaddy API credentials not found");
        return None;
    }

    let credentials = Credentials::from_env()?;
    let environment = match env::var("GODADDY_USE_SANDBOX").as_deref() {
        Ok("true") | Ok("1") => Environment::Sandbox,
        _ => Environment::Production,
    };

    DomainClient::with_config(credentials, ClientConfig::new().environment(environment)).ok()
}

#[tokio::test]
#[ignore = "requires GODADDY credentials in .env"]
async fn test_check_domain() {
    let Some(client) = get_test_client() else {
        return;
    };

    match client.check_domain(SAMPLE_DOMAIN).await {
        Ok(result) => {
            println!(
                "{}: available={} definitive={} period={}",
                result.domain, result.available, result.definitive, result.period
            );
            assert_eq!(result.domain, SAMPLE_DOMAIN);
            assert!(!result.available, "example.com should never be available");
        }
        Err(DomainError::RateLimited { retry_after }) => {
            println!("Rate limited (retry after {:?}), not failing", retry_after);
        }
        Err(e) => panic!("Failed to check domain: {:?}", e),
    }
}

#[tokio::test]
#[ignore = "requires GODADDY credentials in .env"]
async fn test_suggest_domains() {
    let Some(client) = get_test_client() else {
        return;
    };

    let suggestions = client
        .suggest_domains(SAMPLE_QUERY, 5)
        .await
        .expect("Failed to fetch suggestions");

    println!("Found {} suggestions", suggestions.len());
    for s in &suggestions {
        println!("  - {} ({} {})", s.domain, s.price, s.currency);
    }
    assert!(suggestions.len() <= 5);
}

#[tokio::test]
#[ignore = "requires GODADDY credentials in .env"]
async fn test_list_tlds() {
    let Some(client) = get_test_client() else {
        return;
    };

    let tlds = client.list_tlds().await.expect("Failed to list TLDs");

    println!("Found {} TLDs", tlds.len());
    assert!(tlds.iter().any(|t| t.name == "com"));
    assert!(tlds.iter().all(|t| !t.name.starts_with('.')));

    let unknown = tlds.iter().filter(|t| t.kind == TldType::Unknown).count();
    println!("  {} with an unrecognized type", unknown);
}

/// Test that authentication failure is handled properly.
#[tokio::test]
#[ignore = "sends a request to the live GoDaddy API"]
async fn test_invalid_credentials() {
    let client = DomainClient::new(Credentials::new("invalid_key", "invalid_secret"))
        .expect("Client creation should succeed");

    let result = client.list_tlds().await;

    assert!(
        matches!(result, Err(DomainError::Authentication(_))),
        "Expected authentication error, got {:?}",
        result
    );
}
