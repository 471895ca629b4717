//! Mock-based tests for the registrar client.
//!
//! These tests use wiremock to simulate API responses without hitting real APIs.
