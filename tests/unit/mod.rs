//! Unit tests for core library types and internal functions.
//!
//! These tests focus on value types, credential handling, and configuration
//! that don't require network access or mock servers.

mod types;
