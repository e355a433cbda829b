//! Integration tests for Mercadito.
//!
//! # Running Tests
//!
//! End-to-end tests are `#[ignore]`-gated because they need a running server
//! and database:
//!
//! ```bash
//! # Migrate and start the API
//! cargo run -p mercadito-cli -- migrate
//! cargo run -p mercadito-api
//!
//! # Run everything, including ignored end-to-end tests
//! cargo test -p mercadito-integration-tests -- --include-ignored
//! ```
//!
//! The non-ignored tests exercise the API crate's wire shapes and pure logic
//! and run everywhere.

#![cfg_attr(not(test), forbid(unsafe_code))]

/// Base URL for the API (configurable via environment).
#[must_use]
pub fn api_base_url() -> String {
    std::env::var("MERCADITO_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string())
}
