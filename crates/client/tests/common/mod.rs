//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the Zendesk client. All integration tests should use
//! these utilities to ensure consistency.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON

use secrecy::SecretString;

// Re-export test utilities from zendesk-client
#[allow(unused_imports)]
pub use zendesk_client::testing::load_fixture;

// Re-export commonly used types for test convenience
// These are used via `use common::*;` in test files
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};
#[allow(unused_imports)]
pub use zendesk_client::{ClientError, Credentials, ZendeskClient};

/// Build a client pointed at a mock server, authenticated with a test
/// API token.
pub fn test_client(base_url: &str) -> ZendeskClient {
    ZendeskClient::builder()
        .base_url(base_url)
        .credentials(Credentials::ApiToken {
            email: "agent@example.com".to_string(),
            token: SecretString::new("test-token".to_string().into()),
        })
        .build()
        .expect("test client should build")
}
