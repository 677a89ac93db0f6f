//! Common test utilities for provider integration tests.
//!
//! Lifecycle tests drive a real [`Provider`] against a wiremock server;
//! this module provides the client wiring every test shares.

use secrecy::SecretString;

#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use zendesk_provider::{Credentials, ZendeskClient};

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
