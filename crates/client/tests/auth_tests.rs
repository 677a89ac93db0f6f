//! Authentication tests.
//!
//! Zendesk basic auth has two flavors: API tokens authenticate as
//! `{email}/token` with the token as the password, passwords authenticate
//! as the plain email.

mod common;

use common::*;
use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{basic_auth, method, path};

fn empty_list() -> serde_json::Value {
    json!({"macros": [], "count": 0})
}

#[tokio::test]
async fn test_api_token_auth_uses_token_suffix() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/macros.json"))
        .and(basic_auth("agent@example.com/token", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_list()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let result = client.list_macros(&Default::default()).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_password_auth_uses_plain_email() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/macros.json"))
        .and(basic_auth("agent@example.com", "hunter2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_list()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ZendeskClient::builder()
        .base_url(mock_server.uri())
        .credentials(Credentials::Password {
            email: "agent@example.com".to_string(),
            password: SecretString::new("hunter2".to_string().into()),
        })
        .build()
        .unwrap();

    let result = client.list_macros(&Default::default()).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_unauthenticated_request_surfaces_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/macros.json"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "Couldn't authenticate you"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let err = client.list_macros(&Default::default()).await.unwrap_err();

    assert!(matches!(err, ClientError::Api { status: 401, .. }));
}
