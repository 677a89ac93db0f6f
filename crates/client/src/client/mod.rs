//! Main Zendesk REST API client and API methods.
//!
//! This module provides the primary [`ZendeskClient`] for interacting with
//! the Zendesk Support API v2.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `macros`: Macro methods
//! - `ticket_forms`: Ticket form methods
//! - `user_fields`: User field methods
//! - `organization_fields`: Organization field methods
//! - `views`: View methods
//! - `dynamic_content`: Dynamic content item and variant methods
//! - `trigger_categories`: Trigger category methods
//!
//! # What this module does NOT handle:
//! - Retry, rate limiting or caching. Every method issues exactly one
//!   request; resilience policy belongs to the caller.
//! - Mapping payloads to configuration state (see the provider crate).
//!
//! # Invariants
//! - Non-2xx responses become [`ClientError::Api`] carrying status, URL and
//!   the parsed Zendesk error message.
//! - 404 is translated to [`ClientError::NotFound`] by the per-resource
//!   methods, where the resource kind and id are known.

pub mod builder;

// API method submodules
mod dynamic_content;
mod macros;
mod organization_fields;
mod ticket_forms;
mod trigger_categories;
mod user_fields;
mod views;

pub use macros::MacroListOptions;
pub use ticket_forms::TicketFormListOptions;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::auth::Credentials;
use crate::error::{ClientError, Result};
use crate::models::ErrorBody;

/// Zendesk REST API client.
///
/// # Creating a Client
///
/// Use [`ZendeskClient::builder()`] to create a new client:
///
/// ```rust,ignore
/// use zendesk_client::{Credentials, ZendeskClient};
/// use secrecy::SecretString;
///
/// let client = ZendeskClient::builder()
///     .subdomain("example")
///     .credentials(Credentials::ApiToken {
///         email: "agent@example.com".to_string(),
///         token: SecretString::new("my-token".to_string().into()),
///     })
///     .build()?;
/// ```
#[derive(Debug)]
pub struct ZendeskClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) credentials: Credentials,
}

/// Pagination query options for list endpoints without dedicated filters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u64>,
}

impl ZendeskClient {
    /// Create a new client builder.
    ///
    /// This is the entry point for constructing a [`ZendeskClient`].
    pub fn builder() -> builder::ZendeskClientBuilder {
        builder::ZendeskClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.http.request(method, &url).basic_auth(
            self.credentials.username(),
            Some(self.credentials.secret()),
        )
    }

    pub(crate) async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.request(reqwest::Method::GET, path).send().await?;
        Self::decode(response).await
    }

    pub(crate) async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self
            .request(reqwest::Method::GET, path)
            .query(query)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self
            .request(reqwest::Method::POST, path)
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self
            .request(reqwest::Method::PUT, path)
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let response = self.request(reqwest::Method::DELETE, path).send().await?;
        Self::check(response).await.map(|_| ())
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let response = Self::check(response).await?;
        response.json::<T>().await.map_err(|e| {
            ClientError::InvalidResponse(format!("failed to decode response body: {e}"))
        })
    }

    /// Pass 2xx responses through; turn anything else into an API error
    /// with the Zendesk error body parsed when present.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let url = response.url().to_string();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "could not read error response body".to_string());

        let message = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => parsed.message(),
            Err(_) => body,
        };

        Err(ClientError::Api {
            status,
            url,
            message,
        })
    }
}

/// Map a 404 API error onto [`ClientError::NotFound`] for a known resource.
/// Everything else passes through unchanged.
pub(crate) fn not_found(err: ClientError, resource: String) -> ClientError {
    match err {
        ClientError::Api { status: 404, .. } => ClientError::NotFound(resource),
        other => other,
    }
}
