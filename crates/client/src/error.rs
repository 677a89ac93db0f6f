//! Error types for the Zendesk client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Zendesk client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the Zendesk API.
    #[error("API error ({status}) at {url}: {message}")]
    Api {
        status: u16,
        url: String,
        message: String,
    },

    /// Resource does not exist (HTTP 404).
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Response body could not be decoded into the expected shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Base URL is missing or malformed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Credentials were not supplied to the builder.
    #[error("Missing credentials: {0}")]
    MissingCredentials(String),
}

impl ClientError {
    /// Check whether this error signals that the remote resource is gone.
    ///
    /// Callers use this to distinguish "deleted out of band" from real
    /// failures when reconciling local state.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
