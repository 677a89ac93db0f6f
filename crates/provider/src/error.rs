//! Error types for the provider layer.

use thiserror::Error;
use zendesk_client::ClientError;

/// Result type alias for provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;

/// Errors raised while mapping configuration to API calls.
///
/// `Parse` and `Precondition` are local faults detected before any network
/// traffic; `Client` wraps everything the transport reports back, including
/// the not-found specialization that Read handlers treat as an absence
/// signal rather than a failure.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Configuration value is missing, malformed or of the wrong type.
    #[error("invalid value for \"{attribute}\": {message}")]
    Parse { attribute: String, message: String },

    /// A local invariant was violated, e.g. changing a write-once field.
    #[error("precondition failed: {0}")]
    Precondition(String),

    /// The API call itself failed.
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl ProviderError {
    /// Build a parse error naming the offending attribute.
    pub fn parse(attribute: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            attribute: attribute.into(),
            message: message.into(),
        }
    }

    /// Whether the underlying cause is a remote 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Client(err) if err.is_not_found())
    }
}
