//! Builder for constructing a [`ZendeskClient`].

use std::time::Duration;

use url::Url;

use super::ZendeskClient;
use crate::auth::Credentials;
use crate::error::{ClientError, Result};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builder for [`ZendeskClient`].
///
/// The account is addressed either by a full `base_url` or by a Zendesk
/// `subdomain`, which expands to `https://{subdomain}.zendesk.com/api/v2`.
/// When both are set, `base_url` wins.
#[derive(Debug, Default)]
pub struct ZendeskClientBuilder {
    base_url: Option<String>,
    subdomain: Option<String>,
    credentials: Option<Credentials>,
    timeout: Option<Duration>,
}

impl ZendeskClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the full API base URL, e.g. `https://example.zendesk.com/api/v2`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the Zendesk account subdomain, e.g. `example` for
    /// `example.zendesk.com`.
    pub fn subdomain(mut self, subdomain: impl Into<String>) -> Self {
        self.subdomain = Some(subdomain.into());
        self
    }

    /// Set the credentials used to authenticate every request.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the per-request timeout (default 30 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the configured client.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] when neither `base_url` nor
    /// `subdomain` is set or the resulting URL does not parse, and
    /// [`ClientError::MissingCredentials`] when no credentials were given.
    pub fn build(self) -> Result<ZendeskClient> {
        let base_url = match (self.base_url, self.subdomain) {
            (Some(url), _) => url,
            (None, Some(subdomain)) => format!("https://{subdomain}.zendesk.com/api/v2"),
            (None, None) => {
                return Err(ClientError::InvalidUrl(
                    "either base_url or subdomain is required".to_string(),
                ));
            }
        };
        let base_url = normalize_base_url(&base_url)?;

        let credentials = self.credentials.ok_or_else(|| {
            ClientError::MissingCredentials("credentials are required".to_string())
        })?;

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(ZendeskClient {
            http,
            base_url,
            credentials,
        })
    }
}

/// Validate the base URL and strip any trailing slashes so paths can be
/// appended directly.
fn normalize_base_url(base_url: &str) -> Result<String> {
    let parsed =
        Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ClientError::InvalidUrl(format!(
                "unsupported URL scheme: {other}"
            )));
        }
    }
    Ok(base_url.trim_end_matches('/').to_string())
}
