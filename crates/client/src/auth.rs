//! Authentication for the Zendesk API.
//!
//! Zendesk uses HTTP basic auth for both supported credential kinds. API
//! token auth encodes the token into the username as `{email}/token`, with
//! the token itself as the password.

use secrecy::{ExposeSecret, SecretString};

/// Credentials for authenticating with Zendesk.
#[derive(Debug, Clone)]
pub enum Credentials {
    /// API token authentication. Preferred for automation; tokens are
    /// managed in the Zendesk admin interface and can be revoked
    /// independently of the account password.
    ApiToken { email: String, token: SecretString },
    /// Email and password authentication.
    Password {
        email: String,
        password: SecretString,
    },
}

impl Credentials {
    /// The basic-auth username for this credential.
    pub(crate) fn username(&self) -> String {
        match self {
            Self::ApiToken { email, .. } => format!("{email}/token"),
            Self::Password { email, .. } => email.clone(),
        }
    }

    /// The basic-auth password for this credential.
    pub(crate) fn secret(&self) -> &str {
        match self {
            Self::ApiToken { token, .. } => token.expose_secret(),
            Self::Password { password, .. } => password.expose_secret(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_token_username_carries_token_suffix() {
        let creds = Credentials::ApiToken {
            email: "agent@example.com".to_string(),
            token: SecretString::new("t0ken".to_string().into()),
        };
        assert_eq!(creds.username(), "agent@example.com/token");
        assert_eq!(creds.secret(), "t0ken");
    }

    #[test]
    fn test_password_username_is_plain_email() {
        let creds = Credentials::Password {
            email: "agent@example.com".to_string(),
            password: SecretString::new("hunter2".to_string().into()),
        };
        assert_eq!(creds.username(), "agent@example.com");
        assert_eq!(creds.secret(), "hunter2");
    }

    #[test]
    fn test_debug_does_not_leak_secret() {
        let creds = Credentials::ApiToken {
            email: "agent@example.com".to_string(),
            token: SecretString::new("t0ken".to_string().into()),
        };
        let rendered = format!("{creds:?}");
        assert!(!rendered.contains("t0ken"));
    }
}
