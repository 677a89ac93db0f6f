//! User field API methods.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ListOptions, ZendeskClient, not_found};
use crate::error::Result;
use crate::models::{Page, UserField};

#[derive(Debug, Serialize, Deserialize)]
struct UserFieldEnvelope {
    user_field: UserField,
}

#[derive(Debug, Deserialize)]
struct UserFieldListEnvelope {
    #[serde(default)]
    user_fields: Vec<UserField>,
    #[serde(flatten)]
    page: Page,
}

impl ZendeskClient {
    /// List user fields on the account.
    pub async fn list_user_fields(&self, options: &ListOptions) -> Result<(Vec<UserField>, Page)> {
        debug!("Listing user fields");
        let envelope: UserFieldListEnvelope =
            self.get_with_query("/user_fields.json", options).await?;
        Ok((envelope.user_fields, envelope.page))
    }

    /// Get a single user field by id.
    pub async fn get_user_field(&self, id: i64) -> Result<UserField> {
        debug!("Getting user field: {}", id);
        let envelope: UserFieldEnvelope = self
            .get(&format!("/user_fields/{id}.json"))
            .await
            .map_err(|e| not_found(e, format!("user field {id}")))?;
        Ok(envelope.user_field)
    }

    /// Create a user field.
    pub async fn create_user_field(&self, field: UserField) -> Result<UserField> {
        debug!("Creating user field: {}", field.key);
        let body = UserFieldEnvelope { user_field: field };
        let envelope: UserFieldEnvelope = self.post("/user_fields.json", &body).await?;
        Ok(envelope.user_field)
    }

    /// Replace a user field with the given state.
    pub async fn update_user_field(&self, id: i64, field: UserField) -> Result<UserField> {
        debug!("Updating user field: {}", id);
        let body = UserFieldEnvelope { user_field: field };
        let envelope: UserFieldEnvelope = self
            .put(&format!("/user_fields/{id}.json"), &body)
            .await
            .map_err(|e| not_found(e, format!("user field {id}")))?;
        Ok(envelope.user_field)
    }

    /// Delete a user field by id.
    pub async fn delete_user_field(&self, id: i64) -> Result<()> {
        debug!("Deleting user field: {}", id);
        self.delete(&format!("/user_fields/{id}.json"))
            .await
            .map_err(|e| not_found(e, format!("user field {id}")))
    }
}
