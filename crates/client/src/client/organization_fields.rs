//! Organization field API methods.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ListOptions, ZendeskClient, not_found};
use crate::error::Result;
use crate::models::{OrganizationField, Page};

#[derive(Debug, Serialize, Deserialize)]
struct OrganizationFieldEnvelope {
    organization_field: OrganizationField,
}

#[derive(Debug, Deserialize)]
struct OrganizationFieldListEnvelope {
    #[serde(default)]
    organization_fields: Vec<OrganizationField>,
    #[serde(flatten)]
    page: Page,
}

impl ZendeskClient {
    /// List organization fields on the account.
    pub async fn list_organization_fields(
        &self,
        options: &ListOptions,
    ) -> Result<(Vec<OrganizationField>, Page)> {
        debug!("Listing organization fields");
        let envelope: OrganizationFieldListEnvelope = self
            .get_with_query("/organization_fields.json", options)
            .await?;
        Ok((envelope.organization_fields, envelope.page))
    }

    /// Get a single organization field by id.
    pub async fn get_organization_field(&self, id: i64) -> Result<OrganizationField> {
        debug!("Getting organization field: {}", id);
        let envelope: OrganizationFieldEnvelope = self
            .get(&format!("/organization_fields/{id}.json"))
            .await
            .map_err(|e| not_found(e, format!("organization field {id}")))?;
        Ok(envelope.organization_field)
    }

    /// Create an organization field.
    pub async fn create_organization_field(
        &self,
        field: OrganizationField,
    ) -> Result<OrganizationField> {
        debug!("Creating organization field: {}", field.key);
        let body = OrganizationFieldEnvelope {
            organization_field: field,
        };
        let envelope: OrganizationFieldEnvelope =
            self.post("/organization_fields.json", &body).await?;
        Ok(envelope.organization_field)
    }

    /// Replace an organization field with the given state.
    pub async fn update_organization_field(
        &self,
        id: i64,
        field: OrganizationField,
    ) -> Result<OrganizationField> {
        debug!("Updating organization field: {}", id);
        let body = OrganizationFieldEnvelope {
            organization_field: field,
        };
        let envelope: OrganizationFieldEnvelope = self
            .put(&format!("/organization_fields/{id}.json"), &body)
            .await
            .map_err(|e| not_found(e, format!("organization field {id}")))?;
        Ok(envelope.organization_field)
    }

    /// Delete an organization field by id.
    pub async fn delete_organization_field(&self, id: i64) -> Result<()> {
        debug!("Deleting organization field: {}", id);
        self.delete(&format!("/organization_fields/{id}.json"))
            .await
            .map_err(|e| not_found(e, format!("organization field {id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_envelope_tolerates_missing_pagination() {
        let envelope: OrganizationFieldListEnvelope = serde_json::from_value(json!({
            "organization_fields": []
        }))
        .unwrap();
        assert!(envelope.organization_fields.is_empty());
        assert_eq!(envelope.page.count, None);
    }
}
