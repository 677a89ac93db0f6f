//! Ticket form API methods.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ZendeskClient, not_found};
use crate::error::Result;
use crate::models::{Page, TicketForm};

#[derive(Debug, Serialize, Deserialize)]
struct TicketFormEnvelope {
    ticket_form: TicketForm,
}

#[derive(Debug, Deserialize)]
struct TicketFormListEnvelope {
    #[serde(default)]
    ticket_forms: Vec<TicketForm>,
    #[serde(flatten)]
    page: Page,
}

/// Query filters for [`ZendeskClient::list_ticket_forms`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct TicketFormListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_user_visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_to_default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_to_brand: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u64>,
}

impl ZendeskClient {
    /// List ticket forms on the account.
    pub async fn list_ticket_forms(
        &self,
        options: &TicketFormListOptions,
    ) -> Result<(Vec<TicketForm>, Page)> {
        debug!("Listing ticket forms");
        let envelope: TicketFormListEnvelope =
            self.get_with_query("/ticket_forms.json", options).await?;
        Ok((envelope.ticket_forms, envelope.page))
    }

    /// Get a single ticket form by id.
    pub async fn get_ticket_form(&self, id: i64) -> Result<TicketForm> {
        debug!("Getting ticket form: {}", id);
        let envelope: TicketFormEnvelope = self
            .get(&format!("/ticket_forms/{id}.json"))
            .await
            .map_err(|e| not_found(e, format!("ticket form {id}")))?;
        Ok(envelope.ticket_form)
    }

    /// Create a ticket form.
    pub async fn create_ticket_form(&self, form: TicketForm) -> Result<TicketForm> {
        debug!("Creating ticket form: {}", form.name);
        let body = TicketFormEnvelope { ticket_form: form };
        let envelope: TicketFormEnvelope = self.post("/ticket_forms.json", &body).await?;
        Ok(envelope.ticket_form)
    }

    /// Replace a ticket form with the given state.
    pub async fn update_ticket_form(&self, id: i64, form: TicketForm) -> Result<TicketForm> {
        debug!("Updating ticket form: {}", id);
        let body = TicketFormEnvelope { ticket_form: form };
        let envelope: TicketFormEnvelope = self
            .put(&format!("/ticket_forms/{id}.json"), &body)
            .await
            .map_err(|e| not_found(e, format!("ticket form {id}")))?;
        Ok(envelope.ticket_form)
    }

    /// Delete a ticket form by id.
    pub async fn delete_ticket_form(&self, id: i64) -> Result<()> {
        debug!("Deleting ticket form: {}", id);
        self.delete(&format!("/ticket_forms/{id}.json"))
            .await
            .map_err(|e| not_found(e, format!("ticket form {id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_options_serialize_as_flat_query_pairs() {
        let options = TicketFormListOptions {
            active: Some(true),
            associated_to_brand: Some(false),
            per_page: Some(50),
            ..Default::default()
        };
        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(
            value,
            json!({"active": true, "associated_to_brand": false, "per_page": 50})
        );
    }

    #[test]
    fn test_form_envelope_round_trip() {
        let envelope: TicketFormEnvelope = serde_json::from_value(json!({
            "ticket_form": {
                "id": 9,
                "name": "Support request",
                "position": 1,
                "active": true,
                "end_user_visible": true,
                "default": false,
                "ticket_field_ids": [4, 2, 8],
                "in_all_brands": true
            }
        }))
        .unwrap();
        assert_eq!(envelope.ticket_form.ticket_field_ids, vec![4, 2, 8]);

        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["ticket_form"]["name"], "Support request");
    }
}
