//! View API methods.
//!
//! Writes go through [`ViewWrite`], the flattened request shape, while
//! responses always come back in the nested read shape.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ListOptions, ZendeskClient, not_found};
use crate::error::Result;
use crate::models::{Page, View, ViewWrite};

#[derive(Debug, Deserialize)]
struct ViewEnvelope {
    view: View,
}

#[derive(Debug, Serialize)]
struct ViewWriteEnvelope {
    view: ViewWrite,
}

#[derive(Debug, Deserialize)]
struct ViewListEnvelope {
    #[serde(default)]
    views: Vec<View>,
    #[serde(flatten)]
    page: Page,
}

impl ZendeskClient {
    /// List views on the account.
    pub async fn list_views(&self, options: &ListOptions) -> Result<(Vec<View>, Page)> {
        debug!("Listing views");
        let envelope: ViewListEnvelope = self.get_with_query("/views.json", options).await?;
        Ok((envelope.views, envelope.page))
    }

    /// Get a single view by id.
    pub async fn get_view(&self, id: i64) -> Result<View> {
        debug!("Getting view: {}", id);
        let envelope: ViewEnvelope = self
            .get(&format!("/views/{id}.json"))
            .await
            .map_err(|e| not_found(e, format!("view {id}")))?;
        Ok(envelope.view)
    }

    /// Create a view. The request is sent in the flattened write shape.
    pub async fn create_view(&self, view: View) -> Result<View> {
        debug!("Creating view: {}", view.title);
        let body = ViewWriteEnvelope { view: view.into() };
        let envelope: ViewEnvelope = self.post("/views.json", &body).await?;
        Ok(envelope.view)
    }

    /// Replace a view with the given state, sent in the write shape.
    pub async fn update_view(&self, id: i64, view: View) -> Result<View> {
        debug!("Updating view: {}", id);
        let body = ViewWriteEnvelope { view: view.into() };
        let envelope: ViewEnvelope = self
            .put(&format!("/views/{id}.json"), &body)
            .await
            .map_err(|e| not_found(e, format!("view {id}")))?;
        Ok(envelope.view)
    }

    /// Delete a view by id.
    pub async fn delete_view(&self, id: i64) -> Result<()> {
        debug!("Deleting view: {}", id);
        self.delete(&format!("/views/{id}.json"))
            .await
            .map_err(|e| not_found(e, format!("view {id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_write_envelope_uses_flattened_shape() {
        let view: View = serde_json::from_value(json!({
            "title": "Pending tickets",
            "active": true,
            "conditions": {
                "all": [{"field": "status", "operator": "is", "value": "pending"}],
                "any": []
            },
            "execution": {
                "columns": [{"id": "subject", "title": "Subject"}]
            }
        }))
        .unwrap();

        let body = ViewWriteEnvelope { view: view.into() };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["view"]["all"][0]["field"], "status");
        assert!(value["view"].get("conditions").is_none());
        assert_eq!(value["view"]["output"]["columns"][0], "subject");
    }
}
