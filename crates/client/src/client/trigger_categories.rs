//! Trigger category API methods.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ListOptions, ZendeskClient, not_found};
use crate::error::Result;
use crate::models::{Page, TriggerCategory};

#[derive(Debug, Serialize, Deserialize)]
struct TriggerCategoryEnvelope {
    trigger_category: TriggerCategory,
}

#[derive(Debug, Deserialize)]
struct TriggerCategoryListEnvelope {
    #[serde(default)]
    trigger_categories: Vec<TriggerCategory>,
    #[serde(flatten)]
    page: Page,
}

impl ZendeskClient {
    /// List trigger categories on the account.
    pub async fn list_trigger_categories(
        &self,
        options: &ListOptions,
    ) -> Result<(Vec<TriggerCategory>, Page)> {
        debug!("Listing trigger categories");
        let envelope: TriggerCategoryListEnvelope = self
            .get_with_query("/trigger_categories.json", options)
            .await?;
        Ok((envelope.trigger_categories, envelope.page))
    }

    /// Get a single trigger category by id.
    pub async fn get_trigger_category(&self, id: i64) -> Result<TriggerCategory> {
        debug!("Getting trigger category: {}", id);
        let envelope: TriggerCategoryEnvelope = self
            .get(&format!("/trigger_categories/{id}.json"))
            .await
            .map_err(|e| not_found(e, format!("trigger category {id}")))?;
        Ok(envelope.trigger_category)
    }

    /// Create a trigger category.
    pub async fn create_trigger_category(
        &self,
        category: TriggerCategory,
    ) -> Result<TriggerCategory> {
        debug!("Creating trigger category: {}", category.name);
        let body = TriggerCategoryEnvelope {
            trigger_category: category,
        };
        let envelope: TriggerCategoryEnvelope = self.post("/trigger_categories.json", &body).await?;
        Ok(envelope.trigger_category)
    }

    /// Replace a trigger category with the given state.
    pub async fn update_trigger_category(
        &self,
        id: i64,
        category: TriggerCategory,
    ) -> Result<TriggerCategory> {
        debug!("Updating trigger category: {}", id);
        let body = TriggerCategoryEnvelope {
            trigger_category: category,
        };
        let envelope: TriggerCategoryEnvelope = self
            .put(&format!("/trigger_categories/{id}.json"), &body)
            .await
            .map_err(|e| not_found(e, format!("trigger category {id}")))?;
        Ok(envelope.trigger_category)
    }

    /// Delete a trigger category by id.
    pub async fn delete_trigger_category(&self, id: i64) -> Result<()> {
        debug!("Deleting trigger category: {}", id);
        self.delete(&format!("/trigger_categories/{id}.json"))
            .await
            .map_err(|e| not_found(e, format!("trigger category {id}")))
    }
}
