//! Macro API methods.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ZendeskClient, not_found};
use crate::error::Result;
use crate::models::{Macro, Page};

#[derive(Debug, Serialize, Deserialize)]
struct MacroEnvelope {
    r#macro: Macro,
}

#[derive(Debug, Deserialize)]
struct MacroListEnvelope {
    #[serde(default)]
    macros: Vec<Macro>,
    #[serde(flatten)]
    page: Page,
}

/// Query filters for [`ZendeskClient::list_macros`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct MacroListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u64>,
}

impl ZendeskClient {
    /// List macros on the account.
    pub async fn list_macros(&self, options: &MacroListOptions) -> Result<(Vec<Macro>, Page)> {
        debug!("Listing macros");
        let envelope: MacroListEnvelope = self.get_with_query("/macros.json", options).await?;
        Ok((envelope.macros, envelope.page))
    }

    /// Get a single macro by id.
    pub async fn get_macro(&self, id: i64) -> Result<Macro> {
        debug!("Getting macro: {}", id);
        let envelope: MacroEnvelope = self
            .get(&format!("/macros/{id}.json"))
            .await
            .map_err(|e| not_found(e, format!("macro {id}")))?;
        Ok(envelope.r#macro)
    }

    /// Create a macro and return it with server-assigned fields filled in.
    pub async fn create_macro(&self, new_macro: Macro) -> Result<Macro> {
        debug!("Creating macro: {}", new_macro.title);
        let body = MacroEnvelope { r#macro: new_macro };
        let envelope: MacroEnvelope = self.post("/macros.json", &body).await?;
        Ok(envelope.r#macro)
    }

    /// Replace a macro with the given state.
    pub async fn update_macro(&self, id: i64, new_macro: Macro) -> Result<Macro> {
        debug!("Updating macro: {}", id);
        let body = MacroEnvelope { r#macro: new_macro };
        let envelope: MacroEnvelope = self
            .put(&format!("/macros/{id}.json"), &body)
            .await
            .map_err(|e| not_found(e, format!("macro {id}")))?;
        Ok(envelope.r#macro)
    }

    /// Delete a macro by id.
    pub async fn delete_macro(&self, id: i64) -> Result<()> {
        debug!("Deleting macro: {}", id);
        self.delete(&format!("/macros/{id}.json"))
            .await
            .map_err(|e| not_found(e, format!("macro {id}")))
    }
}
