//! Dynamic content item and variant API methods.
//!
//! Variants are addressed relative to their owning item
//! (`/dynamic_content/items/{item_id}/variants/{id}.json`); the payload
//! itself never carries the item id, so every variant returned here gets
//! [`DynamicContentVariant::item_id`] stamped from the request path.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ListOptions, ZendeskClient, not_found};
use crate::error::Result;
use crate::models::{
    DynamicContentItem, DynamicContentItemWrite, DynamicContentVariant, DynamicContentVariantWrite,
    Page,
};

#[derive(Debug, Deserialize)]
struct ItemEnvelope {
    item: DynamicContentItem,
}

#[derive(Debug, Serialize)]
struct ItemWriteEnvelope {
    item: DynamicContentItemWrite,
}

#[derive(Debug, Deserialize)]
struct ItemListEnvelope {
    #[serde(default)]
    items: Vec<DynamicContentItem>,
    #[serde(flatten)]
    page: Page,
}

#[derive(Debug, Deserialize)]
struct VariantEnvelope {
    variant: DynamicContentVariant,
}

#[derive(Debug, Serialize)]
struct VariantWriteEnvelope {
    variant: DynamicContentVariantWrite,
}

#[derive(Debug, Deserialize)]
struct VariantListEnvelope {
    #[serde(default)]
    variants: Vec<DynamicContentVariant>,
    #[serde(flatten)]
    page: Page,
}

impl ZendeskClient {
    /// List dynamic content items on the account.
    pub async fn list_dynamic_content_items(
        &self,
        options: &ListOptions,
    ) -> Result<(Vec<DynamicContentItem>, Page)> {
        debug!("Listing dynamic content items");
        let envelope: ItemListEnvelope = self
            .get_with_query("/dynamic_content/items.json", options)
            .await?;
        Ok((envelope.items, envelope.page))
    }

    /// Get a single dynamic content item by id.
    pub async fn get_dynamic_content_item(&self, id: i64) -> Result<DynamicContentItem> {
        debug!("Getting dynamic content item: {}", id);
        let envelope: ItemEnvelope = self
            .get(&format!("/dynamic_content/items/{id}.json"))
            .await
            .map_err(|e| not_found(e, format!("dynamic content item {id}")))?;
        Ok(stamp_item(envelope.item))
    }

    /// Create a dynamic content item, including any seeded variants.
    pub async fn create_dynamic_content_item(
        &self,
        item: DynamicContentItem,
    ) -> Result<DynamicContentItem> {
        debug!("Creating dynamic content item: {}", item.name);
        let body = ItemWriteEnvelope { item: item.into() };
        let envelope: ItemEnvelope = self.post("/dynamic_content/items.json", &body).await?;
        Ok(stamp_item(envelope.item))
    }

    /// Replace a dynamic content item. Variants are managed through the
    /// variant endpoints and are not part of the update payload.
    pub async fn update_dynamic_content_item(
        &self,
        id: i64,
        item: DynamicContentItem,
    ) -> Result<DynamicContentItem> {
        debug!("Updating dynamic content item: {}", id);
        let body = ItemWriteEnvelope { item: item.into() };
        let envelope: ItemEnvelope = self
            .put(&format!("/dynamic_content/items/{id}.json"), &body)
            .await
            .map_err(|e| not_found(e, format!("dynamic content item {id}")))?;
        Ok(stamp_item(envelope.item))
    }

    /// Delete a dynamic content item and all of its variants.
    pub async fn delete_dynamic_content_item(&self, id: i64) -> Result<()> {
        debug!("Deleting dynamic content item: {}", id);
        self.delete(&format!("/dynamic_content/items/{id}.json"))
            .await
            .map_err(|e| not_found(e, format!("dynamic content item {id}")))
    }

    /// List the variants of a dynamic content item.
    pub async fn list_dynamic_content_variants(
        &self,
        item_id: i64,
        options: &ListOptions,
    ) -> Result<(Vec<DynamicContentVariant>, Page)> {
        debug!("Listing variants of dynamic content item: {}", item_id);
        let envelope: VariantListEnvelope = self
            .get_with_query(
                &format!("/dynamic_content/items/{item_id}/variants.json"),
                options,
            )
            .await?;
        let variants = envelope
            .variants
            .into_iter()
            .map(|v| stamp_variant(v, item_id))
            .collect();
        Ok((variants, envelope.page))
    }

    /// Get a single variant of a dynamic content item.
    pub async fn get_dynamic_content_variant(
        &self,
        item_id: i64,
        variant_id: i64,
    ) -> Result<DynamicContentVariant> {
        debug!(
            "Getting variant {} of dynamic content item {}",
            variant_id, item_id
        );
        let envelope: VariantEnvelope = self
            .get(&format!(
                "/dynamic_content/items/{item_id}/variants/{variant_id}.json"
            ))
            .await
            .map_err(|e| {
                not_found(
                    e,
                    format!("variant {variant_id} of dynamic content item {item_id}"),
                )
            })?;
        Ok(stamp_variant(envelope.variant, item_id))
    }

    /// Create a variant under a dynamic content item.
    pub async fn create_dynamic_content_variant(
        &self,
        item_id: i64,
        variant: DynamicContentVariant,
    ) -> Result<DynamicContentVariant> {
        debug!(
            "Creating variant for dynamic content item {} in locale {}",
            item_id, variant.locale_id
        );
        let body = VariantWriteEnvelope {
            variant: variant.into(),
        };
        let envelope: VariantEnvelope = self
            .post(
                &format!("/dynamic_content/items/{item_id}/variants.json"),
                &body,
            )
            .await
            .map_err(|e| not_found(e, format!("dynamic content item {item_id}")))?;
        Ok(stamp_variant(envelope.variant, item_id))
    }

    /// Replace a variant with the given state.
    pub async fn update_dynamic_content_variant(
        &self,
        item_id: i64,
        variant_id: i64,
        variant: DynamicContentVariant,
    ) -> Result<DynamicContentVariant> {
        debug!(
            "Updating variant {} of dynamic content item {}",
            variant_id, item_id
        );
        let body = VariantWriteEnvelope {
            variant: variant.into(),
        };
        let envelope: VariantEnvelope = self
            .put(
                &format!("/dynamic_content/items/{item_id}/variants/{variant_id}.json"),
                &body,
            )
            .await
            .map_err(|e| {
                not_found(
                    e,
                    format!("variant {variant_id} of dynamic content item {item_id}"),
                )
            })?;
        Ok(stamp_variant(envelope.variant, item_id))
    }

    /// Delete a variant of a dynamic content item.
    pub async fn delete_dynamic_content_variant(&self, item_id: i64, variant_id: i64) -> Result<()> {
        debug!(
            "Deleting variant {} of dynamic content item {}",
            variant_id, item_id
        );
        self.delete(&format!(
            "/dynamic_content/items/{item_id}/variants/{variant_id}.json"
        ))
        .await
        .map_err(|e| {
            not_found(
                e,
                format!("variant {variant_id} of dynamic content item {item_id}"),
            )
        })
    }
}

/// Fill in `item_id` on every variant nested in an item payload.
fn stamp_item(mut item: DynamicContentItem) -> DynamicContentItem {
    if let Some(id) = item.id {
        for variant in &mut item.variants {
            variant.item_id = Some(id);
        }
    }
    item
}

fn stamp_variant(mut variant: DynamicContentVariant, item_id: i64) -> DynamicContentVariant {
    variant.item_id = Some(item_id);
    variant
}
