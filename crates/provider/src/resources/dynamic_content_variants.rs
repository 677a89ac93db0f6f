//! The `zendesk_dynamic_content_variant` resource.
//!
//! Variants are addressed by two path parameters, so the state id is the
//! composite `"{variant_id}+{item_id}"` — variant first. [`split_variant_id`]
//! and [`join_variant_id`] are the only codec for that format; both halves
//! must be numeric and exactly one `+` separates them.
//!
//! Every variant managed here is written as its item's default variant:
//! the item resource seeds a single placeholder and this resource replaces
//! it, keeping one default variant per item.

use futures::future::BoxFuture;
use tracing::debug;
use zendesk_client::{DynamicContentVariant, ZendeskClient};

use crate::data::{AttrValue, ResourceData};
use crate::error::{ProviderError, Result};
use crate::schema::{AttrKind, Attribute, Schema};

use super::created_id;

pub(crate) fn schema() -> Schema {
    Schema::new(vec![
        Attribute::computed("url", AttrKind::String),
        Attribute::required("content", AttrKind::String),
        Attribute::required("locale_id", AttrKind::Int),
        Attribute::required("dynamic_content_item_id", AttrKind::Int),
        Attribute::required("default", AttrKind::Bool),
    ])
}

/// Split a composite variant id into `(variant_id, item_id)`.
pub fn split_variant_id(raw: &str) -> Result<(i64, i64)> {
    let Some((variant_raw, item_raw)) = raw.split_once('+') else {
        return Err(ProviderError::parse(
            "id",
            format!("expected \"{{variant_id}}+{{item_id}}\", got {raw:?}"),
        ));
    };
    let variant_id = variant_raw.parse::<i64>().map_err(|_| {
        ProviderError::parse("id", format!("expected a numeric variant id, got {variant_raw:?}"))
    })?;
    let item_id = item_raw.parse::<i64>().map_err(|_| {
        ProviderError::parse("id", format!("expected a numeric item id, got {item_raw:?}"))
    })?;
    Ok((variant_id, item_id))
}

/// Inverse of [`split_variant_id`].
pub fn join_variant_id(variant_id: i64, item_id: i64) -> String {
    format!("{variant_id}+{item_id}")
}

pub(crate) fn unmarshal_dynamic_content_variant(
    data: &dyn ResourceData,
) -> Result<DynamicContentVariant> {
    let (variant_id, state_item_id) = match data.id() {
        "" => (None, None),
        raw => {
            let (variant_id, item_id) = split_variant_id(raw)?;
            (Some(variant_id), Some(item_id))
        }
    };
    let item_id = match state_item_id {
        Some(id) => Some(id),
        None => data.get_i64("dynamic_content_item_id")?,
    };
    Ok(DynamicContentVariant {
        id: variant_id,
        content: data.get_string("content")?.unwrap_or_default(),
        locale_id: data.get_i64("locale_id")?.unwrap_or(0),
        item_id,
        outdated: false,
        active: true,
        // one managed variant per item, and it is always the default
        default: true,
        created_at: None,
        updated_at: None,
        url: data.get_string("url")?,
    })
}

pub(crate) fn marshal_dynamic_content_variant(
    variant: &DynamicContentVariant,
    data: &mut dyn ResourceData,
) -> Result<()> {
    data.set("url", AttrValue::from(variant.url.clone()))?;
    data.set("content", AttrValue::from(variant.content.clone()))?;
    data.set("locale_id", AttrValue::from(variant.locale_id))?;
    data.set("dynamic_content_item_id", AttrValue::from(variant.item_id))?;
    data.set("default", AttrValue::from(variant.default))?;
    Ok(())
}

pub(crate) fn create<'a>(
    client: &'a ZendeskClient,
    data: &'a mut dyn ResourceData,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let variant = unmarshal_dynamic_content_variant(data)?;
        let Some(item_id) = variant.item_id else {
            return Err(ProviderError::parse(
                "dynamic_content_item_id",
                "required attribute is missing",
            ));
        };
        let created = client.create_dynamic_content_variant(item_id, variant).await?;
        let variant_id = created_id(created.id)?;
        data.set_id(&join_variant_id(variant_id, item_id));
        marshal_dynamic_content_variant(&created, data)
    })
}

pub(crate) fn read<'a>(
    client: &'a ZendeskClient,
    data: &'a mut dyn ResourceData,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let (variant_id, item_id) = split_variant_id(data.id())?;
        match client.get_dynamic_content_variant(item_id, variant_id).await {
            Ok(found) => marshal_dynamic_content_variant(&found, data),
            Err(err) if err.is_not_found() => {
                debug!(
                    "Variant {} of dynamic content item {} is gone, clearing state",
                    variant_id, item_id
                );
                data.set_id("");
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    })
}

pub(crate) fn update<'a>(
    client: &'a ZendeskClient,
    data: &'a mut dyn ResourceData,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let (variant_id, item_id) = split_variant_id(data.id())?;
        let variant = unmarshal_dynamic_content_variant(data)?;
        let updated = client
            .update_dynamic_content_variant(item_id, variant_id, variant)
            .await?;
        marshal_dynamic_content_variant(&updated, data)
    })
}

pub(crate) fn delete<'a>(
    client: &'a ZendeskClient,
    data: &'a mut dyn ResourceData,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let (variant_id, item_id) = split_variant_id(data.id())?;
        client.delete_dynamic_content_variant(item_id, variant_id).await?;
        Ok(())
    })
}
