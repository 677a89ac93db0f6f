//! The `zendesk_dynamic_content` resource.
//!
//! Items cannot be created without at least one variant, so Create seeds a
//! single placeholder variant in the item's locale. Real per-locale text is
//! managed through `zendesk_dynamic_content_variant`, which is also why
//! Update never touches variants: replacing them here would race the
//! variant resources.

use futures::future::BoxFuture;
use tracing::debug;
use zendesk_client::{DynamicContentItem, DynamicContentVariant, ZendeskClient};

use crate::data::{AttrValue, ResourceData};
use crate::error::Result;
use crate::schema::{AttrKind, Attribute, Schema};

use super::{created_id, require_id, state_id};

/// Content of the variant seeded at item creation.
pub(crate) const PLACEHOLDER_CONTENT: &str = "AUTO_GENERATED_CONTENT_ZENDESK_API_LIMITATION";

/// English (United States); used when the item has no locale yet.
const FALLBACK_LOCALE_ID: i64 = 16;

pub(crate) fn schema() -> Schema {
    Schema::new(vec![
        Attribute::computed("url", AttrKind::String),
        Attribute::required("name", AttrKind::String),
        Attribute::computed("locale_id", AttrKind::Int),
    ])
}

pub(crate) fn unmarshal_dynamic_content_item(data: &dyn ResourceData) -> Result<DynamicContentItem> {
    Ok(DynamicContentItem {
        id: state_id(data)?,
        name: data.get_string("name")?.unwrap_or_default(),
        placeholder: None,
        default_locale_id: data.get_i64("locale_id")?.unwrap_or(FALLBACK_LOCALE_ID),
        outdated: false,
        variants: Vec::new(),
        created_at: None,
        updated_at: None,
        url: data.get_string("url")?,
    })
}

pub(crate) fn marshal_dynamic_content_item(
    item: &DynamicContentItem,
    data: &mut dyn ResourceData,
) -> Result<()> {
    data.set("url", AttrValue::from(item.url.clone()))?;
    data.set("name", AttrValue::from(item.name.clone()))?;
    data.set("locale_id", AttrValue::from(item.default_locale_id))?;
    Ok(())
}

fn seed_variant(locale_id: i64) -> DynamicContentVariant {
    DynamicContentVariant {
        id: None,
        content: PLACEHOLDER_CONTENT.to_string(),
        locale_id,
        item_id: None,
        outdated: false,
        active: true,
        default: true,
        created_at: None,
        updated_at: None,
        url: None,
    }
}

pub(crate) fn create<'a>(
    client: &'a ZendeskClient,
    data: &'a mut dyn ResourceData,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let mut item = unmarshal_dynamic_content_item(data)?;
        item.variants = vec![seed_variant(item.default_locale_id)];
        let created = client.create_dynamic_content_item(item).await?;
        let id = created_id(created.id)?;
        data.set_id(&id.to_string());
        marshal_dynamic_content_item(&created, data)
    })
}

pub(crate) fn read<'a>(
    client: &'a ZendeskClient,
    data: &'a mut dyn ResourceData,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let id = require_id(data)?;
        match client.get_dynamic_content_item(id).await {
            Ok(found) => marshal_dynamic_content_item(&found, data),
            Err(err) if err.is_not_found() => {
                debug!("Dynamic content item {} is gone, clearing state", id);
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
        let id = require_id(data)?;
        let item = unmarshal_dynamic_content_item(data)?;
        let updated = client.update_dynamic_content_item(id, item).await?;
        marshal_dynamic_content_item(&updated, data)
    })
}

pub(crate) fn delete<'a>(
    client: &'a ZendeskClient,
    data: &'a mut dyn ResourceData,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let id = require_id(data)?;
        client.delete_dynamic_content_item(id).await?;
        Ok(())
    })
}
