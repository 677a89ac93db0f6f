//! The `zendesk_trigger_category` resource.
//!
//! Trigger categories are a thin ordering shell for triggers. The API
//! serializes their ids as decimal strings; the wire codec hides that,
//! so the state id here is the same numeric string as everywhere else.

use futures::future::BoxFuture;
use tracing::debug;
use zendesk_client::{TriggerCategory, ZendeskClient};

use crate::data::{AttrValue, ResourceData};
use crate::error::Result;
use crate::schema::{AttrKind, Attribute, Constraint, Schema};

use super::{created_id, require_id, state_id};

pub(crate) fn schema() -> Schema {
    Schema::new(vec![
        Attribute::required("name", AttrKind::String),
        Attribute::optional_computed("position", AttrKind::Int)
            .with_constraint(Constraint::IntAtLeast(0)),
    ])
}

pub(crate) fn unmarshal_trigger_category(data: &dyn ResourceData) -> Result<TriggerCategory> {
    Ok(TriggerCategory {
        id: state_id(data)?,
        name: data.get_string("name")?.unwrap_or_default(),
        position: data.get_i64("position")?.unwrap_or(0),
    })
}

pub(crate) fn marshal_trigger_category(
    category: &TriggerCategory,
    data: &mut dyn ResourceData,
) -> Result<()> {
    data.set("name", AttrValue::from(category.name.clone()))?;
    data.set("position", AttrValue::from(category.position))?;
    Ok(())
}

pub(crate) fn create<'a>(
    client: &'a ZendeskClient,
    data: &'a mut dyn ResourceData,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let category = unmarshal_trigger_category(data)?;
        let created = client.create_trigger_category(category).await?;
        let id = created_id(created.id)?;
        data.set_id(&id.to_string());
        marshal_trigger_category(&created, data)
    })
}

pub(crate) fn read<'a>(
    client: &'a ZendeskClient,
    data: &'a mut dyn ResourceData,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let id = require_id(data)?;
        match client.get_trigger_category(id).await {
            Ok(found) => marshal_trigger_category(&found, data),
            Err(err) if err.is_not_found() => {
                debug!("Trigger category {} is gone, clearing state", id);
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
        let category = unmarshal_trigger_category(data)?;
        let updated = client.update_trigger_category(id, category).await?;
        marshal_trigger_category(&updated, data)
    })
}

pub(crate) fn delete<'a>(
    client: &'a ZendeskClient,
    data: &'a mut dyn ResourceData,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let id = require_id(data)?;
        client.delete_trigger_category(id).await?;
        Ok(())
    })
}
