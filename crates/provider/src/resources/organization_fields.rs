//! The `zendesk_organization_field` resource.
//!
//! Custom fields on organizations. Shares the user field shape, with two
//! differences that matter to the mapping: option order is not meaningful
//! (the option list is a set), and option ids are server-owned, so there
//! is no `-1` placeholder and the ids come back verbatim. The field `type`
//! is write-once here too.

use futures::future::BoxFuture;
use tracing::debug;
use zendesk_client::{CustomFieldOption, FieldType, OrganizationField, ZendeskClient};

use crate::data::{AttrValue, ResourceData};
use crate::error::{ProviderError, Result};
use crate::schema::{AttrKind, Attribute, Constraint, Schema};

use super::user_fields::{field_type_from_config, raw_or_display};
use super::{
    block_opt_i64, block_str, created_id, custom_field_options_to_attr, require_id, state_id,
};

pub(crate) fn schema() -> Schema {
    Schema::new(vec![
        Attribute::computed("url", AttrKind::String),
        Attribute::required("type", AttrKind::String)
            .with_constraint(Constraint::OneOf(&FieldType::NAMES)),
        Attribute::required("title", AttrKind::String),
        Attribute::required("key", AttrKind::String),
        Attribute::optional_computed("description", AttrKind::String),
        // positions 0 to 7 are reserved for system fields
        Attribute::optional_computed("position", AttrKind::Int)
            .with_constraint(Constraint::IntAtLeast(8)),
        Attribute::optional("active", AttrKind::Bool).with_default(true),
        Attribute::optional_computed("regexp_for_validation", AttrKind::String),
        Attribute::optional("tag", AttrKind::String),
        Attribute::optional("custom_field_option", AttrKind::Block),
        Attribute::computed("rendered_title", AttrKind::String),
        Attribute::computed("rendered_description", AttrKind::String),
    ])
}

pub(crate) fn unmarshal_organization_field(data: &dyn ResourceData) -> Result<OrganizationField> {
    let title = data.get_string("title")?.unwrap_or_default();
    let description = data.get_string("description")?;
    Ok(OrganizationField {
        id: state_id(data)?,
        key: data.get_string("key")?.unwrap_or_default(),
        kind: field_type_from_config(data)?,
        title: title.clone(),
        raw_title: Some(title),
        description: description.clone(),
        raw_description: description,
        position: data.get_i64("position")?,
        active: data.get_bool("active")?.unwrap_or(false),
        regexp_for_validation: data.get_string("regexp_for_validation")?,
        tag: data.get_string("tag")?,
        custom_field_options: options_from_config(data)?,
        created_at: None,
        updated_at: None,
        url: data.get_string("url")?,
    })
}

pub(crate) fn marshal_organization_field(
    field: &OrganizationField,
    data: &mut dyn ResourceData,
) -> Result<()> {
    data.set("url", AttrValue::from(field.url.clone()))?;
    data.set("type", AttrValue::from(field.kind.as_str()))?;
    data.set("title", AttrValue::from(raw_or_display(&field.raw_title, &field.title)))?;
    data.set("rendered_title", AttrValue::from(field.title.clone()))?;
    data.set("key", AttrValue::from(field.key.clone()))?;
    let description = match &field.raw_description {
        Some(raw) if !raw.is_empty() => Some(raw.clone()),
        _ => field.description.clone(),
    };
    data.set("description", AttrValue::from(description))?;
    data.set(
        "rendered_description",
        AttrValue::from(field.description.clone()),
    )?;
    data.set("position", AttrValue::from(field.position))?;
    data.set("active", AttrValue::from(field.active))?;
    data.set(
        "regexp_for_validation",
        AttrValue::from(field.regexp_for_validation.clone()),
    )?;
    data.set("tag", AttrValue::from(field.tag.clone()))?;
    data.set(
        "custom_field_option",
        custom_field_options_to_attr(&field.custom_field_options),
    )?;
    Ok(())
}

/// Option blocks with server-owned ids: whatever id is in state goes out
/// as-is, and a block without one simply has none yet.
fn options_from_config(data: &dyn ResourceData) -> Result<Vec<CustomFieldOption>> {
    let Some(blocks) = data.get_block_list("custom_field_option")? else {
        return Ok(Vec::new());
    };
    let mut options = Vec::with_capacity(blocks.len());
    for block in &blocks {
        options.push(CustomFieldOption {
            id: block_opt_i64(block, "custom_field_option", "id")?,
            name: block_str(block, "custom_field_option", "name")?,
            value: block_str(block, "custom_field_option", "value")?,
        });
    }
    Ok(options)
}

pub(crate) fn create<'a>(
    client: &'a ZendeskClient,
    data: &'a mut dyn ResourceData,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let field = unmarshal_organization_field(data)?;
        let created = client.create_organization_field(field).await?;
        let id = created_id(created.id)?;
        data.set_id(&id.to_string());
        marshal_organization_field(&created, data)
    })
}

pub(crate) fn read<'a>(
    client: &'a ZendeskClient,
    data: &'a mut dyn ResourceData,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let id = require_id(data)?;
        match client.get_organization_field(id).await {
            Ok(found) => marshal_organization_field(&found, data),
            Err(err) if err.is_not_found() => {
                debug!("Organization field {} is gone, clearing state", id);
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
        if data.has_change("type") {
            debug!("Rejecting organization field type change before any request");
            return Err(ProviderError::Precondition(
                "organization field \"type\" is write-once and cannot be changed after creation"
                    .to_string(),
            ));
        }
        let id = require_id(data)?;
        let field = unmarshal_organization_field(data)?;
        let updated = client.update_organization_field(id, field).await?;
        marshal_organization_field(&updated, data)
    })
}

pub(crate) fn delete<'a>(
    client: &'a ZendeskClient,
    data: &'a mut dyn ResourceData,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let id = require_id(data)?;
        client.delete_organization_field(id).await?;
        Ok(())
    })
}
