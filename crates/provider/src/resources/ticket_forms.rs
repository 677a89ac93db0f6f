//! The `zendesk_ticket_form` resource.
//!
//! Ticket forms order the fields agents and end users see. The mapping
//! carries two list-valued attributes that must never bleed into each
//! other: `ticket_field_ids` is the configured field order, while
//! `restricted_brand_ids` is server-derived from brand memberships and
//! only ever written back. Agent conditions nest three levels deep and
//! each child field carries exactly one status requirement block.

use std::collections::BTreeMap;

use futures::future::BoxFuture;
use tracing::debug;
use zendesk_client::{
    AgentCondition, ChildField, RequiredOnStatuses, StatusRequirement, TicketForm, ZendeskClient,
};

use crate::data::{AttrValue, ResourceData};
use crate::error::{ProviderError, Result};
use crate::schema::{AttrKind, Attribute, Schema};

use super::user_fields::raw_or_display;
use super::{
    block_bool, block_i64, block_str, block_str_items, created_id, i64_list, require_id, state_id,
};

pub(crate) fn schema() -> Schema {
    Schema::new(vec![
        Attribute::computed("url", AttrKind::String),
        Attribute::required("name", AttrKind::String),
        Attribute::optional("display_name", AttrKind::String),
        Attribute::optional("position", AttrKind::Int),
        Attribute::optional("active", AttrKind::Bool).with_default(true),
        Attribute::optional("end_user_visible", AttrKind::Bool),
        Attribute::optional("default", AttrKind::Bool),
        Attribute::optional("ticket_field_ids", AttrKind::List),
        Attribute::optional("in_all_brands", AttrKind::Bool).with_default(true),
        Attribute::computed("restricted_brand_ids", AttrKind::Set),
        Attribute::optional("agent_conditions", AttrKind::Block),
        Attribute::computed("rendered_name", AttrKind::String),
        Attribute::computed("rendered_display_name", AttrKind::String),
    ])
}

pub(crate) fn unmarshal_ticket_form(data: &dyn ResourceData) -> Result<TicketForm> {
    let name = data.get_string("name")?.unwrap_or_default();
    let display_name = data.get_string("display_name")?;
    Ok(TicketForm {
        id: state_id(data)?,
        name: name.clone(),
        raw_name: Some(name),
        display_name: display_name.clone(),
        raw_display_name: display_name,
        position: data.get_i64("position")?.unwrap_or(0),
        active: data.get_bool("active")?.unwrap_or(false),
        end_user_visible: data.get_bool("end_user_visible")?.unwrap_or(false),
        default: data.get_bool("default")?.unwrap_or(false),
        ticket_field_ids: i64_list(data, "ticket_field_ids")?,
        in_all_brands: data.get_bool("in_all_brands")?.unwrap_or(false),
        restricted_brand_ids: i64_list(data, "restricted_brand_ids")?,
        agent_conditions: agent_conditions_from_config(data)?,
        url: data.get_string("url")?,
    })
}

pub(crate) fn marshal_ticket_form(form: &TicketForm, data: &mut dyn ResourceData) -> Result<()> {
    data.set("url", AttrValue::from(form.url.clone()))?;
    data.set("name", AttrValue::from(raw_or_display(&form.raw_name, &form.name)))?;
    data.set("rendered_name", AttrValue::from(form.name.clone()))?;
    let display_name = match &form.raw_display_name {
        Some(raw) if !raw.is_empty() => Some(raw.clone()),
        _ => form.display_name.clone(),
    };
    data.set("display_name", AttrValue::from(display_name))?;
    data.set(
        "rendered_display_name",
        AttrValue::from(form.display_name.clone()),
    )?;
    data.set("position", AttrValue::from(form.position))?;
    data.set("active", AttrValue::from(form.active))?;
    data.set("end_user_visible", AttrValue::from(form.end_user_visible))?;
    data.set("default", AttrValue::from(form.default))?;
    data.set("ticket_field_ids", AttrValue::from(form.ticket_field_ids.clone()))?;
    data.set("in_all_brands", AttrValue::from(form.in_all_brands))?;
    data.set(
        "restricted_brand_ids",
        AttrValue::from(form.restricted_brand_ids.clone()),
    )?;
    data.set("agent_conditions", agent_conditions_to_attr(&form.agent_conditions))?;
    Ok(())
}

fn agent_conditions_from_config(data: &dyn ResourceData) -> Result<Vec<AgentCondition>> {
    let Some(blocks) = data.get_block_list("agent_conditions")? else {
        return Ok(Vec::new());
    };
    let mut conditions = Vec::with_capacity(blocks.len());
    for block in &blocks {
        let mut child_fields = Vec::new();
        for child in block_blocks(block, "child_fields")? {
            child_fields.push(ChildField {
                id: block_i64(&child, "agent_conditions", "id")?,
                is_required: block_bool(&child, "agent_conditions", "is_required")?,
                required_on_statuses: status_requirement_from_block(&child)?,
            });
        }
        conditions.push(AgentCondition {
            parent_field_id: block_i64(block, "agent_conditions", "parent_field_id")?,
            value: block_str(block, "agent_conditions", "value")?,
            child_fields,
        });
    }
    Ok(conditions)
}

/// Each child field carries exactly one `required_on_statuses` block.
fn status_requirement_from_block(
    child: &BTreeMap<String, AttrValue>,
) -> Result<RequiredOnStatuses> {
    let entries = block_blocks(child, "required_on_statuses")?;
    let [entry] = entries.as_slice() else {
        return Err(ProviderError::parse(
            "agent_conditions",
            format!(
                "expected exactly one \"required_on_statuses\" block, got {}",
                entries.len()
            ),
        ));
    };
    let name = block_str(entry, "agent_conditions", "type")?;
    let kind = match name.as_str() {
        "NO_STATUSES" => StatusRequirement::NoStatuses,
        "SOME_STATUSES" => StatusRequirement::SomeStatuses,
        "ALL_STATUSES" => StatusRequirement::AllStatuses,
        _ => {
            return Err(ProviderError::parse(
                "agent_conditions",
                format!(
                    "expected \"type\" to be one of NO_STATUSES, SOME_STATUSES, ALL_STATUSES, got {name:?}"
                ),
            ));
        }
    };
    Ok(RequiredOnStatuses {
        kind,
        statuses: block_str_items(entry, "agent_conditions", "statuses")?,
    })
}

/// Read a required nested block list out of a condition entry.
fn block_blocks(
    block: &BTreeMap<String, AttrValue>,
    key: &str,
) -> Result<Vec<BTreeMap<String, AttrValue>>> {
    let items = match block.get(key) {
        Some(AttrValue::List(items)) => items,
        Some(other) => {
            return Err(ProviderError::parse(
                "agent_conditions",
                format!("expected {key:?} to be a block list, got {}", other.kind_name()),
            ));
        }
        None => {
            return Err(ProviderError::parse(
                "agent_conditions",
                format!("entry is missing {key:?}"),
            ));
        }
    };
    let mut blocks = Vec::with_capacity(items.len());
    for item in items {
        match item {
            AttrValue::Map(map) => blocks.push(map.clone()),
            other => {
                return Err(ProviderError::parse(
                    "agent_conditions",
                    format!("expected {key:?} entries to be blocks, got {}", other.kind_name()),
                ));
            }
        }
    }
    Ok(blocks)
}

fn agent_conditions_to_attr(conditions: &[AgentCondition]) -> AttrValue {
    AttrValue::List(
        conditions
            .iter()
            .map(|condition| {
                let mut entry = BTreeMap::new();
                entry.insert(
                    "parent_field_id".to_string(),
                    AttrValue::Int(condition.parent_field_id),
                );
                entry.insert("value".to_string(), AttrValue::from(condition.value.clone()));
                entry.insert(
                    "child_fields".to_string(),
                    AttrValue::List(
                        condition.child_fields.iter().map(child_field_to_attr).collect(),
                    ),
                );
                AttrValue::Map(entry)
            })
            .collect(),
    )
}

fn child_field_to_attr(child: &ChildField) -> AttrValue {
    let requirement = &child.required_on_statuses;
    let mut requirement_entry = BTreeMap::new();
    let kind = match requirement.kind {
        StatusRequirement::NoStatuses => "NO_STATUSES",
        StatusRequirement::SomeStatuses => "SOME_STATUSES",
        StatusRequirement::AllStatuses => "ALL_STATUSES",
    };
    requirement_entry.insert("type".to_string(), AttrValue::from(kind));
    requirement_entry.insert(
        "statuses".to_string(),
        AttrValue::from(requirement.statuses.clone()),
    );

    let mut entry = BTreeMap::new();
    entry.insert("id".to_string(), AttrValue::Int(child.id));
    entry.insert("is_required".to_string(), AttrValue::Bool(child.is_required));
    entry.insert(
        "required_on_statuses".to_string(),
        AttrValue::List(vec![AttrValue::Map(requirement_entry)]),
    );
    AttrValue::Map(entry)
}

pub(crate) fn create<'a>(
    client: &'a ZendeskClient,
    data: &'a mut dyn ResourceData,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let form = unmarshal_ticket_form(data)?;
        let created = client.create_ticket_form(form).await?;
        let id = created_id(created.id)?;
        data.set_id(&id.to_string());
        marshal_ticket_form(&created, data)
    })
}

pub(crate) fn read<'a>(
    client: &'a ZendeskClient,
    data: &'a mut dyn ResourceData,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let id = require_id(data)?;
        match client.get_ticket_form(id).await {
            Ok(found) => marshal_ticket_form(&found, data),
            Err(err) if err.is_not_found() => {
                debug!("Ticket form {} is gone, clearing state", id);
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
        let form = unmarshal_ticket_form(data)?;
        let updated = client.update_ticket_form(id, form).await?;
        marshal_ticket_form(&updated, data)
    })
}

pub(crate) fn delete<'a>(
    client: &'a ZendeskClient,
    data: &'a mut dyn ResourceData,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let id = require_id(data)?;
        client.delete_ticket_form(id).await?;
        Ok(())
    })
}
