//! The `zendesk_view` resource.
//!
//! Views filter tickets through `all` / `any` condition blocks and project
//! them through a column list. Column entries are polymorphic on the wire:
//! an integer names a custom ticket field, a string names a system field.
//! The mapping keeps each entry's dynamic type intact in both directions,
//! so a numeric key never comes back as its decimal string.

use std::collections::BTreeMap;

use futures::future::BoxFuture;
use tracing::debug;
use zendesk_client::{
    ColumnKey, View, ViewColumn, ViewCondition, ViewConditions, ViewExecution, ZendeskClient,
};

use crate::data::{AttrValue, ResourceData};
use crate::error::{ProviderError, Result};
use crate::schema::{AttrKind, Attribute, Constraint, Schema};

use super::{
    block_str, created_id, require_id, restriction_from_config, restriction_to_attr, state_id,
};

pub(crate) fn schema() -> Schema {
    Schema::new(vec![
        Attribute::computed("url", AttrKind::String),
        Attribute::required("title", AttrKind::String),
        Attribute::optional_computed("description", AttrKind::String),
        // positions 0 to 7 are reserved for system views
        Attribute::optional_computed("position", AttrKind::Int)
            .with_constraint(Constraint::IntAtLeast(8)),
        Attribute::optional("active", AttrKind::Bool).with_default(true),
        Attribute::optional("all", AttrKind::Block),
        Attribute::optional("any", AttrKind::Block),
        Attribute::optional("columns", AttrKind::List),
        Attribute::optional("group_by", AttrKind::String),
        Attribute::optional("sort_by", AttrKind::String),
        Attribute::optional("group_order", AttrKind::String),
        Attribute::optional("sort_order", AttrKind::String),
        Attribute::optional("restrictions", AttrKind::Set),
    ])
}

pub(crate) fn unmarshal_view(data: &dyn ResourceData) -> Result<View> {
    Ok(View {
        id: state_id(data)?,
        title: data.get_string("title")?.unwrap_or_default(),
        active: data.get_bool("active")?.unwrap_or(false),
        description: data.get_string("description")?.unwrap_or_default(),
        position: data.get_i64("position")?.unwrap_or(0),
        restriction: restriction_from_config(data)?,
        conditions: ViewConditions {
            all: conditions_from_config(data, "all")?,
            any: conditions_from_config(data, "any")?,
        },
        execution: ViewExecution {
            columns: columns_from_config(data)?,
            group_by: data.get_string("group_by")?,
            sort_by: data.get_string("sort_by")?,
            group_order: data.get_string("group_order")?,
            sort_order: data.get_string("sort_order")?,
        },
        created_at: None,
        updated_at: None,
        url: data.get_string("url")?,
    })
}

pub(crate) fn marshal_view(view: &View, data: &mut dyn ResourceData) -> Result<()> {
    data.set("url", AttrValue::from(view.url.clone()))?;
    data.set("title", AttrValue::from(view.title.clone()))?;
    data.set("active", AttrValue::from(view.active))?;
    data.set("description", AttrValue::from(view.description.clone()))?;
    data.set("position", AttrValue::from(view.position))?;
    data.set("all", conditions_to_attr(&view.conditions.all))?;
    data.set("any", conditions_to_attr(&view.conditions.any))?;
    data.set("columns", columns_to_attr(&view.execution.columns))?;
    data.set("group_by", AttrValue::from(view.execution.group_by.clone()))?;
    data.set("sort_by", AttrValue::from(view.execution.sort_by.clone()))?;
    data.set("group_order", AttrValue::from(view.execution.group_order.clone()))?;
    data.set("sort_order", AttrValue::from(view.execution.sort_order.clone()))?;
    data.set("restrictions", restriction_to_attr(view.restriction.as_ref()))?;
    Ok(())
}

fn conditions_from_config(data: &dyn ResourceData, attribute: &str) -> Result<Vec<ViewCondition>> {
    let Some(blocks) = data.get_block_list(attribute)? else {
        return Ok(Vec::new());
    };
    let mut conditions = Vec::with_capacity(blocks.len());
    for block in &blocks {
        conditions.push(ViewCondition {
            field: block_str(block, attribute, "field")?,
            operator: block_str(block, attribute, "operator")?,
            value: block_str(block, attribute, "value")?,
        });
    }
    Ok(conditions)
}

fn conditions_to_attr(conditions: &[ViewCondition]) -> AttrValue {
    AttrValue::List(
        conditions
            .iter()
            .map(|condition| {
                let mut entry = BTreeMap::new();
                entry.insert("field".to_string(), AttrValue::from(condition.field.clone()));
                entry.insert(
                    "operator".to_string(),
                    AttrValue::from(condition.operator.clone()),
                );
                entry.insert("value".to_string(), AttrValue::from(condition.value.clone()));
                AttrValue::Map(entry)
            })
            .collect(),
    )
}

fn columns_from_config(data: &dyn ResourceData) -> Result<Vec<ViewColumn>> {
    let Some(items) = data.get_list("columns")? else {
        return Ok(Vec::new());
    };
    let mut columns = Vec::with_capacity(items.len());
    for item in &items {
        let id = match item {
            AttrValue::Int(id) => ColumnKey::CustomField(*id),
            AttrValue::String(key) => ColumnKey::System(key.clone()),
            other => {
                return Err(ProviderError::parse(
                    "columns",
                    format!("expected integer or string entries, got {}", other.kind_name()),
                ));
            }
        };
        columns.push(ViewColumn { id, title: None });
    }
    Ok(columns)
}

fn columns_to_attr(columns: &[ViewColumn]) -> AttrValue {
    AttrValue::List(
        columns
            .iter()
            .map(|column| match &column.id {
                ColumnKey::CustomField(id) => AttrValue::Int(*id),
                ColumnKey::System(key) => AttrValue::from(key.clone()),
            })
            .collect(),
    )
}

pub(crate) fn create<'a>(
    client: &'a ZendeskClient,
    data: &'a mut dyn ResourceData,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let view = unmarshal_view(data)?;
        let created = client.create_view(view).await?;
        let id = created_id(created.id)?;
        data.set_id(&id.to_string());
        marshal_view(&created, data)
    })
}

pub(crate) fn read<'a>(
    client: &'a ZendeskClient,
    data: &'a mut dyn ResourceData,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let id = require_id(data)?;
        match client.get_view(id).await {
            Ok(found) => marshal_view(&found, data),
            Err(err) if err.is_not_found() => {
                debug!("View {} is gone, clearing state", id);
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
        let view = unmarshal_view(data)?;
        let updated = client.update_view(id, view).await?;
        marshal_view(&updated, data)
    })
}

pub(crate) fn delete<'a>(
    client: &'a ZendeskClient,
    data: &'a mut dyn ResourceData,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let id = require_id(data)?;
        client.delete_view(id).await?;
        Ok(())
    })
}
