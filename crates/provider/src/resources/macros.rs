//! The `zendesk_macro` resource.
//!
//! A macro is an ordered list of (field, value) actions plus visibility
//! metadata. Action values are polymorphic: most ticket fields take a
//! single string, multi-valued fields (followers, tag changes, rich
//! comments) take a list of strings. The configured dynamic type is
//! preserved onto the wire and back.

use std::collections::BTreeMap;

use futures::future::BoxFuture;
use tracing::debug;
use zendesk_client::{ActionValue, Macro, MacroAction, ZendeskClient};

use crate::data::{AttrValue, ResourceData};
use crate::error::{ProviderError, Result};
use crate::schema::{AttrKind, Attribute, Constraint, Schema};

use super::{created_id, require_id, restriction_from_config, restriction_to_attr, state_id};

pub(crate) fn schema() -> Schema {
    Schema::new(vec![
        Attribute::computed("url", AttrKind::String),
        Attribute::required("title", AttrKind::String),
        Attribute::required("action", AttrKind::Block),
        Attribute::optional_computed("description", AttrKind::String),
        // positions 0 to 7 are reserved for system rules
        Attribute::optional_computed("position", AttrKind::Int)
            .with_constraint(Constraint::IntAtLeast(8)),
        Attribute::optional("active", AttrKind::Bool).with_default(true),
        Attribute::optional("restrictions", AttrKind::Set),
    ])
}

pub(crate) fn unmarshal_macro(data: &dyn ResourceData) -> Result<Macro> {
    Ok(Macro {
        id: state_id(data)?,
        title: data.get_string("title")?.unwrap_or_default(),
        active: data.get_bool("active")?.unwrap_or(false),
        actions: actions_from_config(data)?,
        description: data.get_string("description")?,
        position: data.get_i64("position")?,
        restriction: restriction_from_config(data)?,
        created_at: None,
        updated_at: None,
        url: data.get_string("url")?,
    })
}

pub(crate) fn marshal_macro(item: &Macro, data: &mut dyn ResourceData) -> Result<()> {
    data.set("url", AttrValue::from(item.url.clone()))?;
    data.set("title", AttrValue::from(item.title.clone()))?;
    data.set("active", AttrValue::from(item.active))?;
    data.set("action", actions_to_attr(&item.actions))?;
    data.set("description", AttrValue::from(item.description.clone()))?;
    data.set("position", AttrValue::from(item.position))?;
    data.set(
        "restrictions",
        restriction_to_attr(item.restriction.as_ref()),
    )?;
    Ok(())
}

fn actions_from_config(data: &dyn ResourceData) -> Result<Vec<MacroAction>> {
    let Some(blocks) = data.get_block_list("action")? else {
        return Ok(Vec::new());
    };
    let mut actions = Vec::with_capacity(blocks.len());
    for block in &blocks {
        actions.push(MacroAction {
            field: super::block_str(block, "action", "field")?,
            value: action_value_from_block(block)?,
        });
    }
    Ok(actions)
}

fn action_value_from_block(block: &BTreeMap<String, AttrValue>) -> Result<ActionValue> {
    match block.get("value") {
        Some(AttrValue::String(text)) => Ok(ActionValue::Text(text.clone())),
        Some(AttrValue::List(items)) => {
            let mut texts = Vec::with_capacity(items.len());
            for item in items {
                match item.as_str() {
                    Some(text) => texts.push(text.to_string()),
                    None => {
                        return Err(ProviderError::parse(
                            "action",
                            format!(
                                "expected \"value\" list entries to be strings, got {}",
                                item.kind_name()
                            ),
                        ));
                    }
                }
            }
            Ok(ActionValue::Items(texts))
        }
        Some(other) => Err(ProviderError::parse(
            "action",
            format!(
                "expected \"value\" to be a string or a list of strings, got {}",
                other.kind_name()
            ),
        )),
        None => Err(ProviderError::parse("action", "entry is missing \"value\"")),
    }
}

fn actions_to_attr(actions: &[MacroAction]) -> AttrValue {
    AttrValue::List(
        actions
            .iter()
            .map(|action| {
                let mut entry = BTreeMap::new();
                entry.insert("field".to_string(), AttrValue::from(action.field.clone()));
                let value = match &action.value {
                    ActionValue::Text(text) => AttrValue::from(text.clone()),
                    ActionValue::Items(items) => AttrValue::from(items.clone()),
                };
                entry.insert("value".to_string(), value);
                AttrValue::Map(entry)
            })
            .collect(),
    )
}

pub(crate) fn create<'a>(
    client: &'a ZendeskClient,
    data: &'a mut dyn ResourceData,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let item = unmarshal_macro(data)?;
        let created = client.create_macro(item).await?;
        let id = created_id(created.id)?;
        data.set_id(&id.to_string());
        marshal_macro(&created, data)
    })
}

pub(crate) fn read<'a>(
    client: &'a ZendeskClient,
    data: &'a mut dyn ResourceData,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let id = require_id(data)?;
        match client.get_macro(id).await {
            Ok(found) => marshal_macro(&found, data),
            Err(err) if err.is_not_found() => {
                debug!("Macro {} is gone, clearing state", id);
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
        let item = unmarshal_macro(data)?;
        let updated = client.update_macro(id, item).await?;
        marshal_macro(&updated, data)
    })
}

pub(crate) fn delete<'a>(
    client: &'a ZendeskClient,
    data: &'a mut dyn ResourceData,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let id = require_id(data)?;
        client.delete_macro(id).await?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::InMemoryResourceData;
    use zendesk_client::Restriction;

    fn action_block(field: &str, value: AttrValue) -> AttrValue {
        let mut entry = BTreeMap::new();
        entry.insert("field".to_string(), AttrValue::from(field));
        entry.insert("value".to_string(), value);
        AttrValue::Map(entry)
    }

    #[test]
    fn test_round_trip_over_declared_attributes() {
        let mut data = InMemoryResourceData::with_id("360111062754");
        data.insert("title", "Close and redirect");
        data.insert("active", true);
        data.insert("description", "Closes the ticket");
        data.insert("position", 9i64);
        data.insert(
            "action",
            AttrValue::List(vec![
                action_block("status", AttrValue::from("solved")),
                action_block(
                    "current_tags",
                    AttrValue::from(vec!["escalated".to_string(), "tier_2".to_string()]),
                ),
            ]),
        );
        data.insert("restrictions", vec![20338527i64, 20338537]);

        let item = unmarshal_macro(&data).unwrap();
        assert_eq!(item.id, Some(360111062754));
        assert_eq!(item.actions[0].value, ActionValue::Text("solved".to_string()));
        assert_eq!(
            item.actions[1].value,
            ActionValue::Items(vec!["escalated".to_string(), "tier_2".to_string()])
        );
        assert_eq!(
            item.restriction,
            Some(Restriction::group(vec![20338527, 20338537]))
        );

        let mut back = InMemoryResourceData::with_id("360111062754");
        marshal_macro(&item, &mut back).unwrap();
        for attribute in ["title", "active", "description", "position", "action", "restrictions"] {
            assert_eq!(back.get(attribute), data.get(attribute), "{attribute}");
        }
    }

    #[test]
    fn test_unrestricted_macro_marshals_null_restrictions() {
        let item = Macro {
            id: Some(1),
            title: "Assign to me".to_string(),
            active: true,
            actions: vec![MacroAction {
                field: "assignee_id".to_string(),
                value: ActionValue::Text("current_user".to_string()),
            }],
            description: None,
            position: None,
            restriction: None,
            created_at: None,
            updated_at: None,
            url: None,
        };
        let mut data = InMemoryResourceData::with_id("1");
        marshal_macro(&item, &mut data).unwrap();
        assert_eq!(data.get("restrictions"), Some(&AttrValue::Null));
        assert_ne!(
            data.get("restrictions"),
            Some(&AttrValue::List(Vec::new()))
        );
    }

    #[test]
    fn test_action_value_dynamic_type_survives() {
        let mut data = InMemoryResourceData::new();
        data.insert("title", "Notify");
        data.insert(
            "action",
            AttrValue::List(vec![action_block(
                "comment_value_html",
                AttrValue::from(vec!["channel".to_string(), "<p>Thanks!</p>".to_string()]),
            )]),
        );
        let item = unmarshal_macro(&data).unwrap();
        let mut back = InMemoryResourceData::new();
        marshal_macro(&item, &mut back).unwrap();
        assert_eq!(back.get("action"), data.get("action"));
    }

    #[test]
    fn test_malformed_action_fails_parse_naming_attribute() {
        let mut data = InMemoryResourceData::new();
        data.insert("title", "Broken");
        data.insert(
            "action",
            AttrValue::List(vec![action_block("status", AttrValue::Int(3))]),
        );
        let err = unmarshal_macro(&data).unwrap_err();
        assert!(matches!(err, ProviderError::Parse { ref attribute, .. } if attribute == "action"));

        let mut data = InMemoryResourceData::new();
        data.insert("title", "Broken");
        let mut entry = BTreeMap::new();
        entry.insert("field".to_string(), AttrValue::from("status"));
        data.insert("action", AttrValue::List(vec![AttrValue::Map(entry)]));
        let err = unmarshal_macro(&data).unwrap_err();
        assert!(err.to_string().contains("entry is missing \"value\""));
    }

    #[test]
    fn test_absent_optionals_do_not_become_zero_values() {
        let mut data = InMemoryResourceData::new();
        data.insert("title", "Minimal");
        data.insert(
            "action",
            AttrValue::List(vec![action_block("status", AttrValue::from("open"))]),
        );
        let item = unmarshal_macro(&data).unwrap();
        assert_eq!(item.description, None);
        assert_eq!(item.position, None);
        assert!(item.restriction.is_none());
    }
}
