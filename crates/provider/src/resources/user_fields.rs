//! The `zendesk_user_field` resource.
//!
//! Custom fields on user profiles. The field `type` is write-once: Update
//! rejects a changed type locally, before any request goes out. Dropdown
//! fields carry an ordered option list; configuration marks new options
//! with id `-1` and the server-assigned ids are patched back after every
//! write.
//!
//! `title` and `description` are raw-preferring: configuration supplies
//! the raw value, the server may localize the display value. The source
//! attributes always hold the raw text, and the server rendering is
//! exposed through the computed `rendered_title` / `rendered_description`.

use futures::future::BoxFuture;
use tracing::debug;
use zendesk_client::{FieldType, UserField, ZendeskClient};

use crate::data::{AttrValue, ResourceData};
use crate::error::{ProviderError, Result};
use crate::schema::{AttrKind, Attribute, Constraint, Schema};

use super::{
    created_id, custom_field_options_from_config, custom_field_options_to_attr, require_id,
    state_id,
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

pub(crate) fn unmarshal_user_field(data: &dyn ResourceData) -> Result<UserField> {
    let title = data.get_string("title")?.unwrap_or_default();
    let description = data.get_string("description")?;
    Ok(UserField {
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
        custom_field_options: custom_field_options_from_config(data, "custom_field_option")?,
        created_at: None,
        updated_at: None,
        url: data.get_string("url")?,
    })
}

pub(crate) fn marshal_user_field(field: &UserField, data: &mut dyn ResourceData) -> Result<()> {
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

/// The raw value is the source of truth; the display value only stands in
/// when no raw value came back.
pub(crate) fn raw_or_display(raw: &Option<String>, display: &str) -> String {
    match raw {
        Some(raw) if !raw.is_empty() => raw.clone(),
        _ => display.to_string(),
    }
}

pub(crate) fn field_type_from_config(data: &dyn ResourceData) -> Result<FieldType> {
    let Some(name) = data.get_string("type")? else {
        return Err(ProviderError::parse("type", "required attribute is missing"));
    };
    FieldType::parse(&name).ok_or_else(|| {
        ProviderError::parse(
            "type",
            format!("must be one of {}, got {name:?}", FieldType::NAMES.join(", ")),
        )
    })
}

pub(crate) fn create<'a>(
    client: &'a ZendeskClient,
    data: &'a mut dyn ResourceData,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let field = unmarshal_user_field(data)?;
        let created = client.create_user_field(field).await?;
        let id = created_id(created.id)?;
        data.set_id(&id.to_string());
        marshal_user_field(&created, data)
    })
}

pub(crate) fn read<'a>(
    client: &'a ZendeskClient,
    data: &'a mut dyn ResourceData,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let id = require_id(data)?;
        match client.get_user_field(id).await {
            Ok(found) => marshal_user_field(&found, data),
            Err(err) if err.is_not_found() => {
                debug!("User field {} is gone, clearing state", id);
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
            debug!("Rejecting user field type change before any request");
            return Err(ProviderError::Precondition(
                "user field \"type\" is write-once and cannot be changed after creation"
                    .to_string(),
            ));
        }
        let id = require_id(data)?;
        let field = unmarshal_user_field(data)?;
        let updated = client.update_user_field(id, field).await?;
        marshal_user_field(&updated, data)
    })
}

pub(crate) fn delete<'a>(
    client: &'a ZendeskClient,
    data: &'a mut dyn ResourceData,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let id = require_id(data)?;
        client.delete_user_field(id).await?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::InMemoryResourceData;
    use std::collections::BTreeMap;
    use zendesk_client::CustomFieldOption;

    fn option_block(id: Option<i64>, name: &str, value: &str) -> AttrValue {
        let mut entry = BTreeMap::new();
        if let Some(id) = id {
            entry.insert("id".to_string(), AttrValue::Int(id));
        }
        entry.insert("name".to_string(), AttrValue::from(name));
        entry.insert("value".to_string(), AttrValue::from(value));
        AttrValue::Map(entry)
    }

    fn dropdown_config() -> InMemoryResourceData {
        let mut data = InMemoryResourceData::with_id("360042584292");
        data.insert("type", "dropdown");
        data.insert("title", "Support tier");
        data.insert("key", "support_tier");
        data.insert("description", "Customer support tier");
        data.insert("position", 9i64);
        data.insert("active", true);
        data.insert(
            "custom_field_option",
            AttrValue::List(vec![
                option_block(Some(360013088874), "Gold", "tier_gold"),
                option_block(Some(-1), "Bronze", "tier_bronze"),
            ]),
        );
        data
    }

    #[test]
    fn test_unmarshal_mirrors_raw_fields_and_maps_sentinel() {
        let field = unmarshal_user_field(&dropdown_config()).unwrap();
        assert_eq!(field.kind, FieldType::Dropdown);
        assert_eq!(field.title, "Support tier");
        assert_eq!(field.raw_title.as_deref(), Some("Support tier"));
        assert_eq!(field.raw_description.as_deref(), Some("Customer support tier"));
        assert_eq!(field.custom_field_options[0].id, Some(360013088874));
        assert_eq!(field.custom_field_options[1].id, None);
    }

    #[test]
    fn test_round_trip_patches_server_assigned_option_id() {
        let data = dropdown_config();
        let mut field = unmarshal_user_field(&data).unwrap();
        // the server allocated an id for the Bronze option
        field.custom_field_options[1].id = Some(360013088894);

        let mut back = InMemoryResourceData::with_id("360042584292");
        marshal_user_field(&field, &mut back).unwrap();
        let options = back.get_block_list("custom_field_option").unwrap().unwrap();
        assert_eq!(options[1].get("id"), Some(&AttrValue::Int(360013088894)));
        // an option list without the sentinel round-trips unchanged
        for attribute in ["type", "title", "key", "description", "position", "active"] {
            assert_eq!(back.get(attribute), data.get(attribute), "{attribute}");
        }
    }

    #[test]
    fn test_marshal_prefers_raw_over_localized_display() {
        let field = UserField {
            id: Some(7),
            key: "support_tier".to_string(),
            kind: FieldType::Dropdown,
            title: "Nivel de soporte".to_string(),
            raw_title: Some("Support tier".to_string()),
            description: Some("Nivel del cliente".to_string()),
            raw_description: Some("Customer support tier".to_string()),
            position: Some(9),
            active: true,
            regexp_for_validation: None,
            tag: None,
            custom_field_options: vec![CustomFieldOption {
                id: Some(360013088874),
                name: "Gold".to_string(),
                value: "tier_gold".to_string(),
            }],
            created_at: None,
            updated_at: None,
            url: None,
        };

        let mut data = InMemoryResourceData::with_id("7");
        marshal_user_field(&field, &mut data).unwrap();
        assert_eq!(
            data.get_string("title").unwrap().as_deref(),
            Some("Support tier")
        );
        assert_eq!(
            data.get_string("rendered_title").unwrap().as_deref(),
            Some("Nivel de soporte")
        );
        assert_eq!(
            data.get_string("description").unwrap().as_deref(),
            Some("Customer support tier")
        );
        assert_eq!(
            data.get_string("rendered_description").unwrap().as_deref(),
            Some("Nivel del cliente")
        );

        // unmarshal from the marshalled state reproduces the raw values
        let again = unmarshal_user_field(&data).unwrap();
        assert_eq!(again.title, "Support tier");
        assert_eq!(again.raw_title.as_deref(), Some("Support tier"));
    }

    #[test]
    fn test_unknown_type_fails_parse() {
        let mut data = InMemoryResourceData::new();
        data.insert("type", "multiselect");
        data.insert("title", "Tier");
        data.insert("key", "tier");
        let err = unmarshal_user_field(&data).unwrap_err();
        assert!(matches!(err, ProviderError::Parse { ref attribute, .. } if attribute == "type"));
    }

    #[test]
    fn test_option_order_is_preserved() {
        let mut data = InMemoryResourceData::new();
        data.insert("type", "dropdown");
        data.insert("title", "Tier");
        data.insert("key", "tier");
        data.insert(
            "custom_field_option",
            AttrValue::List(vec![
                option_block(None, "Silver", "tier_silver"),
                option_block(None, "Gold", "tier_gold"),
                option_block(None, "Bronze", "tier_bronze"),
            ]),
        );
        let field = unmarshal_user_field(&data).unwrap();
        let names: Vec<_> = field
            .custom_field_options
            .iter()
            .map(|o| o.name.as_str())
            .collect();
        assert_eq!(names, ["Silver", "Gold", "Bronze"]);
    }
}
