//! Per-resource mappers, handlers and schemas.
//!
//! One submodule per resource kind, each exposing `schema()`, the
//! unmarshal/marshal pair, and the four lifecycle hooks wired up by
//! [`all`]. Shared helpers here cover the pieces several resources need:
//! numeric state ids, integer list attributes, block field extraction,
//! the group restriction set and dropdown option lists.

use std::collections::BTreeMap;

use zendesk_client::{CustomFieldOption, Restriction};

use crate::data::{AttrValue, ResourceData};
use crate::error::{ProviderError, Result};
use crate::registry::Resource;

pub mod dynamic_content_items;
pub mod dynamic_content_variants;
pub mod macros;
pub mod organization_fields;
pub mod ticket_forms;
pub mod trigger_categories;
pub mod user_fields;
pub mod views;

/// Every resource registration, under its configuration type name.
pub fn all() -> Vec<Resource> {
    vec![
        Resource {
            type_name: "zendesk_macro",
            schema: macros::schema(),
            create: macros::create,
            read: macros::read,
            update: macros::update,
            delete: macros::delete,
        },
        Resource {
            type_name: "zendesk_ticket_form",
            schema: ticket_forms::schema(),
            create: ticket_forms::create,
            read: ticket_forms::read,
            update: ticket_forms::update,
            delete: ticket_forms::delete,
        },
        Resource {
            type_name: "zendesk_user_field",
            schema: user_fields::schema(),
            create: user_fields::create,
            read: user_fields::read,
            update: user_fields::update,
            delete: user_fields::delete,
        },
        Resource {
            type_name: "zendesk_organization_field",
            schema: organization_fields::schema(),
            create: organization_fields::create,
            read: organization_fields::read,
            update: organization_fields::update,
            delete: organization_fields::delete,
        },
        Resource {
            type_name: "zendesk_view",
            schema: views::schema(),
            create: views::create,
            read: views::read,
            update: views::update,
            delete: views::delete,
        },
        Resource {
            type_name: "zendesk_trigger_category",
            schema: trigger_categories::schema(),
            create: trigger_categories::create,
            read: trigger_categories::read,
            update: trigger_categories::update,
            delete: trigger_categories::delete,
        },
        Resource {
            type_name: "zendesk_dynamic_content",
            schema: dynamic_content_items::schema(),
            create: dynamic_content_items::create,
            read: dynamic_content_items::read,
            update: dynamic_content_items::update,
            delete: dynamic_content_items::delete,
        },
        Resource {
            type_name: "zendesk_dynamic_content_variant",
            schema: dynamic_content_variants::schema(),
            create: dynamic_content_variants::create,
            read: dynamic_content_variants::read,
            update: dynamic_content_variants::update,
            delete: dynamic_content_variants::delete,
        },
    ]
}

/// Parse the state id into the wire id, `None` while unset.
pub(crate) fn state_id(data: &dyn ResourceData) -> Result<Option<i64>> {
    match data.id() {
        "" => Ok(None),
        raw => raw
            .parse::<i64>()
            .map(Some)
            .map_err(|_| ProviderError::parse("id", format!("expected a numeric id, got {raw:?}"))),
    }
}

/// Parse the state id, failing when the resource has never been created.
pub(crate) fn require_id(data: &dyn ResourceData) -> Result<i64> {
    state_id(data)?.ok_or_else(|| ProviderError::parse("id", "resource has no id yet"))
}

/// Unwrap the id a create response must carry before recording it.
pub(crate) fn created_id(id: Option<i64>) -> Result<i64> {
    id.ok_or_else(|| ProviderError::parse("id", "create response did not include an id"))
}

/// Read a list attribute of integer entries; absent means empty.
pub(crate) fn i64_list(data: &dyn ResourceData, attribute: &str) -> Result<Vec<i64>> {
    let Some(items) = data.get_list(attribute)? else {
        return Ok(Vec::new());
    };
    let mut ids = Vec::with_capacity(items.len());
    for item in &items {
        match item.as_i64() {
            Some(id) => ids.push(id),
            None => {
                return Err(ProviderError::parse(
                    attribute,
                    format!("expected integer entries, got {}", item.kind_name()),
                ));
            }
        }
    }
    Ok(ids)
}

/// The flat `restrictions` group id set, absent or empty meaning
/// unrestricted. The restriction type is always `Group`.
pub(crate) fn restriction_from_config(data: &dyn ResourceData) -> Result<Option<Restriction>> {
    let ids = i64_list(data, "restrictions")?;
    if ids.is_empty() {
        Ok(None)
    } else {
        Ok(Some(Restriction::group(ids)))
    }
}

/// An unrestricted resource becomes an explicit null, never an empty list.
pub(crate) fn restriction_to_attr(restriction: Option<&Restriction>) -> AttrValue {
    match restriction {
        None => AttrValue::Null,
        Some(restriction) => AttrValue::from(restriction.ids.clone()),
    }
}

/// Dropdown option blocks. A configured id of `-1` (or none at all) asks
/// the server to allocate one and becomes a wire id of `None`.
pub(crate) fn custom_field_options_from_config(
    data: &dyn ResourceData,
    attribute: &str,
) -> Result<Vec<CustomFieldOption>> {
    let Some(blocks) = data.get_block_list(attribute)? else {
        return Ok(Vec::new());
    };
    let mut options = Vec::with_capacity(blocks.len());
    for block in &blocks {
        let id = match block_opt_i64(block, attribute, "id")? {
            Some(-1) | None => None,
            assigned => assigned,
        };
        options.push(CustomFieldOption {
            id,
            name: block_str(block, attribute, "name")?,
            value: block_str(block, attribute, "value")?,
        });
    }
    Ok(options)
}

/// Write dropdown options back; server-assigned ids are included, the
/// `-1` sentinel never reappears.
pub(crate) fn custom_field_options_to_attr(options: &[CustomFieldOption]) -> AttrValue {
    AttrValue::List(
        options
            .iter()
            .map(|option| {
                let mut entry = BTreeMap::new();
                if let Some(id) = option.id {
                    entry.insert("id".to_string(), AttrValue::Int(id));
                }
                entry.insert("name".to_string(), AttrValue::from(option.name.clone()));
                entry.insert("value".to_string(), AttrValue::from(option.value.clone()));
                AttrValue::Map(entry)
            })
            .collect(),
    )
}

pub(crate) fn block_str(
    block: &BTreeMap<String, AttrValue>,
    attribute: &str,
    key: &str,
) -> Result<String> {
    match block.get(key) {
        Some(AttrValue::String(s)) => Ok(s.clone()),
        Some(other) => Err(ProviderError::parse(
            attribute,
            format!("expected {key:?} to be a string, got {}", other.kind_name()),
        )),
        None => Err(ProviderError::parse(
            attribute,
            format!("entry is missing {key:?}"),
        )),
    }
}

pub(crate) fn block_i64(
    block: &BTreeMap<String, AttrValue>,
    attribute: &str,
    key: &str,
) -> Result<i64> {
    match block.get(key) {
        Some(AttrValue::Int(n)) => Ok(*n),
        Some(other) => Err(ProviderError::parse(
            attribute,
            format!("expected {key:?} to be an integer, got {}", other.kind_name()),
        )),
        None => Err(ProviderError::parse(
            attribute,
            format!("entry is missing {key:?}"),
        )),
    }
}

pub(crate) fn block_opt_i64(
    block: &BTreeMap<String, AttrValue>,
    attribute: &str,
    key: &str,
) -> Result<Option<i64>> {
    match block.get(key) {
        None | Some(AttrValue::Null) => Ok(None),
        Some(AttrValue::Int(n)) => Ok(Some(*n)),
        Some(other) => Err(ProviderError::parse(
            attribute,
            format!("expected {key:?} to be an integer, got {}", other.kind_name()),
        )),
    }
}

pub(crate) fn block_bool(
    block: &BTreeMap<String, AttrValue>,
    attribute: &str,
    key: &str,
) -> Result<bool> {
    match block.get(key) {
        Some(AttrValue::Bool(b)) => Ok(*b),
        Some(other) => Err(ProviderError::parse(
            attribute,
            format!("expected {key:?} to be a boolean, got {}", other.kind_name()),
        )),
        None => Err(ProviderError::parse(
            attribute,
            format!("entry is missing {key:?}"),
        )),
    }
}

/// Read an optional list of strings from a block; absent means empty.
pub(crate) fn block_str_items(
    block: &BTreeMap<String, AttrValue>,
    attribute: &str,
    key: &str,
) -> Result<Vec<String>> {
    let items = match block.get(key) {
        None | Some(AttrValue::Null) => return Ok(Vec::new()),
        Some(AttrValue::List(items)) => items,
        Some(other) => {
            return Err(ProviderError::parse(
                attribute,
                format!(
                    "expected {key:?} to be a list of strings, got {}",
                    other.kind_name()
                ),
            ));
        }
    };
    let mut texts = Vec::with_capacity(items.len());
    for item in items {
        match item.as_str() {
            Some(s) => texts.push(s.to_string()),
            None => {
                return Err(ProviderError::parse(
                    attribute,
                    format!(
                        "expected {key:?} entries to be strings, got {}",
                        item.kind_name()
                    ),
                ));
            }
        }
    }
    Ok(texts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::InMemoryResourceData;

    #[test]
    fn test_state_id_parses_or_rejects() {
        let data = InMemoryResourceData::new();
        assert_eq!(state_id(&data).unwrap(), None);
        assert!(require_id(&data).is_err());

        let data = InMemoryResourceData::with_id("360111062754");
        assert_eq!(state_id(&data).unwrap(), Some(360111062754));
        assert_eq!(require_id(&data).unwrap(), 360111062754);

        let data = InMemoryResourceData::with_id("not-a-number");
        assert!(state_id(&data).is_err());
    }

    #[test]
    fn test_empty_restriction_set_means_unrestricted() {
        let mut data = InMemoryResourceData::new();
        assert_eq!(restriction_from_config(&data).unwrap(), None);

        data.insert("restrictions", Vec::<i64>::new());
        assert_eq!(restriction_from_config(&data).unwrap(), None);

        data.insert("restrictions", vec![20338527i64, 20338537]);
        assert_eq!(
            restriction_from_config(&data).unwrap(),
            Some(Restriction::group(vec![20338527, 20338537]))
        );
    }

    #[test]
    fn test_unrestricted_marshals_to_null_not_empty_list() {
        assert_eq!(restriction_to_attr(None), AttrValue::Null);
        let restriction = Restriction::group(vec![20338527]);
        assert_eq!(
            restriction_to_attr(Some(&restriction)),
            AttrValue::List(vec![AttrValue::Int(20338527)])
        );
    }

    #[test]
    fn test_option_sentinel_becomes_unset_id() {
        let mut data = InMemoryResourceData::new();
        let mut fresh = BTreeMap::new();
        fresh.insert("id".to_string(), AttrValue::Int(-1));
        fresh.insert("name".to_string(), AttrValue::from("Gold"));
        fresh.insert("value".to_string(), AttrValue::from("tier_gold"));
        let mut assigned = BTreeMap::new();
        assigned.insert("id".to_string(), AttrValue::Int(360013088874));
        assigned.insert("name".to_string(), AttrValue::from("Silver"));
        assigned.insert("value".to_string(), AttrValue::from("tier_silver"));
        data.insert(
            "custom_field_option",
            AttrValue::List(vec![AttrValue::Map(fresh), AttrValue::Map(assigned)]),
        );

        let options = custom_field_options_from_config(&data, "custom_field_option").unwrap();
        assert_eq!(options[0].id, None);
        assert_eq!(options[1].id, Some(360013088874));
    }

    #[test]
    fn test_option_attr_never_reemits_sentinel() {
        let options = vec![CustomFieldOption {
            id: None,
            name: "Gold".to_string(),
            value: "tier_gold".to_string(),
        }];
        let AttrValue::List(entries) = custom_field_options_to_attr(&options) else {
            panic!("expected a list");
        };
        let AttrValue::Map(entry) = &entries[0] else {
            panic!("expected a block");
        };
        assert!(!entry.contains_key("id"));
        assert_eq!(entry.get("name"), Some(&AttrValue::from("Gold")));
    }

    #[test]
    fn test_i64_list_rejects_mixed_entries() {
        let mut data = InMemoryResourceData::new();
        data.insert(
            "ticket_field_ids",
            AttrValue::List(vec![AttrValue::Int(1), AttrValue::from("two")]),
        );
        let err = i64_list(&data, "ticket_field_ids").unwrap_err();
        assert!(err.to_string().contains("expected integer entries"));
    }

    #[test]
    fn test_block_extractors_name_the_attribute() {
        let mut block = BTreeMap::new();
        block.insert("field".to_string(), AttrValue::Int(2));
        let err = block_str(&block, "action", "field").unwrap_err();
        assert!(err.to_string().contains("\"action\""));
        assert!(err.to_string().contains("expected \"field\" to be a string"));

        let err = block_i64(&block, "action", "position").unwrap_err();
        assert!(err.to_string().contains("entry is missing \"position\""));
    }
}
