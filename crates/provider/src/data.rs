//! The flat configuration value model and its accessor.
//!
//! Resources see configuration through the [`ResourceData`] trait: a string
//! id plus a flat map of attribute values. Values are [`AttrValue`], a small
//! dynamic union that can hold the polymorphic entries the schemas need
//! (notably view columns, which are integers or strings per entry). Every
//! numeric attribute in these schemas is an integer, so no float arm is
//! carried.
//!
//! [`InMemoryResourceData`] is the map-backed implementation used by tests
//! and by hosts that manage state themselves.

use std::collections::BTreeMap;

use crate::error::{ProviderError, Result};

/// A dynamically typed configuration value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Null,
    Bool(bool),
    Int(i64),
    String(String),
    List(Vec<AttrValue>),
    Map(BTreeMap<String, AttrValue>),
}

impl AttrValue {
    /// Name of the value's dynamic type, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[AttrValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, AttrValue>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<BTreeMap<String, AttrValue>> for AttrValue {
    fn from(value: BTreeMap<String, AttrValue>) -> Self {
        Self::Map(value)
    }
}

/// Absent optional values become explicit nulls.
impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<AttrValue>> From<Vec<T>> for AttrValue {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

/// Configuration state for one resource instance.
///
/// The id is the remote-assigned external identifier as a string; an empty
/// id means the resource has not been created (or was found gone on read).
/// Attribute names and types are fixed by the resource's declared schema.
///
/// The typed getters treat an absent attribute and an explicit null the
/// same way and fail with [`ProviderError::Parse`] on a dynamic type
/// mismatch, so mappers never branch on raw `AttrValue` variants for
/// scalar fields.
pub trait ResourceData: Send {
    fn id(&self) -> &str;

    fn set_id(&mut self, id: &str);

    fn get(&self, attribute: &str) -> Option<&AttrValue>;

    fn set(&mut self, attribute: &str, value: AttrValue) -> Result<()>;

    /// Whether the attribute differs from the last synced state.
    fn has_change(&self, attribute: &str) -> bool;

    /// Names of all currently set attributes.
    fn keys(&self) -> Vec<&str>;

    fn get_string(&self, attribute: &str) -> Result<Option<String>> {
        match self.get(attribute) {
            None | Some(AttrValue::Null) => Ok(None),
            Some(AttrValue::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(type_mismatch(attribute, "a string", other)),
        }
    }

    fn get_i64(&self, attribute: &str) -> Result<Option<i64>> {
        match self.get(attribute) {
            None | Some(AttrValue::Null) => Ok(None),
            Some(AttrValue::Int(n)) => Ok(Some(*n)),
            Some(other) => Err(type_mismatch(attribute, "an integer", other)),
        }
    }

    fn get_bool(&self, attribute: &str) -> Result<Option<bool>> {
        match self.get(attribute) {
            None | Some(AttrValue::Null) => Ok(None),
            Some(AttrValue::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(type_mismatch(attribute, "a boolean", other)),
        }
    }

    fn get_list(&self, attribute: &str) -> Result<Option<Vec<AttrValue>>> {
        match self.get(attribute) {
            None | Some(AttrValue::Null) => Ok(None),
            Some(AttrValue::List(items)) => Ok(Some(items.clone())),
            Some(other) => Err(type_mismatch(attribute, "a list", other)),
        }
    }

    /// Read a list attribute whose entries are blocks (string-keyed maps).
    fn get_block_list(&self, attribute: &str) -> Result<Option<Vec<BTreeMap<String, AttrValue>>>> {
        let Some(items) = self.get_list(attribute)? else {
            return Ok(None);
        };
        let mut blocks = Vec::with_capacity(items.len());
        for item in items {
            match item {
                AttrValue::Map(map) => blocks.push(map),
                other => {
                    return Err(ProviderError::parse(
                        attribute,
                        format!("expected block entries, got {}", other.kind_name()),
                    ));
                }
            }
        }
        Ok(Some(blocks))
    }
}

fn type_mismatch(attribute: &str, expected: &str, got: &AttrValue) -> ProviderError {
    ProviderError::parse(attribute, format!("expected {expected}, got {}", got.kind_name()))
}

/// Map-backed [`ResourceData`].
///
/// `has_change` compares against the state captured by the most recent
/// [`snapshot_prior`](Self::snapshot_prior) call; before any snapshot,
/// every set attribute reads as changed.
#[derive(Debug, Clone, Default)]
pub struct InMemoryResourceData {
    id: String,
    current: BTreeMap<String, AttrValue>,
    prior: BTreeMap<String, AttrValue>,
}

impl InMemoryResourceData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Set an attribute, converting from any supported Rust value.
    pub fn insert(&mut self, attribute: impl Into<String>, value: impl Into<AttrValue>) {
        self.current.insert(attribute.into(), value.into());
    }

    /// Capture the current attributes as the synced baseline for
    /// [`ResourceData::has_change`].
    pub fn snapshot_prior(&mut self) {
        self.prior = self.current.clone();
    }
}

impl ResourceData for InMemoryResourceData {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: &str) {
        self.id = id.to_string();
    }

    fn get(&self, attribute: &str) -> Option<&AttrValue> {
        self.current.get(attribute)
    }

    fn set(&mut self, attribute: &str, value: AttrValue) -> Result<()> {
        self.current.insert(attribute.to_string(), value);
        Ok(())
    }

    fn has_change(&self, attribute: &str) -> bool {
        self.prior.get(attribute) != self.current.get(attribute)
    }

    fn keys(&self) -> Vec<&str> {
        self.current.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_getters_distinguish_absent_and_mismatched() {
        let mut data = InMemoryResourceData::new();
        data.insert("title", "Close and redirect");
        data.insert("position", 9i64);
        data.insert("active", true);

        assert_eq!(
            data.get_string("title").unwrap(),
            Some("Close and redirect".to_string())
        );
        assert_eq!(data.get_i64("position").unwrap(), Some(9));
        assert_eq!(data.get_bool("active").unwrap(), Some(true));
        assert_eq!(data.get_string("description").unwrap(), None);

        let err = data.get_i64("title").unwrap_err();
        assert!(err.to_string().contains("expected an integer, got string"));
    }

    #[test]
    fn test_null_reads_as_absent() {
        let mut data = InMemoryResourceData::new();
        data.insert("description", AttrValue::Null);
        assert_eq!(data.get_string("description").unwrap(), None);
        assert_eq!(data.get_list("description").unwrap(), None);
    }

    #[test]
    fn test_block_list_rejects_scalar_entries() {
        let mut data = InMemoryResourceData::new();
        data.insert(
            "action",
            AttrValue::List(vec![AttrValue::String("status".to_string())]),
        );
        let err = data.get_block_list("action").unwrap_err();
        assert!(err.to_string().contains("expected block entries"));
    }

    #[test]
    fn test_has_change_compares_against_snapshot() {
        let mut data = InMemoryResourceData::with_id("12345");
        data.insert("type", "text");
        data.snapshot_prior();
        assert!(!data.has_change("type"));

        data.insert("type", "integer");
        assert!(data.has_change("type"));

        data.snapshot_prior();
        assert!(!data.has_change("type"));
    }

    #[test]
    fn test_option_conversion_produces_null() {
        assert_eq!(AttrValue::from(None::<String>), AttrValue::Null);
        assert_eq!(
            AttrValue::from(Some("x".to_string())),
            AttrValue::String("x".to_string())
        );
        assert_eq!(
            AttrValue::from(vec![1i64, 2]),
            AttrValue::List(vec![AttrValue::Int(1), AttrValue::Int(2)])
        );
    }
}
