//! Declarative resource schemas.
//!
//! Each resource registers a [`Schema`]: the attribute names it accepts,
//! their kinds, whether they are required, computed or defaulted, and any
//! value constraint. Create and Update run [`Schema::apply_defaults`] and
//! [`Schema::validate`] once, before the mapper touches the data, so the
//! mappers themselves can assume well-typed top-level attributes. Nested
//! block contents are validated by the mappers, which know the block
//! structure.

use crate::data::{AttrValue, ResourceData};
use crate::error::{ProviderError, Result};

/// The declared type of an attribute.
///
/// `Set` and `List` share the list runtime representation; the distinction
/// documents whether entry order is meaningful. `Block` is a list whose
/// entries are string-keyed maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrKind {
    Bool,
    Int,
    String,
    List,
    Set,
    Block,
}

impl AttrKind {
    fn expects(self) -> &'static str {
        match self {
            Self::Bool => "a boolean",
            Self::Int => "an integer",
            Self::String => "a string",
            Self::List => "a list",
            Self::Set => "a set",
            Self::Block => "a list of blocks",
        }
    }
}

/// A value constraint checked during validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// Integer floor, e.g. positions 0 to 7 are reserved for system fields.
    IntAtLeast(i64),
    /// Closed string vocabulary, e.g. the custom field types.
    OneOf(&'static [&'static str]),
}

/// One declared attribute.
#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: &'static str,
    pub kind: AttrKind,
    pub required: bool,
    pub computed: bool,
    pub default: Option<AttrValue>,
    pub constraint: Option<Constraint>,
}

impl Attribute {
    fn new(name: &'static str, kind: AttrKind, required: bool, computed: bool) -> Self {
        Self {
            name,
            kind,
            required,
            computed,
            default: None,
            constraint: None,
        }
    }

    /// Configuration must supply this attribute.
    pub fn required(name: &'static str, kind: AttrKind) -> Self {
        Self::new(name, kind, true, false)
    }

    /// Configuration may supply this attribute.
    pub fn optional(name: &'static str, kind: AttrKind) -> Self {
        Self::new(name, kind, false, false)
    }

    /// The server owns this attribute; marshal writes it back.
    pub fn computed(name: &'static str, kind: AttrKind) -> Self {
        Self::new(name, kind, false, true)
    }

    /// Configuration may supply it, the server fills it otherwise.
    pub fn optional_computed(name: &'static str, kind: AttrKind) -> Self {
        Self::new(name, kind, false, true)
    }

    pub fn with_default(mut self, value: impl Into<AttrValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraint = Some(constraint);
        self
    }
}

/// The full attribute declaration for one resource kind.
#[derive(Debug, Clone)]
pub struct Schema {
    attributes: Vec<Attribute>,
}

impl Schema {
    pub fn new(attributes: Vec<Attribute>) -> Self {
        Self { attributes }
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Fill defaulted attributes the configuration omitted.
    pub fn apply_defaults(&self, data: &mut dyn ResourceData) -> Result<()> {
        for attribute in &self.attributes {
            if let Some(default) = &attribute.default {
                if data.get(attribute.name).is_none() {
                    data.set(attribute.name, default.clone())?;
                }
            }
        }
        Ok(())
    }

    /// Check the configuration against the declaration.
    ///
    /// Rejects undeclared attributes, missing required attributes, dynamic
    /// type mismatches and constraint violations, in that order. Runs
    /// before unmarshal so a failure never reaches the network.
    pub fn validate(&self, data: &dyn ResourceData) -> Result<()> {
        for key in data.keys() {
            if self.attribute(key).is_none() {
                return Err(ProviderError::parse(key, "not a declared attribute"));
            }
        }

        for attribute in &self.attributes {
            let value = data.get(attribute.name);
            let Some(value) = value.filter(|v| !v.is_null()) else {
                if attribute.required {
                    return Err(ProviderError::parse(
                        attribute.name,
                        "required attribute is missing",
                    ));
                }
                continue;
            };

            self.check_kind(attribute, value)?;
            if let Some(constraint) = attribute.constraint {
                check_constraint(attribute.name, constraint, value)?;
            }
        }
        Ok(())
    }

    fn check_kind(&self, attribute: &Attribute, value: &AttrValue) -> Result<()> {
        let ok = match attribute.kind {
            AttrKind::Bool => matches!(value, AttrValue::Bool(_)),
            AttrKind::Int => matches!(value, AttrValue::Int(_)),
            AttrKind::String => matches!(value, AttrValue::String(_)),
            AttrKind::List | AttrKind::Set => matches!(value, AttrValue::List(_)),
            AttrKind::Block => match value {
                AttrValue::List(entries) => entries.iter().all(|e| e.as_map().is_some()),
                _ => false,
            },
        };
        if ok {
            Ok(())
        } else {
            Err(ProviderError::parse(
                attribute.name,
                format!(
                    "expected {}, got {}",
                    attribute.kind.expects(),
                    value.kind_name()
                ),
            ))
        }
    }
}

fn check_constraint(name: &str, constraint: Constraint, value: &AttrValue) -> Result<()> {
    match constraint {
        Constraint::IntAtLeast(min) => {
            if let Some(n) = value.as_i64() {
                if n < min {
                    return Err(ProviderError::parse(
                        name,
                        format!("must be at least {min}, got {n}"),
                    ));
                }
            }
        }
        Constraint::OneOf(options) => {
            if let Some(s) = value.as_str() {
                if !options.contains(&s) {
                    return Err(ProviderError::parse(
                        name,
                        format!("must be one of {}, got {s:?}", options.join(", ")),
                    ));
                }
            }
        }
    }
    Ok(())
}
