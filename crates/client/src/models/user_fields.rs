//! User field models for the Zendesk Support API.
//!
//! User fields are custom fields on user profiles. The field `type` is
//! fixed at creation time; dropdown fields additionally carry an ordered
//! option list whose ids the server allocates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A custom user field from the /user_fields endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserField {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Unique key referenced in placeholders. Cannot be reused once the
    /// field is deleted.
    pub key: String,
    #[serde(rename = "type")]
    pub kind: FieldType,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    #[serde(default)]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regexp_for_validation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Ordered option list for dropdown fields. Order controls the
    /// dropdown rendering.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_field_options: Vec<CustomFieldOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// One dropdown option. A missing id asks the server to allocate one;
/// a present id updates the existing option in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFieldOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub value: String,
}

/// The custom field types Zendesk accepts at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Dropdown,
    Lookup,
    Checkbox,
    Date,
    Decimal,
    Integer,
    Regexp,
    Text,
    Textarea,
}

impl FieldType {
    /// Wire names, in the order the API documents them.
    pub const NAMES: [&'static str; 9] = [
        "dropdown", "lookup", "checkbox", "date", "decimal", "integer", "regexp", "text",
        "textarea",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dropdown => "dropdown",
            Self::Lookup => "lookup",
            Self::Checkbox => "checkbox",
            Self::Date => "date",
            Self::Decimal => "decimal",
            Self::Integer => "integer",
            Self::Regexp => "regexp",
            Self::Text => "text",
            Self::Textarea => "textarea",
        }
    }

    /// Parse a wire name back into a field type.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "dropdown" => Some(Self::Dropdown),
            "lookup" => Some(Self::Lookup),
            "checkbox" => Some(Self::Checkbox),
            "date" => Some(Self::Date),
            "decimal" => Some(Self::Decimal),
            "integer" => Some(Self::Integer),
            "regexp" => Some(Self::Regexp),
            "text" => Some(Self::Text),
            "textarea" => Some(Self::Textarea),
            _ => None,
        }
    }
}
