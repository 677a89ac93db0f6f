//! Organization field models for the Zendesk Support API.
//!
//! Same shape as user fields, addressed under /organization_fields. The
//! types are kept separate because the two resources evolve independently
//! on the API side (organization fields accept no lookup relations today,
//! and option ids here are server-owned rather than client-tracked).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::user_fields::{CustomFieldOption, FieldType};

/// A custom organization field from the /organization_fields endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationField {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
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
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_field_options: Vec<CustomFieldOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
