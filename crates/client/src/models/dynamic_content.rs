//! Dynamic content models for the Zendesk Support API.
//!
//! A dynamic content item is a named placeholder; its variants hold the
//! text per locale. Variants live under
//! /dynamic_content/items/{item_id}/variants and carry no item reference
//! in their payload, so [`DynamicContentVariant::item_id`] exists purely
//! for path construction and never touches the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A dynamic content item from the /dynamic_content/items endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynamicContentItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub default_locale_id: i64,
    #[serde(default)]
    pub outdated: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<DynamicContentVariant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A locale variant of a dynamic content item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynamicContentVariant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub content: String,
    pub locale_id: i64,
    /// Owning item, resolved from the request path. Never serialized.
    #[serde(skip)]
    pub item_id: Option<i64>,
    #[serde(default)]
    pub outdated: bool,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub default: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// POST/PUT payload for items: name, default locale and seeded variants.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DynamicContentItemWrite {
    pub name: String,
    pub default_locale_id: i64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<DynamicContentVariantWrite>,
}

/// POST/PUT payload for variants. Server-managed fields (outdated,
/// timestamps, url) stay out of write requests.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DynamicContentVariantWrite {
    pub content: String,
    pub locale_id: i64,
    pub default: bool,
}

impl From<DynamicContentItem> for DynamicContentItemWrite {
    fn from(item: DynamicContentItem) -> Self {
        Self {
            name: item.name,
            default_locale_id: item.default_locale_id,
            variants: item.variants.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<DynamicContentVariant> for DynamicContentVariantWrite {
    fn from(variant: DynamicContentVariant) -> Self {
        Self {
            content: variant.content,
            locale_id: variant.locale_id,
            default: variant.default,
        }
    }
}
