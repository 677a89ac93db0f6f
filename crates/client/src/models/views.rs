//! View models for the Zendesk Support API.
//!
//! Views use different shapes for reads and writes. GET responses nest
//! conditions under `conditions.all` / `conditions.any` and the projection
//! under `execution`, where each column is an object with id and title.
//! POST and PUT payloads flatten conditions to top-level `all` / `any` and
//! put the projection under `output` with bare column keys.
//!
//! [`ViewWrite`] is derived from [`View`] by a pure conversion; handlers
//! apply it on the write path only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::common::Restriction;

/// A view as returned by GET /views/{id}.json.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct View {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub position: i64,
    /// `None` means unrestricted and serializes as an explicit null.
    #[serde(default)]
    pub restriction: Option<Restriction>,
    #[serde(default)]
    pub conditions: ViewConditions,
    #[serde(default)]
    pub execution: ViewExecution,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Nested condition container on the read shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewConditions {
    #[serde(default)]
    pub all: Vec<ViewCondition>,
    #[serde(default)]
    pub any: Vec<ViewCondition>,
}

/// One filter condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewCondition {
    pub field: String,
    pub operator: String,
    #[serde(default)]
    pub value: String,
}

/// Projection settings on the read shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewExecution {
    #[serde(default)]
    pub columns: Vec<ViewColumn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_order: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
}

/// A projected column on the read shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewColumn {
    pub id: ColumnKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Column identifier: numeric for custom ticket fields, symbolic for
/// system fields. The wire type is part of the identity and must survive
/// round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnKey {
    CustomField(i64),
    System(String),
}

impl ColumnKey {
    pub fn as_custom_field(&self) -> Option<i64> {
        match self {
            Self::CustomField(id) => Some(*id),
            Self::System(_) => None,
        }
    }
}

/// The POST/PUT payload shape for views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewWrite {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub position: i64,
    #[serde(default)]
    pub all: Vec<ViewCondition>,
    #[serde(default)]
    pub any: Vec<ViewCondition>,
    #[serde(default)]
    pub restriction: Option<Restriction>,
    pub output: ViewOutput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Projection settings on the write shape: bare column keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewOutput {
    #[serde(default)]
    pub columns: Vec<ColumnKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_order: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
}

impl From<View> for ViewWrite {
    fn from(view: View) -> Self {
        Self {
            id: view.id,
            title: view.title,
            active: view.active,
            description: view.description,
            position: view.position,
            all: view.conditions.all,
            any: view.conditions.any,
            restriction: view.restriction,
            output: ViewOutput {
                columns: view.execution.columns.into_iter().map(|c| c.id).collect(),
                group_by: view.execution.group_by,
                sort_by: view.execution.sort_by,
                group_order: view.execution.group_order,
                sort_order: view.execution.sort_order,
            },
            url: view.url,
        }
    }
}
