//! Macro models for the Zendesk Support API.
//!
//! Responsibilities:
//! - Define the macro payload from the /macros endpoints.
//! - Model the per-action value, which is a string for most ticket fields
//!   and a list of strings for multi-valued fields (e.g. followers).
//!
//! Non-responsibilities:
//! - Does not handle HTTP requests (see the client module).
//! - Does not flatten values for configuration state (see the provider
//!   crate's mappers).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::common::Restriction;

/// A macro: a predefined set of actions agents apply to tickets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Macro {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub actions: Vec<MacroAction>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    /// `None` means unrestricted and serializes as an explicit null.
    #[serde(default)]
    pub restriction: Option<Restriction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// One action a macro performs on a ticket field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroAction {
    pub field: String,
    pub value: ActionValue,
}

/// Action value: scalar for single-valued fields, list for multi-valued
/// fields. The wire type must be preserved round-trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionValue {
    Text(String),
    Items(Vec<String>),
}

impl ActionValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Items(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_macro_deserializes_scalar_and_list_actions() {
        let value = json!({
            "id": 360111062754i64,
            "title": "Close and redirect",
            "active": true,
            "actions": [
                {"field": "status", "value": "solved"},
                {"field": "comment_value_html", "value": ["channel", "<p>Thanks!</p>"]}
            ],
            "description": null,
            "restriction": null,
            "url": "https://example.zendesk.com/api/v2/macros/360111062754.json"
        });

        let m: Macro = serde_json::from_value(value).unwrap();
        assert_eq!(m.actions.len(), 2);
        assert_eq!(m.actions[0].value, ActionValue::Text("solved".to_string()));
        assert_eq!(
            m.actions[1].value,
            ActionValue::Items(vec!["channel".to_string(), "<p>Thanks!</p>".to_string()])
        );
        assert!(m.restriction.is_none());
    }

    #[test]
    fn test_absent_restriction_serializes_as_null() {
        let m = Macro {
            id: None,
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

        let value = serde_json::to_value(&m).unwrap();
        assert!(value.get("restriction").is_some());
        assert!(value["restriction"].is_null());
    }

    #[test]
    fn test_restriction_serializes_with_group_type() {
        let m = Macro {
            id: Some(1),
            title: "Escalate".to_string(),
            active: true,
            actions: vec![],
            description: None,
            position: Some(12),
            restriction: Some(Restriction::group(vec![20338527])),
            created_at: None,
            updated_at: None,
            url: None,
        };

        let value = serde_json::to_value(&m).unwrap();
        assert_eq!(value["restriction"]["type"], "Group");
        assert_eq!(value["restriction"]["ids"][0], 20338527);
    }
}
