//! Trigger category models for the Zendesk Support API.

use serde::{Deserialize, Serialize};

use crate::serde_helpers;

/// A trigger category from the /trigger_categories endpoints.
///
/// Unlike every other resource here, the API serializes the id as a
/// decimal string (`"id": "360001234567"`) and expects the same encoding
/// back, so the field routes through the string codec helpers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerCategory {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "serde_helpers::opt_i64_from_string_or_number",
        serialize_with = "serde_helpers::opt_i64_as_string"
    )]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub position: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_encoded_id_decodes_to_i64() {
        let category: TriggerCategory =
            serde_json::from_str(r#"{"id": "10026", "name": "Notifications", "position": 0}"#)
                .unwrap();
        assert_eq!(category.id, Some(10026));
    }

    #[test]
    fn test_id_reencodes_as_string() {
        let category = TriggerCategory {
            id: Some(10026),
            name: "Notifications".to_string(),
            position: 2,
        };
        let value = serde_json::to_value(&category).unwrap();
        assert_eq!(value["id"], "10026");
        assert_eq!(value["position"], 2);
    }

    #[test]
    fn test_fresh_category_omits_id() {
        let category = TriggerCategory {
            id: None,
            name: "Assignment".to_string(),
            position: 0,
        };
        let json = serde_json::to_string(&category).unwrap();
        assert!(!json.contains("\"id\""));
    }
}
