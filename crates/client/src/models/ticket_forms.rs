//! Ticket form models for the Zendesk Support API.
//!
//! A ticket form selects and orders the ticket fields shown to agents and
//! end users. Agent conditions nest three levels deep: condition, child
//! field, status requirement.

use serde::{Deserialize, Serialize};

/// A ticket form from the /ticket_forms endpoints.
///
/// `name` and `display_name` carry the server-rendered text; `raw_name`
/// and `raw_display_name` carry the source text with dynamic content
/// placeholders intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_display_name: Option<String>,
    #[serde(default)]
    pub position: i64,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub end_user_visible: bool,
    #[serde(default)]
    pub default: bool,
    /// Field order is meaningful: tickets render fields in this order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ticket_field_ids: Vec<i64>,
    #[serde(default)]
    pub in_all_brands: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub restricted_brand_ids: Vec<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub agent_conditions: Vec<AgentCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Conditional visibility rule for agent workspaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentCondition {
    pub parent_field_id: i64,
    pub value: String,
    #[serde(default)]
    pub child_fields: Vec<ChildField>,
}

/// A field revealed when the parent condition matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildField {
    pub id: i64,
    #[serde(default)]
    pub is_required: bool,
    pub required_on_statuses: RequiredOnStatuses,
}

/// On which ticket statuses the child field becomes mandatory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredOnStatuses {
    #[serde(rename = "type")]
    pub kind: StatusRequirement,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub statuses: Vec<String>,
}

/// Requirement kind; `statuses` is only meaningful for `SomeStatuses`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusRequirement {
    NoStatuses,
    SomeStatuses,
    AllStatuses,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ticket_form_with_agent_conditions() {
        let value = json!({
            "id": 360002048455i64,
            "name": "Order issue",
            "raw_name": "{{dc.order_issue}}",
            "display_name": "Order issue",
            "raw_display_name": "{{dc.order_issue}}",
            "position": 2,
            "active": true,
            "end_user_visible": true,
            "default": false,
            "ticket_field_ids": [1, 28, 29],
            "in_all_brands": true,
            "agent_conditions": [{
                "parent_field_id": 28,
                "value": "refund",
                "child_fields": [{
                    "id": 29,
                    "is_required": true,
                    "required_on_statuses": {
                        "type": "SOME_STATUSES",
                        "statuses": ["new", "open", "pending"]
                    }
                }]
            }]
        });

        let form: TicketForm = serde_json::from_value(value).unwrap();
        assert_eq!(form.ticket_field_ids, vec![1, 28, 29]);
        let requirement = &form.agent_conditions[0].child_fields[0].required_on_statuses;
        assert_eq!(requirement.kind, StatusRequirement::SomeStatuses);
        assert_eq!(requirement.statuses.len(), 3);
    }

    #[test]
    fn test_status_requirement_wire_casing() {
        assert_eq!(
            serde_json::to_string(&StatusRequirement::NoStatuses).unwrap(),
            r#""NO_STATUSES""#
        );
        assert_eq!(
            serde_json::from_str::<StatusRequirement>(r#""ALL_STATUSES""#).unwrap(),
            StatusRequirement::AllStatuses
        );
    }

    #[test]
    fn test_field_id_order_survives_roundtrip() {
        let form = TicketForm {
            id: None,
            name: "Support".to_string(),
            raw_name: Some("Support".to_string()),
            display_name: None,
            raw_display_name: None,
            position: 1,
            active: true,
            end_user_visible: true,
            default: false,
            ticket_field_ids: vec![42, 7, 99],
            in_all_brands: true,
            restricted_brand_ids: vec![],
            agent_conditions: vec![],
            url: None,
        };

        let back: TicketForm =
            serde_json::from_value(serde_json::to_value(&form).unwrap()).unwrap();
        assert_eq!(back.ticket_field_ids, vec![42, 7, 99]);
    }
}
