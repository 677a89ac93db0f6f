//! Shared models: pagination, restrictions and error payloads.

use serde::{Deserialize, Serialize};

/// Pagination envelope returned alongside every collection.
///
/// Zendesk offset pagination links to neighbouring pages by URL and
/// reports the total record count.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next_page: Option<String>,
    #[serde(default)]
    pub previous_page: Option<String>,
}

/// Group restriction attached to macros and views.
///
/// Absence means "visible to all agents" and must stay distinct from a
/// restriction with an empty id list, so carriers keep this in an
/// `Option<Restriction>` serialized without `skip_serializing_if`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restriction {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub ids: Vec<i64>,
}

impl Restriction {
    /// Restriction limiting visibility to the given group ids.
    pub fn group(ids: Vec<i64>) -> Self {
        Self {
            kind: "Group".to_string(),
            ids,
        }
    }
}

/// Error body returned by the API on non-2xx responses.
///
/// The `error` key is itself polymorphic: validation failures nest a
/// title/message object, auth failures return a bare string.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
    #[serde(default)]
    pub description: Option<String>,
}

/// The two wire forms of the `error` key.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Record {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        message: Option<String>,
    },
}

impl ErrorBody {
    /// Collapse the body into a single displayable message.
    pub fn message(&self) -> String {
        let detail = match &self.error {
            ErrorDetail::Message(s) => s.clone(),
            ErrorDetail::Record { title, message } => match (title, message) {
                (Some(t), Some(m)) => format!("{t}: {m}"),
                (Some(t), None) => t.clone(),
                (None, Some(m)) => m.clone(),
                (None, None) => "unknown error".to_string(),
            },
        };
        match &self.description {
            Some(desc) => format!("{detail} ({desc})"),
            None => detail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restriction_roundtrip() {
        let restriction = Restriction::group(vec![360000000001, 360000000002]);
        let json = serde_json::to_value(&restriction).unwrap();
        assert_eq!(json["type"], "Group");
        assert_eq!(json["ids"][0], 360000000001i64);

        let back: Restriction = serde_json::from_value(json).unwrap();
        assert_eq!(back, restriction);
    }

    #[test]
    fn test_page_defaults_when_fields_missing() {
        let page: Page = serde_json::from_str("{}").unwrap();
        assert_eq!(page.count, None);
        assert_eq!(page.next_page, None);
    }

    #[test]
    fn test_error_body_string_form() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"error": "Couldn't authenticate you", "description": null}"#,
        )
        .unwrap();
        assert_eq!(body.message(), "Couldn't authenticate you");
    }

    #[test]
    fn test_error_body_record_form() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"error": {"title": "RecordInvalid", "message": "Title cannot be blank"}}"#,
        )
        .unwrap();
        assert_eq!(body.message(), "RecordInvalid: Title cannot be blank");
    }
}
