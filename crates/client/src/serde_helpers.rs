//! Serde helpers for Zendesk's inconsistent JSON typing.
//!
//! Responsibilities:
//! - Decode numeric fields that the API may return as `123` or `"123"`.
//! - Encode trigger-category ids, which the API expects as decimal strings.
//!
//! Explicitly does NOT handle:
//! - Polymorphic fields with domain meaning (see `models::ColumnKey` and
//!   `models::ActionValue`, which are tagged unions in their own right).
//!
//! Invariants / assumptions:
//! - Helpers must not log values; parse failures surface as generic serde
//!   errors carrying only the offending token.

use serde::de::Error as _;
use serde::{Deserialize, Serializer};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum I64OrString {
    I64(i64),
    String(String),
}

/// Decode an optional i64 that may arrive as a number or a decimal string.
///
/// Trigger categories serialize their id as `"360001234567"`; most other
/// endpoints use bare numbers.
pub fn opt_i64_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<I64OrString>::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(I64OrString::I64(v)) => Ok(Some(v)),
        Some(I64OrString::String(s)) => s.parse::<i64>().map(Some).map_err(D::Error::custom),
    }
}

/// Encode an optional i64 as a decimal string, the wire form Zendesk
/// requires for trigger-category ids.
pub fn opt_i64_as_string<S>(value: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(v) => serializer.serialize_str(&v.to_string()),
        None => serializer.serialize_none(),
    }
}
