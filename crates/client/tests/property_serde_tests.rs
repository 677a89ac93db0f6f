//! Property-based tests for serde roundtrip serialization.
//!
//! This module uses proptest to verify:
//! - ColumnKey keeps its wire type (number vs string) through a roundtrip
//! - TriggerCategory ids survive the string codec in both directions
//! - Restriction and ActionValue roundtrips preserve content and order
//!
//! # Test Coverage
//! - Serde roundtrip invariants: serialize -> deserialize == original
//! - Untagged enum arm stability under arbitrary inputs

use proptest::prelude::*;
use zendesk_client::{ActionValue, ColumnKey, Restriction, TriggerCategory};

/// Strategy for system column names: lowercase identifiers that can never
/// be confused with a numeric custom field id.
fn system_column_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z_]{0,30}".prop_map(|s| s.to_string())
}

proptest! {
    #[test]
    fn prop_custom_field_column_stays_numeric(id in any::<i64>()) {
        let key = ColumnKey::CustomField(id);
        let json = serde_json::to_value(&key).unwrap();
        prop_assert!(json.is_number());

        let back: ColumnKey = serde_json::from_value(json).unwrap();
        prop_assert_eq!(back, key);
    }

    #[test]
    fn prop_system_column_stays_string(name in system_column_strategy()) {
        let key = ColumnKey::System(name.clone());
        let json = serde_json::to_value(&key).unwrap();
        prop_assert!(json.is_string());

        let back: ColumnKey = serde_json::from_value(json).unwrap();
        prop_assert_eq!(back, ColumnKey::System(name));
    }

    #[test]
    fn prop_trigger_category_id_survives_string_codec(id in 1i64..=i64::MAX) {
        let category = TriggerCategory {
            id: Some(id),
            name: "category".to_string(),
            position: 0,
        };

        let json = serde_json::to_value(&category).unwrap();
        prop_assert!(json["id"].is_string());

        let back: TriggerCategory = serde_json::from_value(json).unwrap();
        prop_assert_eq!(back.id, Some(id));
    }

    #[test]
    fn prop_restriction_ids_roundtrip(ids in proptest::collection::vec(any::<i64>(), 0..20)) {
        let restriction = Restriction::group(ids.clone());
        let json = serde_json::to_value(&restriction).unwrap();
        let back: Restriction = serde_json::from_value(json).unwrap();
        prop_assert_eq!(back.ids, ids);
    }

    #[test]
    fn prop_action_value_list_preserves_order(
        items in proptest::collection::vec("[a-z0-9_]{1,12}", 1..10)
    ) {
        let value = ActionValue::Items(items.clone());
        let json = serde_json::to_value(&value).unwrap();
        let back: ActionValue = serde_json::from_value(json).unwrap();
        prop_assert_eq!(back, ActionValue::Items(items));
    }
}
