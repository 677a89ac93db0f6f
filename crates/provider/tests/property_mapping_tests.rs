//! Property-based tests for the composite variant identifier.
//!
//! This module uses proptest to verify:
//! - join then split returns the original (variant_id, item_id) pair
//! - inputs without the separator never parse
//! - non-numeric components never parse

use proptest::prelude::*;
use zendesk_provider::resources::dynamic_content_variants::{join_variant_id, split_variant_id};

proptest! {
    #[test]
    fn prop_join_then_split_returns_the_pair(
        variant_id in 1i64..=i64::MAX,
        item_id in 1i64..=i64::MAX,
    ) {
        let id = join_variant_id(variant_id, item_id);
        prop_assert_eq!(split_variant_id(&id).unwrap(), (variant_id, item_id));
    }

    #[test]
    fn prop_separator_free_ids_never_parse(raw in "[a-z0-9]{0,16}") {
        prop_assert!(split_variant_id(&raw).is_err());
    }

    #[test]
    fn prop_non_numeric_components_never_parse(
        word in "[a-z]{1,8}",
        id in 1i64..=i64::MAX,
    ) {
        // Hoisted out of `prop_assert!` so the stringified condition contains no
        // `{...}` braces, which `format_args!` would otherwise treat as captures.
        let word_then_id = format!("{word}+{id}");
        let id_then_word = format!("{id}+{word}");
        prop_assert!(split_variant_id(&word_then_id).is_err());
        prop_assert!(split_variant_id(&id_then_word).is_err());
    }
}
