//! Property tests for the comparison invariants.

use handy_value::{
    deep_equal, deep_equal_sequences, is_empty, is_value_in_mappings, strict_equal_sequences,
    Mapping, Value,
};
use proptest::prelude::*;

// Strategy for values whose numbers are finite and integral-or-fractional
// but never NaN. NaN is excluded on purpose: strict identity makes NaN
// unequal to itself, so reflexivity holds for every value except trees
// containing NaN fields.
fn value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        (-1.0e9..1.0e9f64).prop_map(Value::from),
        "[a-z0-9 ]{0,8}".prop_map(Value::from),
        (0i64..4_000_000_000).prop_map(|secs| {
            Value::from(
                chrono::DateTime::from_timestamp(secs, 0)
                    .expect("timestamp in range")
                    .naive_utc(),
            )
        }),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Sequence),
            prop::collection::vec(("[a-z]{1,5}", inner), 0..6).prop_map(|fields| {
                Value::Mapping(fields.into_iter().collect::<Mapping>())
            }),
        ]
    })
}

proptest! {
    #[test]
    fn test_deep_equal_is_reflexive(value in value_strategy()) {
        prop_assert!(deep_equal(&value, &value.clone()));
    }

    #[test]
    fn test_deep_equal_is_symmetric(a in value_strategy(), b in value_strategy()) {
        prop_assert_eq!(deep_equal(&a, &b), deep_equal(&b, &a));
    }

    #[test]
    fn test_singleton_sequence_emptiness_tracks_its_element(value in value_strategy()) {
        let wrapped = Value::Sequence(vec![value.clone()]);
        prop_assert_eq!(is_empty(&wrapped), is_empty(&value));
    }

    #[test]
    fn test_sequence_comparisons_are_reflexive(items in prop::collection::vec(value_strategy(), 0..8)) {
        prop_assert!(deep_equal_sequences(&items, &items.clone()));
    }

    #[test]
    fn test_strict_sequence_comparison_is_symmetric(
        a in prop::collection::vec(0i64..10, 0..8),
        b in prop::collection::vec(0i64..10, 0..8),
    ) {
        prop_assert_eq!(strict_equal_sequences(&a, &b), strict_equal_sequences(&b, &a));
    }

    #[test]
    fn test_length_mismatch_always_rejects(
        items in prop::collection::vec(value_strategy(), 1..8),
    ) {
        let shorter = &items[1..];
        prop_assert!(!deep_equal_sequences(&items, shorter));
    }

    #[test]
    fn test_membership_finds_a_planted_field(value in value_strategy()) {
        let items = vec![Value::Mapping(Mapping::from([
            ("id".to_string(), value.clone()),
        ]))];
        let found = is_value_in_mappings(&value, &items, "id");
        // Empty values never match; everything else must be found.
        prop_assert_eq!(found, !is_empty(&value));
    }
}
