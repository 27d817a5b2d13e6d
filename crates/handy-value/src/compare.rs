//! Structural comparison: deep equality, sequence comparison, membership.

use crate::empty::is_empty;
use crate::value::Value;

/// Structural equality between two values.
///
/// When either side is empty (per [`is_empty`]), the comparison falls back
/// to comparing canonical JSON serializations. This fallback is weaker than
/// structural equality and deliberately kept visible rather than folded
/// into the recursive case: two different empty-ish representations compare
/// equal only when their serializations coincide. Notably `Null` differs
/// from an empty mapping (`null` vs `{}`), while a NaN number equals `Null`
/// (both serialize to `null`). Equality is therefore not transitive across
/// the fallback path.
///
/// Otherwise the comparison is recursive: mappings must have identical key
/// sets (field order irrelevant) with every field equal, sequences must
/// match pairwise in order, and everything else — including dates — uses
/// strict value identity. Nested fields recurse only when both sides are
/// non-empty mappings or sequences; anything else is compared strictly.
///
/// # Example
///
/// ```rust
/// use handy_value::{deep_equal, Mapping, Value};
///
/// let a = Value::Mapping(Mapping::from([
///     ("a".to_string(), Value::from(1.0)),
///     ("b".to_string(), Value::from(2.0)),
/// ]));
/// let b = Value::Mapping(Mapping::from([
///     ("b".to_string(), Value::from(2.0)),
///     ("a".to_string(), Value::from(1.0)),
/// ]));
/// assert!(deep_equal(&a, &b));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    if is_empty(a) || is_empty(b) {
        return canonical_json(a) == canonical_json(b);
    }

    match (a, b) {
        (Value::Mapping(fields_a), Value::Mapping(fields_b)) => {
            fields_a.len() == fields_b.len()
                && fields_a.iter().all(|(key, va)| match fields_b.get(key) {
                    Some(vb) => field_equal(va, vb),
                    None => false,
                })
        }
        (Value::Sequence(items_a), Value::Sequence(items_b)) => {
            items_a.len() == items_b.len()
                && items_a.iter().zip(items_b).all(|(va, vb)| field_equal(va, vb))
        }
        _ => a == b,
    }
}

/// Recurse for structured pairs, strict identity for everything else.
fn field_equal(a: &Value, b: &Value) -> bool {
    if is_structured(a) && is_structured(b) {
        deep_equal(a, b)
    } else {
        a == b
    }
}

fn is_structured(value: &Value) -> bool {
    matches!(value, Value::Mapping(_) | Value::Sequence(_)) && !is_empty(value)
}

fn canonical_json(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Pairwise [`deep_equal`] over two sequences of values.
///
/// Order-sensitive: `[a, b]` never equals `[b, a]` unless the elements
/// themselves are equal. Length mismatch rejects immediately.
pub fn deep_equal_sequences(a: &[Value], b: &[Value]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(va, vb)| deep_equal(va, vb))
}

/// Pairwise strict equality over two sequences of primitives.
///
/// Length mismatch rejects immediately; otherwise a single in-order pass
/// that short-circuits on the first difference.
pub fn strict_equal_sequences<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(va, vb)| va == vb)
}

/// Returns true when `value` appears under `key` in some mapping of `items`.
///
/// An empty `value` (per [`is_empty`]) never matches. Elements that are not
/// mappings, or lack the key, are skipped. The field comparison is strict
/// value identity, no recursion.
///
/// # Example
///
/// ```rust
/// use handy_value::{is_value_in_mappings, Mapping, Value};
///
/// let items = vec![
///     Value::Mapping(Mapping::from([("id".to_string(), Value::from(1.0))])),
///     Value::Mapping(Mapping::from([("id".to_string(), Value::from(2.0))])),
/// ];
/// assert!(is_value_in_mappings(&Value::from(2.0), &items, "id"));
/// assert!(!is_value_in_mappings(&Value::from(""), &items, "id"));
/// ```
pub fn is_value_in_mappings(value: &Value, items: &[Value], key: &str) -> bool {
    if is_empty(value) {
        return false;
    }
    items.iter().any(|item| match item {
        Value::Mapping(fields) => fields.get(key) == Some(value),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Mapping;
    use chrono::NaiveDate;

    fn mapping(fields: &[(&str, Value)]) -> Value {
        Value::Mapping(
            fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect::<Mapping>(),
        )
    }

    fn date(y: i32, m: u32, d: u32) -> Value {
        Value::from(
            NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_primitive_reflexivity() {
        for v in [
            Value::from(1.0),
            Value::from("plumbing"),
            Value::from(true),
            Value::from(false),
        ] {
            assert!(deep_equal(&v, &v.clone()));
        }
    }

    #[test]
    fn test_field_order_is_irrelevant() {
        let ab = mapping(&[("a", Value::from(1.0)), ("b", Value::from(2.0))]);
        let ba = mapping(&[("b", Value::from(2.0)), ("a", Value::from(1.0))]);
        assert!(deep_equal(&ab, &ba));
    }

    #[test]
    fn test_field_count_mismatch() {
        let small = mapping(&[("a", Value::from(1.0))]);
        let big = mapping(&[("a", Value::from(1.0)), ("b", Value::from(2.0))]);
        assert!(!deep_equal(&small, &big));
        assert!(!deep_equal(&big, &small));
    }

    #[test]
    fn test_key_sets_must_match_not_just_counts() {
        let a = mapping(&[("a", Value::from(1.0))]);
        let b = mapping(&[("b", Value::from(1.0))]);
        assert!(!deep_equal(&a, &b));
    }

    #[test]
    fn test_nested_mappings_recurse() {
        let a = mapping(&[("inner", mapping(&[("x", Value::from("1"))]))]);
        let b = mapping(&[("inner", mapping(&[("x", Value::from("1"))]))]);
        let c = mapping(&[("inner", mapping(&[("x", Value::from("2"))]))]);
        assert!(deep_equal(&a, &b));
        assert!(!deep_equal(&a, &c));
    }

    #[test]
    fn test_nested_sequences_recurse() {
        let a = mapping(&[("tags", Value::Sequence(vec![Value::from("x"), Value::from("y")]))]);
        let b = mapping(&[("tags", Value::Sequence(vec![Value::from("x"), Value::from("y")]))]);
        let c = mapping(&[("tags", Value::Sequence(vec![Value::from("y"), Value::from("x")]))]);
        assert!(deep_equal(&a, &b));
        assert!(!deep_equal(&a, &c));
    }

    #[test]
    fn test_dates_compare_by_timestamp() {
        let a = mapping(&[("at", date(2022, 8, 19))]);
        let b = mapping(&[("at", date(2022, 8, 19))]);
        let c = mapping(&[("at", date(2022, 8, 20))]);
        assert!(deep_equal(&a, &b));
        assert!(!deep_equal(&a, &c));
    }

    #[test]
    fn test_empty_fallback_compares_serializations() {
        // Both sides empty-ish but with different canonical forms.
        assert!(!deep_equal(&Value::Null, &Value::Mapping(Mapping::new())));
        assert!(!deep_equal(
            &Value::Mapping(Mapping::new()),
            &Value::Sequence(vec![]),
        ));
        // Identical canonical forms coincide.
        assert!(deep_equal(&Value::Null, &Value::Null));
        assert!(deep_equal(
            &Value::Sequence(vec![]),
            &Value::Sequence(vec![]),
        ));
    }

    #[test]
    fn test_fallback_conflates_nan_and_null() {
        // Both serialize to `null`; the weaker fallback equality accepts it.
        assert!(deep_equal(&Value::Number(f64::NAN), &Value::Null));
    }

    #[test]
    fn test_empty_fields_use_strict_identity() {
        let a = mapping(&[("x", Value::Sequence(vec![]))]);
        let b = mapping(&[("x", Value::Sequence(vec![]))]);
        assert!(deep_equal(&a, &b));

        let c = mapping(&[("x", Value::Null)]);
        assert!(!deep_equal(&a, &c));
    }

    #[test]
    fn test_deep_equal_sequences() {
        let a = vec![mapping(&[("a", Value::from(1.0))])];
        let b = vec![mapping(&[("a", Value::from(1.0))])];
        assert!(deep_equal_sequences(&a, &b));

        let fwd = vec![
            mapping(&[("a", Value::from(1.0))]),
            mapping(&[("a", Value::from(2.0))]),
        ];
        let rev = vec![
            mapping(&[("a", Value::from(2.0))]),
            mapping(&[("a", Value::from(1.0))]),
        ];
        assert!(!deep_equal_sequences(&fwd, &rev));
        assert!(!deep_equal_sequences(&a, &fwd));
    }

    #[test]
    fn test_strict_equal_sequences() {
        assert!(strict_equal_sequences(&[1, 2, 3], &[1, 2, 3]));
        assert!(!strict_equal_sequences(&[1, 2], &[2, 1]));
        assert!(!strict_equal_sequences(&[1, 2], &[1, 2, 3]));
        assert!(strict_equal_sequences::<i32>(&[], &[]));
    }

    #[test]
    fn test_membership() {
        let items = vec![
            mapping(&[("id", Value::from(1.0))]),
            mapping(&[("id", Value::from(2.0))]),
        ];
        assert!(is_value_in_mappings(&Value::from(2.0), &items, "id"));
        assert!(!is_value_in_mappings(&Value::from(3.0), &items, "id"));
        assert!(!is_value_in_mappings(&Value::from(2.0), &items, "key"));
    }

    #[test]
    fn test_membership_never_matches_empty_values() {
        let items = vec![mapping(&[("id", Value::Null)])];
        assert!(!is_value_in_mappings(&Value::Null, &items, "id"));
        assert!(!is_value_in_mappings(&Value::from(""), &items, "id"));
    }

    #[test]
    fn test_membership_skips_non_mapping_elements() {
        let items = vec![Value::from(2.0), mapping(&[("id", Value::from(2.0))])];
        assert!(is_value_in_mappings(&Value::from(2.0), &items, "id"));
        let scalars = vec![Value::from(2.0)];
        assert!(!is_value_in_mappings(&Value::from(2.0), &scalars, "id"));
    }
}
