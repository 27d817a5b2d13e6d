//! Collection and record helpers.

use handy_value::{is_empty, Mapping, Value};
use std::cmp::Ordering;

/// Returns true when every element equals the first. Vacuously true for an
/// empty slice.
pub fn all_equal<T: PartialEq>(items: &[T]) -> bool {
    match items.first() {
        Some(first) => items.iter().all(|item| item == first),
        None => true,
    }
}

/// Substitutes `fallback` for empty values.
///
/// Booleans pass through untouched — `false` is a real answer, not a
/// missing one. Everything else is replaced by `fallback` when empty per
/// [`handy_value::is_empty`].
///
/// # Example
///
/// ```rust
/// use handy_kit::default_if_empty;
/// use handy_value::Value;
///
/// assert_eq!(default_if_empty(Value::from(""), Value::from("n/a")), Value::from("n/a"));
/// assert_eq!(default_if_empty(Value::from(false), Value::from("n/a")), Value::from(false));
/// ```
pub fn default_if_empty(value: Value, fallback: Value) -> Value {
    if matches!(value, Value::Bool(_)) {
        return value;
    }
    if is_empty(&value) {
        fallback
    } else {
        value
    }
}

/// Sorts a slice of mapping values by a named string field,
/// case-insensitively.
///
/// The sort is stable. Elements that are not mappings, lack the field, or
/// hold a non-string value there compare equal and keep their relative
/// order.
///
/// # Example
///
/// ```rust
/// use handy_kit::sort_mappings_by_key;
/// use handy_value::{Mapping, Value};
///
/// let mut items = vec![
///     Value::Mapping(Mapping::from([("category".to_string(), Value::from("Windows"))])),
///     Value::Mapping(Mapping::from([("category".to_string(), Value::from("electrical"))])),
/// ];
/// sort_mappings_by_key(&mut items, "category", false);
/// assert_eq!(items[0].field("category").and_then(Value::as_str), Some("electrical"));
/// ```
pub fn sort_mappings_by_key(items: &mut [Value], key: &str, descending: bool) {
    items.sort_by(|a, b| {
        let ka = a.field(key).and_then(Value::as_str);
        let kb = b.field(key).and_then(Value::as_str);
        match (ka, kb) {
            (Some(ka), Some(kb)) => {
                let ordering = ka.to_lowercase().cmp(&kb.to_lowercase());
                if descending {
                    ordering.reverse()
                } else {
                    ordering
                }
            }
            _ => Ordering::Equal,
        }
    });
}

/// Returns a copy of the mapping without the named field. The remaining
/// fields keep their order.
pub fn remove_key(mapping: &Mapping, key: &str) -> Mapping {
    mapping
        .iter()
        .filter(|(k, _)| k.as_str() != key)
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Removes, per key, the filter's listed elements from the object's
/// sequences.
///
/// Both mappings hold sequences under their keys. For every key present in
/// both, elements that appear in the filter's sequence are dropped from the
/// object's. Keys absent from the filter — and values that are not
/// sequences on either side — pass through unchanged.
///
/// # Example
///
/// ```rust
/// use handy_kit::subtract_mapping_lists;
/// use handy_value::{Mapping, Value};
///
/// let object = Mapping::from([(
///     "a".to_string(),
///     Value::Sequence(vec![Value::from(1.0), Value::from(2.0), Value::from(3.0)]),
/// )]);
/// let filter = Mapping::from([(
///     "a".to_string(),
///     Value::Sequence(vec![Value::from(1.0), Value::from(3.0)]),
/// )]);
/// let result = subtract_mapping_lists(&object, &filter);
/// assert_eq!(result["a"], Value::Sequence(vec![Value::from(2.0)]));
/// ```
pub fn subtract_mapping_lists(object: &Mapping, filter: &Mapping) -> Mapping {
    object
        .iter()
        .map(|(key, value)| {
            let kept = match (value, filter.get(key)) {
                (Value::Sequence(items), Some(Value::Sequence(drop))) => Value::Sequence(
                    items
                        .iter()
                        .filter(|item| !drop.contains(item))
                        .cloned()
                        .collect(),
                ),
                _ => value.clone(),
            };
            (key.clone(), kept)
        })
        .collect()
}
