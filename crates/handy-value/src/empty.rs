//! Emptiness predicates.
//!
//! "Empty" here is semantic, not structural: it answers "is there anything
//! worth showing or validating in this value?". Booleans and dates always
//! count as present; sequences collapse recursively, so a list of empty
//! lists is itself empty.

use crate::value::Value;

/// Returns true when a value is semantically absent.
///
/// The rules, in order:
///
/// 1. A sequence is empty iff every element is empty (recursively). A
///    zero-length sequence is empty.
/// 2. A date is never empty.
/// 3. A boolean is never empty — `false` is a present value.
/// 4. Anything else is empty when it is null, a NaN number, an empty
///    mapping per [`is_empty_mapping`], or a string that is blank once
///    literal `' '` space characters are removed.
///
/// The string rule strips *only* the space character, not whitespace in
/// general: a string of tabs or newlines is not empty. This narrow strip is
/// kept for compatibility with the data this library grew up around; use
/// [`str::trim`] upstream if you want real trimming.
///
/// # Example
///
/// ```rust
/// use handy_value::{is_empty, Mapping, Value};
///
/// assert!(is_empty(&Value::Sequence(vec![])));
/// assert!(is_empty(&Value::from("   ")));
/// assert!(!is_empty(&Value::from(0.0)));
/// assert!(!is_empty(&Value::from(false)));
/// assert!(is_empty(&Value::Mapping(Mapping::new())));
/// ```
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Sequence(items) => items.iter().all(is_empty),
        Value::Date(_) => false,
        Value::Bool(_) => false,
        Value::Null => true,
        Value::Number(n) if n.is_nan() => true,
        _ => is_empty_mapping(value) || is_blank_string(value),
    }
}

/// Returns true when a value is not an integer scalar and has zero named
/// fields.
///
/// Field counts follow key-enumeration semantics: a mapping counts its
/// fields, a string its characters, a sequence its elements; numbers,
/// booleans, dates, and null enumerate no fields at all. An "integer
/// scalar" is a finite number with no fractional part.
///
/// Two consequences worth knowing about. A fractional number such as `0.5`
/// satisfies this predicate (zero fields, not an integer), and via
/// [`is_empty`]'s fallback branch is therefore empty — a compatibility
/// quirk this crate preserves. And a date satisfies it too, though
/// [`is_empty`] short-circuits dates before ever consulting it.
pub fn is_empty_mapping(value: &Value) -> bool {
    !is_integer_scalar(value) && named_field_count(value) == 0
}

fn is_integer_scalar(value: &Value) -> bool {
    matches!(value, Value::Number(n) if n.is_finite() && n.fract() == 0.0)
}

fn named_field_count(value: &Value) -> usize {
    match value {
        Value::Mapping(fields) => fields.len(),
        Value::String(s) => s.chars().count(),
        Value::Sequence(items) => items.len(),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::Date(_) => 0,
    }
}

fn is_blank_string(value: &Value) -> bool {
    match value {
        // Strips literal spaces only; tabs and newlines survive the strip.
        Value::String(s) => s.replace(' ', "").is_empty(),
        _ => false,
    }
}
