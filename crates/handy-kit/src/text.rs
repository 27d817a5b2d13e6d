//! String helpers.

use handy_value::{is_empty, Value};

/// Truncates a string to `limit` characters, appending `"..."`.
///
/// Strings within the limit, and blank strings (per the emptiness rules of
/// [`handy_value`]), are returned unchanged. Truncation counts characters,
/// not bytes, and trims whitespace left dangling at the cut before the
/// ellipsis is appended.
///
/// # Example
///
/// ```rust
/// use handy_kit::truncate;
///
/// assert_eq!(truncate("plumbing supplies", 8), "plumbing...");
/// assert_eq!(truncate("lights", 10), "lights");
/// ```
pub fn truncate(s: &str, limit: usize) -> String {
    if is_empty(&Value::from(s)) {
        return s.to_string();
    }
    if s.chars().count() > limit {
        let cut: String = s.chars().take(limit).collect();
        format!("{}...", cut.trim())
    } else {
        s.to_string()
    }
}

/// Replaces the characters in `[start, end)` of `s` with `insert`.
///
/// Indices are character positions and are clamped to the string, so an
/// out-of-range `end` simply drops the rest of the string.
pub fn replace_between(s: &str, start: usize, end: usize, insert: &str) -> String {
    let prefix: String = s.chars().take(start).collect();
    let suffix: String = s.chars().skip(end).collect();
    format!("{prefix}{insert}{suffix}")
}

/// Capitalizes every space-separated word: `THIS IS A TEST` becomes
/// `This Is A Test`.
///
/// The first character of each word is uppercased and the remainder
/// lowercased. Splitting is on single spaces, so runs of spaces collapse
/// into single separators in the result.
pub fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// Formats an integer with en-US style thousands separators:
/// `1000000` becomes `"1,000,000"`.
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if n < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
