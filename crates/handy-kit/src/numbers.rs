//! Numeric helpers.

/// Rounds to the given number of decimal places, half toward positive
/// infinity.
///
/// The shift happens textually, through an exponent suffix on the decimal
/// representation, so a value that reads as `.5` at the cut actually rounds
/// as `.5` — multiplying by a power of ten first would smuggle in binary
/// representation error (`1.005 * 100` is already `100.4999…`).
///
/// # Example
///
/// ```rust
/// use handy_kit::round_to_decimal;
///
/// assert_eq!(round_to_decimal(1.005, 2), 1.01);
/// assert_eq!(round_to_decimal(2.344, 2), 2.34);
/// assert_eq!(round_to_decimal(-1.5, 0), -1.0);
/// ```
pub fn round_to_decimal(n: f64, decimals: u32) -> f64 {
    let shifted: f64 = format!("{n}e{decimals}").parse().unwrap_or(f64::NAN);
    let rounded = (shifted + 0.5).floor();
    format!("{rounded}e-{decimals}").parse().unwrap_or(f64::NAN)
}
