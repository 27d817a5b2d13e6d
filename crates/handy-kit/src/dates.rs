//! Calendar helpers.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};

/// Shifts a timestamp by per-component offsets, normalizing overflow the
/// way a calendar does: thirteen months roll the year, day thirty-five of
/// a month rolls into the next, twenty-five hours roll the day.
///
/// Offsets may be negative. Sub-second precision of the input is dropped.
/// Returns `None` only when the result falls outside the representable
/// calendar range.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use handy_kit::date_offset;
///
/// let date = NaiveDate::from_ymd_opt(2022, 8, 19)
///     .unwrap()
///     .and_hms_opt(12, 0, 0)
///     .unwrap();
/// let shifted = date_offset(date, 0, 6, 0, 0, 0, 0).unwrap();
/// assert_eq!(shifted.format("%Y-%m-%d").to_string(), "2023-02-19");
/// ```
pub fn date_offset(
    date: NaiveDateTime,
    years: i32,
    months: i32,
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
) -> Option<NaiveDateTime> {
    let total_months =
        (date.year() as i64 + years as i64) * 12 + date.month0() as i64 + months as i64;
    let year = i32::try_from(total_months.div_euclid(12)).ok()?;
    let month = total_months.rem_euclid(12) as u32 + 1;

    // Anchor at the first of the month, then let day and time offsets
    // cascade as durations.
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let day_shift = date.day() as i64 - 1 + days;
    let day = first.checked_add_signed(Duration::try_days(day_shift)?)?;

    let time_seconds = (date.hour() as i64 + hours) * 3600
        + (date.minute() as i64 + minutes) * 60
        + date.second() as i64
        + seconds;
    day.and_hms_opt(0, 0, 0)?
        .checked_add_signed(Duration::try_seconds(time_seconds)?)
}

/// Returns true when `check` falls strictly between `from` and `to`.
///
/// All three arguments are `YYYY-MM-DD` strings; anything unparseable
/// degrades to `false` rather than an error.
///
/// # Example
///
/// ```rust
/// use handy_kit::date_is_between;
///
/// assert!(date_is_between("2022-08-19", "2022-08-29", "2022-08-21"));
/// assert!(!date_is_between("2022-08-19", "2022-08-29", "2022-08-19"));
/// assert!(!date_is_between("not a date", "2022-08-29", "2022-08-21"));
/// ```
pub fn date_is_between(from: &str, to: &str, check: &str) -> bool {
    let parse = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok();
    match (parse(from), parse(to), parse(check)) {
        (Some(from), Some(to), Some(check)) => check > from && check < to,
        _ => false,
    }
}
