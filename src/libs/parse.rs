//! Parsing of user-supplied values: dates, tag lists and snooze durations.
//!
//! These are the places where free text from the command layer turns into
//! typed values, so every failure here is reported as a [`TaskError`] rather
//! than a panic or a silently ignored component.

use crate::libs::{
    error::{Result, TaskError},
    messages::Message,
};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use std::collections::BTreeSet;

const DATETIME_FORMATS: [&str; 5] = [
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// 23:59 on the given day, the time used when only a date is given.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::from_hms_opt(23, 59, 0).unwrap_or_default())
}

/// Parses a point in time.
///
/// Accepts `today`/`tomorrow` (end of that day, 23:59), a plain
/// `YYYY-MM-DD` (also 23:59), the formats in [`DATETIME_FORMATS`], and RFC 3339
/// with an offset, which is converted to the offset's wall-clock time.
pub fn parse_datetime(input: &str, now: NaiveDateTime) -> Result<NaiveDateTime> {
    let value = input.trim();

    match value.to_lowercase().as_str() {
        "today" => return Ok(end_of_day(now.date())),
        "tomorrow" => {
            if let Some(date) = now.date().succ_opt() {
                return Ok(end_of_day(date));
            }
        }
        _ => {}
    }

    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(parsed);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(end_of_day(date));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.naive_local());
    }

    Err(TaskError::Validation(Message::InvalidDate(input.to_string())))
}

/// Splits a comma-separated tag list, trimming whitespace and dropping empty entries.
pub fn parse_tags(input: &str) -> BTreeSet<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses a relative duration of the form `<N>d<N>h<N>m`.
///
/// Each component is optional but they must appear in day, hour, minute
/// order, at most once each. Anything else, including an all-zero total,
/// is an [`TaskError::InvalidDuration`].
pub fn parse_duration(input: &str) -> Result<Duration> {
    let value = input.trim();
    let invalid = || TaskError::InvalidDuration(Message::InvalidDuration(input.to_string()));
    let overflow = || TaskError::InvalidDuration(Message::DurationOverflow(input.to_string()));

    if value.is_empty() {
        return Err(invalid());
    }

    let units = ['d', 'h', 'm'];
    let mut next_unit = 0;
    let mut total_minutes: i64 = 0;
    let mut digits = String::new();

    for ch in value.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
            continue;
        }

        let position = units[next_unit..].iter().position(|unit| *unit == ch).ok_or_else(invalid)?;
        if digits.is_empty() {
            return Err(invalid());
        }
        let unit_index = next_unit + position;
        let amount: i64 = digits.parse().map_err(|_| overflow())?;
        let minutes_per_unit = match units[unit_index] {
            'd' => 24 * 60,
            'h' => 60,
            _ => 1,
        };
        total_minutes = amount
            .checked_mul(minutes_per_unit)
            .and_then(|minutes| total_minutes.checked_add(minutes))
            .ok_or_else(overflow)?;

        digits.clear();
        next_unit = unit_index + 1;
    }

    // Trailing digits without a unit, e.g. "1d30"
    if !digits.is_empty() {
        return Err(invalid());
    }
    if total_minutes == 0 {
        return Err(TaskError::InvalidDuration(Message::ZeroDuration));
    }

    Duration::try_minutes(total_minutes).ok_or_else(overflow)
}
