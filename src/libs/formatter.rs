//! Display formatting for task fields.
//!
//! Converts task values into the strings shown in tables and detail views.
//! Nothing in here touches the store; the functions are pure and take the
//! user's display preferences explicitly.
//!
//! ## Examples
//!
//! ```rust
//! use taskforge::libs::formatter::{format_duration, short_id};
//! use chrono::Duration;
//!
//! assert_eq!(format_duration(&(Duration::days(1) + Duration::minutes(150))), "1d2h30m");
//! assert_eq!(format_duration(&Duration::minutes(45)), "45m");
//! assert_eq!(short_id("20250520170000123", 8), "20250520");
//! ```

use crate::libs::task::{Priority, Task};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Display preferences taken from the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySettings {
    /// `strftime` pattern for dates, e.g. `%Y-%m-%d %H:%M`
    pub date_format: String,
    /// How many leading id characters to show in tables
    pub id_length: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            id_length: 17,
        }
    }
}

/// A task with every column pre-rendered, ready for a table row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedTask {
    pub status: String,
    pub id: String,
    pub title: String,
    pub priority: String,
    pub due: String,
    pub tags: String,
    pub archived_at: String,
}

impl FormattedTask {
    pub fn new(task: &Task, settings: &DisplaySettings) -> Self {
        Self {
            status: if task.completed { "✓" } else { "✗" }.to_string(),
            id: short_id(&task.id, settings.id_length).to_string(),
            title: task.title.clone(),
            priority: format_priority(task.priority),
            due: format_datetime(task.due, &settings.date_format),
            tags: format_tags(task),
            archived_at: format_datetime(task.archived_at, &settings.date_format),
        }
    }
}

/// Leading `len` characters of an id; the whole id when it is shorter.
pub fn short_id(id: &str, len: usize) -> &str {
    match id.char_indices().nth(len) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}

pub fn format_priority(priority: Priority) -> String {
    priority.as_str().to_uppercase()
}

/// Formats an optional timestamp, empty when absent.
///
/// A pattern chrono cannot render falls back to [`DEFAULT_DATE_FORMAT`].
pub fn format_datetime(value: Option<NaiveDateTime>, pattern: &str) -> String {
    value
        .map(|dt| try_format(dt, pattern).unwrap_or_else(|| dt.format(DEFAULT_DATE_FORMAT).to_string()))
        .unwrap_or_default()
}

/// Whether `pattern` renders a plain local date-time without error.
pub fn is_valid_date_format(pattern: &str) -> bool {
    NaiveDate::from_ymd_opt(2025, 1, 31)
        .and_then(|date| date.and_hms_opt(23, 59, 0))
        .and_then(|sample| try_format(sample, pattern))
        .is_some()
}

fn try_format(dt: NaiveDateTime, pattern: &str) -> Option<String> {
    let mut text = String::new();
    write!(text, "{}", dt.format(pattern)).ok()?;
    Some(text)
}

pub fn format_tags(task: &Task) -> String {
    task.tags.iter().map(|tag| format!("#{}", tag)).collect::<Vec<_>>().join(", ")
}

/// Renders a duration in the same `<N>d<N>h<N>m` grammar that snooze accepts.
///
/// Zero-valued components are omitted, negative durations use their absolute
/// value, and anything below a minute is shown as `0m`.
pub fn format_duration(duration: &Duration) -> String {
    let total = duration.num_minutes().abs();
    let (days, hours, minutes) = (total / (24 * 60), (total / 60) % 24, total % 60);

    let mut text = String::new();
    if days > 0 {
        text.push_str(&format!("{}d", days));
    }
    if hours > 0 {
        text.push_str(&format!("{}h", hours));
    }
    if minutes > 0 || text.is_empty() {
        text.push_str(&format!("{}m", minutes));
    }
    text
}

/// Describes how far a due date is from `now`: `in 2h30m` or `overdue by 1d`.
pub fn format_relative(due: NaiveDateTime, now: NaiveDateTime) -> String {
    let delta = due - now;
    if delta < Duration::zero() {
        format!("overdue by {}", format_duration(&delta))
    } else {
        format!("in {}", format_duration(&delta))
    }
}
