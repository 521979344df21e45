//! Time-derived task identifiers.
//!
//! An id is the local creation time down to the millisecond
//! (`YYYYMMDDHHMMSSmmm`), so ids sort in creation order and a short prefix
//! such as the date is usually enough to find a task. When two tasks are
//! created within the same millisecond the later ones get a zero-padded
//! `-NNNN` suffix, which keeps the string order equal to the creation order.

use chrono::NaiveDateTime;

pub const ID_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S%3f";

/// Generates an id for `now` that `is_taken` does not report as used.
pub fn generate_id<F>(now: NaiveDateTime, is_taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    let base = now.format(ID_TIMESTAMP_FORMAT).to_string();
    if !is_taken(&base) {
        return base;
    }

    let mut counter = 1u32;
    loop {
        let candidate = format!("{}-{:04}", base, counter);
        if !is_taken(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}
