//! Test fixtures and factory functions for creating test data.

use chrono::{DateTime, Duration, TimeZone, Utc};

/// Fixed starting clock for scenarios.
pub fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap()
}

/// `start()` plus a number of hours.
pub fn at_hours(hours: i64) -> DateTime<Utc> {
    start() + Duration::hours(hours)
}

/// Numbered words sharing a prefix and frequency class, e.g. `one0`, `one1`.
pub fn class_words(prefix: &str, class: i64, count: usize) -> Vec<(String, i64)> {
    (0..count).map(|i| (format!("{prefix}{i}"), class)).collect()
}

/// Ids of a word batch.
pub fn ids(words: &[srs_core::Word]) -> Vec<&str> {
    words.iter().map(|word| word.id.as_str()).collect()
}
