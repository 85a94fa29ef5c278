//! Conversions between domain timestamps and stored unix seconds.

use chrono::{DateTime, Utc};
use rusqlite::Row;

/// Seconds since the unix epoch, as stored in `reviewed` and `due`.
pub fn unix_seconds(timestamp: DateTime<Utc>) -> i64 {
    timestamp.timestamp()
}

/// Read a unix-seconds column as a UTC timestamp.
pub fn timestamp_column(row: &Row, index: usize) -> rusqlite::Result<DateTime<Utc>> {
    let seconds: i64 = row.get(index)?;
    DateTime::from_timestamp(seconds, 0)
        .ok_or(rusqlite::Error::IntegralValueOutOfRange(index, seconds))
}

/// Stored limit for an optional row count; SQLite treats -1 as unbounded.
pub fn sql_limit(limit: Option<usize>) -> i64 {
    limit
        .map(|n| i64::try_from(n).unwrap_or(i64::MAX))
        .unwrap_or(-1)
}
