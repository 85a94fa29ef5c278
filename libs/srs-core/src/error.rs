//! Error types for srs-core.

use thiserror::Error;

/// Result type alias using IntervalError.
pub type Result<T> = std::result::Result<T, IntervalError>;

/// Invariant violations in the interval table.
///
/// These indicate a bug in the caller: a correct tuning pass never renames a
/// bucket onto an existing value or touches a bucket that is gone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
    #[error("interval bucket {hours}h already exists")]
    Duplicate { hours: i64 },

    #[error("interval bucket {hours}h does not exist")]
    Missing { hours: i64 },
}
