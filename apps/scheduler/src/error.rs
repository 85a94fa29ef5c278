//! Error handling for scheduling operations.

use crate::db::DbError;
use srs_core::IntervalError;
use thiserror::Error;

/// Scheduler error types.
///
/// Any error aborts the enclosing store transaction.
#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("storage error: {0}")]
    Storage(#[from] DbError),

    #[error("invalid interval: {0}")]
    InvalidInterval(#[from] IntervalError),
}

pub type Result<T> = std::result::Result<T, SchedulerError>;
