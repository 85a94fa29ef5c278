//! Per-item review transition.

use crate::interval_table::{DAY_HOURS, MAXIMUM_INTERVAL_HOURS};
use crate::types::Review;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How an attempt moved an item along the interval ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Incorrect answer; the item is due again right away.
    Forgot,
    /// First success, or first success after forgetting.
    Started,
    /// Success before the item was due; spacing does not advance.
    Crammed,
    /// On-time or late success; spacing grows with the elapsed time.
    Advanced,
}

/// Raw outcome of the transition, before it is snapped onto the interval table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextReview {
    pub step: Step,
    /// For `Advanced` this is the target `coefficient * elapsed`.
    pub interval_hours: i64,
}

/// Compute the next interval for an item.
///
/// Growth is proportional to the time actually elapsed since the previous
/// review, which compensates for late reviews.
pub fn next_review(
    previous: Option<&Review>,
    correct: bool,
    now: DateTime<Utc>,
    coefficient: f64,
) -> NextReview {
    if !correct {
        return NextReview {
            step: Step::Forgot,
            interval_hours: 0,
        };
    }

    let previous = match previous {
        Some(previous) if previous.interval_hours > 0 => previous,
        _ => {
            return NextReview {
                step: Step::Started,
                interval_hours: DAY_HOURS,
            }
        }
    };

    if previous.is_early(now) {
        return NextReview {
            step: Step::Crammed,
            interval_hours: previous.interval_hours,
        };
    }

    let elapsed_hours = (now - previous.reviewed).num_seconds() as f64 / 3600.0;
    let target = (coefficient * elapsed_hours).floor();
    let interval_hours = if target.is_finite() {
        (target as i64).clamp(0, MAXIMUM_INTERVAL_HOURS)
    } else {
        MAXIMUM_INTERVAL_HOURS
    };

    NextReview {
        step: Step::Advanced,
        interval_hours,
    }
}
