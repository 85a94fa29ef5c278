//! Scheduling algorithms: review transitions, interval tuning and placement.

pub mod placement;
pub mod review;
pub mod tuning;

pub use placement::placement;
pub use review::{next_review, NextReview, Step};
pub use tuning::{auto_tune, lengthen, shorten};

use crate::interval_table::IntervalTable;
use crate::types::{Review, SchedulerSettings};
use chrono::{DateTime, Duration, SubsecRound, Utc};

/// Result of scheduling an item after an attempt.
#[derive(Debug, Clone)]
pub struct SchedulingResult {
    pub review: Review,
    pub step: Step,
    /// True when the item had never been reviewed before.
    pub first_attempt: bool,
}

/// Compute the review to store for an attempt.
///
/// Counts the answer against the bucket the item was waiting in (unless the
/// learner crammed) and snaps the new interval onto `table`. The returned
/// interval always exists in `table`. `now` is truncated to whole seconds,
/// the resolution reviews are stored at.
pub fn review_attempt(
    item: &str,
    previous: Option<&Review>,
    correct: bool,
    now: DateTime<Utc>,
    settings: &SchedulerSettings,
    table: &mut IntervalTable,
) -> SchedulingResult {
    let now = now.trunc_subsecs(0);
    let waited = previous.map_or(0, |p| p.interval_hours);
    let crammed = previous.is_some_and(|p| p.is_early(now));
    if !crammed {
        table.record(waited, correct);
    }

    let next = next_review(previous, correct, now, settings.coefficient);
    let interval_hours = match next.step {
        Step::Advanced => table.assign_growth(waited, next.interval_hours),
        _ => {
            table.insert(next.interval_hours);
            next.interval_hours
        }
    };

    SchedulingResult {
        review: Review {
            item: item.to_string(),
            interval_hours,
            reviewed: now,
            due: now + Duration::hours(interval_hours),
            correct,
        },
        step: next.step,
        first_attempt: previous.is_none(),
    }
}
