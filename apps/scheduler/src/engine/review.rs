//! Review state: due queries, attempt updates and interval tuning.

use crate::db::{IntervalRepository, ReviewRepository};
use crate::error::Result;
use chrono::{DateTime, Utc};
use srs_core::{auto_tune, review_attempt, IntervalChange, IntervalStat, IntervalTable, Review};
use srs_core::{SchedulerSettings, SchedulingResult};
use tracing::{debug, info};

/// Items due at `as_of`, oldest due first. `None` means no limit.
pub fn schedule_review<S>(store: &S, as_of: DateTime<Utc>, limit: Option<usize>) -> Result<Vec<String>>
where
    S: ReviewRepository + ?Sized,
{
    Ok(store.due_items(as_of, limit)?)
}

/// Like [`schedule_review`], but only items accepted by `predicate` count
/// towards the limit.
pub fn schedule_review_with<S, P>(
    store: &S,
    as_of: DateTime<Utc>,
    limit: Option<usize>,
    mut predicate: P,
) -> Result<Vec<String>>
where
    S: ReviewRepository + ?Sized,
    P: FnMut(&str) -> bool,
{
    let items = store
        .due_items(as_of, None)?
        .into_iter()
        .filter(|item| predicate(item))
        .take(limit.unwrap_or(usize::MAX))
        .collect();
    Ok(items)
}

pub fn most_recent_review<S>(store: &S, item: &str) -> Result<Option<Review>>
where
    S: ReviewRepository + ?Sized,
{
    Ok(store.most_recent_review(item)?)
}

pub fn review_history<S>(store: &S, item: &str) -> Result<Vec<Review>>
where
    S: ReviewRepository + ?Sized,
{
    Ok(store.review_history(item)?)
}

/// Store the outcome of an attempt and retune the interval table.
///
/// `item` must already be normalized. The returned review reflects any
/// bucket the tuning pass moved it to.
pub fn update_review<S>(
    store: &S,
    item: &str,
    correct: bool,
    now: DateTime<Utc>,
    settings: &SchedulerSettings,
) -> Result<SchedulingResult>
where
    S: ReviewRepository + IntervalRepository + ?Sized,
{
    let previous = store.most_recent_review(item)?;
    let mut table = store.load_interval_table()?;

    let mut result = review_attempt(item, previous.as_ref(), correct, now, settings, &mut table);
    apply_changes(store, &mut table)?;
    store.insert_review(&result.review)?;

    auto_tune(&mut table)?;
    for change in apply_changes(store, &mut table)? {
        change.repoint(&mut result.review);
    }

    debug!(
        item,
        correct,
        step = ?result.step,
        interval_hours = result.review.interval_hours,
        "review recorded"
    );
    Ok(result)
}

/// Run a tuning pass on its own. Returns the changes it made.
pub fn tune_intervals<S>(store: &S) -> Result<Vec<IntervalChange>>
where
    S: ReviewRepository + IntervalRepository + ?Sized,
{
    let mut table = store.load_interval_table()?;
    auto_tune(&mut table)?;
    apply_changes(store, &mut table)
}

/// Every interval bucket with its counters, ascending.
pub fn interval_stats<S>(store: &S) -> Result<Vec<IntervalStat>>
where
    S: IntervalRepository + ?Sized,
{
    Ok(store.load_interval_table()?.stats())
}

/// Replay the table's journal into the store, repointing reviews off any
/// replaced bucket.
fn apply_changes<S>(store: &S, table: &mut IntervalTable) -> Result<Vec<IntervalChange>>
where
    S: ReviewRepository + IntervalRepository + ?Sized,
{
    let changes = table.take_changes();
    for change in &changes {
        store.apply_interval_change(change)?;
        match change.replacement() {
            Some((from, to)) => {
                let moved = store.repoint_reviews(from, to)?;
                info!(from, to, moved, "interval bucket replaced");
            }
            None => debug!(?change, "interval change applied"),
        }
    }
    Ok(changes)
}
