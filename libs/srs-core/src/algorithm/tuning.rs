//! Interval auto-tuning.
//!
//! After every review update, each bucket above the 1 day floor is checked
//! against its own success counters. A bucket learners keep failing is
//! shortened towards its lower neighbour; a bucket they keep passing is
//! lengthened towards its upper neighbour. Either way the bucket is renamed
//! to the midpoint, or merged into it when the midpoint already exists.

use crate::error::Result;
use crate::interval_table::{IntervalTable, DAY_HOURS};
use crate::wilson::{is_too_easy, is_too_hard};

/// Run one tuning pass over every bucket, in ascending order.
///
/// Running it again without new answers changes nothing: renamed buckets
/// start from zero counters and merged-into buckets keep counters that were
/// already judged.
pub fn auto_tune(table: &mut IntervalTable) -> Result<()> {
    let snapshot: Vec<i64> = table
        .intervals()
        .into_iter()
        .filter(|&hours| hours > DAY_HOURS)
        .collect();

    for hours in snapshot {
        // Merged away earlier in this pass.
        let Some(counts) = table.counts(hours) else {
            continue;
        };

        if is_too_hard(counts.correct, counts.incorrect) {
            shorten(table, hours)?;
        } else if is_too_easy(counts.correct, counts.incorrect) {
            lengthen(table, hours)?;
        }
    }
    Ok(())
}

/// Replace a bucket with the midpoint between it and its lower neighbour.
///
/// Does nothing for buckets at or below 1 day. Returns whether the table changed.
pub fn shorten(table: &mut IntervalTable, hours: i64) -> Result<bool> {
    if hours <= DAY_HOURS || !table.contains(hours) {
        return Ok(false);
    }

    let previous = table.previous(hours).unwrap_or(0);
    let mid = (previous + hours) / 2;
    table.replace(hours, mid)?;
    Ok(true)
}

/// Replace a bucket with the midpoint between it and its upper neighbour.
///
/// The largest bucket gets a doubled neighbour first. When the midpoint
/// collapses onto the bucket itself, it merges into the upper neighbour.
pub fn lengthen(table: &mut IntervalTable, hours: i64) -> Result<bool> {
    if hours <= DAY_HOURS || !table.contains(hours) {
        return Ok(false);
    }

    table.extend_to(hours + 1);
    let next = match table.next(hours) {
        Some(next) => next,
        None => return Ok(false),
    };

    let mid = (hours + next) / 2;
    let target = if mid == hours { next } else { mid };
    table.replace(hours, target)?;
    Ok(true)
}
