//! Discretized review intervals with running success counters.
//!
//! Buckets are keyed by their interval in whole hours. Reviews refer to a
//! bucket by that value, so replacing a bucket is a data rewrite: every
//! mutation is appended to a journal that the store replays inside the same
//! transaction.

use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::{IntervalError, Result};
use crate::types::{IntervalStat, Review};

/// Hours in a day. The 1 day bucket is a protected floor.
pub const DAY_HOURS: i64 = 24;

/// Upper limit for any assigned interval (100 years).
pub const MAXIMUM_INTERVAL_HOURS: i64 = 36500 * DAY_HOURS;

/// Correct/incorrect counters of one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    pub correct: u32,
    pub incorrect: u32,
}

impl Counts {
    pub fn total(&self) -> u32 {
        self.correct + self.incorrect
    }

    fn record(&mut self, correct: bool) {
        if correct {
            self.correct += 1;
        } else {
            self.incorrect += 1;
        }
    }
}

/// A single mutation of the interval table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntervalChange {
    /// New zero-initialized bucket.
    Inserted { hours: i64 },
    /// One answer counted against a bucket.
    Recorded { hours: i64, correct: bool },
    /// Bucket moved to a new value with counters reset; reviews follow it.
    Renamed { from: i64, to: i64 },
    /// Bucket deleted; its reviews move to an existing bucket.
    Merged { from: i64, into: i64 },
}

impl IntervalChange {
    /// Old and new bucket of a rename or merge.
    pub fn replacement(&self) -> Option<(i64, i64)> {
        match *self {
            Self::Renamed { from, to } => Some((from, to)),
            Self::Merged { from, into } => Some((from, into)),
            Self::Inserted { .. } | Self::Recorded { .. } => None,
        }
    }

    /// Move a review that points at a replaced bucket, shifting its due
    /// date by the same amount so that `due = reviewed + interval` holds.
    pub fn repoint(&self, review: &mut Review) {
        if let Some((from, to)) = self.replacement() {
            if review.interval_hours == from {
                review.interval_hours = to;
                review.due += Duration::hours(to - from);
            }
        }
    }
}

/// The set of legal review intervals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalTable {
    buckets: BTreeMap<i64, Counts>,
    journal: Vec<IntervalChange>,
}

impl Default for IntervalTable {
    fn default() -> Self {
        Self::new()
    }
}

impl IntervalTable {
    /// Table holding only the 0 and 1 day floors.
    pub fn new() -> Self {
        let mut buckets = BTreeMap::new();
        buckets.insert(0, Counts::default());
        buckets.insert(DAY_HOURS, Counts::default());
        Self {
            buckets,
            journal: Vec::new(),
        }
    }

    /// Rebuild a table from stored rows.
    ///
    /// Missing floors are inserted (and journaled, so the store picks them up).
    pub fn from_stats<I>(stats: I) -> Result<Self>
    where
        I: IntoIterator<Item = IntervalStat>,
    {
        let mut buckets = BTreeMap::new();
        for stat in stats {
            let counts = Counts {
                correct: stat.correct,
                incorrect: stat.incorrect,
            };
            if buckets.insert(stat.hours, counts).is_some() {
                return Err(IntervalError::Duplicate { hours: stat.hours });
            }
        }

        let mut table = Self {
            buckets,
            journal: Vec::new(),
        };
        table.insert(0);
        table.insert(DAY_HOURS);
        Ok(table)
    }

    pub fn contains(&self, hours: i64) -> bool {
        self.buckets.contains_key(&hours)
    }

    pub fn counts(&self, hours: i64) -> Option<Counts> {
        self.buckets.get(&hours).copied()
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Bucket values in ascending order.
    pub fn intervals(&self) -> Vec<i64> {
        self.buckets.keys().copied().collect()
    }

    /// Snapshot of every bucket, ascending.
    pub fn stats(&self) -> Vec<IntervalStat> {
        self.buckets
            .iter()
            .map(|(&hours, counts)| IntervalStat {
                hours,
                correct: counts.correct,
                incorrect: counts.incorrect,
            })
            .collect()
    }

    /// Largest bucket value.
    pub fn max(&self) -> i64 {
        self.buckets.keys().next_back().copied().unwrap_or(0)
    }

    /// Largest bucket strictly smaller than `hours`.
    pub fn previous(&self, hours: i64) -> Option<i64> {
        self.buckets.range(..hours).next_back().map(|(&h, _)| h)
    }

    /// Smallest bucket strictly greater than `hours`.
    pub fn next(&self, hours: i64) -> Option<i64> {
        self.buckets
            .range((Excluded(hours), Unbounded))
            .next()
            .map(|(&h, _)| h)
    }

    /// Journaled changes since the last call.
    pub fn take_changes(&mut self) -> Vec<IntervalChange> {
        std::mem::take(&mut self.journal)
    }

    /// Pending journal, oldest first.
    pub fn changes(&self) -> &[IntervalChange] {
        &self.journal
    }

    /// Insert a zero-initialized bucket. Returns false if it already exists.
    pub fn insert(&mut self, hours: i64) -> bool {
        if self.contains(hours) {
            return false;
        }
        self.buckets.insert(hours, Counts::default());
        self.journal.push(IntervalChange::Inserted { hours });
        true
    }

    /// Count an answer against a bucket, creating it if needed.
    pub fn record(&mut self, hours: i64, correct: bool) {
        self.insert(hours);
        self.buckets.entry(hours).or_default().record(correct);
        self.journal.push(IntervalChange::Recorded { hours, correct });
    }

    /// Move a bucket to a new value and reset its counters.
    pub fn rename(&mut self, from: i64, to: i64) -> Result<()> {
        if self.contains(to) {
            return Err(IntervalError::Duplicate { hours: to });
        }
        if self.buckets.remove(&from).is_none() {
            return Err(IntervalError::Missing { hours: from });
        }
        self.buckets.insert(to, Counts::default());
        self.journal.push(IntervalChange::Renamed { from, to });
        Ok(())
    }

    /// Delete a bucket in favour of an existing one. The survivor keeps its
    /// own counters; the deleted bucket's counters are discarded.
    pub fn merge(&mut self, from: i64, into: i64) -> Result<()> {
        if from == into {
            return Err(IntervalError::Duplicate { hours: into });
        }
        if !self.contains(into) {
            return Err(IntervalError::Missing { hours: into });
        }
        if self.buckets.remove(&from).is_none() {
            return Err(IntervalError::Missing { hours: from });
        }
        self.journal.push(IntervalChange::Merged { from, into });
        Ok(())
    }

    /// Merge into `to` if it exists, rename otherwise.
    pub fn replace(&mut self, from: i64, to: i64) -> Result<()> {
        if self.contains(to) {
            self.merge(from, to)
        } else {
            self.rename(from, to)
        }
    }

    /// Synthesize doublings of the largest bucket until one reaches `target`.
    pub fn extend_to(&mut self, target: i64) {
        let target = target.min(MAXIMUM_INTERVAL_HOURS);
        while self.max() < target {
            let doubled = self.max().saturating_mul(2).max(DAY_HOURS);
            self.insert(doubled);
        }
    }

    /// Bucket for a successful on-time review.
    ///
    /// Picks the largest bucket not exceeding `target`, but at least the
    /// first bucket above `previous`. With only doubled buckets above the
    /// previous interval, the result can be as little as half of `target`
    /// (a 480h target lands on 384h when the ladder is 48, 96, 192, 384).
    pub fn assign_growth(&mut self, previous: i64, target: i64) -> i64 {
        self.extend_to(target.max(previous + 1));
        let rung = self.next(previous).unwrap_or_else(|| self.max());
        let fitted = self
            .buckets
            .range(..=target)
            .next_back()
            .map(|(&h, _)| h)
            .unwrap_or(0);
        fitted.max(rung)
    }
}
