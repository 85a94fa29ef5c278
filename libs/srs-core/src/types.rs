//! Core types for the review scheduler.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// One stored attempt of an item.
///
/// The most recent review of an item (by `reviewed`) is its current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub item: String,
    /// Interval assigned after this attempt, in whole hours.
    pub interval_hours: i64,
    pub reviewed: DateTime<Utc>,
    pub due: DateTime<Utc>,
    pub correct: bool,
}

impl Review {
    /// Interval as a duration.
    pub fn interval(&self) -> Duration {
        Duration::hours(self.interval_hours)
    }

    /// Whether an attempt at `now` comes before the item was due.
    pub fn is_early(&self, now: DateTime<Utc>) -> bool {
        now < self.due
    }
}

/// Item handed out by the word scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: String,
    pub is_new: bool,
    /// Frequency class; meaningful for new words.
    pub difficulty: i64,
}

impl Word {
    /// Word that is due for review.
    pub fn review(id: String) -> Self {
        Self {
            id,
            is_new: false,
            difficulty: 0,
        }
    }

    /// Word the learner has never seen.
    pub fn new_word(id: String, difficulty: i64) -> Self {
        Self {
            id,
            is_new: true,
            difficulty,
        }
    }
}

/// Stored statistics of one interval bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalStat {
    pub hours: i64,
    pub correct: u32,
    pub incorrect: u32,
}

/// First-presentation statistics of one frequency class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWordStat {
    pub frequency_class: i64,
    pub correct: u32,
    pub incorrect: u32,
}

/// Stored level estimate and the answers counted since it last changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelEstimate {
    pub level: i64,
    pub correct: u32,
    pub incorrect: u32,
}

impl LevelEstimate {
    /// Count a first-time answer, then move to `placement` if it differs.
    ///
    /// Moving to a new level resets the counters.
    pub fn observe(self, correct: bool, placement: i64) -> Self {
        if placement != self.level {
            return Self {
                level: placement,
                correct: 0,
                incorrect: 0,
            };
        }
        if correct {
            Self {
                correct: self.correct + 1,
                ..self
            }
        } else {
            Self {
                incorrect: self.incorrect + 1,
                ..self
            }
        }
    }
}

/// Read-only snapshot of the learner's estimated level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyEstimate {
    pub level: i64,
    pub correct: u32,
    pub incorrect: u32,
    /// Frequency class of the easiest unseen word.
    pub min: i64,
    /// Frequency class of the hardest unseen word.
    pub max: i64,
}

impl DifficultyEstimate {
    /// Combine the stored estimate with the unseen-word bounds.
    /// The level is clamped so it never falls below `min`.
    pub fn new(estimate: LevelEstimate, min: i64, max: i64) -> Self {
        Self {
            level: estimate.level.max(min),
            correct: estimate.correct,
            incorrect: estimate.incorrect,
            min,
            max,
        }
    }
}

/// Scheduler configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerSettings {
    /// Growth factor applied to the elapsed time on a successful review.
    pub coefficient: f64,
    /// Number of words handed out per batch.
    pub batch_size: usize,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            coefficient: 2.0,
            batch_size: 10,
        }
    }
}
