//! Core scheduling library for vocabulary review.
//!
//! Provides:
//! - Wilson score bounds used as statistical triggers
//! - Interval bucket table with a change journal
//! - Review transition, interval auto-tuning and placement algorithms
//! - Shared types (Review, Word, DifficultyEstimate, etc.)

pub mod algorithm;
pub mod error;
pub mod interval_table;
pub mod text;
pub mod types;
pub mod wilson;

pub use algorithm::{auto_tune, next_review, placement, review_attempt, NextReview, SchedulingResult, Step};
pub use error::{IntervalError, Result};
pub use interval_table::{Counts, IntervalChange, IntervalTable, DAY_HOURS, MAXIMUM_INTERVAL_HOURS};
pub use text::normalize_item;
pub use types::{
    DifficultyEstimate, IntervalStat, LevelEstimate, NewWordStat, Review, SchedulerSettings, Word,
};
pub use wilson::{is_too_easy, is_too_hard, wilson};
