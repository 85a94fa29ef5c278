//! Scheduling operations over a review store.
//!
//! Every function here runs against one store transaction and never reads
//! the clock; callers pass `now`.

pub mod placement;
pub mod review;
pub mod words;

pub use placement::{estimated_level, observe, override_level, placement};
pub use review::{
    interval_stats, most_recent_review, review_history, schedule_review, schedule_review_with,
    tune_intervals, update_review,
};
pub use words::{add_word, get_words, get_words_with, record_answer, record_attempt};
