//! Common test utilities and fixtures for integration tests.
//!
//! Every test runs against its own in-memory review store, so nothing needs
//! to be set up outside the test process.

#![allow(dead_code)]

pub mod fixtures;

use srs_core::SchedulerSettings;
use word_scheduler::LearnerSession;

/// Test context wrapping a learner session over an in-memory store.
pub struct TestContext {
    pub session: LearnerSession,
}

impl TestContext {
    /// Create a new test context with default settings.
    pub fn new() -> Self {
        Self::with_settings(SchedulerSettings::default())
    }

    pub fn with_settings(settings: SchedulerSettings) -> Self {
        let session = LearnerSession::open_in_memory(settings).expect("Failed to open in-memory store");
        Self { session }
    }

    /// Create a context whose word catalog holds `words`, added in order.
    pub fn with_words<S: AsRef<str>>(words: &[(S, i64)]) -> Self {
        let mut ctx = Self::new();
        for (word, class) in words {
            ctx.session
                .add_word(word.as_ref(), *class)
                .expect("Failed to add word");
        }
        ctx
    }

    /// Interval bucket values, ascending.
    pub fn intervals(&mut self) -> Vec<i64> {
        self.session
            .interval_stats()
            .expect("Failed to load intervals")
            .into_iter()
            .map(|stat| stat.hours)
            .collect()
    }

    /// Buckets are unique and every stored review points at one.
    pub fn assert_bucket_invariant(&mut self) {
        let intervals = self.intervals();
        assert!(
            intervals.windows(2).all(|pair| pair[0] < pair[1]),
            "interval buckets not strictly increasing: {intervals:?}"
        );
        for hours in self.session.review_interval_values().expect("Failed to load reviews") {
            assert!(
                intervals.contains(&hours),
                "review points at missing bucket {hours}h, buckets: {intervals:?}"
            );
        }
    }
}
