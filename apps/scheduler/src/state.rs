//! Per-learner session handle.

use crate::db::{ReviewRepository, SqliteRepository, StoreTransaction};
use crate::engine;
use crate::error::Result;
use chrono::{DateTime, Utc};
use srs_core::{
    DifficultyEstimate, IntervalChange, IntervalStat, LevelEstimate, Review, SchedulerSettings,
    SchedulingResult, Word,
};
use std::path::Path;

/// One learner's review store plus the settings used to schedule it.
///
/// Each method runs in its own transaction and commits on success.
pub struct LearnerSession {
    repository: SqliteRepository,
    settings: SchedulerSettings,
}

impl LearnerSession {
    pub fn new(repository: SqliteRepository, settings: SchedulerSettings) -> Self {
        Self {
            repository,
            settings,
        }
    }

    /// Open the learner's store at path, creating it if necessary.
    pub fn open<P: AsRef<Path>>(path: P, settings: SchedulerSettings) -> Result<Self> {
        Ok(Self::new(SqliteRepository::open(path)?, settings))
    }

    /// Session over an in-memory store (for testing).
    pub fn open_in_memory(settings: SchedulerSettings) -> Result<Self> {
        Ok(Self::new(SqliteRepository::open_in_memory()?, settings))
    }

    pub fn settings(&self) -> &SchedulerSettings {
        &self.settings
    }

    fn with_transaction<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&StoreTransaction<'_>, &SchedulerSettings) -> Result<T>,
    {
        let tx = self.repository.transaction()?;
        let value = f(&tx, &self.settings)?;
        tx.commit()?;
        Ok(value)
    }

    pub fn get_words(&mut self, n: usize, now: DateTime<Utc>) -> Result<Vec<Word>> {
        self.with_transaction(|tx, _| engine::get_words(tx, n, now))
    }

    pub fn get_words_with<P>(&mut self, n: usize, now: DateTime<Utc>, predicate: P) -> Result<Vec<Word>>
    where
        P: FnMut(&str) -> bool,
    {
        self.with_transaction(|tx, _| engine::get_words_with(tx, n, now, predicate))
    }

    pub fn record_attempt(&mut self, word: &Word, correct: bool, now: DateTime<Utc>) -> Result<SchedulingResult> {
        self.with_transaction(|tx, settings| engine::record_attempt(tx, word, correct, now, settings))
    }

    pub fn record_answer(&mut self, item: &str, correct: bool, now: DateTime<Utc>) -> Result<SchedulingResult> {
        self.with_transaction(|tx, settings| engine::record_answer(tx, item, correct, now, settings))
    }

    pub fn schedule_review(&mut self, as_of: DateTime<Utc>, limit: Option<usize>) -> Result<Vec<String>> {
        self.with_transaction(|tx, _| engine::schedule_review(tx, as_of, limit))
    }

    pub fn schedule_review_with<P>(
        &mut self,
        as_of: DateTime<Utc>,
        limit: Option<usize>,
        predicate: P,
    ) -> Result<Vec<String>>
    where
        P: FnMut(&str) -> bool,
    {
        self.with_transaction(|tx, _| engine::schedule_review_with(tx, as_of, limit, predicate))
    }

    pub fn placement(&mut self) -> Result<i64> {
        self.with_transaction(|tx, _| engine::placement(tx))
    }

    pub fn estimated_level(&mut self) -> Result<DifficultyEstimate> {
        self.with_transaction(|tx, _| engine::estimated_level(tx))
    }

    pub fn override_level(&mut self, level: i64) -> Result<LevelEstimate> {
        self.with_transaction(|tx, _| engine::override_level(tx, level))
    }

    pub fn add_word(&mut self, word: &str, frequency_class: i64) -> Result<()> {
        self.with_transaction(|tx, _| engine::add_word(tx, word, frequency_class))
    }

    pub fn most_recent_review(&mut self, item: &str) -> Result<Option<Review>> {
        let item = srs_core::normalize_item(item);
        self.with_transaction(|tx, _| engine::most_recent_review(tx, &item))
    }

    pub fn review_history(&mut self, item: &str) -> Result<Vec<Review>> {
        let item = srs_core::normalize_item(item);
        self.with_transaction(|tx, _| engine::review_history(tx, &item))
    }

    pub fn interval_stats(&mut self) -> Result<Vec<IntervalStat>> {
        self.with_transaction(|tx, _| engine::interval_stats(tx))
    }

    pub fn tune_intervals(&mut self) -> Result<Vec<IntervalChange>> {
        self.with_transaction(|tx, _| engine::tune_intervals(tx))
    }

    /// Distinct interval values referenced by stored reviews.
    pub fn review_interval_values(&mut self) -> Result<Vec<i64>> {
        self.with_transaction(|tx, _| Ok(tx.review_interval_values()?))
    }
}
