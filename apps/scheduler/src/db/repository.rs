//! Repository pattern for review store access.

use crate::db::error::DbError;
use crate::db::time_utils::{sql_limit, timestamp_column, unix_seconds};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Transaction};
use srs_core::{IntervalChange, IntervalStat, IntervalTable, LevelEstimate, NewWordStat, Review, Word};
use std::path::Path;

type Result<T> = std::result::Result<T, DbError>;

/// Repository for review history.
pub trait ReviewRepository {
    /// Newest review of an item, by `reviewed` then insertion order.
    fn most_recent_review(&self, item: &str) -> Result<Option<Review>>;
    fn insert_review(&self, review: &Review) -> Result<i64>;
    /// Items whose newest review is due at `as_of`, oldest due first.
    fn due_items(&self, as_of: DateTime<Utc>, limit: Option<usize>) -> Result<Vec<String>>;
    /// Move every review in bucket `from` to bucket `to`, shifting `due` along.
    fn repoint_reviews(&self, from: i64, to: i64) -> Result<usize>;
    fn review_history(&self, item: &str) -> Result<Vec<Review>>;
    /// Distinct interval values referenced by any review.
    fn review_interval_values(&self) -> Result<Vec<i64>>;
}

/// Repository for interval buckets.
pub trait IntervalRepository {
    fn load_interval_table(&self) -> Result<IntervalTable>;
    fn apply_interval_change(&self, change: &IntervalChange) -> Result<()>;
}

/// Repository for placement statistics and the level estimate.
pub trait PlacementRepository {
    fn new_word_stats(&self) -> Result<Vec<NewWordStat>>;
    fn record_new_word(&self, frequency_class: i64, correct: bool) -> Result<()>;
    fn level_estimate(&self) -> Result<LevelEstimate>;
    fn save_level_estimate(&self, estimate: &LevelEstimate) -> Result<()>;
    /// Easiest and hardest frequency class among unseen words (0, 0 if none).
    fn unseen_class_bounds(&self) -> Result<(i64, i64)>;
}

/// Repository for the word catalog.
pub trait WordRepository {
    fn add_word(&self, word: &str, frequency_class: i64) -> Result<()>;
    fn frequency_class(&self, word: &str) -> Result<Option<i64>>;
    /// Unseen words at or above `level`, in catalog order.
    fn unseen_words_from(&self, level: i64, limit: Option<usize>) -> Result<Vec<Word>>;
    /// Unseen words below `level`, closest to the boundary first.
    fn unseen_words_below(&self, level: i64, limit: Option<usize>) -> Result<Vec<Word>>;
}

/// Everything the scheduling engine needs from a review store.
pub trait Store: ReviewRepository + IntervalRepository + PlacementRepository + WordRepository {}

impl<T> Store for T where T: ReviewRepository + IntervalRepository + PlacementRepository + WordRepository {}

/// SQLite review store for one learner.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Open database at path, creating if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    /// Open in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(super::schema::SCHEMA)?;
        self.conn.execute_batch(super::schema::INIT_INTERVALS)?;
        self.conn.execute_batch(super::schema::INIT_ESTIMATED_LEVEL)?;
        self.conn.execute(
            "INSERT OR IGNORE INTO schema_version (version) VALUES (?1)",
            params![super::schema::SCHEMA_VERSION],
        )?;
        Ok(())
    }

    /// Begin a transaction. It rolls back unless committed.
    pub fn transaction(&mut self) -> Result<StoreTransaction<'_>> {
        Ok(StoreTransaction {
            tx: self.conn.transaction()?,
        })
    }
}

/// A transaction against the review store; all repository traits are
/// implemented here so that every engine operation is atomic.
pub struct StoreTransaction<'c> {
    tx: Transaction<'c>,
}

impl StoreTransaction<'_> {
    pub fn commit(self) -> Result<()> {
        self.tx.commit()?;
        Ok(())
    }

    pub fn rollback(self) -> Result<()> {
        self.tx.rollback()?;
        Ok(())
    }

    fn row_to_review(row: &rusqlite::Row) -> rusqlite::Result<Review> {
        Ok(Review {
            item: row.get(0)?,
            interval_hours: row.get(1)?,
            reviewed: timestamp_column(row, 2)?,
            due: timestamp_column(row, 3)?,
            correct: row.get(4)?,
        })
    }

    fn row_to_word(row: &rusqlite::Row) -> rusqlite::Result<Word> {
        Ok(Word::new_word(row.get(0)?, row.get(1)?))
    }

    fn unseen_words(&self, sql: &str, level: i64, limit: Option<usize>) -> Result<Vec<Word>> {
        let mut stmt = self.tx.prepare(sql)?;
        let words = stmt
            .query_map(params![level, sql_limit(limit)], Self::row_to_word)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(words)
    }
}

fn ensure_bucket(affected: usize, hours: i64) -> Result<()> {
    if affected == 0 {
        return Err(DbError::InvalidData(format!("interval bucket {hours}h is missing")));
    }
    Ok(())
}

impl ReviewRepository for StoreTransaction<'_> {
    fn most_recent_review(&self, item: &str) -> Result<Option<Review>> {
        self.tx
            .query_row(
                "SELECT item, interval_hours, reviewed, due, correct FROM review
                 WHERE item = ?1
                 ORDER BY reviewed DESC, id DESC
                 LIMIT 1",
                params![item],
                Self::row_to_review,
            )
            .optional()
            .map_err(Into::into)
    }

    fn insert_review(&self, review: &Review) -> Result<i64> {
        self.tx.execute(
            "INSERT INTO review (item, interval_hours, reviewed, due, correct) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                review.item,
                review.interval_hours,
                unix_seconds(review.reviewed),
                unix_seconds(review.due),
                review.correct,
            ],
        )?;
        Ok(self.tx.last_insert_rowid())
    }

    fn due_items(&self, as_of: DateTime<Utc>, limit: Option<usize>) -> Result<Vec<String>> {
        let mut stmt = self.tx.prepare(
            "SELECT item FROM most_recent_review
             WHERE due <= ?1
             ORDER BY due ASC, id ASC
             LIMIT ?2",
        )?;
        let items = stmt
            .query_map(params![unix_seconds(as_of), sql_limit(limit)], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;
        Ok(items)
    }

    fn repoint_reviews(&self, from: i64, to: i64) -> Result<usize> {
        let count = self.tx.execute(
            "UPDATE review SET interval_hours = ?2, due = due + (?2 - ?1) * 3600
             WHERE interval_hours = ?1",
            params![from, to],
        )?;
        Ok(count)
    }

    fn review_history(&self, item: &str) -> Result<Vec<Review>> {
        let mut stmt = self.tx.prepare(
            "SELECT item, interval_hours, reviewed, due, correct FROM review
             WHERE item = ?1
             ORDER BY reviewed ASC, id ASC",
        )?;
        let reviews = stmt
            .query_map(params![item], Self::row_to_review)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(reviews)
    }

    fn review_interval_values(&self) -> Result<Vec<i64>> {
        let mut stmt = self
            .tx
            .prepare("SELECT DISTINCT interval_hours FROM review ORDER BY interval_hours")?;
        let values = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<i64>, _>>()?;
        Ok(values)
    }
}

impl IntervalRepository for StoreTransaction<'_> {
    fn load_interval_table(&self) -> Result<IntervalTable> {
        let mut stmt = self
            .tx
            .prepare("SELECT hours, correct, incorrect FROM interval_stat ORDER BY hours")?;
        let stats = stmt
            .query_map([], |row| {
                Ok(IntervalStat {
                    hours: row.get(0)?,
                    correct: row.get(1)?,
                    incorrect: row.get(2)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        IntervalTable::from_stats(stats).map_err(|e| DbError::InvalidData(e.to_string()))
    }

    fn apply_interval_change(&self, change: &IntervalChange) -> Result<()> {
        match *change {
            IntervalChange::Inserted { hours } => {
                self.tx.execute(
                    "INSERT OR IGNORE INTO interval_stat (hours) VALUES (?1)",
                    params![hours],
                )?;
            }
            IntervalChange::Recorded { hours, correct } => {
                let sql = if correct {
                    "UPDATE interval_stat SET correct = correct + 1 WHERE hours = ?1"
                } else {
                    "UPDATE interval_stat SET incorrect = incorrect + 1 WHERE hours = ?1"
                };
                ensure_bucket(self.tx.execute(sql, params![hours])?, hours)?;
            }
            IntervalChange::Renamed { from, to } => {
                let affected = self.tx.execute(
                    "UPDATE interval_stat SET hours = ?2, correct = 0, incorrect = 0 WHERE hours = ?1",
                    params![from, to],
                )?;
                ensure_bucket(affected, from)?;
            }
            IntervalChange::Merged { from, .. } => {
                let affected = self
                    .tx
                    .execute("DELETE FROM interval_stat WHERE hours = ?1", params![from])?;
                ensure_bucket(affected, from)?;
            }
        }
        Ok(())
    }
}

impl PlacementRepository for StoreTransaction<'_> {
    fn new_word_stats(&self) -> Result<Vec<NewWordStat>> {
        let mut stmt = self.tx.prepare(
            "SELECT frequency_class, correct, incorrect FROM new_word_stat ORDER BY frequency_class ASC",
        )?;
        let stats = stmt
            .query_map([], |row| {
                Ok(NewWordStat {
                    frequency_class: row.get(0)?,
                    correct: row.get(1)?,
                    incorrect: row.get(2)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(stats)
    }

    fn record_new_word(&self, frequency_class: i64, correct: bool) -> Result<()> {
        let (x, y) = if correct { (1, 0) } else { (0, 1) };
        self.tx.execute(
            "INSERT INTO new_word_stat (frequency_class, correct, incorrect)
             VALUES (?1, ?2, ?3)
             ON CONFLICT (frequency_class) DO UPDATE SET
                 correct = correct + excluded.correct,
                 incorrect = incorrect + excluded.incorrect",
            params![frequency_class, x, y],
        )?;
        Ok(())
    }

    fn level_estimate(&self) -> Result<LevelEstimate> {
        let estimate = self
            .tx
            .query_row(
                "SELECT level, correct, incorrect FROM estimated_level WHERE id = 1",
                [],
                |row| {
                    Ok(LevelEstimate {
                        level: row.get(0)?,
                        correct: row.get(1)?,
                        incorrect: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(estimate.unwrap_or_default())
    }

    fn save_level_estimate(&self, estimate: &LevelEstimate) -> Result<()> {
        self.tx.execute(
            "INSERT INTO estimated_level (id, level, correct, incorrect)
             VALUES (1, ?1, ?2, ?3)
             ON CONFLICT (id) DO UPDATE SET
                 level = excluded.level,
                 correct = excluded.correct,
                 incorrect = excluded.incorrect",
            params![estimate.level, estimate.correct, estimate.incorrect],
        )?;
        Ok(())
    }

    fn unseen_class_bounds(&self) -> Result<(i64, i64)> {
        self.tx
            .query_row(
                "SELECT coalesce(min(frequency_class), 0), coalesce(max(frequency_class), 0)
                 FROM word
                 WHERE word NOT IN (SELECT item FROM review)",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .map_err(Into::into)
    }
}

impl WordRepository for StoreTransaction<'_> {
    fn add_word(&self, word: &str, frequency_class: i64) -> Result<()> {
        self.tx.execute(
            "INSERT INTO word (word, frequency_class) VALUES (?1, ?2)
             ON CONFLICT (word) DO UPDATE SET frequency_class = excluded.frequency_class",
            params![word, frequency_class],
        )?;
        Ok(())
    }

    fn frequency_class(&self, word: &str) -> Result<Option<i64>> {
        self.tx
            .query_row(
                "SELECT frequency_class FROM word WHERE word = ?1",
                params![word],
                |row| row.get(0),
            )
            .optional()
            .map_err(Into::into)
    }

    fn unseen_words_from(&self, level: i64, limit: Option<usize>) -> Result<Vec<Word>> {
        self.unseen_words(
            "SELECT word, frequency_class FROM word
             WHERE frequency_class >= ?1 AND word NOT IN (SELECT item FROM review)
             ORDER BY id ASC
             LIMIT ?2",
            level,
            limit,
        )
    }

    fn unseen_words_below(&self, level: i64, limit: Option<usize>) -> Result<Vec<Word>> {
        self.unseen_words(
            "SELECT word, frequency_class FROM word
             WHERE frequency_class < ?1 AND word NOT IN (SELECT item FROM review)
             ORDER BY id DESC
             LIMIT ?2",
            level,
            limit,
        )
    }
}
