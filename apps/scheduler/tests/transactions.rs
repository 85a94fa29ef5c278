//! Atomicity of session operations against a file-backed store.

mod common;

use pretty_assertions::assert_eq;
use srs_core::SchedulerSettings;
use word_scheduler::{LearnerSession, SchedulerError};

use common::fixtures::start;

/// Make every insert into `new_word_stat` fail, so a first attempt errors
/// after its review and interval rows were already written.
const REJECT_NEW_WORD_STATS: &str = "
CREATE TRIGGER reject_new_word_stat BEFORE INSERT ON new_word_stat
BEGIN
    SELECT RAISE(ABORT, 'new word statistics are read-only');
END;
";

#[test]
fn failed_attempt_leaves_store_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reviews.db");
    let mut session = LearnerSession::open(&path, SchedulerSettings::default()).unwrap();
    session.add_word("foo", 1).unwrap();

    let conn = rusqlite::Connection::open(&path).unwrap();
    conn.execute_batch(REJECT_NEW_WORD_STATS).unwrap();

    let intervals = session.interval_stats().unwrap();
    let estimate = session.estimated_level().unwrap();

    let err = session.record_answer("foo", true, start()).unwrap_err();
    assert!(matches!(err, SchedulerError::Storage(_)), "{err:?}");

    assert!(session.review_history("foo").unwrap().is_empty());
    assert!(session.schedule_review(start(), None).unwrap().is_empty());
    assert_eq!(session.interval_stats().unwrap(), intervals);
    assert_eq!(session.estimated_level().unwrap(), estimate);

    // Once the store accepts writes again the same attempt goes through.
    conn.execute_batch("DROP TRIGGER reject_new_word_stat;").unwrap();
    let result = session.record_answer("foo", true, start()).unwrap();
    assert!(result.first_attempt);
    assert_eq!(session.review_history("foo").unwrap(), vec![result.review]);
}

#[test]
fn reopened_store_keeps_committed_attempts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reviews.db");

    {
        let mut session = LearnerSession::open(&path, SchedulerSettings::default()).unwrap();
        session.record_answer("foo", false, start()).unwrap();
    }

    let mut session = LearnerSession::open(&path, SchedulerSettings::default()).unwrap();
    assert_eq!(session.schedule_review(start(), None).unwrap(), vec!["foo"]);
}
