//! Word selection: due reviews first, then new words at the learner's level.

use super::{placement, review};
use crate::db::{Store, WordRepository};
use crate::error::Result;
use chrono::{DateTime, Utc};
use srs_core::{normalize_item, SchedulerSettings, SchedulingResult, Word};

/// Next `n` words to present at `as_of`.
///
/// Due reviews come first. Remaining slots go to unseen words at or above
/// the placement level in catalog order, then to unseen words just below it.
pub fn get_words<S>(store: &S, n: usize, as_of: DateTime<Utc>) -> Result<Vec<Word>>
where
    S: Store + ?Sized,
{
    let mut words: Vec<Word> = store
        .due_items(as_of, Some(n))?
        .into_iter()
        .map(Word::review)
        .collect();

    if words.len() < n {
        let level = placement::placement(store)?;
        words.extend(store.unseen_words_from(level, Some(n - words.len()))?);
        if words.len() < n {
            words.extend(store.unseen_words_below(level, Some(n - words.len()))?);
        }
    }
    Ok(words)
}

/// Like [`get_words`], restricted to words accepted by `predicate`.
pub fn get_words_with<S, P>(store: &S, n: usize, as_of: DateTime<Utc>, mut predicate: P) -> Result<Vec<Word>>
where
    S: Store + ?Sized,
    P: FnMut(&str) -> bool,
{
    let mut words: Vec<Word> = review::schedule_review_with(store, as_of, Some(n), &mut predicate)?
        .into_iter()
        .map(Word::review)
        .collect();

    if words.len() < n {
        let level = placement::placement(store)?;
        let fresh = store
            .unseen_words_from(level, None)?
            .into_iter()
            .chain(store.unseen_words_below(level, None)?)
            .filter(|word| predicate(&word.id));
        words.extend(fresh.take(n - words.len()));
    }
    Ok(words)
}

/// Record an answer for a word handed out by [`get_words`].
///
/// A word's first-ever attempt also feeds the difficulty estimate.
pub fn record_attempt<S>(
    store: &S,
    word: &Word,
    correct: bool,
    now: DateTime<Utc>,
    settings: &SchedulerSettings,
) -> Result<SchedulingResult>
where
    S: Store + ?Sized,
{
    let item = normalize_item(&word.id);
    let result = review::update_review(store, &item, correct, now, settings)?;
    if result.first_attempt {
        placement::observe(store, word.difficulty, correct)?;
    }
    Ok(result)
}

/// Record an answer for a bare item, looking its class up in the catalog.
/// Items missing from the catalog count as class 0.
pub fn record_answer<S>(
    store: &S,
    item: &str,
    correct: bool,
    now: DateTime<Utc>,
    settings: &SchedulerSettings,
) -> Result<SchedulingResult>
where
    S: Store + ?Sized,
{
    let item = normalize_item(item);
    let frequency_class = store.frequency_class(&item)?.unwrap_or(0);
    record_attempt(store, &Word::new_word(item, frequency_class), correct, now, settings)
}

/// Add a word to the catalog, or move it to a new class.
pub fn add_word<S>(store: &S, word: &str, frequency_class: i64) -> Result<()>
where
    S: WordRepository + ?Sized,
{
    store.add_word(&normalize_item(word), frequency_class)?;
    Ok(())
}
