//! Placement: estimate which frequency class new words should come from.

use crate::types::NewWordStat;
use crate::wilson::{is_too_easy, is_too_hard};

/// Estimate the learner's level from first-presentation statistics.
///
/// Classes are walked in ascending order. A class that is too hard stops the
/// walk at the class before it; a class without enough evidence to call it
/// too easy stops the walk at that class. Acing every class places the
/// learner one class past the last. The result never falls below
/// `easiest_unseen`, so there is always some new word to introduce.
pub fn placement(stats: &[NewWordStat], easiest_unseen: i64) -> i64 {
    let mut sorted: Vec<&NewWordStat> = stats.iter().collect();
    sorted.sort_by_key(|stat| stat.frequency_class);
    walk(&sorted).max(easiest_unseen)
}

fn walk(stats: &[&NewWordStat]) -> i64 {
    let mut level = 0;
    let mut aced = false;

    for stat in stats {
        if is_too_hard(stat.correct, stat.incorrect) {
            return level;
        }

        level = stat.frequency_class;
        if !is_too_easy(stat.correct, stat.incorrect) {
            return level;
        }
        aced = true;
    }

    // Every observed class was too easy.
    if aced {
        level + 1
    } else {
        level
    }
}
