//! Difficulty estimation for new words.

use crate::db::PlacementRepository;
use crate::error::Result;
use srs_core::{algorithm, DifficultyEstimate, LevelEstimate};
use tracing::info;

/// Current placement level, never below the easiest unseen class.
pub fn placement<S>(store: &S) -> Result<i64>
where
    S: PlacementRepository + ?Sized,
{
    let stats = store.new_word_stats()?;
    let (easiest_unseen, _) = store.unseen_class_bounds()?;
    Ok(algorithm::placement(&stats, easiest_unseen))
}

/// Count a first-time answer at `frequency_class` and move the stored
/// estimate if placement changed.
pub fn observe<S>(store: &S, frequency_class: i64, correct: bool) -> Result<LevelEstimate>
where
    S: PlacementRepository + ?Sized,
{
    store.record_new_word(frequency_class, correct)?;
    let level = placement(store)?;

    let current = store.level_estimate()?;
    let next = current.observe(correct, level);
    if next.level != current.level {
        info!(from = current.level, to = next.level, "estimated level changed");
    }
    store.save_level_estimate(&next)?;
    Ok(next)
}

/// Snapshot of the stored estimate with the unseen-word bounds.
pub fn estimated_level<S>(store: &S) -> Result<DifficultyEstimate>
where
    S: PlacementRepository + ?Sized,
{
    let estimate = store.level_estimate()?;
    let (min, max) = store.unseen_class_bounds()?;
    Ok(DifficultyEstimate::new(estimate, min, max))
}

/// Set the stored level explicitly, resetting its counters.
pub fn override_level<S>(store: &S, level: i64) -> Result<LevelEstimate>
where
    S: PlacementRepository + ?Sized,
{
    let estimate = LevelEstimate {
        level,
        ..LevelEstimate::default()
    };
    store.save_level_estimate(&estimate)?;
    info!(level, "estimated level overridden");
    Ok(estimate)
}
