//! Word selection and difficulty estimate tests.

mod common;

use pretty_assertions::assert_eq;
use srs_core::{DifficultyEstimate, Word};

use common::fixtures::{at_hours, class_words, ids, start};
use common::TestContext;

#[test]
fn empty_catalog_gives_no_words() {
    let mut ctx = TestContext::new();
    assert!(ctx.session.get_words(10, start()).unwrap().is_empty());
}

#[test]
fn due_reviews_come_before_new_words() {
    let mut ctx = TestContext::with_words(&[("a", 1), ("b", 1), ("c", 1), ("d", 1)]);
    ctx.session.record_answer("x", false, start()).unwrap();

    let words = ctx.session.get_words(3, start()).unwrap();
    assert_eq!(
        words,
        vec![
            Word::review("x".into()),
            Word::new_word("a".into(), 1),
            Word::new_word("b".into(), 1),
        ]
    );
}

#[test]
fn due_reviews_alone_can_fill_the_batch() {
    let mut ctx = TestContext::with_words(&[("a", 1)]);
    for item in ["x", "y", "z"] {
        ctx.session.record_answer(item, false, start()).unwrap();
    }

    let words = ctx.session.get_words(2, start()).unwrap();
    assert_eq!(ids(&words), vec!["x", "y"]);
    assert!(words.iter().all(|word| !word.is_new));
}

#[test]
fn acing_class_one_moves_placement_past_it() {
    let mut catalog = class_words("one", 1, 10);
    catalog.extend(class_words("two", 2, 2));
    catalog.extend(class_words("low", 1, 3));
    let mut ctx = TestContext::with_words(&catalog);

    for i in 0..10 {
        ctx.session.record_answer(&format!("one{i}"), true, start()).unwrap();
    }
    assert!(ctx.session.placement().unwrap() > 1);

    // Words at the level in catalog order, then the nearest easier words.
    let words = ctx.session.get_words(5, start()).unwrap();
    assert_eq!(ids(&words), vec!["two0", "two1", "low2", "low1", "low0"]);
    assert_eq!(words[0], Word::new_word("two0".into(), 2));
    assert_eq!(words[2], Word::new_word("low2".into(), 1));
}

#[test]
fn only_first_attempts_feed_the_estimate() {
    let mut ctx = TestContext::with_words(&[("a", 1), ("b", 1), ("c", 1), ("d", 2)]);

    ctx.session.record_answer("a", true, start()).unwrap();
    // Later attempts on a seen word are ignored by the estimate.
    ctx.session.record_answer("a", false, at_hours(1)).unwrap();
    ctx.session.record_answer("a", false, at_hours(2)).unwrap();
    ctx.session.record_answer("b", true, at_hours(3)).unwrap();

    assert_eq!(
        ctx.session.estimated_level().unwrap(),
        DifficultyEstimate {
            level: 1,
            correct: 1,
            incorrect: 0,
            min: 1,
            max: 2,
        }
    );
}

#[test]
fn placement_never_drops_below_easiest_unseen() {
    let mut catalog = class_words("three", 3, 12);
    catalog.extend(class_words("five", 5, 2));
    let mut ctx = TestContext::with_words(&catalog);
    assert_eq!(ctx.session.placement().unwrap(), 3);

    for i in 0..10 {
        ctx.session.record_answer(&format!("three{i}"), false, start()).unwrap();
        assert!(ctx.session.placement().unwrap() >= 3);
    }
    let estimate = ctx.session.estimated_level().unwrap();
    assert!(estimate.level >= estimate.min);
    assert_eq!((estimate.min, estimate.max), (3, 5));

    let words = ctx.session.get_words(3, at_hours(1)).unwrap();
    assert_eq!(words.iter().filter(|word| word.is_new).count(), 0);
}

#[test]
fn override_level_resets_counters() {
    let mut ctx = TestContext::with_words(&[("a", 1), ("b", 1), ("c", 2), ("d", 9)]);
    ctx.session.record_answer("a", true, start()).unwrap();
    ctx.session.record_answer("b", true, start()).unwrap();

    let estimate = ctx.session.override_level(7).unwrap();
    assert_eq!((estimate.level, estimate.correct, estimate.incorrect), (7, 0, 0));
    assert_eq!(ctx.session.estimated_level().unwrap().level, 7);

    // Reads clamp to the easiest unseen class.
    ctx.session.override_level(0).unwrap();
    assert_eq!(ctx.session.estimated_level().unwrap().level, 2);
}

#[test]
fn estimate_bounds_are_zero_when_nothing_is_unseen() {
    let mut ctx = TestContext::with_words(&[("a", 4)]);
    ctx.session.record_answer("a", true, start()).unwrap();

    let estimate = ctx.session.estimated_level().unwrap();
    assert_eq!((estimate.min, estimate.max), (0, 0));
}

#[test]
fn unknown_words_count_as_class_zero() {
    let mut ctx = TestContext::with_words(&[("a", 3)]);
    ctx.session.record_answer("mystery", true, start()).unwrap();

    let estimate = ctx.session.estimated_level().unwrap();
    assert_eq!(estimate.min, 3);
    assert_eq!(estimate.level, 3);
}

#[test]
fn words_handed_out_can_be_answered() {
    let mut ctx = TestContext::with_words(&[("Apple", 2), ("Pear", 2)]);

    let words = ctx.session.get_words(1, start()).unwrap();
    assert_eq!(words, vec![Word::new_word("apple".into(), 2)]);

    let result = ctx.session.record_attempt(&words[0], true, start()).unwrap();
    assert!(result.first_attempt);
    assert_eq!(result.review.item, "apple");

    let words = ctx.session.get_words(2, start()).unwrap();
    assert_eq!(ids(&words), vec!["pear"]);
}

#[test]
fn predicate_applies_to_due_and_new_words() {
    let mut ctx = TestContext::with_words(&[("cat", 1), ("car", 1), ("dog", 1), ("cow", 2)]);
    ctx.session.record_answer("crab", false, start()).unwrap();
    ctx.session.record_answer("duck", false, start()).unwrap();

    let words = ctx
        .session
        .get_words_with(3, start(), |word| word.starts_with('c'))
        .unwrap();
    assert_eq!(ids(&words), vec!["crab", "cat", "car"]);
    assert!(!words[0].is_new);
    assert!(words[1].is_new);
}
