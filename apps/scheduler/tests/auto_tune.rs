//! Interval tuning tests through the session API.

mod common;

use chrono::Duration;
use pretty_assertions::assert_eq;

use common::fixtures::{at_hours, start};
use common::TestContext;

/// Put `count` items into the 48h bucket: one success at the start, one on
/// time a day later.
fn items_waiting_in_48h(ctx: &mut TestContext, count: usize) -> Vec<String> {
    let items: Vec<String> = (0..count).map(|i| format!("w{i}")).collect();
    for item in &items {
        ctx.session.record_answer(item, true, start()).unwrap();
    }
    for item in &items {
        let result = ctx.session.record_answer(item, true, at_hours(24)).unwrap();
        assert_eq!(result.review.interval_hours, 48);
    }
    items
}

#[test]
fn failing_bucket_is_shortened_and_reviews_follow() {
    let mut ctx = TestContext::new();
    let items = items_waiting_in_48h(&mut ctx, 5);
    assert_eq!(ctx.intervals(), vec![0, 24, 48]);

    ctx.session.record_answer(&items[0], false, at_hours(72)).unwrap();
    assert_eq!(ctx.intervals(), vec![0, 24, 48]);
    ctx.session.record_answer(&items[1], false, at_hours(72)).unwrap();

    // Halfway between 24h and 48h.
    assert_eq!(ctx.intervals(), vec![0, 24, 36]);
    let waiting = ctx.session.most_recent_review(&items[4]).unwrap().unwrap();
    assert_eq!(waiting.interval_hours, 36);
    assert_eq!(waiting.due, at_hours(24) + Duration::hours(36));

    let stats = ctx.session.interval_stats().unwrap();
    assert_eq!((stats[2].correct, stats[2].incorrect), (0, 0));
    ctx.assert_bucket_invariant();
}

#[test]
fn passing_bucket_is_lengthened() {
    let mut ctx = TestContext::new();
    let items = items_waiting_in_48h(&mut ctx, 20);

    for item in &items {
        ctx.session.record_answer(item, true, at_hours(72)).unwrap();
    }

    // 48h moved halfway towards the synthesized 96h bucket; items still
    // waiting in it became early and crammed, leaving 72h untouched.
    assert_eq!(ctx.intervals(), vec![0, 24, 72, 96]);
    let last = ctx.session.most_recent_review(&items[19]).unwrap().unwrap();
    assert_eq!(last.interval_hours, 72);
    let first = ctx.session.most_recent_review(&items[0]).unwrap().unwrap();
    assert_eq!(first.interval_hours, 96);
    ctx.assert_bucket_invariant();
}

#[test]
fn tuning_twice_is_a_no_op() {
    let mut ctx = TestContext::new();
    let items = items_waiting_in_48h(&mut ctx, 5);
    for item in &items[..3] {
        ctx.session.record_answer(item, false, at_hours(80)).unwrap();
    }

    let before = ctx.session.interval_stats().unwrap();
    assert!(ctx.session.tune_intervals().unwrap().is_empty());
    assert!(ctx.session.tune_intervals().unwrap().is_empty());
    assert_eq!(ctx.session.interval_stats().unwrap(), before);
}

#[test]
fn buckets_stay_consistent_under_mixed_answers() {
    let mut ctx = TestContext::new();
    let items: Vec<String> = (0..12).map(|i| format!("item{i}")).collect();

    // Deterministic mix of successes, failures, cramming and late reviews.
    for round in 0..30i64 {
        for (i, item) in items.iter().enumerate() {
            let i = i as i64;
            let correct = (round * 7 + i * 3) % 5 != 0;
            let now = start() + Duration::hours(round * 37 + i * 5);
            ctx.session.record_answer(item, correct, now).unwrap();
        }
        ctx.assert_bucket_invariant();
    }
}
