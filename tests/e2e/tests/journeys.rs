//! Journey tests - complete learning workflows for a single item.
//!
//! Each journey feeds the scheduler a realistic sequence of ratings, carrying
//! the previous assessment forward the way a caller's storage layer would.

use cadence_core::{LearningState, Rating, Scheduler, SchedulerConfig};
use cadence_e2e_tests::{TestDataFactory, ts};
use chrono::Duration;

#[test]
fn steady_learner_graduates_and_intervals_grow() {
    let scheduler = Scheduler::default();
    let history = TestDataFactory::chain(
        &scheduler,
        ts("2025-01-01T09:00:00Z"),
        &[
            Rating::Remembered,
            Rating::Remembered,
            Rating::Remembered,
            Rating::Remembered,
            Rating::Remembered,
        ],
    );

    assert_eq!(history[0].state(), LearningState::Learning);
    assert!(history[1..].iter().all(|a| a.state() == LearningState::Review));

    let intervals: Vec<Duration> = history.iter().map(|a| a.scheduled_interval()).collect();
    assert!(
        intervals.windows(2).all(|pair| pair[0] < pair[1]),
        "intervals should grow: {intervals:?}"
    );

    let stabilities: Vec<f64> = history.iter().map(|a| a.stability()).collect();
    assert!(stabilities.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn lapse_sends_item_to_relearning_and_back() {
    let scheduler = Scheduler::default();
    let history = TestDataFactory::chain(
        &scheduler,
        ts("2025-01-01T09:00:00Z"),
        &[
            Rating::Mastered,
            Rating::Remembered,
            Rating::Forgot,
            Rating::Struggled,
            Rating::Remembered,
        ],
    );

    let states: Vec<LearningState> = history.iter().map(|a| a.state()).collect();
    assert_eq!(
        states,
        vec![
            LearningState::Review,
            LearningState::Review,
            LearningState::Relearning,
            LearningState::Relearning,
            LearningState::Review,
        ]
    );

    // The lapse drops stability and schedules a five minute step
    assert!(history[2].stability() <= history[1].stability());
    assert_eq!(history[2].scheduled_interval(), Duration::minutes(5));
    // Struggling while relearning keeps the ten minute step
    assert_eq!(history[3].scheduled_interval(), Duration::minutes(10));
    // Lapsing raises difficulty
    assert!(history[2].difficulty() > history[1].difficulty());
}

#[test]
fn repeated_forgetting_pins_difficulty_at_ceiling() {
    let scheduler = Scheduler::default();
    let ratings = vec![Rating::Forgot; 30];
    let history = TestDataFactory::chain(&scheduler, ts("2025-03-01T00:00:00Z"), &ratings);

    assert!(history.iter().all(|a| a.state() == LearningState::Learning));
    assert_eq!(history.last().map(|a| a.difficulty()), Some(10.0));
    assert!(history.iter().all(|a| a.stability() > 0.0));
    assert!(history.windows(2).all(|pair| pair[1].stability() < pair[0].stability()));
}

#[test]
fn repeated_lapses_in_review_keep_stability_positive() {
    let scheduler = Scheduler::default();
    let mut steps = vec![(Rating::Mastered, 0.0)];
    for _ in 0..20 {
        // Graduate again, then forget a week later
        steps.push((Rating::Remembered, 0.01));
        steps.push((Rating::Forgot, 7.0));
    }
    let history = TestDataFactory::chain_with_delays(&scheduler, ts("2025-01-01T00:00:00Z"), &steps);

    for assessment in &history {
        assert!(assessment.stability() > 0.0);
        assert!((1.0..=10.0).contains(&assessment.difficulty()));
    }
}

#[test]
fn late_review_counts_elapsed_time() {
    let scheduler = Scheduler::default();
    let previous = TestDataFactory::review();

    let on_time = scheduler.assess_recall(
        Rating::Remembered,
        previous.next_scheduled_assessment(),
        Some(&previous),
    );
    let late = scheduler.assess_recall(
        Rating::Remembered,
        previous.next_scheduled_assessment() + Duration::days(10),
        Some(&previous),
    );

    // Remembering after more forgetting consolidates more
    assert!(late.stability() > on_time.stability());
}

#[test]
fn lower_retention_target_spaces_reviews_further() {
    let strict = Scheduler::new(SchedulerConfig::default().with_request_retention(0.95)).unwrap();
    let relaxed = Scheduler::new(SchedulerConfig::default().with_request_retention(0.8)).unwrap();
    let start = ts("2025-01-01T09:00:00Z");
    let ratings = [Rating::Mastered, Rating::Remembered, Rating::Remembered];

    let strict_history = TestDataFactory::chain(&strict, start, &ratings);
    let relaxed_history = TestDataFactory::chain(&relaxed, start, &ratings);

    for (s, r) in strict_history.iter().zip(&relaxed_history) {
        assert!(s.scheduled_interval() < r.scheduled_interval());
    }
}

#[test]
fn preview_then_commit() {
    let scheduler = Scheduler::default();
    let first = scheduler.assess_recall(Rating::Struggled, ts("2025-01-01T09:00:00Z"), None);
    let at = first.next_scheduled_assessment();

    let preview = scheduler.preview(at, Some(&first));
    let committed = scheduler.assess_recall(Rating::Mastered, at, Some(&first));

    assert_eq!(*preview.get(Rating::Mastered), committed);
    assert_eq!(preview.get(Rating::Forgot).state(), LearningState::Learning);
}
