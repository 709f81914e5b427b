//! Regression tests against reference values for the default weights.
//!
//! Every (previous state, rating) pair is pinned: difficulty and stability to
//! 1e-9, the next scheduled assessment to the millisecond.

use cadence_core::{Assessment, LearningState, Rating, Scheduler};
use cadence_e2e_tests::{TestDataFactory, assert_close, ts};

struct Expected {
    difficulty: f64,
    stability: f64,
    state: LearningState,
    next: &'static str,
}

fn check(previous: Option<&Assessment>, at: &str, rating: Rating, expected: Expected) {
    let scheduler = Scheduler::default();
    let at = ts(at);
    let result = scheduler.assess_recall(rating, at, previous);

    assert_close(result.difficulty(), expected.difficulty);
    assert_close(result.stability(), expected.stability);
    assert_eq!(result.state(), expected.state);
    assert_eq!(result.assessed_at(), at);
    assert_eq!(result.next_scheduled_assessment(), ts(expected.next));
}

// ============================================================================
// NEW
// ============================================================================

#[test]
fn new_forgot() {
    check(
        None,
        "2024-12-02T00:00:00.000Z",
        Rating::Forgot,
        Expected {
            difficulty: 7.2102,
            stability: 0.4072,
            state: LearningState::Learning,
            next: "2024-12-02T00:01:00.000Z",
        },
    );
}

#[test]
fn new_struggled() {
    check(
        None,
        "2024-12-02T00:00:00.000Z",
        Rating::Struggled,
        Expected {
            difficulty: 6.508547223894037,
            stability: 1.1829,
            state: LearningState::Learning,
            next: "2024-12-02T00:05:00.000Z",
        },
    );
}

#[test]
fn new_remembered() {
    check(
        None,
        "2024-12-02T00:00:00.000Z",
        Rating::Remembered,
        Expected {
            difficulty: 5.314577829570867,
            stability: 3.1262,
            state: LearningState::Learning,
            next: "2024-12-02T00:10:00.000Z",
        },
    );
}

#[test]
fn new_mastered() {
    check(
        None,
        "2024-12-02T00:00:00.000Z",
        Rating::Mastered,
        Expected {
            difficulty: 3.28285649513529,
            stability: 15.4722,
            state: LearningState::Review,
            next: "2024-12-17T11:19:58.080Z",
        },
    );
}

// ============================================================================
// LEARNING
// ============================================================================

#[test]
fn learning_forgot() {
    check(
        Some(&TestDataFactory::learning()),
        "2024-12-02T00:01:00.000Z",
        Rating::Forgot,
        Expected {
            difficulty: 9.198653481986167,
            stability: 0.2070762836105457,
            state: LearningState::Learning,
            next: "2024-12-02T00:06:00.000Z",
        },
    );
}

#[test]
fn learning_struggled() {
    check(
        Some(&TestDataFactory::learning()),
        "2024-12-02T00:01:00.000Z",
        Rating::Struggled,
        Expected {
            difficulty: 8.158476821986165,
            stability: 0.3425738466903332,
            state: LearningState::Learning,
            next: "2024-12-02T00:11:00.000Z",
        },
    );
}

#[test]
fn learning_remembered() {
    check(
        Some(&TestDataFactory::learning()),
        "2024-12-02T00:01:00.000Z",
        Rating::Remembered,
        Expected {
            difficulty: 7.118300161986166,
            stability: 0.5667324060003331,
            state: LearningState::Review,
            next: "2024-12-03T00:01:00.000Z",
        },
    );
}

#[test]
fn learning_mastered() {
    check(
        Some(&TestDataFactory::learning()),
        "2024-12-02T00:01:00.000Z",
        Rating::Mastered,
        Expected {
            difficulty: 6.078123501986166,
            stability: 0.9375660842587888,
            state: LearningState::Review,
            next: "2024-12-03T00:01:00.000Z",
        },
    );
}

// ============================================================================
// RELEARNING
// ============================================================================

#[test]
fn relearning_forgot() {
    check(
        Some(&TestDataFactory::relearning()),
        "2024-12-02T00:01:00.000Z",
        Rating::Forgot,
        Expected {
            difficulty: 10.0,
            stability: 0.27653027429260296,
            state: LearningState::Relearning,
            next: "2024-12-02T00:06:00.000Z",
        },
    );
}

#[test]
fn relearning_struggled() {
    check(
        Some(&TestDataFactory::relearning()),
        "2024-12-02T00:01:00.000Z",
        Rating::Struggled,
        Expected {
            difficulty: 9.020685290848165,
            stability: 0.4574741160070036,
            state: LearningState::Relearning,
            next: "2024-12-02T00:11:00.000Z",
        },
    );
}

#[test]
fn relearning_remembered() {
    check(
        Some(&TestDataFactory::relearning()),
        "2024-12-02T00:01:00.000Z",
        Rating::Remembered,
        Expected {
            difficulty: 7.980508630848166,
            stability: 0.7568161111898465,
            state: LearningState::Review,
            next: "2024-12-03T00:01:00.000Z",
        },
    );
}

#[test]
fn relearning_mastered() {
    check(
        Some(&TestDataFactory::relearning()),
        "2024-12-02T00:01:00.000Z",
        Rating::Mastered,
        Expected {
            difficulty: 6.940331970848166,
            stability: 1.252028488859364,
            state: LearningState::Review,
            next: "2024-12-03T06:03:55.261Z",
        },
    );
}

// ============================================================================
// REVIEW
// ============================================================================

#[test]
fn review_forgot() {
    check(
        Some(&TestDataFactory::review()),
        "2023-01-02T10:36:00.000Z",
        Rating::Forgot,
        Expected {
            difficulty: 8.935100363888164,
            stability: 0.6223557099966109,
            state: LearningState::Relearning,
            next: "2023-01-02T10:41:00.000Z",
        },
    );
}

#[test]
fn review_struggled() {
    check(
        Some(&TestDataFactory::review()),
        "2023-01-02T10:36:00.000Z",
        Rating::Struggled,
        Expected {
            difficulty: 7.894923703888166,
            stability: 2.2785692875050763,
            state: LearningState::Review,
            next: "2023-01-04T10:36:00.000Z",
        },
    );
}

#[test]
fn review_remembered() {
    check(
        Some(&TestDataFactory::review()),
        "2023-01-02T10:36:00.000Z",
        Rating::Remembered,
        Expected {
            difficulty: 6.854747043888166,
            stability: 5.516842771284072,
            state: LearningState::Review,
            next: "2023-01-08T10:36:00.000Z",
        },
    );
}

#[test]
fn review_mastered() {
    check(
        Some(&TestDataFactory::review()),
        "2023-01-02T10:36:00.000Z",
        Rating::Mastered,
        Expected {
            difficulty: 5.8145703838881655,
            stability: 13.818730251231646,
            state: LearningState::Review,
            next: "2023-01-16T10:36:00.000Z",
        },
    );
}
