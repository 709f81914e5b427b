//! Test Data Factory
//!
//! Provides utilities for building assessments and histories:
//! - Timestamp parsing
//! - Previous assessments in each learning state
//! - Simulated review chains

use cadence_core::{Assessment, LearningState, Rating, Scheduler};
use chrono::{DateTime, Duration, Utc};

/// Parse an RFC 3339 timestamp
pub fn ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .unwrap_or_else(|e| panic!("bad timestamp {s}: {e}"))
        .with_timezone(&Utc)
}

/// Float comparison with absolute tolerance
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

/// Assert two floats agree to 1e-9
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        approx_eq(actual, expected, 1e-9),
        "expected {expected}, got {actual}"
    );
}

/// Factory for test assessments
pub struct TestDataFactory;

impl TestDataFactory {
    /// Learning item right after a first Forgot
    pub fn learning() -> Assessment {
        Assessment::new(
            ts("2024-12-02T00:00:00.000Z"),
            ts("2024-12-02T00:01:00.000Z"),
            0.4072,
            7.2102,
            LearningState::Learning,
        )
    }

    /// Relearning item after a lapse
    pub fn relearning() -> Assessment {
        Assessment::new(
            ts("2024-12-02T00:00:00.000Z"),
            ts("2024-12-02T00:01:00.000Z"),
            0.54377607,
            8.09306757,
            LearningState::Relearning,
        )
    }

    /// Review item, due two days after its last assessment
    pub fn review() -> Assessment {
        Assessment::new(
            ts("2022-12-31T10:36:00.000Z"),
            ts("2023-01-02T10:36:00.000Z"),
            1.25202849,
            6.94033197,
            LearningState::Review,
        )
    }

    /// Assessment with arbitrary parameters
    pub fn with(
        state: LearningState,
        stability: f64,
        difficulty: f64,
        assessed_at: DateTime<Utc>,
    ) -> Assessment {
        Assessment::new(
            assessed_at,
            assessed_at + Duration::days(1),
            stability,
            difficulty,
            state,
        )
    }

    /// Run a chain of ratings, each assessed exactly when the previous is due
    pub fn chain(scheduler: &Scheduler, start: DateTime<Utc>, ratings: &[Rating]) -> Vec<Assessment> {
        let mut history: Vec<Assessment> = Vec::with_capacity(ratings.len());
        let mut at = start;
        for &rating in ratings {
            let next = scheduler.assess_recall(rating, at, history.last());
            at = next.next_scheduled_assessment();
            history.push(next);
        }
        history
    }

    /// Run a chain of ratings at explicit offsets (days) after each previous assessment
    pub fn chain_with_delays(
        scheduler: &Scheduler,
        start: DateTime<Utc>,
        steps: &[(Rating, f64)],
    ) -> Vec<Assessment> {
        let mut history: Vec<Assessment> = Vec::with_capacity(steps.len());
        let mut at = start;
        for &(rating, delay_days) in steps {
            at += Duration::milliseconds((delay_days * 86_400_000.0) as i64);
            let next = scheduler.assess_recall(rating, at, history.last());
            history.push(next);
        }
        history
    }
}
