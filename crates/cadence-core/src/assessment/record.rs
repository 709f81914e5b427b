//! Assessment - the outcome of one recall evaluation
//!
//! An assessment is created once by a strategy and never mutated. Chaining
//! assessments across calls is the caller's business: the next call simply
//! receives this one as its read-only input.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::LearningState;
use crate::error::AssessmentError;
use crate::fsrs::algorithm;

/// Immutable record of one evaluation outcome.
///
/// Serializes with camelCase keys (`assessedAt`, `nextScheduledAssessment`,
/// `stability`, `difficulty`, `state`) so callers can persist it.
/// Deserializing runs the same checks as [`Assessment::try_new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredAssessment")]
pub struct Assessment {
    assessed_at: DateTime<Utc>,
    next_scheduled_assessment: DateTime<Utc>,
    stability: f64,
    difficulty: f64,
    state: LearningState,
}

impl Assessment {
    /// Build an assessment without checking its parameters.
    ///
    /// Strategies only ever produce valid assessments. Use
    /// [`Assessment::try_new`] for values coming from outside.
    pub fn new(
        assessed_at: DateTime<Utc>,
        next_scheduled_assessment: DateTime<Utc>,
        stability: f64,
        difficulty: f64,
        state: LearningState,
    ) -> Self {
        Self {
            assessed_at,
            next_scheduled_assessment,
            stability,
            difficulty,
            state,
        }
    }

    /// Rebuild an assessment from storage, rejecting parameters no strategy
    /// could have produced.
    ///
    /// Stability must be finite and positive, difficulty within `[1, 10]`,
    /// and the next assessment strictly after the evaluation.
    pub fn try_new(
        assessed_at: DateTime<Utc>,
        next_scheduled_assessment: DateTime<Utc>,
        stability: f64,
        difficulty: f64,
        state: LearningState,
    ) -> Result<Self, AssessmentError> {
        if !(stability.is_finite() && stability > 0.0) {
            return Err(AssessmentError::InvalidStability(stability));
        }
        if !(algorithm::MIN_DIFFICULTY..=algorithm::MAX_DIFFICULTY).contains(&difficulty) {
            return Err(AssessmentError::InvalidDifficulty(difficulty));
        }
        if next_scheduled_assessment <= assessed_at {
            return Err(AssessmentError::InvalidSchedule {
                assessed_at,
                next: next_scheduled_assessment,
            });
        }
        Ok(Self::new(
            assessed_at,
            next_scheduled_assessment,
            stability,
            difficulty,
            state,
        ))
    }

    /// When the evaluation happened
    pub fn assessed_at(&self) -> DateTime<Utc> {
        self.assessed_at
    }

    /// When the item should next be evaluated
    pub fn next_scheduled_assessment(&self) -> DateTime<Utc> {
        self.next_scheduled_assessment
    }

    /// Days for retrievability to fall from 100% to 90%
    pub fn stability(&self) -> f64 {
        self.stability
    }

    /// Resistance to stability growth, in `[1, 10]`
    pub fn difficulty(&self) -> f64 {
        self.difficulty
    }

    /// Learning phase after this evaluation
    pub fn state(&self) -> LearningState {
        self.state
    }

    /// Fractional days since this evaluation
    pub fn elapsed_days(&self, at: DateTime<Utc>) -> f64 {
        algorithm::elapsed_days(self.assessed_at, at)
    }

    /// Probability of recall at `at`.
    ///
    /// Exactly 1 at `assessed_at`. Querying an earlier instant is permitted
    /// and yields a value above 1.
    pub fn retrievability_at(&self, at: DateTime<Utc>) -> f64 {
        algorithm::retrievability(self.elapsed_days(at), self.stability)
    }

    /// Probability of recall right now
    pub fn retrievability(&self) -> f64 {
        self.retrievability_at(Utc::now())
    }

    /// Gap between this evaluation and the next one
    pub fn scheduled_interval(&self) -> Duration {
        self.next_scheduled_assessment - self.assessed_at
    }

    /// Whether the next evaluation is due at `at`
    pub fn is_due(&self, at: DateTime<Utc>) -> bool {
        at >= self.next_scheduled_assessment
    }
}

/// Serialized shape of an [`Assessment`], checked before use
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredAssessment {
    assessed_at: DateTime<Utc>,
    next_scheduled_assessment: DateTime<Utc>,
    stability: f64,
    difficulty: f64,
    state: LearningState,
}

impl TryFrom<StoredAssessment> for Assessment {
    type Error = AssessmentError;

    fn try_from(stored: StoredAssessment) -> Result<Self, Self::Error> {
        Self::try_new(
            stored.assessed_at,
            stored.next_scheduled_assessment,
            stored.stability,
            stored.difficulty,
            stored.state,
        )
    }
}
