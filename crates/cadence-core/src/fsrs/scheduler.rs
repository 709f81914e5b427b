//! Scheduler façade
//!
//! Holds the configuration and wires strategy selection to invocation.
//! Nothing but the configuration is retained between calls.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::strategy::{AssessmentStrategy, strategy_for};
use crate::assessment::{Assessment, Rating};
use crate::config::SchedulerConfig;
use crate::error::ConfigError;

// ============================================================================
// PREVIEW
// ============================================================================

/// Outcomes for every possible rating of the same recall attempt
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preview {
    /// Outcome if rated Forgot
    pub forgot: Assessment,
    /// Outcome if rated Struggled
    pub struggled: Assessment,
    /// Outcome if rated Remembered
    pub remembered: Assessment,
    /// Outcome if rated Mastered
    pub mastered: Assessment,
}

impl Preview {
    /// Outcome for a single rating
    pub fn get(&self, rating: Rating) -> &Assessment {
        match rating {
            Rating::Forgot => &self.forgot,
            Rating::Struggled => &self.struggled,
            Rating::Remembered => &self.remembered,
            Rating::Mastered => &self.mastered,
        }
    }

    /// All outcomes, lowest rating first
    pub fn iter(&self) -> impl Iterator<Item = (Rating, &Assessment)> + '_ {
        Rating::ALL.into_iter().map(move |rating| (rating, self.get(rating)))
    }
}

// ============================================================================
// SCHEDULER
// ============================================================================

/// Free spaced repetition scheduler.
///
/// # Example
///
/// ```rust
/// use cadence_core::{Rating, Scheduler};
///
/// let scheduler = Scheduler::default();
/// let first = scheduler.assess_recall_now(Rating::Remembered, None);
/// let second = scheduler.assess_recall(
///     Rating::Remembered,
///     first.next_scheduled_assessment(),
///     Some(&first),
/// );
/// assert!(second.stability() > first.stability());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    config: SchedulerConfig,
}

impl Scheduler {
    /// Create a scheduler, rejecting a malformed configuration
    pub fn new(config: SchedulerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Assess a recall attempt made at `at`.
    ///
    /// `previous` must be the result of the immediately preceding call for the
    /// same item, or `None` for a new item. Out-of-order chains are not
    /// detected.
    pub fn assess_recall(
        &self,
        rating: Rating,
        at: DateTime<Utc>,
        previous: Option<&Assessment>,
    ) -> Assessment {
        let strategy = strategy_for(&self.config, previous);
        let assessment = strategy.assess(rating, at);

        tracing::debug!(
            strategy = strategy.name(),
            %rating,
            previous_state = previous.map(|p| p.state().as_str()).unwrap_or("New"),
            state = %assessment.state(),
            stability = assessment.stability(),
            difficulty = assessment.difficulty(),
            due = %assessment.next_scheduled_assessment(),
            "Assessed recall"
        );

        assessment
    }

    /// Assess a recall attempt made right now
    pub fn assess_recall_now(&self, rating: Rating, previous: Option<&Assessment>) -> Assessment {
        self.assess_recall(rating, Utc::now(), previous)
    }

    /// Compute the outcome of every rating without committing to one
    pub fn preview(&self, at: DateTime<Utc>, previous: Option<&Assessment>) -> Preview {
        let strategy = strategy_for(&self.config, previous);
        Preview {
            forgot: strategy.assess(Rating::Forgot, at),
            struggled: strategy.assess(Rating::Struggled, at),
            remembered: strategy.assess(Rating::Remembered, at),
            mastered: strategy.assess(Rating::Mastered, at),
        }
    }

    /// Probability of recalling `assessment` at `at`
    pub fn retrievability(&self, assessment: &Assessment, at: DateTime<Utc>) -> f64 {
        assessment.retrievability_at(at)
    }
}

// ============================================================================
// TESTS
// ============================================================================
