//! Update strategies
//!
//! The previous assessment alone decides which update applies:
//!
//! | Previous                   | Strategy   |
//! |----------------------------|------------|
//! | none (new item)            | Initial    |
//! | Learning or Relearning     | Learning   |
//! | Review                     | Review     |
//!
//! Resulting state per previous state and rating:
//!
//! | prev       | Forgot     | Struggled  | Remembered | Mastered |
//! |------------|------------|------------|------------|----------|
//! | none       | Learning   | Learning   | Learning   | Review   |
//! | Learning   | Learning   | Learning   | Review     | Review   |
//! | Relearning | Relearning | Relearning | Review     | Review   |
//! | Review     | Relearning | Review     | Review     | Review   |

use chrono::{DateTime, Utc};

use super::algorithm;
use crate::assessment::{Assessment, LearningState, Rating};
use crate::config::SchedulerConfig;

// ============================================================================
// TRAIT
// ============================================================================

/// One way of turning a rating into a new assessment
pub trait AssessmentStrategy {
    /// Short name, used in logs
    fn name(&self) -> &'static str;

    /// Evaluate a recall attempt made at `at`
    fn assess(&self, rating: Rating, at: DateTime<Utc>) -> Assessment;
}

// ============================================================================
// INITIAL
// ============================================================================

/// First evaluation of a new item
#[derive(Debug, Clone, Copy)]
pub struct InitialStrategy<'a> {
    config: &'a SchedulerConfig,
}

impl<'a> InitialStrategy<'a> {
    /// Bind to a configuration
    pub fn new(config: &'a SchedulerConfig) -> Self {
        Self { config }
    }

    fn next_state(rating: Rating) -> LearningState {
        match rating {
            Rating::Mastered => LearningState::Review,
            Rating::Forgot | Rating::Struggled | Rating::Remembered => LearningState::Learning,
        }
    }

    // Learning steps are fixed, not derived from the weights
    fn schedule(&self, rating: Rating, at: DateTime<Utc>, stability: f64) -> DateTime<Utc> {
        match rating {
            Rating::Forgot => algorithm::add_minutes(at, algorithm::INITIAL_FORGOT_MINUTES),
            Rating::Struggled => algorithm::add_minutes(at, algorithm::INITIAL_STRUGGLED_MINUTES),
            Rating::Remembered => {
                algorithm::add_minutes(at, algorithm::INITIAL_REMEMBERED_MINUTES)
            }
            Rating::Mastered => {
                let days = algorithm::next_interval(
                    stability,
                    self.config.request_retention,
                    self.config.maximum_interval,
                );
                algorithm::add_days(at, days)
            }
        }
    }
}

impl AssessmentStrategy for InitialStrategy<'_> {
    fn name(&self) -> &'static str {
        "initial"
    }

    fn assess(&self, rating: Rating, at: DateTime<Utc>) -> Assessment {
        let w = &self.config.weights;
        let stability = algorithm::initial_stability(w, rating);

        Assessment::new(
            at,
            self.schedule(rating, at, stability),
            stability,
            algorithm::initial_difficulty(w, rating),
            Self::next_state(rating),
        )
    }
}

// ============================================================================
// LEARNING
// ============================================================================

/// Short-step update for items in Learning or Relearning
#[derive(Debug, Clone, Copy)]
pub struct LearningStrategy<'a> {
    config: &'a SchedulerConfig,
    previous: &'a Assessment,
}

impl<'a> LearningStrategy<'a> {
    /// Bind to a configuration and the preceding assessment
    pub fn new(config: &'a SchedulerConfig, previous: &'a Assessment) -> Self {
        Self { config, previous }
    }

    fn next_state(&self, rating: Rating) -> LearningState {
        match rating {
            Rating::Forgot | Rating::Struggled => self.previous.state(),
            Rating::Remembered | Rating::Mastered => LearningState::Review,
        }
    }

    fn schedule(&self, rating: Rating, at: DateTime<Utc>, stability: f64) -> DateTime<Utc> {
        match rating {
            Rating::Forgot => algorithm::add_minutes(at, algorithm::LEARNING_FORGOT_MINUTES),
            Rating::Struggled => algorithm::add_minutes(at, algorithm::LEARNING_STRUGGLED_MINUTES),
            Rating::Remembered | Rating::Mastered => {
                let days = algorithm::next_interval(
                    stability,
                    self.config.request_retention,
                    self.config.maximum_interval,
                );
                algorithm::add_days(at, days)
            }
        }
    }
}

impl AssessmentStrategy for LearningStrategy<'_> {
    fn name(&self) -> &'static str {
        "learning"
    }

    fn assess(&self, rating: Rating, at: DateTime<Utc>) -> Assessment {
        let w = &self.config.weights;
        let stability = algorithm::short_term_stability(w, self.previous.stability(), rating);

        Assessment::new(
            at,
            self.schedule(rating, at, stability),
            stability,
            algorithm::next_difficulty(w, self.previous.difficulty(), rating),
            self.next_state(rating),
        )
    }
}

// ============================================================================
// REVIEW
// ============================================================================

/// Long-term update for graduated items
#[derive(Debug, Clone, Copy)]
pub struct ReviewStrategy<'a> {
    config: &'a SchedulerConfig,
    previous: &'a Assessment,
    interval_modifier: f64,
}

impl<'a> ReviewStrategy<'a> {
    /// Bind to a configuration and the preceding assessment
    pub fn new(config: &'a SchedulerConfig, previous: &'a Assessment) -> Self {
        Self {
            config,
            previous,
            interval_modifier: algorithm::interval_modifier(config.request_retention),
        }
    }

    fn next_state(rating: Rating) -> LearningState {
        match rating {
            Rating::Forgot => LearningState::Relearning,
            Rating::Struggled | Rating::Remembered | Rating::Mastered => LearningState::Review,
        }
    }

    fn stability(&self, rating: Rating, at: DateTime<Utc>) -> f64 {
        let w = &self.config.weights;
        let previous = self.previous;
        // An attempt timed before the previous evaluation counts as immediate
        let elapsed_days = previous.elapsed_days(at).max(0.0);
        let retrievability = algorithm::retrievability(elapsed_days, previous.stability());
        tracing::trace!(elapsed_days, retrievability, "Review retrievability");

        if rating.is_recalled() {
            algorithm::next_recall_stability(
                w,
                previous.difficulty(),
                previous.stability(),
                retrievability,
                rating,
            )
        } else {
            algorithm::next_forget_stability(
                w,
                previous.difficulty(),
                previous.stability(),
                retrievability,
            )
        }
    }

    fn schedule(&self, rating: Rating, at: DateTime<Utc>, stability: f64) -> DateTime<Utc> {
        match rating {
            Rating::Forgot => algorithm::add_minutes(at, algorithm::RELEARNING_MINUTES),
            Rating::Struggled | Rating::Remembered | Rating::Mastered => {
                let days = algorithm::review_interval(
                    stability,
                    self.interval_modifier,
                    self.config.maximum_interval,
                );
                algorithm::add_days(at, days)
            }
        }
    }
}

impl AssessmentStrategy for ReviewStrategy<'_> {
    fn name(&self) -> &'static str {
        "review"
    }

    fn assess(&self, rating: Rating, at: DateTime<Utc>) -> Assessment {
        let stability = self.stability(rating, at);

        Assessment::new(
            at,
            self.schedule(rating, at, stability),
            stability,
            algorithm::next_difficulty(&self.config.weights, self.previous.difficulty(), rating),
            Self::next_state(rating),
        )
    }
}

// ============================================================================
// SELECTION
// ============================================================================

/// The strategy chosen for a previous assessment
#[derive(Debug, Clone, Copy)]
pub enum Strategy<'a> {
    /// No previous assessment
    Initial(InitialStrategy<'a>),
    /// Previous state Learning or Relearning
    Learning(LearningStrategy<'a>),
    /// Previous state Review
    Review(ReviewStrategy<'a>),
}

impl AssessmentStrategy for Strategy<'_> {
    fn name(&self) -> &'static str {
        match self {
            Strategy::Initial(s) => s.name(),
            Strategy::Learning(s) => s.name(),
            Strategy::Review(s) => s.name(),
        }
    }

    fn assess(&self, rating: Rating, at: DateTime<Utc>) -> Assessment {
        match self {
            Strategy::Initial(s) => s.assess(rating, at),
            Strategy::Learning(s) => s.assess(rating, at),
            Strategy::Review(s) => s.assess(rating, at),
        }
    }
}

/// Pick the strategy for `previous`, bound to `config`
pub fn strategy_for<'a>(
    config: &'a SchedulerConfig,
    previous: Option<&'a Assessment>,
) -> Strategy<'a> {
    match previous {
        None => Strategy::Initial(InitialStrategy::new(config)),
        Some(prev) if prev.state().is_learning() => {
            Strategy::Learning(LearningStrategy::new(config, prev))
        }
        Some(prev) => Strategy::Review(ReviewStrategy::new(config, prev)),
    }
}

// ============================================================================
// TESTS
// ============================================================================
