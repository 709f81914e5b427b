//! Free Spaced Repetition Scheduler
//!
//! A small state machine (new / Learning / Relearning / Review) combined with
//! continuous memory parameters updated by closed-form equations.
//!
//! ## Core Formulas:
//! - Retrievability: R = (1 + 19/81 * t / S)^(-0.5)
//! - Initial difficulty: D0(g) = clamp(w4 - e^(w5 * (g - 1)) + 1, 1, 10)
//! - Next difficulty: D' = clamp(w7 * D0(4) + (1 - w7) * (D - w6 * (g - 3)), 1, 10)
//! - Learning step: S' = S * e^(w17 * (g - 3 + w18))
//! - Recall: S' = S * (1 + e^w8 * (11 - D) * S^(-w9) * (e^((1 - R) * w10) - 1) * m(g))
//! - Forget: S' = min(w11 * D^(-w12) * ((S + 1)^w13 - 1) * e^(w14 * (1 - R)), S)

pub mod algorithm;
mod scheduler;
pub mod strategy;

pub use algorithm::{
    DECAY,
    FACTOR,
    MAX_DIFFICULTY,
    MIN_DIFFICULTY,
    initial_difficulty,
    initial_stability,
    interval_modifier,
    next_difficulty,
    next_forget_stability,
    next_interval,
    next_recall_stability,
    // Core functions
    retrievability,
    review_interval,
    short_term_stability,
};

pub use scheduler::{Preview, Scheduler};

pub use strategy::{
    AssessmentStrategy, InitialStrategy, LearningStrategy, ReviewStrategy, Strategy, strategy_for,
};
