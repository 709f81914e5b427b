//! Closed-form memory equations
//!
//! Every function here is pure and takes its parameters explicitly, so the
//! strategies can share them without any inherited state.
//!
//! Rating values `g` map Forgot=1, Struggled=2, Remembered=3, Mastered=4.

use chrono::{DateTime, Duration, Utc};

use crate::assessment::Rating;
use crate::config::Weights;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Power-law decay exponent of the forgetting curve
pub const DECAY: f64 = -0.5;

/// Scales elapsed time so that R(S) = 0.9
pub const FACTOR: f64 = 19.0 / 81.0;

/// Milliseconds per day
pub const MS_PER_DAY: f64 = 86_400_000.0;

/// Lower difficulty bound
pub const MIN_DIFFICULTY: f64 = 1.0;

/// Upper difficulty bound
pub const MAX_DIFFICULTY: f64 = 10.0;

/// Shortest day-based interval
pub const MIN_INTERVAL_DAYS: f64 = 1.0;

/// Fixed steps (minutes) after a first assessment that did not graduate
pub const INITIAL_FORGOT_MINUTES: i64 = 1;
/// See [`INITIAL_FORGOT_MINUTES`]
pub const INITIAL_STRUGGLED_MINUTES: i64 = 5;
/// See [`INITIAL_FORGOT_MINUTES`]
pub const INITIAL_REMEMBERED_MINUTES: i64 = 10;

/// Fixed steps (minutes) while Learning or Relearning
pub const LEARNING_FORGOT_MINUTES: i64 = 5;
/// See [`LEARNING_FORGOT_MINUTES`]
pub const LEARNING_STRUGGLED_MINUTES: i64 = 10;

/// Step (minutes) after a lapse during Review
pub const RELEARNING_MINUTES: i64 = 5;

// ============================================================================
// TIME
// ============================================================================

/// Fractional days from `from` to `to` (negative if `to` is earlier)
#[inline]
pub fn elapsed_days(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / MS_PER_DAY
}

/// Add fractional days, truncated to whole milliseconds.
///
/// The offset is summed with the epoch milliseconds before truncation so the
/// result matches millisecond-resolution date arithmetic. Saturates at the
/// smallest and largest representable instants, infinities included. A NaN
/// offset falls back to [`MIN_INTERVAL_DAYS`].
pub fn add_days(at: DateTime<Utc>, days: f64) -> DateTime<Utc> {
    let days = if days.is_nan() { MIN_INTERVAL_DAYS } else { days };
    let total = at.timestamp_millis() as f64 + days * MS_PER_DAY;
    match DateTime::<Utc>::from_timestamp_millis(total as i64) {
        Some(due) => due,
        None if total < 0.0 => DateTime::<Utc>::MIN_UTC,
        None => DateTime::<Utc>::MAX_UTC,
    }
}

/// Add whole minutes
#[inline]
pub fn add_minutes(at: DateTime<Utc>, minutes: i64) -> DateTime<Utc> {
    at + Duration::minutes(minutes)
}

// ============================================================================
// RETRIEVABILITY
// ============================================================================

/// Probability of recall after `elapsed_days` at the given stability.
///
/// `R = (1 + FACTOR * t / S) ^ DECAY`. Exactly 1 at `t = 0`. Not clamped:
/// a negative `t` yields a value above 1.
#[inline]
pub fn retrievability(elapsed_days: f64, stability: f64) -> f64 {
    (1.0 + FACTOR * (elapsed_days / stability)).powf(DECAY)
}

// ============================================================================
// DIFFICULTY
// ============================================================================

/// Clamp into `[MIN_DIFFICULTY, MAX_DIFFICULTY]`
#[inline]
pub fn clamp_difficulty(difficulty: f64) -> f64 {
    difficulty.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY)
}

/// Difficulty after the very first assessment
pub fn initial_difficulty(w: &Weights, rating: Rating) -> f64 {
    let g = f64::from(rating.value());
    clamp_difficulty(w[4] - (w[5] * (g - 1.0)).exp() + 1.0)
}

/// Difficulty after any later assessment.
///
/// Steps away from the previous difficulty by `w[6]` per rating point and
/// reverts towards the initial Mastered difficulty with weight `w[7]`.
pub fn next_difficulty(w: &Weights, difficulty: f64, rating: Rating) -> f64 {
    let g = f64::from(rating.value());
    let stepped = difficulty - w[6] * (g - 3.0);
    let anchor = initial_difficulty(w, Rating::Mastered);
    clamp_difficulty(w[7] * anchor + (1.0 - w[7]) * stepped)
}

// ============================================================================
// STABILITY
// ============================================================================

/// Stability after the very first assessment: one of `w[0..4]`
#[inline]
pub fn initial_stability(w: &Weights, rating: Rating) -> f64 {
    w[usize::from(rating.value()) - 1]
}

/// Stability after a learning or relearning step
pub fn short_term_stability(w: &Weights, stability: f64, rating: Rating) -> f64 {
    let g = f64::from(rating.value());
    stability * (w[17] * (g - 3.0 + w[18])).exp()
}

/// Stability multiplier applied to a successful review
#[inline]
pub fn recall_multiplier(w: &Weights, rating: Rating) -> f64 {
    match rating {
        Rating::Struggled => w[15],
        Rating::Mastered => w[16],
        Rating::Forgot | Rating::Remembered => 1.0,
    }
}

/// Stability after a successful review
pub fn next_recall_stability(
    w: &Weights,
    difficulty: f64,
    stability: f64,
    retrievability: f64,
    rating: Rating,
) -> f64 {
    stability
        * (1.0
            + w[8].exp()
                * (11.0 - difficulty)
                * stability.powf(-w[9])
                * (((1.0 - retrievability) * w[10]).exp() - 1.0)
                * recall_multiplier(w, rating))
}

/// Stability after a lapse during review.
///
/// Never exceeds the stability before the lapse. There is no floor: repeated
/// lapses may drive it towards zero, but never to or below it.
pub fn next_forget_stability(
    w: &Weights,
    difficulty: f64,
    stability: f64,
    retrievability: f64,
) -> f64 {
    let forgotten = w[11]
        * difficulty.powf(-w[12])
        * ((stability + 1.0).powf(w[13]) - 1.0)
        * (w[14] * (1.0 - retrievability)).exp();
    forgotten.min(stability)
}

// ============================================================================
// INTERVALS
// ============================================================================

/// Clamp to `[1, maximum_interval]`; NaN maps to the lower bound
#[inline]
fn clamp_interval(days: f64, maximum_interval: u32) -> f64 {
    if days.is_nan() {
        return MIN_INTERVAL_DAYS;
    }
    days.clamp(MIN_INTERVAL_DAYS, f64::from(maximum_interval))
}

/// Interval in days after an initial or learning assessment.
///
/// Fractional; clamped to `[1, maximum_interval]`.
pub fn next_interval(stability: f64, request_retention: f64, maximum_interval: u32) -> f64 {
    clamp_interval(
        stability * 9.0 * (1.0 / request_retention - 1.0),
        maximum_interval,
    )
}

/// Days per unit of stability that bring R down to `request_retention`.
///
/// Obtained by inverting [`retrievability`] at the target retention.
#[inline]
pub fn interval_modifier(request_retention: f64) -> f64 {
    (request_retention.powf(1.0 / DECAY) - 1.0) / FACTOR
}

/// Interval in whole days after a review
pub fn review_interval(stability: f64, interval_modifier: f64, maximum_interval: u32) -> f64 {
    clamp_interval((stability * interval_modifier).round(), maximum_interval)
}

// ============================================================================
// TESTS
// ============================================================================
