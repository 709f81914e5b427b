//! Scheduler configuration
//!
//! Target retention, the longest permitted gap between reviews and the
//! 19-element weight vector that parameterizes every memory equation.
//! A configuration is immutable once a [`Scheduler`](crate::Scheduler) owns it,
//! so it can be shared freely across threads.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Default target probability of recall at the next review
pub const DEFAULT_REQUEST_RETENTION: f64 = 0.9;

/// Default upper bound, in days, of any scheduled gap
pub const DEFAULT_MAXIMUM_INTERVAL: u32 = 36500;

/// Number of weights in the model
pub const WEIGHT_COUNT: usize = 19;

/// Environment variable overriding the request retention
pub const ENV_REQUEST_RETENTION: &str = "CADENCE_REQUEST_RETENTION";

/// Environment variable overriding the maximum interval
pub const ENV_MAXIMUM_INTERVAL: &str = "CADENCE_MAXIMUM_INTERVAL";

// ============================================================================
// WEIGHTS
// ============================================================================

/// The fixed-shape weight vector.
///
/// | Index   | Role                                            |
/// |---------|-------------------------------------------------|
/// | 0..=3   | Initial stability per rating                    |
/// | 4, 5    | Initial difficulty and its rating slope         |
/// | 6, 7    | Difficulty step and mean reversion              |
/// | 8..=10  | Recall stability growth                         |
/// | 11..=14 | Forget stability                                |
/// | 15, 16  | Struggled penalty and Mastered bonus            |
/// | 17, 18  | Short-term (learning step) stability            |
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weights(pub [f64; WEIGHT_COUNT]);

impl Weights {
    /// Published default weights
    pub const DEFAULT: Weights = Weights([
        0.4072, 1.1829, 3.1262, 15.4722, 7.2102, 0.5316, 1.0651, 0.0234, 1.616, 0.1544, 1.0824,
        1.9813, 0.0953, 0.2975, 2.2042, 0.2407, 2.9466, 0.5034, 0.6567,
    ]);

    /// Wrap a raw weight array
    pub const fn new(w: [f64; WEIGHT_COUNT]) -> Self {
        Self(w)
    }

    /// Borrow the raw array
    pub fn as_array(&self) -> &[f64; WEIGHT_COUNT] {
        &self.0
    }

    /// Check that every weight is usable.
    ///
    /// All weights must be finite and the four initial stabilities must be
    /// positive, otherwise a first assessment could report `stability <= 0`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, &value) in self.0.iter().enumerate() {
            if !value.is_finite() || (index < 4 && value <= 0.0) {
                return Err(ConfigError::InvalidWeight { index, value });
            }
        }
        Ok(())
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Index<usize> for Weights {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl From<[f64; WEIGHT_COUNT]> for Weights {
    fn from(w: [f64; WEIGHT_COUNT]) -> Self {
        Self(w)
    }
}

// ============================================================================
// SCHEDULER CONFIG
// ============================================================================

/// Configuration for a [`Scheduler`](crate::Scheduler).
///
/// Serializes with the camelCase keys `requestRetention`, `maximumInterval`
/// and `w`. Missing keys take their defaults when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchedulerConfig {
    /// Target probability of recall used to size review intervals, in (0, 1)
    pub request_retention: f64,
    /// Upper bound in days for any scheduled gap
    pub maximum_interval: u32,
    /// Model weights
    #[serde(rename = "w")]
    pub weights: Weights,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            request_retention: DEFAULT_REQUEST_RETENTION,
            maximum_interval: DEFAULT_MAXIMUM_INTERVAL,
            weights: Weights::DEFAULT,
        }
    }
}

impl SchedulerConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target retention
    pub fn with_request_retention(mut self, request_retention: f64) -> Self {
        self.request_retention = request_retention;
        self
    }

    /// Set the maximum interval in days
    pub fn with_maximum_interval(mut self, maximum_interval: u32) -> Self {
        self.maximum_interval = maximum_interval;
        self
    }

    /// Replace the weight vector
    pub fn with_weights(mut self, weights: impl Into<Weights>) -> Self {
        self.weights = weights.into();
        self
    }

    /// Reject malformed values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let r = self.request_retention;
        if !r.is_finite() || r <= 0.0 || r >= 1.0 {
            return Err(ConfigError::InvalidRequestRetention(r));
        }
        if self.maximum_interval == 0 {
            return Err(ConfigError::InvalidMaximumInterval(self.maximum_interval));
        }
        self.weights.validate()
    }

    /// Parse a JSON document and validate it
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SchedulerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `CADENCE_REQUEST_RETENTION` and `CADENCE_MAXIMUM_INTERVAL`
    pub fn apply_env_overrides(self) -> Self {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// Values that fail to parse are logged and ignored.
    pub fn apply_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_REQUEST_RETENTION) {
            match raw.trim().parse::<f64>() {
                Ok(value) => self.request_retention = value,
                Err(e) => tracing::warn!(
                    key = ENV_REQUEST_RETENTION,
                    value = %raw,
                    "Ignoring unparseable override: {}",
                    e
                ),
            }
        }
        if let Some(raw) = lookup(ENV_MAXIMUM_INTERVAL) {
            match raw.trim().parse::<u32>() {
                Ok(value) => self.maximum_interval = value,
                Err(e) => tracing::warn!(
                    key = ENV_MAXIMUM_INTERVAL,
                    value = %raw,
                    "Ignoring unparseable override: {}",
                    e
                ),
            }
        }
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================
