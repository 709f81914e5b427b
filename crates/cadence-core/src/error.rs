//! Error types
//!
//! The scheduling equations themselves cannot fail: every input they accept is
//! valid by construction. Errors only arise at the boundary, when a rating, a
//! configuration or a stored assessment arrives in a malformed shape.

// ============================================================================
// CONFIGURATION ERRORS
// ============================================================================

/// Rejected scheduler configuration
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Request retention must lie strictly between 0 and 1
    #[error("Invalid request retention: {0} (expected a value in the open interval (0, 1))")]
    InvalidRequestRetention(f64),
    /// Maximum interval must be at least one day
    #[error("Invalid maximum interval: {0} (expected at least 1 day)")]
    InvalidMaximumInterval(u32),
    /// A weight is not finite, or an initial stability weight is not positive
    #[error("Invalid weight w[{index}]: {value}")]
    InvalidWeight {
        /// Position in the weight vector
        index: usize,
        /// Offending value
        value: f64,
    },
    /// Configuration document could not be parsed
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

// ============================================================================
// RATING ERRORS
// ============================================================================

/// A rating outside Forgot / Struggled / Remembered / Mastered
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid rating '{0}': expected forgot, struggled, remembered, mastered or 1-4")]
pub struct RatingParseError(pub String);

/// A learning state name that is not Learning / Review / Relearning
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid learning state '{0}': expected learning, review or relearning")]
pub struct StateParseError(pub String);

// ============================================================================
// ASSESSMENT ERRORS
// ============================================================================

/// An assessment whose parameters no strategy could have produced
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AssessmentError {
    /// Stability must be finite and positive
    #[error("Invalid stability: {0} (expected a finite value above 0)")]
    InvalidStability(f64),
    /// Difficulty must lie in [1, 10]
    #[error("Invalid difficulty: {0} (expected a value in [1, 10])")]
    InvalidDifficulty(f64),
    /// The next assessment must come after the evaluation
    #[error("Invalid schedule: next assessment {next} is not after {assessed_at}")]
    InvalidSchedule {
        /// When the evaluation happened
        assessed_at: chrono::DateTime<chrono::Utc>,
        /// When the next evaluation was scheduled
        next: chrono::DateTime<chrono::Utc>,
    },
}

// ============================================================================
// CRATE ERROR
// ============================================================================

/// Top-level error for the crate
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum CadenceError {
    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Rating parse error
    #[error(transparent)]
    Rating(#[from] RatingParseError),
    /// Learning state parse error
    #[error(transparent)]
    State(#[from] StateParseError),
    /// Assessment validation error
    #[error(transparent)]
    Assessment(#[from] AssessmentError),
    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Crate result type
pub type Result<T> = std::result::Result<T, CadenceError>;
