//! Ratings and learning states

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RatingParseError, StateParseError};

// ============================================================================
// RATING
// ============================================================================

/// Outcome of a recall attempt, as judged by the learner.
///
/// | Rating     | Value | Meaning                          |
/// |------------|-------|----------------------------------|
/// | Forgot     | 1     | Could not recall                 |
/// | Struggled  | 2     | Recalled with serious effort     |
/// | Remembered | 3     | Recalled normally                |
/// | Mastered   | 4     | Recalled effortlessly            |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rating {
    /// Could not recall
    #[serde(alias = "forgot")]
    Forgot,
    /// Recalled with serious effort
    #[serde(alias = "struggled")]
    Struggled,
    /// Recalled normally
    #[serde(alias = "remembered")]
    Remembered,
    /// Recalled effortlessly
    #[serde(alias = "mastered")]
    Mastered,
}

impl Rating {
    /// Every rating, lowest first
    pub const ALL: [Rating; 4] = [
        Rating::Forgot,
        Rating::Struggled,
        Rating::Remembered,
        Rating::Mastered,
    ];

    /// Numeric value used by the equations (1-4)
    #[inline]
    pub fn value(&self) -> u8 {
        match self {
            Rating::Forgot => 1,
            Rating::Struggled => 2,
            Rating::Remembered => 3,
            Rating::Mastered => 4,
        }
    }

    /// Create from an integer value
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            1 => Some(Rating::Forgot),
            2 => Some(Rating::Struggled),
            3 => Some(Rating::Remembered),
            4 => Some(Rating::Mastered),
            _ => None,
        }
    }

    /// Whether the item was recalled at all
    #[inline]
    pub fn is_recalled(&self) -> bool {
        !matches!(self, Rating::Forgot)
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Forgot => "Forgot",
            Rating::Struggled => "Struggled",
            Rating::Remembered => "Remembered",
            Rating::Mastered => "Mastered",
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Rating {
    type Err = RatingParseError;

    /// Accepts the names case-insensitively, or the digits 1-4
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "forgot" | "1" => Ok(Rating::Forgot),
            "struggled" | "2" => Ok(Rating::Struggled),
            "remembered" | "3" => Ok(Rating::Remembered),
            "mastered" | "4" => Ok(Rating::Mastered),
            _ => Err(RatingParseError(trimmed.to_string())),
        }
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::from_i32(i32::from(value)).ok_or_else(|| RatingParseError(value.to_string()))
    }
}

// ============================================================================
// LEARNING STATE
// ============================================================================

/// Learning phase recorded on an assessment.
///
/// A brand-new item has no state at all: it is represented by the absence of
/// a previous assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LearningState {
    /// First pass through short learning steps
    Learning,
    /// Graduated; intervals grow with stability
    Review,
    /// Forgotten during review, back on short steps
    Relearning,
}

impl LearningState {
    /// Learning and Relearning share the short-step update
    #[inline]
    pub fn is_learning(&self) -> bool {
        matches!(self, LearningState::Learning | LearningState::Relearning)
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            LearningState::Learning => "Learning",
            LearningState::Review => "Review",
            LearningState::Relearning => "Relearning",
        }
    }
}

impl std::fmt::Display for LearningState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LearningState {
    type Err = StateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "learning" => Ok(LearningState::Learning),
            "review" => Ok(LearningState::Review),
            "relearning" => Ok(LearningState::Relearning),
            _ => Err(StateParseError(s.trim().to_string())),
        }
    }
}
