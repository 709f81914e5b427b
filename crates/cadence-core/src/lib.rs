//! # Cadence Core
//!
//! Spaced repetition scheduling for a single piece of learned information.
//!
//! Given the previous assessment of an item (or none, for a new item), a
//! rating of the latest recall attempt and a timestamp, the scheduler returns
//! a new [`Assessment`]: updated stability and difficulty, the learning state,
//! and when the item should next be reviewed.
//!
//! - **Stateless**: nothing but the configuration survives between calls
//! - **Pure**: identical inputs give bit-identical outputs
//! - **Shareable**: a [`Scheduler`] is `Send + Sync` and needs no locking
//!
//! ## Quick Start
//!
//! ```rust
//! use cadence_core::{Rating, Scheduler, SchedulerConfig};
//! use chrono::{TimeZone, Utc};
//!
//! let scheduler = Scheduler::new(SchedulerConfig::default())?;
//! let now = Utc.with_ymd_and_hms(2024, 12, 2, 0, 0, 0).unwrap();
//!
//! // First evaluation of a new item
//! let first = scheduler.assess_recall(Rating::Mastered, now, None);
//! assert_eq!(first.stability(), 15.4722);
//!
//! // Review it when due
//! let due = first.next_scheduled_assessment();
//! let second = scheduler.assess_recall(Rating::Remembered, due, Some(&first));
//! assert!(second.next_scheduled_assessment() > due);
//! # Ok::<(), cadence_core::ConfigError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(rustdoc::missing_crate_level_docs)]

// ============================================================================
// MODULES
// ============================================================================

pub mod assessment;
pub mod config;
pub mod error;
pub mod fsrs;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Data model
pub use assessment::{Assessment, LearningState, Rating};

// Configuration
pub use config::{
    DEFAULT_MAXIMUM_INTERVAL, DEFAULT_REQUEST_RETENTION, SchedulerConfig, WEIGHT_COUNT, Weights,
};

// Errors
pub use error::{
    AssessmentError, CadenceError, ConfigError, RatingParseError, Result, StateParseError,
};

// Scheduling
pub use fsrs::{
    AssessmentStrategy, Preview, Scheduler, Strategy, retrievability, strategy_for,
};

// ============================================================================
// VERSION INFO
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// PRELUDE
// ============================================================================

/// Convenient imports for common usage
pub mod prelude {
    pub use crate::{
        Assessment, CadenceError, ConfigError, LearningState, Preview, Rating, Result, Scheduler,
        SchedulerConfig, Weights,
    };
}
