//! Assessment data model
//!
//! - [`Rating`]: how the learner judged a recall attempt
//! - [`LearningState`]: Learning / Review / Relearning
//! - [`Assessment`]: immutable outcome of one evaluation

mod rating;
mod record;

pub use rating::{LearningState, Rating};
pub use record::Assessment;
