//! Progression - task recommendation, points and badge accrual, reward redemption.
//!
//! # Module Structure
//!
//! - `engine` - `ProgressionEngine` and its result types
//! - `inputs` - `Registration` and `ProfileUpdate` request data

mod engine;
mod inputs;

pub use engine::{ProgressionEngine, TaskCompletion, TaskRecommendation};
pub use inputs::{ProfileUpdate, Registration};

pub(crate) use inputs::{require_email, require_text};
