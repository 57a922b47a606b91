//! Catalog loading errors.

use thiserror::Error;

use super::{AgeGroup, AqiBracket};
use crate::domain::foundation::{DomainError, ErrorCode};

/// Raised when reference data is malformed. Checked once at load time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("No tasks defined for {age_group} at AQI {bracket}")]
    MissingTasks {
        age_group: AgeGroup,
        bracket: AqiBracket,
    },

    #[error("No rewards defined for {0}")]
    MissingRewards(AgeGroup),

    #[error("Task '{description}' must award a positive number of points")]
    NonPositiveTaskPoints { description: String },

    #[error("Reward '{title}' must cost a positive number of points")]
    NonPositiveRewardCost { title: String },

    #[error("Reward title '{title}' appears more than once for {age_group}")]
    DuplicateReward { age_group: AgeGroup, title: String },

    #[error("Badge '{name}' must have a positive threshold")]
    NonPositiveBadgeThreshold { name: String },

    #[error("Badge name '{0}' appears more than once")]
    DuplicateBadge(String),

    #[error("Entry has an empty {0}")]
    EmptyText(&'static str),

    #[error("Catalog could not be parsed: {0}")]
    Parse(String),

    #[error("Catalog could not be read: {0}")]
    Io(String),
}

impl From<CatalogError> for DomainError {
    fn from(err: CatalogError) -> Self {
        DomainError::new(ErrorCode::CatalogIncomplete, err.to_string())
    }
}
