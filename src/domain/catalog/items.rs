//! Catalog entries: tasks, rewards and badges.
//!
//! All three are immutable reference data owned by the [`Catalog`](super::Catalog).

use serde::{Deserialize, Serialize};

/// A civic action a user can complete for points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// What the user is asked to do.
    #[serde(alias = "task")]
    pub description: String,
    /// Points awarded on completion. Always positive.
    pub points: u32,
}

impl Task {
    pub fn new(description: impl Into<String>, points: u32) -> Self {
        Self {
            description: description.into(),
            points,
        }
    }
}

/// An item that can be bought with points.
///
/// Titles are unique within one age group's reward list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub title: String,
    /// Price in points. Always positive.
    #[serde(alias = "points")]
    pub cost: u32,
    pub description: String,
}

impl Reward {
    pub fn new(title: impl Into<String>, cost: u32, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            cost,
            description: description.into(),
        }
    }
}

/// A permanent achievement unlocked once a user's balance reaches `threshold`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    /// Globally unique name.
    pub name: String,
    #[serde(alias = "points")]
    pub threshold: u32,
    pub description: String,
}

impl Badge {
    pub fn new(name: impl Into<String>, threshold: u32, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            threshold,
            description: description.into(),
        }
    }

    /// True once `points` has reached this badge's threshold.
    pub fn is_unlocked_by(&self, points: u64) -> bool {
        points >= u64::from(self.threshold)
    }
}
