//! The read-only lookup surface over tasks, rewards and badges.
//!
//! # Invariants
//!
//! - Every (age group, AQI bracket) pair has at least one task
//! - Every age group has at least one reward, titles unique within the group
//! - Badge names are unique; badges are held sorted by threshold ascending
//! - All points, costs and thresholds are positive
//!
//! These are checked by [`Catalog::validate`] when the catalog is built, so
//! lookups never fail at call time.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use super::{AgeGroup, AqiBracket, Badge, CatalogError, Reward, Task};

/// Serializable shape of a catalog, used for YAML/JSON catalog files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub tasks: BTreeMap<AgeGroup, BTreeMap<AqiBracket, Vec<Task>>>,
    #[serde(default)]
    pub rewards: BTreeMap<AgeGroup, Vec<Reward>>,
    #[serde(default)]
    pub badges: Vec<Badge>,
}

/// Immutable reference data, built once at process start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    tasks: [[Vec<Task>; 6]; 3],
    rewards: [Vec<Reward>; 3],
    badges: Vec<Badge>,
}

impl Catalog {
    /// Builds and validates a catalog from its document form.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if any completeness or positivity rule is broken.
    pub fn from_document(document: CatalogDocument) -> Result<Self, CatalogError> {
        let mut tasks: [[Vec<Task>; 6]; 3] = Default::default();
        for (age_group, by_bracket) in document.tasks {
            for (bracket, list) in by_bracket {
                tasks[age_group.index()][bracket.index()] = list;
            }
        }

        let mut rewards: [Vec<Reward>; 3] = Default::default();
        for (age_group, list) in document.rewards {
            rewards[age_group.index()] = list;
        }

        let catalog = Self::from_parts(tasks, rewards, document.badges);
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parses a YAML catalog and validates it.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument =
            serde_yaml::from_str(yaml).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::from_document(document)
    }

    /// Assembles a catalog without validating it. Badges are sorted.
    pub(crate) fn from_parts(
        tasks: [[Vec<Task>; 6]; 3],
        rewards: [Vec<Reward>; 3],
        mut badges: Vec<Badge>,
    ) -> Self {
        badges.sort_by_key(|b| b.threshold);
        Self {
            tasks,
            rewards,
            badges,
        }
    }

    /// Checks the data-completeness invariants.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for age_group in AgeGroup::ALL {
            for bracket in AqiBracket::ALL {
                let list = self.tasks_for(age_group, bracket);
                if list.is_empty() {
                    return Err(CatalogError::MissingTasks { age_group, bracket });
                }
                for task in list {
                    if task.description.trim().is_empty() {
                        return Err(CatalogError::EmptyText("task description"));
                    }
                    if task.points == 0 {
                        return Err(CatalogError::NonPositiveTaskPoints {
                            description: task.description.clone(),
                        });
                    }
                }
            }

            let rewards = self.rewards_for(age_group);
            if rewards.is_empty() {
                return Err(CatalogError::MissingRewards(age_group));
            }
            let mut titles = HashSet::new();
            for reward in rewards {
                if reward.title.trim().is_empty() {
                    return Err(CatalogError::EmptyText("reward title"));
                }
                if reward.cost == 0 {
                    return Err(CatalogError::NonPositiveRewardCost {
                        title: reward.title.clone(),
                    });
                }
                if !titles.insert(reward.title.as_str()) {
                    return Err(CatalogError::DuplicateReward {
                        age_group,
                        title: reward.title.clone(),
                    });
                }
            }
        }

        let mut names = HashSet::new();
        for badge in &self.badges {
            if badge.name.trim().is_empty() {
                return Err(CatalogError::EmptyText("badge name"));
            }
            if badge.threshold == 0 {
                return Err(CatalogError::NonPositiveBadgeThreshold {
                    name: badge.name.clone(),
                });
            }
            if !names.insert(badge.name.as_str()) {
                return Err(CatalogError::DuplicateBadge(badge.name.clone()));
            }
        }

        Ok(())
    }

    /// Tasks offered to `age_group` when the air is in `bracket`, in catalog order.
    pub fn tasks_for(&self, age_group: AgeGroup, bracket: AqiBracket) -> &[Task] {
        &self.tasks[age_group.index()][bracket.index()]
    }

    /// Rewards available to `age_group`, in catalog order.
    pub fn rewards_for(&self, age_group: AgeGroup) -> &[Reward] {
        &self.rewards[age_group.index()]
    }

    /// Exact-title lookup within an age group's rewards.
    pub fn find_reward(&self, age_group: AgeGroup, title: &str) -> Option<&Reward> {
        self.rewards_for(age_group).iter().find(|r| r.title == title)
    }

    /// All badges, sorted by threshold ascending.
    pub fn all_badges_ascending(&self) -> &[Badge] {
        &self.badges
    }

    /// Converts back to the serializable document form.
    pub fn to_document(&self) -> CatalogDocument {
        let mut document = CatalogDocument::default();
        for age_group in AgeGroup::ALL {
            let by_bracket = AqiBracket::ALL
                .iter()
                .map(|b| (*b, self.tasks_for(age_group, *b).to_vec()))
                .collect();
            document.tasks.insert(age_group, by_bracket);
            document
                .rewards
                .insert(age_group, self.rewards_for(age_group).to_vec());
        }
        document.badges = self.badges.clone();
        document
    }
}
