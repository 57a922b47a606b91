//! Progression Engine - the rules for tasks, points, badges and rewards.
//!
//! Every operation works on values handed in by the caller and either
//! mutates them completely or not at all: validation and lookups run
//! before the first field is touched.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::catalog::{AgeGroup, AqiBracket, Catalog, Reward, Task};
use crate::domain::foundation::UserEmail;
use crate::domain::player::{population, BadgeProgress, ProgressionError, User};

use super::inputs::{require_text, ProfileUpdate, Registration};

/// Tasks suited to one age group under one air quality bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRecommendation {
    pub age_group: AgeGroup,
    pub bracket: AqiBracket,
    pub category: &'static str,
    pub tasks: Vec<Task>,
}

/// Outcome of a completed task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskCompletion {
    pub points_awarded: u64,
    /// Badges unlocked by this completion, ascending by threshold.
    pub newly_earned: Vec<String>,
}

/// Applies catalog rules to users.
#[derive(Debug, Clone)]
pub struct ProgressionEngine {
    catalog: Arc<Catalog>,
}

impl ProgressionEngine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Looks up the task list for an age and AQI reading.
    pub fn recommend_tasks(&self, age: u32, aqi: u32) -> TaskRecommendation {
        let age_group = AgeGroup::from_age(age);
        let bracket = AqiBracket::from_aqi(aqi);
        TaskRecommendation {
            age_group,
            bracket,
            category: bracket.category(),
            tasks: self.catalog.tasks_for(age_group, bracket).to_vec(),
        }
    }

    /// Credits `points_awarded` to the user and unlocks any badges now reached.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `points_awarded` is not positive or would overflow the balance
    pub fn complete_task(
        &self,
        user: &mut User,
        points_awarded: i64,
    ) -> Result<TaskCompletion, ProgressionError> {
        let points = u64::try_from(points_awarded)
            .ok()
            .filter(|p| *p > 0)
            .ok_or_else(|| {
                ProgressionError::invalid_input(
                    "points",
                    format!("must be positive, got {}", points_awarded),
                )
            })?;
        if user.points().checked_add(points).is_none() {
            return Err(ProgressionError::invalid_input(
                "points",
                "balance would overflow",
            ));
        }

        user.record_task(points);
        let newly_earned = self.evaluate_badges(user);

        Ok(TaskCompletion {
            points_awarded: points,
            newly_earned,
        })
    }

    /// Grants every badge whose threshold the user's balance has reached.
    ///
    /// Recomputed from the current balance on each call; already-held badges
    /// are skipped, so a second call without a balance change is a no-op.
    pub fn evaluate_badges(&self, user: &mut User) -> Vec<String> {
        let points = user.points();
        let mut newly_earned = Vec::new();
        for badge in self.catalog.all_badges_ascending() {
            if badge.is_unlocked_by(points) && user.unlock_badge(&badge.name) {
                newly_earned.push(badge.name.clone());
            }
        }
        newly_earned
    }

    /// Spends points on a reward from the user's age group.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the title is blank
    /// - `NotFound` if the age group has no reward with that exact title
    /// - `InsufficientPoints` if the balance is below the cost
    pub fn redeem_reward(&self, user: &mut User, title: &str) -> Result<Reward, ProgressionError> {
        if title.trim().is_empty() {
            return Err(ProgressionError::missing("reward"));
        }
        let reward = self
            .catalog
            .find_reward(user.age_group(), title)
            .ok_or_else(|| ProgressionError::reward_not_found(title))?;

        let cost = u64::from(reward.cost);
        if user.points() < cost {
            return Err(ProgressionError::insufficient_points(
                &reward.title,
                cost,
                user.points(),
            ));
        }

        user.record_redemption(reward);
        Ok(reward.clone())
    }

    /// Rewards available to the user's age group, cheapest tier first.
    pub fn rewards_for(&self, user: &User) -> &[Reward] {
        self.catalog.rewards_for(user.age_group())
    }

    /// Replaces a user's identity fields.
    ///
    /// Takes the whole population because the email uniqueness check spans
    /// every user. Returns the updated record.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if username, new email or age is missing
    /// - `NotFound` if `current` is not registered
    /// - `Conflict` if the new email belongs to a different user
    pub fn update_profile(
        &self,
        users: &mut [User],
        current: &UserEmail,
        update: ProfileUpdate,
    ) -> Result<User, ProgressionError> {
        let identity = update.validate()?;
        population::find(users, current)?;
        if &identity.email != current && population::is_registered(users, &identity.email) {
            return Err(ProgressionError::conflict(format!(
                "Email already registered: {}",
                identity.email
            )));
        }

        let user = population::find_mut(users, current)?;
        user.apply_profile(
            identity.username,
            identity.email,
            identity.age,
            update.city,
            update.profile_image,
        );
        Ok(user.clone())
    }

    /// Sets the city a user's AQI readings come from.
    pub fn select_city(&self, user: &mut User, city: Option<&str>) -> Result<(), ProgressionError> {
        let city = require_text("city", city)?;
        user.set_city(city);
        Ok(())
    }

    /// Creates a new user, rejecting emails that are already registered.
    pub fn register(
        &self,
        users: &[User],
        registration: Registration,
    ) -> Result<User, ProgressionError> {
        let identity = registration.validate()?;
        if population::is_registered(users, &identity.email) {
            return Err(ProgressionError::conflict(format!(
                "Email already registered: {}",
                identity.email
            )));
        }
        Ok(User::register(
            identity.email,
            identity.username,
            identity.age,
        ))
    }

    pub fn badge_progress(&self, points: u64) -> BadgeProgress {
        BadgeProgress::compute(self.catalog.all_badges_ascending(), points)
    }
}
