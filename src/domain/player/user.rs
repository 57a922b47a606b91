//! User aggregate.
//!
//! A user's progression state: points balance, completed task count, earned
//! badges and redeemed rewards. The aggregate only exposes narrow mutators;
//! validation and catalog rules live in the progression engine.
//!
//! # Invariants
//!
//! - `points` never goes below zero (unsigned; debits are checked first)
//! - `badges` only grows
//! - `tasks_completed` grows by exactly one per completed task
//! - `rewards` grows by exactly one entry per redemption, duplicates allowed

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{AgeGroup, Reward};
use crate::domain::foundation::{Timestamp, UserEmail};

/// Community every user joins at registration.
pub const DEFAULT_COMMUNITY: &str = "Team Green";

fn default_community() -> String {
    DEFAULT_COMMUNITY.to_string()
}

/// A registered participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    email: UserEmail,
    username: String,
    age: u32,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    profile_image: Option<String>,
    #[serde(default, alias = "bloom_points")]
    points: u64,
    #[serde(default)]
    tasks_completed: u64,
    #[serde(default)]
    badges: BTreeSet<String>,
    #[serde(default)]
    rewards: Vec<String>,
    #[serde(default = "default_community")]
    community: String,
    #[serde(default)]
    joined_at: Timestamp,
    #[serde(default)]
    updated_at: Timestamp,
}

impl User {
    /// Creates a freshly registered user with an empty ledger.
    pub fn register(email: UserEmail, username: impl Into<String>, age: u32) -> Self {
        let now = Timestamp::now();
        Self {
            email,
            username: username.into(),
            age,
            city: None,
            profile_image: None,
            points: 0,
            tasks_completed: 0,
            badges: BTreeSet::new(),
            rewards: Vec::new(),
            community: default_community(),
            joined_at: now,
            updated_at: now,
        }
    }

    pub fn email(&self) -> &UserEmail {
        &self.email
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn age_group(&self) -> AgeGroup {
        AgeGroup::from_age(self.age)
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn profile_image(&self) -> Option<&str> {
        self.profile_image.as_deref()
    }

    pub fn points(&self) -> u64 {
        self.points
    }

    pub fn tasks_completed(&self) -> u64 {
        self.tasks_completed
    }

    pub fn badges(&self) -> &BTreeSet<String> {
        &self.badges
    }

    pub fn has_badge(&self, name: &str) -> bool {
        self.badges.contains(name)
    }

    /// Redeemed reward titles, oldest first.
    pub fn rewards(&self) -> &[String] {
        &self.rewards
    }

    pub fn community(&self) -> &str {
        &self.community
    }

    pub fn joined_at(&self) -> &Timestamp {
        &self.joined_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Credits a completed task. The caller has already checked that
    /// `points` is positive and the sum does not overflow.
    pub(crate) fn record_task(&mut self, points: u64) {
        self.points += points;
        self.tasks_completed += 1;
        self.touch();
    }

    /// Adds a badge; returns false if it was already held.
    pub(crate) fn unlock_badge(&mut self, name: &str) -> bool {
        self.badges.insert(name.to_string())
    }

    /// Debits a reward. The caller has already checked the balance.
    pub(crate) fn record_redemption(&mut self, reward: &Reward) {
        self.points -= u64::from(reward.cost);
        self.rewards.push(reward.title.clone());
        self.touch();
    }

    pub(crate) fn set_city(&mut self, city: String) {
        self.city = Some(city);
        self.touch();
    }

    /// Replaces the identity fields together. Optional fields are only
    /// replaced when given.
    pub(crate) fn apply_profile(
        &mut self,
        username: String,
        email: UserEmail,
        age: u32,
        city: Option<String>,
        profile_image: Option<String>,
    ) {
        self.username = username;
        self.email = email;
        self.age = age;
        if let Some(city) = city {
            self.city = Some(city);
        }
        if let Some(image) = profile_image {
            self.profile_image = Some(image);
        }
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User::register(UserEmail::new("asha@example.org").unwrap(), "asha", 11)
    }

    #[test]
    fn registration_starts_with_empty_ledger() {
        let user = test_user();
        assert_eq!(user.points(), 0);
        assert_eq!(user.tasks_completed(), 0);
        assert!(user.badges().is_empty());
        assert!(user.rewards().is_empty());
        assert_eq!(user.community(), DEFAULT_COMMUNITY);
        assert_eq!(user.city(), None);
    }

    #[test]
    fn age_group_follows_age() {
        assert_eq!(test_user().age_group(), AgeGroup::Children);
    }

    #[test]
    fn record_task_increments_counters() {
        let mut user = test_user();
        user.record_task(15);
        user.record_task(10);
        assert_eq!(user.points(), 25);
        assert_eq!(user.tasks_completed(), 2);
    }

    #[test]
    fn unlock_badge_is_idempotent() {
        let mut user = test_user();
        assert!(user.unlock_badge("Green Sprout"));
        assert!(!user.unlock_badge("Green Sprout"));
        assert_eq!(user.badges().len(), 1);
    }

    #[test]
    fn redemption_appends_title_and_debits() {
        let mut user = test_user();
        user.record_task(60);
        let reward = Reward::new("Plantable Seed Paper", 50, "Paper that grows into plants.");
        user.record_redemption(&reward);
        user.record_task(50);
        user.record_redemption(&reward);
        assert_eq!(user.points(), 10);
        assert_eq!(user.rewards(), ["Plantable Seed Paper", "Plantable Seed Paper"]);
    }

    #[test]
    fn apply_profile_leaves_absent_optionals_untouched() {
        let mut user = test_user();
        user.set_city("Pune".to_string());
        user.apply_profile(
            "asha_k".to_string(),
            UserEmail::new("asha.k@example.org").unwrap(),
            13,
            None,
            Some(String::new()),
        );
        assert_eq!(user.username(), "asha_k");
        assert_eq!(user.email().as_str(), "asha.k@example.org");
        assert_eq!(user.age_group(), AgeGroup::Teenagers);
        assert_eq!(user.city(), Some("Pune"));
        assert_eq!(user.profile_image(), Some(""));
    }

    #[test]
    fn deserializes_legacy_record_with_defaults() {
        let json = r#"{
            "email": "ravi@example.org",
            "username": "ravi",
            "age": 34,
            "city": "Delhi",
            "bloom_points": 120,
            "tasks_completed": 6,
            "badges": ["Green Sprout", "Eco Hero"],
            "rewards": ["Air Purifying Plant"]
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.points(), 120);
        assert_eq!(user.community(), DEFAULT_COMMUNITY);
        assert!(user.has_badge("Eco Hero"));
    }
}
