//! Progression handlers.
//!
//! ## Commands
//! - Completing a task
//! - Redeeming a reward
//!
//! ## Queries
//! - Recommend tasks by age and AQI, or for a user's city
//! - Rewards for a user's age group
//! - Badge catalogue and progress

mod complete_task;
mod get_badges;
mod get_rewards;
mod recommend_for_user;
mod recommend_tasks;
mod redeem_reward;

// Commands
pub use complete_task::{CompleteTaskCommand, CompleteTaskHandler, CompleteTaskResult};
pub use redeem_reward::{RedeemRewardCommand, RedeemRewardHandler, RedeemRewardResult};

// Queries
pub use get_badges::{GetBadgesHandler, GetBadgesQuery, GetBadgesResult};
pub use get_rewards::{GetRewardsHandler, GetRewardsQuery, GetRewardsResult};
pub use recommend_for_user::{
    RecommendForUserHandler, RecommendForUserQuery, RecommendForUserResult,
};
pub use recommend_tasks::{RecommendTasksHandler, RecommendTasksQuery};
