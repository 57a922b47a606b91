//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod air_quality;
pub mod leaderboard;
pub mod progression;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;

pub use air_quality::{AirQualityQuery, GetAirQualityHandler};
pub use leaderboard::GetLeaderboardHandler;
pub use progression::{
    CompleteTaskCommand, CompleteTaskHandler, CompleteTaskResult, GetBadgesHandler,
    GetBadgesQuery, GetBadgesResult, GetRewardsHandler, GetRewardsQuery, GetRewardsResult,
    RecommendForUserHandler, RecommendForUserQuery, RecommendForUserResult,
    RecommendTasksHandler, RecommendTasksQuery, RedeemRewardCommand, RedeemRewardHandler,
    RedeemRewardResult,
};
pub use user::{
    GetUserHandler, GetUserQuery, RegisterUserCommand, RegisterUserHandler, RegisterUserResult,
    SelectCityCommand, SelectCityHandler, UpdateProfileCommand, UpdateProfileHandler,
};
