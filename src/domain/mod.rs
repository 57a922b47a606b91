//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (identity, timestamps, errors)
//! - `catalog` - Age groups, AQI brackets and the task/reward/badge tables
//! - `player` - The User aggregate and progression errors
//! - `progression` - Pure rules for tasks, points, badges and rewards
//! - `leaderboard` - Community point totals
//! - `air_quality` - City AQI readings and histories

pub mod air_quality;
pub mod catalog;
pub mod foundation;
pub mod leaderboard;
pub mod player;
pub mod progression;
