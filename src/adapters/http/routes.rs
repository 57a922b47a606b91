//! Axum router configuration for the Bloom Points API.
//!
//! This module defines the route structure and wires each route to its handler.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    complete_task, get_aqi, get_aqi_history, get_badges, get_cities, get_leaderboard,
    get_recommended_tasks, get_rewards, get_tasks, get_user, health, redeem_reward, select_city,
    signup, update_user, AppState,
};

/// Create the API router.
///
/// # Routes
///
/// ## Users
/// - `POST /signup` - Register a user
/// - `GET /user?email=` - Fetch a user
/// - `POST /select-city` - Choose the user's city
/// - `POST /update-user` - Replace profile fields
///
/// ## Air quality
/// - `GET /cities` - Cities with known readings
/// - `GET /aqi?city=` - Current AQI
/// - `GET /aqi-history?city=` - Last five days of AQI
///
/// ## Progression
/// - `GET /tasks?age=&aqi=` - Tasks for an age and reading
/// - `GET /tasks/recommended?email=` - Tasks for the user's age and city
/// - `POST /complete-task` - Credit a completed task
/// - `GET /rewards?email=` - Rewards for the user's age group
/// - `POST /redeem-reward` - Spend points on a reward
/// - `GET /badges` - Badge catalogue and progress
/// - `GET /leaderboard` - Community totals
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Users
        .route("/signup", post(signup))
        .route("/user", get(get_user))
        .route("/select-city", post(select_city))
        .route("/update-user", post(update_user))
        // Air quality
        .route("/cities", get(get_cities))
        .route("/aqi", get(get_aqi))
        .route("/aqi-history", get(get_aqi_history))
        // Progression
        .route("/tasks", get(get_tasks))
        .route("/tasks/recommended", get(get_recommended_tasks))
        .route("/complete-task", post(complete_task))
        .route("/rewards", get(get_rewards))
        .route("/redeem-reward", post(redeem_reward))
        .route("/badges", get(get_badges))
        .route("/leaderboard", get(get_leaderboard))
}

/// Create the complete application router with state applied.
///
/// Mounts the API under `/api` and the liveness check at `/health`.
/// Cross-cutting layers (tracing, CORS, timeouts) are added by the caller.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", api_routes())
        .with_state(state)
}
