//! HTTP handlers for the Bloom Points API.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Json, Query, Request, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{
    AirQualityQuery, CompleteTaskCommand, CompleteTaskHandler, GetAirQualityHandler,
    GetBadgesHandler, GetBadgesQuery, GetLeaderboardHandler, GetRewardsHandler, GetRewardsQuery,
    GetUserHandler, GetUserQuery, RecommendForUserHandler, RecommendForUserQuery,
    RecommendTasksHandler, RecommendTasksQuery, RedeemRewardCommand, RedeemRewardHandler,
    RegisterUserCommand, RegisterUserHandler, SelectCityCommand, SelectCityHandler,
    UpdateProfileCommand, UpdateProfileHandler,
};
use crate::application::PopulationTransaction;
use crate::domain::catalog::Catalog;
use crate::domain::player::ProgressionError;
use crate::domain::progression::ProgressionEngine;
use crate::ports::{AirQualityProvider, UserStore};

use super::dto::{
    parse_number, AqiData, AqiEnvelope, AqiHistoryData, BadgesResponse, CityParams,
    CompleteTaskRequest, CompleteTaskResponse, EmailParams, ErrorResponse, HealthResponse,
    NumberOrText, RedeemRewardRequest, RedeemRewardResponse, RewardsResponse, SelectCityRequest,
    SignupRequest, TaskParams, TasksResponse, UpdateUserRequest, UserMessageResponse,
    UserResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// Cloned for each request; every dependency is behind an `Arc`, and the
/// population transaction shares one mutation lock across clones.
#[derive(Clone)]
pub struct AppState {
    pub transaction: PopulationTransaction,
    pub engine: Arc<ProgressionEngine>,
    pub air_quality: Arc<dyn AirQualityProvider>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn UserStore>,
        catalog: Arc<Catalog>,
        air_quality: Arc<dyn AirQualityProvider>,
    ) -> Self {
        Self {
            transaction: PopulationTransaction::new(store),
            engine: Arc::new(ProgressionEngine::new(catalog)),
            air_quality,
        }
    }

    /// Create handlers on demand from the shared state.
    pub fn register_user_handler(&self) -> RegisterUserHandler {
        RegisterUserHandler::new(self.transaction.clone(), self.engine.clone())
    }

    pub fn get_user_handler(&self) -> GetUserHandler {
        GetUserHandler::new(self.transaction.clone())
    }

    pub fn select_city_handler(&self) -> SelectCityHandler {
        SelectCityHandler::new(self.transaction.clone(), self.engine.clone())
    }

    pub fn update_profile_handler(&self) -> UpdateProfileHandler {
        UpdateProfileHandler::new(self.transaction.clone(), self.engine.clone())
    }

    pub fn recommend_tasks_handler(&self) -> RecommendTasksHandler {
        RecommendTasksHandler::new(self.engine.clone())
    }

    pub fn recommend_for_user_handler(&self) -> RecommendForUserHandler {
        RecommendForUserHandler::new(
            self.transaction.clone(),
            self.air_quality.clone(),
            self.engine.clone(),
        )
    }

    pub fn complete_task_handler(&self) -> CompleteTaskHandler {
        CompleteTaskHandler::new(self.transaction.clone(), self.engine.clone())
    }

    pub fn redeem_reward_handler(&self) -> RedeemRewardHandler {
        RedeemRewardHandler::new(self.transaction.clone(), self.engine.clone())
    }

    pub fn rewards_handler(&self) -> GetRewardsHandler {
        GetRewardsHandler::new(self.transaction.clone(), self.engine.clone())
    }

    pub fn badges_handler(&self) -> GetBadgesHandler {
        GetBadgesHandler::new(self.transaction.clone(), self.engine.clone())
    }

    pub fn leaderboard_handler(&self) -> GetLeaderboardHandler {
        GetLeaderboardHandler::new(self.transaction.clone())
    }

    pub fn air_quality_handler(&self) -> GetAirQualityHandler {
        GetAirQualityHandler::new(self.air_quality.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// User Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/signup - Register a user
pub async fn signup(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SignupRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = RegisterUserCommand {
        email: request.email,
        username: request.username,
        age: NumberOrText::resolve("age", request.age)?,
    };

    let result = state.register_user_handler().handle(cmd).await?;

    Ok((
        StatusCode::CREATED,
        Json(UserMessageResponse::new("Signup successful", &result.user)),
    ))
}

/// GET /api/user?email= - Fetch a user
pub async fn get_user(
    State(state): State<AppState>,
    Query(params): Query<EmailParams>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .get_user_handler()
        .handle(GetUserQuery {
            email: params.email,
        })
        .await?;

    Ok(Json(UserResponse::from(&user)))
}

/// POST /api/select-city - Choose the user's city
pub async fn select_city(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SelectCityRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = SelectCityCommand {
        email: request.email,
        city: request.city,
    };

    let user = state.select_city_handler().handle(cmd).await?;

    Ok(Json(UserMessageResponse::new("City selected", &user)))
}

/// POST /api/update-user - Replace profile fields
pub async fn update_user(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<UpdateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = UpdateProfileCommand {
        email: request.email,
        username: request.username,
        new_email: request.new_email,
        age: NumberOrText::resolve("age", request.age)?,
        city: request.city,
        profile_image: request.profile_image,
    };

    let user = state.update_profile_handler().handle(cmd).await?;

    Ok(Json(UserMessageResponse::new("User updated successfully", &user)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Air Quality Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/cities - Cities with known readings
pub async fn get_cities(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let cities = state.air_quality_handler().cities().await?;
    Ok(Json(cities))
}

/// GET /api/aqi?city= - Current AQI for a city
pub async fn get_aqi(
    State(state): State<AppState>,
    Query(params): Query<CityParams>,
) -> Result<impl IntoResponse, ApiError> {
    let reading = state
        .air_quality_handler()
        .current(AirQualityQuery { city: params.city })
        .await?;

    Ok(Json(AqiEnvelope::ok(AqiData::from(reading))))
}

/// GET /api/aqi-history?city= - Recent daily AQI for a city
pub async fn get_aqi_history(
    State(state): State<AppState>,
    Query(params): Query<CityParams>,
) -> Result<impl IntoResponse, ApiError> {
    let history = state
        .air_quality_handler()
        .history(AirQualityQuery { city: params.city })
        .await?;

    Ok(Json(AqiEnvelope::ok(AqiHistoryData::from(history))))
}

// ════════════════════════════════════════════════════════════════════════════════
// Progression Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/tasks?age=&aqi= - Tasks for an age and AQI reading
pub async fn get_tasks(
    State(state): State<AppState>,
    Query(params): Query<TaskParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = RecommendTasksQuery {
        age: parse_number("age", params.age.as_deref())?,
        aqi: parse_number("aqi", params.aqi.as_deref())?,
    };

    let recommendation = state.recommend_tasks_handler().handle(query)?;

    Ok(Json(TasksResponse::from(recommendation)))
}

/// GET /api/tasks/recommended?email= - Tasks for the user's age and city
pub async fn get_recommended_tasks(
    State(state): State<AppState>,
    Query(params): Query<EmailParams>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .recommend_for_user_handler()
        .handle(RecommendForUserQuery {
            email: params.email,
        })
        .await?;

    Ok(Json(TasksResponse::from(result)))
}

/// POST /api/complete-task - Credit a completed task
pub async fn complete_task(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CompleteTaskRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = CompleteTaskCommand {
        email: request.email,
        task: request.task,
        points: NumberOrText::resolve("points", request.points)?,
    };

    let result = state.complete_task_handler().handle(cmd).await?;

    Ok(Json(CompleteTaskResponse::from(result)))
}

/// GET /api/rewards?email= - Rewards for the user's age group
pub async fn get_rewards(
    State(state): State<AppState>,
    Query(params): Query<EmailParams>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .rewards_handler()
        .handle(GetRewardsQuery {
            email: params.email,
        })
        .await?;

    Ok(Json(RewardsResponse::from(result)))
}

/// POST /api/redeem-reward - Spend points on a reward
pub async fn redeem_reward(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RedeemRewardRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = RedeemRewardCommand {
        email: request.email,
        reward: request.reward,
    };

    let result = state.redeem_reward_handler().handle(cmd).await?;

    Ok(Json(RedeemRewardResponse::from(result)))
}

/// GET /api/badges[?email=] - Badge catalogue, with progress when a user is named
pub async fn get_badges(
    State(state): State<AppState>,
    Query(params): Query<EmailParams>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .badges_handler()
        .handle(GetBadgesQuery {
            email: params.email,
        })
        .await?;

    Ok(Json(BadgesResponse::from(result)))
}

/// GET /api/leaderboard - Community totals, highest first
pub async fn get_leaderboard(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let board = state.leaderboard_handler().handle().await?;
    Ok(Json(board))
}

/// GET /health - Liveness check
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// JSON body extractor whose rejections use the API error body.
///
/// A body that does not deserialize is reported as `InvalidInput` on
/// `body` instead of axum's plain-text 422.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!(error = %rejection.body_text(), "Rejected request body");
        Self(ProgressionError::invalid_input("body", rejection.body_text()))
    }
}

/// API error type that converts progression errors to HTTP responses.
#[derive(Debug)]
pub struct ApiError(ProgressionError);

impl From<ProgressionError> for ApiError {
    fn from(err: ProgressionError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ProgressionError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ProgressionError::NotFound { .. } => StatusCode::NOT_FOUND,
            ProgressionError::Conflict(_) => StatusCode::CONFLICT,
            ProgressionError::InsufficientPoints { .. } => StatusCode::BAD_REQUEST,
            ProgressionError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let body = match &self.0 {
            ProgressionError::InsufficientPoints {
                cost, available, ..
            } => ErrorResponse::with_details(
                self.0.code().to_string(),
                self.0.message(),
                serde_json::json!({ "cost": cost, "available": available }),
            ),
            ProgressionError::InvalidInput { field, .. } => ErrorResponse::with_details(
                self.0.code().to_string(),
                self.0.message(),
                serde_json::json!({ "field": field }),
            ),
            _ => ErrorResponse::new(self.0.code().to_string(), self.0.message()),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::air_quality::StaticAirQualityProvider;
    use crate::adapters::storage::InMemoryUserStore;

    fn test_state() -> AppState {
        AppState::new(
            Arc::new(InMemoryUserStore::new()),
            Arc::new(Catalog::builtin()),
            Arc::new(StaticAirQualityProvider::new()),
        )
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Error Mapping Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn error_kinds_map_to_status_codes() {
        let cases = [
            (ProgressionError::missing("email"), StatusCode::BAD_REQUEST),
            (ProgressionError::user_not_found("a@b.org"), StatusCode::NOT_FOUND),
            (ProgressionError::reward_not_found("Box"), StatusCode::NOT_FOUND),
            (ProgressionError::conflict("taken"), StatusCode::CONFLICT),
            (
                ProgressionError::insufficient_points("Box", 50, 10),
                StatusCode::BAD_REQUEST,
            ),
            (
                ProgressionError::store_unavailable("disk"),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status(), expected);
        }
    }

    #[test]
    fn into_response_uses_status() {
        let response = ApiError::from(ProgressionError::conflict("taken")).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn parse_number_handles_blank_and_garbage() {
        assert_eq!(parse_number("age", None).unwrap(), None);
        assert_eq!(parse_number("age", Some(" ")).unwrap(), None);
        assert_eq!(parse_number("age", Some("12")).unwrap(), Some(12));
        assert!(parse_number("age", Some("twelve")).is_err());
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Handler Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn signup_then_get_user() {
        let state = test_state();
        let request = SignupRequest {
            email: Some("kid@example.org".to_string()),
            username: Some("kid".to_string()),
            age: Some(8.into()),
        };

        let result = signup(State(state.clone()), ApiJson(request)).await;
        assert!(result.is_ok());

        let result = get_user(
            State(state),
            Query(EmailParams {
                email: Some("kid@example.org".to_string()),
            }),
        )
        .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn get_tasks_rejects_non_numeric_age() {
        let result = get_tasks(
            State(test_state()),
            Query(TaskParams {
                age: Some("ten".to_string()),
                aqi: Some("40".to_string()),
            }),
        )
        .await;
        let err = result.err().unwrap();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn signup_rejects_fractional_age_as_invalid_input() {
        let request = SignupRequest {
            email: Some("kid@example.org".to_string()),
            username: Some("kid".to_string()),
            age: Some(NumberOrText::Float(12.5)),
        };

        let err = signup(State(test_state()), ApiJson(request)).await.err().unwrap();

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(matches!(err.0, ProgressionError::InvalidInput { ref field, .. } if field == "age"));
    }

    #[tokio::test]
    async fn get_cities_lists_table() {
        let result = get_cities(State(test_state())).await;
        assert!(result.is_ok());
    }
}
