//! HTTP DTOs (Data Transfer Objects) for the Bloom Points API.
//!
//! These types define the JSON request/response structure of the API.
//! They serve as the boundary between HTTP and the application layer.

use serde::{Deserialize, Serialize};

use crate::application::handlers::{
    CompleteTaskResult, GetBadgesResult, GetRewardsResult, RecommendForUserResult,
    RedeemRewardResult,
};
use crate::domain::air_quality::{AqiHistory, AqiReading};
use crate::domain::catalog::{AgeGroup, AqiBracket, Badge, Reward, Task};
use crate::domain::foundation::Timestamp;
use crate::domain::player::{BadgeProgress, ProgressionError, User};
use crate::domain::progression::TaskRecommendation;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A whole number sent either as a JSON number or as text.
///
/// Form-backed clients post `"age": "12"`; both shapes reach the handlers,
/// and anything that is not a whole number becomes `InvalidInput`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Int(i64),
    Float(f64),
    Text(String),
}

impl NumberOrText {
    /// Resolves an optional body field to a whole number.
    ///
    /// Blank text counts as absent.
    pub fn resolve(field: &str, value: Option<Self>) -> Result<Option<i64>, ProgressionError> {
        match value {
            None => Ok(None),
            Some(NumberOrText::Int(n)) => Ok(Some(n)),
            Some(NumberOrText::Float(n)) => Err(ProgressionError::invalid_input(
                field,
                format!("must be a whole number, got {}", n),
            )),
            Some(NumberOrText::Text(text)) => parse_number(field, Some(&text)),
        }
    }
}

impl From<i64> for NumberOrText {
    fn from(n: i64) -> Self {
        NumberOrText::Int(n)
    }
}

/// Parses an optional text number; blank means absent.
pub fn parse_number(field: &str, raw: Option<&str>) -> Result<Option<i64>, ProgressionError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(text) => text
            .parse::<i64>()
            .map(Some)
            .map_err(|_| ProgressionError::invalid_input(field, format!("not a number: {}", text))),
    }
}

/// Request to register a user.
///
/// A `password` field sent by older clients is accepted and ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub age: Option<NumberOrText>,
}

/// Request to choose a city.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectCityRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

/// Request to update profile fields.
///
/// An absent `city` or `profile_image` leaves the stored value alone; an
/// explicit string, even empty, replaces it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub new_email: Option<String>,
    #[serde(default)]
    pub age: Option<NumberOrText>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// Request to record a completed task.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompleteTaskRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub task: Option<String>,
    #[serde(default)]
    pub points: Option<NumberOrText>,
}

/// Request to redeem a reward by title.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RedeemRewardRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub reward: Option<String>,
}

/// `?email=` query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmailParams {
    pub email: Option<String>,
}

/// `?city=` query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CityParams {
    pub city: Option<String>,
}

/// `?age=&aqi=` query string. Kept as text so bad numbers get a JSON error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskParams {
    pub age: Option<String>,
    pub aqi: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A user's public record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub email: String,
    pub username: String,
    pub age: u32,
    pub age_group: AgeGroup,
    pub city: Option<String>,
    pub profile_image: Option<String>,
    pub bloom_points: u64,
    pub tasks_completed: u64,
    pub badges: Vec<String>,
    pub rewards: Vec<String>,
    pub community: String,
    pub joined_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            email: user.email().to_string(),
            username: user.username().to_string(),
            age: user.age(),
            age_group: user.age_group(),
            city: user.city().map(str::to_string),
            profile_image: user.profile_image().map(str::to_string),
            bloom_points: user.points(),
            tasks_completed: user.tasks_completed(),
            badges: user.badges().iter().cloned().collect(),
            rewards: user.rewards().to_vec(),
            community: user.community().to_string(),
            joined_at: *user.joined_at(),
            updated_at: *user.updated_at(),
        }
    }
}

/// Confirmation message with the affected user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserMessageResponse {
    pub message: String,
    pub user: UserResponse,
}

impl UserMessageResponse {
    pub fn new(message: impl Into<String>, user: &User) -> Self {
        Self {
            message: message.into(),
            user: UserResponse::from(user),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteTaskResponse {
    pub message: String,
    pub user: UserResponse,
    pub new_badges: Vec<String>,
}

impl From<CompleteTaskResult> for CompleteTaskResponse {
    fn from(result: CompleteTaskResult) -> Self {
        Self {
            message: "Task completed".to_string(),
            user: UserResponse::from(&result.user),
            new_badges: result.newly_earned,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedeemRewardResponse {
    pub message: String,
    pub user: UserResponse,
    pub reward: Reward,
}

impl From<RedeemRewardResult> for RedeemRewardResponse {
    fn from(result: RedeemRewardResult) -> Self {
        Self {
            message: "Reward redeemed".to_string(),
            user: UserResponse::from(&result.user),
            reward: result.reward,
        }
    }
}

/// Tasks for an age group and AQI bracket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TasksResponse {
    pub age_group: AgeGroup,
    pub aqi_range: AqiBracket,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aqi: Option<u32>,
    pub tasks: Vec<Task>,
}

impl From<TaskRecommendation> for TasksResponse {
    fn from(rec: TaskRecommendation) -> Self {
        Self {
            age_group: rec.age_group,
            aqi_range: rec.bracket,
            category: rec.category.to_string(),
            city: None,
            aqi: None,
            tasks: rec.tasks,
        }
    }
}

impl From<RecommendForUserResult> for TasksResponse {
    fn from(result: RecommendForUserResult) -> Self {
        Self {
            city: Some(result.reading.city),
            aqi: Some(result.reading.aqi),
            ..Self::from(result.recommendation)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardsResponse {
    pub age_group: AgeGroup,
    pub bloom_points: u64,
    pub rewards: Vec<Reward>,
}

impl From<GetRewardsResult> for RewardsResponse {
    fn from(result: GetRewardsResult) -> Self {
        Self {
            age_group: result.age_group,
            bloom_points: result.balance,
            rewards: result.rewards,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressResponse {
    pub bloom_points: u64,
    pub next_badge: Option<Badge>,
    pub previous_threshold: u64,
    pub points_to_next: u64,
    pub percent: u8,
}

impl From<BadgeProgress> for ProgressResponse {
    fn from(progress: BadgeProgress) -> Self {
        Self {
            bloom_points: progress.points,
            points_to_next: progress.points_to_next(),
            percent: progress.percent(),
            previous_threshold: progress.previous_threshold,
            next_badge: progress.next_badge,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgesResponse {
    pub badges: Vec<Badge>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub earned: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<ProgressResponse>,
}

impl From<GetBadgesResult> for BadgesResponse {
    fn from(result: GetBadgesResult) -> Self {
        Self {
            badges: result.badges,
            earned: result.earned,
            progress: result.progress.map(ProgressResponse::from),
        }
    }
}

/// `{status: "ok", data: ...}` envelope used by the AQI endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AqiEnvelope<T> {
    pub status: String,
    pub data: T,
}

impl<T> AqiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: "ok".to_string(),
            data,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AqiData {
    pub city: String,
    pub aqi: u32,
    pub aqi_range: AqiBracket,
    pub category: String,
}

impl From<AqiReading> for AqiData {
    fn from(reading: AqiReading) -> Self {
        Self {
            aqi_range: reading.bracket(),
            category: reading.category().to_string(),
            city: reading.city,
            aqi: reading.aqi,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AqiHistoryData {
    pub city: String,
    pub history: Vec<u32>,
    pub labels: Vec<String>,
}

impl From<AqiHistory> for AqiHistoryData {
    fn from(history: AqiHistory) -> Self {
        Self {
            city: history.city,
            history: history.history,
            labels: history.labels,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Create an error response with details.
    pub fn with_details(
        error_code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserEmail;

    #[test]
    fn numeric_fields_accept_numbers_and_text() {
        let numeric: SignupRequest =
            serde_json::from_str(r#"{"email": "a@b.org", "age": 12}"#).unwrap();
        let text: SignupRequest =
            serde_json::from_str(r#"{"email": "a@b.org", "age": " 12 "}"#).unwrap();

        assert_eq!(NumberOrText::resolve("age", numeric.age).unwrap(), Some(12));
        assert_eq!(NumberOrText::resolve("age", text.age).unwrap(), Some(12));
    }

    #[test]
    fn fractional_and_garbage_numbers_are_invalid_input() {
        let fractional: CompleteTaskRequest =
            serde_json::from_str(r#"{"points": 12.5}"#).unwrap();
        let err = NumberOrText::resolve("points", fractional.points).unwrap_err();
        assert!(matches!(err, ProgressionError::InvalidInput { ref field, .. } if field == "points"));

        let garbage = Some(NumberOrText::Text("twelve".to_string()));
        assert!(NumberOrText::resolve("age", garbage).is_err());
    }

    #[test]
    fn blank_text_number_is_absent() {
        let blank = Some(NumberOrText::Text("  ".to_string()));
        assert_eq!(NumberOrText::resolve("age", blank).unwrap(), None);
        assert_eq!(parse_number("age", None).unwrap(), None);
    }

    #[test]
    fn update_request_distinguishes_absent_from_empty() {
        let absent: UpdateUserRequest =
            serde_json::from_str(r#"{"email": "a@b.org", "username": "a", "new_email": "a@b.org", "age": 9}"#)
                .unwrap();
        assert_eq!(absent.city, None);

        let empty: UpdateUserRequest = serde_json::from_str(
            r#"{"email": "a@b.org", "username": "a", "new_email": "a@b.org", "age": 9, "city": ""}"#,
        )
        .unwrap();
        assert_eq!(empty.city, Some(String::new()));
    }

    #[test]
    fn signup_ignores_password() {
        let req: SignupRequest = serde_json::from_str(
            r#"{"email": "a@b.org", "username": "a", "age": 9, "password": "hunter2"}"#,
        )
        .unwrap();
        assert_eq!(req.age, Some(NumberOrText::Int(9)));
    }

    #[test]
    fn user_response_uses_bloom_points() {
        let user = User::register(UserEmail::new("a@b.org").unwrap(), "a", 9);
        let json = serde_json::to_value(UserResponse::from(&user)).unwrap();
        assert_eq!(json["bloom_points"], 0);
        assert_eq!(json["age_group"], "children");
        assert_eq!(json["community"], "Team Green");
    }

    #[test]
    fn error_response_omits_empty_details() {
        let json = serde_json::to_value(ErrorResponse::new("CONFLICT", "taken")).unwrap();
        assert!(json.get("details").is_none());
    }
}
