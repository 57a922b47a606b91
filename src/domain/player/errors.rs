//! Progression error types.
//!
//! The typed failures every progression and leaderboard operation reports.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | InvalidInput | 400 |
//! | NotFound | 404 |
//! | Conflict | 409 |
//! | InsufficientPoints | 400 |
//! | StoreUnavailable | 503 |

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Progression-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressionError {
    /// A required field is missing or malformed.
    InvalidInput { field: String, reason: String },

    /// An unknown user identity or reward title.
    NotFound { entity: &'static str, key: String },

    /// The email is already registered to a different user.
    Conflict(String),

    /// The balance does not cover the reward.
    InsufficientPoints {
        reward: String,
        cost: u64,
        available: u64,
    },

    /// A collaborator (user store, air quality source) could not be reached.
    StoreUnavailable(String),
}

impl ProgressionError {
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ProgressionError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        Self::invalid_input(field, "is required")
    }

    pub fn user_not_found(email: impl Into<String>) -> Self {
        ProgressionError::NotFound {
            entity: "User",
            key: email.into(),
        }
    }

    pub fn reward_not_found(title: impl Into<String>) -> Self {
        ProgressionError::NotFound {
            entity: "Reward",
            key: title.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ProgressionError::Conflict(message.into())
    }

    pub fn insufficient_points(reward: impl Into<String>, cost: u64, available: u64) -> Self {
        ProgressionError::InsufficientPoints {
            reward: reward.into(),
            cost,
            available,
        }
    }

    pub fn store_unavailable(message: impl Into<String>) -> Self {
        ProgressionError::StoreUnavailable(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ProgressionError::InvalidInput { .. } => ErrorCode::ValidationFailed,
            ProgressionError::NotFound { entity: "Reward", .. } => ErrorCode::RewardNotFound,
            ProgressionError::NotFound { .. } => ErrorCode::UserNotFound,
            ProgressionError::Conflict(_) => ErrorCode::Conflict,
            ProgressionError::InsufficientPoints { .. } => ErrorCode::InsufficientPoints,
            ProgressionError::StoreUnavailable(_) => ErrorCode::StoreUnavailable,
        }
    }

    /// Returns a user-facing reason string.
    pub fn message(&self) -> String {
        match self {
            ProgressionError::InvalidInput { field, reason } => {
                format!("Invalid '{}': {}", field, reason)
            }
            ProgressionError::NotFound { entity, key } => format!("{} not found: {}", entity, key),
            ProgressionError::Conflict(msg) => msg.clone(),
            ProgressionError::InsufficientPoints {
                reward,
                cost,
                available,
            } => format!(
                "Not enough Bloom Points for '{}': costs {}, balance {}",
                reward, cost, available
            ),
            ProgressionError::StoreUnavailable(msg) => format!("Store unavailable: {}", msg),
        }
    }

    /// Only collaborator failures are worth retrying; everything else is deterministic.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ProgressionError::StoreUnavailable(_))
    }
}

impl std::fmt::Display for ProgressionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ProgressionError {}

impl From<ValidationError> for ProgressionError {
    fn from(err: ValidationError) -> Self {
        let field = err.field().to_string();
        ProgressionError::InvalidInput {
            field,
            reason: err.to_string(),
        }
    }
}

impl From<ProgressionError> for DomainError {
    fn from(err: ProgressionError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}

impl From<DomainError> for ProgressionError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => ProgressionError::InvalidInput {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                reason: err.message,
            },
            ErrorCode::UserNotFound => ProgressionError::user_not_found(err.message),
            ErrorCode::RewardNotFound => ProgressionError::reward_not_found(err.message),
            ErrorCode::Conflict => ProgressionError::Conflict(err.message),
            _ => ProgressionError::StoreUnavailable(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_kinds() {
        assert_eq!(
            ProgressionError::missing("email").code(),
            ErrorCode::ValidationFailed
        );
        assert_eq!(
            ProgressionError::user_not_found("a@b.c").code(),
            ErrorCode::UserNotFound
        );
        assert_eq!(
            ProgressionError::reward_not_found("Solar Charger").code(),
            ErrorCode::RewardNotFound
        );
        assert_eq!(ProgressionError::conflict("taken").code(), ErrorCode::Conflict);
        assert_eq!(
            ProgressionError::insufficient_points("Solar Charger", 200, 10).code(),
            ErrorCode::InsufficientPoints
        );
        assert_eq!(
            ProgressionError::store_unavailable("disk").code(),
            ErrorCode::StoreUnavailable
        );
    }

    #[test]
    fn insufficient_points_message_includes_amounts() {
        let msg = ProgressionError::insufficient_points("Solar Charger", 200, 10).message();
        assert!(msg.contains("Solar Charger"));
        assert!(msg.contains("200"));
        assert!(msg.contains("10"));
    }

    #[test]
    fn only_store_failures_are_retryable() {
        assert!(ProgressionError::store_unavailable("timeout").is_retryable());
        assert!(!ProgressionError::conflict("taken").is_retryable());
        assert!(!ProgressionError::missing("age").is_retryable());
    }

    #[test]
    fn validation_error_becomes_invalid_input() {
        let err: ProgressionError = ValidationError::empty_field("email").into();
        assert!(matches!(
            err,
            ProgressionError::InvalidInput { ref field, .. } if field == "email"
        ));
    }

    #[test]
    fn converts_to_domain_error() {
        let err = ProgressionError::conflict("Email already registered");
        let domain_err: DomainError = err.clone().into();
        assert_eq!(domain_err.code, err.code());
    }

    #[test]
    fn converts_from_domain_error() {
        let domain_err = DomainError::new(ErrorCode::StoreUnavailable, "disk full");
        let err: ProgressionError = domain_err.into();
        assert!(err.is_retryable());
    }

    #[test]
    fn display_matches_message() {
        let err = ProgressionError::reward_not_found("Mystery Box");
        assert_eq!(format!("{}", err), err.message());
    }
}
