//! Plain-data inputs to the progression engine.
//!
//! Fields are optional because they arrive straight from the transport layer;
//! presence is checked by the engine so every caller reports the same
//! `InvalidInput` for the same gap.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{UserEmail, ValidationError};
use crate::domain::player::ProgressionError;

/// Data for creating a new user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub email: Option<String>,
    pub username: Option<String>,
    pub age: Option<i64>,
}

/// Replacement profile fields for an existing user.
///
/// `city` and `profile_image` are `None` when the caller left them out;
/// `Some("")` is an explicit empty value and is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub username: Option<String>,
    pub new_email: Option<String>,
    pub age: Option<i64>,
    pub city: Option<String>,
    pub profile_image: Option<String>,
}

/// Validated identity fields shared by registration and profile update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Identity {
    pub email: UserEmail,
    pub username: String,
    pub age: u32,
}

pub(crate) fn require_text(field: &str, value: Option<&str>) -> Result<String, ProgressionError> {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(ProgressionError::missing(field)),
    }
}

pub(crate) fn require_email(field: &str, value: Option<&str>) -> Result<UserEmail, ProgressionError> {
    let raw = require_text(field, value)?;
    UserEmail::new(raw).map_err(|e| ProgressionError::invalid_input(field, e.to_string()))
}

pub(crate) fn require_age(value: Option<i64>) -> Result<u32, ProgressionError> {
    let age = value.ok_or_else(|| ProgressionError::missing("age"))?;
    u32::try_from(age)
        .map_err(|_| ValidationError::out_of_range("age", 0, i64::from(u32::MAX), age).into())
}

impl Registration {
    pub(crate) fn validate(&self) -> Result<Identity, ProgressionError> {
        Ok(Identity {
            email: require_email("email", self.email.as_deref())?,
            username: require_text("username", self.username.as_deref())?,
            age: require_age(self.age)?,
        })
    }
}

impl ProfileUpdate {
    pub(crate) fn validate(&self) -> Result<Identity, ProgressionError> {
        Ok(Identity {
            email: require_email("new_email", self.new_email.as_deref())?,
            username: require_text("username", self.username.as_deref())?,
            age: require_age(self.age)?,
        })
    }
}
