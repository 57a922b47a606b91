//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Identity of a user: the email address they registered with.
///
/// Stored trimmed. Comparison is exact, matching how the user store keys
/// records. New input must look like `local@domain`; deserialized records
/// only need to be non-empty, so older records without a valid address
/// still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserEmail(String);

impl UserEmail {
    /// Creates a new UserEmail, returning error if empty or missing an `@`.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();
        let trimmed = email.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        match trimmed.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
                Ok(Self(trimmed.to_string()))
            }
            _ => Err(ValidationError::invalid_format("email", "expected local@domain")),
        }
    }

    /// Accepts any non-empty address, as written by earlier versions.
    fn stored(email: String) -> Result<Self, ValidationError> {
        let trimmed = email.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserEmail {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for UserEmail {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::stored(value)
    }
}

impl From<UserEmail> for String {
    fn from(email: UserEmail) -> Self {
        email.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_email_accepts_plain_address() {
        let email = UserEmail::new("asha@example.org").unwrap();
        assert_eq!(email.as_str(), "asha@example.org");
    }

    #[test]
    fn user_email_trims_whitespace() {
        let email = UserEmail::new("  asha@example.org ").unwrap();
        assert_eq!(email.to_string(), "asha@example.org");
    }

    #[test]
    fn user_email_rejects_empty() {
        assert!(matches!(
            UserEmail::new("   "),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn user_email_rejects_missing_at() {
        assert!(matches!(
            UserEmail::new("asha.example.org"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(UserEmail::new("@example.org").is_err());
        assert!(UserEmail::new("asha@").is_err());
    }

    #[test]
    fn user_email_serializes_as_plain_string() {
        let email = UserEmail::new("asha@example.org").unwrap();
        assert_eq!(serde_json::to_string(&email).unwrap(), "\"asha@example.org\"");
    }

    #[test]
    fn user_email_deserialization_accepts_stored_non_address() {
        let parsed: UserEmail = serde_json::from_str("\" legacy-user \"").unwrap();
        assert_eq!(parsed.as_str(), "legacy-user");
    }

    #[test]
    fn user_email_deserialization_rejects_blank() {
        let parsed: Result<UserEmail, _> = serde_json::from_str("\"  \"");
        assert!(parsed.is_err());
    }
}
