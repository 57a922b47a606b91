//! User Store Port - Interface for persisting the user population.
//!
//! The contract is whole-snapshot: `load_all` returns every user and
//! `save_all` overwrites everything previously stored. Callers that mutate
//! must hold the population lock between the two calls (see
//! `application::PopulationTransaction`).

use async_trait::async_trait;

use crate::domain::player::{ProgressionError, User};

/// Errors that can occur during user store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("User store unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to serialize users: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize users: {0}")]
    DeserializationFailed(String),
}

impl From<StoreError> for ProgressionError {
    fn from(err: StoreError) -> Self {
        ProgressionError::store_unavailable(err.to_string())
    }
}

/// Port for loading and saving the complete user population
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Load every stored user in stored order.
    ///
    /// # Errors
    /// Returns `StoreError` if the backing medium cannot be read. A store
    /// that has never been written is an empty population, not an error.
    async fn load_all(&self) -> Result<Vec<User>, StoreError>;

    /// Replace the stored population with `users`.
    ///
    /// # Errors
    /// Returns `StoreError` if the write fails; prior contents are then left intact.
    async fn save_all(&self, users: &[User]) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_surface_as_store_unavailable() {
        let err: ProgressionError = StoreError::Unavailable("disk offline".to_string()).into();
        assert!(err.is_retryable());
        assert!(err.message().contains("disk offline"));
    }
}
