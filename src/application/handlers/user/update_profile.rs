//! UpdateProfileHandler - Command handler for editing a user's profile.

use std::sync::Arc;

use crate::application::PopulationTransaction;
use crate::domain::player::{ProgressionError, User};
use crate::domain::progression::{require_email, ProfileUpdate, ProgressionEngine};

/// Command to replace a user's profile fields.
///
/// `city` and `profile_image` left as `None` keep their current values.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileCommand {
    pub email: Option<String>,
    pub username: Option<String>,
    pub new_email: Option<String>,
    pub age: Option<i64>,
    pub city: Option<String>,
    pub profile_image: Option<String>,
}

/// Handler for profile updates.
pub struct UpdateProfileHandler {
    transaction: PopulationTransaction,
    engine: Arc<ProgressionEngine>,
}

impl UpdateProfileHandler {
    pub fn new(transaction: PopulationTransaction, engine: Arc<ProgressionEngine>) -> Self {
        Self {
            transaction,
            engine,
        }
    }

    pub async fn handle(&self, cmd: UpdateProfileCommand) -> Result<User, ProgressionError> {
        let current = require_email("email", cmd.email.as_deref())?;
        let update = ProfileUpdate {
            username: cmd.username,
            new_email: cmd.new_email,
            age: cmd.age,
            city: cmd.city,
            profile_image: cmd.profile_image,
        };

        let user = self
            .transaction
            .mutate(|users| self.engine.update_profile(users, &current, update))
            .await
            .map_err(|e| {
                tracing::warn!(email = %current, error = %e, "Profile update rejected");
                e
            })?;

        tracing::info!(previous = %current, email = %user.email(), "Profile updated");
        Ok(user)
    }
}
