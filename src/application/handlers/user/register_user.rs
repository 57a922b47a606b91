//! RegisterUserHandler - Command handler for signing up a new user.

use std::sync::Arc;

use crate::application::PopulationTransaction;
use crate::domain::player::{ProgressionError, User};
use crate::domain::progression::{ProgressionEngine, Registration};

/// Command to register a user.
///
/// Credentials are not part of this command; identity proofing belongs to
/// the external identity provider.
#[derive(Debug, Clone, Default)]
pub struct RegisterUserCommand {
    pub email: Option<String>,
    pub username: Option<String>,
    pub age: Option<i64>,
}

/// Result of successful registration.
#[derive(Debug, Clone)]
pub struct RegisterUserResult {
    pub user: User,
}

/// Handler for registering users.
pub struct RegisterUserHandler {
    transaction: PopulationTransaction,
    engine: Arc<ProgressionEngine>,
}

impl RegisterUserHandler {
    pub fn new(transaction: PopulationTransaction, engine: Arc<ProgressionEngine>) -> Self {
        Self {
            transaction,
            engine,
        }
    }

    pub async fn handle(
        &self,
        cmd: RegisterUserCommand,
    ) -> Result<RegisterUserResult, ProgressionError> {
        let registration = Registration {
            email: cmd.email,
            username: cmd.username,
            age: cmd.age,
        };

        let user = self
            .transaction
            .mutate(|users| {
                let user = self.engine.register(users, registration)?;
                users.push(user.clone());
                Ok(user)
            })
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Registration rejected");
                e
            })?;

        tracing::info!(email = %user.email(), age_group = %user.age_group(), "User registered");
        Ok(RegisterUserResult { user })
    }
}
