//! GetUserHandler - Query handler for one user's record.

use crate::application::PopulationTransaction;
use crate::domain::player::{population, ProgressionError, User};
use crate::domain::progression::require_email;

/// Query to fetch a user by email.
#[derive(Debug, Clone, Default)]
pub struct GetUserQuery {
    pub email: Option<String>,
}

/// Handler for looking up users.
pub struct GetUserHandler {
    transaction: PopulationTransaction,
}

impl GetUserHandler {
    pub fn new(transaction: PopulationTransaction) -> Self {
        Self { transaction }
    }

    pub async fn handle(&self, query: GetUserQuery) -> Result<User, ProgressionError> {
        let email = require_email("email", query.email.as_deref())?;
        let users = self.transaction.read().await?;
        let user = population::find(&users, &email)?.clone();

        tracing::debug!(email = %email, "Fetched user");
        Ok(user)
    }
}
