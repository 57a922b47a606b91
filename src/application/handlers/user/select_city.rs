//! SelectCityHandler - Command handler for choosing a user's city.

use std::sync::Arc;

use crate::application::PopulationTransaction;
use crate::domain::player::{population, ProgressionError, User};
use crate::domain::progression::{require_email, ProgressionEngine};

/// Command to set a user's city.
#[derive(Debug, Clone, Default)]
pub struct SelectCityCommand {
    pub email: Option<String>,
    pub city: Option<String>,
}

/// Handler for city selection.
pub struct SelectCityHandler {
    transaction: PopulationTransaction,
    engine: Arc<ProgressionEngine>,
}

impl SelectCityHandler {
    pub fn new(transaction: PopulationTransaction, engine: Arc<ProgressionEngine>) -> Self {
        Self {
            transaction,
            engine,
        }
    }

    pub async fn handle(&self, cmd: SelectCityCommand) -> Result<User, ProgressionError> {
        let email = require_email("email", cmd.email.as_deref())?;

        let user = self
            .transaction
            .mutate(|users| {
                let user = population::find_mut(users, &email)?;
                self.engine.select_city(user, cmd.city.as_deref())?;
                Ok(user.clone())
            })
            .await?;

        tracing::info!(email = %email, city = ?user.city(), "City selected");
        Ok(user)
    }
}
