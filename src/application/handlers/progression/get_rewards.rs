//! GetRewardsHandler - Query handler for the rewards a user can redeem.

use std::sync::Arc;

use crate::application::PopulationTransaction;
use crate::domain::catalog::{AgeGroup, Reward};
use crate::domain::player::{population, ProgressionError};
use crate::domain::progression::{require_email, ProgressionEngine};

/// Query for a user's reward catalogue.
#[derive(Debug, Clone, Default)]
pub struct GetRewardsQuery {
    pub email: Option<String>,
}

/// Rewards for the user's age group, with the user's balance.
#[derive(Debug, Clone)]
pub struct GetRewardsResult {
    pub age_group: AgeGroup,
    pub balance: u64,
    pub rewards: Vec<Reward>,
}

/// Handler for reward catalogue lookups.
pub struct GetRewardsHandler {
    transaction: PopulationTransaction,
    engine: Arc<ProgressionEngine>,
}

impl GetRewardsHandler {
    pub fn new(transaction: PopulationTransaction, engine: Arc<ProgressionEngine>) -> Self {
        Self {
            transaction,
            engine,
        }
    }

    pub async fn handle(&self, query: GetRewardsQuery) -> Result<GetRewardsResult, ProgressionError> {
        let email = require_email("email", query.email.as_deref())?;
        let users = self.transaction.read().await?;
        let user = population::find(&users, &email)?;

        Ok(GetRewardsResult {
            age_group: user.age_group(),
            balance: user.points(),
            rewards: self.engine.rewards_for(user).to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{engine, transaction_with, user};

    #[tokio::test]
    async fn lists_rewards_for_age_group() {
        let (tx, _) = transaction_with(vec![user("teen@example.org", 14, 60)]);

        let result = GetRewardsHandler::new(tx, engine())
            .handle(GetRewardsQuery {
                email: Some("teen@example.org".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(result.age_group, AgeGroup::Teenagers);
        assert_eq!(result.balance, 60);
        assert_eq!(result.rewards[0].title, "Reusable Face Mask");
        assert_eq!(result.rewards.len(), 6);
    }
}
