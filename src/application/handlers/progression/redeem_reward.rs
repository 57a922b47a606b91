//! RedeemRewardHandler - Command handler for spending points on a reward.

use std::sync::Arc;

use crate::application::PopulationTransaction;
use crate::domain::catalog::Reward;
use crate::domain::player::{population, ProgressionError, User};
use crate::domain::progression::{require_email, require_text, ProgressionEngine};

/// Command to redeem a reward by title.
#[derive(Debug, Clone, Default)]
pub struct RedeemRewardCommand {
    pub email: Option<String>,
    pub reward: Option<String>,
}

/// Result of a redemption.
#[derive(Debug, Clone)]
pub struct RedeemRewardResult {
    pub user: User,
    pub reward: Reward,
}

/// Handler for reward redemption.
///
/// The balance check and the debit happen inside one population
/// transaction, so two concurrent redemptions cannot both spend the same
/// points.
pub struct RedeemRewardHandler {
    transaction: PopulationTransaction,
    engine: Arc<ProgressionEngine>,
}

impl RedeemRewardHandler {
    pub fn new(transaction: PopulationTransaction, engine: Arc<ProgressionEngine>) -> Self {
        Self {
            transaction,
            engine,
        }
    }

    pub async fn handle(
        &self,
        cmd: RedeemRewardCommand,
    ) -> Result<RedeemRewardResult, ProgressionError> {
        let email = require_email("email", cmd.email.as_deref())?;
        let title = require_text("reward", cmd.reward.as_deref())?;

        let result = self
            .transaction
            .mutate(|users| {
                let user = population::find_mut(users, &email)?;
                let reward = self.engine.redeem_reward(user, &title)?;
                Ok(RedeemRewardResult {
                    user: user.clone(),
                    reward,
                })
            })
            .await
            .map_err(|e| {
                tracing::warn!(email = %email, reward = %title, error = %e, "Redemption rejected");
                e
            })?;

        tracing::info!(
            email = %email,
            reward = %result.reward.title,
            cost = result.reward.cost,
            balance = result.user.points(),
            "Reward redeemed"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{engine, transaction_with, user};
    use crate::adapters::storage::InMemoryUserStore;
    use std::time::Duration;

    fn command(reward: &str) -> RedeemRewardCommand {
        RedeemRewardCommand {
            email: Some("dev@example.org".to_string()),
            reward: Some(reward.to_string()),
        }
    }

    #[tokio::test]
    async fn debits_cost_and_records_title() {
        let (tx, store) = transaction_with(vec![user("dev@example.org", 30, 120)]);
        let handler = RedeemRewardHandler::new(tx, engine());

        let result = handler.handle(command("Smart Air Quality Monitor")).await.unwrap();

        assert_eq!(result.reward.cost, 100);
        assert_eq!(result.user.points(), 20);
        assert_eq!(store.snapshot().await[0].rewards(), ["Smart Air Quality Monitor"]);
    }

    #[tokio::test]
    async fn insufficient_points_leaves_store_untouched() {
        let users = vec![user("dev@example.org", 30, 40)];
        let (tx, store) = transaction_with(users.clone());

        let err = RedeemRewardHandler::new(tx, engine())
            .handle(command("Air Purifying Plant"))
            .await
            .unwrap_err();

        assert!(matches!(err, ProgressionError::InsufficientPoints { .. }));
        assert_eq!(store.snapshot().await, users);
    }

    #[tokio::test]
    async fn unknown_reward_is_not_found() {
        let (tx, _) = transaction_with(vec![user("dev@example.org", 30, 400)]);
        let err = RedeemRewardHandler::new(tx, engine())
            .handle(command("Golden Ticket"))
            .await
            .unwrap_err();
        assert_eq!(err, ProgressionError::reward_not_found("Golden Ticket"));
    }

    #[tokio::test]
    async fn concurrent_double_redemption_spends_once() {
        // 80 points covers one 50-point reward but not two.
        let store = InMemoryUserStore::with_users(vec![user("dev@example.org", 30, 80)])
            .with_latency(Duration::from_millis(10));
        let tx = PopulationTransaction::new(Arc::new(store.clone()));
        let handler = Arc::new(RedeemRewardHandler::new(tx, engine()));

        let attempts = (0..2).map(|_| {
            let handler = Arc::clone(&handler);
            tokio::spawn(async move { handler.handle(command("Air Purifying Plant")).await })
        });
        let outcomes: Vec<_> = futures::future::join_all(attempts)
            .await
            .into_iter()
            .map(|joined| joined.unwrap())
            .collect();

        let successes = outcomes.iter().filter(|o| o.is_ok()).count();
        let insufficient = outcomes
            .iter()
            .filter(|o| matches!(o, Err(ProgressionError::InsufficientPoints { .. })))
            .count();
        assert_eq!(successes, 1);
        assert_eq!(insufficient, 1);

        let saved = store.snapshot().await;
        assert_eq!(saved[0].points(), 30);
        assert_eq!(saved[0].rewards().len(), 1);
    }
}
