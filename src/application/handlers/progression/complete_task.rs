//! CompleteTaskHandler - Command handler for crediting a completed task.

use std::sync::Arc;

use crate::application::PopulationTransaction;
use crate::domain::player::{population, ProgressionError, User};
use crate::domain::progression::{require_email, require_text, ProgressionEngine};

/// Command to record a completed task.
#[derive(Debug, Clone, Default)]
pub struct CompleteTaskCommand {
    pub email: Option<String>,
    /// Description of the task, recorded in logs only.
    pub task: Option<String>,
    pub points: Option<i64>,
}

/// Result of a completed task.
#[derive(Debug, Clone)]
pub struct CompleteTaskResult {
    pub user: User,
    /// Badges unlocked by this completion.
    pub newly_earned: Vec<String>,
}

/// Handler for task completion.
pub struct CompleteTaskHandler {
    transaction: PopulationTransaction,
    engine: Arc<ProgressionEngine>,
}

impl CompleteTaskHandler {
    pub fn new(transaction: PopulationTransaction, engine: Arc<ProgressionEngine>) -> Self {
        Self {
            transaction,
            engine,
        }
    }

    pub async fn handle(
        &self,
        cmd: CompleteTaskCommand,
    ) -> Result<CompleteTaskResult, ProgressionError> {
        let email = require_email("email", cmd.email.as_deref())?;
        let task = require_text("task", cmd.task.as_deref())?;
        let points = cmd.points.ok_or_else(|| ProgressionError::missing("points"))?;

        let result = self
            .transaction
            .mutate(|users| {
                let user = population::find_mut(users, &email)?;
                let completion = self.engine.complete_task(user, points)?;
                Ok(CompleteTaskResult {
                    user: user.clone(),
                    newly_earned: completion.newly_earned,
                })
            })
            .await
            .map_err(|e| {
                tracing::warn!(email = %email, error = %e, "Task completion rejected");
                e
            })?;

        tracing::info!(
            email = %email,
            task = %task,
            points,
            balance = result.user.points(),
            "Task completed"
        );
        if !result.newly_earned.is_empty() {
            tracing::info!(email = %email, badges = ?result.newly_earned, "Badges earned");
        }
        Ok(result)
    }
}
