//! GetLeaderboardHandler - Query handler for community point totals.

use crate::application::PopulationTransaction;
use crate::domain::leaderboard::{aggregate, LeaderboardEntry};
use crate::domain::player::ProgressionError;

/// Handler computing the leaderboard from the current population.
///
/// Recomputed on every call; nothing is cached.
pub struct GetLeaderboardHandler {
    transaction: PopulationTransaction,
}

impl GetLeaderboardHandler {
    pub fn new(transaction: PopulationTransaction) -> Self {
        Self { transaction }
    }

    pub async fn handle(&self) -> Result<Vec<LeaderboardEntry>, ProgressionError> {
        let users = self.transaction.read().await?;
        let board = aggregate(&users);
        tracing::debug!(communities = board.len(), users = users.len(), "Computed leaderboard");
        Ok(board)
    }
}
