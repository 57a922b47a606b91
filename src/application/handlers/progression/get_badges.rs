//! GetBadgesHandler - Query handler for the badge catalogue and a user's progress.

use std::sync::Arc;

use crate::application::PopulationTransaction;
use crate::domain::catalog::Badge;
use crate::domain::player::{population, BadgeProgress, ProgressionError};
use crate::domain::progression::{require_email, ProgressionEngine};

/// Query for badges. With an email, the user's progress is included.
#[derive(Debug, Clone, Default)]
pub struct GetBadgesQuery {
    pub email: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GetBadgesResult {
    /// All badges, ascending by threshold.
    pub badges: Vec<Badge>,
    pub earned: Vec<String>,
    pub progress: Option<BadgeProgress>,
}

pub struct GetBadgesHandler {
    transaction: PopulationTransaction,
    engine: Arc<ProgressionEngine>,
}

impl GetBadgesHandler {
    pub fn new(transaction: PopulationTransaction, engine: Arc<ProgressionEngine>) -> Self {
        Self {
            transaction,
            engine,
        }
    }

    pub async fn handle(&self, query: GetBadgesQuery) -> Result<GetBadgesResult, ProgressionError> {
        let badges = self.engine.catalog().all_badges_ascending().to_vec();

        let Some(raw_email) = query.email.as_deref().filter(|e| !e.trim().is_empty()) else {
            return Ok(GetBadgesResult {
                badges,
                earned: Vec::new(),
                progress: None,
            });
        };

        let email = require_email("email", Some(raw_email))?;
        let users = self.transaction.read().await?;
        let user = population::find(&users, &email)?;

        Ok(GetBadgesResult {
            badges,
            earned: user.badges().iter().cloned().collect(),
            progress: Some(self.engine.badge_progress(user.points())),
        })
    }
}
