//! Leaderboard - community point totals.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::player::User;

/// One community's combined balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub community: String,
    #[serde(rename = "points")]
    pub total_points: u64,
}

/// Sums points per community, highest total first.
///
/// Communities with equal totals keep the order in which they first appear
/// in `users`.
pub fn aggregate(users: &[User]) -> Vec<LeaderboardEntry> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<LeaderboardEntry> = Vec::new();

    for user in users {
        let index = *positions.entry(user.community()).or_insert_with(|| {
            entries.push(LeaderboardEntry {
                community: user.community().to_string(),
                total_points: 0,
            });
            entries.len() - 1
        });
        entries[index].total_points = entries[index].total_points.saturating_add(user.points());
    }

    // sort_by is stable
    entries.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    entries
}
