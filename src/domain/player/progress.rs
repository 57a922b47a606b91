//! Progress toward the next badge.

use serde::Serialize;

use crate::domain::catalog::Badge;

/// Where a balance sits between two badge thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeProgress {
    pub points: u64,
    /// First badge whose threshold is above `points`; `None` once all are reached.
    pub next_badge: Option<Badge>,
    /// Highest threshold at or below `points`, or 0.
    pub previous_threshold: u64,
    pub points_into_tier: u64,
    /// Distance between `previous_threshold` and the next threshold; 0 when none remain.
    pub tier_span: u64,
}

impl BadgeProgress {
    /// Computes progress over badges sorted by threshold ascending.
    pub fn compute(badges: &[Badge], points: u64) -> Self {
        let previous_threshold = badges
            .iter()
            .map(|b| u64::from(b.threshold))
            .filter(|t| *t <= points)
            .max()
            .unwrap_or(0);
        let next_badge = badges.iter().find(|b| !b.is_unlocked_by(points)).cloned();
        let tier_span = next_badge
            .as_ref()
            .map(|b| u64::from(b.threshold) - previous_threshold)
            .unwrap_or(0);

        Self {
            points,
            next_badge,
            previous_threshold,
            points_into_tier: points - previous_threshold,
            tier_span,
        }
    }

    /// Whole-number percentage through the current tier, 100 when complete.
    pub fn percent(&self) -> u8 {
        if self.tier_span == 0 {
            return 100;
        }
        ((self.points_into_tier * 100) / self.tier_span).min(100) as u8
    }

    pub fn points_to_next(&self) -> u64 {
        self.tier_span - self.points_into_tier.min(self.tier_span)
    }
}
