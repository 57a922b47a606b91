//! Age group classification.
//!
//! Every non-negative age maps to exactly one group. The ranges are
//! contiguous: `0..=12`, `13..=19`, `20..`.

use serde::{Deserialize, Serialize};

/// Age bracket that selects which tasks and rewards a user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroup {
    /// Ages up to 12 (nominally 5-12).
    Children,
    /// Ages 13-19.
    Teenagers,
    /// Ages 20 and over.
    Adults,
}

impl AgeGroup {
    /// All groups in ascending age order.
    pub const ALL: [AgeGroup; 3] = [AgeGroup::Children, AgeGroup::Teenagers, AgeGroup::Adults];

    /// Classifies an age.
    pub fn from_age(age: u32) -> Self {
        match age {
            0..=12 => AgeGroup::Children,
            13..=19 => AgeGroup::Teenagers,
            _ => AgeGroup::Adults,
        }
    }

    /// Inclusive lower bound and optional inclusive upper bound of the group.
    pub fn age_range(&self) -> (u32, Option<u32>) {
        match self {
            AgeGroup::Children => (0, Some(12)),
            AgeGroup::Teenagers => (13, Some(19)),
            AgeGroup::Adults => (20, None),
        }
    }

    /// Stable position of the group, used to index catalog tables.
    pub(crate) fn index(&self) -> usize {
        match self {
            AgeGroup::Children => 0,
            AgeGroup::Teenagers => 1,
            AgeGroup::Adults => 2,
        }
    }

    /// Returns the display name for this group.
    pub fn display_name(&self) -> &'static str {
        match self {
            AgeGroup::Children => "children",
            AgeGroup::Teenagers => "teenagers",
            AgeGroup::Adults => "adults",
        }
    }
}

impl std::fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn boundaries_classify_correctly() {
        assert_eq!(AgeGroup::from_age(0), AgeGroup::Children);
        assert_eq!(AgeGroup::from_age(12), AgeGroup::Children);
        assert_eq!(AgeGroup::from_age(13), AgeGroup::Teenagers);
        assert_eq!(AgeGroup::from_age(19), AgeGroup::Teenagers);
        assert_eq!(AgeGroup::from_age(20), AgeGroup::Adults);
        assert_eq!(AgeGroup::from_age(u32::MAX), AgeGroup::Adults);
    }

    #[test]
    fn indexes_are_distinct_and_dense() {
        let indexes: Vec<usize> = AgeGroup::ALL.iter().map(|g| g.index()).collect();
        assert_eq!(indexes, vec![0, 1, 2]);
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&AgeGroup::Teenagers).unwrap();
        assert_eq!(json, "\"teenagers\"");
    }

    proptest! {
        #[test]
        fn every_age_falls_in_exactly_one_range(age in 0u32..=150) {
            let matching: Vec<AgeGroup> = AgeGroup::ALL
                .iter()
                .copied()
                .filter(|g| {
                    let (lo, hi) = g.age_range();
                    age >= lo && hi.map_or(true, |hi| age <= hi)
                })
                .collect();
            prop_assert_eq!(matching.len(), 1);
            prop_assert_eq!(matching[0], AgeGroup::from_age(age));
        }
    }
}
