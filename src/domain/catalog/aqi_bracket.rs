//! AQI bracket classification.
//!
//! Six ordered, gapless ranges over the non-negative AQI scale. Each
//! bracket carries the health category shown to users.

use serde::{Deserialize, Serialize};

/// Range of AQI readings that share one set of recommended tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AqiBracket {
    #[serde(rename = "0-50")]
    Good,
    #[serde(rename = "51-100")]
    Moderate,
    #[serde(rename = "101-150")]
    UnhealthyForSensitiveGroups,
    #[serde(rename = "151-200")]
    Unhealthy,
    #[serde(rename = "201-300")]
    VeryUnhealthy,
    #[serde(rename = "301+")]
    Hazardous,
}

impl AqiBracket {
    /// All brackets in ascending severity.
    pub const ALL: [AqiBracket; 6] = [
        AqiBracket::Good,
        AqiBracket::Moderate,
        AqiBracket::UnhealthyForSensitiveGroups,
        AqiBracket::Unhealthy,
        AqiBracket::VeryUnhealthy,
        AqiBracket::Hazardous,
    ];

    /// Classifies an AQI reading.
    pub fn from_aqi(aqi: u32) -> Self {
        match aqi {
            0..=50 => AqiBracket::Good,
            51..=100 => AqiBracket::Moderate,
            101..=150 => AqiBracket::UnhealthyForSensitiveGroups,
            151..=200 => AqiBracket::Unhealthy,
            201..=300 => AqiBracket::VeryUnhealthy,
            _ => AqiBracket::Hazardous,
        }
    }

    /// Inclusive lower bound and optional inclusive upper bound.
    pub fn bounds(&self) -> (u32, Option<u32>) {
        match self {
            AqiBracket::Good => (0, Some(50)),
            AqiBracket::Moderate => (51, Some(100)),
            AqiBracket::UnhealthyForSensitiveGroups => (101, Some(150)),
            AqiBracket::Unhealthy => (151, Some(200)),
            AqiBracket::VeryUnhealthy => (201, Some(300)),
            AqiBracket::Hazardous => (301, None),
        }
    }

    /// Range label, e.g. `"51-100"` or `"301+"`.
    pub fn label(&self) -> &'static str {
        match self {
            AqiBracket::Good => "0-50",
            AqiBracket::Moderate => "51-100",
            AqiBracket::UnhealthyForSensitiveGroups => "101-150",
            AqiBracket::Unhealthy => "151-200",
            AqiBracket::VeryUnhealthy => "201-300",
            AqiBracket::Hazardous => "301+",
        }
    }

    /// Health category for the bracket.
    pub fn category(&self) -> &'static str {
        match self {
            AqiBracket::Good => "Good",
            AqiBracket::Moderate => "Moderate",
            AqiBracket::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AqiBracket::Unhealthy => "Unhealthy",
            AqiBracket::VeryUnhealthy => "Very Unhealthy",
            AqiBracket::Hazardous => "Hazardous",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            AqiBracket::Good => 0,
            AqiBracket::Moderate => 1,
            AqiBracket::UnhealthyForSensitiveGroups => 2,
            AqiBracket::Unhealthy => 3,
            AqiBracket::VeryUnhealthy => 4,
            AqiBracket::Hazardous => 5,
        }
    }
}

impl std::fmt::Display for AqiBracket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
