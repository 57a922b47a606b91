//! Air quality readings for a city.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::AqiBracket;

/// AQI assumed for cities without a known reading.
pub const DEFAULT_AQI: u32 = 40;

/// Number of daily readings in a history.
pub const HISTORY_DAYS: usize = 5;

/// Current AQI for a city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AqiReading {
    pub city: String,
    pub aqi: u32,
}

impl AqiReading {
    pub fn new(city: impl Into<String>, aqi: u32) -> Self {
        Self {
            city: city.into(),
            aqi,
        }
    }

    pub fn bracket(&self) -> AqiBracket {
        AqiBracket::from_aqi(self.aqi)
    }

    pub fn category(&self) -> &'static str {
        self.bracket().category()
    }
}

/// Daily readings, oldest first, labelled `Day N` counting down to `Day 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AqiHistory {
    pub city: String,
    pub history: Vec<u32>,
    pub labels: Vec<String>,
}

impl AqiHistory {
    pub fn new(city: impl Into<String>, history: Vec<u32>) -> Self {
        let days = history.len();
        let labels = (1..=days).rev().map(|day| format!("Day {}", day)).collect();
        Self {
            city: city.into(),
            history,
            labels,
        }
    }

    /// A flat history at [`DEFAULT_AQI`].
    pub fn flat(city: impl Into<String>) -> Self {
        Self::new(city, vec![DEFAULT_AQI; HISTORY_DAYS])
    }

    pub fn average(&self) -> Option<u32> {
        if self.history.is_empty() {
            return None;
        }
        let sum: u64 = self.history.iter().map(|v| u64::from(*v)).sum();
        Some((sum / self.history.len() as u64) as u32)
    }
}
