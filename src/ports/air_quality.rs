//! Air Quality Port - Interface for city AQI data.

use async_trait::async_trait;

use crate::domain::air_quality::{AqiHistory, AqiReading};
use crate::domain::player::ProgressionError;

/// Errors from an air quality source
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AirQualityError {
    #[error("Air quality source unavailable: {0}")]
    Unavailable(String),
}

impl From<AirQualityError> for ProgressionError {
    fn from(err: AirQualityError) -> Self {
        ProgressionError::store_unavailable(err.to_string())
    }
}

/// Port for looking up city air quality
#[async_trait]
pub trait AirQualityProvider: Send + Sync {
    /// Cities with known readings, in display order.
    async fn cities(&self) -> Result<Vec<String>, AirQualityError>;

    /// Current reading. Unknown cities get a default reading rather than an error.
    async fn current(&self, city: &str) -> Result<AqiReading, AirQualityError>;

    /// Recent daily readings, oldest first.
    async fn history(&self, city: &str) -> Result<AqiHistory, AirQualityError>;
}
