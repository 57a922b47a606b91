//! GetAirQualityHandler - Query handler for city AQI data.

use std::sync::Arc;

use crate::domain::air_quality::{AqiHistory, AqiReading};
use crate::domain::player::ProgressionError;
use crate::domain::progression::require_text;
use crate::ports::AirQualityProvider;

/// Query naming a city.
#[derive(Debug, Clone, Default)]
pub struct AirQualityQuery {
    pub city: Option<String>,
}

/// Handler for the city list, current readings and histories.
pub struct GetAirQualityHandler {
    provider: Arc<dyn AirQualityProvider>,
}

impl GetAirQualityHandler {
    pub fn new(provider: Arc<dyn AirQualityProvider>) -> Self {
        Self { provider }
    }

    pub async fn cities(&self) -> Result<Vec<String>, ProgressionError> {
        Ok(self.provider.cities().await?)
    }

    pub async fn current(&self, query: AirQualityQuery) -> Result<AqiReading, ProgressionError> {
        let city = require_text("city", query.city.as_deref())?;
        let reading = self.provider.current(&city).await?;
        tracing::debug!(city = %city, aqi = reading.aqi, "Fetched AQI");
        Ok(reading)
    }

    pub async fn history(&self, query: AirQualityQuery) -> Result<AqiHistory, ProgressionError> {
        let city = require_text("city", query.city.as_deref())?;
        let history = self.provider.history(&city).await?;
        tracing::debug!(city = %city, days = history.history.len(), "Fetched AQI history");
        Ok(history)
    }
}
