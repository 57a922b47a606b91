//! Static Air Quality Adapter
//!
//! Serves a fixed table of city readings. Cities outside the table read
//! [`DEFAULT_AQI`] with a flat history.

use async_trait::async_trait;
use once_cell::sync::Lazy;

use crate::domain::air_quality::{AqiHistory, AqiReading, DEFAULT_AQI};
use crate::ports::{AirQualityError, AirQualityProvider};

/// (city, current AQI, last five days oldest first)
type CityRow = (&'static str, u32, [u32; 5]);

static CITY_TABLE: Lazy<Vec<CityRow>> = Lazy::new(|| {
    vec![
        ("Delhi", 180, [180, 175, 190, 200, 170]),
        ("Mumbai", 90, [90, 85, 95, 100, 80]),
        ("Bangalore", 45, [45, 40, 50, 55, 35]),
        ("Chennai", 120, [120, 115, 125, 130, 110]),
        ("Kolkata", 150, [150, 145, 155, 160, 140]),
        ("Hyderabad", 60, [60, 55, 65, 70, 50]),
        ("Pune", 70, [70, 65, 75, 80, 60]),
        ("Ahmedabad", 110, [110, 105, 115, 120, 100]),
        ("Jaipur", 130, [130, 125, 135, 140, 120]),
        ("Lucknow", 140, [140, 135, 145, 150, 130]),
    ]
});

/// Fixed-table air quality source
#[derive(Debug, Clone, Default)]
pub struct StaticAirQualityProvider;

impl StaticAirQualityProvider {
    pub fn new() -> Self {
        Self
    }

    fn row(city: &str) -> Option<&'static CityRow> {
        CITY_TABLE.iter().find(|(name, _, _)| *name == city)
    }
}

#[async_trait]
impl AirQualityProvider for StaticAirQualityProvider {
    async fn cities(&self) -> Result<Vec<String>, AirQualityError> {
        Ok(CITY_TABLE
            .iter()
            .map(|(name, _, _)| name.to_string())
            .collect())
    }

    async fn current(&self, city: &str) -> Result<AqiReading, AirQualityError> {
        let aqi = Self::row(city).map_or(DEFAULT_AQI, |(_, aqi, _)| *aqi);
        Ok(AqiReading::new(city, aqi))
    }

    async fn history(&self, city: &str) -> Result<AqiHistory, AirQualityError> {
        Ok(match Self::row(city) {
            Some((_, _, days)) => AqiHistory::new(city, days.to_vec()),
            None => AqiHistory::flat(city),
        })
    }
}
