//! Air quality handlers.
//!
//! ## Queries
//! - City list
//! - Current AQI for a city
//! - Recent AQI history for a city

mod get_air_quality;

pub use get_air_quality::{AirQualityQuery, GetAirQualityHandler};
