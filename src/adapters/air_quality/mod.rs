//! Air Quality Adapters
//!
//! Implementations of the AirQualityProvider port.

mod static_provider;

pub use static_provider::StaticAirQualityProvider;
