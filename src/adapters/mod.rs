//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - User store backends (JSON file, in-memory)
//! - `air_quality` - Static city AQI table
//! - `catalog` - YAML catalog file loading
//! - `http` - Axum REST API

pub mod air_quality;
pub mod catalog;
pub mod http;
pub mod storage;

pub use air_quality::StaticAirQualityProvider;
pub use storage::{InMemoryUserStore, JsonFileUserStore};
