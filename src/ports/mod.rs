//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `UserStore` - Whole-population load/save of user records
//! - `AirQualityProvider` - City list, current AQI and AQI history

mod air_quality;
mod user_store;

pub use air_quality::{AirQualityError, AirQualityProvider};
pub use user_store::{StoreError, UserStore};
