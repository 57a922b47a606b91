//! Catalog module - static reference data.
//!
//! # Module Structure
//!
//! - `age_group` - AgeGroup classification
//! - `aqi_bracket` - AqiBracket classification
//! - `items` - Task, Reward and Badge entries
//! - `reference` - Catalog lookup surface and its load-time validation
//! - `builtin` - The reference tables shipped with the service

mod age_group;
mod aqi_bracket;
mod builtin;
mod errors;
mod items;
mod reference;

pub use age_group::AgeGroup;
pub use aqi_bracket::AqiBracket;
pub use errors::CatalogError;
pub use items::{Badge, Reward, Task};
pub use reference::{Catalog, CatalogDocument};
