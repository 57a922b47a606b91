//! HTTP adapters - REST API implementation.
//!
//! - `dto` - JSON request and response types
//! - `handlers` - Axum handlers, `AppState` and error mapping
//! - `routes` - Router assembly

pub mod dto;
pub mod handlers;
pub mod routes;

// Re-export key types for convenience
pub use handlers::{ApiError, ApiJson, AppState};
pub use routes::{api_routes, app_router};
