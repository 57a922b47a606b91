//! Storage Adapters
//!
//! Implementations of the UserStore port.
//!
//! ## Available Adapters
//!
//! - **JsonFileUserStore** - Stores the population as one JSON file on disk
//! - **InMemoryUserStore** - Stores the population in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{InMemoryUserStore, JsonFileUserStore};
//!
//! // Production: file-based storage
//! let store = JsonFileUserStore::new("./data/users.json");
//!
//! // Testing: in-memory storage
//! let store = InMemoryUserStore::new();
//! ```

mod in_memory_user_store;
mod json_file_user_store;

pub use in_memory_user_store::InMemoryUserStore;
pub use json_file_user_store::JsonFileUserStore;
