//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Commands run inside a [`PopulationTransaction`]; queries read a snapshot.

pub mod handlers;
mod transaction;

pub use transaction::PopulationTransaction;
