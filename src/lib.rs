//! Bloom Points - air quality driven civic action tracker
//!
//! This crate turns a city's air quality reading into age-appropriate tasks,
//! keeps each user's points, badges and redeemed rewards, and totals points
//! per community for the leaderboard.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
