//! User handlers.
//!
//! ## Commands
//! - Registering a user
//! - Selecting a city
//! - Updating profile fields
//!
//! ## Queries
//! - Get a user by email

mod get_user;
mod register_user;
mod select_city;
mod update_profile;

// Commands
pub use register_user::{RegisterUserCommand, RegisterUserHandler, RegisterUserResult};
pub use select_city::{SelectCityCommand, SelectCityHandler};
pub use update_profile::{UpdateProfileCommand, UpdateProfileHandler};

// Queries
pub use get_user::{GetUserHandler, GetUserQuery};
