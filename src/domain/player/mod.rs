//! Player module - the User aggregate and its ledger.
//!
//! # Module Structure
//!
//! - `user` - User aggregate entity
//! - `errors` - ProgressionError, the typed failure of every operation
//! - `progress` - BadgeProgress toward the next threshold
//! - `population` - lookups over a loaded user population

mod errors;
pub mod population;
mod progress;
mod user;

pub use errors::ProgressionError;
pub use progress::BadgeProgress;
pub use user::{User, DEFAULT_COMMUNITY};
