//! Lookups over a loaded user population.

use crate::domain::foundation::UserEmail;

use super::{ProgressionError, User};

/// Finds the user registered under `email`.
pub fn find<'a>(users: &'a [User], email: &UserEmail) -> Result<&'a User, ProgressionError> {
    users
        .iter()
        .find(|u| u.email() == email)
        .ok_or_else(|| ProgressionError::user_not_found(email.as_str()))
}

/// Mutable variant of [`find`].
pub fn find_mut<'a>(
    users: &'a mut [User],
    email: &UserEmail,
) -> Result<&'a mut User, ProgressionError> {
    users
        .iter_mut()
        .find(|u| u.email() == email)
        .ok_or_else(|| ProgressionError::user_not_found(email.as_str()))
}

pub fn is_registered(users: &[User], email: &UserEmail) -> bool {
    users.iter().any(|u| u.email() == email)
}
