//! Shared fixtures for handler tests.

use std::sync::Arc;

use crate::adapters::storage::InMemoryUserStore;
use crate::application::PopulationTransaction;
use crate::domain::catalog::Catalog;
use crate::domain::foundation::UserEmail;
use crate::domain::player::User;
use crate::domain::progression::ProgressionEngine;

pub fn engine() -> Arc<ProgressionEngine> {
    Arc::new(ProgressionEngine::new(Arc::new(Catalog::builtin())))
}

pub fn user(email: &str, age: u32, points: i64) -> User {
    let mut user = User::register(UserEmail::new(email).unwrap(), "tester", age);
    if points > 0 {
        engine().complete_task(&mut user, points).unwrap();
    }
    user
}

pub fn transaction_with(users: Vec<User>) -> (PopulationTransaction, InMemoryUserStore) {
    let store = InMemoryUserStore::with_users(users);
    (PopulationTransaction::new(Arc::new(store.clone())), store)
}
