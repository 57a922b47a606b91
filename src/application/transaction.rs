//! PopulationTransaction - the load-mutate-save boundary around the user store.
//!
//! The store only knows whole-population load and save, so two overlapping
//! mutations would each save a snapshot missing the other's change. Every
//! mutation therefore runs under one process-wide async lock:
//!
//! 1. acquire the lock
//! 2. load the full population
//! 3. apply the mutation to that working copy
//! 4. save the working copy, only if the mutation succeeded
//! 5. release the lock
//!
//! A failed mutation is never saved, so callers see all of its field changes
//! or none.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::player::{ProgressionError, User};
use crate::ports::UserStore;

/// Serialises mutations of the user population.
#[derive(Clone)]
pub struct PopulationTransaction {
    store: Arc<dyn UserStore>,
    lock: Arc<Mutex<()>>,
}

impl PopulationTransaction {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self {
            store,
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Loads the population without taking the lock.
    ///
    /// Suitable for read-only queries; the snapshot may be stale by the time
    /// the caller uses it.
    pub async fn read(&self) -> Result<Vec<User>, ProgressionError> {
        self.store.load_all().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to load users");
            ProgressionError::from(e)
        })
    }

    /// Runs `mutation` on a freshly loaded population and saves the result.
    ///
    /// # Errors
    ///
    /// Returns the mutation's own error (nothing is saved), or
    /// `StoreUnavailable` if loading or saving fails.
    pub async fn mutate<T, F>(&self, mutation: F) -> Result<T, ProgressionError>
    where
        F: FnOnce(&mut Vec<User>) -> Result<T, ProgressionError>,
    {
        let _guard = self.lock.lock().await;

        let mut users = self.read().await?;
        let outcome = mutation(&mut users)?;

        self.store.save_all(&users).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to save users");
            ProgressionError::from(e)
        })?;

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryUserStore;
    use crate::domain::foundation::UserEmail;
    use std::time::Duration;

    fn test_user(email: &str) -> User {
        User::register(UserEmail::new(email).unwrap(), "tester", 30)
    }

    #[tokio::test]
    async fn successful_mutation_is_saved() {
        let store = InMemoryUserStore::new();
        let tx = PopulationTransaction::new(Arc::new(store.clone()));

        let count = tx
            .mutate(|users| {
                users.push(test_user("a@example.org"));
                Ok(users.len())
            })
            .await
            .unwrap();

        assert_eq!(count, 1);
        assert_eq!(store.snapshot().await.len(), 1);
    }

    #[tokio::test]
    async fn failed_mutation_is_discarded() {
        let store = InMemoryUserStore::with_users(vec![test_user("a@example.org")]);
        let tx = PopulationTransaction::new(Arc::new(store.clone()));

        let result: Result<(), _> = tx
            .mutate(|users| {
                users.clear();
                Err(ProgressionError::conflict("rejected"))
            })
            .await;

        assert!(result.is_err());
        assert_eq!(store.snapshot().await.len(), 1);
    }

    #[tokio::test]
    async fn store_outage_is_store_unavailable() {
        let store = InMemoryUserStore::new();
        store.set_unavailable(true);
        let tx = PopulationTransaction::new(Arc::new(store));

        let err = tx.mutate(|_| Ok(())).await.unwrap_err();
        assert!(matches!(err, ProgressionError::StoreUnavailable(_)));
    }

    #[tokio::test]
    async fn concurrent_mutations_do_not_lose_updates() {
        let store = InMemoryUserStore::new().with_latency(Duration::from_millis(5));
        let tx = PopulationTransaction::new(Arc::new(store.clone()));

        let tasks: Vec<_> = (0..8)
            .map(|i| {
                let tx = tx.clone();
                tokio::spawn(async move {
                    tx.mutate(move |users| {
                        users.push(test_user(&format!("user{}@example.org", i)));
                        Ok(())
                    })
                    .await
                })
            })
            .collect();

        for result in futures::future::join_all(tasks).await {
            result.unwrap().unwrap();
        }

        assert_eq!(store.snapshot().await.len(), 8);
    }
}
