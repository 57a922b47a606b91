//! In-Memory User Store Adapter
//!
//! Holds the user population in memory. Useful for testing and development.
//! Can simulate a slow or unreachable backend.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::domain::player::User;
use crate::ports::{StoreError, UserStore};

/// In-memory storage for the user population
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<Vec<User>>>,
    latency: Option<Duration>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryUserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with `users`
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users)),
            ..Self::default()
        }
    }

    /// Delay every load and save by `latency`
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Make every subsequent call fail with `StoreError::Unavailable`
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Current contents, bypassing latency and failure simulation
    pub async fn snapshot(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    async fn simulate(&self) -> Result<(), StoreError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("simulated outage".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn load_all(&self) -> Result<Vec<User>, StoreError> {
        self.simulate().await?;
        Ok(self.users.read().await.clone())
    }

    async fn save_all(&self, users: &[User]) -> Result<(), StoreError> {
        self.simulate().await?;
        *self.users.write().await = users.to_vec();
        Ok(())
    }
}
