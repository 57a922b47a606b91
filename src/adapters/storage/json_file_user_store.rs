//! JSON File User Store Adapter
//!
//! Stores the whole user population as one pretty-printed JSON array.
//! Writes go to a sibling temp file which is then renamed over the target,
//! so a crash mid-write leaves the previous snapshot in place.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::player::User;
use crate::ports::{StoreError, UserStore};

/// File-backed storage for the user population
#[derive(Debug, Clone)]
pub struct JsonFileUserStore {
    path: PathBuf,
}

impl JsonFileUserStore {
    /// Create a store backed by the JSON file at `path`
    ///
    /// The file does not need to exist yet; parent directories are created
    /// on the first save.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "users.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn ensure_parent(&self) -> Result<(), StoreError> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::Unavailable(e.to_string())),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl UserStore for JsonFileUserStore {
    async fn load_all(&self) -> Result<Vec<User>, StoreError> {
        let json = match fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "User file absent, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::Unavailable(e.to_string())),
        };

        if json.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&json).map_err(|e| StoreError::DeserializationFailed(e.to_string()))
    }

    async fn save_all(&self, users: &[User]) -> Result<(), StoreError> {
        self.ensure_parent().await?;

        let json = serde_json::to_string_pretty(users)
            .map_err(|e| StoreError::SerializationFailed(e.to_string()))?;

        let temp = self.temp_path();
        fs::write(&temp, json)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        fs::rename(&temp, &self.path)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        tracing::debug!(path = %self.path.display(), count = users.len(), "Saved user population");
        Ok(())
    }
}
