//! User store configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Which user store backend to run
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// JSON file on disk
    #[default]
    File,
    /// Process memory; lost on restart
    Memory,
}

/// User store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Path of the JSON file used by the file backend
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.backend == StorageBackend::File && self.data_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.data_path"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_path: default_data_path(),
        }
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from("users.json")
}
