//! Catalog configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the task, reward and badge tables come from
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CatalogConfig {
    /// YAML catalog file; the built-in tables are used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.path {
            Some(path) if path.as_os_str().is_empty() => {
                Err(ValidationError::MissingRequired("catalog.path"))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_defaults_to_builtin() {
        let config = CatalogConfig::default();
        assert!(config.path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let config = CatalogConfig {
            path: Some(PathBuf::new()),
        };
        assert!(config.validate().is_err());
    }
}
