//! Catalog Adapters
//!
//! Loads the reference catalog from a YAML file, or falls back to the
//! built-in tables when no file is configured.

use std::path::Path;

use tokio::fs;

use crate::domain::catalog::{Catalog, CatalogError};

/// Reads and validates a YAML catalog file.
///
/// # Errors
///
/// - `CatalogError::Io` if the file cannot be read
/// - `CatalogError::Parse` if it is not a valid catalog document
/// - any completeness error from [`Catalog::validate`]
pub async fn load_yaml_file(path: &Path) -> Result<Catalog, CatalogError> {
    let yaml = fs::read_to_string(path)
        .await
        .map_err(|e| CatalogError::Io(format!("{}: {}", path.display(), e)))?;
    Catalog::from_yaml(&yaml)
}

/// Loads the catalog from `path` if given, else the built-in tables.
pub async fn load(path: Option<&Path>) -> Result<Catalog, CatalogError> {
    match path {
        Some(path) => {
            let catalog = load_yaml_file(path).await?;
            tracing::info!(path = %path.display(), "Loaded catalog file");
            Ok(catalog)
        }
        None => Ok(Catalog::builtin()),
    }
}
