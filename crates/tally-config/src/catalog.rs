//! Checklist catalog source configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tally_core::Catalog;

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Path to a TOML catalog file. Empty means the built-in checklist.
    #[serde(default)]
    pub path: String,
}

impl CatalogConfig {
    #[must_use]
    pub fn is_custom(&self) -> bool {
        !self.path.is_empty()
    }

    /// Resolve the configured catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Catalog`] if the configured file cannot be read,
    /// parsed, or fails validation.
    pub fn load(&self) -> Result<Catalog, ConfigError> {
        if !self.is_custom() {
            return Ok(Catalog::standard());
        }
        Ok(Catalog::load(&PathBuf::from(&self.path))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_standard_catalog() {
        let config = CatalogConfig::default();
        assert!(!config.is_custom());
        assert_eq!(config.load().unwrap().len(), 78);
    }

    #[test]
    fn missing_file_is_catalog_error() {
        let config = CatalogConfig {
            path: "/nonexistent/tally/catalog.toml".into(),
        };
        assert!(matches!(config.load(), Err(ConfigError::Catalog(_))));
    }

    #[test]
    fn loads_catalog_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        std::fs::write(
            &path,
            r#"
[[items]]
id = 7
category = "Cashier"
title = "Customer Greeting"
description = "Greet customers."
points = 3
tier = "operational"
"#,
        )
        .unwrap();

        let config = CatalogConfig {
            path: path.display().to_string(),
        };
        let catalog = config.load().unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains(7));
    }
}
