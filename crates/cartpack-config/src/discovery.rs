//! File-based manifest discovery for CLI use
//!
//! Finds the project manifest in a project root and loads it.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::manifest::Manifest;

pub const TOML_MANIFEST: &str = "cartpack.toml";
pub const PACKAGE_MANIFEST: &str = "package.json";

/// File-based manifest discovery
///
/// Library users holding a manifest document already should use
/// `Manifest::from_value()` directly.
///
/// # Example
///
/// ```no_run
/// use cartpack_config::ManifestDiscovery;
///
/// let manifest = ManifestDiscovery::new(".").load().unwrap();
/// ```
pub struct ManifestDiscovery {
    root: PathBuf,
}

impl ManifestDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a manifest file in the root directory
    ///
    /// Searches in this order:
    /// 1. cartpack.toml
    /// 2. package.json
    pub fn find(&self) -> Option<PathBuf> {
        [TOML_MANIFEST, PACKAGE_MANIFEST]
            .iter()
            .map(|name| self.root.join(name))
            .find(|path| path.is_file())
    }

    /// Load the discovered manifest.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if neither file exists.
    pub fn load(&self) -> Result<Manifest> {
        let path = self
            .find()
            .ok_or_else(|| ConfigError::NotFound(self.root.clone()))?;
        self.load_from(&path)
    }

    /// Load a specific manifest file. The project root stays the discovery
    /// root, not the file's directory.
    pub fn load_from(&self, path: &Path) -> Result<Manifest> {
        debug!("Loading manifest from {}", path.display());
        let content = fs::read_to_string(path)?;

        let document = if path.extension().is_some_and(|ext| ext == "toml") {
            parse_toml(&content)?
        } else {
            serde_json::from_str::<Value>(&content).map_err(|e| {
                ConfigError::invalid(PACKAGE_MANIFEST, format!("Invalid JSON: {}", e))
            })?
        };

        Ok(Manifest::from_value(&self.root, document)?.with_source(path))
    }
}

fn parse_toml(content: &str) -> Result<Value> {
    let toml_val: toml::Value = toml::from_str(content)
        .map_err(|e| ConfigError::invalid(TOML_MANIFEST, format!("Invalid TOML syntax: {}", e)))?;

    serde_json::to_value(toml_val).map_err(|e| {
        ConfigError::invalid(
            TOML_MANIFEST,
            format!("TOML to JSON conversion failed: {}", e),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn find_returns_none_when_no_manifest() {
        let dir = TempDir::new().unwrap();
        assert!(ManifestDiscovery::new(dir.path()).find().is_none());
    }

    #[test]
    fn load_returns_not_found_when_no_manifest() {
        let dir = TempDir::new().unwrap();
        let result = ManifestDiscovery::new(dir.path()).load();
        assert!(matches!(result.unwrap_err(), ConfigError::NotFound(_)));
    }

    #[test]
    fn invalid_json_names_the_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), "{ \"cartridges\": [").unwrap();

        let err = ManifestDiscovery::new(dir.path()).load().unwrap_err();
        assert_eq!(err.field(), Some("package.json"));
    }

    #[test]
    fn records_source_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cartpack.toml");
        fs::write(&path, "cartridges = [\"app_core\"]\n").unwrap();

        let manifest = ManifestDiscovery::new(dir.path()).load().unwrap();
        assert_eq!(manifest.source(), Some(path.as_path()));
    }
}
