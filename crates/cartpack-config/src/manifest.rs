//! In-memory project manifest.
//!
//! The manifest is kept as a raw JSON document so that the registry and alias
//! resolver can report precisely which field is absent or malformed.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use path_clean::PathClean;
use serde_json::Value;

use crate::error::{ConfigError, Result};

/// Field listing cartridges whose vendored styles are mirrored verbatim.
pub const STATIC_MIRRORS_FIELD: &str = "staticMirrors";

#[derive(Debug, Clone)]
pub struct Manifest {
    root: PathBuf,
    document: Value,
    source: Option<PathBuf>,
}

impl Manifest {
    /// Build a manifest from an already parsed document.
    ///
    /// `root` is made absolute immediately so later working-directory changes
    /// cannot move any path derived from it.
    ///
    /// # Example
    ///
    /// ```
    /// use cartpack_config::Manifest;
    /// use serde_json::json;
    ///
    /// let manifest = Manifest::from_value("/srv/shop", json!({
    ///     "cartridges": ["app_storefront_base"]
    /// })).unwrap();
    /// assert!(manifest.root().is_absolute());
    /// ```
    pub fn from_value(root: impl AsRef<Path>, document: Value) -> Result<Self> {
        if !document.is_object() {
            return Err(ConfigError::invalid(
                "manifest",
                "expected a JSON object or TOML table at the top level",
            ));
        }

        Ok(Self {
            root: absolutize(root.as_ref())?,
            document,
            source: None,
        })
    }

    pub(crate) fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(path.into());
        self
    }

    /// Absolute project root every relative manifest path is resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File the manifest was loaded from, if it came from disk.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Directory containing one folder per cartridge.
    pub fn cartridges_dir(&self) -> PathBuf {
        self.root.join("cartridges")
    }

    /// Look up a top-level field. `null` counts as absent.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.document.get(name).filter(|value| !value.is_null())
    }

    /// Cartridges flagged for static style mirroring.
    ///
    /// Absent means no cartridge is special-cased.
    pub fn static_mirrors(&self) -> Result<BTreeSet<String>> {
        match self.field(STATIC_MIRRORS_FIELD) {
            None => Ok(BTreeSet::new()),
            Some(value) => Ok(string_list(STATIC_MIRRORS_FIELD, value)?
                .into_iter()
                .collect()),
        }
    }
}

/// Read a JSON array of strings, naming `field` in any error.
pub(crate) fn string_list(field: &str, value: &Value) -> Result<Vec<String>> {
    let items = value
        .as_array()
        .ok_or_else(|| ConfigError::invalid(field, "expected an array of strings"))?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                ConfigError::invalid(
                    field,
                    format!("element {} is not a string: {}", index, item),
                )
            })
        })
        .collect()
}

fn absolutize(path: &Path) -> Result<PathBuf> {
    Ok(std::path::absolute(path)?.clean())
}
