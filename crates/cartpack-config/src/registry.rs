//! Ordered cartridge list.

use std::path::{Component, Path};

use indexmap::IndexSet;
use serde::Serialize;
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::manifest::{Manifest, string_list};

/// Manifest field holding the ordered cartridge list.
pub const CARTRIDGES_FIELD: &str = "cartridges";

/// One cartridge taking part in the build.
///
/// `ordinal` is the position in the manifest after deduplication. Later
/// cartridges override earlier ones when their outputs share a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Module {
    pub id: String,
    pub ordinal: usize,
}

impl Module {
    pub fn new(id: impl Into<String>, ordinal: usize) -> Self {
        Self {
            id: id.into(),
            ordinal,
        }
    }
}

pub struct ModuleRegistry<'a> {
    manifest: &'a Manifest,
}

impl<'a> ModuleRegistry<'a> {
    pub fn new(manifest: &'a Manifest) -> Self {
        Self { manifest }
    }

    /// Resolve the participating cartridges in manifest order.
    ///
    /// Duplicates keep their first position.
    ///
    /// # Errors
    ///
    /// `MissingField` when `cartridges` is absent; `InvalidValue` when it is
    /// not an array of strings, is empty, or names something other than a
    /// single directory below `cartridges/`.
    pub fn list_modules(&self) -> Result<Vec<Module>> {
        let value =
            self.manifest
                .field(CARTRIDGES_FIELD)
                .ok_or_else(|| ConfigError::MissingField {
                    field: CARTRIDGES_FIELD.to_string(),
                    hint: "add a \"cartridges\" array listing the cartridges to build".to_string(),
                })?;

        let mut ids = IndexSet::new();
        for id in string_list(CARTRIDGES_FIELD, value)? {
            let id = id.trim().to_string();
            if id.is_empty() {
                return Err(ConfigError::invalid(
                    CARTRIDGES_FIELD,
                    "cartridge names cannot be empty",
                ));
            }
            if !is_single_segment(&id) {
                return Err(ConfigError::invalid(
                    CARTRIDGES_FIELD,
                    format!(
                        "cartridge '{}' must be a plain directory name inside cartridges/",
                        id
                    ),
                ));
            }
            if !ids.insert(id.clone()) {
                debug!("Ignoring duplicate cartridge entry: {}", id);
            }
        }

        if ids.is_empty() {
            return Err(ConfigError::invalid(
                CARTRIDGES_FIELD,
                "at least one cartridge is required",
            ));
        }

        Ok(ids
            .into_iter()
            .enumerate()
            .map(|(ordinal, id)| Module::new(id, ordinal))
            .collect())
    }
}

/// Whether `id` names exactly one directory, with no separators, root or `..`.
fn is_single_segment(id: &str) -> bool {
    let mut components = Path::new(id).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !id.contains(['/', '\\'])
}
