//! Source discovery for one cartridge and asset class.

use std::path::{Path, PathBuf};

use cartpack_config::{AssetClass, Module};
use serde::Serialize;
use tracing::debug;

use crate::layout::CartridgeLayout;
use crate::source::AssetSource;
use crate::{Error, Result};

/// One discovered entry point.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceFile {
    /// Absolute path of the source
    pub path: PathBuf,
    /// Variant folder the file was found under
    pub variant: String,
    /// Path below the variant folder, `/`-separated
    pub relative_path: String,
}

pub struct AssetDiscovery<'a> {
    source: &'a dyn AssetSource,
    cartridges_dir: &'a Path,
}

impl<'a> AssetDiscovery<'a> {
    pub fn new(source: &'a dyn AssetSource, cartridges_dir: &'a Path) -> Self {
        Self {
            source,
            cartridges_dir,
        }
    }

    /// Find the entry points of `class` in `module`.
    ///
    /// Matches `client/<variant>/<source dir>/**/*.<ext>` for every variant.
    /// Style partials (`_name.scss`) are skipped. An existing client root with
    /// no matches yields an empty list.
    ///
    /// # Errors
    ///
    /// `MissingModuleRoot` if the cartridge has no client directory. Callers
    /// must abort the whole run on it.
    pub fn discover(&self, module: &Module, class: AssetClass) -> Result<Vec<SourceFile>> {
        let layout = CartridgeLayout::new(self.cartridges_dir, &module.id);
        let client_root = layout.client_root();

        if !self.source.exists(&client_root) {
            return Err(Error::MissingModuleRoot {
                cartridge: module.id.clone(),
                path: client_root,
            });
        }

        let mut files = Vec::new();
        for variant in self.source.list_dirs(&client_root)? {
            let variant_root = client_root.join(&variant);
            let class_root = variant_root.join(class.source_dir());

            for path in self.source.walk_files(&class_root)? {
                if !class.matches_extension(&path) || class.is_partial(&path) {
                    continue;
                }
                let relative_path = relative_key_path(&variant_root, &path)?;
                debug!(
                    "Discovered {} source in {}: {}",
                    class,
                    module.id,
                    path.display()
                );
                files.push(SourceFile {
                    path,
                    variant: variant.clone(),
                    relative_path,
                });
            }
        }

        files.sort();
        Ok(files)
    }
}

/// `path` relative to `base`, `/`-separated.
fn relative_key_path(base: &Path, path: &Path) -> Result<String> {
    let relative = path.strip_prefix(base).unwrap_or(path);
    let segments = relative
        .components()
        .map(|c| {
            c.as_os_str().to_str().ok_or_else(|| Error::NonUtf8Path {
                path: path.to_path_buf(),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(segments.join("/"))
}
