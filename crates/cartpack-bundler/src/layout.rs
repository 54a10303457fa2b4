//! Filesystem layout of a single cartridge.

use std::path::{Path, PathBuf};

use cartpack_config::AssetClass;

/// Paths of one cartridge below the project's `cartridges` directory.
///
/// ```text
/// cartridges/<id>/cartridge/
///     client/<variant>/js/**      script sources
///     client/<variant>/scss/**    style sources
///     static/js, static/css       bundle output
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartridgeLayout {
    root: PathBuf,
}

impl CartridgeLayout {
    pub fn new(cartridges_dir: &Path, id: &str) -> Self {
        Self {
            root: cartridges_dir.join(id).join("cartridge"),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn client_root(&self) -> PathBuf {
        self.root.join("client")
    }

    pub fn static_root(&self) -> PathBuf {
        self.root.join("static")
    }

    pub fn output_dir(&self, class: AssetClass) -> PathBuf {
        self.static_root().join(class.output_dir())
    }
}
