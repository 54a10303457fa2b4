//! Bundle descriptors and their builder.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::path::{Path, PathBuf};

use cartpack_config::{AliasTable, AssetClass, BuildMode, Module};
use serde::{Serialize, Serializer};

use crate::discovery::SourceFile;
use crate::entry::{EntryKey, derive_key};
use crate::layout::CartridgeLayout;
use crate::pipeline::{Minimizer, Optimization, ProcessingPipeline};
use crate::plugins::{PluginRegistry, PluginStep};
use crate::{Error, Result};

/// Filename pattern for every emitted bundle.
pub const OUTPUT_FILENAME: &str = "[name].js";

/// Source map generation.
///
/// Serializes as `false` or `"source-map"`, the values bundling engines
/// accept for `devtool`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMapMode {
    Disabled,
    External,
}

impl SourceMapMode {
    pub fn for_mode(mode: BuildMode) -> Self {
        if mode.is_production() {
            SourceMapMode::Disabled
        } else {
            SourceMapMode::External
        }
    }
}

impl Serialize for SourceMapMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            SourceMapMode::Disabled => serializer.serialize_bool(false),
            SourceMapMode::External => serializer.serialize_str("source-map"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputConfig {
    pub path: PathBuf,
    pub filename: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolveConfig {
    pub alias: AliasTable,
}

/// Everything the bundling engine needs to build one (cartridge, class) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleDescriptor {
    /// `<cartridge>:<class>`, unique within a run
    pub name: String,
    pub cartridge: String,
    pub asset_class: AssetClass,
    pub mode: BuildMode,
    pub devtool: SourceMapMode,
    /// Entry key to absolute source path; never empty
    pub entry: BTreeMap<EntryKey, PathBuf>,
    pub output: OutputConfig,
    pub resolve: ResolveConfig,
    pub module: ProcessingPipeline,
    pub plugins: PluginRegistry,
    pub optimization: Optimization,
}

impl BundleDescriptor {
    pub fn add_plugin(&mut self, step: PluginStep) {
        self.plugins.add(step);
    }
}

pub struct DescriptorBuilder<'a> {
    mode: BuildMode,
    cartridges_dir: &'a Path,
}

impl<'a> DescriptorBuilder<'a> {
    pub fn new(mode: BuildMode, cartridges_dir: &'a Path) -> Self {
        Self {
            mode,
            cartridges_dir,
        }
    }

    /// Assemble the descriptor for `module` and `class` from its sources.
    ///
    /// Returns `Ok(None)` when `files` is empty.
    ///
    /// # Errors
    ///
    /// `EntryKeyCollision` when two files derive the same entry key.
    pub fn build(
        &self,
        module: &Module,
        class: AssetClass,
        files: &[SourceFile],
        aliases: &AliasTable,
    ) -> Result<Option<BundleDescriptor>> {
        if files.is_empty() {
            return Ok(None);
        }

        let entry = entry_map(module, class, files)?;
        let layout = CartridgeLayout::new(self.cartridges_dir, &module.id);
        let output_dir = layout.output_dir(class);

        let mut plugins = PluginRegistry::new();
        plugins.add(PluginStep::clean_output(&output_dir));
        if class == AssetClass::Style {
            plugins.add(PluginStep::ExtractCss);
            plugins.add(PluginStep::extract_cleanup());
        }

        Ok(Some(BundleDescriptor {
            name: format!("{}:{}", module.id, class),
            cartridge: module.id.clone(),
            asset_class: class,
            mode: self.mode,
            devtool: SourceMapMode::for_mode(self.mode),
            entry,
            output: OutputConfig {
                path: output_dir,
                filename: OUTPUT_FILENAME.to_string(),
            },
            resolve: ResolveConfig {
                alias: aliases.clone(),
            },
            module: ProcessingPipeline::for_class(class),
            plugins,
            optimization: Optimization {
                minimize: self.mode.is_production(),
                minimizer: vec![Minimizer::for_class(class)],
            },
        }))
    }
}

fn entry_map(
    module: &Module,
    class: AssetClass,
    files: &[SourceFile],
) -> Result<BTreeMap<EntryKey, PathBuf>> {
    let mut entry = BTreeMap::new();
    for file in files {
        let key = derive_key(&file.variant, &file.relative_path, class);
        match entry.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(file.path.clone());
            }
            Entry::Occupied(slot) => {
                return Err(Error::EntryKeyCollision {
                    cartridge: module.id.clone(),
                    class,
                    key: slot.key().clone(),
                    first: slot.get().clone(),
                    second: file.path.clone(),
                });
            }
        }
    }
    Ok(entry)
}
