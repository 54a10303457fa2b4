//! Top-level descriptor generation.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use cartpack_config::{
    AliasResolver, AliasTable, AssetClass, BuildMode, Manifest, Module, ModuleRegistry,
};
use tracing::{info, warn};

use crate::Result;
use crate::descriptor::{BundleDescriptor, DescriptorBuilder};
use crate::discovery::AssetDiscovery;
use crate::source::{AssetSource, FsAssetSource};
use crate::special::SpecialCaseInjector;

/// Inputs of one assembly run besides the cartridge list.
#[derive(Debug, Clone)]
pub struct AssemblyOptions {
    pub cartridges_dir: PathBuf,
    pub mode: BuildMode,
    pub aliases: BTreeMap<AssetClass, AliasTable>,
    pub static_mirrors: BTreeSet<String>,
}

impl AssemblyOptions {
    pub fn new(cartridges_dir: impl Into<PathBuf>) -> Self {
        Self {
            cartridges_dir: cartridges_dir.into(),
            mode: BuildMode::default(),
            aliases: BTreeMap::new(),
            static_mirrors: BTreeSet::new(),
        }
    }

    /// Read aliases and the mirror allow-list from `manifest`.
    pub fn from_manifest(manifest: &Manifest, mode: BuildMode) -> Result<Self> {
        let resolver = AliasResolver::new(manifest);
        let mut options = Self::new(manifest.cartridges_dir()).mode(mode);
        for class in AssetClass::ALL {
            options = options.aliases(class, resolver.resolve_aliases(class)?);
        }
        Ok(options.static_mirrors(manifest.static_mirrors()?))
    }

    pub fn mode(mut self, mode: BuildMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn aliases(mut self, class: AssetClass, table: AliasTable) -> Self {
        self.aliases.insert(class, table);
        self
    }

    pub fn static_mirrors(mut self, mirrors: impl IntoIterator<Item = String>) -> Self {
        self.static_mirrors = mirrors.into_iter().collect();
        self
    }
}

pub struct ConfigurationAssembler<'a> {
    source: &'a dyn AssetSource,
    options: AssemblyOptions,
    injector: SpecialCaseInjector,
    no_aliases: AliasTable,
}

impl<'a> ConfigurationAssembler<'a> {
    pub fn new(source: &'a dyn AssetSource, options: AssemblyOptions) -> Self {
        let injector = SpecialCaseInjector::new(
            options.static_mirrors.clone(),
            options.cartridges_dir.clone(),
        );
        Self {
            source,
            options,
            injector,
            no_aliases: AliasTable::new(),
        }
    }

    /// Build every descriptor for `modules`.
    ///
    /// Order is cartridge order, scripts before styles within a cartridge.
    /// Pairs without sources are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Stops at the first `MissingModuleRoot` or `EntryKeyCollision`;
    /// no descriptors are returned in that case.
    pub fn assemble(&self, modules: &[Module]) -> Result<Vec<BundleDescriptor>> {
        let discovery = AssetDiscovery::new(self.source, &self.options.cartridges_dir);
        let builder = DescriptorBuilder::new(self.options.mode, &self.options.cartridges_dir);

        let mut descriptors = Vec::new();
        for module in modules {
            info!("Processing cartridge: {}", module.id);

            for class in AssetClass::ALL {
                let files = discovery.discover(module, class)?;
                let aliases = self.options.aliases.get(&class).unwrap_or(&self.no_aliases);

                match builder.build(module, class, &files, aliases)? {
                    Some(descriptor) => {
                        info!(
                            "{} bundle created for cartridge: {} ({} entries)",
                            class.label(),
                            module.id,
                            descriptor.entry.len()
                        );
                        descriptors.push(self.injector.inject(module, class, descriptor));
                    }
                    None => {
                        warn!(
                            "No {} files to compile for cartridge: {}",
                            class.label(),
                            module.id
                        );
                    }
                }
            }
        }

        Ok(descriptors)
    }
}

/// Generate descriptors for the project described by `manifest`, reading
/// the real filesystem.
///
/// Manifest errors surface before any directory is read.
pub fn generate(manifest: &Manifest, mode: BuildMode) -> Result<Vec<BundleDescriptor>> {
    let modules = ModuleRegistry::new(manifest).list_modules()?;
    let options = AssemblyOptions::from_manifest(manifest, mode)?;
    ConfigurationAssembler::new(&FsAssetSource, options).assemble(&modules)
}
