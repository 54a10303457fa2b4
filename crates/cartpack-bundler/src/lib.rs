//! # cartpack-bundler
//!
//! Generates bundle descriptors for a storefront made of overlay cartridges.
//!
//! For every cartridge listed in the project manifest, and for each asset
//! class (scripts, then styles), the client sources are discovered, keyed and
//! turned into one self-contained descriptor that an external bundling engine
//! can execute. Nothing is compiled here.
//!
//! ## Quick Start
//!
//! ```no_run
//! use cartpack_bundler::{BuildMode, ManifestDiscovery, generate};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let manifest = ManifestDiscovery::new(".").load()?;
//! let descriptors = generate(&manifest, BuildMode::Production)?;
//! println!("{}", serde_json::to_string_pretty(&descriptors)?);
//! # Ok(()) }
//! ```
//!
//! ## Testing against an in-memory tree
//!
//! ```
//! use cartpack_bundler::{AssemblyOptions, ConfigurationAssembler, MemoryAssetSource, Module};
//!
//! let source = MemoryAssetSource::new()
//!     .with_file("/shop/cartridges/app_core/cartridge/client/default/js/main.js");
//! let assembler = ConfigurationAssembler::new(&source, AssemblyOptions::new("/shop/cartridges"));
//! let descriptors = assembler.assemble(&[Module::new("app_core", 0)]).unwrap();
//! assert_eq!(descriptors.len(), 1);
//! ```

use std::path::PathBuf;

pub mod assembler;
pub mod descriptor;
pub mod discovery;
pub mod entry;
pub mod layout;
pub mod pipeline;
pub mod plugins;
pub mod source;
pub mod special;

pub use assembler::{AssemblyOptions, ConfigurationAssembler, generate};
pub use descriptor::{
    BundleDescriptor, DescriptorBuilder, OutputConfig, ResolveConfig, SourceMapMode,
};
pub use discovery::{AssetDiscovery, SourceFile};
pub use entry::{EntryKey, derive_key};
pub use layout::CartridgeLayout;
pub use pipeline::{Loader, Minimizer, Optimization, ProcessingPipeline, Rule};
pub use plugins::{PluginPhase, PluginRegistry, PluginStep};
pub use source::{AssetSource, FsAssetSource, MemoryAssetSource};
pub use special::SpecialCaseInjector;

// Re-export manifest types so callers need a single dependency
pub use cartpack_config::{
    AliasResolver, AliasTable, AssetClass, BuildMode, ConfigError, Manifest, ManifestDiscovery,
    Module, ModuleRegistry,
};

pub type Result<T> = std::result::Result<T, Error>;

/// Error types for descriptor generation.
///
/// Every variant is fatal for the run; empty asset sets are not errors.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum Error {
    /// Cartridge has no client directory.
    #[error("cartridge '{cartridge}' has no client directory: {} does not exist", .path.display())]
    #[diagnostic(
        code(cartpack::missing_module_root),
        help("create the client directory or remove the cartridge from the manifest")
    )]
    MissingModuleRoot { cartridge: String, path: PathBuf },

    /// Two sources map to the same entry key in one descriptor.
    #[error(
        "entry key '{key}' of the {class} bundle for '{cartridge}' is derived from both {} and {}",
        .first.display(),
        .second.display()
    )]
    #[diagnostic(
        code(cartpack::entry_key_collision),
        help("rename one of the files; entry keys ignore the file extension")
    )]
    EntryKeyCollision {
        cartridge: String,
        class: AssetClass,
        key: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// Manifest is missing or malformed.
    #[error("invalid manifest: {0}")]
    #[diagnostic(code(cartpack::config))]
    Config(#[from] ConfigError),

    /// Source or variant name that is not valid UTF-8.
    #[error("{} is not valid UTF-8 and cannot be used as an entry", .path.display())]
    #[diagnostic(
        code(cartpack::non_utf8_path),
        help("rename the file or folder using UTF-8 characters")
    )]
    NonUtf8Path { path: PathBuf },

    /// Filesystem error while listing sources.
    #[error("failed to read {}: {source}", .path.display())]
    #[diagnostic(code(cartpack::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
