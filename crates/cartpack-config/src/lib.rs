//! Project manifest handling for cartpack.
//!
//! The manifest names the cartridges taking part in a build, the per-class
//! import aliases, and the cartridges that need static mirroring. Everything in
//! this crate is read once per run; nothing is cached between invocations.

pub mod alias;
pub mod asset;
pub mod discovery;
pub mod error;
pub mod manifest;
pub mod mode;
pub mod registry;

pub use alias::{AliasResolver, AliasTable};
pub use asset::AssetClass;
pub use discovery::ManifestDiscovery;
pub use error::{ConfigError, Result};
pub use manifest::Manifest;
pub use mode::BuildMode;
pub use registry::{Module, ModuleRegistry};
