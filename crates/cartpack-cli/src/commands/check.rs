//! Check command implementation.
//!
//! Runs the whole assembly without emitting descriptors, so layout problems
//! surface before a bundling engine is involved.

use crate::cli::CheckArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::ui;
use cartpack_bundler::{AssemblyOptions, ConfigurationAssembler, FsAssetSource};
use cartpack_config::{ManifestDiscovery, ModuleRegistry};

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Locate and parse the manifest
/// 2. Validate the cartridge list and alias tables
/// 3. Discover sources for every cartridge and asset class
/// 4. Report one line per descriptor that would be generated
pub fn execute(args: CheckArgs) -> Result<()> {
    let settings = Settings::for_check(&args)?;

    ui::info("Checking manifest...");
    let manifest = ManifestDiscovery::new(&settings.root).load()?;
    if let Some(source) = manifest.source() {
        ui::success(&format!("Manifest: {}", source.display()));
    }

    let modules = ModuleRegistry::new(&manifest).list_modules()?;
    ui::success(&format!("{} cartridge(s) listed", modules.len()));

    ui::info("Checking cartridges...");
    let options = AssemblyOptions::from_manifest(&manifest, settings.mode)?;
    let source = FsAssetSource;
    let descriptors = ConfigurationAssembler::new(&source, options).assemble(&modules)?;

    for descriptor in &descriptors {
        ui::success(&format!(
            "  {} ({} entries, plugins: {})",
            descriptor.name,
            descriptor.entry.len(),
            descriptor.plugins.names().join(", ")
        ));
    }

    if descriptors.is_empty() {
        ui::warning("No sources found in any cartridge");
    } else {
        ui::success("All cartridges are valid!");
    }
    Ok(())
}
