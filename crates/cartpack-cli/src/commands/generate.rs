//! Generate command implementation.

use crate::cli::GenerateArgs;
use crate::config::Settings;
use crate::error::{Result, ResultExt};
use crate::ui;
use cartpack_bundler::BundleDescriptor;
use cartpack_config::ManifestDiscovery;
use std::io::Write;
use std::path::Path;

/// Execute the generate command.
///
/// # Steps
///
/// 1. Merge settings from environment and flags
/// 2. Load the project manifest under the root
/// 3. Assemble descriptors for every cartridge
/// 4. Write the JSON array to stdout or the output file
///
/// Nothing is written when any cartridge fails.
pub fn execute(args: GenerateArgs) -> Result<()> {
    let settings = Settings::for_generate(&args)?;
    tracing::debug!(root = %settings.root.display(), mode = %settings.mode, "Loaded settings");

    let manifest = ManifestDiscovery::new(&settings.root).load()?;
    let descriptors = cartpack_bundler::generate(&manifest, settings.mode)?;
    let json = render(&descriptors, settings.pretty)?;

    match &settings.output {
        Some(path) => write_file(path, &json)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }

    ui::success(&format!(
        "{} bundle descriptor{} generated ({} mode)",
        descriptors.len(),
        if descriptors.len() == 1 { "" } else { "s" },
        settings.mode
    ));
    Ok(())
}

fn render(descriptors: &[BundleDescriptor], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(descriptors)?
    } else {
        serde_json::to_string(descriptors)?
    };
    Ok(json)
}

fn write_file(path: &Path, json: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_path(parent)?;
    }
    std::fs::write(path, format!("{json}\n")).with_path(path)?;
    tracing::info!("Descriptors written to {}", path.display());
    Ok(())
}
