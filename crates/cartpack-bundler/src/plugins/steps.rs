use std::path::{Path, PathBuf};

use serde::Serialize;

use super::PluginPhase;

/// Engine outputs for style entries that are script stubs, relative to the
/// style output directory.
const STYLE_STUB_PATTERNS: [&str; 2] = ["*/css/**/*.js", "*/css/**/*.js.map"];

/// A named step the bundling engine runs as part of one descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "plugin", rename_all = "kebab-case")]
pub enum PluginStep {
    /// Empty the output directory once before building.
    #[serde(rename_all = "camelCase")]
    Clean {
        clean_once_before_build_patterns: Vec<String>,
    },

    /// Extract compiled styles into standalone `.css` files.
    ExtractCss,

    /// Drop the script stubs the engine emits for style-only entries.
    ExtractCleanup { patterns: Vec<String> },

    /// Copy a directory verbatim, bypassing the processing pipeline.
    Mirror { from: PathBuf, to: PathBuf },
}

impl PluginStep {
    /// Clean step scoped to exactly `output_dir`.
    ///
    /// The pattern never reaches above the directory, so cartridges sharing a
    /// static root cannot wipe each other's output.
    pub fn clean_output(output_dir: &Path) -> Self {
        PluginStep::Clean {
            clean_once_before_build_patterns: vec![
                output_dir.join("*").to_string_lossy().into_owned(),
            ],
        }
    }

    pub fn extract_cleanup() -> Self {
        PluginStep::ExtractCleanup {
            patterns: STYLE_STUB_PATTERNS.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn phase(&self) -> PluginPhase {
        match self {
            PluginStep::Clean { .. } => PluginPhase::Clean,
            PluginStep::ExtractCss | PluginStep::ExtractCleanup { .. } => PluginPhase::Extract,
            PluginStep::Mirror { .. } => PluginPhase::Mirror,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PluginStep::Clean { .. } => "clean",
            PluginStep::ExtractCss => "extract-css",
            PluginStep::ExtractCleanup { .. } => "extract-cleanup",
            PluginStep::Mirror { .. } => "mirror",
        }
    }
}
