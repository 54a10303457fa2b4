//! Run settings with multi-source loading.
//!
//! Priority: CLI flags > `CARTPACK_*` environment variables > defaults.
//! The project manifest itself is read by `cartpack-config`; these settings
//! only decide where to look for it and how to emit the result.

mod loading;

use cartpack_config::BuildMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings for one cartpack run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Project root holding the manifest and `cartridges/`
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Build mode shared by every descriptor
    #[serde(default)]
    pub mode: BuildMode,

    /// Output file; stdout when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[serde(default)]
    pub pretty: bool,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root: default_root(),
            mode: BuildMode::default(),
            output: None,
            pretty: false,
        }
    }
}

/// Values given on the command line. Unset fields leave lower layers alone.
#[derive(Debug, Default, Serialize)]
pub(crate) struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<BuildMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretty: Option<bool>,
}
