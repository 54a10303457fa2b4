use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Class of client asset a cartridge can contribute.
///
/// Each class owns the folder its sources live in (below a variant folder),
/// the folder its output is written to (below the cartridge's static root),
/// and the file extensions that count as entry points.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    Script,
    Style,
}

impl AssetClass {
    /// Emission order within one cartridge.
    pub const ALL: [AssetClass; 2] = [AssetClass::Script, AssetClass::Style];

    /// Folder holding sources of this class inside a variant folder.
    pub fn source_dir(self) -> &'static str {
        match self {
            AssetClass::Script => "js",
            AssetClass::Style => "scss",
        }
    }

    /// Folder receiving compiled output below the static root.
    pub fn output_dir(self) -> &'static str {
        match self {
            AssetClass::Script => "js",
            AssetClass::Style => "css",
        }
    }

    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            AssetClass::Script => &["js", "jsx"],
            AssetClass::Style => &["scss", "sass"],
        }
    }

    /// Manifest field holding the alias map for this class.
    pub fn alias_field(self) -> &'static str {
        match self {
            AssetClass::Script => "aliasJS",
            AssetClass::Style => "aliasCSS",
        }
    }

    /// Short label used in progress messages.
    pub fn label(self) -> &'static str {
        match self {
            AssetClass::Script => "JS",
            AssetClass::Style => "CSS",
        }
    }

    /// Whether `path` has one of this class's extensions.
    pub fn matches_extension(self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions().contains(&ext))
    }

    /// Whether a file is an includable fragment rather than an entry point.
    ///
    /// Only stylesheets have partials (`_mixins.scss`).
    pub fn is_partial(self, path: &Path) -> bool {
        self == AssetClass::Style
            && path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with('_'))
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetClass::Script => f.write_str("script"),
            AssetClass::Style => f.write_str("style"),
        }
    }
}
