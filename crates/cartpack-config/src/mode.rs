//! Global build mode supplied by the invoking context.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Build mode shared by every descriptor of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Source maps on, no minimization (default)
    #[default]
    Development,
    /// No source maps, minimized output
    Production,
}

impl BuildMode {
    pub fn from_production_flag(production: bool) -> Self {
        if production {
            BuildMode::Production
        } else {
            BuildMode::Development
        }
    }

    pub fn is_production(self) -> bool {
        self == BuildMode::Production
    }

    /// Execution profile name understood by the bundling engine.
    pub fn as_str(self) -> &'static str {
        match self {
            BuildMode::Development => "development",
            BuildMode::Production => "production",
        }
    }
}

impl std::str::FromStr for BuildMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(BuildMode::Development),
            "production" | "prod" => Ok(BuildMode::Production),
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }
}

impl std::fmt::Display for BuildMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
