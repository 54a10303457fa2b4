//! Error handling for the cartpack CLI.
//!
//! `CliError` wraps the library errors of `cartpack-config` and
//! `cartpack-bundler` and adds the failures that only exist at the command
//! line: unreadable settings and unwritable output.
//!
//! # Example
//!
//! ```rust,no_run
//! use cartpack_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn write_descriptors(path: &Path, json: &str) -> Result<()> {
//!     std::fs::write(path, json).with_path(path)
//! }
//! ```

mod report;

use cartpack_config::ConfigError;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use report::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Manifest or cartridge list problems
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Discovery or descriptor assembly failures
    #[error(transparent)]
    Bundle(#[from] cartpack_bundler::Error),

    /// Settings could not be merged from environment and flags
    #[error("Invalid settings: {message}\n\nHint: {hint}")]
    Settings {
        /// What figment reported
        message: String,
        /// Helpful hint for fixing the settings
        hint: String,
    },

    /// Writing the descriptor file failed
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        /// Output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// I/O errors without a known path
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Descriptor serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for attaching a path to I/O failures.
pub trait ResultExt<T> {
    /// Report an I/O failure as a write failure on `path`.
    fn with_path(self, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|source| CliError::Write {
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}
