//! Error types for manifest discovery and parsing.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("manifest not found in {}", .0.display())]
    NotFound(PathBuf),

    #[error("missing required field '{field}': {hint}")]
    MissingField { field: String, hint: String },

    #[error("invalid value for '{field}': {hint}")]
    InvalidValue { field: String, hint: String },

    #[error("unknown build mode: {0}")]
    UnknownMode(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    pub(crate) fn invalid(field: impl Into<String>, hint: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            field: field.into(),
            hint: hint.into(),
        }
    }

    /// Name of the manifest field the error refers to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            ConfigError::MissingField { field, .. } | ConfigError::InvalidValue { field, .. } => {
                Some(field)
            }
            _ => None,
        }
    }
}
