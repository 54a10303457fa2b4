//! cartpack CLI - bundle descriptors for cartridge-based storefronts.
//!
//! Exposes the descriptor generator from `cartpack-bundler` on the command
//! line.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions
//! - [`commands`] - `generate` and `check`
//! - [`config`] - Settings merged from defaults, environment and flags
//! - [`error`] - Error types and diagnostic conversion
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Coloured status messages
//!
//! # Example
//!
//! ```rust,no_run
//! use cartpack_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
