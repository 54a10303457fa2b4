//! Command implementations for the cartpack CLI.
//!
//! - [`generate`] - Emit bundle descriptors as JSON
//! - [`check`] - Validate the manifest and cartridge layout
//!
//! Each command provides an `execute` function that takes the parsed
//! arguments and returns a Result.

pub mod check;
pub mod generate;

pub use check::execute as check_execute;
pub use generate::execute as generate_execute;
