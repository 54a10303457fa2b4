//! Command-line interface definition for cartpack.
//!
//! # Command Structure
//!
//! - `cartpack generate` - Emit bundle descriptors as JSON
//! - `cartpack check` - Validate the manifest and cartridge layout

mod commands;

use clap::Parser;

pub use commands::{CheckArgs, Command, GenerateArgs};

/// cartpack - bundle descriptors for cartridge-based storefronts
#[derive(Parser, Debug)]
#[command(
    name = "cartpack",
    version,
    about = "Generate bundle descriptors for cartridge-based storefronts",
    long_about = "cartpack reads the cartridge list from the project manifest, discovers the\n\
                  script and style sources of every cartridge, and prints one bundle\n\
                  descriptor per cartridge and asset class for a bundling engine to execute."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Shows every discovered source file and special-case decision.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
