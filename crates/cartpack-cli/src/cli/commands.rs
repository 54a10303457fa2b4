use cartpack_config::BuildMode;
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available cartpack subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate bundle descriptors
    ///
    /// Walks every cartridge in manifest order and prints one descriptor per
    /// cartridge and asset class that has sources. Fails without output if a
    /// cartridge has no client directory.
    Generate(GenerateArgs),

    /// Validate the manifest and cartridge layout
    ///
    /// Runs discovery for every cartridge and reports what would be built,
    /// without printing descriptors.
    Check(CheckArgs),
}

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Project root containing the manifest and the cartridges directory
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Production build: no source maps, minimized output
    #[arg(long, conflicts_with = "mode")]
    pub production: bool,

    /// Build mode (development, production)
    #[arg(long, value_name = "MODE")]
    pub mode: Option<BuildMode>,

    /// Write descriptors to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Project root containing the manifest and the cartridges directory
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}
