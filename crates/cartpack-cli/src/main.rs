//! cartpack CLI - bundle descriptors for cartridge-based storefronts.
//!
//! Parses arguments, initializes logging and dispatches the command. This is
//! the only place that turns a failure into a non-zero exit status.

use cartpack_cli::{cli, commands, error, logger, ui};
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Generate(generate_args) => commands::generate_execute(generate_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
    };

    // Diagnostics go to stderr and the process exits with status 1
    result.map_err(error::cli_error_to_miette)
}
