//! CLI module for Deskpaper.
//!
//! Parses the command line, installs logging, and dispatches to the command
//! handlers. All wallpaper calls happen on the calling (main) thread.

mod commands;
mod output;

use clap::Parser;
pub use commands::Cli;

use crate::error::DeskpaperError;
use crate::logging;

/// Runs the CLI.
///
/// Parses command-line arguments and executes the appropriate command.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn run() -> Result<(), DeskpaperError> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    cli.execute()
}
