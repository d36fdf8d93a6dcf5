//! # Config Backup CLI
//!
//! Binary entry point for the `config-backup` command-line tool.
//!
//! Its responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Starting the rotating file logger.
//! - Running the backup pipeline and translating top-level errors into
//!   user-friendly output with a nonzero exit code.
//!
//! The pipeline stages live in the `config_backup` library crate; the
//! binary is a thin wrapper around them.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
