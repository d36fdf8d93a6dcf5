//! CLI argument parsing and dispatch

use anyhow::Result;
use clap::Parser;

use crate::commands;

/// Back up network device configurations into a git-tracked folder
#[derive(Parser, Debug)]
#[command(name = "config-backup")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    backup: commands::backup::BackupArgs,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

impl Cli {
    /// Start the logger, then run the backup pipeline.
    pub fn execute(self) -> Result<()> {
        // Handle must outlive the run; dropping it closes the file sink.
        let _logger = config_backup::logging::init(&self.log_level)?;

        commands::backup::execute(self.backup)
    }
}
