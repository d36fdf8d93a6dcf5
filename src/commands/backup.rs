//! Backup run implementation
//!
//! One linear pass: settings → filter validation → client → destination
//! setup → inventory query → per-device fetch and persist → git commit.
//! Per-device fetch failures are logged and skipped; everything else
//! aborts the run.

use anyhow::Result;
use clap::Args;
use log::{error, info};
use std::path::PathBuf;

/// Arguments for the backup run
#[derive(Args, Debug)]
pub struct BackupArgs {
    /// Destination folder for the configuration files
    #[arg(short = 'f', long = "folder", value_name = "PATH")]
    pub folder: Option<PathBuf>,

    /// Disable git tracking of the destination folder
    #[arg(long)]
    pub no_git: bool,

    /// Ask the platform for sanitized configurations (secrets redacted)
    #[arg(short, long)]
    pub sanitized: bool,
}

/// Default destination: `backup` next to the executable, falling back to
/// `./backup` when the executable path cannot be resolved.
fn default_folder() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|d| d.join("backup")))
        .unwrap_or_else(|| PathBuf::from("backup"))
}

/// Execute the backup run
pub fn execute(args: BackupArgs) -> Result<()> {
    use chrono::Local;
    use config_backup::client::InventoryClient;
    use config_backup::config::Settings;
    use config_backup::git::{self, CommitOutcome};
    use config_backup::{dest, filter};

    info!("------------- starting backup run -------------");

    let settings = Settings::from_env()?;
    let predicate = filter::parse(&settings.filter)?;
    let client = InventoryClient::new(&settings)?;

    let destination = args.folder.unwrap_or_else(default_folder);
    dest::ensure_destination(&destination, args.no_git)?;

    let devices = client.devices(&predicate)?;
    info!("{} device(s) matched the inventory filter", devices.len());

    let mut saved = 0usize;
    let mut missing = 0usize;
    let mut failed = 0usize;
    for device in &devices {
        match client.configuration(&device.sn, args.sanitized) {
            Ok(Some(text)) => {
                dest::write_config(&destination, device, &text)?;
                info!("{} - configuration saved", device.hostname);
                saved += 1;
            }
            Ok(None) => {
                info!("{} - no configuration found on the platform", device.hostname);
                missing += 1;
            }
            // One unreachable device must not sink the rest of the run.
            Err(e) => {
                error!("{} - configuration fetch failed: {}", device.hostname, e);
                failed += 1;
            }
        }
    }

    if args.no_git {
        info!("git: tracking disabled, skipping commit");
    } else {
        git::stage_all(&destination)?;
        let message = format!("Backup {}", Local::now().format("%Y-%m-%d %H:%M"));
        match git::commit(&destination, &message)? {
            CommitOutcome::Committed { summary } => info!("git: {}", summary),
            CommitOutcome::NoChanges => info!("git: no changes to commit"),
        }
    }

    info!(
        "run complete: {} saved, {} without configuration, {} failed",
        saved, missing, failed
    );
    info!("-------------- end of backup run --------------");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    fn test_default_folder_is_named_backup() {
        let folder = default_folder();
        assert!(folder.ends_with("backup"));
    }

    #[test]
    #[serial]
    fn test_execute_without_environment_fails_fast() {
        for name in [
            config_backup::config::ENV_URL,
            config_backup::config::ENV_TOKEN,
        ] {
            env::remove_var(name);
        }

        let args = BackupArgs {
            folder: None,
            no_git: true,
            sanitized: false,
        };

        let result = execute(args);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Configuration error"));
    }

    #[test]
    #[serial]
    fn test_execute_rejects_invalid_filter_before_any_io() {
        let temp = tempfile::TempDir::new().unwrap();
        env::set_var(config_backup::config::ENV_URL, "http://127.0.0.1:9");
        env::set_var(config_backup::config::ENV_TOKEN, "tok");
        env::set_var(config_backup::config::ENV_FILTER, "{not json");

        let folder = temp.path().join("backup");
        let args = BackupArgs {
            folder: Some(folder.clone()),
            no_git: true,
            sanitized: false,
        };

        let result = execute(args);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not valid JSON"));
        // The run aborted before touching the destination.
        assert!(!folder.exists());

        env::remove_var(config_backup::config::ENV_FILTER);
    }
}
