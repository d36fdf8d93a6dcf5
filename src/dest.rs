//! Destination folder handling: layout, filenames, persistence.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::client::Device;
use crate::error::Result;
use crate::git;

/// Ensure the destination folder exists and, unless disabled, is a git work
/// tree. Idempotent: an existing folder or repository is left untouched.
pub fn ensure_destination(dir: &Path, git_disabled: bool) -> Result<()> {
    if !dir.is_dir() {
        fs::create_dir_all(dir)?;
        info!("Directory `{}` has been created", dir.display());
    }
    if !git_disabled && !dir.join(".git").is_dir() {
        git::init(dir)?;
        info!("git: repository initialized in `{}`", dir.display());
    }
    Ok(())
}

/// Compute the backup filename for a device: `<hostname>--<sn>.txt`, with
/// every `/` replaced by `-` so the name stays a single path component.
///
/// Two devices can map to the same name; the later write wins.
pub fn backup_filename(hostname: &str, sn: &str) -> String {
    format!("{}--{}.txt", hostname.replace('/', "-"), sn.replace('/', "-"))
}

/// Write a device configuration verbatim, overwriting any previous backup
/// of the same device. Returns the path written.
pub fn write_config(dir: &Path, device: &Device, text: &str) -> Result<PathBuf> {
    let path = dir.join(backup_filename(&device.hostname, &device.sn));
    fs::write(&path, text)?;
    Ok(path)
}
