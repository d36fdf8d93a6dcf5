//! Rotating file logger.
//!
//! All stages log through the `log` facade; this module wires the facade to
//! a `backup*.log` sink under `logs/` that rotates at 1 MiB, gzips rotated
//! files and keeps a bounded history. INFO and above are mirrored to stderr
//! so interactive runs stay visible.

use flexi_logger::{Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming};

use crate::error::{Error, Result};

const LOG_DIRECTORY: &str = "logs";
const LOG_BASENAME: &str = "backup";
const ROTATE_BYTES: u64 = 1024 * 1024;
const KEEP_COMPRESSED: usize = 60;

/// Start the logger.
///
/// The returned handle must stay alive for the duration of the process;
/// dropping it flushes and closes the file sink.
pub fn init(level: &str) -> Result<LoggerHandle> {
    Logger::try_with_str(level)
        .map_err(|e| Error::Logging {
            message: e.to_string(),
        })?
        .log_to_file(
            FileSpec::default()
                .directory(LOG_DIRECTORY)
                .basename(LOG_BASENAME)
                .suppress_timestamp(),
        )
        .append()
        .rotate(
            Criterion::Size(ROTATE_BYTES),
            Naming::Timestamps,
            Cleanup::KeepCompressedFiles(KEEP_COMPRESSED),
        )
        .duplicate_to_stderr(Duplicate::Info)
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|e| Error::Logging {
            message: e.to_string(),
        })
}
