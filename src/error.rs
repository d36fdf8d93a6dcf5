//! # Error Handling
//!
//! Centralized error type for the backup pipeline, built with `thiserror`.
//! Each variant corresponds to one failure mode of a run:
//!
//! - Missing or malformed environment configuration.
//! - An inventory filter that is not valid JSON (the raw text is kept so
//!   the diagnostic can echo exactly what was rejected).
//! - Transport and HTTP-status failures against the inventory platform.
//! - Failures of the system `git` binary, with the command and its stderr.
//! - I/O, JSON, and URL parsing errors wrapped from their source crates.
//!
//! Almost every error is fatal to the run; the one deliberate exception is
//! a per-device configuration fetch failure, which the backup loop logs and
//! skips (see `commands::backup` in the binary).

use thiserror::Error;

/// Main error type for backup operations
#[derive(Error, Debug)]
pub enum Error {
    /// The environment does not describe a usable inventory connection.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The inventory filter could not be parsed as JSON.
    ///
    /// Carries the offending text so the user sees exactly what was rejected.
    #[error("Inventory filter is not valid JSON: {message}\n'{raw}'")]
    FilterParse { message: String, raw: String },

    /// A request to the inventory platform failed at the transport level.
    #[error("Request to {url} failed: {message}")]
    Http { url: String, message: String },

    /// The inventory platform answered with a non-success HTTP status.
    #[error("Inventory platform returned HTTP {status} for {url}")]
    Api { url: String, status: u16 },

    /// A `git` invocation failed.
    #[error("Git command failed: git {command} - {stderr}")]
    GitCommand { command: String, stderr: String },

    /// The rotating file logger could not be started.
    #[error("Logger setup failed: {message}")]
    Logging { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON error, wrapped from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A URL parsing error, wrapped from `url::ParseError`.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
