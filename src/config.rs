//! Runtime settings for the inventory connection.
//!
//! Everything the pipeline needs from the environment is read once at
//! startup into a [`Settings`] struct, which is then passed by reference to
//! each stage. No stage reads the environment on its own.

use std::env;

use crate::error::{Error, Result};

/// Base URL of the inventory platform (required).
pub const ENV_URL: &str = "INVENTORY_URL";
/// API access token (required).
pub const ENV_TOKEN: &str = "INVENTORY_TOKEN";
/// Snapshot identifier; defaults to the platform's most recent snapshot.
pub const ENV_SNAPSHOT: &str = "INVENTORY_SNAPSHOT";
/// Set to `true` or `1` to verify the platform's TLS certificate.
pub const ENV_VERIFY_TLS: &str = "INVENTORY_VERIFY_TLS";
/// JSON predicate narrowing which devices are backed up.
pub const ENV_FILTER: &str = "INVENTORY_FILTER";

const DEFAULT_SNAPSHOT: &str = "$last";
const DEFAULT_FILTER: &str = "{}";

/// Connection settings for one backup run.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base URL of the inventory platform.
    pub base_url: String,
    /// API access token, sent with every request.
    pub token: String,
    /// Snapshot identifier the inventory queries are pinned to.
    pub snapshot: String,
    /// Whether to verify the platform's TLS certificate.
    pub verify_tls: bool,
    /// Raw inventory filter text; validated by `filter::parse` before use.
    pub filter: String,
}

impl Settings {
    /// Load settings from the environment.
    ///
    /// `INVENTORY_URL` and `INVENTORY_TOKEN` are required; the remaining
    /// variables fall back to their defaults (`$last` snapshot, TLS
    /// verification off, empty `{}` filter).
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            base_url: required(ENV_URL)?,
            token: required(ENV_TOKEN)?,
            snapshot: env::var(ENV_SNAPSHOT).unwrap_or_else(|_| DEFAULT_SNAPSHOT.to_string()),
            verify_tls: flag(ENV_VERIFY_TLS),
            filter: env::var(ENV_FILTER).unwrap_or_else(|_| DEFAULT_FILTER.to_string()),
        })
    }
}

fn required(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::Config {
            message: format!("environment variable {} is not set", name),
        }),
    }
}

fn flag(name: &str) -> bool {
    env::var(name).is_ok_and(|v| v == "true" || v == "1")
}
