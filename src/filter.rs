//! Inventory filter validation.
//!
//! The filter arrives as raw text from the environment and is used verbatim
//! as the query predicate for the device inventory. It is validated here,
//! before any request is made, so a malformed filter never reaches the
//! platform.

use serde_json::Value;

use crate::error::{Error, Result};

/// Parse the raw filter text as JSON.
///
/// On failure the error carries both the parser diagnostic and the
/// offending text, and the run aborts with a nonzero exit.
pub fn parse(raw: &str) -> Result<Value> {
    serde_json::from_str(raw).map_err(|e| Error::FilterParse {
        message: e.to_string(),
        raw: raw.to_string(),
    })
}
