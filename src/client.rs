//! HTTP client for the inventory platform.
//!
//! The platform exposes its data as tables queried with POST requests: the
//! body names the wanted columns, a filter predicate, and the snapshot the
//! query is pinned to. This client wraps the two tables a backup run needs,
//! the device inventory and the stored configuration archive, behind typed
//! methods. Pagination and retries are whatever `reqwest` does; there is no
//! logic here beyond request building and row projection.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::Deserialize;
use serde_json::{json, Value};
use url::Url;

use crate::config::Settings;
use crate::error::{Error, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const TOKEN_HEADER: &str = "X-API-Token";

/// A device row projected from the inventory table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Device {
    /// Serial number, unique and assigned by the platform.
    pub sn: String,
    /// Display name; may contain characters unsafe for filenames.
    pub hostname: String,
}

/// Envelope every table query answers with.
#[derive(Debug, Deserialize)]
struct TableResponse<T> {
    data: Vec<T>,
}

/// Row of the configuration archive table; the hash identifies one stored
/// configuration for download.
#[derive(Debug, Deserialize)]
struct ConfigRecord {
    hash: String,
}

/// Authenticated handle to the inventory platform.
#[derive(Debug)]
pub struct InventoryClient {
    http: Client,
    base_url: Url,
    snapshot: String,
}

impl InventoryClient {
    /// Build a client from the run's settings.
    ///
    /// The token goes into a default header so every request carries it;
    /// TLS verification is off unless the settings enable it, matching the
    /// self-signed certificates most platform deployments ship with.
    pub fn new(settings: &Settings) -> Result<Self> {
        let base_url = parse_base_url(&settings.base_url)?;

        let mut token = HeaderValue::from_str(&settings.token).map_err(|_| Error::Config {
            message: format!("{} contains characters not allowed in an HTTP header", crate::config::ENV_TOKEN),
        })?;
        token.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(TOKEN_HEADER, token);

        let http = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .danger_accept_invalid_certs(!settings.verify_tls)
            .build()
            .map_err(|e| Error::Http {
                url: settings.base_url.clone(),
                message: e.to_string(),
            })?;

        Ok(Self {
            http,
            base_url,
            snapshot: settings.snapshot.clone(),
        })
    }

    /// List devices matching the filter, projected to `{sn, hostname}`.
    pub fn devices(&self, filter: &Value) -> Result<Vec<Device>> {
        let url = self.endpoint("api/v1/tables/inventory/devices")?;
        let body = json!({
            "columns": ["sn", "hostname"],
            "filters": filter,
            "snapshot": self.snapshot,
        });
        self.post_table(url, &body)
    }

    /// Fetch the latest stored configuration text for a serial number.
    ///
    /// Two requests: look up the most recent archive record for the serial,
    /// then download its text by hash. `Ok(None)` when the platform has no
    /// configuration for the device.
    pub fn configuration(&self, sn: &str, sanitized: bool) -> Result<Option<String>> {
        let url = self.endpoint("api/v1/tables/management/configuration")?;
        let body = json!({
            "columns": ["hash"],
            "filters": { "sn": ["eq", sn] },
            "sort": { "column": "lastChange", "order": "desc" },
        });
        let records: Vec<ConfigRecord> = self.post_table(url, &body)?;
        let Some(record) = records.into_iter().next() else {
            return Ok(None);
        };

        let url = self.endpoint("api/v1/tables/management/configuration/download")?;
        let response = self
            .http
            .get(url.clone())
            .query(&[
                ("hash", record.hash.as_str()),
                ("sanitized", if sanitized { "true" } else { "false" }),
            ])
            .send()
            .map_err(|e| Error::Http {
                url: url.to_string(),
                message: e.to_string(),
            })?;
        if !response.status().is_success() {
            return Err(Error::Api {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }
        let text = response.text().map_err(|e| Error::Http {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        Ok(Some(text))
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    fn post_table<T>(&self, url: Url, body: &Value) -> Result<Vec<T>>
    where
        T: for<'de> Deserialize<'de>,
    {
        let response = self
            .http
            .post(url.clone())
            .json(body)
            .send()
            .map_err(|e| Error::Http {
                url: url.to_string(),
                message: e.to_string(),
            })?;
        if !response.status().is_success() {
            return Err(Error::Api {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }
        let table: TableResponse<T> = response.json().map_err(|e| Error::Http {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        Ok(table.data)
    }
}

/// Parse the base URL, normalizing it to end with `/` so endpoint paths
/// append instead of replacing the last segment.
fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw)?;
    if !url.path().ends_with('/') {
        url.set_path(&format!("{}/", url.path()));
    }
    Ok(url)
}
