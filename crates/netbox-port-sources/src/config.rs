//! Provider and data source configuration.
//!
//! Provider settings come from the host's JSON configuration, falling back to
//! environment variables:
//!
//! | setting                | environment                              | default |
//! |------------------------|------------------------------------------|---------|
//! | `server_url`           | `NETBOX_SERVER_URL`, then `NETBOX_URL`   |         |
//! | `api_token`            | `NETBOX_API_TOKEN`, then `NETBOX_TOKEN`  |         |
//! | `request_timeout`      | `NETBOX_REQUEST_TIMEOUT`                 | 30      |
//! | `allow_insecure_https` | `NETBOX_ALLOW_INSECURE_HTTPS`            | false   |

use crate::error::{ConfigError, DataSourceError};
use crate::filter::FilterEntry;
use netbox_client::NetBoxClient;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::time::Duration;

/// Default per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Resolved provider configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// NetBox base URL.
    pub server_url: String,
    /// NetBox API token.
    pub api_token: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Skip TLS certificate verification.
    pub allow_insecure_https: bool,
}

#[derive(Debug, Default, Deserialize)]
struct RawProviderConfig {
    server_url: Option<String>,
    api_token: Option<String>,
    request_timeout: Option<u64>,
    allow_insecure_https: Option<bool>,
}

impl ProviderConfig {
    /// Resolve from the host's JSON config, with environment fallbacks.
    pub fn from_value(config: Value) -> Result<Self, ConfigError> {
        Self::resolve(config, |key| std::env::var(key).ok())
    }

    /// Resolve with an explicit environment lookup.
    pub fn resolve(
        config: Value,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let raw: RawProviderConfig = if config.is_null() {
            RawProviderConfig::default()
        } else {
            serde_json::from_value(config)?
        };

        let lookup = |keys: &[&str]| keys.iter().find_map(|k| env(k).filter(|v| !v.is_empty()));

        let server_url = raw
            .server_url
            .filter(|v| !v.is_empty())
            .or_else(|| lookup(&["NETBOX_SERVER_URL", "NETBOX_URL"]))
            .ok_or(ConfigError::Missing {
                setting: "server_url",
                env: "NETBOX_SERVER_URL",
            })?;

        let api_token = raw
            .api_token
            .filter(|v| !v.is_empty())
            .or_else(|| lookup(&["NETBOX_API_TOKEN", "NETBOX_TOKEN"]))
            .ok_or(ConfigError::Missing {
                setting: "api_token",
                env: "NETBOX_API_TOKEN",
            })?;

        let request_timeout_secs = match raw.request_timeout {
            Some(secs) => secs,
            None => match lookup(&["NETBOX_REQUEST_TIMEOUT"]) {
                Some(v) => v.parse().map_err(|_| ConfigError::InvalidTimeout)?,
                None => DEFAULT_REQUEST_TIMEOUT_SECS,
            },
        };

        let allow_insecure_https = raw.allow_insecure_https.unwrap_or_else(|| {
            lookup(&["NETBOX_ALLOW_INSECURE_HTTPS"])
                .is_some_and(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        });

        let config = Self {
            server_url,
            api_token,
            request_timeout_secs,
            allow_insecure_https,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check invariants the HTTP client relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.server_url.starts_with("http://") || self.server_url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl(self.server_url.clone()));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }
        Ok(())
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Build the NetBox client described by this configuration.
    pub fn build_client(&self) -> Result<NetBoxClient, ConfigError> {
        Ok(NetBoxClient::with_options(
            self.server_url.clone(),
            self.api_token.clone(),
            self.timeout(),
            self.allow_insecure_https,
        )?)
    }
}

/// Inputs of a port data source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DataSourceConfig {
    /// `filter` blocks, as a set.
    pub filter: BTreeSet<FilterEntry>,
    /// Optional `name_regex`.
    pub name_regex: Option<String>,
}

impl DataSourceConfig {
    /// Parse the host's config object. Unknown keys (such as computed outputs
    /// echoed back by the host) are ignored.
    ///
    /// Shape errors name the attribute they come from.
    pub fn from_value(config: Value) -> Result<Self, DataSourceError> {
        let mut object = match config {
            Value::Null => return Ok(Self::default()),
            Value::Object(object) => object,
            other => {
                return Err(DataSourceError::InvalidConfig {
                    attribute: None,
                    message: format!("expected an object, found {other}"),
                });
            }
        };

        Ok(Self {
            filter: field(&mut object, "filter")?,
            name_regex: field(&mut object, "name_regex")?,
        })
    }

    /// `filter` as it appears in state: `null` when empty.
    pub fn filter_value(&self) -> Result<Value, serde_json::Error> {
        if self.filter.is_empty() {
            Ok(Value::Null)
        } else {
            serde_json::to_value(&self.filter)
        }
    }
}

/// Take `key` out of `object`; missing and `null` both mean the default.
fn field<T: DeserializeOwned + Default>(
    object: &mut Map<String, Value>,
    key: &'static str,
) -> Result<T, DataSourceError> {
    match object.remove(key) {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) => {
            serde_json::from_value(value).map_err(|e| DataSourceError::InvalidConfig {
                attribute: Some(key),
                message: format!("{key}: {e}"),
            })
        }
    }
}
