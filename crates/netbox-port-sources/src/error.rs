//! Error types for the port data sources.
//!
//! Every variant is terminal for the read it occurs in; nothing is retried
//! and no partial output is published.

use crate::schema::Diagnostic;
use netbox_client::NetBoxError;
use thiserror::Error;

/// Errors that can occur while reading a port data source.
#[derive(Debug, Error)]
pub enum DataSourceError {
    /// A filter entry names a parameter the list endpoint does not accept.
    #[error("'{0}' is not a supported filter parameter")]
    UnsupportedFilter(String),

    /// The NetBox call failed. Displayed exactly as the client reported it.
    #[error(transparent)]
    Transport(#[from] NetBoxError),

    /// NetBox answered but reported zero matching records.
    #[error("no result")]
    EmptyResult,

    /// `name_regex` is not a valid regular expression.
    #[error("invalid name_regex {pattern:?}: {source}")]
    InvalidPattern {
        /// The pattern as configured.
        pattern: String,
        /// Why it failed to compile.
        #[source]
        source: regex::Error,
    },

    /// The data source configuration does not match its schema.
    #[error("Invalid data source configuration: {message}")]
    InvalidConfig {
        /// Attribute the bad value was found under, if known.
        attribute: Option<&'static str>,
        /// What was wrong with it.
        message: String,
    },

    /// No data source is registered under this type name.
    #[error("Unknown data source type: {0}")]
    UnknownDataSource(String),

    /// Projected state could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DataSourceError {
    /// Attribute path the error is attached to, if it stems from one input.
    pub fn attribute(&self) -> Option<&'static str> {
        match self {
            Self::UnsupportedFilter(_) => Some("filter"),
            Self::InvalidPattern { .. } => Some("name_regex"),
            Self::InvalidConfig { attribute, .. } => *attribute,
            _ => None,
        }
    }

    /// Render the error as an error diagnostic for the host.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.to_string());
        match self.attribute() {
            Some(attribute) => diagnostic.with_attribute(attribute),
            None => diagnostic,
        }
    }
}

/// Errors raised while resolving provider configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required setting was neither configured nor set in the environment.
    #[error("Missing required setting '{setting}' (or environment variable {env})")]
    Missing {
        /// Configuration key.
        setting: &'static str,
        /// Environment variable consulted as a fallback.
        env: &'static str,
    },

    /// `server_url` is not an http(s) URL.
    #[error("Invalid server_url '{0}': must start with http:// or https://")]
    InvalidUrl(String),

    /// `request_timeout` must be at least one second.
    #[error("Invalid request_timeout: must be greater than zero")]
    InvalidTimeout,

    /// The configuration JSON has the wrong shape.
    #[error("Invalid provider configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The HTTP client could not be built.
    #[error("Failed to build NetBox client: {0}")]
    Client(#[from] NetBoxError),
}
