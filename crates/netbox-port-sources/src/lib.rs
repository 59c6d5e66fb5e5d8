//! NetBox device port data sources
//!
//! Two read-only data sources, `netbox_device_front_ports` and
//! `netbox_device_rear_ports`, that list a device's ports from NetBox,
//! optionally narrow them by a name regular expression, and publish selected
//! fields as a list of attribute maps.
//!
//! Each read makes exactly one list request:
//!
//! ```text
//! filter ─► list params ─► NetBox list ─► name_regex ─► projection ─► state
//! ```
//!
//! # Example
//!
//! ```no_run
//! use netbox_port_sources::{PortProvider, ProviderConfig};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ProviderConfig::from_value(json!({
//!     "server_url": "https://netbox.example.com",
//!     "api_token": "0123456789abcdef",
//! }))?;
//! let provider = PortProvider::from_config(&config)?;
//!
//! let state = provider
//!     .read_data_source(
//!         "netbox_device_front_ports",
//!         json!({
//!             "filter": [{"name": "device_name", "value": "sw1"}],
//!             "name_regex": "^eth",
//!         }),
//!     )
//!     .await?;
//! println!("{}", state["front_ports"]);
//! # Ok(())
//! # }
//! ```
//!
//! # Behaviour worth knowing
//!
//! - Unsupported filter names fail the read before any request is made.
//! - A NetBox answer with `count == 0` is an error (`no result`), not an
//!   empty list. A `name_regex` that filters every port out is not.
//! - Only the first page of results is read.

#![warn(missing_docs)]

pub mod config;
pub mod data_source;
pub mod error;
pub mod filter;
pub mod logging;
pub mod name_filter;
pub mod projection;
pub mod provider;
pub mod schema;
pub mod state;

pub use config::{DataSourceConfig, ProviderConfig};
pub use data_source::{FrontPorts, PortKind, RearPorts};
pub use error::{ConfigError, DataSourceError};
pub use filter::{FilterEntry, FilterKind};
pub use logging::{init_logging, init_logging_with_default, try_init_logging};
pub use projection::{Projected, ProjectedPort};
pub use provider::{DataSourceType, PortProvider};
pub use schema::{Diagnostic, ProviderSchema, Schema};
pub use state::ReadState;
