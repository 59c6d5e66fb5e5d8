//! NetBox REST API Client
//!
//! A Rust client library for interacting with the NetBox REST API.
//! Provides type-safe models and methods for the DCIM device-port endpoints.
//!
//! # Example
//!
//! ```no_run
//! use netbox_client::{NetBoxClient, PortListParams, PortRecord};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a client
//! let client = NetBoxClient::new(
//!     "http://netbox:80".to_string(),
//!     "your-api-token".to_string(),
//! )?;
//!
//! // List the front ports of one device
//! let params = PortListParams {
//!     device: Some("sw1".to_string()),
//!     ..Default::default()
//! };
//! let page = client.list_front_ports(&params).await?;
//! for port in &page.results {
//!     println!("{} {:?}", port.id(), port.name());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **DCIM Operations**: List front ports and rear ports by device or name
//! - **Mocking**: `MockNetBoxClient` behind the `test-util` feature

pub mod client;
pub mod common;
pub mod error;
pub mod models;
pub mod params;
#[path = "trait.rs"]
pub mod netbox_trait;
#[cfg(any(test, feature = "test-util"))]
pub mod mock;

pub use client::NetBoxClient;
pub use common::{HttpClient, PaginatedResponse};
pub use error::NetBoxError;
pub use models::*;
pub use netbox_trait::NetBoxClientTrait;
pub use params::PortListParams;
#[cfg(any(test, feature = "test-util"))]
pub use mock::{MockNetBoxClient, RecordedRequest};
