//! NetBox API client
//!
//! Implements the NetBox REST API client for DCIM port lookups.
//! Based on NetBox API structure: /api/dcim/front-ports/ and /api/dcim/rear-ports/

use crate::common::query::list_page;
use crate::common::HttpClient;
use crate::error::NetBoxError;
use crate::models::*;
use crate::netbox_trait::NetBoxClientTrait;
use crate::params::PortListParams;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Default request timeout applied by [`NetBoxClient::new`]
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const FRONT_PORTS_ENDPOINT: &str = "dcim/front-ports";
const REAR_PORTS_ENDPOINT: &str = "dcim/rear-ports";

/// NetBox API client
#[derive(Debug, Clone)]
pub struct NetBoxClient {
    http: HttpClient,
}

impl NetBoxClient {
    /// Create a new NetBox client
    ///
    /// # Arguments
    /// * `base_url` - NetBox base URL (e.g., "http://netbox:80")
    /// * `token` - API token for authentication
    pub fn new(base_url: String, token: String) -> Result<Self, NetBoxError> {
        Self::with_options(base_url, token, DEFAULT_TIMEOUT, false)
    }

    /// Create a new NetBox client with explicit transport options
    ///
    /// # Arguments
    /// * `base_url` - NetBox base URL
    /// * `token` - API token for authentication
    /// * `timeout` - Per-request timeout
    /// * `allow_insecure_https` - Skip TLS certificate verification
    pub fn with_options(
        base_url: String,
        token: String,
        timeout: Duration,
        allow_insecure_https: bool,
    ) -> Result<Self, NetBoxError> {
        let client = Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(allow_insecure_https)
            .build()
            .map_err(NetBoxError::Http)?;

        Ok(Self {
            http: HttpClient::new(client, base_url, token),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// List front ports
    ///
    /// # Arguments
    /// * `params` - Query filters (`device_id`, `device`, `name`)
    ///
    /// # Returns
    /// * `Ok(PaginatedResponse<FrontPort>)` - Total count and first page of results
    /// * `Err(NetBoxError)` - If the request fails
    pub async fn list_front_ports(
        &self,
        params: &PortListParams,
    ) -> Result<PaginatedResponse<FrontPort>, NetBoxError> {
        debug!("Listing front ports with filters: {:?}", params);
        list_page(&self.http, FRONT_PORTS_ENDPOINT, &params.to_query()).await
    }

    /// List rear ports
    ///
    /// # Arguments
    /// * `params` - Query filters (`device_id`, `device`, `name`)
    ///
    /// # Returns
    /// * `Ok(PaginatedResponse<RearPort>)` - Total count and first page of results
    /// * `Err(NetBoxError)` - If the request fails
    pub async fn list_rear_ports(
        &self,
        params: &PortListParams,
    ) -> Result<PaginatedResponse<RearPort>, NetBoxError> {
        debug!("Listing rear ports with filters: {:?}", params);
        list_page(&self.http, REAR_PORTS_ENDPOINT, &params.to_query()).await
    }
}

// Implement NetBoxClientTrait for NetBoxClient
// This delegates all trait methods to the existing implementations
#[async_trait::async_trait]
impl NetBoxClientTrait for NetBoxClient {
    fn base_url(&self) -> &str {
        self.base_url()
    }

    async fn list_front_ports(
        &self,
        params: &PortListParams,
    ) -> Result<PaginatedResponse<FrontPort>, NetBoxError> {
        self.list_front_ports(params).await
    }

    async fn list_rear_ports(
        &self,
        params: &PortListParams,
    ) -> Result<PaginatedResponse<RearPort>, NetBoxError> {
        self.list_rear_ports(params).await
    }
}
