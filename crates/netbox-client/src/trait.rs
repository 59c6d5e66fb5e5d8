//! NetBoxClient trait for mocking
//!
//! This trait abstracts the NetBoxClient to enable mocking in unit tests.
//! The concrete NetBoxClient implements this trait, and tests can use mock implementations.

use crate::error::NetBoxError;
use crate::models::*;
use crate::params::PortListParams;

/// Trait for NetBox API client operations
///
/// This trait enables mocking of NetBox API calls for unit testing.
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait NetBoxClientTrait: Send + Sync {
    /// Get the base URL
    fn base_url(&self) -> &str;

    // DCIM Operations

    /// List front ports matching `params` (single request, first page only)
    async fn list_front_ports(
        &self,
        params: &PortListParams,
    ) -> Result<PaginatedResponse<FrontPort>, NetBoxError>;

    /// List rear ports matching `params` (single request, first page only)
    async fn list_rear_ports(
        &self,
        params: &PortListParams,
    ) -> Result<PaginatedResponse<RearPort>, NetBoxError>;
}
