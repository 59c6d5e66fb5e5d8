//! Mock NetBoxClient for unit testing
//!
//! This module provides a mock implementation of NetBoxClientTrait that can be used
//! in unit tests without requiring a running NetBox instance.
//!
//! The mock is organized into domain-specific modules:
//! - `dcim.rs` - DCIM operations (front ports, rear ports)
//! - `helpers.rs` - Helper functions for creating nested types

mod dcim;
mod helpers;

use crate::error::NetBoxError;
use crate::models::*;
use crate::netbox_trait::NetBoxClientTrait;
use crate::params::PortListParams;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A list request observed by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// Endpoint path relative to `/api/`, e.g. `dcim/front-ports`
    pub endpoint: &'static str,
    /// Parameters the request was made with
    pub params: PortListParams,
}

/// Mock NetBoxClient for testing
///
/// This mock stores ports in memory, in insertion order, and applies the
/// same `device_id` / `device` / `name` filters NetBox applies server-side.
#[derive(Debug, Clone)]
pub struct MockNetBoxClient {
    pub(crate) base_url: String,
    // In-memory storage for resources
    pub(crate) front_ports: Arc<Mutex<Vec<FrontPort>>>,
    pub(crate) rear_ports: Arc<Mutex<Vec<RearPort>>>,
    // Every list call, in order
    pub(crate) requests: Arc<Mutex<Vec<RecordedRequest>>>,
    // Error returned (once) by the next call
    pub(crate) fail_next: Arc<Mutex<Option<NetBoxError>>>,
}

impl MockNetBoxClient {
    /// Create a new mock client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            front_ports: Arc::new(Mutex::new(Vec::new())),
            rear_ports: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            fail_next: Arc::new(Mutex::new(None)),
        }
    }

    /// Add a front port to the mock store (for test setup)
    pub fn add_front_port(&self, port: FrontPort) {
        lock(&self.front_ports).push(port);
    }

    /// Add a rear port to the mock store (for test setup)
    pub fn add_rear_port(&self, port: RearPort) {
        lock(&self.rear_ports).push(port);
    }

    /// Make the next API call fail with `error`
    pub fn fail_next_with(&self, error: NetBoxError) {
        *lock(&self.fail_next) = Some(error);
    }

    /// Requests seen so far (for assertions)
    pub fn recorded_requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    /// Build a front port with NetBox-like defaults
    ///
    /// Description and label are empty, the port is unoccupied and untagged.
    pub fn new_front_port(&self, id: u64, device_id: u64, name: Option<&str>) -> FrontPort {
        self.helpers().front_port(id, device_id, name)
    }

    /// Build a rear port with NetBox-like defaults
    pub fn new_rear_port(&self, id: u64, device_id: u64, name: Option<&str>) -> RearPort {
        self.helpers().rear_port(id, device_id, name)
    }

    /// Build a tag reference
    pub fn new_tag(&self, id: u64) -> NestedTag {
        self.helpers().create_nested_tag(id, None)
    }

    /// Record a request and hand back a pending injected failure, if any
    pub(crate) fn record(
        &self,
        endpoint: &'static str,
        params: &PortListParams,
    ) -> Result<(), NetBoxError> {
        lock(&self.requests).push(RecordedRequest {
            endpoint,
            params: params.clone(),
        });
        match lock(&self.fail_next).take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// Get helpers instance
    pub(crate) fn helpers(&self) -> helpers::Helpers {
        helpers::Helpers::new(self.base_url.clone())
    }
}

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait::async_trait]
impl NetBoxClientTrait for MockNetBoxClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    // DCIM Operations - delegated to dcim module
    async fn list_front_ports(
        &self,
        params: &PortListParams,
    ) -> Result<PaginatedResponse<FrontPort>, NetBoxError> {
        dcim::list_front_ports(self, params).await
    }

    async fn list_rear_ports(
        &self,
        params: &PortListParams,
    ) -> Result<PaginatedResponse<RearPort>, NetBoxError> {
        dcim::list_rear_ports(self, params).await
    }
}
