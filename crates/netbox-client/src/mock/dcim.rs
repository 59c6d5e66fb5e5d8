//! DCIM operations for MockNetBoxClient
//!
//! Handles front ports and rear ports

use super::{lock, MockNetBoxClient};
use crate::error::NetBoxError;
use crate::models::*;
use crate::params::PortListParams;

pub async fn list_front_ports(
    client: &MockNetBoxClient,
    params: &PortListParams,
) -> Result<PaginatedResponse<FrontPort>, NetBoxError> {
    client.record("dcim/front-ports", params)?;
    let ports = lock(&client.front_ports);
    Ok(page(ports.iter().filter(|p| matches(*p, &p.device, params)).cloned().collect()))
}

pub async fn list_rear_ports(
    client: &MockNetBoxClient,
    params: &PortListParams,
) -> Result<PaginatedResponse<RearPort>, NetBoxError> {
    client.record("dcim/rear-ports", params)?;
    let ports = lock(&client.rear_ports);
    Ok(page(ports.iter().filter(|p| matches(*p, &p.device, params)).cloned().collect()))
}

/// Server-side filter semantics: every set parameter must match exactly
fn matches<P: PortRecord>(port: &P, device: &NestedDevice, params: &PortListParams) -> bool {
    let device_id_ok = params
        .device_id
        .as_deref()
        .is_none_or(|id| id == device.id.to_string());
    let device_ok = params
        .device
        .as_deref()
        .is_none_or(|name| device.name.as_deref() == Some(name));
    let name_ok = params
        .name
        .as_deref()
        .is_none_or(|name| port.name() == Some(name));
    device_id_ok && device_ok && name_ok
}

fn page<T>(results: Vec<T>) -> PaginatedResponse<T> {
    PaginatedResponse {
        count: results.len() as u64,
        next: None,
        previous: None,
        results,
    }
}
