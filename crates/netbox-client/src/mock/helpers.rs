//! Helper functions for creating nested NetBox model types

use crate::models::*;

/// Helper functions for creating nested types in mock implementations
pub struct Helpers {
    base_url: String,
}

impl Helpers {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    /// Helper to create NestedDevice
    pub fn create_nested_device(&self, id: u64, name: Option<String>) -> NestedDevice {
        let name_str = name.unwrap_or_else(|| format!("Device {}", id));
        NestedDevice {
            id,
            url: format!("{}/api/dcim/devices/{}/", self.base_url, id),
            display: name_str.clone(),
            name: Some(name_str),
        }
    }

    /// Helper to create NestedTag
    pub fn create_nested_tag(&self, id: u64, name: Option<String>) -> NestedTag {
        let name_str = name.unwrap_or_else(|| format!("Tag {}", id));
        NestedTag {
            id,
            url: format!("{}/api/extras/tags/{}/", self.base_url, id),
            display: name_str.clone(),
            name: name_str.clone(),
            slug: name_str.to_lowercase().replace(' ', "-"),
        }
    }

    /// Helper to create a bare FrontPort
    pub fn front_port(&self, id: u64, device_id: u64, name: Option<&str>) -> FrontPort {
        FrontPort {
            id,
            url: format!("{}/api/dcim/front-ports/{}/", self.base_url, id),
            display: name.unwrap_or_default().to_string(),
            device: self.create_nested_device(device_id, None),
            name: name.map(str::to_string),
            label: String::new(),
            port_type: None,
            rear_port: None,
            rear_port_position: None,
            description: String::new(),
            mark_connected: false,
            occupied: false,
            tags: Vec::new(),
        }
    }

    /// Helper to create a bare RearPort
    pub fn rear_port(&self, id: u64, device_id: u64, name: Option<&str>) -> RearPort {
        RearPort {
            id,
            url: format!("{}/api/dcim/rear-ports/{}/", self.base_url, id),
            display: name.unwrap_or_default().to_string(),
            device: self.create_nested_device(device_id, None),
            name: name.map(str::to_string),
            label: String::new(),
            port_type: None,
            positions: 1,
            description: String::new(),
            mark_connected: false,
            occupied: false,
            tags: Vec::new(),
        }
    }
}
