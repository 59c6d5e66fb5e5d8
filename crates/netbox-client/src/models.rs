//! NetBox API models
//!
//! These models match the NetBox DCIM REST API serializers for device
//! components. See: netbox/dcim/api/serializers_/device_components.py

use serde::{Deserialize, Serialize};

/// NetBox API response wrapper (for paginated responses)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// Front port model matching NetBox FrontPortSerializer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FrontPort {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub device: NestedDevice,
    pub name: Option<String>,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type", default)]
    pub port_type: Option<PortType>,
    pub rear_port: Option<NestedRearPort>,
    #[serde(default)]
    pub rear_port_position: Option<u32>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub mark_connected: bool,
    // NetBox 3.3+ reports this as `_occupied`
    #[serde(rename = "_occupied", alias = "occupied", default)]
    pub occupied: bool,
    #[serde(default)]
    pub tags: Vec<NestedTag>,
}

/// Rear port model matching NetBox RearPortSerializer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RearPort {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub device: NestedDevice,
    pub name: Option<String>,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type", default)]
    pub port_type: Option<PortType>,
    #[serde(default = "default_positions")]
    pub positions: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub mark_connected: bool,
    #[serde(rename = "_occupied", alias = "occupied", default)]
    pub occupied: bool,
    #[serde(default)]
    pub tags: Vec<NestedTag>,
}

fn default_positions() -> u32 {
    1
}

/// Port type choice (`{"value": "8p8c", "label": "8P8C"}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortType {
    pub value: String,
    pub label: String,
}

// Nested serializers (simplified versions for references)

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NestedTag {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NestedDevice {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    // Unnamed devices are allowed in NetBox
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NestedRearPort {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    #[serde(default)]
    pub name: String,
}

/// Read access to the fields shared by front and rear ports.
pub trait PortRecord {
    /// NetBox object ID
    fn id(&self) -> u64;
    /// Port name, if NetBox returned one
    fn name(&self) -> Option<&str>;
    /// Free-form description (empty when unset)
    fn description(&self) -> &str;
    /// Whether a cable or connection is recorded against the port
    fn occupied(&self) -> bool;
    /// Physical label (empty when unset)
    fn label(&self) -> &str;
    /// ID of the device the port belongs to
    fn device_id(&self) -> u64;
    /// Tags attached to the port
    fn tags(&self) -> &[NestedTag];
}

macro_rules! impl_port_record {
    ($($ty:ty),+) => {
        $(
            impl PortRecord for $ty {
                fn id(&self) -> u64 {
                    self.id
                }

                fn name(&self) -> Option<&str> {
                    self.name.as_deref()
                }

                fn description(&self) -> &str {
                    &self.description
                }

                fn occupied(&self) -> bool {
                    self.occupied
                }

                fn label(&self) -> &str {
                    &self.label
                }

                fn device_id(&self) -> u64 {
                    self.device.id
                }

                fn tags(&self) -> &[NestedTag] {
                    &self.tags
                }
            }
        )+
    };
}

impl_port_record!(FrontPort, RearPort);
