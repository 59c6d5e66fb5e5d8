//! Request parameters for DCIM port list endpoints

/// Filters accepted by `/api/dcim/front-ports/` and `/api/dcim/rear-ports/`
///
/// Unset fields place no constraint on the query. Values are passed through
/// as strings, exactly as NetBox receives them on the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortListParams {
    /// `device_id` query parameter
    pub device_id: Option<String>,
    /// `device` query parameter (device name)
    pub device: Option<String>,
    /// `name` query parameter (exact port name)
    pub name: Option<String>,
}

impl PortListParams {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no filter is set
    pub fn is_empty(&self) -> bool {
        self.device_id.is_none() && self.device.is_none() && self.name.is_none()
    }

    /// Query-string pairs for the set fields, in a stable order
    pub fn to_query(&self) -> Vec<(&str, &str)> {
        [
            ("device_id", self.device_id.as_deref()),
            ("device", self.device.as_deref()),
            ("name", self.name.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
    }
}
