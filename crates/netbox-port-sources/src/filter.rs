//! Translation of `filter` blocks into NetBox list parameters.

use crate::error::DataSourceError;
use netbox_client::PortListParams;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// One `filter { name = ..., value = ... }` block.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FilterEntry {
    /// Filter name, one of [`FilterKind::ALL`].
    pub name: String,
    /// Value passed to NetBox as-is.
    pub value: String,
}

impl FilterEntry {
    /// Create a filter entry.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// The filter names the port list endpoints understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// `device_id`, sent as the `device_id` query parameter.
    DeviceId,
    /// `device_name`, sent as the `device` query parameter.
    DeviceName,
    /// `name`, sent as the `name` query parameter.
    Name,
}

impl FilterKind {
    /// Every supported filter kind.
    pub const ALL: [FilterKind; 3] = [Self::DeviceId, Self::DeviceName, Self::Name];

    /// Name as written in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DeviceId => "device_id",
            Self::DeviceName => "device_name",
            Self::Name => "name",
        }
    }

    /// Store `value` in the parameter slot this kind maps to.
    pub fn apply(self, params: &mut PortListParams, value: &str) {
        let slot = match self {
            Self::DeviceId => &mut params.device_id,
            Self::DeviceName => &mut params.device,
            Self::Name => &mut params.name,
        };
        *slot = Some(value.to_string());
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKind {
    type Err = DataSourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "device_id" => Ok(Self::DeviceId),
            "device_name" => Ok(Self::DeviceName),
            "name" => Ok(Self::Name),
            other => Err(DataSourceError::UnsupportedFilter(other.to_string())),
        }
    }
}

/// Build list parameters from a filter set.
///
/// Fails on the first unsupported name without returning partial parameters.
/// Entries are visited in set order (name, then value), so when one name is
/// given twice the lexically greater value wins.
pub fn build_params(filters: &BTreeSet<FilterEntry>) -> Result<PortListParams, DataSourceError> {
    let mut params = PortListParams::new();

    for entry in filters {
        let kind: FilterKind = entry.name.parse()?;
        debug!(filter = %kind, value = %entry.value, "applying filter");
        kind.apply(&mut params, &entry.value);
    }

    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(entries: &[(&str, &str)]) -> BTreeSet<FilterEntry> {
        entries.iter().map(|(n, v)| FilterEntry::new(*n, *v)).collect()
    }

    #[test]
    fn test_each_kind_sets_only_its_slot() {
        let params = build_params(&set(&[("device_id", "10")])).unwrap();
        assert_eq!(
            params,
            PortListParams {
                device_id: Some("10".to_string()),
                ..Default::default()
            }
        );

        let params = build_params(&set(&[("device_name", "sw1")])).unwrap();
        assert_eq!(
            params,
            PortListParams {
                device: Some("sw1".to_string()),
                ..Default::default()
            }
        );

        let params = build_params(&set(&[("name", "fp1")])).unwrap();
        assert_eq!(
            params,
            PortListParams {
                name: Some("fp1".to_string()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_all_kinds_together() {
        let params =
            build_params(&set(&[("name", "fp1"), ("device_name", "sw1"), ("device_id", "10")]))
                .unwrap();
        assert_eq!(params.device_id.as_deref(), Some("10"));
        assert_eq!(params.device.as_deref(), Some("sw1"));
        assert_eq!(params.name.as_deref(), Some("fp1"));
    }

    #[test]
    fn test_device_id_is_not_parsed() {
        let params = build_params(&set(&[("device_id", "007")])).unwrap();
        assert_eq!(params.device_id.as_deref(), Some("007"));
    }

    #[test]
    fn test_empty_set_leaves_everything_unset() {
        let params = build_params(&BTreeSet::new()).unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn test_unsupported_filter_names_the_key() {
        let err = build_params(&set(&[("device_id", "10"), ("site", "dc1")])).unwrap_err();
        assert!(matches!(err, DataSourceError::UnsupportedFilter(ref k) if k == "site"));
    }

    #[test]
    fn test_duplicate_name_last_in_set_order_wins() {
        let params = build_params(&set(&[("name", "b"), ("name", "a")])).unwrap();
        assert_eq!(params.name.as_deref(), Some("b"));
    }

    #[test]
    fn test_filter_kind_round_trips_through_names() {
        for kind in FilterKind::ALL {
            assert_eq!(kind.as_str().parse::<FilterKind>().unwrap(), kind);
        }
    }
}
