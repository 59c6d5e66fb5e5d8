//! Projection of NetBox port records into data source attributes.
//!
//! Optional attributes are either [`Projected::Present`] or
//! [`Projected::Absent`]; absent ones produce no key at all in the
//! attribute map, rather than `null` or an empty placeholder.

use netbox_client::PortRecord;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// An attribute that is either emitted with a value or left out entirely.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Projected<T> {
    /// Emit the attribute with this value.
    Present(T),
    /// Do not emit the attribute.
    #[default]
    Absent,
}

impl<T> Projected<T> {
    /// Whether the attribute is left out.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// `Present(value)` when `keep` holds for it, otherwise `Absent`.
    pub fn when(value: T, keep: impl FnOnce(&T) -> bool) -> Self {
        if keep(&value) {
            Self::Present(value)
        } else {
            Self::Absent
        }
    }
}

impl<T> From<Option<T>> for Projected<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Self::Present)
    }
}

impl<T: Serialize> Serialize for Projected<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Present(value) => value.serialize(serializer),
            // Only reachable when a field forgets `skip_serializing_if`
            Self::Absent => serializer.serialize_none(),
        }
    }
}

/// Attributes published for one port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectedPort {
    /// NetBox object ID.
    pub id: u64,
    /// Omitted when the port has no description.
    #[serde(skip_serializing_if = "Projected::is_absent")]
    pub description: Projected<String>,
    /// Always emitted.
    pub occupied: bool,
    /// Omitted when NetBox returned no name.
    #[serde(skip_serializing_if = "Projected::is_absent")]
    pub name: Projected<String>,
    /// Omitted when the port has no tags.
    #[serde(skip_serializing_if = "Projected::is_absent")]
    pub tag_ids: Projected<Vec<u64>>,
    /// Always emitted.
    pub device_id: u64,
    /// Always emitted, even when empty.
    pub label: String,
}

impl ProjectedPort {
    /// Project a front or rear port.
    pub fn from_record<R: PortRecord>(record: &R) -> Self {
        let tag_ids: Vec<u64> = record.tags().iter().map(|tag| tag.id).collect();

        Self {
            id: record.id(),
            description: Projected::when(record.description().to_string(), |d| !d.is_empty()),
            occupied: record.occupied(),
            name: record.name().map(str::to_string).into(),
            tag_ids: Projected::when(tag_ids, |ids| !ids.is_empty()),
            device_id: record.device_id(),
            label: record.label().to_string(),
        }
    }

    /// String-keyed attribute map as published in state.
    pub fn to_attributes(&self) -> Result<Map<String, Value>, serde_json::Error> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(serde::ser::Error::custom(format!(
                "port projected to a non-object value: {other}"
            ))),
        }
    }
}

/// Project every record, preserving order.
pub fn project_all<R: PortRecord>(records: &[R]) -> Vec<ProjectedPort> {
    records.iter().map(ProjectedPort::from_record).collect()
}
