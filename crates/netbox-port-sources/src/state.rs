//! Publishing read results as data source state.

use crate::config::DataSourceConfig;
use crate::error::DataSourceError;
use crate::projection::ProjectedPort;
use serde_json::{Map, Value};
use uuid::Uuid;

/// Outcome of one successful read.
///
/// `id` is synthetic: a fresh random token per read, never derived from the
/// content, so two identical reads get different ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadState {
    /// Opaque per-read identifier.
    pub id: String,
    /// Projected ports in NetBox order.
    pub ports: Vec<ProjectedPort>,
}

impl ReadState {
    /// Wrap `ports` under a freshly generated id.
    pub fn new(ports: Vec<ProjectedPort>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            ports,
        }
    }

    /// Full state object: the configured inputs, `id`, and the port list
    /// under `output_attribute`.
    pub fn publish(
        &self,
        output_attribute: &str,
        config: &DataSourceConfig,
    ) -> Result<Value, DataSourceError> {
        let ports = self
            .ports
            .iter()
            .map(|port| port.to_attributes().map(Value::Object))
            .collect::<Result<Vec<_>, _>>()?;

        let mut state = Map::new();
        state.insert("id".to_string(), Value::String(self.id.clone()));
        state.insert("filter".to_string(), config.filter_value()?);
        state.insert(
            "name_regex".to_string(),
            config
                .name_regex
                .clone()
                .map_or(Value::Null, Value::String),
        );
        state.insert(output_attribute.to_string(), Value::Array(ports));

        Ok(Value::Object(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterEntry;
    use crate::projection::Projected;
    use serde_json::json;

    fn port(id: u64) -> ProjectedPort {
        ProjectedPort {
            id,
            description: Projected::Absent,
            occupied: false,
            name: Projected::Present(format!("p{id}")),
            tag_ids: Projected::Absent,
            device_id: 1,
            label: String::new(),
        }
    }

    #[test]
    fn test_ids_are_fresh_per_read() {
        let a = ReadState::new(vec![port(1)]);
        let b = ReadState::new(vec![port(1)]);
        assert_ne!(a.id, b.id);
        assert_eq!(a.ports, b.ports);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }

    #[test]
    fn test_publish_layout() {
        let state = ReadState::new(vec![port(1), port(2)]);
        let config = DataSourceConfig {
            filter: [FilterEntry::new("device_id", "1")].into_iter().collect(),
            name_regex: Some("^p".to_string()),
        };

        let value = state.publish("rear_ports", &config).unwrap();
        assert_eq!(value["id"], json!(state.id));
        assert_eq!(value["filter"], json!([{"name": "device_id", "value": "1"}]));
        assert_eq!(value["name_regex"], json!("^p"));
        assert_eq!(value["rear_ports"][0]["name"], json!("p1"));
        assert_eq!(value["rear_ports"][1]["id"], json!(2));
    }

    #[test]
    fn test_publish_without_inputs() {
        let state = ReadState::new(vec![port(1)]);
        let value = state.publish("front_ports", &DataSourceConfig::default()).unwrap();
        assert_eq!(value["filter"], Value::Null);
        assert_eq!(value["name_regex"], Value::Null);
        assert_eq!(value["front_ports"].as_array().map(Vec::len), Some(1));
    }
}
