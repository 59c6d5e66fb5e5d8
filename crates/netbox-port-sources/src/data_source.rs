//! The front-port and rear-port data sources.
//!
//! Both run the same pipeline: build list parameters from `filter`, compile
//! `name_regex`, make one list call, reject an empty answer, post-filter by
//! name, project, and publish under a fresh id.

use crate::config::DataSourceConfig;
use crate::error::DataSourceError;
use crate::filter::build_params;
use crate::name_filter::NameFilter;
use crate::projection::project_all;
use crate::schema::{port_data_source_schema, Diagnostic, Schema};
use crate::state::ReadState;
use netbox_client::{
    FrontPort, NetBoxClientTrait, NetBoxError, PaginatedResponse, PortListParams, PortRecord,
    RearPort,
};
use serde_json::Value;
use tracing::{debug, info, warn};

/// A kind of port exposed as a data source.
#[async_trait::async_trait]
pub trait PortKind: Send + Sync + 'static {
    /// Record type returned by NetBox.
    type Record: PortRecord + Send;

    /// Data source type name registered with the host.
    const TYPE_NAME: &'static str;

    /// Computed attribute the projected list is published under.
    const OUTPUT_ATTRIBUTE: &'static str;

    /// Issue the single list request for this kind.
    async fn list(
        client: &dyn NetBoxClientTrait,
        params: &PortListParams,
    ) -> Result<PaginatedResponse<Self::Record>, NetBoxError>;
}

/// `netbox_device_front_ports`
#[derive(Debug, Clone, Copy, Default)]
pub struct FrontPorts;

/// `netbox_device_rear_ports`
#[derive(Debug, Clone, Copy, Default)]
pub struct RearPorts;

#[async_trait::async_trait]
impl PortKind for FrontPorts {
    type Record = FrontPort;
    const TYPE_NAME: &'static str = "netbox_device_front_ports";
    const OUTPUT_ATTRIBUTE: &'static str = "front_ports";

    async fn list(
        client: &dyn NetBoxClientTrait,
        params: &PortListParams,
    ) -> Result<PaginatedResponse<FrontPort>, NetBoxError> {
        client.list_front_ports(params).await
    }
}

#[async_trait::async_trait]
impl PortKind for RearPorts {
    type Record = RearPort;
    const TYPE_NAME: &'static str = "netbox_device_rear_ports";
    const OUTPUT_ATTRIBUTE: &'static str = "rear_ports";

    async fn list(
        client: &dyn NetBoxClientTrait,
        params: &PortListParams,
    ) -> Result<PaginatedResponse<RearPort>, NetBoxError> {
        client.list_rear_ports(params).await
    }
}

/// Schema of the data source for `K`.
pub fn schema<K: PortKind>() -> Schema {
    port_data_source_schema(K::OUTPUT_ATTRIBUTE)
}

/// Check a configuration without contacting NetBox.
///
/// Reports every problem found rather than stopping at the first.
pub fn validate(config: &Value) -> Vec<Diagnostic> {
    let config = match DataSourceConfig::from_value(config.clone()) {
        Ok(config) => config,
        Err(err) => return vec![err.to_diagnostic()],
    };

    let mut diagnostics: Vec<Diagnostic> = config
        .filter
        .iter()
        .filter_map(|entry| entry.name.parse::<crate::filter::FilterKind>().err())
        .map(|err| err.to_diagnostic())
        .collect();

    match config.name_regex.as_deref() {
        Some("") => diagnostics.push(
            Diagnostic::warning("empty name_regex matches every port and is ignored")
                .with_attribute("name_regex"),
        ),
        pattern => {
            if let Err(err) = NameFilter::compile(pattern) {
                diagnostics.push(err.to_diagnostic());
            }
        }
    }

    diagnostics
}

/// Run one read of the data source for `K`.
///
/// The pattern is compiled before the request so an invalid `name_regex`
/// never reaches NetBox.
pub async fn read<K: PortKind>(
    client: &dyn NetBoxClientTrait,
    config: &DataSourceConfig,
) -> Result<ReadState, DataSourceError> {
    let params = build_params(&config.filter)?;
    let name_filter = NameFilter::compile(config.name_regex.as_deref())?;

    debug!("Reading {} with {:?}", K::TYPE_NAME, params);
    let response = K::list(client, &params).await.inspect_err(|err| {
        if err.is_auth() {
            warn!("NetBox rejected the API token while reading {}", K::TYPE_NAME);
        }
    })?;

    // NetBox answering "nothing matched" is an error for these data sources
    if response.count == 0 {
        return Err(DataSourceError::EmptyResult);
    }

    let fetched = response.results.len();
    let kept = name_filter.apply(response.results);
    info!(
        data_source = K::TYPE_NAME,
        count = response.count,
        fetched,
        kept = kept.len(),
        "read complete"
    );

    Ok(ReadState::new(project_all(&kept)))
}

/// Read and publish the full state object for `K`.
pub async fn read_state<K: PortKind>(
    client: &dyn NetBoxClientTrait,
    config: Value,
) -> Result<Value, DataSourceError> {
    let config = DataSourceConfig::from_value(config)?;
    let state = read::<K>(client, &config).await?;
    state.publish(K::OUTPUT_ATTRIBUTE, &config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterEntry;
    use crate::projection::Projected;
    use netbox_client::MockNetBoxClient;
    use serde_json::json;

    fn config(filters: &[(&str, &str)], name_regex: Option<&str>) -> DataSourceConfig {
        DataSourceConfig {
            filter: filters.iter().map(|(n, v)| FilterEntry::new(*n, *v)).collect(),
            name_regex: name_regex.map(str::to_string),
        }
    }

    fn switch_with_ports() -> MockNetBoxClient {
        let mock = MockNetBoxClient::new("http://netbox.test");
        for (id, name) in [(1, "eth0"), (2, "eth1"), (3, "mgmt0")] {
            mock.add_front_port(mock.new_front_port(id, 10, Some(name)));
            mock.add_rear_port(mock.new_rear_port(id + 100, 10, Some(name)));
        }
        mock
    }

    #[tokio::test]
    async fn test_read_front_ports_with_regex() {
        let mock = switch_with_ports();
        let state = read::<FrontPorts>(&mock, &config(&[("device_id", "10")], Some("eth")))
            .await
            .unwrap();

        let names: Vec<_> = state.ports.iter().map(|p| p.name.clone()).collect();
        assert_eq!(
            names,
            vec![
                Projected::Present("eth0".to_string()),
                Projected::Present("eth1".to_string())
            ]
        );
    }

    #[tokio::test]
    async fn test_read_rear_ports_hits_rear_endpoint() {
        let mock = switch_with_ports();
        let state = read::<RearPorts>(&mock, &config(&[], None)).await.unwrap();

        assert_eq!(state.ports.len(), 3);
        assert_eq!(state.ports[0].id, 101);
        assert_eq!(mock.recorded_requests()[0].endpoint, "dcim/rear-ports");
    }

    #[tokio::test]
    async fn test_zero_count_is_empty_result() {
        let mock = switch_with_ports();
        let err = read::<FrontPorts>(&mock, &config(&[("device_id", "99")], None))
            .await
            .unwrap_err();
        assert!(matches!(err, DataSourceError::EmptyResult));
    }

    #[tokio::test]
    async fn test_regex_filtering_everything_out_is_not_an_error() {
        let mock = switch_with_ports();
        let state = read::<FrontPorts>(&mock, &config(&[], Some("^xe-")))
            .await
            .unwrap();
        assert!(state.ports.is_empty());
    }

    #[tokio::test]
    async fn test_unsupported_filter_fails_before_request() {
        let mock = switch_with_ports();
        let err = read::<FrontPorts>(&mock, &config(&[("site", "dc1")], None))
            .await
            .unwrap_err();
        assert!(matches!(err, DataSourceError::UnsupportedFilter(ref k) if k == "site"));
        assert!(mock.recorded_requests().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_pattern_fails_before_request() {
        let mock = switch_with_ports();
        let err = read::<FrontPorts>(&mock, &config(&[], Some("(")))
            .await
            .unwrap_err();
        assert!(matches!(err, DataSourceError::InvalidPattern { .. }));
        assert!(mock.recorded_requests().is_empty());
    }

    #[tokio::test]
    async fn test_transport_error_propagates_unchanged() {
        let mock = switch_with_ports();
        mock.fail_next_with(NetBoxError::Authentication("403 Forbidden".to_string()));

        let err = read::<RearPorts>(&mock, &config(&[], None)).await.unwrap_err();
        match err {
            DataSourceError::Transport(NetBoxError::Authentication(msg)) => {
                assert_eq!(msg, "403 Forbidden");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_read_state_publishes_under_output_attribute() {
        let mock = switch_with_ports();
        let value = read_state::<RearPorts>(&mock, json!({"name_regex": "mgmt"}))
            .await
            .unwrap();

        assert_eq!(value["rear_ports"].as_array().map(Vec::len), Some(1));
        assert_eq!(value["rear_ports"][0]["name"], json!("mgmt0"));
        assert!(value.get("front_ports").is_none());
        assert!(value["id"].as_str().is_some_and(|id| !id.is_empty()));
    }

    #[test]
    fn test_validate_collects_every_problem() {
        let diagnostics = validate(&json!({
            "filter": [
                {"name": "site", "value": "dc1"},
                {"name": "rack", "value": "r1"},
                {"name": "device_id", "value": "10"}
            ],
            "name_regex": "eth["
        }));

        assert_eq!(diagnostics.len(), 3);
        assert!(diagnostics.iter().all(Diagnostic::is_error));
        assert_eq!(
            diagnostics.iter().filter(|d| d.attribute.as_deref() == Some("filter")).count(),
            2
        );
        assert_eq!(diagnostics[2].attribute.as_deref(), Some("name_regex"));
    }

    #[test]
    fn test_validate_points_shape_errors_at_filter() {
        let diagnostics = validate(&json!({"filter": [{"name": "device_id"}]}));

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].is_error());
        assert_eq!(diagnostics[0].attribute.as_deref(), Some("filter"));
    }

    #[test]
    fn test_validate_warns_on_empty_name_regex() {
        let diagnostics = validate(&json!({"name_regex": ""}));

        assert_eq!(diagnostics.len(), 1);
        assert!(!diagnostics[0].is_error());
        assert_eq!(diagnostics[0].severity, crate::schema::DiagnosticSeverity::Warning);
        assert_eq!(diagnostics[0].attribute.as_deref(), Some("name_regex"));
    }

    #[test]
    fn test_validate_accepts_good_config() {
        let diagnostics = validate(&json!({
            "filter": [{"name": "device_name", "value": "sw1"}],
            "name_regex": "^eth\\d+$"
        }));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_schema_uses_kind_output() {
        assert!(schema::<FrontPorts>().block.attributes.contains_key("front_ports"));
        assert!(schema::<RearPorts>().block.attributes.contains_key("rear_ports"));
    }
}
