//! Host-facing provider surface.
//!
//! [`PortProvider`] owns the NetBox client handle and dispatches schema,
//! validation and read requests to the data source registered under the
//! requested type name.

use crate::config::ProviderConfig;
use crate::data_source::{self, FrontPorts, PortKind, RearPorts};
use crate::error::{ConfigError, DataSourceError};
use crate::schema::{Diagnostic, ProviderSchema};
use netbox_client::NetBoxClientTrait;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

/// Data source types this provider serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataSourceType {
    /// `netbox_device_front_ports`
    FrontPorts,
    /// `netbox_device_rear_ports`
    RearPorts,
}

impl DataSourceType {
    /// Every served type.
    pub const ALL: [DataSourceType; 2] = [Self::FrontPorts, Self::RearPorts];

    /// Registered type name.
    pub fn name(self) -> &'static str {
        match self {
            Self::FrontPorts => FrontPorts::TYPE_NAME,
            Self::RearPorts => RearPorts::TYPE_NAME,
        }
    }
}

impl fmt::Display for DataSourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DataSourceType {
    type Err = DataSourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.name() == s)
            .ok_or_else(|| DataSourceError::UnknownDataSource(s.to_string()))
    }
}

/// Serves the NetBox port data sources.
#[derive(Clone)]
pub struct PortProvider {
    client: Arc<dyn NetBoxClientTrait>,
}

impl fmt::Debug for PortProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PortProvider")
            .field("base_url", &self.client.base_url())
            .finish()
    }
}

impl PortProvider {
    /// Create a provider around an existing client.
    pub fn new(client: Arc<dyn NetBoxClientTrait>) -> Self {
        Self { client }
    }

    /// Create a provider with a real NetBox client built from `config`.
    pub fn from_config(config: &ProviderConfig) -> Result<Self, ConfigError> {
        let client = config.build_client()?;
        info!("Configured NetBox provider for {}", client.base_url());
        Ok(Self::new(Arc::new(client)))
    }

    /// The client handle.
    pub fn client(&self) -> &dyn NetBoxClientTrait {
        self.client.as_ref()
    }

    /// Registered data source type names.
    pub fn data_source_types(&self) -> Vec<&'static str> {
        DataSourceType::ALL.into_iter().map(DataSourceType::name).collect()
    }

    /// Schemas of every data source.
    pub fn schema(&self) -> ProviderSchema {
        ProviderSchema::new()
            .with_data_source(FrontPorts::TYPE_NAME, data_source::schema::<FrontPorts>())
            .with_data_source(RearPorts::TYPE_NAME, data_source::schema::<RearPorts>())
    }

    /// Validate a data source configuration without contacting NetBox.
    pub fn validate_data_source_config(
        &self,
        data_source_type: &str,
        config: &Value,
    ) -> Vec<Diagnostic> {
        match data_source_type.parse::<DataSourceType>() {
            Ok(_) => data_source::validate(config),
            Err(err) => vec![err.to_diagnostic()],
        }
    }

    /// Read a data source and return its full state object.
    pub async fn read_data_source(
        &self,
        data_source_type: &str,
        config: Value,
    ) -> Result<Value, DataSourceError> {
        let client = self.client();
        match data_source_type.parse::<DataSourceType>()? {
            DataSourceType::FrontPorts => {
                data_source::read_state::<FrontPorts>(client, config).await
            }
            DataSourceType::RearPorts => {
                data_source::read_state::<RearPorts>(client, config).await
            }
        }
    }
}
