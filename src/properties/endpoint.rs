//! Endpoint properties.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Properties of a network endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointProperties {
    pub qualified_name: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub network_address: Option<String>,
    pub protocol: Option<String>,
    pub encryption_method: Option<String>,
    #[serde(default)]
    pub additional_properties: BTreeMap<String, String>,
    #[serde(default)]
    pub extended_properties: BTreeMap<String, Value>,
}

impl EndpointProperties {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            ..Default::default()
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_network_address(mut self, network_address: impl Into<String>) -> Self {
        self.network_address = Some(network_address.into());
        self
    }

    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    pub fn with_encryption_method(mut self, encryption_method: impl Into<String>) -> Self {
        self.encryption_method = Some(encryption_method.into());
        self
    }

    pub fn with_additional_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.additional_properties.insert(name.into(), value.into());
        self
    }

    pub fn with_extended_property(mut self, name: impl Into<String>, value: Value) -> Self {
        self.extended_properties.insert(name.into(), value);
        self
    }
}
