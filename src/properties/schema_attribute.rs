//! Schema attribute properties.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Properties of a schema attribute (a named field within a schema type).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaAttributeProperties {
    pub qualified_name: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub element_position: i64,
    pub min_cardinality: i64,
    pub max_cardinality: i64,
    pub allows_duplicate_values: bool,
    pub ordered_values: bool,
    pub default_value_override: Option<String>,
    pub is_nullable: bool,
    pub minimum_length: i64,
    pub length: i64,
    pub precision: i64,
    pub native_class: Option<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub additional_properties: BTreeMap<String, String>,
    #[serde(default)]
    pub extended_properties: BTreeMap<String, Value>,
}

impl SchemaAttributeProperties {
    /// Single-valued, nullable attribute at position 0.
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            display_name: None,
            description: None,
            element_position: 0,
            min_cardinality: 0,
            max_cardinality: 1,
            allows_duplicate_values: false,
            ordered_values: false,
            default_value_override: None,
            is_nullable: true,
            minimum_length: 0,
            length: 0,
            precision: 0,
            native_class: None,
            aliases: Vec::new(),
            additional_properties: BTreeMap::new(),
            extended_properties: BTreeMap::new(),
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

    pub fn with_position(mut self, element_position: i64) -> Self {
        self.element_position = element_position;
        self
    }

    pub fn with_cardinality(mut self, min_cardinality: i64, max_cardinality: i64) -> Self {
        self.min_cardinality = min_cardinality;
        self.max_cardinality = max_cardinality;
        self
    }

    pub fn with_native_class(mut self, native_class: impl Into<String>) -> Self {
        self.native_class = Some(native_class.into());
        self
    }

    pub fn with_aliases(mut self, aliases: Vec<String>) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn with_length(mut self, length: i64) -> Self {
        self.length = length;
        self
    }

    pub fn not_nullable(mut self) -> Self {
        self.is_nullable = false;
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
