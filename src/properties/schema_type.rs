//! Schema type properties.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Properties of a schema type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaTypeProperties {
    pub qualified_name: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub version_number: Option<String>,
    pub author: Option<String>,
    pub usage: Option<String>,
    pub encoding_standard: Option<String>,
    pub namespace: Option<String>,
    pub is_deprecated: bool,
    #[serde(default)]
    pub additional_properties: BTreeMap<String, String>,
    #[serde(default)]
    pub extended_properties: BTreeMap<String, Value>,
    pub kind: SchemaTypeKind,
}

/// Concrete schema type variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "schemaTypeKind", rename_all = "camelCase")]
pub enum SchemaTypeKind {
    Generic,
    Simple(SimpleSchemaType),
    Map,
    Struct,
    Choice,
}

/// Fields shared by every simple (single-valued) schema type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleSchemaType {
    pub data_type: Option<String>,
    pub kind: SimpleSchemaTypeKind,
}

/// Concrete simple schema type variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "simpleKind", rename_all = "camelCase")]
pub enum SimpleSchemaTypeKind {
    Generic,
    Primitive { default_value: Option<String> },
    Literal { fixed_value: Option<String> },
    Enum { default_value: Option<String> },
}

impl SimpleSchemaType {
    pub fn new(data_type: impl Into<String>, kind: SimpleSchemaTypeKind) -> Self {
        Self {
            data_type: Some(data_type.into()),
            kind,
        }
    }
}

impl SchemaTypeProperties {
    pub fn new(qualified_name: impl Into<String>, kind: SchemaTypeKind) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            display_name: None,
            description: None,
            version_number: None,
            author: None,
            usage: None,
            encoding_standard: None,
            namespace: None,
            is_deprecated: false,
            additional_properties: BTreeMap::new(),
            extended_properties: BTreeMap::new(),
            kind,
        }
    }

    /// Primitive schema type of the given data type.
    pub fn primitive(qualified_name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self::new(
            qualified_name,
            SchemaTypeKind::Simple(SimpleSchemaType::new(
                data_type,
                SimpleSchemaTypeKind::Primitive {
                    default_value: None,
                },
            )),
        )
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_version_number(mut self, version_number: impl Into<String>) -> Self {
        self.version_number = Some(version_number.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn deprecated(mut self) -> Self {
        self.is_deprecated = true;
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
