//! Ordered generic property maps.
//!
//! Projected properties keep their insertion order so wire payloads are
//! reproducible and tests can assert on key sequences. Maps are assembled
//! through [`PropertiesBuilder`] and frozen once built.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// A typed value held under a property name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum PropertyValue {
    /// Declared field with no value supplied
    Null,
    String(String),
    Boolean(bool),
    Integer(i64),
    StringArray(Vec<String>),
    StringMap(BTreeMap<String, String>),
    /// Open mapping used for extended properties
    Map(BTreeMap<String, Value>),
}

impl PropertyValue {
    /// Name of the value kind, used in conversion errors.
    pub fn kind_name(&self) -> &'static str {
        match self {
            PropertyValue::Null => "null",
            PropertyValue::String(_) => "string",
            PropertyValue::Boolean(_) => "boolean",
            PropertyValue::Integer(_) => "integer",
            PropertyValue::StringArray(_) => "string array",
            PropertyValue::StringMap(_) => "string map",
            PropertyValue::Map(_) => "map",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PropertyValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Plain JSON rendering of the value.
    pub fn to_json(&self) -> Value {
        match self {
            PropertyValue::Null => Value::Null,
            PropertyValue::String(s) => Value::String(s.clone()),
            PropertyValue::Boolean(b) => Value::Bool(*b),
            PropertyValue::Integer(i) => Value::from(*i),
            PropertyValue::StringArray(items) => {
                Value::Array(items.iter().cloned().map(Value::String).collect())
            }
            PropertyValue::StringMap(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                    .collect(),
            ),
            PropertyValue::Map(map) => {
                Value::Object(map.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            }
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Boolean(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Integer(value)
    }
}

impl From<Vec<String>> for PropertyValue {
    fn from(value: Vec<String>) -> Self {
        PropertyValue::StringArray(value)
    }
}

impl From<BTreeMap<String, String>> for PropertyValue {
    fn from(value: BTreeMap<String, String>) -> Self {
        PropertyValue::StringMap(value)
    }
}

impl From<BTreeMap<String, Value>> for PropertyValue {
    fn from(value: BTreeMap<String, Value>) -> Self {
        PropertyValue::Map(value)
    }
}

/// Ordered mapping of property name to typed value.
///
/// Names are unique; the first insertion of a name fixes its position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementProperties {
    entries: Vec<(String, PropertyValue)>,
}

impl ElementProperties {
    /// Create an empty property map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a property map.
    pub fn builder() -> PropertiesBuilder {
        PropertiesBuilder::new()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Property names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// First property name, which for projected entities is the identity field.
    pub fn first_key(&self) -> Option<&str> {
        self.entries.first().map(|(key, _)| key.as_str())
    }

    pub fn into_entries(self) -> Vec<(String, PropertyValue)> {
        self.entries
    }

    /// Apply an update on top of these properties.
    ///
    /// With `replace_all` the update becomes the new property set. Otherwise
    /// only non-null values of the update overwrite or extend the current set,
    /// and map values are merged entry by entry.
    pub fn apply_update(&self, update: &ElementProperties, replace_all: bool) -> ElementProperties {
        if replace_all {
            return update.clone();
        }

        let mut merged = self.clone();
        for (name, value) in update.iter() {
            let value = match (merged.get(name), value) {
                (_, PropertyValue::Null) => continue,
                (Some(PropertyValue::StringMap(current)), PropertyValue::StringMap(entries)) => {
                    let mut combined = current.clone();
                    combined.extend(entries.iter().map(|(k, v)| (k.clone(), v.clone())));
                    PropertyValue::StringMap(combined)
                }
                (Some(PropertyValue::Map(current)), PropertyValue::Map(entries)) => {
                    let mut combined = current.clone();
                    combined.extend(entries.iter().map(|(k, v)| (k.clone(), v.clone())));
                    PropertyValue::Map(combined)
                }
                (_, value) => value.clone(),
            };
            merged.upsert(name, value);
        }
        merged
    }

    /// Plain JSON object rendering (key order follows serde_json's map).
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.entries
                .iter()
                .map(|(key, value)| (key.clone(), value.to_json()))
                .collect(),
        )
    }

    fn upsert(&mut self, name: &str, value: PropertyValue) {
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }
}

impl From<Vec<(String, PropertyValue)>> for ElementProperties {
    fn from(entries: Vec<(String, PropertyValue)>) -> Self {
        let mut properties = ElementProperties::new();
        for (name, value) in entries {
            properties.upsert(&name, value);
        }
        properties
    }
}

impl Serialize for ElementProperties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ElementProperties {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = ElementProperties;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a map of property names to typed values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut properties = ElementProperties::new();
                while let Some((name, value)) = access.next_entry::<String, PropertyValue>()? {
                    properties.upsert(&name, value);
                }
                Ok(properties)
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

impl fmt::Display for ElementProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, (key, value)) in self.entries.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", key, value.to_json())?;
        }
        write!(f, "}}")
    }
}

/// Builder for [`ElementProperties`].
///
/// Every `with_*` method records the key even when the value is absent, so a
/// projection always yields the same key sequence for a given variant.
#[derive(Debug, Default)]
pub struct PropertiesBuilder {
    properties: ElementProperties,
}

impl PropertiesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, name: &str, value: PropertyValue) -> Self {
        self.properties.upsert(name, value);
        self
    }

    pub fn with_string(self, name: &str, value: Option<&str>) -> Self {
        let value = value.map_or(PropertyValue::Null, PropertyValue::from);
        self.with_value(name, value)
    }

    pub fn with_bool(self, name: &str, value: bool) -> Self {
        self.with_value(name, PropertyValue::Boolean(value))
    }

    pub fn with_optional_bool(self, name: &str, value: Option<bool>) -> Self {
        let value = value.map_or(PropertyValue::Null, PropertyValue::Boolean);
        self.with_value(name, value)
    }

    pub fn with_int(self, name: &str, value: i64) -> Self {
        self.with_value(name, PropertyValue::Integer(value))
    }

    pub fn with_optional_int(self, name: &str, value: Option<i64>) -> Self {
        let value = value.map_or(PropertyValue::Null, PropertyValue::Integer);
        self.with_value(name, value)
    }

    pub fn with_string_array(self, name: &str, value: &[String]) -> Self {
        self.with_value(name, PropertyValue::StringArray(value.to_vec()))
    }

    pub fn with_string_map(self, name: &str, value: &BTreeMap<String, String>) -> Self {
        self.with_value(name, PropertyValue::StringMap(value.clone()))
    }

    pub fn with_map(self, name: &str, value: &BTreeMap<String, Value>) -> Self {
        self.with_value(name, PropertyValue::Map(value.clone()))
    }

    /// Finish the map.
    pub fn build(self) -> ElementProperties {
        self.properties
    }
}
