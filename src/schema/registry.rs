//! Type registry for the open metadata type vocabulary.
//!
//! The registry answers "is-type-of" questions over the entity type
//! hierarchy and knows the expected end types of each relationship type. It
//! is built once and shared read-only afterwards.

use super::embedded;

use log::error;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

static SHARED_REGISTRY: OnceLock<Arc<TypeRegistry>> = OnceLock::new();

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EntityTypeDefinition {
    name: String,
    super_type: Option<String>,
}

/// Expected end types of a relationship type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RelationshipTypeDefinition {
    pub name: String,
    pub end1: String,
    pub end2: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TypeVocabulary {
    entity_types: Vec<EntityTypeDefinition>,
    relationship_types: Vec<RelationshipTypeDefinition>,
}

/// Registry of known entity and relationship types.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    // entity type name -> direct supertype
    entity_types: HashMap<String, Option<String>>,
    relationship_types: HashMap<String, RelationshipTypeDefinition>,
}

impl TypeRegistry {
    /// Create a registry from the embedded core vocabulary.
    pub fn new() -> Result<Self, serde_json::Error> {
        Self::from_json(embedded::core_type_vocabulary())
    }

    /// Create a registry from a JSON vocabulary document.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        let vocabulary: TypeVocabulary = serde_json::from_str(content)?;

        let entity_types = vocabulary
            .entity_types
            .into_iter()
            .map(|definition| (definition.name, definition.super_type))
            .collect();
        let relationship_types = vocabulary
            .relationship_types
            .into_iter()
            .map(|definition| (definition.name.clone(), definition))
            .collect();

        Ok(Self {
            entity_types,
            relationship_types,
        })
    }

    /// Process-wide registry built from the embedded vocabulary.
    pub fn shared() -> Arc<TypeRegistry> {
        SHARED_REGISTRY
            .get_or_init(|| {
                let registry = TypeRegistry::new().unwrap_or_else(|e| {
                    error!("Embedded type vocabulary could not be parsed: {}", e);
                    TypeRegistry::default()
                });
                Arc::new(registry)
            })
            .clone()
    }

    /// Register an additional entity type, for vocabularies with local subtypes.
    pub fn add_entity_type(&mut self, name: &str, super_type: Option<&str>) {
        self.entity_types
            .insert(name.to_string(), super_type.map(str::to_string));
    }

    pub fn is_known_entity_type(&self, name: &str) -> bool {
        self.entity_types.contains_key(name)
    }

    pub fn relationship_type(&self, name: &str) -> Option<&RelationshipTypeDefinition> {
        self.relationship_types.get(name)
    }

    /// The type itself followed by its supertypes, most specific first.
    pub fn type_lineage<'a>(&'a self, type_name: &'a str) -> Vec<&'a str> {
        let mut lineage = vec![type_name];
        let mut current = type_name;

        while let Some(Some(super_type)) = self.entity_types.get(current) {
            // a malformed vocabulary could loop
            if lineage.contains(&super_type.as_str()) {
                break;
            }
            lineage.push(super_type);
            current = super_type;
        }

        lineage
    }

    /// Check whether `type_name` is `super_type` or one of its subtypes.
    pub fn is_type_of(&self, type_name: &str, super_type: &str) -> bool {
        self.type_lineage(type_name).contains(&super_type)
    }

    /// Most specific entry of `candidates` that `type_name` is a type of.
    pub fn nearest_of<'c>(&self, type_name: &str, candidates: &[&'c str]) -> Option<&'c str> {
        self.type_lineage(type_name).into_iter().find_map(|ancestor| {
            candidates
                .iter()
                .copied()
                .find(|candidate| *candidate == ancestor)
        })
    }
}
