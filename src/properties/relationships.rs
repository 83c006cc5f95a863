//! Relationship property records.

use crate::element::EffectivityWindow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Properties supplied when linking two elements.
///
/// Passing no `RelationshipProperties` at all selects the properties-free
/// relationship create call; passing one, even with no fields set, selects
/// the call that carries an effectivity window and a property map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipProperties {
    #[serde(default)]
    pub window: EffectivityWindow,
    pub details: RelationshipDetails,
}

/// Relationship-kind specific field, if the kind has one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "relationshipKind", rename_all = "camelCase")]
pub enum RelationshipDetails {
    ProfileLocation { association_type: Option<String> },
    ProfileIdentity { role_type_name: Option<String> },
    TeamStructure { delegation_escalation_authority: bool },
    ItInfrastructureProfile,
    ServerEndpoint,
    PeerDefinition,
    SupportingDefinition { rationale: Option<String> },
    ImplementationResource { description: Option<String> },
    SchemaAttributeType,
    NestedSchemaAttribute { position: i64 },
    SchemaTypeOption,
    MapFromElementType,
    MapToElementType,
}

impl RelationshipProperties {
    pub fn new(details: RelationshipDetails) -> Self {
        Self {
            window: EffectivityWindow::unbounded(),
            details,
        }
    }

    pub fn profile_location(association_type: impl Into<String>) -> Self {
        Self::new(RelationshipDetails::ProfileLocation {
            association_type: Some(association_type.into()),
        })
    }

    pub fn supporting_definition(rationale: impl Into<String>) -> Self {
        Self::new(RelationshipDetails::SupportingDefinition {
            rationale: Some(rationale.into()),
        })
    }

    pub fn with_effectivity(
        mut self,
        effective_from: Option<DateTime<Utc>>,
        effective_to: Option<DateTime<Utc>>,
    ) -> Self {
        self.window = EffectivityWindow::new(effective_from, effective_to);
        self
    }
}
