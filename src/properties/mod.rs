//! Strongly typed property records.
//!
//! Each entity family is a struct of shared fields plus a closed `kind` enum
//! selecting the concrete open metadata type. Relationship properties live
//! in [`relationships`]. Projection to generic property maps is implemented
//! in [`crate::projection`].

pub mod actor_profile;
pub mod endpoint;
pub mod governance;
pub mod relationships;
pub mod schema_attribute;
pub mod schema_type;

pub use actor_profile::{ActorProfileKind, ActorProfileProperties, PersonDetails, TeamDetails};
pub use endpoint::EndpointProperties;
pub use governance::{
    GovernanceControl, GovernanceControlKind, GovernanceDefinitionKind,
    GovernanceDefinitionProperties,
};
pub use relationships::{RelationshipDetails, RelationshipProperties};
pub use schema_attribute::SchemaAttributeProperties;
pub use schema_type::{SchemaTypeKind, SchemaTypeProperties, SimpleSchemaType, SimpleSchemaTypeKind};

use crate::element::ElementProperties;
use crate::projection::forward;
use crate::schema::names::{properties as prop, types};
use std::fmt::Debug;

/// A typed entity property record that can be stored as a generic element.
pub trait TypedProperties: Debug + Send + Sync {
    /// Open metadata type name selected by the record's kind.
    fn type_name(&self) -> &'static str;

    /// Property name holding the identity value.
    fn identity_property(&self) -> &'static str {
        prop::QUALIFIED_NAME
    }

    /// Identity value, emitted first by projection.
    fn identity(&self) -> &str;

    /// Flatten the record into an ordered property map.
    fn project(&self) -> ElementProperties;
}

impl TypedProperties for ActorProfileProperties {
    fn type_name(&self) -> &'static str {
        match self.kind {
            ActorProfileKind::Generic => types::ACTOR_PROFILE,
            ActorProfileKind::Person(_) => types::PERSON,
            ActorProfileKind::Team(_) => types::TEAM,
            ActorProfileKind::ItProfile => types::IT_PROFILE,
        }
    }

    fn identity(&self) -> &str {
        &self.qualified_name
    }

    fn project(&self) -> ElementProperties {
        forward::actor_profile(self)
    }
}

impl TypedProperties for EndpointProperties {
    fn type_name(&self) -> &'static str {
        types::ENDPOINT
    }

    fn identity(&self) -> &str {
        &self.qualified_name
    }

    fn project(&self) -> ElementProperties {
        forward::endpoint(self)
    }
}

impl TypedProperties for GovernanceDefinitionProperties {
    fn type_name(&self) -> &'static str {
        match &self.kind {
            GovernanceDefinitionKind::Generic => types::GOVERNANCE_DEFINITION,
            GovernanceDefinitionKind::Strategy { .. } => types::GOVERNANCE_STRATEGY,
            GovernanceDefinitionKind::Regulation { .. } => types::REGULATION,
            GovernanceDefinitionKind::Principle => types::GOVERNANCE_PRINCIPLE,
            GovernanceDefinitionKind::Obligation => types::GOVERNANCE_OBLIGATION,
            GovernanceDefinitionKind::Approach => types::GOVERNANCE_APPROACH,
            GovernanceDefinitionKind::Control(control) => match control.kind {
                GovernanceControlKind::Generic => types::GOVERNANCE_CONTROL,
                GovernanceControlKind::Rule => types::GOVERNANCE_RULE,
                GovernanceControlKind::Process => types::GOVERNANCE_PROCESS,
                GovernanceControlKind::Responsibility => types::GOVERNANCE_RESPONSIBILITY,
                GovernanceControlKind::Procedure => types::GOVERNANCE_PROCEDURE,
                GovernanceControlKind::Metric { .. } => types::GOVERNANCE_METRIC,
                GovernanceControlKind::SecurityGroup { .. } => types::SECURITY_GROUP,
                GovernanceControlKind::NamingStandardRule { .. } => types::NAMING_STANDARD_RULE,
            },
        }
    }

    fn identity(&self) -> &str {
        &self.document_identifier
    }

    fn project(&self) -> ElementProperties {
        forward::governance_definition(self)
    }
}

impl TypedProperties for SchemaAttributeProperties {
    fn type_name(&self) -> &'static str {
        types::SCHEMA_ATTRIBUTE
    }

    fn identity(&self) -> &str {
        &self.qualified_name
    }

    fn project(&self) -> ElementProperties {
        forward::schema_attribute(self)
    }
}

impl TypedProperties for SchemaTypeProperties {
    fn type_name(&self) -> &'static str {
        match &self.kind {
            SchemaTypeKind::Generic => types::SCHEMA_TYPE,
            SchemaTypeKind::Simple(simple) => match simple.kind {
                SimpleSchemaTypeKind::Generic => types::SIMPLE_SCHEMA_TYPE,
                SimpleSchemaTypeKind::Primitive { .. } => types::PRIMITIVE_SCHEMA_TYPE,
                SimpleSchemaTypeKind::Literal { .. } => types::LITERAL_SCHEMA_TYPE,
                SimpleSchemaTypeKind::Enum { .. } => types::ENUM_SCHEMA_TYPE,
            },
            SchemaTypeKind::Map => types::MAP_SCHEMA_TYPE,
            SchemaTypeKind::Struct => types::STRUCT_SCHEMA_TYPE,
            SchemaTypeKind::Choice => types::SCHEMA_TYPE_CHOICE,
        }
    }

    fn identity(&self) -> &str {
        &self.qualified_name
    }

    fn project(&self) -> ElementProperties {
        forward::schema_type(self)
    }
}
