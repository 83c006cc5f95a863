//! Forward projection: typed property records to ordered property maps.
//!
//! Each family writes its base fields, then the single block selected by
//! its kind, then the two extensibility maps. Absent optional fields are
//! written as nulls so a variant always produces the same key sequence.

use crate::element::{ElementProperties, PropertiesBuilder};
use crate::properties::{
    ActorProfileKind, ActorProfileProperties, EndpointProperties, GovernanceControlKind,
    GovernanceDefinitionKind, GovernanceDefinitionProperties, RelationshipDetails,
    RelationshipProperties, SchemaAttributeProperties, SchemaTypeKind, SchemaTypeProperties,
    SimpleSchemaTypeKind,
};
use crate::schema::names::properties as prop;
use std::collections::BTreeMap;

fn extensibility(
    builder: PropertiesBuilder,
    additional: &BTreeMap<String, String>,
    extended: &BTreeMap<String, serde_json::Value>,
) -> ElementProperties {
    builder
        .with_string_map(prop::ADDITIONAL_PROPERTIES, additional)
        .with_map(prop::EXTENDED_PROPERTIES, extended)
        .build()
}

fn named(qualified_name: &str, name: Option<&str>, description: Option<&str>) -> PropertiesBuilder {
    PropertiesBuilder::new()
        .with_string(prop::QUALIFIED_NAME, Some(qualified_name))
        .with_string(prop::NAME, name)
        .with_string(prop::DESCRIPTION, description)
}

pub fn actor_profile(properties: &ActorProfileProperties) -> ElementProperties {
    let mut builder = named(
        &properties.qualified_name,
        properties.known_name.as_deref(),
        properties.description.as_deref(),
    );

    match &properties.kind {
        ActorProfileKind::Person(person) => {
            builder = builder
                .with_string(prop::COURTESY_TITLE, person.courtesy_title.as_deref())
                .with_string(prop::INITIALS, person.initials.as_deref())
                .with_string(prop::GIVEN_NAMES, person.given_names.as_deref())
                .with_string(prop::SURNAME, person.surname.as_deref())
                .with_string(prop::FULL_NAME, person.full_name.as_deref())
                .with_string(prop::PRONOUNS, person.pronouns.as_deref())
                .with_string(prop::JOB_TITLE, person.job_title.as_deref())
                .with_string(prop::EMPLOYEE_NUMBER, person.employee_number.as_deref())
                .with_string(prop::EMPLOYEE_TYPE, person.employee_type.as_deref())
                .with_string(prop::PREFERRED_LANGUAGE, person.preferred_language.as_deref())
                .with_string(prop::RESIDENT_COUNTRY, person.resident_country.as_deref())
                .with_string(prop::TIME_ZONE, person.time_zone.as_deref())
                .with_bool(prop::IS_PUBLIC, person.is_public);
        }
        ActorProfileKind::Team(team) => {
            builder = builder
                .with_string(prop::TEAM_TYPE, team.team_type.as_deref())
                .with_string(prop::IDENTIFIER, team.identifier.as_deref());
        }
        ActorProfileKind::ItProfile | ActorProfileKind::Generic => {}
    }

    extensibility(
        builder,
        &properties.additional_properties,
        &properties.extended_properties,
    )
}

pub fn endpoint(properties: &EndpointProperties) -> ElementProperties {
    let builder = named(
        &properties.qualified_name,
        properties.display_name.as_deref(),
        properties.description.as_deref(),
    )
    .with_string(prop::NETWORK_ADDRESS, properties.network_address.as_deref())
    .with_string(prop::PROTOCOL, properties.protocol.as_deref())
    .with_string(prop::ENCRYPTION_METHOD, properties.encryption_method.as_deref());

    extensibility(
        builder,
        &properties.additional_properties,
        &properties.extended_properties,
    )
}

pub fn governance_definition(properties: &GovernanceDefinitionProperties) -> ElementProperties {
    let mut builder = PropertiesBuilder::new()
        .with_string(prop::QUALIFIED_NAME, Some(&properties.document_identifier))
        .with_string(prop::TITLE, properties.title.as_deref())
        .with_string(prop::SUMMARY, properties.summary.as_deref())
        .with_string(prop::DESCRIPTION, properties.description.as_deref())
        .with_string(prop::SCOPE, properties.scope.as_deref())
        .with_int(prop::DOMAIN_IDENTIFIER, properties.domain_identifier)
        .with_string(prop::IMPORTANCE, properties.importance.as_deref())
        .with_string_array(prop::IMPLICATIONS, &properties.implications)
        .with_string_array(prop::OUTCOMES, &properties.outcomes)
        .with_string_array(prop::RESULTS, &properties.results);

    match &properties.kind {
        GovernanceDefinitionKind::Strategy {
            business_imperatives,
        } => {
            builder = builder.with_string_array(prop::BUSINESS_IMPERATIVES, business_imperatives);
        }
        GovernanceDefinitionKind::Regulation { source, regulators } => {
            builder = builder
                .with_string(prop::SOURCE, source.as_deref())
                .with_string_array(prop::REGULATORS, regulators);
        }
        GovernanceDefinitionKind::Control(control) => {
            match &control.kind {
                GovernanceControlKind::Metric {
                    measurement,
                    target,
                } => {
                    builder = builder
                        .with_string(prop::MEASUREMENT, measurement.as_deref())
                        .with_string(prop::TARGET, target.as_deref());
                }
                GovernanceControlKind::SecurityGroup { distinguished_name } => {
                    builder =
                        builder.with_string(prop::DISTINGUISHED_NAME, distinguished_name.as_deref());
                }
                GovernanceControlKind::NamingStandardRule { name_patterns } => {
                    builder = builder.with_string_array(prop::NAME_PATTERNS, name_patterns);
                }
                GovernanceControlKind::Generic
                | GovernanceControlKind::Rule
                | GovernanceControlKind::Process
                | GovernanceControlKind::Responsibility
                | GovernanceControlKind::Procedure => {}
            }
            // Shared by every control, so it follows the control block.
            builder = builder.with_string(
                prop::IMPLEMENTATION_DESCRIPTION,
                control.implementation_description.as_deref(),
            );
        }
        GovernanceDefinitionKind::Generic
        | GovernanceDefinitionKind::Principle
        | GovernanceDefinitionKind::Obligation
        | GovernanceDefinitionKind::Approach => {}
    }

    extensibility(
        builder,
        &properties.additional_properties,
        &properties.extended_properties,
    )
}

pub fn schema_attribute(properties: &SchemaAttributeProperties) -> ElementProperties {
    let builder = named(
        &properties.qualified_name,
        properties.display_name.as_deref(),
        properties.description.as_deref(),
    )
    .with_int(prop::POSITION, properties.element_position)
    .with_int(prop::MIN_CARDINALITY, properties.min_cardinality)
    .with_int(prop::MAX_CARDINALITY, properties.max_cardinality)
    .with_bool(prop::ALLOWS_DUPLICATE_VALUES, properties.allows_duplicate_values)
    .with_bool(prop::ORDERED_VALUES, properties.ordered_values)
    .with_string(
        prop::DEFAULT_VALUE_OVERRIDE,
        properties.default_value_override.as_deref(),
    )
    .with_bool(prop::IS_NULLABLE, properties.is_nullable)
    .with_int(prop::MINIMUM_LENGTH, properties.minimum_length)
    .with_int(prop::LENGTH, properties.length)
    .with_int(prop::PRECISION, properties.precision)
    .with_string(prop::NATIVE_CLASS, properties.native_class.as_deref())
    .with_string_array(prop::ALIASES, &properties.aliases);

    extensibility(
        builder,
        &properties.additional_properties,
        &properties.extended_properties,
    )
}

pub fn schema_type(properties: &SchemaTypeProperties) -> ElementProperties {
    let mut builder = named(
        &properties.qualified_name,
        properties.display_name.as_deref(),
        properties.description.as_deref(),
    )
    .with_string(prop::VERSION_NUMBER, properties.version_number.as_deref())
    .with_string(prop::AUTHOR, properties.author.as_deref())
    .with_string(prop::USAGE, properties.usage.as_deref())
    .with_string(prop::ENCODING_STANDARD, properties.encoding_standard.as_deref())
    .with_string(prop::NAMESPACE, properties.namespace.as_deref())
    .with_bool(prop::IS_DEPRECATED, properties.is_deprecated);

    if let SchemaTypeKind::Simple(simple) = &properties.kind {
        match &simple.kind {
            SimpleSchemaTypeKind::Primitive { default_value }
            | SimpleSchemaTypeKind::Enum { default_value } => {
                builder = builder.with_string(prop::DEFAULT_VALUE, default_value.as_deref());
            }
            SimpleSchemaTypeKind::Literal { fixed_value } => {
                builder = builder.with_string(prop::FIXED_VALUE, fixed_value.as_deref());
            }
            SimpleSchemaTypeKind::Generic => {}
        }
        builder = builder.with_string(prop::DATA_TYPE, simple.data_type.as_deref());
    }

    extensibility(
        builder,
        &properties.additional_properties,
        &properties.extended_properties,
    )
}

/// Relationship properties carry at most one kind-specific field.
pub fn relationship(properties: &RelationshipProperties) -> ElementProperties {
    let builder = PropertiesBuilder::new();
    let builder = match &properties.details {
        RelationshipDetails::ProfileLocation { association_type } => {
            builder.with_string(prop::ASSOCIATION_TYPE, association_type.as_deref())
        }
        RelationshipDetails::ProfileIdentity { role_type_name } => {
            builder.with_string(prop::ROLE_TYPE_NAME, role_type_name.as_deref())
        }
        RelationshipDetails::TeamStructure {
            delegation_escalation_authority,
        } => builder.with_bool(
            prop::DELEGATION_ESCALATION_AUTHORITY,
            *delegation_escalation_authority,
        ),
        RelationshipDetails::SupportingDefinition { rationale } => {
            builder.with_string(prop::RATIONALE, rationale.as_deref())
        }
        RelationshipDetails::ImplementationResource { description } => {
            builder.with_string(prop::DESCRIPTION, description.as_deref())
        }
        RelationshipDetails::NestedSchemaAttribute { position } => {
            builder.with_int(prop::POSITION, *position)
        }
        RelationshipDetails::ItInfrastructureProfile
        | RelationshipDetails::ServerEndpoint
        | RelationshipDetails::PeerDefinition
        | RelationshipDetails::SchemaAttributeType
        | RelationshipDetails::SchemaTypeOption
        | RelationshipDetails::MapFromElementType
        | RelationshipDetails::MapToElementType => builder,
    };
    builder.build()
}
