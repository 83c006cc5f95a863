//! Typed property fixtures.

use metadata_handlers::properties::{
    ActorProfileProperties, EndpointProperties, GovernanceControl, GovernanceControlKind,
    GovernanceDefinitionKind, GovernanceDefinitionProperties, PersonDetails,
    SchemaAttributeProperties, SchemaTypeKind, SchemaTypeProperties, TeamDetails,
};
use serde_json::json;

pub fn person(qualified_name: &str, known_name: &str) -> ActorProfileProperties {
    ActorProfileProperties::person(
        qualified_name,
        PersonDetails {
            courtesy_title: Some("Dr".to_string()),
            given_names: Some(known_name.to_string()),
            surname: Some("Overview".to_string()),
            job_title: Some("Data Steward".to_string()),
            ..Default::default()
        },
    )
    .with_known_name(known_name)
    .with_additional_property("badge", "A-113")
}

pub fn team(qualified_name: &str, team_type: &str) -> ActorProfileProperties {
    ActorProfileProperties::team(
        qualified_name,
        TeamDetails {
            team_type: Some(team_type.to_string()),
            identifier: Some(format!("{}-id", qualified_name)),
        },
    )
}

pub fn endpoint(qualified_name: &str, address: &str) -> EndpointProperties {
    EndpointProperties::new(qualified_name)
        .with_display_name("Catalog API")
        .with_network_address(address)
        .with_protocol("https")
        .with_encryption_method("TLS1.3")
}

pub fn policy(identifier: &str) -> GovernanceDefinitionProperties {
    GovernanceDefinitionProperties::new(identifier, GovernanceDefinitionKind::Principle)
        .with_title("Data is an asset")
        .with_summary("Treat data with the care given to other assets")
        .with_domain_identifier(1)
        .with_outcomes(vec!["trusted data".to_string()])
}

pub fn regulation(identifier: &str) -> GovernanceDefinitionProperties {
    GovernanceDefinitionProperties::new(
        identifier,
        GovernanceDefinitionKind::Regulation {
            source: Some("EU".to_string()),
            regulators: vec!["EDPB".to_string()],
        },
    )
    .with_title("GDPR")
}

pub fn naming_rule(identifier: &str) -> GovernanceDefinitionProperties {
    GovernanceDefinitionProperties::control(
        identifier,
        GovernanceControl::new(GovernanceControlKind::NamingStandardRule {
            name_patterns: vec!["^[a-z_]+$".to_string()],
        })
        .with_implementation_description("Checked at catalog time"),
    )
    .with_title("Snake case column names")
    .with_extended_property("severity", json!("warning"))
}

pub fn struct_type(qualified_name: &str) -> SchemaTypeProperties {
    SchemaTypeProperties::new(qualified_name, SchemaTypeKind::Struct)
        .with_display_name("Customer record")
        .with_version_number("1.0")
}

pub fn column(qualified_name: &str, position: i64) -> SchemaAttributeProperties {
    SchemaAttributeProperties::new(qualified_name)
        .with_position(position)
        .with_native_class("VARCHAR")
        .with_length(120)
}
