//! Property-based checks of projection ordering and round trips.

use chrono::Utc;
use metadata_handlers::beans::{EndpointElement, SchemaAttributeElement};
use metadata_handlers::element::{
    EffectivityWindow, ElementProperties, ElementStatus, GenericElement,
};
use metadata_handlers::projection::PropertyProjector;
use metadata_handlers::properties::{
    ActorProfileProperties, EndpointProperties, GovernanceDefinitionKind,
    GovernanceDefinitionProperties, PersonDetails, SchemaAttributeProperties, TeamDetails,
    TypedProperties,
};
use metadata_handlers::schema::names::{properties, types};
use proptest::prelude::*;
use serde_json::json;

fn stored(type_name: &str, properties: ElementProperties) -> GenericElement {
    let now = Utc::now();
    GenericElement {
        guid: "element-under-test".to_string(),
        type_name: type_name.to_string(),
        status: ElementStatus::Active,
        properties,
        window: EffectivityWindow::unbounded(),
        anchor_guid: None,
        created_by: "garygeeke".to_string(),
        created: now,
        updated: now,
        version: 1,
    }
}

fn actor_profile_strategy() -> impl Strategy<Value = ActorProfileProperties> {
    let person = (
        "[a-z:]{1,20}",
        proptest::option::of("[A-Z][a-z]{1,10}"),
        proptest::option::of("[A-Z][a-z]{1,10}"),
    )
        .prop_map(|(qualified_name, surname, job_title)| {
            ActorProfileProperties::person(
                qualified_name,
                PersonDetails {
                    surname,
                    job_title,
                    ..Default::default()
                },
            )
        });
    let team = ("[a-z:]{1,20}", proptest::option::of("[a-z]{1,10}")).prop_map(
        |(qualified_name, team_type)| {
            ActorProfileProperties::team(
                qualified_name,
                TeamDetails {
                    team_type,
                    identifier: None,
                },
            )
        },
    );
    let it_profile = "[a-z:]{1,20}".prop_map(ActorProfileProperties::it_profile);
    prop_oneof![person, team, it_profile]
}

fn endpoint_strategy() -> impl Strategy<Value = EndpointProperties> {
    (
        "endpoint:[a-z]{1,12}",
        proptest::option::of("[A-Za-z ]{1,20}"),
        proptest::option::of("https://[a-z]{1,10}:[0-9]{2,4}"),
        proptest::option::of("https?"),
        proptest::collection::btree_map("[a-z]{1,6}", "[a-z0-9]{0,8}", 0..3),
    )
        .prop_map(|(qualified_name, display_name, address, protocol, additional)| {
            let mut endpoint = EndpointProperties::new(qualified_name);
            endpoint.display_name = display_name;
            endpoint.network_address = address;
            endpoint.protocol = protocol;
            endpoint.additional_properties = additional;
            endpoint
        })
}

fn attribute_strategy() -> impl Strategy<Value = SchemaAttributeProperties> {
    (
        "schema:[a-z.]{1,16}",
        0i64..64,
        0i64..3,
        proptest::option::of("(VARCHAR|INT|DATE)"),
        proptest::collection::vec("[a-z]{1,8}", 0..3),
        proptest::option::of("[a-z]{1,8}"),
    )
        .prop_map(|(qualified_name, position, min, native_class, aliases, note)| {
            let mut attribute = SchemaAttributeProperties::new(qualified_name)
                .with_position(position)
                .with_cardinality(min, min + 1)
                .with_aliases(aliases);
            attribute.native_class = native_class;
            if let Some(note) = note {
                attribute = attribute.with_extended_property("note", json!(note));
            }
            attribute
        })
}

proptest! {
    #[test]
    fn test_identity_first_and_extensibility_last(profile in actor_profile_strategy()) {
        let projector = PropertyProjector::new("proptest-service");
        let projected = projector.project_entity(Some(&profile)).expect("profile projects");
        let keys: Vec<&str> = projected.keys().collect();

        prop_assert_eq!(keys[0], profile.identity_property());
        prop_assert_eq!(
            projected.get(properties::QUALIFIED_NAME).and_then(|v| v.as_str()),
            Some(profile.identity())
        );
        let tail = &keys[keys.len() - 2..];
        prop_assert_eq!(tail, &[properties::ADDITIONAL_PROPERTIES, properties::EXTENDED_PROPERTIES]);
    }

    #[test]
    fn test_projection_is_deterministic(profile in actor_profile_strategy()) {
        let projector = PropertyProjector::new("proptest-service");
        let first = projector.project_entity(Some(&profile));
        let second = projector.project_entity(Some(&profile.clone()));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_governance_identity_is_document_identifier(identifier in "GOV-[0-9]{1,6}") {
        let projector = PropertyProjector::new("proptest-service");
        let definition = GovernanceDefinitionProperties::new(
            identifier.clone(),
            GovernanceDefinitionKind::Principle,
        );
        let projected = projector.project_entity(Some(&definition)).expect("definition projects");
        prop_assert_eq!(projected.first_key(), Some(properties::QUALIFIED_NAME));
        prop_assert_eq!(
            projected.get(properties::QUALIFIED_NAME).and_then(|v| v.as_str()),
            Some(identifier.as_str())
        );
    }

    #[test]
    fn test_endpoint_round_trip(endpoint in endpoint_strategy()) {
        let projector = PropertyProjector::new("proptest-service");
        let projected = projector.project_entity(Some(&endpoint)).expect("endpoint projects");
        let element = stored(types::ENDPOINT, projected);

        let bean = projector
            .convert::<EndpointElement>(&element, &[], "get_endpoint_by_guid")
            .expect("conversion succeeds")
            .expect("endpoint type matches");
        prop_assert_eq!(bean.properties, endpoint);
    }

    #[test]
    fn test_schema_attribute_round_trip(attribute in attribute_strategy()) {
        let projector = PropertyProjector::new("proptest-service");
        let projected = projector.project_entity(Some(&attribute)).expect("attribute projects");
        let element = stored(types::SCHEMA_ATTRIBUTE, projected);

        let bean = projector
            .convert::<SchemaAttributeElement>(&element, &[], "get_schema_attribute_by_guid")
            .expect("conversion succeeds")
            .expect("attribute type matches");
        prop_assert_eq!(bean.properties, attribute);
        prop_assert!(bean.nested_attributes.is_empty());
    }
}

#[test]
fn test_absent_properties_project_to_none() {
    let projector = PropertyProjector::new("proptest-service");
    assert!(projector.project_entity::<EndpointProperties>(None).is_none());
    assert!(projector.project_relationship(None).is_none());
}
