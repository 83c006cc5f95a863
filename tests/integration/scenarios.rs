//! End-to-end projection scenarios.

use crate::common::{TestHarness, context, fixtures, stores::InstrumentedStore};
use chrono::Utc;
use metadata_handlers::beans::{ActorProfileElement, EndpointElement};
use metadata_handlers::element::{EffectivityWindow, ElementProperties, ElementStatus, GenericElement};
use metadata_handlers::error::HandlerError;
use metadata_handlers::handlers::CreateOptions;
use metadata_handlers::projection::PropertyProjector;
use metadata_handlers::properties::{ActorProfileProperties, PersonDetails, TeamDetails};
use metadata_handlers::schema::names::relationships;

#[test]
fn test_person_projection_key_order() {
    let projector = PropertyProjector::new("scenario-service");
    let person = ActorProfileProperties::person(
        "person:1",
        PersonDetails {
            courtesy_title: Some("Dr".to_string()),
            ..Default::default()
        },
    )
    .with_known_name("Alice");

    let projected = projector.project_entity(Some(&person)).expect("person projects");
    let keys: Vec<&str> = projected.keys().collect();
    assert_eq!(
        keys,
        vec![
            "qualifiedName",
            "name",
            "description",
            "courtesyTitle",
            "initials",
            "givenNames",
            "surname",
            "fullName",
            "pronouns",
            "jobTitle",
            "employeeNumber",
            "employeeType",
            "preferredLanguage",
            "residentCountry",
            "timeZone",
            "isPublic",
            "additionalProperties",
            "extendedProperties",
        ]
    );
    assert_eq!(projected.get("qualifiedName").and_then(|v| v.as_str()), Some("person:1"));
    assert_eq!(projected.get("name").and_then(|v| v.as_str()), Some("Alice"));
    assert_eq!(projected.get("courtesyTitle").and_then(|v| v.as_str()), Some("Dr"));
}

#[test]
fn test_team_projection_has_no_person_fields() {
    let projector = PropertyProjector::new("scenario-service");
    let team = ActorProfileProperties::team(
        "team:1",
        TeamDetails {
            team_type: Some("engineering".to_string()),
            identifier: None,
        },
    );

    let projected = projector.project_entity(Some(&team)).expect("team projects");
    assert_eq!(projected.get("teamType").and_then(|v| v.as_str()), Some("engineering"));
    assert!(projected.contains_key("identifier"));
    for person_key in ["courtesyTitle", "initials", "givenNames", "surname", "fullName"] {
        assert!(!projected.contains_key(person_key));
    }
}

#[test]
fn test_reverse_projection_of_foreign_type_is_none() {
    let projector = PropertyProjector::new("scenario-service");
    let element = GenericElement {
        guid: "endpoint-1".to_string(),
        type_name: "Endpoint".to_string(),
        status: ElementStatus::Active,
        properties: ElementProperties::builder()
            .with_string("qualifiedName", Some("endpoint:1"))
            .build(),
        window: EffectivityWindow::unbounded(),
        anchor_guid: None,
        created_by: "garygeeke".to_string(),
        created: Utc::now(),
        updated: Utc::now(),
        version: 1,
    };

    let profile = projector
        .convert::<ActorProfileElement>(&element, &[], "get_actor_profile_by_guid")
        .unwrap();
    assert!(profile.is_none());

    let endpoint = projector
        .convert::<EndpointElement>(&element, &[], "get_endpoint_by_guid")
        .unwrap();
    assert!(endpoint.is_some());
}

#[tokio::test]
async fn test_malformed_relationship_fails_conversion() {
    let harness = TestHarness::with_store(InstrumentedStore::new());
    let profiles = harness.handlers.actor_profiles();
    let context = context();

    let guid = profiles
        .create_actor_profile(
            &context,
            &CreateOptions::default(),
            Some(&fixtures::team("team:broken", "project")),
        )
        .await
        .unwrap();
    harness
        .store
        .inject_stray_relationship(relationships::PROFILE_LOCATION);

    let error = profiles
        .get_actor_profile_by_guid(&context, &guid, None)
        .await
        .unwrap_err();
    match error {
        HandlerError::ConversionFailed {
            error_class,
            operation,
            service,
            ..
        } => {
            assert_eq!(error_class, "MalformedRelationship");
            assert_eq!(operation, "get_actor_profile_by_guid");
            assert_eq!(service, "test-service");
        }
        other => panic!("Expected ConversionFailed, got {:?}", other),
    }

    let audited = harness.audit.entries();
    assert_eq!(audited.len(), 1);
    assert_eq!(audited[0].element_guid, guid);
    assert_eq!(audited[0].operation, "get_actor_profile_by_guid");
}

#[tokio::test]
async fn test_relationship_paging_stops_at_empty_page() {
    let harness = TestHarness::with_store(InstrumentedStore::new());
    let profiles = harness.handlers.actor_profiles();
    let context = context();
    let options = CreateOptions::default();

    let parent = profiles
        .create_actor_profile(&context, &options, Some(&fixtures::team("team:p", "division")))
        .await
        .unwrap();
    for index in 0..3 {
        let child = profiles
            .create_actor_profile(
                &context,
                &options,
                Some(&fixtures::team(&format!("team:c{}", index), "squad")),
            )
            .await
            .unwrap();
        profiles
            .link_team_structure(&context, &parent, &child, None)
            .await
            .unwrap();
    }

    let bean = profiles
        .get_actor_profile_by_guid(&context, &parent, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(bean.sub_teams.len(), 3);
    // Page size 2: a full page, a short page, then the empty page.
    assert_eq!(harness.store.relationship_pages(), 3);
}
