//! Actor profile handler tests.

use crate::common::{TestHarness, context, fixtures};
use chrono::Utc;
use metadata_handlers::element::{ElementProperties, SearchOptions};
use metadata_handlers::error::{HandlerError, ValidationError};
use metadata_handlers::handlers::CreateOptions;
use metadata_handlers::properties::{
    ActorProfileKind, ActorProfileProperties, RelationshipDetails, RelationshipProperties,
};
use metadata_handlers::schema::names::{properties, types};
use metadata_handlers::store::{InMemoryMetadataStore, MetadataStoreClient, NewElement, StoreError};
use std::collections::BTreeMap;

async fn create_plain(
    harness: &TestHarness<InMemoryMetadataStore>,
    type_name: &str,
    name: &str,
) -> String {
    let properties = ElementProperties::builder()
        .with_string(properties::QUALIFIED_NAME, Some(name))
        .build();
    harness
        .store
        .create_element(&context(), NewElement::new(type_name, properties))
        .await
        .expect("Failed to create supporting element")
}

#[tokio::test]
async fn test_person_profile_lifecycle() {
    let harness = TestHarness::new();
    let profiles = harness.handlers.actor_profiles();
    let context = context();

    let erin = fixtures::person("person:erin", "Erin");
    let guid = profiles
        .create_actor_profile(&context, &CreateOptions::default(), Some(&erin))
        .await
        .expect("Failed to create person");

    let stored = profiles
        .get_actor_profile_by_guid(&context, &guid, None)
        .await
        .unwrap()
        .expect("Person should exist");
    assert_eq!(stored.header.type_name, types::PERSON);
    assert_eq!(stored.properties, erin);

    let renamed = erin.clone().with_known_name("Erin O.");
    profiles
        .update_actor_profile(&context, &guid, false, Some(&renamed))
        .await
        .unwrap();
    let stored = profiles
        .get_actor_profile_by_guid(&context, &guid, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.properties.known_name.as_deref(), Some("Erin O."));
    assert_eq!(stored.header.version, 2);

    profiles
        .delete_actor_profile(&context, &guid, false)
        .await
        .unwrap();
    assert!(
        profiles
            .get_actor_profile_by_guid(&context, &guid, None)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_locations_and_identities() {
    let harness = TestHarness::new();
    let profiles = harness.handlers.actor_profiles();
    let context = context();

    let profile_guid = profiles
        .create_actor_profile(
            &context,
            &CreateOptions::default(),
            Some(&fixtures::person("person:harry", "Harry")),
        )
        .await
        .unwrap();
    let location_guid = create_plain(&harness, types::LOCATION, "location:hq").await;
    let identity_guid = create_plain(&harness, types::USER_IDENTITY, "user:harry").await;

    profiles
        .link_location_to_profile(
            &context,
            &profile_guid,
            &location_guid,
            Some(&RelationshipProperties::profile_location("work")),
        )
        .await
        .unwrap();
    profiles
        .link_identity_to_profile(
            &context,
            &profile_guid,
            &identity_guid,
            Some(&RelationshipProperties::new(RelationshipDetails::ProfileIdentity {
                role_type_name: Some("primary".to_string()),
            })),
        )
        .await
        .unwrap();

    let bean = profiles
        .get_actor_profile_by_guid(&context, &profile_guid, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(bean.locations.len(), 1);
    assert_eq!(bean.locations[0].guid, location_guid);
    assert_eq!(
        bean.locations[0]
            .relationship_properties
            .get(properties::ASSOCIATION_TYPE)
            .and_then(|v| v.as_str()),
        Some("work")
    );
    assert_eq!(bean.user_identities.len(), 1);
    assert_eq!(bean.user_identities[0].type_name, types::USER_IDENTITY);

    profiles
        .detach_location_from_profile(&context, &profile_guid, &location_guid)
        .await
        .unwrap();
    profiles
        .detach_identity_from_profile(&context, &profile_guid, &identity_guid)
        .await
        .unwrap();

    let bean = profiles
        .get_actor_profile_by_guid(&context, &profile_guid, None)
        .await
        .unwrap()
        .unwrap();
    assert!(bean.locations.is_empty());
    assert!(bean.user_identities.is_empty());
}

#[tokio::test]
async fn test_asset_detach_uses_both_guids() {
    let harness = TestHarness::new();
    let profiles = harness.handlers.actor_profiles();
    let context = context();

    let it_profile = ActorProfileProperties::it_profile("itprofile:cocoMDS1");
    let it_profile_guid = profiles
        .create_actor_profile(&context, &CreateOptions::default(), Some(&it_profile))
        .await
        .unwrap();
    let server_guid = create_plain(&harness, types::SOFTWARE_SERVER, "server:cocoMDS1").await;

    profiles
        .link_asset_to_profile(&context, &server_guid, &it_profile_guid, None)
        .await
        .unwrap();
    let bean = profiles
        .get_actor_profile_by_guid(&context, &it_profile_guid, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(bean.properties.kind, ActorProfileKind::ItProfile);
    assert_eq!(bean.linked_infrastructure.len(), 1);
    assert_eq!(bean.linked_infrastructure[0].guid, server_guid);

    // Passing the profile guid for both ends names no existing relationship.
    let wrong = profiles
        .detach_asset_from_profile(&context, &it_profile_guid, &it_profile_guid)
        .await;
    assert!(matches!(wrong, Err(HandlerError::Store { .. })));

    profiles
        .detach_asset_from_profile(&context, &server_guid, &it_profile_guid)
        .await
        .unwrap();
    assert_eq!(harness.store.stats().await.relationship_count, 0);
}

#[tokio::test]
async fn test_search_by_regex_and_name() {
    let harness = TestHarness::new();
    let profiles = harness.handlers.actor_profiles();
    let context = context();
    let options = CreateOptions::default();

    for (name, known) in [("person:ann", "Ann"), ("person:bob", "Bob")] {
        profiles
            .create_actor_profile(&context, &options, Some(&fixtures::person(name, known)))
            .await
            .unwrap();
    }
    profiles
        .create_actor_profile(&context, &options, Some(&fixtures::team("team:ops", "department")))
        .await
        .unwrap();

    let people = profiles
        .find_actor_profiles(&context, "^person:", &SearchOptions::new())
        .await
        .unwrap();
    assert_eq!(people.len(), 2);
    assert!(
        people
            .iter()
            .all(|p| matches!(p.properties.kind, ActorProfileKind::Person(_)))
    );

    let everyone = profiles
        .find_actor_profiles(&context, ".*", &SearchOptions::new().with_paging(0, 2))
        .await
        .unwrap();
    assert_eq!(everyone.len(), 2);

    let bob = profiles
        .get_actor_profiles_by_name(&context, "Bob", &SearchOptions::new())
        .await
        .unwrap();
    assert_eq!(bob.len(), 1);
    assert_eq!(bob[0].properties.qualified_name, "person:bob");
}

#[tokio::test]
async fn test_invalid_input_rejected_locally() {
    let harness = TestHarness::new();
    let profiles = harness.handlers.actor_profiles();
    let context = context();

    let blank_identity = ActorProfileProperties::generic("  ");
    let error = profiles
        .create_actor_profile(&context, &CreateOptions::default(), Some(&blank_identity))
        .await
        .unwrap_err();
    assert!(matches!(
        error,
        HandlerError::InvalidInput(ValidationError::MissingIdentity { .. })
    ));

    let error = profiles
        .find_actor_profiles(&context, "(unclosed", &SearchOptions::new())
        .await
        .unwrap_err();
    assert!(matches!(
        error,
        HandlerError::InvalidInput(ValidationError::InvalidSearchString { .. })
    ));

    let error = profiles
        .find_actor_profiles(&context, ".*", &SearchOptions::new().with_paging(0, 5000))
        .await
        .unwrap_err();
    assert!(matches!(
        error,
        HandlerError::InvalidInput(ValidationError::PageSizeTooLarge { .. })
    ));

    assert_eq!(harness.store.stats().await.element_count, 0);
}

#[tokio::test]
async fn test_unauthorized_user() {
    let harness = TestHarness::new();
    harness.store.deny_user("garygeeke").await;

    let error = harness
        .handlers
        .actor_profiles()
        .create_actor_profile(
            &context(),
            &CreateOptions::default(),
            Some(&fixtures::team("team:denied", "project")),
        )
        .await
        .unwrap_err();
    match error {
        HandlerError::Unauthorized {
            user_id, operation, ..
        } => {
            assert_eq!(user_id, "garygeeke");
            assert_eq!(operation, "create_actor_profile");
        }
        other => panic!("Expected Unauthorized, got {:?}", other),
    }
}

#[tokio::test]
async fn test_team_hierarchy_pages_all_relationships() {
    let harness = TestHarness::new();
    let profiles = harness.handlers.actor_profiles();
    let context = context();
    let options = CreateOptions::default();

    let parent = profiles
        .create_actor_profile(&context, &options, Some(&fixtures::team("team:root", "division")))
        .await
        .unwrap();

    // More sub-teams than the harness relationship page size of 2.
    let mut children = Vec::new();
    for index in 0..5 {
        let child = profiles
            .create_actor_profile(
                &context,
                &options,
                Some(&fixtures::team(&format!("team:child-{}", index), "squad")),
            )
            .await
            .unwrap();
        profiles
            .link_team_structure(
                &context,
                &parent,
                &child,
                Some(&RelationshipProperties::new(RelationshipDetails::TeamStructure {
                    delegation_escalation_authority: index % 2 == 0,
                })),
            )
            .await
            .unwrap();
        children.push(child);
    }

    let bean = profiles
        .get_actor_profile_by_guid(&context, &parent, None)
        .await
        .unwrap()
        .unwrap();
    let mut linked: Vec<String> = bean.sub_teams.iter().map(|t| t.guid.clone()).collect();
    linked.sort();
    children.sort();
    assert_eq!(linked, children);
    assert!(bean.super_team.is_none());
}

#[tokio::test]
async fn test_template_of_another_family_is_refused() {
    let harness = TestHarness::new();
    let context = context();

    let endpoint_guid = harness
        .handlers
        .endpoints()
        .create_endpoint(
            &context,
            &CreateOptions::default(),
            Some(&fixtures::endpoint("endpoint:x", "https://x")),
        )
        .await
        .unwrap();

    let error = harness
        .handlers
        .actor_profiles()
        .create_actor_profile_from_template(
            &context,
            &CreateOptions::default(),
            &endpoint_guid,
            None,
            &BTreeMap::new(),
        )
        .await
        .unwrap_err();
    assert!(matches!(
        error,
        HandlerError::Store {
            source: StoreError::InvalidRequest { .. },
            ..
        }
    ));
    assert_eq!(harness.store.stats().await.element_count, 1);
}

#[tokio::test]
async fn test_as_of_time_applies_to_relationships() {
    let harness = TestHarness::new();
    let profiles = harness.handlers.actor_profiles();
    let context = context();
    let options = CreateOptions::default();
    let pause = std::time::Duration::from_millis(5);

    let parent = profiles
        .create_actor_profile(
            &context,
            &options,
            Some(&fixtures::team("team:asof-parent", "division")),
        )
        .await
        .unwrap();
    let child = profiles
        .create_actor_profile(
            &context,
            &options,
            Some(&fixtures::team("team:asof-child", "squad")),
        )
        .await
        .unwrap();
    tokio::time::sleep(pause).await;
    let as_of = Utc::now();
    tokio::time::sleep(pause).await;
    profiles
        .link_team_structure(&context, &parent, &child, None)
        .await
        .unwrap();

    let found = profiles
        .find_actor_profiles(
            &context,
            "^team:asof-parent$",
            &SearchOptions::new().with_as_of_time(as_of),
        )
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert!(found[0].sub_teams.is_empty());

    let then = profiles
        .get_actor_profile_by_guid(&context, &parent, Some(as_of))
        .await
        .unwrap()
        .unwrap();
    assert!(then.sub_teams.is_empty());

    let now = profiles
        .get_actor_profile_by_guid(&context, &parent, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(now.sub_teams.len(), 1);

    let before_creation = as_of - chrono::Duration::hours(1);
    assert!(
        profiles
            .get_actor_profile_by_guid(&context, &parent, Some(before_creation))
            .await
            .unwrap()
            .is_none()
    );
}
