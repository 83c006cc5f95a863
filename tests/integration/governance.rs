//! Governance definition handler tests.

use crate::common::{TestHarness, context, fixtures};
use metadata_handlers::element::{ElementProperties, ElementStatus, SearchOptions};
use metadata_handlers::error::HandlerError;
use metadata_handlers::handlers::CreateOptions;
use metadata_handlers::properties::{
    GovernanceControlKind, GovernanceDefinitionKind, RelationshipDetails, RelationshipProperties,
};
use metadata_handlers::schema::names::{properties, relationships, types};
use metadata_handlers::store::{MetadataStoreClient, NewElement, StoreError};
use serde_json::json;

#[tokio::test]
async fn test_variants_round_trip() {
    let harness = TestHarness::new();
    let definitions = harness.handlers.governance_definitions();
    let context = context();
    let options = CreateOptions::default();

    for (expected_type, definition) in [
        (types::GOVERNANCE_PRINCIPLE, fixtures::policy("GOV-1")),
        (types::REGULATION, fixtures::regulation("GOV-2")),
        (types::NAMING_STANDARD_RULE, fixtures::naming_rule("GOV-3")),
    ] {
        let guid = definitions
            .create_governance_definition(&context, &options, Some(&definition))
            .await
            .unwrap();
        let bean = definitions
            .get_governance_definition_by_guid(&context, &guid, None)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(bean.header.type_name, expected_type);
        assert_eq!(bean.properties, definition);
    }
}

#[tokio::test]
async fn test_control_extended_properties_survive() {
    let harness = TestHarness::new();
    let definitions = harness.handlers.governance_definitions();
    let context = context();

    let guid = definitions
        .create_governance_definition(
            &context,
            &CreateOptions::default(),
            Some(&fixtures::naming_rule("GOV-NSR-1")),
        )
        .await
        .unwrap();
    let bean = definitions
        .get_governance_definition_by_guid(&context, &guid, None)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(
        bean.properties.extended_properties.get("severity"),
        Some(&json!("warning"))
    );
    match bean.properties.kind {
        GovernanceDefinitionKind::Control(control) => {
            assert_eq!(
                control.implementation_description.as_deref(),
                Some("Checked at catalog time")
            );
            assert!(matches!(
                control.kind,
                GovernanceControlKind::NamingStandardRule { .. }
            ));
        }
        other => panic!("Expected a control, got {:?}", other),
    }
}

#[tokio::test]
async fn test_peer_links_with_caller_relationship_type() {
    let harness = TestHarness::new();
    let definitions = harness.handlers.governance_definitions();
    let context = context();
    let options = CreateOptions::default();

    let first = definitions
        .create_governance_definition(&context, &options, Some(&fixtures::policy("GOV-P-1")))
        .await
        .unwrap();
    let second = definitions
        .create_governance_definition(&context, &options, Some(&fixtures::policy("GOV-P-2")))
        .await
        .unwrap();

    definitions
        .link_peer_definitions(
            &context,
            &first,
            relationships::GOVERNANCE_POLICY_LINK,
            &second,
            Some(&RelationshipProperties::new(RelationshipDetails::PeerDefinition)),
        )
        .await
        .unwrap();

    for guid in [&first, &second] {
        let bean = definitions
            .get_governance_definition_by_guid(&context, guid, None)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(bean.peer_definitions.len(), 1);
        assert_eq!(
            bean.peer_definitions[0].relationship_type,
            relationships::GOVERNANCE_POLICY_LINK
        );
    }

    // Unknown relationship types are left to the store to reject.
    let error = definitions
        .link_peer_definitions(&context, &first, "NoSuchLink", &second, None)
        .await
        .unwrap_err();
    assert!(matches!(
        error,
        HandlerError::Store {
            source: StoreError::UnknownType { .. },
            ..
        }
    ));

    definitions
        .detach_peer_definitions(&context, &first, relationships::GOVERNANCE_POLICY_LINK, &second)
        .await
        .unwrap();
    let bean = definitions
        .get_governance_definition_by_guid(&context, &first, None)
        .await
        .unwrap()
        .unwrap();
    assert!(bean.peer_definitions.is_empty());
}

#[tokio::test]
async fn test_implementation_resources() {
    let harness = TestHarness::new();
    let definitions = harness.handlers.governance_definitions();
    let context = context();

    let rule = definitions
        .create_governance_definition(
            &context,
            &CreateOptions::default(),
            Some(&fixtures::naming_rule("GOV-NSR-2")),
        )
        .await
        .unwrap();
    let resource = harness
        .store
        .create_element(
            &context,
            NewElement::new(
                types::CONNECTION,
                ElementProperties::builder()
                    .with_string(properties::QUALIFIED_NAME, Some("connection:linter"))
                    .build(),
            ),
        )
        .await
        .unwrap();

    definitions
        .attach_implementation_resource(
            &context,
            &rule,
            relationships::IMPLEMENTATION_RESOURCE,
            &resource,
            Some(&RelationshipProperties::new(
                RelationshipDetails::ImplementationResource {
                    description: Some("lint job".to_string()),
                },
            )),
        )
        .await
        .unwrap();

    let bean = definitions
        .get_governance_definition_by_guid(&context, &rule, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(bean.implementation_resources.len(), 1);
    assert_eq!(bean.implementation_resources[0].type_name, types::CONNECTION);

    definitions
        .detach_implementation_resource(
            &context,
            &rule,
            relationships::IMPLEMENTATION_RESOURCE,
            &resource,
        )
        .await
        .unwrap();
    assert_eq!(harness.store.stats().await.relationship_count, 0);
}

#[tokio::test]
async fn test_status_filtered_search() {
    let harness = TestHarness::new();
    let definitions = harness.handlers.governance_definitions();
    let context = context();

    let draft = definitions
        .create_governance_definition(
            &context,
            &CreateOptions::new().with_status(ElementStatus::Draft),
            Some(&fixtures::policy("GOV-DRAFT")),
        )
        .await
        .unwrap();
    definitions
        .create_governance_definition(
            &context,
            &CreateOptions::default(),
            Some(&fixtures::policy("GOV-ACTIVE")),
        )
        .await
        .unwrap();

    let drafts = definitions
        .find_governance_definitions(
            &context,
            "GOV-",
            &SearchOptions::new().with_status(ElementStatus::Draft),
        )
        .await
        .unwrap();
    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0].header.guid, draft);

    let by_title = definitions
        .get_governance_definitions_by_name(&context, "Data is an asset", &SearchOptions::new())
        .await
        .unwrap();
    assert_eq!(by_title.len(), 2);
}
