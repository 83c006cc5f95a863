//! Endpoint handler tests.

use crate::common::{TestHarness, context, fixtures, stores::InstrumentedStore};
use metadata_handlers::element::{ElementProperties, SearchOptions};
use metadata_handlers::handlers::CreateOptions;
use metadata_handlers::properties::{
    EndpointProperties, RelationshipDetails, RelationshipProperties,
};
use metadata_handlers::schema::names::{properties, types};
use metadata_handlers::store::{MetadataStoreClient, NewElement};
use std::collections::BTreeMap;

#[tokio::test]
async fn test_endpoint_server_links() {
    let harness = TestHarness::new();
    let endpoints = harness.handlers.endpoints();
    let context = context();

    let server_guid = harness
        .store
        .create_element(
            &context,
            NewElement::new(
                types::SOFTWARE_SERVER,
                ElementProperties::builder()
                    .with_string(properties::QUALIFIED_NAME, Some("server:catalog"))
                    .build(),
            ),
        )
        .await
        .unwrap();

    let endpoint_guid = endpoints
        .create_endpoint(
            &context,
            &CreateOptions::default(),
            Some(&fixtures::endpoint("endpoint:catalog", "https://catalog:9443")),
        )
        .await
        .unwrap();

    endpoints
        .link_endpoint_to_server(&context, &server_guid, &endpoint_guid, None)
        .await
        .unwrap();
    assert_eq!(harness.store.stats().await.relationship_count, 1);

    endpoints
        .detach_endpoint_from_server(&context, &server_guid, &endpoint_guid)
        .await
        .unwrap();
    assert_eq!(harness.store.stats().await.relationship_count, 0);
}

#[tokio::test]
async fn test_endpoint_from_template() {
    let harness = TestHarness::new();
    let endpoints = harness.handlers.endpoints();
    let context = context();

    let template = EndpointProperties::new("endpoint:{{host}}")
        .with_network_address("https://{{host}}:{{port}}/api")
        .with_protocol("https");
    let template_guid = endpoints
        .create_endpoint(&context, &CreateOptions::default(), Some(&template))
        .await
        .unwrap();

    let placeholders = BTreeMap::from([
        ("host".to_string(), "orders".to_string()),
        ("port".to_string(), "8443".to_string()),
    ]);
    let replacement = EndpointProperties::new("endpoint:{{host}}").with_description("Orders");
    let guid = endpoints
        .create_endpoint_from_template(
            &context,
            &CreateOptions::default(),
            &template_guid,
            Some(&replacement),
            &placeholders,
        )
        .await
        .unwrap();

    let copy = endpoints
        .get_endpoint_by_guid(&context, &guid, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(copy.properties.qualified_name, "endpoint:orders");
    assert_eq!(
        copy.properties.network_address.as_deref(),
        Some("https://orders:8443/api")
    );
    assert_eq!(copy.properties.protocol.as_deref(), Some("https"));
    assert_eq!(copy.properties.description.as_deref(), Some("Orders"));
}

#[tokio::test]
async fn test_replace_all_update_clears_fields() {
    let harness = TestHarness::new();
    let endpoints = harness.handlers.endpoints();
    let context = context();

    let guid = endpoints
        .create_endpoint(
            &context,
            &CreateOptions::default(),
            Some(&fixtures::endpoint("endpoint:billing", "https://billing")),
        )
        .await
        .unwrap();

    endpoints
        .update_endpoint(
            &context,
            &guid,
            true,
            Some(&EndpointProperties::new("endpoint:billing")),
        )
        .await
        .unwrap();

    let stored = endpoints
        .get_endpoint_by_guid(&context, &guid, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.properties, EndpointProperties::new("endpoint:billing"));
}

#[tokio::test]
async fn test_endpoint_lookup_makes_no_relationship_queries() {
    let harness = TestHarness::with_store(InstrumentedStore::new());
    let endpoints = harness.handlers.endpoints();
    let context = context();

    let guid = endpoints
        .create_endpoint(
            &context,
            &CreateOptions::default(),
            Some(&fixtures::endpoint("endpoint:search", "https://search")),
        )
        .await
        .unwrap();
    endpoints
        .get_endpoint_by_guid(&context, &guid, None)
        .await
        .unwrap()
        .unwrap();
    let found = endpoints
        .find_endpoints(&context, "search", &SearchOptions::new())
        .await
        .unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(harness.store.relationship_pages(), 0);
}

#[tokio::test]
async fn test_blank_endpoint_guid_makes_no_store_call() {
    let harness = TestHarness::with_store(InstrumentedStore::new());
    let context = context();

    let result = harness
        .handlers
        .endpoints()
        .update_endpoint(&context, "", false, Some(&EndpointProperties::new("endpoint:x")))
        .await;

    assert!(result.unwrap_err().is_invalid_input());
    assert_eq!(harness.store.calls(), 0);
}

#[tokio::test]
async fn test_merge_update_keeps_additional_properties() {
    let harness = TestHarness::new();
    let endpoints = harness.handlers.endpoints();
    let context = context();

    let original = EndpointProperties::new("endpoint:orders")
        .with_protocol("https")
        .with_additional_property("owner", "sales");
    let guid = endpoints
        .create_endpoint(&context, &CreateOptions::default(), Some(&original))
        .await
        .unwrap();

    endpoints
        .update_endpoint(
            &context,
            &guid,
            false,
            Some(&EndpointProperties::new("endpoint:orders").with_description("Orders API")),
        )
        .await
        .unwrap();

    let stored = endpoints
        .get_endpoint_by_guid(&context, &guid, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.properties.protocol.as_deref(), Some("https"));
    assert_eq!(stored.properties.description.as_deref(), Some("Orders API"));
    assert_eq!(
        stored.properties.additional_properties.get("owner").map(String::as_str),
        Some("sales")
    );
}

#[tokio::test]
async fn test_link_overload_follows_relationship_properties() {
    let harness = TestHarness::with_store(InstrumentedStore::new());
    let endpoints = harness.handlers.endpoints();
    let context = context();

    let server_guid = harness
        .store
        .create_element(
            &context,
            NewElement::new(
                types::SOFTWARE_SERVER,
                ElementProperties::builder()
                    .with_string(properties::QUALIFIED_NAME, Some("server:links"))
                    .build(),
            ),
        )
        .await
        .unwrap();
    let endpoint_guid = endpoints
        .create_endpoint(
            &context,
            &CreateOptions::default(),
            Some(&fixtures::endpoint("endpoint:links", "https://links")),
        )
        .await
        .unwrap();

    endpoints
        .link_endpoint_to_server(&context, &server_guid, &endpoint_guid, None)
        .await
        .unwrap();
    assert_eq!(harness.store.plain_relationships(), 1);
    assert_eq!(harness.store.relationships_with_properties(), 0);

    endpoints
        .detach_endpoint_from_server(&context, &server_guid, &endpoint_guid)
        .await
        .unwrap();

    // A record with no fields set still selects the overload with properties.
    endpoints
        .link_endpoint_to_server(
            &context,
            &server_guid,
            &endpoint_guid,
            Some(&RelationshipProperties::new(RelationshipDetails::ServerEndpoint)),
        )
        .await
        .unwrap();
    assert_eq!(harness.store.plain_relationships(), 1);
    assert_eq!(harness.store.relationships_with_properties(), 1);
}
