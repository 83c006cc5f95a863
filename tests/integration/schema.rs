//! Schema type and schema attribute handler tests.

use crate::common::{TestHarness, context, fixtures};
use metadata_handlers::element::SearchOptions;
use metadata_handlers::handlers::CreateOptions;
use metadata_handlers::properties::{
    SchemaTypeKind, SchemaTypeProperties, SimpleSchemaType, SimpleSchemaTypeKind,
};
use metadata_handlers::schema::names::types;

#[tokio::test]
async fn test_struct_with_columns() {
    let harness = TestHarness::new();
    let schema_types = harness.handlers.schema_types();
    let attributes = harness.handlers.schema_attributes();
    let context = context();

    let table = fixtures::struct_type("schema:customer");
    let table_guid = schema_types
        .create_schema_type(&context, &CreateOptions::default(), Some(&table))
        .await
        .unwrap();

    let mut columns = Vec::new();
    for (position, name) in ["id", "name", "email"].iter().enumerate() {
        let column = fixtures::column(&format!("schema:customer.{}", name), position as i64);
        let guid = attributes
            .create_schema_attribute_for_type(&context, &table_guid, Some(&column))
            .await
            .unwrap();
        columns.push(guid);
    }

    let bean = schema_types
        .get_schema_type_by_guid(&context, &table_guid, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(bean.header.type_name, types::STRUCT_SCHEMA_TYPE);
    assert_eq!(bean.properties, table);
    let mut linked: Vec<String> = bean.attributes.iter().map(|a| a.guid.clone()).collect();
    linked.sort();
    columns.sort();
    assert_eq!(linked, columns);

    let found = attributes
        .find_schema_attributes(&context, "customer\\.e", &SearchOptions::new())
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].properties.element_position, 2);
    assert_eq!(found[0].properties.native_class.as_deref(), Some("VARCHAR"));
}

#[tokio::test]
async fn test_attribute_moves_between_types() {
    let harness = TestHarness::new();
    let schema_types = harness.handlers.schema_types();
    let attributes = harness.handlers.schema_attributes();
    let context = context();
    let options = CreateOptions::default();

    let first = schema_types
        .create_schema_type(&context, &options, Some(&fixtures::struct_type("schema:a")))
        .await
        .unwrap();
    let second = schema_types
        .create_schema_type(&context, &options, Some(&fixtures::struct_type("schema:b")))
        .await
        .unwrap();
    let attribute = attributes
        .create_schema_attribute(&context, &options, Some(&fixtures::column("schema:col", 0)))
        .await
        .unwrap();

    schema_types
        .link_attribute_to_schema_type(&context, &first, &attribute, None)
        .await
        .unwrap();
    schema_types
        .detach_attribute_from_schema_type(&context, &first, &attribute)
        .await
        .unwrap();
    schema_types
        .link_attribute_to_schema_type(&context, &second, &attribute, None)
        .await
        .unwrap();

    let bean = attributes
        .get_schema_attribute_by_guid(&context, &attribute, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(bean.parent_type.map(|t| t.guid), Some(second));
}

#[tokio::test]
async fn test_choice_options() {
    let harness = TestHarness::new();
    let schema_types = harness.handlers.schema_types();
    let context = context();
    let options = CreateOptions::default();

    let choice = schema_types
        .create_schema_type(
            &context,
            &options,
            Some(&SchemaTypeProperties::new("schema:id-or-name", SchemaTypeKind::Choice)),
        )
        .await
        .unwrap();
    let as_int = schema_types
        .create_schema_type(
            &context,
            &options,
            Some(&SchemaTypeProperties::primitive("schema:int", "int")),
        )
        .await
        .unwrap();
    let as_enum = schema_types
        .create_schema_type(
            &context,
            &options,
            Some(&SchemaTypeProperties::new(
                "schema:colour",
                SchemaTypeKind::Simple(SimpleSchemaType::new(
                    "string",
                    SimpleSchemaTypeKind::Enum {
                        default_value: Some("red".to_string()),
                    },
                )),
            )),
        )
        .await
        .unwrap();

    for option in [&as_int, &as_enum] {
        schema_types
            .setup_schema_type_option(&context, &choice, option, None)
            .await
            .unwrap();
    }

    let bean = schema_types
        .get_schema_type_by_guid(&context, &choice, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(bean.options.len(), 2);
    let option_types: Vec<&str> = bean.options.iter().map(|o| o.type_name.as_str()).collect();
    assert!(option_types.contains(&types::PRIMITIVE_SCHEMA_TYPE));
    assert!(option_types.contains(&types::ENUM_SCHEMA_TYPE));

    schema_types
        .clear_schema_type_option(&context, &choice, &as_int)
        .await
        .unwrap();
    let bean = schema_types
        .get_schema_type_by_guid(&context, &choice, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(bean.options.len(), 1);
    assert_eq!(bean.options[0].guid, as_enum);
}

#[tokio::test]
async fn test_cascaded_delete_of_anchored_attributes() {
    let harness = TestHarness::new();
    let schema_types = harness.handlers.schema_types();
    let attributes = harness.handlers.schema_attributes();
    let context = context();

    let table = schema_types
        .create_schema_type(
            &context,
            &CreateOptions::default(),
            Some(&fixtures::struct_type("schema:orders")),
        )
        .await
        .unwrap();
    attributes
        .create_schema_attribute_for_type(&context, &table, Some(&fixtures::column("schema:orders.id", 0)))
        .await
        .unwrap();

    let refused = schema_types.delete_schema_type(&context, &table, false).await;
    assert!(refused.is_err());
    assert_eq!(harness.store.stats().await.element_count, 2);

    schema_types
        .delete_schema_type(&context, &table, true)
        .await
        .unwrap();
    let stats = harness.store.stats().await;
    assert_eq!(stats.element_count, 0);
    assert_eq!(stats.relationship_count, 0);
}
