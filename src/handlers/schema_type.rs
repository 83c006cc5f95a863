//! Schema types, including choices and maps.

use crate::beans::SchemaTypeElement;
use crate::element::{RequestContext, SearchOptions};
use crate::error::HandlerResult;
use crate::handlers::{CreateOptions, ElementHandler};
use crate::properties::{RelationshipProperties, SchemaTypeProperties, TypedProperties};
use crate::schema::names::{properties, relationships, types};
use crate::store::MetadataStoreClient;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

const NAME_PROPERTIES: &[&str] = &[properties::QUALIFIED_NAME, properties::NAME];

pub struct SchemaTypeHandler<C> {
    element: ElementHandler<C>,
}

impl<C> Clone for SchemaTypeHandler<C> {
    fn clone(&self) -> Self {
        Self {
            element: self.element.clone(),
        }
    }
}

impl<C: MetadataStoreClient> SchemaTypeHandler<C> {
    pub fn new(element: ElementHandler<C>) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &ElementHandler<C> {
        &self.element
    }

    pub async fn create_schema_type(
        &self,
        context: &RequestContext,
        options: &CreateOptions,
        properties: Option<&SchemaTypeProperties>,
    ) -> HandlerResult<String> {
        self.element
            .create(
                context,
                "create_schema_type",
                types::SCHEMA_TYPE,
                options,
                properties,
            )
            .await
    }

    pub async fn create_schema_type_from_template(
        &self,
        context: &RequestContext,
        options: &CreateOptions,
        template_guid: &str,
        replacement_properties: Option<&SchemaTypeProperties>,
        placeholder_properties: &BTreeMap<String, String>,
    ) -> HandlerResult<String> {
        let type_name = replacement_properties
            .map(|p| p.type_name())
            .unwrap_or(types::SCHEMA_TYPE);
        self.element
            .create_from_template(
                context,
                "create_schema_type_from_template",
                type_name,
                options,
                template_guid,
                replacement_properties,
                placeholder_properties,
            )
            .await
    }

    pub async fn update_schema_type(
        &self,
        context: &RequestContext,
        schema_type_guid: &str,
        replace_all: bool,
        properties: Option<&SchemaTypeProperties>,
    ) -> HandlerResult<()> {
        self.element
            .update(
                context,
                "update_schema_type",
                (schema_type_guid, "schemaTypeGUID"),
                types::SCHEMA_TYPE,
                replace_all,
                properties,
            )
            .await
    }

    pub async fn delete_schema_type(
        &self,
        context: &RequestContext,
        schema_type_guid: &str,
        cascaded: bool,
    ) -> HandlerResult<()> {
        self.element
            .delete(
                context,
                "delete_schema_type",
                (schema_type_guid, "schemaTypeGUID"),
                cascaded,
            )
            .await
    }

    /// List an existing attribute under a schema type.
    pub async fn link_attribute_to_schema_type(
        &self,
        context: &RequestContext,
        schema_type_guid: &str,
        attribute_guid: &str,
        properties: Option<&RelationshipProperties>,
    ) -> HandlerResult<String> {
        self.element
            .link(
                context,
                "link_attribute_to_schema_type",
                relationships::ATTRIBUTE_FOR_SCHEMA,
                (schema_type_guid, "schemaTypeGUID"),
                (attribute_guid, "schemaAttributeGUID"),
                properties,
            )
            .await
    }

    pub async fn detach_attribute_from_schema_type(
        &self,
        context: &RequestContext,
        schema_type_guid: &str,
        attribute_guid: &str,
    ) -> HandlerResult<()> {
        self.element
            .unlink(
                context,
                "detach_attribute_from_schema_type",
                relationships::ATTRIBUTE_FOR_SCHEMA,
                (schema_type_guid, "schemaTypeGUID"),
                (attribute_guid, "schemaAttributeGUID"),
            )
            .await
    }

    /// Add one of the alternatives of a schema type choice.
    pub async fn setup_schema_type_option(
        &self,
        context: &RequestContext,
        choice_guid: &str,
        option_guid: &str,
        properties: Option<&RelationshipProperties>,
    ) -> HandlerResult<String> {
        self.element
            .link(
                context,
                "setup_schema_type_option",
                relationships::SCHEMA_TYPE_OPTION,
                (choice_guid, "schemaTypeChoiceGUID"),
                (option_guid, "schemaTypeOptionGUID"),
                properties,
            )
            .await
    }

    pub async fn clear_schema_type_option(
        &self,
        context: &RequestContext,
        choice_guid: &str,
        option_guid: &str,
    ) -> HandlerResult<()> {
        self.element
            .unlink(
                context,
                "clear_schema_type_option",
                relationships::SCHEMA_TYPE_OPTION,
                (choice_guid, "schemaTypeChoiceGUID"),
                (option_guid, "schemaTypeOptionGUID"),
            )
            .await
    }

    pub async fn setup_map_from_element_type(
        &self,
        context: &RequestContext,
        map_guid: &str,
        from_type_guid: &str,
        properties: Option<&RelationshipProperties>,
    ) -> HandlerResult<String> {
        self.element
            .link(
                context,
                "setup_map_from_element_type",
                relationships::MAP_FROM_ELEMENT_TYPE,
                (map_guid, "mapSchemaTypeGUID"),
                (from_type_guid, "mapFromSchemaTypeGUID"),
                properties,
            )
            .await
    }

    pub async fn clear_map_from_element_type(
        &self,
        context: &RequestContext,
        map_guid: &str,
        from_type_guid: &str,
    ) -> HandlerResult<()> {
        self.element
            .unlink(
                context,
                "clear_map_from_element_type",
                relationships::MAP_FROM_ELEMENT_TYPE,
                (map_guid, "mapSchemaTypeGUID"),
                (from_type_guid, "mapFromSchemaTypeGUID"),
            )
            .await
    }

    pub async fn setup_map_to_element_type(
        &self,
        context: &RequestContext,
        map_guid: &str,
        to_type_guid: &str,
        properties: Option<&RelationshipProperties>,
    ) -> HandlerResult<String> {
        self.element
            .link(
                context,
                "setup_map_to_element_type",
                relationships::MAP_TO_ELEMENT_TYPE,
                (map_guid, "mapSchemaTypeGUID"),
                (to_type_guid, "mapToSchemaTypeGUID"),
                properties,
            )
            .await
    }

    pub async fn clear_map_to_element_type(
        &self,
        context: &RequestContext,
        map_guid: &str,
        to_type_guid: &str,
    ) -> HandlerResult<()> {
        self.element
            .unlink(
                context,
                "clear_map_to_element_type",
                relationships::MAP_TO_ELEMENT_TYPE,
                (map_guid, "mapSchemaTypeGUID"),
                (to_type_guid, "mapToSchemaTypeGUID"),
            )
            .await
    }

    pub async fn find_schema_types(
        &self,
        context: &RequestContext,
        search_string: &str,
        options: &SearchOptions,
    ) -> HandlerResult<Vec<SchemaTypeElement>> {
        self.element
            .find(context, "find_schema_types", search_string, options)
            .await
    }

    pub async fn get_schema_types_by_name(
        &self,
        context: &RequestContext,
        name: &str,
        options: &SearchOptions,
    ) -> HandlerResult<Vec<SchemaTypeElement>> {
        self.element
            .get_by_name(context, "get_schema_types_by_name", name, NAME_PROPERTIES, options)
            .await
    }

    pub async fn get_schema_type_by_guid(
        &self,
        context: &RequestContext,
        schema_type_guid: &str,
        as_of_time: Option<DateTime<Utc>>,
    ) -> HandlerResult<Option<SchemaTypeElement>> {
        self.element
            .get_by_guid(
                context,
                "get_schema_type_by_guid",
                (schema_type_guid, "schemaTypeGUID"),
                as_of_time,
            )
            .await
    }
}
