//! Schema attributes.

use crate::beans::SchemaAttributeElement;
use crate::element::{RequestContext, SearchOptions};
use crate::error::HandlerResult;
use crate::handlers::{CreateOptions, ElementHandler};
use crate::properties::{RelationshipProperties, SchemaAttributeProperties};
use crate::schema::names::{properties, relationships, types};
use crate::store::{MetadataStoreClient, ParentLink};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

const NAME_PROPERTIES: &[&str] = &[properties::QUALIFIED_NAME, properties::NAME];

pub struct SchemaAttributeHandler<C> {
    element: ElementHandler<C>,
}

impl<C> Clone for SchemaAttributeHandler<C> {
    fn clone(&self) -> Self {
        Self {
            element: self.element.clone(),
        }
    }
}

impl<C: MetadataStoreClient> SchemaAttributeHandler<C> {
    pub fn new(element: ElementHandler<C>) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &ElementHandler<C> {
        &self.element
    }

    pub async fn create_schema_attribute(
        &self,
        context: &RequestContext,
        options: &CreateOptions,
        properties: Option<&SchemaAttributeProperties>,
    ) -> HandlerResult<String> {
        self.element
            .create(
                context,
                "create_schema_attribute",
                types::SCHEMA_ATTRIBUTE,
                options,
                properties,
            )
            .await
    }

    /// Create an attribute anchored to, and listed by, a schema type.
    pub async fn create_schema_attribute_for_type(
        &self,
        context: &RequestContext,
        schema_type_guid: &str,
        properties: Option<&SchemaAttributeProperties>,
    ) -> HandlerResult<String> {
        let options = CreateOptions::new()
            .with_anchor(schema_type_guid)
            .with_parent(ParentLink::new(
                schema_type_guid,
                relationships::ATTRIBUTE_FOR_SCHEMA,
                true,
            ));
        self.element
            .create(
                context,
                "create_schema_attribute_for_type",
                types::SCHEMA_ATTRIBUTE,
                &options,
                properties,
            )
            .await
    }

    /// Create an attribute nested under another attribute.
    ///
    /// The new attribute shares its parent's anchor when the parent has one.
    pub async fn create_nested_schema_attribute(
        &self,
        context: &RequestContext,
        parent_attribute_guid: &str,
        anchor_guid: Option<&str>,
        properties: Option<&SchemaAttributeProperties>,
        relationship_properties: Option<&RelationshipProperties>,
    ) -> HandlerResult<String> {
        let link = ParentLink::new(
            parent_attribute_guid,
            relationships::NESTED_SCHEMA_ATTRIBUTE,
            true,
        )
        .with_properties(
            self.element
                .projector()
                .project_relationship(relationship_properties),
        );
        let mut options = CreateOptions::new().with_parent(link);
        options.anchor_guid = anchor_guid.map(str::to_string);

        self.element
            .create(
                context,
                "create_nested_schema_attribute",
                types::SCHEMA_ATTRIBUTE,
                &options,
                properties,
            )
            .await
    }

    pub async fn create_schema_attribute_from_template(
        &self,
        context: &RequestContext,
        options: &CreateOptions,
        template_guid: &str,
        replacement_properties: Option<&SchemaAttributeProperties>,
        placeholder_properties: &BTreeMap<String, String>,
    ) -> HandlerResult<String> {
        self.element
            .create_from_template(
                context,
                "create_schema_attribute_from_template",
                types::SCHEMA_ATTRIBUTE,
                options,
                template_guid,
                replacement_properties,
                placeholder_properties,
            )
            .await
    }

    pub async fn update_schema_attribute(
        &self,
        context: &RequestContext,
        attribute_guid: &str,
        replace_all: bool,
        properties: Option<&SchemaAttributeProperties>,
    ) -> HandlerResult<()> {
        self.element
            .update(
                context,
                "update_schema_attribute",
                (attribute_guid, "schemaAttributeGUID"),
                types::SCHEMA_ATTRIBUTE,
                replace_all,
                properties,
            )
            .await
    }

    pub async fn delete_schema_attribute(
        &self,
        context: &RequestContext,
        attribute_guid: &str,
        cascaded: bool,
    ) -> HandlerResult<()> {
        self.element
            .delete(
                context,
                "delete_schema_attribute",
                (attribute_guid, "schemaAttributeGUID"),
                cascaded,
            )
            .await
    }

    /// Attach the type describing an attribute's values.
    pub async fn setup_schema_type(
        &self,
        context: &RequestContext,
        attribute_guid: &str,
        schema_type_guid: &str,
        properties: Option<&RelationshipProperties>,
    ) -> HandlerResult<String> {
        self.element
            .link(
                context,
                "setup_schema_type",
                relationships::SCHEMA_ATTRIBUTE_TYPE,
                (attribute_guid, "schemaAttributeGUID"),
                (schema_type_guid, "schemaTypeGUID"),
                properties,
            )
            .await
    }

    pub async fn clear_schema_type(
        &self,
        context: &RequestContext,
        attribute_guid: &str,
        schema_type_guid: &str,
    ) -> HandlerResult<()> {
        self.element
            .unlink(
                context,
                "clear_schema_type",
                relationships::SCHEMA_ATTRIBUTE_TYPE,
                (attribute_guid, "schemaAttributeGUID"),
                (schema_type_guid, "schemaTypeGUID"),
            )
            .await
    }

    pub async fn link_nested_attribute(
        &self,
        context: &RequestContext,
        parent_attribute_guid: &str,
        nested_attribute_guid: &str,
        properties: Option<&RelationshipProperties>,
    ) -> HandlerResult<String> {
        self.element
            .link(
                context,
                "link_nested_attribute",
                relationships::NESTED_SCHEMA_ATTRIBUTE,
                (parent_attribute_guid, "parentAttributeGUID"),
                (nested_attribute_guid, "nestedAttributeGUID"),
                properties,
            )
            .await
    }

    pub async fn detach_nested_attribute(
        &self,
        context: &RequestContext,
        parent_attribute_guid: &str,
        nested_attribute_guid: &str,
    ) -> HandlerResult<()> {
        self.element
            .unlink(
                context,
                "detach_nested_attribute",
                relationships::NESTED_SCHEMA_ATTRIBUTE,
                (parent_attribute_guid, "parentAttributeGUID"),
                (nested_attribute_guid, "nestedAttributeGUID"),
            )
            .await
    }

    pub async fn find_schema_attributes(
        &self,
        context: &RequestContext,
        search_string: &str,
        options: &SearchOptions,
    ) -> HandlerResult<Vec<SchemaAttributeElement>> {
        self.element
            .find(context, "find_schema_attributes", search_string, options)
            .await
    }

    pub async fn get_schema_attributes_by_name(
        &self,
        context: &RequestContext,
        name: &str,
        options: &SearchOptions,
    ) -> HandlerResult<Vec<SchemaAttributeElement>> {
        self.element
            .get_by_name(
                context,
                "get_schema_attributes_by_name",
                name,
                NAME_PROPERTIES,
                options,
            )
            .await
    }

    pub async fn get_schema_attribute_by_guid(
        &self,
        context: &RequestContext,
        attribute_guid: &str,
        as_of_time: Option<DateTime<Utc>>,
    ) -> HandlerResult<Option<SchemaAttributeElement>> {
        self.element
            .get_by_guid(
                context,
                "get_schema_attribute_by_guid",
                (attribute_guid, "schemaAttributeGUID"),
                as_of_time,
            )
            .await
    }
}
