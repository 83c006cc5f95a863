//! Governance definitions: drivers, policies and controls.
//!
//! Peer, supporting and implementation-resource links take the relationship
//! type from the caller. The handler checks only that it is not blank; the
//! store's type vocabulary decides whether the ends fit.

use crate::beans::GovernanceDefinitionElement;
use crate::element::{ElementStatus, RequestContext, SearchOptions};
use crate::error::HandlerResult;
use crate::handlers::{CreateOptions, ElementHandler};
use crate::properties::{GovernanceDefinitionProperties, RelationshipProperties, TypedProperties};
use crate::schema::names::{properties, types};
use crate::store::MetadataStoreClient;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

const NAME_PROPERTIES: &[&str] = &[properties::QUALIFIED_NAME, properties::TITLE];

pub struct GovernanceDefinitionHandler<C> {
    element: ElementHandler<C>,
}

impl<C> Clone for GovernanceDefinitionHandler<C> {
    fn clone(&self) -> Self {
        Self {
            element: self.element.clone(),
        }
    }
}

impl<C: MetadataStoreClient> GovernanceDefinitionHandler<C> {
    pub fn new(element: ElementHandler<C>) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &ElementHandler<C> {
        &self.element
    }

    pub async fn create_governance_definition(
        &self,
        context: &RequestContext,
        options: &CreateOptions,
        properties: Option<&GovernanceDefinitionProperties>,
    ) -> HandlerResult<String> {
        self.element
            .create(
                context,
                "create_governance_definition",
                types::GOVERNANCE_DEFINITION,
                options,
                properties,
            )
            .await
    }

    pub async fn create_governance_definition_from_template(
        &self,
        context: &RequestContext,
        options: &CreateOptions,
        template_guid: &str,
        replacement_properties: Option<&GovernanceDefinitionProperties>,
        placeholder_properties: &BTreeMap<String, String>,
    ) -> HandlerResult<String> {
        let type_name = replacement_properties
            .map(|p| p.type_name())
            .unwrap_or(types::GOVERNANCE_DEFINITION);
        self.element
            .create_from_template(
                context,
                "create_governance_definition_from_template",
                type_name,
                options,
                template_guid,
                replacement_properties,
                placeholder_properties,
            )
            .await
    }

    pub async fn update_governance_definition(
        &self,
        context: &RequestContext,
        definition_guid: &str,
        replace_all: bool,
        properties: Option<&GovernanceDefinitionProperties>,
    ) -> HandlerResult<()> {
        self.element
            .update(
                context,
                "update_governance_definition",
                (definition_guid, "definitionGUID"),
                types::GOVERNANCE_DEFINITION,
                replace_all,
                properties,
            )
            .await
    }

    pub async fn update_governance_definition_status(
        &self,
        context: &RequestContext,
        definition_guid: &str,
        status: ElementStatus,
    ) -> HandlerResult<()> {
        self.element
            .update_status(
                context,
                "update_governance_definition_status",
                (definition_guid, "definitionGUID"),
                status,
            )
            .await
    }

    pub async fn delete_governance_definition(
        &self,
        context: &RequestContext,
        definition_guid: &str,
        cascaded: bool,
    ) -> HandlerResult<()> {
        self.element
            .delete(
                context,
                "delete_governance_definition",
                (definition_guid, "definitionGUID"),
                cascaded,
            )
            .await
    }

    /// Link two definitions of equal standing, for example two policies.
    pub async fn link_peer_definitions(
        &self,
        context: &RequestContext,
        definition_one_guid: &str,
        relationship_type: &str,
        definition_two_guid: &str,
        properties: Option<&RelationshipProperties>,
    ) -> HandlerResult<String> {
        self.element
            .link(
                context,
                "link_peer_definitions",
                relationship_type,
                (definition_one_guid, "definitionOneGUID"),
                (definition_two_guid, "definitionTwoGUID"),
                properties,
            )
            .await
    }

    pub async fn detach_peer_definitions(
        &self,
        context: &RequestContext,
        definition_one_guid: &str,
        relationship_type: &str,
        definition_two_guid: &str,
    ) -> HandlerResult<()> {
        self.element
            .unlink(
                context,
                "detach_peer_definitions",
                relationship_type,
                (definition_one_guid, "definitionOneGUID"),
                (definition_two_guid, "definitionTwoGUID"),
            )
            .await
    }

    /// The supported definition sits at end 1, the supporting one at end 2.
    pub async fn attach_supporting_definitions(
        &self,
        context: &RequestContext,
        definition_guid: &str,
        relationship_type: &str,
        supporting_definition_guid: &str,
        properties: Option<&RelationshipProperties>,
    ) -> HandlerResult<String> {
        self.element
            .link(
                context,
                "attach_supporting_definitions",
                relationship_type,
                (definition_guid, "definitionGUID"),
                (supporting_definition_guid, "supportingDefinitionGUID"),
                properties,
            )
            .await
    }

    pub async fn detach_supporting_definitions(
        &self,
        context: &RequestContext,
        definition_guid: &str,
        relationship_type: &str,
        supporting_definition_guid: &str,
    ) -> HandlerResult<()> {
        self.element
            .unlink(
                context,
                "detach_supporting_definitions",
                relationship_type,
                (definition_guid, "definitionGUID"),
                (supporting_definition_guid, "supportingDefinitionGUID"),
            )
            .await
    }

    pub async fn attach_implementation_resource(
        &self,
        context: &RequestContext,
        definition_guid: &str,
        relationship_type: &str,
        resource_guid: &str,
        properties: Option<&RelationshipProperties>,
    ) -> HandlerResult<String> {
        self.element
            .link(
                context,
                "attach_implementation_resource",
                relationship_type,
                (definition_guid, "definitionGUID"),
                (resource_guid, "resourceGUID"),
                properties,
            )
            .await
    }

    pub async fn detach_implementation_resource(
        &self,
        context: &RequestContext,
        definition_guid: &str,
        relationship_type: &str,
        resource_guid: &str,
    ) -> HandlerResult<()> {
        self.element
            .unlink(
                context,
                "detach_implementation_resource",
                relationship_type,
                (definition_guid, "definitionGUID"),
                (resource_guid, "resourceGUID"),
            )
            .await
    }

    pub async fn find_governance_definitions(
        &self,
        context: &RequestContext,
        search_string: &str,
        options: &SearchOptions,
    ) -> HandlerResult<Vec<GovernanceDefinitionElement>> {
        self.element
            .find(context, "find_governance_definitions", search_string, options)
            .await
    }

    pub async fn get_governance_definitions_by_name(
        &self,
        context: &RequestContext,
        name: &str,
        options: &SearchOptions,
    ) -> HandlerResult<Vec<GovernanceDefinitionElement>> {
        self.element
            .get_by_name(
                context,
                "get_governance_definitions_by_name",
                name,
                NAME_PROPERTIES,
                options,
            )
            .await
    }

    pub async fn get_governance_definition_by_guid(
        &self,
        context: &RequestContext,
        definition_guid: &str,
        as_of_time: Option<DateTime<Utc>>,
    ) -> HandlerResult<Option<GovernanceDefinitionElement>> {
        self.element
            .get_by_guid(
                context,
                "get_governance_definition_by_guid",
                (definition_guid, "definitionGUID"),
                as_of_time,
            )
            .await
    }
}
