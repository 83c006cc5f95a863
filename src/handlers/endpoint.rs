//! Network endpoints.

use crate::beans::EndpointElement;
use crate::element::{RequestContext, SearchOptions};
use crate::error::HandlerResult;
use crate::handlers::{CreateOptions, ElementHandler};
use crate::properties::{EndpointProperties, RelationshipProperties};
use crate::schema::names::{properties, relationships, types};
use crate::store::{MetadataStoreClient, ParentLink};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

const NAME_PROPERTIES: &[&str] = &[properties::QUALIFIED_NAME, properties::NAME];
const ADDRESS_PROPERTIES: &[&str] = &[properties::NETWORK_ADDRESS];

pub struct EndpointHandler<C> {
    element: ElementHandler<C>,
}

impl<C> Clone for EndpointHandler<C> {
    fn clone(&self) -> Self {
        Self {
            element: self.element.clone(),
        }
    }
}

impl<C: MetadataStoreClient> EndpointHandler<C> {
    pub fn new(element: ElementHandler<C>) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &ElementHandler<C> {
        &self.element
    }

    pub async fn create_endpoint(
        &self,
        context: &RequestContext,
        options: &CreateOptions,
        properties: Option<&EndpointProperties>,
    ) -> HandlerResult<String> {
        self.element
            .create(context, "create_endpoint", types::ENDPOINT, options, properties)
            .await
    }

    /// Create an endpoint already attached to the server hosting it.
    pub async fn create_endpoint_for_server(
        &self,
        context: &RequestContext,
        server_guid: &str,
        properties: Option<&EndpointProperties>,
    ) -> HandlerResult<String> {
        let options = CreateOptions::new()
            .with_anchor(server_guid)
            .with_parent(ParentLink::new(server_guid, relationships::SERVER_ENDPOINT, true));
        self.element
            .create(
                context,
                "create_endpoint_for_server",
                types::ENDPOINT,
                &options,
                properties,
            )
            .await
    }

    pub async fn create_endpoint_from_template(
        &self,
        context: &RequestContext,
        options: &CreateOptions,
        template_guid: &str,
        replacement_properties: Option<&EndpointProperties>,
        placeholder_properties: &BTreeMap<String, String>,
    ) -> HandlerResult<String> {
        self.element
            .create_from_template(
                context,
                "create_endpoint_from_template",
                types::ENDPOINT,
                options,
                template_guid,
                replacement_properties,
                placeholder_properties,
            )
            .await
    }

    pub async fn update_endpoint(
        &self,
        context: &RequestContext,
        endpoint_guid: &str,
        replace_all: bool,
        properties: Option<&EndpointProperties>,
    ) -> HandlerResult<()> {
        self.element
            .update(
                context,
                "update_endpoint",
                (endpoint_guid, "endpointGUID"),
                types::ENDPOINT,
                replace_all,
                properties,
            )
            .await
    }

    pub async fn delete_endpoint(
        &self,
        context: &RequestContext,
        endpoint_guid: &str,
        cascaded: bool,
    ) -> HandlerResult<()> {
        self.element
            .delete(
                context,
                "delete_endpoint",
                (endpoint_guid, "endpointGUID"),
                cascaded,
            )
            .await
    }

    pub async fn link_endpoint_to_server(
        &self,
        context: &RequestContext,
        server_guid: &str,
        endpoint_guid: &str,
        properties: Option<&RelationshipProperties>,
    ) -> HandlerResult<String> {
        self.element
            .link(
                context,
                "link_endpoint_to_server",
                relationships::SERVER_ENDPOINT,
                (server_guid, "serverGUID"),
                (endpoint_guid, "endpointGUID"),
                properties,
            )
            .await
    }

    pub async fn detach_endpoint_from_server(
        &self,
        context: &RequestContext,
        server_guid: &str,
        endpoint_guid: &str,
    ) -> HandlerResult<()> {
        self.element
            .unlink(
                context,
                "detach_endpoint_from_server",
                relationships::SERVER_ENDPOINT,
                (server_guid, "serverGUID"),
                (endpoint_guid, "endpointGUID"),
            )
            .await
    }

    pub async fn find_endpoints(
        &self,
        context: &RequestContext,
        search_string: &str,
        options: &SearchOptions,
    ) -> HandlerResult<Vec<EndpointElement>> {
        self.element
            .find(context, "find_endpoints", search_string, options)
            .await
    }

    pub async fn get_endpoints_by_name(
        &self,
        context: &RequestContext,
        name: &str,
        options: &SearchOptions,
    ) -> HandlerResult<Vec<EndpointElement>> {
        self.element
            .get_by_name(context, "get_endpoints_by_name", name, NAME_PROPERTIES, options)
            .await
    }

    pub async fn get_endpoints_by_network_address(
        &self,
        context: &RequestContext,
        network_address: &str,
        options: &SearchOptions,
    ) -> HandlerResult<Vec<EndpointElement>> {
        self.element
            .get_by_name(
                context,
                "get_endpoints_by_network_address",
                network_address,
                ADDRESS_PROPERTIES,
                options,
            )
            .await
    }

    pub async fn get_endpoint_by_guid(
        &self,
        context: &RequestContext,
        endpoint_guid: &str,
        as_of_time: Option<DateTime<Utc>>,
    ) -> HandlerResult<Option<EndpointElement>> {
        self.element
            .get_by_guid(
                context,
                "get_endpoint_by_guid",
                (endpoint_guid, "endpointGUID"),
                as_of_time,
            )
            .await
    }
}
