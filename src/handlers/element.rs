//! Shared plumbing behind the typed handlers.
//!
//! `ElementHandler` validates parameters, projects typed properties, calls
//! the store client and converts what comes back. The typed handlers only
//! choose type names, relationship types and beans.

use crate::audit::AuditSink;
use crate::config::HandlerConfig;
use crate::element::{
    ElementStatus, GenericElement, GenericRelationship, RelationshipDirection, RequestContext,
    SearchOptions,
};
use crate::error::{HandlerError, HandlerResult};
use crate::handlers::CreateOptions;
use crate::projection::{ElementBean, PropertyProjector};
use crate::properties::{RelationshipProperties, TypedProperties};
use crate::schema::TypeRegistry;
use crate::store::{ComparisonOperator, MetadataStoreClient, NameQuery, NewElement, TemplateRequest};
use crate::validation::InputValidator;
use chrono::{DateTime, Utc};
use log::{debug, info, trace, warn};
use std::collections::BTreeMap;
use std::sync::Arc;

/// A guid parameter together with its name for error reporting.
pub type GuidParameter<'a> = (&'a str, &'a str);

/// Generic create / update / link / find operations over one store client.
pub struct ElementHandler<C> {
    client: Arc<C>,
    projector: PropertyProjector,
    validator: InputValidator,
    config: Arc<HandlerConfig>,
}

impl<C> Clone for ElementHandler<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            projector: self.projector.clone(),
            validator: self.validator,
            config: Arc::clone(&self.config),
        }
    }
}

impl<C: MetadataStoreClient> ElementHandler<C> {
    pub fn new(
        client: Arc<C>,
        config: Arc<HandlerConfig>,
        registry: Arc<TypeRegistry>,
        audit: Option<Arc<dyn AuditSink>>,
    ) -> Self {
        let mut projector = PropertyProjector::with_registry(config.service_name.clone(), registry);
        if let Some(sink) = audit
            && config.audit_conversion_failures
        {
            projector = projector.with_audit_sink(sink);
        }

        Self {
            client,
            projector,
            validator: InputValidator::new(config.max_page_size),
            config,
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn projector(&self) -> &PropertyProjector {
        &self.projector
    }

    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }

    fn check_guids(
        &self,
        context: &RequestContext,
        method: &str,
        guids: &[GuidParameter<'_>],
    ) -> HandlerResult<()> {
        self.validator.validate_user_id(&context.user_id, method)?;
        for (guid, parameter) in guids {
            self.validator.validate_guid(guid, parameter, method)?;
        }
        Ok(())
    }

    /// Create an element from typed properties.
    pub async fn create<P: TypedProperties>(
        &self,
        context: &RequestContext,
        method: &str,
        root_type: &str,
        options: &CreateOptions,
        properties: Option<&P>,
    ) -> HandlerResult<String> {
        self.validator.validate_user_id(&context.user_id, method)?;
        let properties = self
            .validator
            .validate_properties(properties, root_type, method)?;
        if let Some(parent) = &options.parent {
            self.validator
                .validate_guid(&parent.parent_guid, "parentGUID", method)?;
        }

        let type_name = properties.type_name();
        info!(
            "Creating {} '{}' for user '{}' (request: '{}')",
            type_name,
            properties.identity(),
            context.user_id,
            context.request_id
        );

        let projected = self
            .projector
            .project_entity(Some(properties))
            .unwrap_or_default();
        let request = NewElement::new(type_name, projected)
            .with_status(options.status)
            .with_window(options.window)
            .with_anchor(options.anchor_guid.clone())
            .with_parent(options.parent.clone());

        self.client
            .create_element(context, request)
            .await
            .map_err(|e| HandlerError::from_store(method, e))
    }

    /// Create an element by copying a template.
    pub async fn create_from_template<P: TypedProperties>(
        &self,
        context: &RequestContext,
        method: &str,
        type_name: &str,
        options: &CreateOptions,
        template_guid: &str,
        replacement_properties: Option<&P>,
        placeholder_properties: &BTreeMap<String, String>,
    ) -> HandlerResult<String> {
        self.check_guids(context, method, &[(template_guid, "templateGUID")])?;
        info!(
            "Creating {} from template {} for user '{}' (request: '{}')",
            type_name, template_guid, context.user_id, context.request_id
        );

        let replacements = self.projector.project_entity(replacement_properties);
        let request = TemplateRequest::new(type_name, template_guid)
            .with_anchor(options.anchor_guid.clone())
            .with_window(options.window)
            .with_replacement_properties(replacements)
            .with_placeholders(placeholder_properties.clone())
            .with_parent(options.parent.clone());

        self.client
            .create_element_from_template(context, request)
            .await
            .map_err(|e| HandlerError::from_store(method, e))
    }

    /// Update an element from typed properties.
    pub async fn update<P: TypedProperties>(
        &self,
        context: &RequestContext,
        method: &str,
        element: GuidParameter<'_>,
        root_type: &str,
        replace_all: bool,
        properties: Option<&P>,
    ) -> HandlerResult<()> {
        self.check_guids(context, method, &[element])?;
        let properties = self
            .validator
            .validate_properties(properties, root_type, method)?;
        info!(
            "Updating {} {} for user '{}' (request: '{}')",
            root_type, element.0, context.user_id, context.request_id
        );

        let projected = self
            .projector
            .project_entity(Some(properties))
            .unwrap_or_default();
        self.client
            .update_element(context, element.0, replace_all, projected)
            .await
            .map_err(|e| HandlerError::from_store(method, e))
    }

    pub async fn update_status(
        &self,
        context: &RequestContext,
        method: &str,
        element: GuidParameter<'_>,
        status: ElementStatus,
    ) -> HandlerResult<()> {
        self.check_guids(context, method, &[element])?;
        info!(
            "Setting status of {} to {} for user '{}' (request: '{}')",
            element.0, status, context.user_id, context.request_id
        );

        self.client
            .update_element_status(context, element.0, status)
            .await
            .map_err(|e| HandlerError::from_store(method, e))
    }

    pub async fn delete(
        &self,
        context: &RequestContext,
        method: &str,
        element: GuidParameter<'_>,
        cascaded: bool,
    ) -> HandlerResult<()> {
        self.check_guids(context, method, &[element])?;
        info!(
            "Deleting {} (cascaded: {}) for user '{}' (request: '{}')",
            element.0, cascaded, context.user_id, context.request_id
        );

        self.client
            .delete_element(context, element.0, cascaded)
            .await
            .map_err(|e| HandlerError::from_store(method, e))
    }

    /// Link two elements.
    ///
    /// Without relationship properties the properties-free create call is
    /// used; with them the window and projected map are passed along.
    pub async fn link(
        &self,
        context: &RequestContext,
        method: &str,
        relationship_type: &str,
        end1: GuidParameter<'_>,
        end2: GuidParameter<'_>,
        properties: Option<&RelationshipProperties>,
    ) -> HandlerResult<String> {
        self.check_guids(context, method, &[end1, end2])?;
        self.validator
            .validate_name(relationship_type, "relationshipTypeName", method)?;
        info!(
            "Linking {} -> {} with {} for user '{}' (request: '{}')",
            end1.0, end2.0, relationship_type, context.user_id, context.request_id
        );

        let result = match (properties, self.projector.project_relationship(properties)) {
            (Some(relationship), Some(projected)) => {
                self.client
                    .create_relationship_with_properties(
                        context,
                        relationship_type,
                        end1.0,
                        end2.0,
                        relationship.window,
                        projected,
                    )
                    .await
            }
            _ => {
                self.client
                    .create_relationship(context, relationship_type, end1.0, end2.0)
                    .await
            }
        };
        result.map_err(|e| HandlerError::from_store(method, e))
    }

    pub async fn unlink(
        &self,
        context: &RequestContext,
        method: &str,
        relationship_type: &str,
        end1: GuidParameter<'_>,
        end2: GuidParameter<'_>,
    ) -> HandlerResult<()> {
        self.check_guids(context, method, &[end1, end2])?;
        self.validator
            .validate_name(relationship_type, "relationshipTypeName", method)?;
        info!(
            "Detaching {} -> {} ({}) for user '{}' (request: '{}')",
            end1.0, end2.0, relationship_type, context.user_id, context.request_id
        );

        self.client
            .delete_relationship(context, relationship_type, end1.0, end2.0)
            .await
            .map_err(|e| HandlerError::from_store(method, e))
    }

    /// Fetch one element and convert it, with its relationships if the bean needs them.
    ///
    /// With an as-of time, both the element and its relationships are read as
    /// they stood at that time.
    pub async fn get_by_guid<B: ElementBean>(
        &self,
        context: &RequestContext,
        method: &str,
        element: GuidParameter<'_>,
        as_of_time: Option<DateTime<Utc>>,
    ) -> HandlerResult<Option<B>> {
        self.check_guids(context, method, &[element])?;
        debug!(
            "Retrieving {} as {} for user '{}'",
            element.0,
            B::ROOT_TYPE,
            context.user_id
        );

        let stored = self
            .client
            .get_element(context, element.0, as_of_time)
            .await
            .map_err(|e| HandlerError::from_store(method, e))?;

        let options = SearchOptions {
            as_of_time,
            ..SearchOptions::default()
        };
        match stored {
            Some(stored) => self.convert(context, method, &stored, &options).await,
            None => Ok(None),
        }
    }

    /// Exact-name search over the given properties.
    pub async fn get_by_name<B: ElementBean>(
        &self,
        context: &RequestContext,
        method: &str,
        name: &str,
        searchable_properties: &[&str],
        options: &SearchOptions,
    ) -> HandlerResult<Vec<B>> {
        self.validator.validate_user_id(&context.user_id, method)?;
        self.validator.validate_name(name, "name", method)?;
        self.validator
            .validate_page_size(options.paging.page_size, method)?;
        info!(
            "Searching {} by name '{}' for user '{}' (request: '{}')",
            B::ROOT_TYPE,
            name,
            context.user_id,
            context.request_id
        );

        let query = NameQuery::new(
            B::ROOT_TYPE,
            searchable_properties,
            name,
            ComparisonOperator::Equals,
        );
        let found = self
            .client
            .find_by_name(context, query, options)
            .await
            .map_err(|e| HandlerError::from_store(method, e))?;
        self.convert_all(context, method, &found, options).await
    }

    /// Regular-expression search over every string property.
    pub async fn find<B: ElementBean>(
        &self,
        context: &RequestContext,
        method: &str,
        search_string: &str,
        options: &SearchOptions,
    ) -> HandlerResult<Vec<B>> {
        self.validator.validate_user_id(&context.user_id, method)?;
        self.validator.validate_search_string(search_string, method)?;
        self.validator
            .validate_page_size(options.paging.page_size, method)?;
        info!(
            "Finding {} matching '{}' for user '{}' (request: '{}')",
            B::ROOT_TYPE,
            search_string,
            context.user_id,
            context.request_id
        );

        let found = self
            .client
            .find_by_text(context, B::ROOT_TYPE, search_string, options)
            .await
            .map_err(|e| HandlerError::from_store(method, e))?;
        self.convert_all(context, method, &found, options).await
    }

    /// Page through every relationship of an element until an empty page.
    ///
    /// The as-of time and status filter of `options` carry over to the
    /// relationship query; its paging does not.
    pub async fn collect_relationships(
        &self,
        context: &RequestContext,
        method: &str,
        guid: &str,
        options: &SearchOptions,
    ) -> HandlerResult<Vec<GenericRelationship>> {
        let page_size = self.config.relationship_page_size;
        let mut collected = Vec::new();
        let mut start_from = 0;

        loop {
            let page_options = options.relationship_page(start_from, page_size);
            let page = self
                .client
                .get_related(context, guid, RelationshipDirection::Either, None, &page_options)
                .await
                .map_err(|e| HandlerError::from_store(method, e))?;
            if page.is_empty() {
                break;
            }
            trace!(
                "Collected {} relationship(s) of {} from {}",
                page.len(),
                guid,
                start_from
            );
            start_from += page.len();
            collected.extend(page.relationships);
        }

        debug!("Element {} has {} relationship(s)", guid, collected.len());
        Ok(collected)
    }

    async fn convert<B: ElementBean>(
        &self,
        context: &RequestContext,
        method: &str,
        element: &GenericElement,
        options: &SearchOptions,
    ) -> HandlerResult<Option<B>> {
        let relationships = if B::relationship_slots().is_empty() {
            Vec::new()
        } else {
            self.collect_relationships(context, method, &element.guid, options)
                .await?
        };
        self.projector.convert::<B>(element, &relationships, method)
    }

    async fn convert_all<B: ElementBean>(
        &self,
        context: &RequestContext,
        method: &str,
        elements: &[GenericElement],
        options: &SearchOptions,
    ) -> HandlerResult<Vec<B>> {
        if B::relationship_slots().is_empty() {
            return self.projector.convert_all(elements, method);
        }

        let mut beans = Vec::with_capacity(elements.len());
        for element in elements {
            match self.convert::<B>(context, method, element, options).await? {
                Some(bean) => beans.push(bean),
                None => warn!(
                    "Skipping element {} of type {} returned to {}",
                    element.guid, element.type_name, method
                ),
            }
        }
        Ok(beans)
    }
}
