//! Typed metadata handlers.
//!
//! Each handler wraps the shared [`ElementHandler`] for one entity family.
//! [`MetadataHandlers`] bundles all five over a single store client and is
//! built with [`MetadataHandlersBuilder`].
//!
//! # Example Usage
//!
//! ```rust
//! use metadata_handlers::element::RequestContext;
//! use metadata_handlers::handlers::{CreateOptions, MetadataHandlersBuilder};
//! use metadata_handlers::properties::EndpointProperties;
//! use metadata_handlers::store::InMemoryMetadataStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let handlers = MetadataHandlersBuilder::new(InMemoryMetadataStore::new())
//!     .with_service_name("catalog-service")
//!     .with_relationship_page_size(50)
//!     .build()?;
//!
//! let context = RequestContext::new("erinoverview");
//! let endpoint = EndpointProperties::new("endpoint:orders")
//!     .with_network_address("https://orders.example.com/api");
//! let guid = handlers
//!     .endpoints()
//!     .create_endpoint(&context, &CreateOptions::default(), Some(&endpoint))
//!     .await?;
//!
//! let stored = handlers.endpoints().get_endpoint_by_guid(&context, &guid, None).await?;
//! assert!(stored.is_some());
//! # Ok(())
//! # }
//! ```

pub mod actor_profile;
pub mod element;
pub mod endpoint;
pub mod governance_definition;
pub mod schema_attribute;
pub mod schema_type;

pub use actor_profile::ActorProfileHandler;
pub use element::{ElementHandler, GuidParameter};
pub use endpoint::EndpointHandler;
pub use governance_definition::GovernanceDefinitionHandler;
pub use schema_attribute::SchemaAttributeHandler;
pub use schema_type::SchemaTypeHandler;

use crate::audit::{AuditSink, LogAuditSink};
use crate::config::HandlerConfig;
use crate::element::{EffectivityWindow, ElementStatus};
use crate::error::HandlerResult;
use crate::schema::TypeRegistry;
use crate::store::{MetadataStoreClient, ParentLink};
use log::info;
use std::sync::Arc;

/// Placement of a newly created element.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateOptions {
    /// Element that owns the new element's lifecycle
    pub anchor_guid: Option<String>,
    pub status: ElementStatus,
    pub window: EffectivityWindow,
    /// Relationship to an existing element created together with the new one
    pub parent: Option<ParentLink>,
}

impl CreateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor(mut self, anchor_guid: impl Into<String>) -> Self {
        self.anchor_guid = Some(anchor_guid.into());
        self
    }

    pub fn with_status(mut self, status: ElementStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_window(mut self, window: EffectivityWindow) -> Self {
        self.window = window;
        self
    }

    pub fn with_parent(mut self, parent: ParentLink) -> Self {
        self.parent = Some(parent);
        self
    }
}

/// All typed handlers sharing one store client.
pub struct MetadataHandlers<C> {
    actor_profiles: ActorProfileHandler<C>,
    endpoints: EndpointHandler<C>,
    governance_definitions: GovernanceDefinitionHandler<C>,
    schema_attributes: SchemaAttributeHandler<C>,
    schema_types: SchemaTypeHandler<C>,
    config: Arc<HandlerConfig>,
}

impl<C> Clone for MetadataHandlers<C> {
    fn clone(&self) -> Self {
        Self {
            actor_profiles: self.actor_profiles.clone(),
            endpoints: self.endpoints.clone(),
            governance_definitions: self.governance_definitions.clone(),
            schema_attributes: self.schema_attributes.clone(),
            schema_types: self.schema_types.clone(),
            config: Arc::clone(&self.config),
        }
    }
}

impl<C: MetadataStoreClient> MetadataHandlers<C> {
    pub fn builder(client: C) -> MetadataHandlersBuilder<C> {
        MetadataHandlersBuilder::new(client)
    }

    pub fn actor_profiles(&self) -> &ActorProfileHandler<C> {
        &self.actor_profiles
    }

    pub fn endpoints(&self) -> &EndpointHandler<C> {
        &self.endpoints
    }

    pub fn governance_definitions(&self) -> &GovernanceDefinitionHandler<C> {
        &self.governance_definitions
    }

    pub fn schema_attributes(&self) -> &SchemaAttributeHandler<C> {
        &self.schema_attributes
    }

    pub fn schema_types(&self) -> &SchemaTypeHandler<C> {
        &self.schema_types
    }

    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }
}

/// Fluent construction of [`MetadataHandlers`].
pub struct MetadataHandlersBuilder<C> {
    client: Arc<C>,
    config: HandlerConfig,
    registry: Option<Arc<TypeRegistry>>,
    audit_sink: Option<Arc<dyn AuditSink>>,
}

impl<C: MetadataStoreClient> MetadataHandlersBuilder<C> {
    pub fn new(client: C) -> Self {
        Self::from_shared(Arc::new(client))
    }

    /// Start from a client that is also used elsewhere.
    pub fn from_shared(client: Arc<C>) -> Self {
        Self {
            client,
            config: HandlerConfig::default(),
            registry: None,
            audit_sink: None,
        }
    }

    pub fn with_config(mut self, config: HandlerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_service_name(mut self, service_name: impl Into<String>) -> Self {
        self.config.service_name = service_name.into();
        self
    }

    pub fn with_server_name(mut self, server_name: impl Into<String>) -> Self {
        self.config.server_name = server_name.into();
        self
    }

    pub fn with_max_page_size(mut self, max_page_size: usize) -> Self {
        self.config.max_page_size = max_page_size;
        self
    }

    pub fn with_relationship_page_size(mut self, page_size: usize) -> Self {
        self.config.relationship_page_size = page_size;
        self
    }

    pub fn with_conversion_auditing(mut self, enabled: bool) -> Self {
        self.config.audit_conversion_failures = enabled;
        self
    }

    pub fn with_audit_sink(mut self, sink: Arc<dyn AuditSink>) -> Self {
        self.audit_sink = Some(sink);
        self
    }

    pub fn with_registry(mut self, registry: Arc<TypeRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Validate the configuration and build the handlers.
    ///
    /// Conversion failures go to a [`LogAuditSink`] unless another sink was
    /// supplied or auditing is disabled.
    pub fn build(self) -> HandlerResult<MetadataHandlers<C>> {
        self.config.validate()?;

        let config = Arc::new(self.config);
        let registry = self.registry.unwrap_or_else(TypeRegistry::shared);
        let audit_sink = self
            .audit_sink
            .unwrap_or_else(|| Arc::new(LogAuditSink) as Arc<dyn AuditSink>);
        let element = ElementHandler::new(
            self.client,
            Arc::clone(&config),
            registry,
            Some(audit_sink),
        );

        info!(
            "Built metadata handlers for service '{}' against server '{}'",
            config.service_name, config.server_name
        );

        Ok(MetadataHandlers {
            actor_profiles: ActorProfileHandler::new(element.clone()),
            endpoints: EndpointHandler::new(element.clone()),
            governance_definitions: GovernanceDefinitionHandler::new(element.clone()),
            schema_attributes: SchemaAttributeHandler::new(element.clone()),
            schema_types: SchemaTypeHandler::new(element),
            config,
        })
    }
}
