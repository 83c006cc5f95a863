//! Property projection between typed records and generic elements.
//!
//! [`PropertyProjector`] is stateless apart from its shared, read-only type
//! registry and can be used from any number of tasks at once.
//!
//! # Example
//!
//! ```rust
//! use metadata_handlers::projection::PropertyProjector;
//! use metadata_handlers::properties::{ActorProfileProperties, PersonDetails};
//!
//! let projector = PropertyProjector::new("metadata-handlers");
//! let person = ActorProfileProperties::person("person:1", PersonDetails::default())
//!     .with_known_name("Alice");
//!
//! let properties = projector.project_entity(Some(&person)).unwrap();
//! assert_eq!(properties.first_key(), Some("qualifiedName"));
//! assert!(projector.project_entity::<ActorProfileProperties>(None).is_none());
//! ```

pub mod forward;
pub mod reverse;

pub use reverse::{
    ElementBean, PropertyReader, RelatedElement, RelatedElements, RelationshipSlot, SlotEnd,
};

use crate::audit::{AuditSink, ConversionAudit};
use crate::element::{ElementProperties, GenericElement, GenericRelationship};
use crate::error::{ConversionError, HandlerError, HandlerResult};
use crate::properties::{RelationshipProperties, TypedProperties};
use crate::schema::TypeRegistry;
use chrono::Utc;
use log::{debug, trace, warn};
use std::sync::Arc;

/// Converts typed property records to generic property maps and back.
#[derive(Debug, Clone)]
pub struct PropertyProjector {
    registry: Arc<TypeRegistry>,
    service_name: String,
    audit: Option<Arc<dyn AuditSink>>,
}

impl PropertyProjector {
    /// Projector over the shared type registry with no audit sink.
    pub fn new(service_name: impl Into<String>) -> Self {
        Self::with_registry(service_name, TypeRegistry::shared())
    }

    pub fn with_registry(service_name: impl Into<String>, registry: Arc<TypeRegistry>) -> Self {
        Self {
            registry,
            service_name: service_name.into(),
            audit: None,
        }
    }

    /// Report conversion failures to the given sink.
    pub fn with_audit_sink(mut self, sink: Arc<dyn AuditSink>) -> Self {
        self.audit = Some(sink);
        self
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Project an entity record. No record yields no map.
    pub fn project_entity<P: TypedProperties>(
        &self,
        properties: Option<&P>,
    ) -> Option<ElementProperties> {
        let properties = properties?;
        let projected = properties.project();
        trace!("Projected {} properties: {}", properties.type_name(), projected);
        Some(projected)
    }

    /// Project relationship properties.
    ///
    /// `None` stays `None` so callers can choose the properties-free
    /// relationship create call.
    pub fn project_relationship(
        &self,
        properties: Option<&RelationshipProperties>,
    ) -> Option<ElementProperties> {
        properties.map(forward::relationship)
    }

    /// Rebuild a bean from an element and its fully paged relationships.
    ///
    /// Elements that are not of the bean's root type yield `Ok(None)`.
    pub fn convert<B: ElementBean>(
        &self,
        element: &GenericElement,
        relationships: &[GenericRelationship],
        operation: &str,
    ) -> HandlerResult<Option<B>> {
        if !self.registry.is_type_of(&element.type_name, B::ROOT_TYPE) {
            debug!(
                "Element {} of type {} is not a {}; skipping conversion in {}",
                element.guid, element.type_name, B::ROOT_TYPE, operation
            );
            return Ok(None);
        }

        reverse::assemble(
            &element.guid,
            relationships,
            B::relationship_slots(),
            &self.registry,
        )
        .and_then(|related| B::from_element(element, related, &self.registry))
        .map(Some)
        .map_err(|error| self.conversion_failed(&element.guid, error, operation))
    }

    /// Convert a batch of elements without relationships, dropping elements
    /// of other types.
    pub fn convert_all<B: ElementBean>(
        &self,
        elements: &[GenericElement],
        operation: &str,
    ) -> HandlerResult<Vec<B>> {
        let mut beans = Vec::with_capacity(elements.len());
        for element in elements {
            match self.convert::<B>(element, &[], operation)? {
                Some(bean) => beans.push(bean),
                None => warn!(
                    "Skipping element {} of type {} returned to {}",
                    element.guid, element.type_name, operation
                ),
            }
        }
        Ok(beans)
    }

    fn conversion_failed(
        &self,
        element_guid: &str,
        error: ConversionError,
        operation: &str,
    ) -> HandlerError {
        let error_class = error.class_name().to_string();
        let message = error.to_string();

        if let Some(sink) = &self.audit {
            sink.record_conversion_failure(&ConversionAudit {
                error_class: error_class.clone(),
                message: message.clone(),
                operation: operation.to_string(),
                service: self.service_name.clone(),
                element_guid: element_guid.to_string(),
                timestamp: Utc::now(),
            });
        }

        HandlerError::ConversionFailed {
            error_class,
            message,
            operation: operation.to_string(),
            service: self.service_name.clone(),
        }
    }
}
