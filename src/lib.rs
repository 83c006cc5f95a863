//! Typed handlers for an open metadata repository.
//!
//! Provides create, update, delete, link, detach and find operations for
//! actor profiles, endpoints, governance definitions, schema attributes and
//! schema types over a pluggable metadata store client.
//!
//! # Core Components
//!
//! - [`PropertyProjector`] - Converts typed property records to ordered
//!   generic property maps and generic elements back to typed beans
//! - [`MetadataStoreClient`] - Trait for implementing store backends
//! - [`MetadataHandlers`] - All typed handlers over one store client
//!
//! # Quick Start
//!
//! ```rust
//! use metadata_handlers::element::{RequestContext, SearchOptions};
//! use metadata_handlers::handlers::{CreateOptions, MetadataHandlersBuilder};
//! use metadata_handlers::properties::{ActorProfileProperties, PersonDetails};
//! use metadata_handlers::store::InMemoryMetadataStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let handlers = MetadataHandlersBuilder::new(InMemoryMetadataStore::new()).build()?;
//! let context = RequestContext::new("erinoverview");
//!
//! let person = ActorProfileProperties::person(
//!     "person:erin-overview",
//!     PersonDetails {
//!         full_name: Some("Erin Overview".to_string()),
//!         ..Default::default()
//!     },
//! );
//! let guid = handlers
//!     .actor_profiles()
//!     .create_actor_profile(&context, &CreateOptions::default(), Some(&person))
//!     .await?;
//!
//! let found = handlers
//!     .actor_profiles()
//!     .find_actor_profiles(&context, "erin.*", &SearchOptions::new())
//!     .await?;
//! assert_eq!(found[0].header.guid, guid);
//! # Ok(())
//! # }
//! ```

pub mod audit;
pub mod beans;
pub mod config;
pub mod element;
pub mod error;
pub mod handlers;
pub mod projection;
pub mod properties;
pub mod schema;
pub mod store;
pub mod validation;

// Re-export commonly used types for convenience
pub use audit::{AuditSink, ConversionAudit, LogAuditSink, MemoryAuditSink};
pub use config::HandlerConfig;
pub use element::{
    EffectivityWindow, ElementProperties, ElementStatus, GenericElement, GenericRelationship,
    PropertyValue, RequestContext, SearchOptions,
};
pub use error::{ConversionError, HandlerError, HandlerResult, ValidationError};
pub use handlers::{CreateOptions, MetadataHandlers, MetadataHandlersBuilder};
pub use projection::{ElementBean, PropertyProjector};
pub use properties::{RelationshipProperties, TypedProperties};
pub use schema::TypeRegistry;
pub use store::{InMemoryMetadataStore, MetadataStoreClient, StoreError};
