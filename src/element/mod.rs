//! Generic element model shared by the store client and the projector.
//!
//! # Key Types
//!
//! - [`GenericElement`] / [`GenericRelationship`] - store-side representations
//! - [`ElementProperties`] - ordered name/value property map
//! - [`RequestContext`] - caller identity and pass-through flags
//! - [`SearchOptions`] - status filter, as-of time, ordering and paging

pub mod context;
pub mod properties;
pub mod types;

pub use context::{
    ExternalSource, PagingOptions, RelationshipDirection, RequestContext, SearchOptions,
    SequencingOrder,
};
pub use properties::{ElementProperties, PropertiesBuilder, PropertyValue};
pub use types::{
    EffectivityWindow, ElementStatus, GenericElement, GenericRelationship, RelationshipEnd,
};
