//! Metadata store client abstraction.
//!
//! The `MetadataStoreClient` trait is the boundary between the typed
//! handlers and whatever actually holds the metadata. It speaks only in
//! generic elements, relationships and ordered property maps, so it knows
//! nothing about people, endpoints or governance definitions.
//!
//! Every operation receives the [`RequestContext`] so caller identity,
//! external-source attribution and the effective time reach the store
//! unchanged.
//!
//! # Example Usage
//!
//! ```rust
//! use metadata_handlers::element::{ElementProperties, RequestContext, SearchOptions};
//! use metadata_handlers::store::{InMemoryMetadataStore, MetadataStoreClient, NewElement};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = InMemoryMetadataStore::new();
//! let context = RequestContext::new("erinoverview");
//!
//! let properties = ElementProperties::builder()
//!     .with_string("qualifiedName", Some("endpoint:orders"))
//!     .build();
//! let guid = store
//!     .create_element(&context, NewElement::new("Endpoint", properties))
//!     .await?;
//!
//! let element = store.get_element(&context, &guid, None).await?;
//! assert!(element.is_some());
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod in_memory;

pub use errors::{StoreError, StoreResult};
pub use in_memory::{InMemoryMetadataStore, InMemoryStoreStats};

use crate::element::{
    EffectivityWindow, ElementProperties, ElementStatus, GenericElement, GenericRelationship,
    RelationshipDirection, RequestContext, SearchOptions,
};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::future::Future;

/// Relationship created between a new element and an existing parent.
#[derive(Debug, Clone, PartialEq)]
pub struct ParentLink {
    pub parent_guid: String,
    pub relationship_type: String,
    pub properties: Option<ElementProperties>,
    /// Whether the parent sits at end 1 of the relationship
    pub parent_at_end1: bool,
}

impl ParentLink {
    pub fn new(
        parent_guid: impl Into<String>,
        relationship_type: impl Into<String>,
        parent_at_end1: bool,
    ) -> Self {
        Self {
            parent_guid: parent_guid.into(),
            relationship_type: relationship_type.into(),
            properties: None,
            parent_at_end1,
        }
    }

    pub fn with_properties(mut self, properties: Option<ElementProperties>) -> Self {
        self.properties = properties;
        self
    }
}

/// Request to create a new element.
#[derive(Debug, Clone, PartialEq)]
pub struct NewElement {
    pub type_name: String,
    pub status: ElementStatus,
    pub window: EffectivityWindow,
    pub properties: ElementProperties,
    pub anchor_guid: Option<String>,
    pub parent: Option<ParentLink>,
}

impl NewElement {
    /// Active, unbounded element with no anchor or parent.
    pub fn new(type_name: impl Into<String>, properties: ElementProperties) -> Self {
        Self {
            type_name: type_name.into(),
            status: ElementStatus::Active,
            window: EffectivityWindow::unbounded(),
            properties,
            anchor_guid: None,
            parent: None,
        }
    }

    pub fn with_status(mut self, status: ElementStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_window(mut self, window: EffectivityWindow) -> Self {
        self.window = window;
        self
    }

    pub fn with_anchor(mut self, anchor_guid: Option<String>) -> Self {
        self.anchor_guid = anchor_guid;
        self
    }

    pub fn with_parent(mut self, parent: Option<ParentLink>) -> Self {
        self.parent = parent;
        self
    }
}

/// Request to create an element by copying a template.
///
/// String values of the copied properties may contain `{{name}}`
/// placeholders, which are replaced from `placeholder_properties`.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateRequest {
    pub type_name: String,
    pub template_guid: String,
    pub anchor_guid: Option<String>,
    pub window: EffectivityWindow,
    pub replacement_properties: Option<ElementProperties>,
    pub placeholder_properties: BTreeMap<String, String>,
    pub parent: Option<ParentLink>,
}

impl TemplateRequest {
    pub fn new(type_name: impl Into<String>, template_guid: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            template_guid: template_guid.into(),
            anchor_guid: None,
            window: EffectivityWindow::unbounded(),
            replacement_properties: None,
            placeholder_properties: BTreeMap::new(),
            parent: None,
        }
    }

    pub fn with_anchor(mut self, anchor_guid: Option<String>) -> Self {
        self.anchor_guid = anchor_guid;
        self
    }

    pub fn with_window(mut self, window: EffectivityWindow) -> Self {
        self.window = window;
        self
    }

    pub fn with_replacement_properties(mut self, properties: Option<ElementProperties>) -> Self {
        self.replacement_properties = properties;
        self
    }

    pub fn with_placeholder(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.placeholder_properties.insert(name.into(), value.into());
        self
    }

    pub fn with_placeholders(mut self, placeholders: BTreeMap<String, String>) -> Self {
        self.placeholder_properties.extend(placeholders);
        self
    }

    pub fn with_parent(mut self, parent: Option<ParentLink>) -> Self {
        self.parent = parent;
        self
    }
}

/// How a name is compared against searchable properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComparisonOperator {
    /// Exact string equality
    #[default]
    Equals,
    /// The name is a regular expression
    Regex,
}

/// Find elements whose searchable properties match a name.
#[derive(Debug, Clone, PartialEq)]
pub struct NameQuery {
    pub type_name: String,
    pub searchable_properties: Vec<String>,
    pub name: String,
    pub comparison: ComparisonOperator,
}

impl NameQuery {
    pub fn new(
        type_name: impl Into<String>,
        searchable_properties: &[&str],
        name: impl Into<String>,
        comparison: ComparisonOperator,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            searchable_properties: searchable_properties.iter().map(|p| p.to_string()).collect(),
            name: name.into(),
            comparison,
        }
    }
}

/// One page of an element's relationships.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RelationshipPage {
    pub relationships: Vec<GenericRelationship>,
    /// Start index that produced this page
    pub start_from: usize,
}

impl RelationshipPage {
    pub fn is_empty(&self) -> bool {
        self.relationships.is_empty()
    }

    pub fn len(&self) -> usize {
        self.relationships.len()
    }
}

/// Client for a metadata store holding generic elements and relationships.
///
/// All operations are async and independently consistent; the store offers
/// no transaction scope across calls.
pub trait MetadataStoreClient: Send + Sync {
    /// Create an element and return its identifier.
    ///
    /// When a parent link is supplied the relationship to the parent is
    /// created in the same call.
    fn create_element(
        &self,
        context: &RequestContext,
        request: NewElement,
    ) -> impl Future<Output = StoreResult<String>> + Send;

    /// Create an element from a template and return its identifier.
    fn create_element_from_template(
        &self,
        context: &RequestContext,
        request: TemplateRequest,
    ) -> impl Future<Output = StoreResult<String>> + Send;

    /// Update an element's properties.
    ///
    /// With `replace_all` the supplied properties replace the stored set;
    /// otherwise non-null values are merged into it.
    fn update_element(
        &self,
        context: &RequestContext,
        guid: &str,
        replace_all: bool,
        properties: ElementProperties,
    ) -> impl Future<Output = StoreResult<()>> + Send;

    fn update_element_status(
        &self,
        context: &RequestContext,
        guid: &str,
        status: ElementStatus,
    ) -> impl Future<Output = StoreResult<()>> + Send;

    /// Delete an element. Anchored dependents are removed only when `cascaded`.
    fn delete_element(
        &self,
        context: &RequestContext,
        guid: &str,
        cascaded: bool,
    ) -> impl Future<Output = StoreResult<()>> + Send;

    /// Create a relationship with no properties and no effectivity window.
    fn create_relationship(
        &self,
        context: &RequestContext,
        relationship_type: &str,
        end1_guid: &str,
        end2_guid: &str,
    ) -> impl Future<Output = StoreResult<String>> + Send;

    /// Create a relationship carrying an effectivity window and properties.
    fn create_relationship_with_properties(
        &self,
        context: &RequestContext,
        relationship_type: &str,
        end1_guid: &str,
        end2_guid: &str,
        window: EffectivityWindow,
        properties: ElementProperties,
    ) -> impl Future<Output = StoreResult<String>> + Send;

    fn delete_relationship(
        &self,
        context: &RequestContext,
        relationship_type: &str,
        end1_guid: &str,
        end2_guid: &str,
    ) -> impl Future<Output = StoreResult<()>> + Send;

    fn find_by_name(
        &self,
        context: &RequestContext,
        query: NameQuery,
        options: &SearchOptions,
    ) -> impl Future<Output = StoreResult<Vec<GenericElement>>> + Send;

    /// Find elements with any string property matching a regular expression.
    fn find_by_text(
        &self,
        context: &RequestContext,
        type_name: &str,
        search_string: &str,
        options: &SearchOptions,
    ) -> impl Future<Output = StoreResult<Vec<GenericElement>>> + Send;

    /// Fetch one element, ignoring it if it was created after `as_of_time`.
    fn get_element(
        &self,
        context: &RequestContext,
        guid: &str,
        as_of_time: Option<DateTime<Utc>>,
    ) -> impl Future<Output = StoreResult<Option<GenericElement>>> + Send;

    /// One page of the relationships touching an element.
    ///
    /// Callers page until an empty page is returned.
    fn get_related(
        &self,
        context: &RequestContext,
        guid: &str,
        direction: RelationshipDirection,
        relationship_type: Option<&str>,
        options: &SearchOptions,
    ) -> impl Future<Output = StoreResult<RelationshipPage>> + Send;
}
