//! Store client wrappers used to observe and disturb handler traffic.

use chrono::{DateTime, Utc};
use metadata_handlers::element::{
    EffectivityWindow, ElementProperties, ElementStatus, GenericElement, GenericRelationship,
    RelationshipDirection, RelationshipEnd, RequestContext, SearchOptions,
};
use metadata_handlers::store::{
    InMemoryMetadataStore, MetadataStoreClient, NameQuery, NewElement, RelationshipPage,
    StoreResult, TemplateRequest,
};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Wraps the in-memory store, counting calls and optionally injecting a
/// relationship into the first page of every relationship query.
#[derive(Debug, Default)]
pub struct InstrumentedStore {
    inner: InMemoryMetadataStore,
    calls: AtomicUsize,
    relationship_pages: AtomicUsize,
    plain_relationships: AtomicUsize,
    relationships_with_properties: AtomicUsize,
    injected: Mutex<Option<GenericRelationship>>,
}

impl InstrumentedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inner(&self) -> &InMemoryMetadataStore {
        &self.inner
    }

    /// Total number of store calls made.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Number of relationship pages requested.
    pub fn relationship_pages(&self) -> usize {
        self.relationship_pages.load(Ordering::SeqCst)
    }

    /// Relationships created without properties or window.
    pub fn plain_relationships(&self) -> usize {
        self.plain_relationships.load(Ordering::SeqCst)
    }

    /// Relationships created with a window and properties.
    pub fn relationships_with_properties(&self) -> usize {
        self.relationships_with_properties.load(Ordering::SeqCst)
    }

    /// Inject a relationship between two elements the query never asked about.
    pub fn inject_stray_relationship(&self, relationship_type: &str) {
        let stray = GenericRelationship {
            guid: "stray-relationship".to_string(),
            type_name: relationship_type.to_string(),
            end1: RelationshipEnd::new("unrelated-1", "Location"),
            end2: RelationshipEnd::new("unrelated-2", "Location"),
            properties: ElementProperties::new(),
            window: EffectivityWindow::unbounded(),
            created: Utc::now(),
        };
        *self.injected.lock().unwrap() = Some(stray);
    }

    fn count(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl MetadataStoreClient for InstrumentedStore {
    async fn create_element(
        &self,
        context: &RequestContext,
        request: NewElement,
    ) -> StoreResult<String> {
        self.count();
        self.inner.create_element(context, request).await
    }

    async fn create_element_from_template(
        &self,
        context: &RequestContext,
        request: TemplateRequest,
    ) -> StoreResult<String> {
        self.count();
        self.inner.create_element_from_template(context, request).await
    }

    async fn update_element(
        &self,
        context: &RequestContext,
        guid: &str,
        replace_all: bool,
        properties: ElementProperties,
    ) -> StoreResult<()> {
        self.count();
        self.inner
            .update_element(context, guid, replace_all, properties)
            .await
    }

    async fn update_element_status(
        &self,
        context: &RequestContext,
        guid: &str,
        status: ElementStatus,
    ) -> StoreResult<()> {
        self.count();
        self.inner.update_element_status(context, guid, status).await
    }

    async fn delete_element(
        &self,
        context: &RequestContext,
        guid: &str,
        cascaded: bool,
    ) -> StoreResult<()> {
        self.count();
        self.inner.delete_element(context, guid, cascaded).await
    }

    async fn create_relationship(
        &self,
        context: &RequestContext,
        relationship_type: &str,
        end1_guid: &str,
        end2_guid: &str,
    ) -> StoreResult<String> {
        self.count();
        self.plain_relationships.fetch_add(1, Ordering::SeqCst);
        self.inner
            .create_relationship(context, relationship_type, end1_guid, end2_guid)
            .await
    }

    async fn create_relationship_with_properties(
        &self,
        context: &RequestContext,
        relationship_type: &str,
        end1_guid: &str,
        end2_guid: &str,
        window: EffectivityWindow,
        properties: ElementProperties,
    ) -> StoreResult<String> {
        self.count();
        self.relationships_with_properties.fetch_add(1, Ordering::SeqCst);
        self.inner
            .create_relationship_with_properties(
                context,
                relationship_type,
                end1_guid,
                end2_guid,
                window,
                properties,
            )
            .await
    }

    async fn delete_relationship(
        &self,
        context: &RequestContext,
        relationship_type: &str,
        end1_guid: &str,
        end2_guid: &str,
    ) -> StoreResult<()> {
        self.count();
        self.inner
            .delete_relationship(context, relationship_type, end1_guid, end2_guid)
            .await
    }

    async fn find_by_name(
        &self,
        context: &RequestContext,
        query: NameQuery,
        options: &SearchOptions,
    ) -> StoreResult<Vec<GenericElement>> {
        self.count();
        self.inner.find_by_name(context, query, options).await
    }

    async fn find_by_text(
        &self,
        context: &RequestContext,
        type_name: &str,
        search_string: &str,
        options: &SearchOptions,
    ) -> StoreResult<Vec<GenericElement>> {
        self.count();
        self.inner
            .find_by_text(context, type_name, search_string, options)
            .await
    }

    async fn get_element(
        &self,
        context: &RequestContext,
        guid: &str,
        as_of_time: Option<DateTime<Utc>>,
    ) -> StoreResult<Option<GenericElement>> {
        self.count();
        self.inner.get_element(context, guid, as_of_time).await
    }

    async fn get_related(
        &self,
        context: &RequestContext,
        guid: &str,
        direction: RelationshipDirection,
        relationship_type: Option<&str>,
        options: &SearchOptions,
    ) -> StoreResult<RelationshipPage> {
        self.count();
        self.relationship_pages.fetch_add(1, Ordering::SeqCst);

        let mut page = self
            .inner
            .get_related(context, guid, direction, relationship_type, options)
            .await?;
        let injected = self.injected.lock().unwrap().clone();
        if let Some(stray) = injected
            && options.paging.start_from == 0
        {
            page.relationships.push(stray);
        }
        Ok(page)
    }
}
