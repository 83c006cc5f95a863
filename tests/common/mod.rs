//! Common test utilities shared by the integration suite.

use metadata_handlers::audit::MemoryAuditSink;
use metadata_handlers::element::RequestContext;
use metadata_handlers::handlers::{MetadataHandlers, MetadataHandlersBuilder};
use metadata_handlers::store::{InMemoryMetadataStore, MetadataStoreClient};
use std::sync::Arc;

pub mod fixtures;
pub mod stores;

/// Route `log` output through the test harness.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn context() -> RequestContext {
    RequestContext::new("garygeeke").with_request_id("test-request")
}

/// Handlers, the store they share and the audit sink they report to.
pub struct TestHarness<C: MetadataStoreClient> {
    pub handlers: MetadataHandlers<C>,
    pub store: Arc<C>,
    pub audit: Arc<MemoryAuditSink>,
}

impl TestHarness<InMemoryMetadataStore> {
    pub fn new() -> Self {
        Self::with_store(InMemoryMetadataStore::new())
    }
}

impl<C: MetadataStoreClient> TestHarness<C> {
    pub fn with_store(store: C) -> Self {
        init_logging();
        let store = Arc::new(store);
        let audit = Arc::new(MemoryAuditSink::new());
        let handlers = MetadataHandlersBuilder::from_shared(Arc::clone(&store))
            .with_service_name("test-service")
            .with_relationship_page_size(2)
            .with_audit_sink(audit.clone())
            .build()
            .expect("Failed to build handlers");

        Self {
            handlers,
            store,
            audit,
        }
    }
}
