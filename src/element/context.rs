//! Request context and query options for handler operations.
//!
//! Every handler operation carries the caller's identity and a set of
//! pass-through parameters that are forwarded verbatim to the metadata store.

use crate::element::types::ElementStatus;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Capability that owns the elements created by a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalSource {
    pub guid: String,
    pub name: String,
}

impl ExternalSource {
    pub fn new(guid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            name: name.into(),
        }
    }
}

/// Request context for handler operations.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique identifier for this request, used in log lines
    pub request_id: String,
    /// Calling user
    pub user_id: String,
    /// Optional external-source attribution
    pub external_source: Option<ExternalSource>,
    /// Whether lineage relationships are followed
    pub for_lineage: bool,
    /// Whether duplicate-processing is applied
    pub for_duplicate_processing: bool,
    /// Only elements effective at this time are visible
    pub effective_time: Option<DateTime<Utc>>,
}

impl RequestContext {
    /// Create a context for a user with a generated request id.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            external_source: None,
            for_lineage: false,
            for_duplicate_processing: false,
            effective_time: None,
        }
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = request_id.into();
        self
    }

    pub fn with_external_source(mut self, source: ExternalSource) -> Self {
        self.external_source = Some(source);
        self
    }

    pub fn with_lineage(mut self, for_lineage: bool) -> Self {
        self.for_lineage = for_lineage;
        self
    }

    pub fn with_duplicate_processing(mut self, for_duplicate_processing: bool) -> Self {
        self.for_duplicate_processing = for_duplicate_processing;
        self
    }

    pub fn with_effective_time(mut self, effective_time: DateTime<Utc>) -> Self {
        self.effective_time = Some(effective_time);
        self
    }

    /// Name of the external source, if the request is attributed to one.
    pub fn external_source_name(&self) -> Option<&str> {
        self.external_source.as_ref().map(|s| s.name.as_str())
    }
}

/// Which end of a relationship the starting element sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RelationshipDirection {
    #[default]
    Either,
    /// Starting element is end1
    FromEnd1,
    /// Starting element is end2
    FromEnd2,
}

/// Ordering of search results.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SequencingOrder {
    #[default]
    Any,
    GuidAscending,
    CreationRecentFirst,
    CreationOldestFirst,
    /// Ascending on the string value of the named property
    PropertyAscending(String),
}

/// Paging window for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PagingOptions {
    /// Index of the first result to return
    pub start_from: usize,
    /// Maximum results to return; 0 means the store's default
    pub page_size: usize,
}

impl PagingOptions {
    pub fn new(start_from: usize, page_size: usize) -> Self {
        Self {
            start_from,
            page_size,
        }
    }
}

/// Options shared by the find and related-element queries.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Statuses to include; empty means everything except deleted
    pub status_filter: Vec<ElementStatus>,
    /// Ignore elements created after this time
    pub as_of_time: Option<DateTime<Utc>>,
    pub sequencing: SequencingOrder,
    pub paging: PagingOptions,
}

impl SearchOptions {
    /// Create options with default filter and ordering.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: ElementStatus) -> Self {
        self.status_filter.push(status);
        self
    }

    pub fn with_as_of_time(mut self, as_of_time: DateTime<Utc>) -> Self {
        self.as_of_time = Some(as_of_time);
        self
    }

    pub fn with_sequencing(mut self, sequencing: SequencingOrder) -> Self {
        self.sequencing = sequencing;
        self
    }

    pub fn with_paging(mut self, start_from: usize, page_size: usize) -> Self {
        self.paging = PagingOptions::new(start_from, page_size);
        self
    }

    /// Options for one page of the relationship query made on behalf of this
    /// query. The as-of time and status filter carry over.
    pub fn relationship_page(&self, start_from: usize, page_size: usize) -> SearchOptions {
        SearchOptions {
            status_filter: self.status_filter.clone(),
            as_of_time: self.as_of_time,
            sequencing: SequencingOrder::Any,
            paging: PagingOptions::new(start_from, page_size),
        }
    }

    /// Check whether an element with this status passes the filter.
    pub fn accepts_status(&self, status: ElementStatus) -> bool {
        if self.status_filter.is_empty() {
            status != ElementStatus::Deleted
        } else {
            self.status_filter.contains(&status)
        }
    }
}
