//! Generic elements and relationships as held by the metadata store.

use crate::element::properties::ElementProperties;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a stored element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ElementStatus {
    Draft,
    Prepared,
    Proposed,
    Approved,
    Rejected,
    #[default]
    Active,
    Deprecated,
    Other,
    Deleted,
}

impl fmt::Display for ElementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementStatus::Draft => "DRAFT",
            ElementStatus::Prepared => "PREPARED",
            ElementStatus::Proposed => "PROPOSED",
            ElementStatus::Approved => "APPROVED",
            ElementStatus::Rejected => "REJECTED",
            ElementStatus::Active => "ACTIVE",
            ElementStatus::Deprecated => "DEPRECATED",
            ElementStatus::Other => "OTHER",
            ElementStatus::Deleted => "DELETED",
        };
        write!(f, "{}", name)
    }
}

/// From/to pair bounding when an element or relationship is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectivityWindow {
    pub effective_from: Option<DateTime<Utc>>,
    pub effective_to: Option<DateTime<Utc>>,
}

impl EffectivityWindow {
    /// Window with no bounds.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn new(effective_from: Option<DateTime<Utc>>, effective_to: Option<DateTime<Utc>>) -> Self {
        Self {
            effective_from,
            effective_to,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.effective_from.is_none() && self.effective_to.is_none()
    }

    /// Check whether the window is active at the given time.
    ///
    /// The lower bound is inclusive, the upper bound exclusive.
    pub fn contains(&self, time: DateTime<Utc>) -> bool {
        let after_start = self.effective_from.is_none_or(|from| from <= time);
        let before_end = self.effective_to.is_none_or(|to| time < to);
        after_start && before_end
    }
}

/// A stored entity as returned by the metadata store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericElement {
    pub guid: String,
    pub type_name: String,
    pub status: ElementStatus,
    pub properties: ElementProperties,
    #[serde(default)]
    pub window: EffectivityWindow,
    /// Element that owns this element's lifecycle, if any
    pub anchor_guid: Option<String>,
    pub created_by: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub version: u64,
}

impl GenericElement {
    /// String value of a property, if present and a string.
    pub fn string_property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).and_then(|value| value.as_str())
    }
}

/// One end of a relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipEnd {
    pub guid: String,
    pub type_name: String,
}

impl RelationshipEnd {
    pub fn new(guid: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            type_name: type_name.into(),
        }
    }
}

/// A stored, directional link between two elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericRelationship {
    pub guid: String,
    pub type_name: String,
    pub end1: RelationshipEnd,
    pub end2: RelationshipEnd,
    pub properties: ElementProperties,
    #[serde(default)]
    pub window: EffectivityWindow,
    pub created: DateTime<Utc>,
}

impl GenericRelationship {
    /// Check whether either end refers to the given element.
    pub fn touches(&self, guid: &str) -> bool {
        self.end1.guid == guid || self.end2.guid == guid
    }

    /// Check whether this relationship links exactly these two ends.
    pub fn links(&self, end1_guid: &str, end2_guid: &str) -> bool {
        self.end1.guid == end1_guid && self.end2.guid == end2_guid
    }
}
