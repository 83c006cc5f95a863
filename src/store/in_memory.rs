//! In-memory metadata store.
//!
//! A thread-safe implementation of [`MetadataStoreClient`] backed by a
//! `HashMap` of elements and an ordered list of relationships behind a
//! tokio `RwLock`. Entity and relationship types are checked against the
//! type registry, so end typing behaves like a real repository. Intended
//! for tests, demos and embedding where persistence is not required.
//!
//! # Performance Characteristics
//!
//! * create / get / update: O(1) average case
//! * find_by_name / find_by_text: O(n) over all elements
//! * get_related / delete_relationship: O(r) over all relationships

use crate::element::{
    EffectivityWindow, ElementProperties, ElementStatus, GenericElement, GenericRelationship,
    PagingOptions, PropertyValue, RelationshipDirection, RelationshipEnd, RequestContext,
    SearchOptions, SequencingOrder,
};
use crate::schema::TypeRegistry;
use crate::store::{
    ComparisonOperator, MetadataStoreClient, NameQuery, NewElement, ParentLink, RelationshipPage,
    StoreError, StoreResult, TemplateRequest,
};
use chrono::{DateTime, Utc};
use log::{debug, trace};
use regex::Regex;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Page size used when a query asks for the store default.
pub const DEFAULT_PAGE_SIZE: usize = 100;

#[derive(Debug, Default)]
struct StoreState {
    elements: HashMap<String, GenericElement>,
    // insertion order gives stable paging
    relationships: Vec<GenericRelationship>,
    denied_users: HashSet<String>,
}

/// Thread-safe in-memory metadata store.
#[derive(Clone)]
pub struct InMemoryMetadataStore {
    state: Arc<RwLock<StoreState>>,
    registry: Arc<TypeRegistry>,
}

/// Counts of stored elements and relationships.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InMemoryStoreStats {
    pub element_count: usize,
    pub relationship_count: usize,
}

impl InMemoryMetadataStore {
    /// Create an empty store over the shared type registry.
    pub fn new() -> Self {
        Self::with_registry(TypeRegistry::shared())
    }

    pub fn with_registry(registry: Arc<TypeRegistry>) -> Self {
        Self {
            state: Arc::new(RwLock::new(StoreState::default())),
            registry,
        }
    }

    /// Reject every further request made by this user.
    pub async fn deny_user(&self, user_id: &str) {
        let mut state = self.state.write().await;
        state.denied_users.insert(user_id.to_string());
    }

    /// Get store statistics for debugging and tests.
    pub async fn stats(&self) -> InMemoryStoreStats {
        let state = self.state.read().await;
        InMemoryStoreStats {
            element_count: state.elements.len(),
            relationship_count: state.relationships.len(),
        }
    }

    /// Clear all data (useful for testing).
    pub async fn clear(&self) {
        let mut state = self.state.write().await;
        state.elements.clear();
        state.relationships.clear();
    }

    fn check_access(state: &StoreState, context: &RequestContext) -> StoreResult<()> {
        if state.denied_users.contains(&context.user_id) {
            return Err(StoreError::Unauthorized {
                user_id: context.user_id.clone(),
                message: "access to the metadata store is denied".to_string(),
            });
        }
        Ok(())
    }

    fn check_entity_type(&self, type_name: &str) -> StoreResult<()> {
        if self.registry.is_known_entity_type(type_name) {
            Ok(())
        } else {
            Err(StoreError::unknown_type(type_name))
        }
    }

    fn visible(element: &GenericElement, context: &RequestContext, options: &SearchOptions) -> bool {
        options.accepts_status(element.status)
            && options.as_of_time.is_none_or(|as_of| element.created <= as_of)
            && context
                .effective_time
                .is_none_or(|time| element.window.contains(time))
    }

    /// Build a relationship after checking its type and end types.
    fn new_relationship(
        &self,
        state: &StoreState,
        relationship_type: &str,
        end1_guid: &str,
        end2_guid: &str,
        window: EffectivityWindow,
        properties: ElementProperties,
    ) -> StoreResult<GenericRelationship> {
        let definition = self
            .registry
            .relationship_type(relationship_type)
            .ok_or_else(|| StoreError::unknown_type(relationship_type))?;

        let mut ends = Vec::with_capacity(2);
        for (index, (guid, expected)) in [(end1_guid, &definition.end1), (end2_guid, &definition.end2)]
            .into_iter()
            .enumerate()
        {
            let element = state
                .elements
                .get(guid)
                .filter(|element| element.status != ElementStatus::Deleted)
                .ok_or_else(|| StoreError::element_not_found(guid))?;
            if !self.registry.is_type_of(&element.type_name, expected) {
                return Err(StoreError::InvalidRelationshipEnd {
                    relationship_type: relationship_type.to_string(),
                    end: index as u8 + 1,
                    expected_type: expected.clone(),
                    actual_type: element.type_name.clone(),
                });
            }
            ends.push(RelationshipEnd::new(guid, element.type_name.clone()));
        }

        let end2 = ends.pop().ok_or_else(|| StoreError::Internal {
            message: "relationship end missing".to_string(),
        })?;
        let end1 = ends.pop().ok_or_else(|| StoreError::Internal {
            message: "relationship end missing".to_string(),
        })?;

        Ok(GenericRelationship {
            guid: Uuid::new_v4().to_string(),
            type_name: relationship_type.to_string(),
            end1,
            end2,
            properties,
            window,
            created: Utc::now(),
        })
    }

    /// Insert a new element plus its optional parent relationship.
    fn insert_element(
        &self,
        state: &mut StoreState,
        context: &RequestContext,
        element: GenericElement,
        parent: Option<ParentLink>,
    ) -> StoreResult<String> {
        if let Some(anchor) = &element.anchor_guid
            && !state.elements.contains_key(anchor)
        {
            return Err(StoreError::element_not_found(anchor.clone()));
        }

        let guid = element.guid.clone();
        let parent_relationship = match parent {
            Some(link) => {
                // The new element has to be visible for end checks.
                state.elements.insert(guid.clone(), element);
                let (end1, end2) = if link.parent_at_end1 {
                    (link.parent_guid.as_str(), guid.as_str())
                } else {
                    (guid.as_str(), link.parent_guid.as_str())
                };
                let relationship = self.new_relationship(
                    state,
                    &link.relationship_type,
                    end1,
                    end2,
                    EffectivityWindow::unbounded(),
                    link.properties.unwrap_or_default(),
                );
                match relationship {
                    Ok(relationship) => Some(relationship),
                    Err(error) => {
                        state.elements.remove(&guid);
                        return Err(error);
                    }
                }
            }
            None => {
                state.elements.insert(guid.clone(), element);
                None
            }
        };

        if let Some(relationship) = parent_relationship {
            state.relationships.push(relationship);
        }

        debug!(
            "Created element {} for user '{}' (request: '{}')",
            guid, context.user_id, context.request_id
        );
        Ok(guid)
    }

    fn new_element(
        context: &RequestContext,
        type_name: String,
        status: ElementStatus,
        window: EffectivityWindow,
        properties: ElementProperties,
        anchor_guid: Option<String>,
    ) -> GenericElement {
        let now = Utc::now();
        GenericElement {
            guid: Uuid::new_v4().to_string(),
            type_name,
            status,
            properties,
            window,
            anchor_guid,
            created_by: context.user_id.clone(),
            created: now,
            updated: now,
            version: 1,
        }
    }

    /// Replace `{{name}}` placeholders in string values.
    fn substitute_placeholders(
        properties: ElementProperties,
        placeholders: &BTreeMap<String, String>,
    ) -> ElementProperties {
        if placeholders.is_empty() {
            return properties;
        }

        let replace = |text: String| {
            placeholders.iter().fold(text, |text, (name, value)| {
                text.replace(&format!("{{{{{}}}}}", name), value)
            })
        };

        properties
            .into_entries()
            .into_iter()
            .map(|(name, value)| {
                let value = match value {
                    PropertyValue::String(text) => PropertyValue::String(replace(text)),
                    PropertyValue::StringArray(items) => {
                        PropertyValue::StringArray(items.into_iter().map(replace).collect())
                    }
                    other => other,
                };
                (name, value)
            })
            .collect::<Vec<_>>()
            .into()
    }

    /// Collect an element and, recursively, everything anchored to it.
    fn anchored_closure(state: &StoreState, guid: &str) -> Vec<String> {
        let mut closure = vec![guid.to_string()];
        let mut index = 0;
        while index < closure.len() {
            let current = closure[index].clone();
            for element in state.elements.values() {
                if element.anchor_guid.as_deref() == Some(current.as_str())
                    && !closure.contains(&element.guid)
                {
                    closure.push(element.guid.clone());
                }
            }
            index += 1;
        }
        closure
    }

    fn sort_elements(elements: &mut [GenericElement], order: &SequencingOrder) {
        match order {
            SequencingOrder::Any => {}
            SequencingOrder::GuidAscending => elements.sort_by(|a, b| a.guid.cmp(&b.guid)),
            SequencingOrder::CreationRecentFirst => {
                elements.sort_by(|a, b| b.created.cmp(&a.created))
            }
            SequencingOrder::CreationOldestFirst => {
                elements.sort_by(|a, b| a.created.cmp(&b.created))
            }
            SequencingOrder::PropertyAscending(name) => {
                elements.sort_by(|a, b| a.string_property(name).cmp(&b.string_property(name)))
            }
        }
    }

    fn page<T>(items: Vec<T>, paging: &PagingOptions) -> Vec<T> {
        let page_size = if paging.page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            paging.page_size
        };
        items
            .into_iter()
            .skip(paging.start_from)
            .take(page_size)
            .collect()
    }

    fn compile(search_string: &str) -> StoreResult<Regex> {
        Regex::new(search_string).map_err(|e| {
            StoreError::invalid_request(format!("invalid search string '{}': {}", search_string, e))
        })
    }

    fn search(
        &self,
        state: &StoreState,
        context: &RequestContext,
        type_name: &str,
        options: &SearchOptions,
        matches: impl Fn(&GenericElement) -> bool,
    ) -> Vec<GenericElement> {
        let mut found: Vec<GenericElement> = state
            .elements
            .values()
            .filter(|element| self.registry.is_type_of(&element.type_name, type_name))
            .filter(|element| Self::visible(element, context, options))
            .filter(|element| matches(*element))
            .cloned()
            .collect();

        // HashMap order is arbitrary; keep results stable before paging.
        found.sort_by(|a, b| a.guid.cmp(&b.guid));
        Self::sort_elements(&mut found, &options.sequencing);
        Self::page(found, &options.paging)
    }
}

impl Default for InMemoryMetadataStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InMemoryMetadataStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryMetadataStore").finish_non_exhaustive()
    }
}

fn text_values(properties: &ElementProperties) -> impl Iterator<Item = &str> {
    properties.iter().flat_map(|(_, value)| {
        let values: Vec<&str> = match value {
            PropertyValue::String(text) => vec![text.as_str()],
            PropertyValue::StringArray(items) => items.iter().map(String::as_str).collect(),
            PropertyValue::StringMap(map) => map.values().map(String::as_str).collect(),
            _ => Vec::new(),
        };
        values
    })
}

impl MetadataStoreClient for InMemoryMetadataStore {
    async fn create_element(
        &self,
        context: &RequestContext,
        request: NewElement,
    ) -> StoreResult<String> {
        let mut state = self.state.write().await;
        Self::check_access(&state, context)?;
        self.check_entity_type(&request.type_name)?;

        let element = Self::new_element(
            context,
            request.type_name,
            request.status,
            request.window,
            request.properties,
            request.anchor_guid,
        );
        self.insert_element(&mut state, context, element, request.parent)
    }

    async fn create_element_from_template(
        &self,
        context: &RequestContext,
        request: TemplateRequest,
    ) -> StoreResult<String> {
        let mut state = self.state.write().await;
        Self::check_access(&state, context)?;
        self.check_entity_type(&request.type_name)?;

        let template = state
            .elements
            .get(&request.template_guid)
            .filter(|element| element.status != ElementStatus::Deleted)
            .ok_or_else(|| StoreError::element_not_found(request.template_guid.clone()))?;

        // A template of a more specific type keeps its own type; a template
        // outside the requested type's hierarchy is refused.
        let type_name = if self.registry.is_type_of(&template.type_name, &request.type_name) {
            template.type_name.clone()
        } else if self.registry.is_type_of(&request.type_name, &template.type_name) {
            request.type_name
        } else {
            return Err(StoreError::invalid_request(format!(
                "Template {} is a {}, which cannot produce a {}",
                request.template_guid, template.type_name, request.type_name
            )));
        };

        let properties = match &request.replacement_properties {
            Some(replacements) => template.properties.apply_update(replacements, false),
            None => template.properties.clone(),
        };
        let properties = Self::substitute_placeholders(properties, &request.placeholder_properties);
        trace!(
            "Template {} produced properties {}",
            request.template_guid, properties
        );

        let element = Self::new_element(
            context,
            type_name,
            ElementStatus::Active,
            request.window,
            properties,
            request.anchor_guid,
        );
        self.insert_element(&mut state, context, element, request.parent)
    }

    async fn update_element(
        &self,
        context: &RequestContext,
        guid: &str,
        replace_all: bool,
        properties: ElementProperties,
    ) -> StoreResult<()> {
        let mut state = self.state.write().await;
        Self::check_access(&state, context)?;

        let element = state
            .elements
            .get_mut(guid)
            .filter(|element| element.status != ElementStatus::Deleted)
            .ok_or_else(|| StoreError::element_not_found(guid))?;
        element.properties = element.properties.apply_update(&properties, replace_all);
        element.updated = Utc::now();
        element.version += 1;

        debug!(
            "Updated element {} (replace_all: {}, version: {})",
            guid, replace_all, element.version
        );
        Ok(())
    }

    async fn update_element_status(
        &self,
        context: &RequestContext,
        guid: &str,
        status: ElementStatus,
    ) -> StoreResult<()> {
        let mut state = self.state.write().await;
        Self::check_access(&state, context)?;

        let element = state
            .elements
            .get_mut(guid)
            .filter(|element| element.status != ElementStatus::Deleted)
            .ok_or_else(|| StoreError::element_not_found(guid))?;
        element.status = status;
        element.updated = Utc::now();
        element.version += 1;
        Ok(())
    }

    async fn delete_element(
        &self,
        context: &RequestContext,
        guid: &str,
        cascaded: bool,
    ) -> StoreResult<()> {
        let mut state = self.state.write().await;
        Self::check_access(&state, context)?;

        if !state.elements.contains_key(guid) {
            return Err(StoreError::element_not_found(guid));
        }

        let closure = Self::anchored_closure(&state, guid);
        if closure.len() > 1 && !cascaded {
            return Err(StoreError::invalid_request(format!(
                "element {} anchors {} other elements; a cascaded delete is required",
                guid,
                closure.len() - 1
            )));
        }

        for removed in &closure {
            state.elements.remove(removed);
        }
        state
            .relationships
            .retain(|relationship| !closure.iter().any(|removed| relationship.touches(removed)));

        debug!("Deleted {} element(s) rooted at {}", closure.len(), guid);
        Ok(())
    }

    async fn create_relationship(
        &self,
        context: &RequestContext,
        relationship_type: &str,
        end1_guid: &str,
        end2_guid: &str,
    ) -> StoreResult<String> {
        self.create_relationship_with_properties(
            context,
            relationship_type,
            end1_guid,
            end2_guid,
            EffectivityWindow::unbounded(),
            ElementProperties::new(),
        )
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
        let mut state = self.state.write().await;
        Self::check_access(&state, context)?;

        let relationship = self.new_relationship(
            &state,
            relationship_type,
            end1_guid,
            end2_guid,
            window,
            properties,
        )?;
        let guid = relationship.guid.clone();
        state.relationships.push(relationship);

        debug!(
            "Linked {} -> {} with {} ({})",
            end1_guid, end2_guid, relationship_type, guid
        );
        Ok(guid)
    }

    async fn delete_relationship(
        &self,
        context: &RequestContext,
        relationship_type: &str,
        end1_guid: &str,
        end2_guid: &str,
    ) -> StoreResult<()> {
        let mut state = self.state.write().await;
        Self::check_access(&state, context)?;

        let position = state.relationships.iter().position(|relationship| {
            relationship.type_name == relationship_type && relationship.links(end1_guid, end2_guid)
        });

        match position {
            Some(index) => {
                state.relationships.remove(index);
                Ok(())
            }
            None => Err(StoreError::RelationshipNotFound {
                relationship_type: relationship_type.to_string(),
                end1_guid: end1_guid.to_string(),
                end2_guid: end2_guid.to_string(),
            }),
        }
    }

    async fn find_by_name(
        &self,
        context: &RequestContext,
        query: NameQuery,
        options: &SearchOptions,
    ) -> StoreResult<Vec<GenericElement>> {
        let state = self.state.read().await;
        Self::check_access(&state, context)?;

        let pattern = match query.comparison {
            ComparisonOperator::Equals => None,
            ComparisonOperator::Regex => Some(Self::compile(&query.name)?),
        };
        let matches = |element: &GenericElement| {
            query.searchable_properties.iter().any(|property| {
                element
                    .string_property(property)
                    .is_some_and(|value| match &pattern {
                        Some(pattern) => pattern.is_match(value),
                        None => value == query.name,
                    })
            })
        };

        Ok(self.search(&state, context, &query.type_name, options, matches))
    }

    async fn find_by_text(
        &self,
        context: &RequestContext,
        type_name: &str,
        search_string: &str,
        options: &SearchOptions,
    ) -> StoreResult<Vec<GenericElement>> {
        let state = self.state.read().await;
        Self::check_access(&state, context)?;

        let pattern = Self::compile(search_string)?;
        let matches =
            |element: &GenericElement| text_values(&element.properties).any(|v| pattern.is_match(v));

        Ok(self.search(&state, context, type_name, options, matches))
    }

    async fn get_element(
        &self,
        context: &RequestContext,
        guid: &str,
        as_of_time: Option<DateTime<Utc>>,
    ) -> StoreResult<Option<GenericElement>> {
        let state = self.state.read().await;
        Self::check_access(&state, context)?;

        Ok(state
            .elements
            .get(guid)
            .filter(|element| element.status != ElementStatus::Deleted)
            .filter(|element| as_of_time.is_none_or(|as_of| element.created <= as_of))
            .filter(|element| {
                context
                    .effective_time
                    .is_none_or(|time| element.window.contains(time))
            })
            .cloned())
    }

    async fn get_related(
        &self,
        context: &RequestContext,
        guid: &str,
        direction: RelationshipDirection,
        relationship_type: Option<&str>,
        options: &SearchOptions,
    ) -> StoreResult<RelationshipPage> {
        let state = self.state.read().await;
        Self::check_access(&state, context)?;

        if !state.elements.contains_key(guid) {
            return Err(StoreError::element_not_found(guid));
        }

        let effective = |window: &EffectivityWindow, created: DateTime<Utc>| {
            context.effective_time.is_none_or(|time| window.contains(time))
                && options.as_of_time.is_none_or(|as_of| created <= as_of)
        };

        let mut related: Vec<GenericRelationship> = state
            .relationships
            .iter()
            .filter(|relationship| match direction {
                RelationshipDirection::Either => relationship.touches(guid),
                RelationshipDirection::FromEnd1 => relationship.end1.guid == guid,
                RelationshipDirection::FromEnd2 => relationship.end2.guid == guid,
            })
            .filter(|relationship| relationship_type.is_none_or(|t| relationship.type_name == t))
            .filter(|relationship| effective(&relationship.window, relationship.created))
            .filter(|relationship| {
                let other_end = if relationship.end1.guid == guid {
                    &relationship.end2
                } else {
                    &relationship.end1
                };
                state
                    .elements
                    .get(&other_end.guid)
                    .is_none_or(|element| options.accepts_status(element.status))
            })
            .cloned()
            .collect();

        match options.sequencing {
            SequencingOrder::GuidAscending => related.sort_by(|a, b| a.guid.cmp(&b.guid)),
            SequencingOrder::CreationRecentFirst => {
                related.sort_by(|a, b| b.created.cmp(&a.created))
            }
            SequencingOrder::CreationOldestFirst => {
                related.sort_by(|a, b| a.created.cmp(&b.created))
            }
            SequencingOrder::Any | SequencingOrder::PropertyAscending(_) => {}
        }

        let relationships = Self::page(related, &options.paging);
        trace!(
            "Page of {} relationship(s) for {} starting at {}",
            relationships.len(),
            guid,
            options.paging.start_from
        );
        Ok(RelationshipPage {
            relationships,
            start_from: options.paging.start_from,
        })
    }
}
