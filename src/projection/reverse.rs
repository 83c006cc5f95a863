//! Reverse projection: generic elements back to typed beans.
//!
//! A bean declares its root type and the relationship slots it fills. The
//! projector checks the root type, sorts the element's relationships into
//! slots and hands both to [`ElementBean::from_element`], which reads the
//! property map through a [`PropertyReader`].

use crate::element::{
    EffectivityWindow, ElementProperties, GenericElement, GenericRelationship, PropertyValue,
};
use crate::error::ConversionError;
use crate::schema::TypeRegistry;
use crate::schema::names::properties as prop;
use log::{debug, trace, warn};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// A bean that can be rebuilt from a generic element.
pub trait ElementBean: Sized + Send {
    /// Entity type every convertible element must be a type of.
    const ROOT_TYPE: &'static str;

    /// Relationship slots filled from the element's relationships.
    fn relationship_slots() -> &'static [RelationshipSlot] {
        &[]
    }

    fn from_element(
        element: &GenericElement,
        related: RelatedElements,
        registry: &TypeRegistry,
    ) -> Result<Self, ConversionError>;
}

/// Which end of a relationship the converted element must sit at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotEnd {
    End1,
    End2,
    Either,
}

/// A named collection of related elements reached through one relationship type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationshipSlot {
    pub name: &'static str,
    pub relationship_type: &'static str,
    pub element_end: SlotEnd,
    /// Expected type of the element at the other end; `None` accepts any type
    pub related_type: Option<&'static str>,
}

impl RelationshipSlot {
    pub const fn new(
        name: &'static str,
        relationship_type: &'static str,
        element_end: SlotEnd,
        related_type: Option<&'static str>,
    ) -> Self {
        Self {
            name,
            relationship_type,
            element_end,
            related_type,
        }
    }
}

/// An element reached through a relationship, with the relationship's details.
#[derive(Debug, Clone, PartialEq)]
pub struct RelatedElement {
    pub relationship_guid: String,
    pub relationship_type: String,
    pub guid: String,
    pub type_name: String,
    pub relationship_properties: ElementProperties,
    pub window: EffectivityWindow,
}

/// Related elements grouped by slot name.
#[derive(Debug, Default)]
pub struct RelatedElements {
    slots: HashMap<&'static str, Vec<RelatedElement>>,
}

impl RelatedElements {
    /// Remove and return every element collected for a slot.
    pub fn take(&mut self, slot: &str) -> Vec<RelatedElement> {
        self.slots.remove(slot).unwrap_or_default()
    }

    /// Remove a single-valued slot and return its first element.
    pub fn take_first(&mut self, slot: &str) -> Option<RelatedElement> {
        let mut elements = self.take(slot).into_iter();
        let first = elements.next()?;
        let dropped: Vec<String> = elements.map(|element| element.guid).collect();
        if !dropped.is_empty() {
            warn!(
                "Slot {} expects one related element; keeping {} and dropping {:?}",
                slot, first.guid, dropped
            );
        }
        Some(first)
    }

    pub fn len(&self, slot: &str) -> usize {
        self.slots.get(slot).map_or(0, Vec::len)
    }
}

/// Sort relationships into the given slots.
///
/// Every relationship must reference `element_guid` at one of its ends.
/// Relationship types no slot recognises are skipped, as are relationships
/// whose element sits at an end none of the slots read.
pub fn assemble(
    element_guid: &str,
    relationships: &[GenericRelationship],
    slots: &[RelationshipSlot],
    registry: &TypeRegistry,
) -> Result<RelatedElements, ConversionError> {
    let mut related = RelatedElements::default();

    for relationship in relationships {
        if !relationship.touches(element_guid) {
            return Err(ConversionError::MalformedRelationship {
                relationship_guid: relationship.guid.clone(),
                relationship_type: relationship.type_name.clone(),
                element_guid: element_guid.to_string(),
            });
        }

        let mut recognised = false;
        let mut placed = false;
        for slot in slots
            .iter()
            .filter(|slot| slot.relationship_type == relationship.type_name)
        {
            recognised = true;
            let other_end = match slot.element_end {
                SlotEnd::End1 if relationship.end1.guid == element_guid => &relationship.end2,
                SlotEnd::End2 if relationship.end2.guid == element_guid => &relationship.end1,
                SlotEnd::Either if relationship.end1.guid == element_guid => &relationship.end2,
                SlotEnd::Either => &relationship.end1,
                _ => continue,
            };

            if let Some(expected) = slot.related_type
                && !registry.is_type_of(&other_end.type_name, expected)
            {
                return Err(ConversionError::UnexpectedRelatedType {
                    relationship_guid: relationship.guid.clone(),
                    relationship_type: relationship.type_name.clone(),
                    expected_type: expected.to_string(),
                    actual_type: other_end.type_name.clone(),
                });
            }

            placed = true;
            related
                .slots
                .entry(slot.name)
                .or_default()
                .push(RelatedElement {
                    relationship_guid: relationship.guid.clone(),
                    relationship_type: relationship.type_name.clone(),
                    guid: other_end.guid.clone(),
                    type_name: other_end.type_name.clone(),
                    relationship_properties: relationship.properties.clone(),
                    window: relationship.window,
                });
        }

        if !recognised {
            trace!(
                "Ignoring relationship {} of type {} on element {}",
                relationship.guid, relationship.type_name, element_guid
            );
        } else if !placed {
            debug!(
                "Relationship {} of type {} has element {} at an end no slot reads; ignoring it",
                relationship.guid, relationship.type_name, element_guid
            );
        }
    }

    Ok(related)
}

/// Consuming reader over an element's property map.
///
/// Each typed accessor removes the property it reads. Whatever is left when
/// [`PropertyReader::extended_properties`] is called is folded into the
/// extended properties of the bean.
#[derive(Debug)]
pub struct PropertyReader {
    guid: String,
    remaining: Vec<(String, PropertyValue)>,
}

impl PropertyReader {
    pub fn new(element: &GenericElement) -> Self {
        Self {
            guid: element.guid.clone(),
            remaining: element.properties.clone().into_entries(),
        }
    }

    fn take(&mut self, name: &str) -> Option<PropertyValue> {
        let index = self.remaining.iter().position(|(key, _)| key == name)?;
        Some(self.remaining.remove(index).1)
    }

    fn mismatch(name: &str, expected: &str, actual: &PropertyValue) -> ConversionError {
        ConversionError::UnexpectedPropertyType {
            property: name.to_string(),
            expected: expected.to_string(),
            actual: actual.kind_name().to_string(),
        }
    }

    pub fn string(&mut self, name: &str) -> Result<Option<String>, ConversionError> {
        match self.take(name) {
            None | Some(PropertyValue::Null) => Ok(None),
            Some(PropertyValue::String(value)) => Ok(Some(value)),
            Some(other) => Err(Self::mismatch(name, "string", &other)),
        }
    }

    pub fn required_string(&mut self, name: &str) -> Result<String, ConversionError> {
        self.string(name)?
            .ok_or_else(|| ConversionError::MissingProperty {
                property: name.to_string(),
                guid: self.guid.clone(),
            })
    }

    pub fn bool_or(&mut self, name: &str, default: bool) -> Result<bool, ConversionError> {
        match self.take(name) {
            None | Some(PropertyValue::Null) => Ok(default),
            Some(PropertyValue::Boolean(value)) => Ok(value),
            Some(other) => Err(Self::mismatch(name, "boolean", &other)),
        }
    }

    pub fn int_or(&mut self, name: &str, default: i64) -> Result<i64, ConversionError> {
        match self.take(name) {
            None | Some(PropertyValue::Null) => Ok(default),
            Some(PropertyValue::Integer(value)) => Ok(value),
            Some(other) => Err(Self::mismatch(name, "integer", &other)),
        }
    }

    pub fn string_array(&mut self, name: &str) -> Result<Vec<String>, ConversionError> {
        match self.take(name) {
            None | Some(PropertyValue::Null) => Ok(Vec::new()),
            Some(PropertyValue::StringArray(value)) => Ok(value),
            Some(other) => Err(Self::mismatch(name, "string array", &other)),
        }
    }

    pub fn string_map(&mut self, name: &str) -> Result<BTreeMap<String, String>, ConversionError> {
        match self.take(name) {
            None | Some(PropertyValue::Null) => Ok(BTreeMap::new()),
            Some(PropertyValue::StringMap(value)) => Ok(value),
            Some(other) => Err(Self::mismatch(name, "string map", &other)),
        }
    }

    /// Additional properties, always stored under the same name.
    pub fn additional_properties(&mut self) -> Result<BTreeMap<String, String>, ConversionError> {
        self.string_map(prop::ADDITIONAL_PROPERTIES)
    }

    /// Extended properties plus every property no accessor consumed.
    pub fn extended_properties(mut self) -> Result<BTreeMap<String, Value>, ConversionError> {
        let mut extended = match self.take(prop::EXTENDED_PROPERTIES) {
            None | Some(PropertyValue::Null) => BTreeMap::new(),
            Some(PropertyValue::Map(value)) => value,
            Some(other) => {
                return Err(Self::mismatch(prop::EXTENDED_PROPERTIES, "map", &other));
            }
        };

        for (name, value) in self.remaining {
            if !value.is_null() {
                extended.entry(name).or_insert_with(|| value.to_json());
            }
        }

        Ok(extended)
    }
}
