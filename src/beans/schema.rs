//! Schema attribute and schema type beans.

use super::ElementHeader;
use crate::element::GenericElement;
use crate::error::ConversionError;
use crate::projection::{
    ElementBean, PropertyReader, RelatedElement, RelatedElements, RelationshipSlot, SlotEnd,
};
use crate::properties::{
    SchemaAttributeProperties, SchemaTypeKind, SchemaTypeProperties, SimpleSchemaType,
    SimpleSchemaTypeKind,
};
use crate::schema::TypeRegistry;
use crate::schema::names::{properties as prop, relationships, types};

const SCHEMA_TYPE: &str = "schemaType";
const NESTED_ATTRIBUTES: &str = "nestedAttributes";
const PARENT_ATTRIBUTE: &str = "parentAttribute";
const PARENT_TYPE: &str = "parentType";
const ATTRIBUTES: &str = "attributes";
const OPTIONS: &str = "options";
const MAP_FROM: &str = "mapFrom";
const MAP_TO: &str = "mapTo";

static ATTRIBUTE_SLOTS: [RelationshipSlot; 4] = [
    RelationshipSlot::new(
        SCHEMA_TYPE,
        relationships::SCHEMA_ATTRIBUTE_TYPE,
        SlotEnd::End1,
        Some(types::SCHEMA_TYPE),
    ),
    RelationshipSlot::new(
        NESTED_ATTRIBUTES,
        relationships::NESTED_SCHEMA_ATTRIBUTE,
        SlotEnd::End1,
        Some(types::SCHEMA_ATTRIBUTE),
    ),
    RelationshipSlot::new(
        PARENT_ATTRIBUTE,
        relationships::NESTED_SCHEMA_ATTRIBUTE,
        SlotEnd::End2,
        Some(types::SCHEMA_ATTRIBUTE),
    ),
    RelationshipSlot::new(
        PARENT_TYPE,
        relationships::ATTRIBUTE_FOR_SCHEMA,
        SlotEnd::End2,
        Some(types::SCHEMA_TYPE),
    ),
];

static TYPE_SLOTS: [RelationshipSlot; 4] = [
    RelationshipSlot::new(
        ATTRIBUTES,
        relationships::ATTRIBUTE_FOR_SCHEMA,
        SlotEnd::End1,
        Some(types::SCHEMA_ATTRIBUTE),
    ),
    RelationshipSlot::new(
        OPTIONS,
        relationships::SCHEMA_TYPE_OPTION,
        SlotEnd::End1,
        Some(types::SCHEMA_TYPE),
    ),
    RelationshipSlot::new(
        MAP_FROM,
        relationships::MAP_FROM_ELEMENT_TYPE,
        SlotEnd::End1,
        Some(types::SCHEMA_TYPE),
    ),
    RelationshipSlot::new(
        MAP_TO,
        relationships::MAP_TO_ELEMENT_TYPE,
        SlotEnd::End1,
        Some(types::SCHEMA_TYPE),
    ),
];

/// A schema attribute with its type and its place in the attribute tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaAttributeElement {
    pub header: ElementHeader,
    pub properties: SchemaAttributeProperties,
    pub schema_type: Option<RelatedElement>,
    pub nested_attributes: Vec<RelatedElement>,
    pub parent_attribute: Option<RelatedElement>,
    pub parent_type: Option<RelatedElement>,
}

impl ElementBean for SchemaAttributeElement {
    const ROOT_TYPE: &'static str = types::SCHEMA_ATTRIBUTE;

    fn relationship_slots() -> &'static [RelationshipSlot] {
        &ATTRIBUTE_SLOTS
    }

    fn from_element(
        element: &GenericElement,
        mut related: RelatedElements,
        _registry: &TypeRegistry,
    ) -> Result<Self, ConversionError> {
        let mut reader = PropertyReader::new(element);
        let properties = SchemaAttributeProperties {
            qualified_name: reader.required_string(prop::QUALIFIED_NAME)?,
            display_name: reader.string(prop::NAME)?,
            description: reader.string(prop::DESCRIPTION)?,
            element_position: reader.int_or(prop::POSITION, 0)?,
            min_cardinality: reader.int_or(prop::MIN_CARDINALITY, 0)?,
            max_cardinality: reader.int_or(prop::MAX_CARDINALITY, 1)?,
            allows_duplicate_values: reader.bool_or(prop::ALLOWS_DUPLICATE_VALUES, false)?,
            ordered_values: reader.bool_or(prop::ORDERED_VALUES, false)?,
            default_value_override: reader.string(prop::DEFAULT_VALUE_OVERRIDE)?,
            is_nullable: reader.bool_or(prop::IS_NULLABLE, true)?,
            minimum_length: reader.int_or(prop::MINIMUM_LENGTH, 0)?,
            length: reader.int_or(prop::LENGTH, 0)?,
            precision: reader.int_or(prop::PRECISION, 0)?,
            native_class: reader.string(prop::NATIVE_CLASS)?,
            aliases: reader.string_array(prop::ALIASES)?,
            additional_properties: reader.additional_properties()?,
            extended_properties: reader.extended_properties()?,
        };

        Ok(Self {
            header: ElementHeader::from(element),
            properties,
            schema_type: related.take_first(SCHEMA_TYPE),
            nested_attributes: related.take(NESTED_ATTRIBUTES),
            parent_attribute: related.take_first(PARENT_ATTRIBUTE),
            parent_type: related.take_first(PARENT_TYPE),
        })
    }
}

const TYPE_VARIANTS: &[&str] = &[
    types::SCHEMA_TYPE,
    types::SIMPLE_SCHEMA_TYPE,
    types::PRIMITIVE_SCHEMA_TYPE,
    types::LITERAL_SCHEMA_TYPE,
    types::ENUM_SCHEMA_TYPE,
    types::MAP_SCHEMA_TYPE,
    types::STRUCT_SCHEMA_TYPE,
    types::SCHEMA_TYPE_CHOICE,
];

/// A schema type with its attributes, choice options and map element types.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaTypeElement {
    pub header: ElementHeader,
    pub properties: SchemaTypeProperties,
    pub attributes: Vec<RelatedElement>,
    pub options: Vec<RelatedElement>,
    pub map_from: Option<RelatedElement>,
    pub map_to: Option<RelatedElement>,
}

impl ElementBean for SchemaTypeElement {
    const ROOT_TYPE: &'static str = types::SCHEMA_TYPE;

    fn relationship_slots() -> &'static [RelationshipSlot] {
        &TYPE_SLOTS
    }

    fn from_element(
        element: &GenericElement,
        mut related: RelatedElements,
        registry: &TypeRegistry,
    ) -> Result<Self, ConversionError> {
        let mut reader = PropertyReader::new(element);
        let qualified_name = reader.required_string(prop::QUALIFIED_NAME)?;
        let display_name = reader.string(prop::NAME)?;
        let description = reader.string(prop::DESCRIPTION)?;
        let version_number = reader.string(prop::VERSION_NUMBER)?;
        let author = reader.string(prop::AUTHOR)?;
        let usage = reader.string(prop::USAGE)?;
        let encoding_standard = reader.string(prop::ENCODING_STANDARD)?;
        let namespace = reader.string(prop::NAMESPACE)?;
        let is_deprecated = reader.bool_or(prop::IS_DEPRECATED, false)?;

        let variant = registry
            .nearest_of(&element.type_name, TYPE_VARIANTS)
            .ok_or_else(|| ConversionError::UnsupportedType {
                guid: element.guid.clone(),
                type_name: element.type_name.clone(),
                bean: "SchemaTypeElement".to_string(),
            })?;

        let kind = match variant {
            types::MAP_SCHEMA_TYPE => SchemaTypeKind::Map,
            types::STRUCT_SCHEMA_TYPE => SchemaTypeKind::Struct,
            types::SCHEMA_TYPE_CHOICE => SchemaTypeKind::Choice,
            types::SCHEMA_TYPE => SchemaTypeKind::Generic,
            simple => {
                let kind = match simple {
                    types::PRIMITIVE_SCHEMA_TYPE => SimpleSchemaTypeKind::Primitive {
                        default_value: reader.string(prop::DEFAULT_VALUE)?,
                    },
                    types::LITERAL_SCHEMA_TYPE => SimpleSchemaTypeKind::Literal {
                        fixed_value: reader.string(prop::FIXED_VALUE)?,
                    },
                    types::ENUM_SCHEMA_TYPE => SimpleSchemaTypeKind::Enum {
                        default_value: reader.string(prop::DEFAULT_VALUE)?,
                    },
                    _ => SimpleSchemaTypeKind::Generic,
                };
                SchemaTypeKind::Simple(SimpleSchemaType {
                    data_type: reader.string(prop::DATA_TYPE)?,
                    kind,
                })
            }
        };

        let additional_properties = reader.additional_properties()?;
        let extended_properties = reader.extended_properties()?;

        Ok(Self {
            header: ElementHeader::from(element),
            properties: SchemaTypeProperties {
                qualified_name,
                display_name,
                description,
                version_number,
                author,
                usage,
                encoding_standard,
                namespace,
                is_deprecated,
                additional_properties,
                extended_properties,
                kind,
            },
            attributes: related.take(ATTRIBUTES),
            options: related.take(OPTIONS),
            map_from: related.take_first(MAP_FROM),
            map_to: related.take_first(MAP_TO),
        })
    }
}
