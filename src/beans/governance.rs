//! Governance definition bean.

use super::ElementHeader;
use crate::element::GenericElement;
use crate::error::ConversionError;
use crate::projection::{
    ElementBean, PropertyReader, RelatedElement, RelatedElements, RelationshipSlot, SlotEnd,
};
use crate::properties::{
    GovernanceControl, GovernanceControlKind, GovernanceDefinitionKind,
    GovernanceDefinitionProperties,
};
use crate::schema::TypeRegistry;
use crate::schema::names::{properties as prop, relationships, types};

const PEERS: &str = "peerDefinitions";
const SUPPORTED_BY: &str = "supportedBy";
const SUPPORTS: &str = "supports";
const IMPLEMENTATION_RESOURCES: &str = "implementationResources";
const GOVERNED_ELEMENTS: &str = "governedElements";

const DEFINITION: Option<&str> = Some(types::GOVERNANCE_DEFINITION);

static SLOTS: [RelationshipSlot; 9] = [
    RelationshipSlot::new(PEERS, relationships::GOVERNANCE_DRIVER_LINK, SlotEnd::Either, DEFINITION),
    RelationshipSlot::new(PEERS, relationships::GOVERNANCE_POLICY_LINK, SlotEnd::Either, DEFINITION),
    RelationshipSlot::new(PEERS, relationships::GOVERNANCE_CONTROL_LINK, SlotEnd::Either, DEFINITION),
    RelationshipSlot::new(SUPPORTED_BY, relationships::GOVERNANCE_RESPONSE, SlotEnd::End1, DEFINITION),
    RelationshipSlot::new(
        SUPPORTED_BY,
        relationships::GOVERNANCE_IMPLEMENTATION,
        SlotEnd::End1,
        DEFINITION,
    ),
    RelationshipSlot::new(SUPPORTS, relationships::GOVERNANCE_RESPONSE, SlotEnd::End2, DEFINITION),
    RelationshipSlot::new(
        SUPPORTS,
        relationships::GOVERNANCE_IMPLEMENTATION,
        SlotEnd::End2,
        DEFINITION,
    ),
    RelationshipSlot::new(
        IMPLEMENTATION_RESOURCES,
        relationships::IMPLEMENTATION_RESOURCE,
        SlotEnd::End1,
        None,
    ),
    RelationshipSlot::new(GOVERNED_ELEMENTS, relationships::GOVERNED_BY, SlotEnd::End1, None),
];

const VARIANTS: &[&str] = &[
    types::GOVERNANCE_DEFINITION,
    types::GOVERNANCE_STRATEGY,
    types::REGULATION,
    types::GOVERNANCE_PRINCIPLE,
    types::GOVERNANCE_OBLIGATION,
    types::GOVERNANCE_APPROACH,
    types::GOVERNANCE_CONTROL,
    types::GOVERNANCE_RULE,
    types::GOVERNANCE_PROCESS,
    types::GOVERNANCE_RESPONSIBILITY,
    types::GOVERNANCE_PROCEDURE,
    types::GOVERNANCE_METRIC,
    types::SECURITY_GROUP,
    types::NAMING_STANDARD_RULE,
];

/// A governance definition with its peer, supporting and resource links.
#[derive(Debug, Clone, PartialEq)]
pub struct GovernanceDefinitionElement {
    pub header: ElementHeader,
    pub properties: GovernanceDefinitionProperties,
    pub peer_definitions: Vec<RelatedElement>,
    /// Definitions at end 2 of a supporting link from this definition
    pub supported_by: Vec<RelatedElement>,
    /// Definitions this one supports
    pub supports: Vec<RelatedElement>,
    pub implementation_resources: Vec<RelatedElement>,
    pub governed_elements: Vec<RelatedElement>,
}

fn control_kind(
    variant: &str,
    reader: &mut PropertyReader,
) -> Result<GovernanceControlKind, ConversionError> {
    let kind = match variant {
        types::GOVERNANCE_METRIC => GovernanceControlKind::Metric {
            measurement: reader.string(prop::MEASUREMENT)?,
            target: reader.string(prop::TARGET)?,
        },
        types::SECURITY_GROUP => GovernanceControlKind::SecurityGroup {
            distinguished_name: reader.string(prop::DISTINGUISHED_NAME)?,
        },
        types::NAMING_STANDARD_RULE => GovernanceControlKind::NamingStandardRule {
            name_patterns: reader.string_array(prop::NAME_PATTERNS)?,
        },
        types::GOVERNANCE_RULE => GovernanceControlKind::Rule,
        types::GOVERNANCE_PROCESS => GovernanceControlKind::Process,
        types::GOVERNANCE_RESPONSIBILITY => GovernanceControlKind::Responsibility,
        types::GOVERNANCE_PROCEDURE => GovernanceControlKind::Procedure,
        _ => GovernanceControlKind::Generic,
    };
    Ok(kind)
}

impl ElementBean for GovernanceDefinitionElement {
    const ROOT_TYPE: &'static str = types::GOVERNANCE_DEFINITION;

    fn relationship_slots() -> &'static [RelationshipSlot] {
        &SLOTS
    }

    fn from_element(
        element: &GenericElement,
        mut related: RelatedElements,
        registry: &TypeRegistry,
    ) -> Result<Self, ConversionError> {
        let mut reader = PropertyReader::new(element);
        let document_identifier = reader.required_string(prop::QUALIFIED_NAME)?;
        let title = reader.string(prop::TITLE)?;
        let summary = reader.string(prop::SUMMARY)?;
        let description = reader.string(prop::DESCRIPTION)?;
        let scope = reader.string(prop::SCOPE)?;
        let domain_identifier = reader.int_or(prop::DOMAIN_IDENTIFIER, 0)?;
        let importance = reader.string(prop::IMPORTANCE)?;
        let implications = reader.string_array(prop::IMPLICATIONS)?;
        let outcomes = reader.string_array(prop::OUTCOMES)?;
        let results = reader.string_array(prop::RESULTS)?;

        let variant = registry
            .nearest_of(&element.type_name, VARIANTS)
            .ok_or_else(|| ConversionError::UnsupportedType {
                guid: element.guid.clone(),
                type_name: element.type_name.clone(),
                bean: "GovernanceDefinitionElement".to_string(),
            })?;

        let kind = if registry.is_type_of(variant, types::GOVERNANCE_CONTROL) {
            let kind = control_kind(variant, &mut reader)?;
            GovernanceDefinitionKind::Control(GovernanceControl {
                implementation_description: reader.string(prop::IMPLEMENTATION_DESCRIPTION)?,
                kind,
            })
        } else {
            match variant {
                types::GOVERNANCE_STRATEGY => GovernanceDefinitionKind::Strategy {
                    business_imperatives: reader.string_array(prop::BUSINESS_IMPERATIVES)?,
                },
                types::REGULATION => GovernanceDefinitionKind::Regulation {
                    source: reader.string(prop::SOURCE)?,
                    regulators: reader.string_array(prop::REGULATORS)?,
                },
                types::GOVERNANCE_PRINCIPLE => GovernanceDefinitionKind::Principle,
                types::GOVERNANCE_OBLIGATION => GovernanceDefinitionKind::Obligation,
                types::GOVERNANCE_APPROACH => GovernanceDefinitionKind::Approach,
                _ => GovernanceDefinitionKind::Generic,
            }
        };

        let additional_properties = reader.additional_properties()?;
        let extended_properties = reader.extended_properties()?;

        Ok(Self {
            header: ElementHeader::from(element),
            properties: GovernanceDefinitionProperties {
                document_identifier,
                title,
                summary,
                description,
                scope,
                domain_identifier,
                importance,
                implications,
                outcomes,
                results,
                additional_properties,
                extended_properties,
                kind,
            },
            peer_definitions: related.take(PEERS),
            supported_by: related.take(SUPPORTED_BY),
            supports: related.take(SUPPORTS),
            implementation_resources: related.take(IMPLEMENTATION_RESOURCES),
            governed_elements: related.take(GOVERNED_ELEMENTS),
        })
    }
}
