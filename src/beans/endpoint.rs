//! Endpoint bean.

use super::ElementHeader;
use crate::element::GenericElement;
use crate::error::ConversionError;
use crate::projection::{ElementBean, PropertyReader, RelatedElements};
use crate::properties::EndpointProperties;
use crate::schema::TypeRegistry;
use crate::schema::names::{properties as prop, types};

#[derive(Debug, Clone, PartialEq)]
pub struct EndpointElement {
    pub header: ElementHeader,
    pub properties: EndpointProperties,
}

impl ElementBean for EndpointElement {
    const ROOT_TYPE: &'static str = types::ENDPOINT;

    fn from_element(
        element: &GenericElement,
        _related: RelatedElements,
        _registry: &TypeRegistry,
    ) -> Result<Self, ConversionError> {
        let mut reader = PropertyReader::new(element);
        let qualified_name = reader.required_string(prop::QUALIFIED_NAME)?;
        let display_name = reader.string(prop::NAME)?;
        let description = reader.string(prop::DESCRIPTION)?;
        let network_address = reader.string(prop::NETWORK_ADDRESS)?;
        let protocol = reader.string(prop::PROTOCOL)?;
        let encryption_method = reader.string(prop::ENCRYPTION_METHOD)?;
        let additional_properties = reader.additional_properties()?;
        let extended_properties = reader.extended_properties()?;

        Ok(Self {
            header: ElementHeader::from(element),
            properties: EndpointProperties {
                qualified_name,
                display_name,
                description,
                network_address,
                protocol,
                encryption_method,
                additional_properties,
                extended_properties,
            },
        })
    }
}
