//! Actor profile bean.

use super::ElementHeader;
use crate::element::GenericElement;
use crate::error::ConversionError;
use crate::projection::{
    ElementBean, PropertyReader, RelatedElement, RelatedElements, RelationshipSlot, SlotEnd,
};
use crate::properties::{ActorProfileKind, ActorProfileProperties, PersonDetails, TeamDetails};
use crate::schema::TypeRegistry;
use crate::schema::names::{properties as prop, relationships, types};

const LOCATIONS: &str = "locations";
const USER_IDENTITIES: &str = "userIdentities";
const SUPER_TEAM: &str = "superTeam";
const SUB_TEAMS: &str = "subTeams";
const LINKED_INFRASTRUCTURE: &str = "linkedInfrastructure";

static SLOTS: [RelationshipSlot; 5] = [
    RelationshipSlot::new(
        LOCATIONS,
        relationships::PROFILE_LOCATION,
        SlotEnd::End1,
        Some(types::LOCATION),
    ),
    RelationshipSlot::new(
        USER_IDENTITIES,
        relationships::PROFILE_IDENTITY,
        SlotEnd::End1,
        Some(types::USER_IDENTITY),
    ),
    RelationshipSlot::new(
        SUPER_TEAM,
        relationships::TEAM_STRUCTURE,
        SlotEnd::End2,
        Some(types::TEAM),
    ),
    RelationshipSlot::new(
        SUB_TEAMS,
        relationships::TEAM_STRUCTURE,
        SlotEnd::End1,
        Some(types::TEAM),
    ),
    RelationshipSlot::new(
        LINKED_INFRASTRUCTURE,
        relationships::IT_INFRASTRUCTURE_PROFILE,
        SlotEnd::End2,
        Some(types::IT_INFRASTRUCTURE),
    ),
];

/// An actor profile together with its locations, identities, team structure
/// and linked infrastructure.
#[derive(Debug, Clone, PartialEq)]
pub struct ActorProfileElement {
    pub header: ElementHeader,
    pub properties: ActorProfileProperties,
    pub locations: Vec<RelatedElement>,
    pub user_identities: Vec<RelatedElement>,
    pub super_team: Option<RelatedElement>,
    pub sub_teams: Vec<RelatedElement>,
    pub linked_infrastructure: Vec<RelatedElement>,
}

impl ElementBean for ActorProfileElement {
    const ROOT_TYPE: &'static str = types::ACTOR_PROFILE;

    fn relationship_slots() -> &'static [RelationshipSlot] {
        &SLOTS
    }

    fn from_element(
        element: &GenericElement,
        mut related: RelatedElements,
        registry: &TypeRegistry,
    ) -> Result<Self, ConversionError> {
        let mut reader = PropertyReader::new(element);
        let qualified_name = reader.required_string(prop::QUALIFIED_NAME)?;
        let known_name = reader.string(prop::NAME)?;
        let description = reader.string(prop::DESCRIPTION)?;

        let variant = registry.nearest_of(
            &element.type_name,
            &[types::PERSON, types::TEAM, types::IT_PROFILE, types::ACTOR_PROFILE],
        );
        let kind = match variant {
            Some(types::PERSON) => ActorProfileKind::Person(PersonDetails {
                courtesy_title: reader.string(prop::COURTESY_TITLE)?,
                initials: reader.string(prop::INITIALS)?,
                given_names: reader.string(prop::GIVEN_NAMES)?,
                surname: reader.string(prop::SURNAME)?,
                full_name: reader.string(prop::FULL_NAME)?,
                pronouns: reader.string(prop::PRONOUNS)?,
                job_title: reader.string(prop::JOB_TITLE)?,
                employee_number: reader.string(prop::EMPLOYEE_NUMBER)?,
                employee_type: reader.string(prop::EMPLOYEE_TYPE)?,
                preferred_language: reader.string(prop::PREFERRED_LANGUAGE)?,
                resident_country: reader.string(prop::RESIDENT_COUNTRY)?,
                time_zone: reader.string(prop::TIME_ZONE)?,
                is_public: reader.bool_or(prop::IS_PUBLIC, true)?,
            }),
            Some(types::TEAM) => ActorProfileKind::Team(TeamDetails {
                team_type: reader.string(prop::TEAM_TYPE)?,
                identifier: reader.string(prop::IDENTIFIER)?,
            }),
            Some(types::IT_PROFILE) => ActorProfileKind::ItProfile,
            Some(_) => ActorProfileKind::Generic,
            None => {
                return Err(ConversionError::UnsupportedType {
                    guid: element.guid.clone(),
                    type_name: element.type_name.clone(),
                    bean: "ActorProfileElement".to_string(),
                });
            }
        };

        let additional_properties = reader.additional_properties()?;
        let extended_properties = reader.extended_properties()?;

        Ok(Self {
            header: ElementHeader::from(element),
            properties: ActorProfileProperties {
                qualified_name,
                known_name,
                description,
                additional_properties,
                extended_properties,
                kind,
            },
            locations: related.take(LOCATIONS),
            user_identities: related.take(USER_IDENTITIES),
            super_team: related.take_first(SUPER_TEAM),
            sub_teams: related.take(SUB_TEAMS),
            linked_infrastructure: related.take(LINKED_INFRASTRUCTURE),
        })
    }
}
