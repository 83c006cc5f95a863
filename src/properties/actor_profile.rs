//! Actor profile properties: people, teams and IT profiles.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Properties of an actor profile.
///
/// The profile kind is fixed at construction and decides both the open
/// metadata type of the element and the extra fields that are projected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorProfileProperties {
    pub qualified_name: String,
    pub known_name: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub additional_properties: BTreeMap<String, String>,
    #[serde(default)]
    pub extended_properties: BTreeMap<String, Value>,
    pub kind: ActorProfileKind,
}

/// Concrete actor profile variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "profileKind", rename_all = "camelCase")]
pub enum ActorProfileKind {
    Generic,
    Person(PersonDetails),
    Team(TeamDetails),
    ItProfile,
}

/// Fields specific to a person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDetails {
    pub courtesy_title: Option<String>,
    pub initials: Option<String>,
    pub given_names: Option<String>,
    pub surname: Option<String>,
    pub full_name: Option<String>,
    pub pronouns: Option<String>,
    pub job_title: Option<String>,
    pub employee_number: Option<String>,
    pub employee_type: Option<String>,
    pub preferred_language: Option<String>,
    pub resident_country: Option<String>,
    pub time_zone: Option<String>,
    pub is_public: bool,
}

impl Default for PersonDetails {
    fn default() -> Self {
        Self {
            courtesy_title: None,
            initials: None,
            given_names: None,
            surname: None,
            full_name: None,
            pronouns: None,
            job_title: None,
            employee_number: None,
            employee_type: None,
            preferred_language: None,
            resident_country: None,
            time_zone: None,
            is_public: true,
        }
    }
}

/// Fields specific to a team.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDetails {
    pub team_type: Option<String>,
    pub identifier: Option<String>,
}

impl ActorProfileProperties {
    fn with_kind(qualified_name: impl Into<String>, kind: ActorProfileKind) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            known_name: None,
            description: None,
            additional_properties: BTreeMap::new(),
            extended_properties: BTreeMap::new(),
            kind,
        }
    }

    /// Profile with no specific subtype.
    pub fn generic(qualified_name: impl Into<String>) -> Self {
        Self::with_kind(qualified_name, ActorProfileKind::Generic)
    }

    pub fn person(qualified_name: impl Into<String>, details: PersonDetails) -> Self {
        Self::with_kind(qualified_name, ActorProfileKind::Person(details))
    }

    pub fn team(qualified_name: impl Into<String>, details: TeamDetails) -> Self {
        Self::with_kind(qualified_name, ActorProfileKind::Team(details))
    }

    pub fn it_profile(qualified_name: impl Into<String>) -> Self {
        Self::with_kind(qualified_name, ActorProfileKind::ItProfile)
    }

    pub fn with_known_name(mut self, known_name: impl Into<String>) -> Self {
        self.known_name = Some(known_name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_additional_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.additional_properties.insert(name.into(), value.into());
        self
    }

    pub fn with_extended_property(mut self, name: impl Into<String>, value: Value) -> Self {
        self.extended_properties.insert(name.into(), value);
        self
    }

    /// Person details, when this is a person profile.
    pub fn person_details(&self) -> Option<&PersonDetails> {
        match &self.kind {
            ActorProfileKind::Person(details) => Some(details),
            _ => None,
        }
    }

    /// Team details, when this is a team profile.
    pub fn team_details(&self) -> Option<&TeamDetails> {
        match &self.kind {
            ActorProfileKind::Team(details) => Some(details),
            _ => None,
        }
    }
}
