//! Actor profiles: people, teams and IT profiles.

use crate::beans::ActorProfileElement;
use crate::element::{RequestContext, SearchOptions};
use crate::error::HandlerResult;
use crate::handlers::{CreateOptions, ElementHandler};
use crate::properties::{ActorProfileProperties, RelationshipProperties, TypedProperties};
use crate::schema::names::{properties, relationships, types};
use crate::store::MetadataStoreClient;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

const NAME_PROPERTIES: &[&str] = &[properties::QUALIFIED_NAME, properties::NAME];

pub struct ActorProfileHandler<C> {
    element: ElementHandler<C>,
}

impl<C> Clone for ActorProfileHandler<C> {
    fn clone(&self) -> Self {
        Self {
            element: self.element.clone(),
        }
    }
}

impl<C: MetadataStoreClient> ActorProfileHandler<C> {
    pub fn new(element: ElementHandler<C>) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &ElementHandler<C> {
        &self.element
    }

    /// Create a profile; the concrete type follows the properties' kind.
    pub async fn create_actor_profile(
        &self,
        context: &RequestContext,
        options: &CreateOptions,
        properties: Option<&ActorProfileProperties>,
    ) -> HandlerResult<String> {
        self.element
            .create(
                context,
                "create_actor_profile",
                types::ACTOR_PROFILE,
                options,
                properties,
            )
            .await
    }

    pub async fn create_actor_profile_from_template(
        &self,
        context: &RequestContext,
        options: &CreateOptions,
        template_guid: &str,
        replacement_properties: Option<&ActorProfileProperties>,
        placeholder_properties: &BTreeMap<String, String>,
    ) -> HandlerResult<String> {
        let type_name = replacement_properties
            .map(|p| p.type_name())
            .unwrap_or(types::ACTOR_PROFILE);
        self.element
            .create_from_template(
                context,
                "create_actor_profile_from_template",
                type_name,
                options,
                template_guid,
                replacement_properties,
                placeholder_properties,
            )
            .await
    }

    pub async fn update_actor_profile(
        &self,
        context: &RequestContext,
        profile_guid: &str,
        replace_all: bool,
        properties: Option<&ActorProfileProperties>,
    ) -> HandlerResult<()> {
        self.element
            .update(
                context,
                "update_actor_profile",
                (profile_guid, "profileGUID"),
                types::ACTOR_PROFILE,
                replace_all,
                properties,
            )
            .await
    }

    pub async fn delete_actor_profile(
        &self,
        context: &RequestContext,
        profile_guid: &str,
        cascaded: bool,
    ) -> HandlerResult<()> {
        self.element
            .delete(
                context,
                "delete_actor_profile",
                (profile_guid, "profileGUID"),
                cascaded,
            )
            .await
    }

    pub async fn link_location_to_profile(
        &self,
        context: &RequestContext,
        profile_guid: &str,
        location_guid: &str,
        properties: Option<&RelationshipProperties>,
    ) -> HandlerResult<String> {
        self.element
            .link(
                context,
                "link_location_to_profile",
                relationships::PROFILE_LOCATION,
                (profile_guid, "profileGUID"),
                (location_guid, "locationGUID"),
                properties,
            )
            .await
    }

    pub async fn detach_location_from_profile(
        &self,
        context: &RequestContext,
        profile_guid: &str,
        location_guid: &str,
    ) -> HandlerResult<()> {
        self.element
            .unlink(
                context,
                "detach_location_from_profile",
                relationships::PROFILE_LOCATION,
                (profile_guid, "profileGUID"),
                (location_guid, "locationGUID"),
            )
            .await
    }

    pub async fn link_identity_to_profile(
        &self,
        context: &RequestContext,
        profile_guid: &str,
        user_identity_guid: &str,
        properties: Option<&RelationshipProperties>,
    ) -> HandlerResult<String> {
        self.element
            .link(
                context,
                "link_identity_to_profile",
                relationships::PROFILE_IDENTITY,
                (profile_guid, "profileGUID"),
                (user_identity_guid, "userIdentityGUID"),
                properties,
            )
            .await
    }

    pub async fn detach_identity_from_profile(
        &self,
        context: &RequestContext,
        profile_guid: &str,
        user_identity_guid: &str,
    ) -> HandlerResult<()> {
        self.element
            .unlink(
                context,
                "detach_identity_from_profile",
                relationships::PROFILE_IDENTITY,
                (profile_guid, "profileGUID"),
                (user_identity_guid, "userIdentityGUID"),
            )
            .await
    }

    /// The super team sits at end 1 of `TeamStructure`.
    pub async fn link_team_structure(
        &self,
        context: &RequestContext,
        super_team_guid: &str,
        sub_team_guid: &str,
        properties: Option<&RelationshipProperties>,
    ) -> HandlerResult<String> {
        self.element
            .link(
                context,
                "link_team_structure",
                relationships::TEAM_STRUCTURE,
                (super_team_guid, "superTeamGUID"),
                (sub_team_guid, "subTeamGUID"),
                properties,
            )
            .await
    }

    pub async fn detach_team_structure(
        &self,
        context: &RequestContext,
        super_team_guid: &str,
        sub_team_guid: &str,
    ) -> HandlerResult<()> {
        self.element
            .unlink(
                context,
                "detach_team_structure",
                relationships::TEAM_STRUCTURE,
                (super_team_guid, "superTeamGUID"),
                (sub_team_guid, "subTeamGUID"),
            )
            .await
    }

    /// Link a piece of IT infrastructure to the profile describing it.
    pub async fn link_asset_to_profile(
        &self,
        context: &RequestContext,
        asset_guid: &str,
        it_profile_guid: &str,
        properties: Option<&RelationshipProperties>,
    ) -> HandlerResult<String> {
        self.element
            .link(
                context,
                "link_asset_to_profile",
                relationships::IT_INFRASTRUCTURE_PROFILE,
                (asset_guid, "assetGUID"),
                (it_profile_guid, "itProfileGUID"),
                properties,
            )
            .await
    }

    pub async fn detach_asset_from_profile(
        &self,
        context: &RequestContext,
        asset_guid: &str,
        it_profile_guid: &str,
    ) -> HandlerResult<()> {
        self.element
            .unlink(
                context,
                "detach_asset_from_profile",
                relationships::IT_INFRASTRUCTURE_PROFILE,
                (asset_guid, "assetGUID"),
                (it_profile_guid, "itProfileGUID"),
            )
            .await
    }

    pub async fn find_actor_profiles(
        &self,
        context: &RequestContext,
        search_string: &str,
        options: &SearchOptions,
    ) -> HandlerResult<Vec<ActorProfileElement>> {
        self.element
            .find(context, "find_actor_profiles", search_string, options)
            .await
    }

    pub async fn get_actor_profiles_by_name(
        &self,
        context: &RequestContext,
        name: &str,
        options: &SearchOptions,
    ) -> HandlerResult<Vec<ActorProfileElement>> {
        self.element
            .get_by_name(
                context,
                "get_actor_profiles_by_name",
                name,
                NAME_PROPERTIES,
                options,
            )
            .await
    }

    pub async fn get_actor_profile_by_guid(
        &self,
        context: &RequestContext,
        profile_guid: &str,
        as_of_time: Option<DateTime<Utc>>,
    ) -> HandlerResult<Option<ActorProfileElement>> {
        self.element
            .get_by_guid(
                context,
                "get_actor_profile_by_guid",
                (profile_guid, "profileGUID"),
                as_of_time,
            )
            .await
    }
}
