//! Typed read-model beans returned by the handlers.
//!
//! Every bean pairs an [`ElementHeader`] with the typed properties rebuilt
//! from the element. Graph-shaped beans also carry the elements reached
//! through their relationship slots.

pub mod actor_profile;
pub mod endpoint;
pub mod governance;
pub mod schema;

pub use actor_profile::ActorProfileElement;
pub use endpoint::EndpointElement;
pub use governance::GovernanceDefinitionElement;
pub use schema::{SchemaAttributeElement, SchemaTypeElement};

pub use crate::projection::RelatedElement;

use crate::element::{EffectivityWindow, ElementStatus, GenericElement};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Store bookkeeping shared by every bean.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementHeader {
    pub guid: String,
    pub type_name: String,
    pub status: ElementStatus,
    pub window: EffectivityWindow,
    pub anchor_guid: Option<String>,
    pub created_by: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub version: u64,
}

impl From<&GenericElement> for ElementHeader {
    fn from(element: &GenericElement) -> Self {
        Self {
            guid: element.guid.clone(),
            type_name: element.type_name.clone(),
            status: element.status,
            window: element.window,
            anchor_guid: element.anchor_guid.clone(),
            created_by: element.created_by.clone(),
            created: element.created,
            updated: element.updated,
            version: element.version,
        }
    }
}
