//! Errors reported by metadata store clients.
//!
//! These describe failures of the store itself and know nothing about the
//! typed handlers. Handlers surface `Unauthorized` verbatim and wrap every
//! other variant.

/// Errors that can occur during metadata store operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    /// The caller is not allowed to perform the request.
    #[error("User '{user_id}' is not authorized: {message}")]
    Unauthorized { user_id: String, message: String },

    /// No element exists with the given identifier.
    #[error("Element not found: {guid}")]
    ElementNotFound { guid: String },

    /// No relationship of the given type links the two ends.
    #[error("No {relationship_type} relationship between {end1_guid} and {end2_guid}")]
    RelationshipNotFound {
        relationship_type: String,
        end1_guid: String,
        end2_guid: String,
    },

    /// The type name is not part of the store's type vocabulary.
    #[error("Unknown type: {type_name}")]
    UnknownType { type_name: String },

    /// A relationship end does not have the type the relationship requires.
    #[error(
        "Relationship {relationship_type} requires end {end} to be a {expected_type}, found {actual_type}"
    )]
    InvalidRelationshipEnd {
        relationship_type: String,
        end: u8,
        expected_type: String,
        actual_type: String,
    },

    /// The request is structurally valid but cannot be honoured.
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// Unexpected failure inside the store.
    #[error("Internal store error: {message}")]
    Internal { message: String },
}

impl StoreError {
    pub fn element_not_found(guid: impl Into<String>) -> Self {
        Self::ElementNotFound { guid: guid.into() }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    pub fn unknown_type(type_name: impl Into<String>) -> Self {
        Self::UnknownType {
            type_name: type_name.into(),
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::ElementNotFound { .. } | StoreError::RelationshipNotFound { .. }
        )
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
