//! Error types for metadata handler operations.
//!
//! Handlers surface a small, stable set of error kinds regardless of which
//! entity family they serve. Local input problems are reported before any
//! store call, store failures are passed through, and failures while turning
//! generic elements back into typed beans are wrapped into a single
//! conversion error that keeps the original error class.

use crate::store::StoreError;

/// Main error type for handler operations.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    /// A parameter failed local validation. Always a caller error.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// The metadata store rejected the caller.
    #[error("User '{user_id}' is not authorized to perform {operation}: {message}")]
    Unauthorized {
        user_id: String,
        operation: String,
        message: String,
    },

    /// Reverse projection of a stored element failed.
    #[error(
        "Conversion failed in {operation} for service {service}: {error_class} - {message}"
    )]
    ConversionFailed {
        /// Name of the underlying error kind
        error_class: String,
        /// Message of the underlying error
        message: String,
        /// Handler operation that requested the conversion
        operation: String,
        /// Service name from the handler configuration
        service: String,
    },

    /// Any other failure reported by the metadata store.
    #[error("Metadata store error during {operation}: {source}")]
    Store {
        operation: String,
        #[source]
        source: StoreError,
    },
}

impl HandlerError {
    /// Wrap a store failure, surfacing authorization failures verbatim.
    pub fn from_store(operation: &str, error: StoreError) -> Self {
        match error {
            StoreError::Unauthorized { user_id, message } => HandlerError::Unauthorized {
                user_id,
                operation: operation.to_string(),
                message,
            },
            source => HandlerError::Store {
                operation: operation.to_string(),
                source,
            },
        }
    }

    /// True for errors caused by the caller's own input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, HandlerError::InvalidInput(_))
    }
}

/// Validation errors raised by the input validator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("No user identifier supplied to {method}")]
    MissingUserId { method: String },

    #[error("Parameter '{parameter}' passed to {method} is null or blank")]
    BlankGuid { parameter: String, method: String },

    #[error("Parameter '{parameter}' passed to {method} is null or blank")]
    BlankName { parameter: String, method: String },

    #[error("Required property '{property}' of {type_name} is missing in {method}")]
    MissingIdentity {
        property: String,
        type_name: String,
        method: String,
    },

    #[error("Properties for {type_name} were not supplied to {method}")]
    MissingProperties { type_name: String, method: String },

    #[error("Search string '{search_string}' passed to {method} is not a valid expression: {details}")]
    InvalidSearchString {
        search_string: String,
        method: String,
        details: String,
    },

    #[error("Page size {page_size} requested by {method} exceeds the maximum of {max_page_size}")]
    PageSizeTooLarge {
        page_size: usize,
        max_page_size: usize,
        method: String,
    },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl ValidationError {
    pub fn blank_guid(parameter: &str, method: &str) -> Self {
        Self::BlankGuid {
            parameter: parameter.to_string(),
            method: method.to_string(),
        }
    }

    pub fn blank_name(parameter: &str, method: &str) -> Self {
        Self::BlankName {
            parameter: parameter.to_string(),
            method: method.to_string(),
        }
    }

    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }
}

/// Errors raised while rebuilding a typed bean from a generic element.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    #[error("Property '{property}' holds {actual}, expected {expected}")]
    UnexpectedPropertyType {
        property: String,
        expected: String,
        actual: String,
    },

    #[error("Required property '{property}' is missing from element {guid}")]
    MissingProperty { property: String, guid: String },

    #[error("Relationship {relationship_guid} of type {relationship_type} does not reference element {element_guid}")]
    MalformedRelationship {
        relationship_guid: String,
        relationship_type: String,
        element_guid: String,
    },

    #[error("Relationship {relationship_guid} of type {relationship_type} links to a {actual_type}, expected {expected_type}")]
    UnexpectedRelatedType {
        relationship_guid: String,
        relationship_type: String,
        expected_type: String,
        actual_type: String,
    },

    #[error("Element {guid} of type {type_name} cannot be represented as {bean}")]
    UnsupportedType {
        guid: String,
        type_name: String,
        bean: String,
    },
}

impl ConversionError {
    /// Stable name of the error kind, reported as the error class.
    pub fn class_name(&self) -> &'static str {
        match self {
            ConversionError::UnexpectedPropertyType { .. } => "UnexpectedPropertyType",
            ConversionError::MissingProperty { .. } => "MissingProperty",
            ConversionError::MalformedRelationship { .. } => "MalformedRelationship",
            ConversionError::UnexpectedRelatedType { .. } => "UnexpectedRelatedType",
            ConversionError::UnsupportedType { .. } => "UnsupportedType",
        }
    }
}

/// Result type for handler operations.
pub type HandlerResult<T> = Result<T, HandlerError>;

/// Result type for validation checks.
pub type ValidationResult<T> = Result<T, ValidationError>;
