//! Local input validation.
//!
//! Checks run before any store call. Every failure is a caller error and is
//! reported as [`ValidationError`].

use crate::error::{ValidationError, ValidationResult};
use crate::properties::TypedProperties;
use regex::Regex;

/// Validates handler parameters.
#[derive(Debug, Clone, Copy)]
pub struct InputValidator {
    max_page_size: usize,
}

impl InputValidator {
    pub fn new(max_page_size: usize) -> Self {
        Self { max_page_size }
    }

    pub fn max_page_size(&self) -> usize {
        self.max_page_size
    }

    pub fn validate_user_id(&self, user_id: &str, method: &str) -> ValidationResult<()> {
        if user_id.trim().is_empty() {
            return Err(ValidationError::MissingUserId {
                method: method.to_string(),
            });
        }
        Ok(())
    }

    pub fn validate_guid(&self, guid: &str, parameter: &str, method: &str) -> ValidationResult<()> {
        if guid.trim().is_empty() {
            return Err(ValidationError::blank_guid(parameter, method));
        }
        Ok(())
    }

    pub fn validate_name(&self, name: &str, parameter: &str, method: &str) -> ValidationResult<()> {
        if name.trim().is_empty() {
            return Err(ValidationError::blank_name(parameter, method));
        }
        Ok(())
    }

    /// Search strings are regular expressions and must compile.
    pub fn validate_search_string(&self, search_string: &str, method: &str) -> ValidationResult<()> {
        self.validate_name(search_string, "searchString", method)?;
        Regex::new(search_string)
            .map(|_| ())
            .map_err(|e| ValidationError::InvalidSearchString {
                search_string: search_string.to_string(),
                method: method.to_string(),
                details: e.to_string(),
            })
    }

    /// A page size of zero asks for the store default and is always allowed.
    pub fn validate_page_size(&self, page_size: usize, method: &str) -> ValidationResult<()> {
        if self.max_page_size > 0 && page_size > self.max_page_size {
            return Err(ValidationError::PageSizeTooLarge {
                page_size,
                max_page_size: self.max_page_size,
                method: method.to_string(),
            });
        }
        Ok(())
    }

    /// Properties must be supplied and carry a non-blank identity.
    pub fn validate_properties<'p, P: TypedProperties>(
        &self,
        properties: Option<&'p P>,
        type_name: &str,
        method: &str,
    ) -> ValidationResult<&'p P> {
        let properties = properties.ok_or_else(|| ValidationError::MissingProperties {
            type_name: type_name.to_string(),
            method: method.to_string(),
        })?;

        if properties.identity().trim().is_empty() {
            return Err(ValidationError::MissingIdentity {
                property: properties.identity_property().to_string(),
                type_name: properties.type_name().to_string(),
                method: method.to_string(),
            });
        }
        Ok(properties)
    }
}

impl Default for InputValidator {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MAX_PAGE_SIZE)
    }
}
