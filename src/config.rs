//! Handler configuration.

use crate::error::{ValidationError, ValidationResult};

/// Largest page a caller may request unless configured otherwise.
pub const DEFAULT_MAX_PAGE_SIZE: usize = 1000;

/// Page size used while collecting an element's relationships.
pub const DEFAULT_RELATIONSHIP_PAGE_SIZE: usize = 100;

/// Configuration shared by every handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerConfig {
    /// Name of this service, reported in conversion failures
    pub service_name: String,
    /// Name of the metadata server the handlers talk to
    pub server_name: String,
    /// Largest page size accepted from callers; 0 disables the check
    pub max_page_size: usize,
    /// Page size used when paging an element's relationships
    pub relationship_page_size: usize,
    /// Whether conversion failures are sent to the audit sink
    pub audit_conversion_failures: bool,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            service_name: "metadata-handlers".to_string(),
            server_name: "local-metadata-server".to_string(),
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
            relationship_page_size: DEFAULT_RELATIONSHIP_PAGE_SIZE,
            audit_conversion_failures: true,
        }
    }
}

impl HandlerConfig {
    pub fn validate(&self) -> ValidationResult<()> {
        if self.service_name.trim().is_empty() {
            return Err(ValidationError::invalid_configuration(
                "service name must not be blank",
            ));
        }
        if self.server_name.trim().is_empty() {
            return Err(ValidationError::invalid_configuration(
                "server name must not be blank",
            ));
        }
        if self.relationship_page_size == 0 {
            return Err(ValidationError::invalid_configuration(
                "relationship page size must be greater than zero",
            ));
        }
        if self.max_page_size > 0 && self.relationship_page_size > self.max_page_size {
            return Err(ValidationError::invalid_configuration(format!(
                "relationship page size {} exceeds the maximum page size {}",
                self.relationship_page_size, self.max_page_size
            )));
        }
        Ok(())
    }
}
