//! Open metadata type vocabulary.
//!
//! # Key Types
//!
//! - [`TypeRegistry`] - entity type hierarchy and relationship end types
//! - [`names`] - wire names of types, relationships and properties
//!
//! # Examples
//!
//! ```rust
//! use metadata_handlers::schema::TypeRegistry;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = TypeRegistry::new()?;
//! assert!(registry.is_type_of("Person", "ActorProfile"));
//! # Ok(())
//! # }
//! ```

pub mod embedded;
pub mod names;
pub mod registry;

pub use registry::{RelationshipTypeDefinition, TypeRegistry};
