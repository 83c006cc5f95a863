//! Integration tests for the typed metadata handlers.
//!
//! Every test drives the public handler API against the in-memory store, or
//! against the instrumented wrapper from `common::stores` when it needs to
//! observe or disturb store traffic.

pub mod actor_profiles;
pub mod endpoints;
pub mod governance;
pub mod projection_properties;
pub mod scenarios;
pub mod schema;
