//! Schema module for contract_models
//!
//! This module describes model fields and renders the registry as a catalog.

pub mod catalog;
pub mod types;

// Re-export key types
pub use catalog::{map_type_to_json_type, Catalog, FieldDocument, JsonType, ModelDocument};
pub use types::{FieldDefinition, FieldReference};
