//! Utilities for contract_models
//!
//! This module provides utility functions used across the library.

pub mod logging;
pub mod naming;

// Re-export key utility functions
pub use naming::{
    apply_naming_convention, find_duplicate, get_collection_name, is_valid_collection_name,
    pluralize,
};
