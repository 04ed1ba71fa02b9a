//! Naming utilities for contract_models
//!
//! This module provides utilities for naming conventions and transformations.

use inflector::Inflector;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static SNAKE_IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z][a-z0-9_]*$").expect("collection name pattern is valid")
});

/// Apply a naming convention to a string
pub fn apply_naming_convention(name: &str, convention: &str) -> String {
    match convention {
        "snake_case" => name.to_snake_case(),
        "camel_case" => name.to_camel_case(),
        "pascal_case" => name.to_pascal_case(),
        "kebab_case" => name.to_kebab_case(),
        "screaming_snake_case" => name.to_screaming_snake_case(),
        _ => name.to_string(), // Default: keep as is
    }
}

/// Get collection name from a model name according to convention
pub fn get_collection_name(model_name: &str, style: &str, pluralize_name: bool) -> String {
    let name = apply_naming_convention(model_name, style);

    if pluralize_name {
        pluralize(&name)
    } else {
        name
    }
}

/// Convert a singular name to plural
pub fn pluralize(name: &str) -> String {
    // The inflector leaves these untouched
    match name.to_lowercase().as_str() {
        "person" => "people".to_string(),
        "child" => "children".to_string(),
        _ => name.to_plural(),
    }
}

/// Check that a collection name is a lowercase snake_case identifier
pub fn is_valid_collection_name(name: &str) -> bool {
    SNAKE_IDENTIFIER.is_match(name)
}

/// Return the first name that appears more than once
pub fn find_duplicate<'a, I>(names: I, ignore_case: bool) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();

    for name in names {
        let key = if ignore_case {
            name.to_lowercase()
        } else {
            name.to_string()
        };

        if !seen.insert(key) {
            return Some(name.to_string());
        }
    }

    None
}
