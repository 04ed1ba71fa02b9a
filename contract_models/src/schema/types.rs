//! Type definitions for model field metadata

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Represents a field definition from a Rust model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    pub rust_type: String,
    pub nullable: bool,
    pub primary_key: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<FieldReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Model type this field was flattened in from, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flattened_from: Option<String>,
}

impl FieldDefinition {
    /// Create a field definition, inferring nullability from `Option<T>`
    pub fn new(name: &str, rust_type: &str) -> Self {
        Self {
            name: name.to_string(),
            rust_type: rust_type.to_string(),
            nullable: rust_type.starts_with("Option<"),
            primary_key: false,
            reference: None,
            comment: None,
            flattened_from: None,
        }
    }

    /// Mark the field as the model's primary key
    pub fn primary_key(mut self, primary_key: bool) -> Self {
        self.primary_key = primary_key;
        self
    }

    /// Record that the field holds the key of another collection
    pub fn references(mut self, collection: &str, field: &str) -> Self {
        self.reference = Some(FieldReference {
            collection: collection.to_string(),
            field: field.to_string(),
        });
        self
    }

    pub fn comment(mut self, comment: &str) -> Self {
        self.comment = Some(comment.to_string());
        self
    }

    /// Mark the field as coming from a flattened, embedded model
    pub fn flattened_from(mut self, model: &str) -> Self {
        // Nested flattening keeps the outermost embedded model
        self.flattened_from = Some(model.to_string());
        self
    }
}

/// Represents a reference from a field to a field of another collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldReference {
    pub collection: String,
    pub field: String,
}

impl FromStr for FieldReference {
    type Err = Error;

    /// Parse a reference written as `collection.field`
    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('.') {
            Some((collection, field))
                if !collection.is_empty() && !field.is_empty() && !field.contains('.') =>
            {
                Ok(Self {
                    collection: collection.to_string(),
                    field: field.to_string(),
                })
            }
            _ => Err(Error::InvalidValue {
                field: "reference".to_string(),
                message: format!("expected `collection.field`, got `{}`", s),
            }),
        }
    }
}

impl fmt::Display for FieldReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.collection, self.field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nullable_inferred_from_option() {
        assert!(FieldDefinition::new("website", "Option<String>").nullable);
        assert!(!FieldDefinition::new("name", "String").nullable);
    }

    #[test]
    fn test_reference_parsing() {
        let reference: FieldReference = "sows.id".parse().unwrap();
        assert_eq!(reference.collection, "sows");
        assert_eq!(reference.field, "id");
        assert_eq!(reference.to_string(), "sows.id");

        assert!("sows".parse::<FieldReference>().is_err());
        assert!(".id".parse::<FieldReference>().is_err());
        assert!("a.b.c".parse::<FieldReference>().is_err());
    }
}
