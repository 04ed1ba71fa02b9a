//! Prompt templates.

use contract_models_macros::Model;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named prompt used when asking the language model about documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Model)]
#[model(kind = "entity")]
pub struct Prompt {
    #[model_field(primary_key)]
    pub id: String,
    pub name: String,
    pub content: String,
}

impl Prompt {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            content: content.into(),
        }
    }
}
