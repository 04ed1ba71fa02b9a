//! Validation requests.

use contract_models_macros::Model;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Model)]
#[model(kind = "request")]
pub struct ValidationRequest {
    #[model_field(comment = "Id of the invoice or SOW to validate")]
    pub id: String,
}

impl ValidationRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
