//! Completion requests.

use contract_models_macros::Model;
use serde::{Deserialize, Serialize};

/// A free-text message sent to the completion endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Model)]
#[model(kind = "request")]
pub struct CompletionRequest {
    pub message: String,
}

impl CompletionRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
