//! Vendor records.

use contract_models_macros::{Model, ModelEdit};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A supplier delivering work under one or more SOWs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Model)]
#[model(kind = "entity")]
pub struct Vendor {
    #[model_field(primary_key)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[model_field(comment = "Free-form data extracted from vendor documents")]
    pub metadata: Option<serde_json::Value>,
}

impl Vendor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            contact_name: None,
            contact_email: None,
            contact_phone: None,
            address: None,
            website: None,
            metadata: None,
        }
    }
}

/// Partial update of a [`Vendor`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Model, ModelEdit)]
#[model(kind = "edit")]
#[edit(target = Vendor)]
pub struct VendorEdit {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    #[edit(wrap)]
    pub contact_name: Option<String>,
    #[serde(default)]
    #[edit(wrap)]
    pub contact_email: Option<String>,
    #[serde(default)]
    #[edit(wrap)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    #[edit(wrap)]
    pub address: Option<String>,
    #[serde(default)]
    #[edit(wrap)]
    pub website: Option<String>,
}
