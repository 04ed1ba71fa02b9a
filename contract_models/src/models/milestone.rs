//! SOW milestones.

use chrono::NaiveDate;
use contract_models_macros::{Model, ModelEdit};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Status;

/// A checkpoint within a SOW.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Model)]
#[model(kind = "entity")]
pub struct Milestone {
    #[model_field(primary_key)]
    pub id: String,
    #[model_field(reference = "sows.id")]
    pub sow_id: String,
    pub name: String,
    #[serde(default)]
    pub status: Status,
    pub due_date: NaiveDate,
}

impl Milestone {
    pub fn new(
        sow_id: impl Into<String>,
        name: impl Into<String>,
        status: Status,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sow_id: sow_id.into(),
            name: name.into(),
            status,
            due_date,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Model, ModelEdit)]
#[model(kind = "edit")]
#[edit(target = Milestone)]
pub struct MilestoneEdit {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}
