//! Milestone deliverables.

use chrono::NaiveDate;
use contract_models_macros::{Model, ModelEdit};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Status;

/// A work artifact due as part of a milestone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Model)]
#[model(kind = "entity")]
pub struct Deliverable {
    #[model_field(primary_key)]
    pub id: String,
    #[model_field(reference = "milestones.id")]
    pub milestone_id: String,
    pub description: String,
    pub amount: f64,
    #[serde(default)]
    pub status: Status,
    pub due_date: NaiveDate,
}

impl Deliverable {
    pub fn new(
        milestone_id: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            milestone_id: milestone_id.into(),
            description: description.into(),
            amount,
            status: Status::default(),
            due_date,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Model, ModelEdit)]
#[model(kind = "edit")]
#[edit(target = Deliverable)]
pub struct DeliverableEdit {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}
