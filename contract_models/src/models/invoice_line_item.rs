//! Invoice line items.

use chrono::NaiveDate;
use contract_models_macros::{Model, ModelEdit};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One billed line of an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Model)]
#[model(kind = "entity")]
pub struct InvoiceLineItem {
    #[model_field(primary_key)]
    pub id: String,
    #[model_field(reference = "invoices.id")]
    pub invoice_id: String,
    #[serde(default)]
    #[model_field(reference = "milestones.id", comment = "Milestone the line bills for")]
    pub milestone_id: Option<String>,
    pub description: String,
    pub amount: f64,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

impl InvoiceLineItem {
    pub fn new(invoice_id: impl Into<String>, description: impl Into<String>, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            invoice_id: invoice_id.into(),
            milestone_id: None,
            description: description.into(),
            amount,
            due_date: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Model, ModelEdit)]
#[model(kind = "edit")]
#[edit(target = InvoiceLineItem)]
pub struct InvoiceLineItemEdit {
    #[serde(default)]
    #[edit(wrap)]
    pub milestone_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    #[edit(wrap)]
    pub due_date: Option<NaiveDate>,
}
