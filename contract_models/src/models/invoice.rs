//! Vendor invoices.

use chrono::NaiveDate;
use contract_models_macros::{Model, ModelEdit};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::InvoiceLineItem;

/// A billing document submitted by a vendor against a SOW.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Model)]
#[model(kind = "entity")]
pub struct Invoice {
    #[model_field(primary_key)]
    pub id: String,
    #[model_field(reference = "vendors.id")]
    pub vendor_id: String,
    #[serde(default)]
    #[model_field(reference = "sows.id")]
    pub sow_id: Option<String>,
    /// Invoice number as printed by the vendor.
    pub number: String,
    pub invoice_date: NaiveDate,
    #[serde(default)]
    pub payment_status: Option<String>,
    pub total_amount: f64,
    #[serde(default)]
    pub document: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub line_items: Vec<InvoiceLineItem>,
}

impl Invoice {
    pub fn new(
        vendor_id: impl Into<String>,
        number: impl Into<String>,
        invoice_date: NaiveDate,
        total_amount: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            vendor_id: vendor_id.into(),
            sow_id: None,
            number: number.into(),
            invoice_date,
            payment_status: None,
            total_amount,
            document: None,
            metadata: None,
            line_items: Vec::new(),
        }
    }

    /// Get a line item by id
    pub fn line_item(&self, id: &str) -> Option<&InvoiceLineItem> {
        self.line_items.iter().find(|item| item.id == id)
    }

    pub fn line_item_mut(&mut self, id: &str) -> Option<&mut InvoiceLineItem> {
        self.line_items.iter_mut().find(|item| item.id == id)
    }
}

/// Partial update of an [`Invoice`]. Line items are edited individually.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Model, ModelEdit)]
#[model(kind = "edit")]
#[edit(target = Invoice)]
pub struct InvoiceEdit {
    #[serde(default)]
    pub vendor_id: Option<String>,
    #[serde(default)]
    #[edit(wrap)]
    pub sow_id: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub invoice_date: Option<NaiveDate>,
    #[serde(default)]
    #[edit(wrap)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub total_amount: Option<f64>,
}
