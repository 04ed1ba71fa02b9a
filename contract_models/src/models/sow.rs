//! Statements of work.

use chrono::NaiveDate;
use contract_models_macros::{Model, ModelEdit};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A statement of work issued under a master services agreement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Model)]
#[model(kind = "entity")]
pub struct Sow {
    #[model_field(primary_key)]
    pub id: String,
    /// Contract number printed on the SOW document.
    pub number: String,
    #[model_field(reference = "msas.id")]
    pub msa_id: String,
    #[serde(default)]
    #[model_field(reference = "vendors.id")]
    pub vendor_id: Option<String>,
    /// Name of the uploaded source document.
    #[serde(default)]
    pub document: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[model_field(comment = "Free-form data extracted from the SOW document")]
    pub metadata: Option<serde_json::Value>,
}

impl Sow {
    pub fn new(
        number: impl Into<String>,
        msa_id: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        budget: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            number: number.into(),
            msa_id: msa_id.into(),
            vendor_id: None,
            document: None,
            start_date,
            end_date,
            budget,
            metadata: None,
        }
    }
}

/// Partial update of a [`Sow`]. The document and its metadata are read-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Model, ModelEdit)]
#[model(kind = "edit")]
#[edit(target = Sow)]
pub struct SowEdit {
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub msa_id: Option<String>,
    #[serde(default)]
    #[edit(wrap)]
    pub vendor_id: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub budget: Option<f64>,
}
