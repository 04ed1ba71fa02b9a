//! Outcomes of validating invoices and SOWs against their contracts.

use chrono::{DateTime, Utc};
use contract_models_macros::Model;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Behaviour shared by every validation result.
pub trait ValidationOutcome {
    /// The fields common to all validation results
    fn base(&self) -> &ValidationResultBase;

    /// Id of the validated invoice or SOW, if known
    fn subject_id(&self) -> Option<&str>;

    fn passed(&self) -> bool {
        self.base().validation_passed
    }

    fn datestamp(&self) -> DateTime<Utc> {
        self.base().datestamp
    }
}

/// Fields common to every validation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Model)]
#[model(kind = "validation_result")]
pub struct ValidationResultBase {
    #[model_field(primary_key)]
    pub id: String,
    pub datestamp: DateTime<Utc>,
    /// Human-readable explanation produced by the validator.
    pub result: String,
    pub validation_passed: bool,
}

impl ValidationResultBase {
    /// Create a result stamped with the current time
    pub fn new(result: impl Into<String>, validation_passed: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            datestamp: Utc::now(),
            result: result.into(),
            validation_passed,
        }
    }
}

impl ValidationOutcome for ValidationResultBase {
    fn base(&self) -> &ValidationResultBase {
        self
    }

    fn subject_id(&self) -> Option<&str> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Model)]
#[model(kind = "validation_result", collection = "invoice_validation_results")]
pub struct InvoiceValidationResult {
    #[model_field(reference = "invoices.id")]
    pub invoice_id: String,
    #[serde(flatten)]
    #[model_field(flatten)]
    pub base: ValidationResultBase,
}

impl InvoiceValidationResult {
    pub fn new(invoice_id: impl Into<String>, base: ValidationResultBase) -> Self {
        Self {
            invoice_id: invoice_id.into(),
            base,
        }
    }
}

impl ValidationOutcome for InvoiceValidationResult {
    fn base(&self) -> &ValidationResultBase {
        &self.base
    }

    fn subject_id(&self) -> Option<&str> {
        Some(&self.invoice_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Model)]
#[model(kind = "validation_result", collection = "sow_validation_results")]
pub struct SowValidationResult {
    #[model_field(reference = "sows.id")]
    pub sow_id: String,
    #[serde(flatten)]
    #[model_field(flatten)]
    pub base: ValidationResultBase,
}

impl SowValidationResult {
    pub fn new(sow_id: impl Into<String>, base: ValidationResultBase) -> Self {
        Self {
            sow_id: sow_id.into(),
            base,
        }
    }
}

impl ValidationOutcome for SowValidationResult {
    fn base(&self) -> &ValidationResultBase {
        &self.base
    }

    fn subject_id(&self) -> Option<&str> {
        Some(&self.sow_id)
    }
}
