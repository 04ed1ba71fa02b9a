//! Models module for contract_models
//!
//! Every data model lives in its own sub-module and is re-exported here, so
//! consumers import all of them from `contract_models::models`.

pub mod completion_request;
pub mod deliverable;
pub mod edit;
pub mod invoice;
pub mod invoice_line_item;
pub mod list_response;
pub mod milestone;
pub mod prompt;
pub mod registry;
pub mod sow;
pub mod status;
pub mod validation_request;
pub mod validation_result;
pub mod vendor;

pub use completion_request::CompletionRequest;
pub use deliverable::{Deliverable, DeliverableEdit};
pub use invoice::{Invoice, InvoiceEdit};
pub use invoice_line_item::{InvoiceLineItem, InvoiceLineItemEdit};
pub use list_response::ListResponse;
pub use milestone::{Milestone, MilestoneEdit};
pub use prompt::Prompt;
pub use status::Status;
pub use sow::{Sow, SowEdit};
pub use validation_result::{InvoiceValidationResult, SowValidationResult, ValidationResultBase};
pub use validation_request::ValidationRequest;
pub use vendor::{Vendor, VendorEdit};

pub use edit::ModelEdit;
pub use registry::{registry, Model, ModelInfo, ModelKind, ModelRegistry};
pub use validation_result::ValidationOutcome;

/// Names of every model type exported from this module
pub const MODEL_NAMES: [&str; 20] = [
    "CompletionRequest",
    "Deliverable",
    "DeliverableEdit",
    "Invoice",
    "InvoiceEdit",
    "InvoiceLineItem",
    "InvoiceLineItemEdit",
    "ListResponse",
    "Milestone",
    "MilestoneEdit",
    "Prompt",
    "Status",
    "Sow",
    "SowEdit",
    "InvoiceValidationResult",
    "SowValidationResult",
    "ValidationResultBase",
    "ValidationRequest",
    "Vendor",
    "VendorEdit",
];
