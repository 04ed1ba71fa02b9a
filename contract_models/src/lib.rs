//! contract_models: data models for vendor contract management
//!
//! This crate collects the models used to manage vendors, statements of work,
//! milestones, deliverables and invoices, and re-exports all of them from one
//! place. A [`ModelRegistry`] describes every exported model at runtime.

// Lets the derive macros refer to `::contract_models` from inside this crate
extern crate self as contract_models;

pub mod config;
pub mod error;
pub mod models;
pub mod schema;
pub mod utils;

// Re-export main types for easier access
pub use config::Config;
pub use contract_models_macros::{Model, ModelEdit};
pub use error::{Error, Result};
pub use models::{
    registry, Model, ModelEdit, ModelInfo, ModelKind, ModelRegistry, ValidationOutcome,
    MODEL_NAMES,
};
pub use models::{
    CompletionRequest, Deliverable, DeliverableEdit, Invoice, InvoiceEdit, InvoiceLineItem,
    InvoiceLineItemEdit, InvoiceValidationResult, ListResponse, Milestone, MilestoneEdit, Prompt,
    Sow, SowEdit, SowValidationResult, Status, ValidationRequest, ValidationResultBase, Vendor,
    VendorEdit,
};
pub use schema::Catalog;

/// Initialize contract_models with the specified configuration file
///
/// Loads the configuration, sets up logging and builds a registry of the
/// built-in models using the configured settings.
pub fn init(config_path: &str) -> Result<(Config, ModelRegistry)> {
    let config = config::load_from_file(config_path)?;
    utils::logging::init_logging(&config.logging)?;

    let registry = ModelRegistry::builtin(&config.models)?;
    registry.verify_exports(&configured_exports(&config))?;

    Ok((config, registry))
}

/// Exported model names that are expected in a registry built from `config`
pub fn configured_exports(config: &Config) -> Vec<&'static str> {
    MODEL_NAMES
        .iter()
        .copied()
        .filter(|name| {
            !config
                .models
                .exclude
                .iter()
                .any(|excluded| excluded.as_str() == *name)
        })
        .collect()
}
