//! Model registry for contract_models
//!
//! This module manages the registration and lookup of model types.

use indexmap::IndexMap;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::ModelsConfig;
use crate::error::{Error, Result};
use crate::schema::FieldDefinition;
use crate::utils::naming::{find_duplicate, get_collection_name, is_valid_collection_name};

/// A model type that can be described to the registry
pub trait Model {
    /// Get the type name of this model
    fn model_name() -> &'static str;

    /// Get the role this model plays
    fn kind() -> ModelKind;

    /// Get an explicit collection name, overriding the naming convention
    fn collection_name() -> Option<&'static str>;

    /// Get field definitions for this model
    fn field_definitions() -> Vec<FieldDefinition>;

    /// Get the variant names of an enumeration model
    fn variants() -> Vec<&'static str> {
        Vec::new()
    }
}

/// The role a model plays in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    Entity,
    Edit,
    Request,
    Response,
    Enumeration,
    ValidationResult,
}

impl ModelKind {
    /// Whether models of this kind get a collection by naming convention
    pub fn is_stored(&self) -> bool {
        matches!(self, ModelKind::Entity)
    }

    /// Wire name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Entity => "entity",
            ModelKind::Edit => "edit",
            ModelKind::Request => "request",
            ModelKind::Response => "response",
            ModelKind::Enumeration => "enumeration",
            ModelKind::ValidationResult => "validation_result",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Information about a registered model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelInfo {
    pub name: String,
    pub kind: ModelKind,
    pub collection_name: Option<String>,
    pub fields: Vec<FieldDefinition>,
    pub variants: Vec<String>,
}

impl ModelInfo {
    /// Get a field by name
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Get the primary key field, if the model has one
    pub fn primary_key(&self) -> Option<&FieldDefinition> {
        self.fields.iter().find(|field| field.primary_key)
    }
}

/// Registry for contract_models models
#[derive(Debug, Clone)]
pub struct ModelRegistry {
    models: IndexMap<String, ModelInfo>,
    config: ModelsConfig,
}

static GLOBAL_REGISTRY: OnceCell<ModelRegistry> = OnceCell::new();

/// Get the process-wide registry of built-in models
///
/// The registry is built on first use with default settings; every later
/// call returns the same instance.
pub fn registry() -> Result<&'static ModelRegistry> {
    GLOBAL_REGISTRY.get_or_try_init(|| ModelRegistry::builtin(&ModelsConfig::default()))
}

impl ModelRegistry {
    /// Create a new empty model registry
    pub fn new(config: &ModelsConfig) -> Self {
        Self {
            models: IndexMap::new(),
            config: config.clone(),
        }
    }

    /// Create a registry holding every model exported by this crate
    pub fn builtin(config: &ModelsConfig) -> Result<Self> {
        use crate::models::*;

        let mut registry = Self::new(config);

        registry.register::<CompletionRequest>()?;
        registry.register::<Deliverable>()?;
        registry.register::<DeliverableEdit>()?;
        registry.register::<Invoice>()?;
        registry.register::<InvoiceEdit>()?;
        registry.register::<InvoiceLineItem>()?;
        registry.register::<InvoiceLineItemEdit>()?;
        registry.register::<ListResponse<serde_json::Value>>()?;
        registry.register::<Milestone>()?;
        registry.register::<MilestoneEdit>()?;
        registry.register::<Prompt>()?;
        registry.register::<Status>()?;
        registry.register::<Sow>()?;
        registry.register::<SowEdit>()?;
        registry.register::<InvoiceValidationResult>()?;
        registry.register::<SowValidationResult>()?;
        registry.register::<ValidationResultBase>()?;
        registry.register::<ValidationRequest>()?;
        registry.register::<Vendor>()?;
        registry.register::<VendorEdit>()?;

        tracing::info!(models = registry.len(), "Registered built-in models");

        Ok(registry)
    }

    /// Register a model type
    pub fn register<M: Model>(&mut self) -> Result<()> {
        let info = ModelInfo {
            name: M::model_name().to_string(),
            kind: M::kind(),
            collection_name: M::collection_name().map(str::to_string),
            fields: M::field_definitions(),
            variants: M::variants().into_iter().map(str::to_string).collect(),
        };

        self.register_info(info)
    }

    /// Register a model from its description
    pub fn register_info(&mut self, mut info: ModelInfo) -> Result<()> {
        if self.config.exclude.iter().any(|name| name == &info.name) {
            tracing::debug!(model = %info.name, "Skipping excluded model");
            return Ok(());
        }

        if let Some(duplicate) = find_duplicate(info.fields.iter().map(|f| f.name.as_str()), false)
        {
            return Err(Error::ModelRegistrationError(format!(
                "Field `{}` is declared more than once in model {}",
                duplicate, info.name
            )));
        }

        info.collection_name = self.resolve_collection_name(&info)?;

        if let Some(collection) = &info.collection_name {
            let clash = self.models.values().find(|other| {
                other.name != info.name && other.collection_name.as_ref() == Some(collection)
            });

            if let Some(other) = clash {
                return Err(Error::ModelRegistrationError(format!(
                    "Models {} and {} both map to collection `{}`",
                    other.name, info.name, collection
                )));
            }
        }

        if self.models.contains_key(&info.name) {
            if self.config.strict {
                return Err(Error::DuplicateModel(info.name));
            }
            tracing::warn!(model = %info.name, "Replacing previously registered model");
        }

        tracing::debug!(
            model = %info.name,
            kind = %info.kind,
            collection = info.collection_name.as_deref().unwrap_or("-"),
            fields = info.fields.len(),
            "Registered model"
        );

        self.models.insert(info.name.clone(), info);

        Ok(())
    }

    /// Work out the collection a model is stored in
    fn resolve_collection_name(&self, info: &ModelInfo) -> Result<Option<String>> {
        let collection = match &info.collection_name {
            Some(explicit) => explicit.clone(),
            None if info.kind.is_stored() => get_collection_name(
                &info.name,
                &self.config.naming_style,
                self.config.pluralize_collections,
            ),
            None => return Ok(None),
        };

        if self.config.naming_style == "snake_case" && !is_valid_collection_name(&collection) {
            return Err(Error::ModelRegistrationError(format!(
                "Invalid collection name `{}` for model {}",
                collection, info.name
            )));
        }

        Ok(Some(collection))
    }

    /// Check that every given model name is registered
    pub fn verify_exports(&self, names: &[&str]) -> Result<()> {
        let missing: Vec<String> = names
            .iter()
            .filter(|name| !self.contains(**name))
            .map(|name| name.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::MissingExports(missing))
        }
    }

    /// Get all registered models in registration order
    pub fn get_models(&self) -> &IndexMap<String, ModelInfo> {
        &self.models
    }

    /// Get a specific model by name
    pub fn get_model(&self, name: &str) -> Option<&ModelInfo> {
        self.models.get(name)
    }

    /// Find a model by type name or by collection name
    pub fn resolve(&self, name: &str) -> Result<&ModelInfo> {
        self.get_model(name)
            .or_else(|| {
                self.models
                    .values()
                    .find(|info| info.collection_name.as_deref() == Some(name))
            })
            .ok_or_else(|| Error::UnknownModel(name.to_string()))
    }

    /// Check whether a model is registered
    pub fn contains(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    /// Registered model names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    /// Registered models of one kind
    pub fn models_of_kind(&self, kind: ModelKind) -> impl Iterator<Item = &ModelInfo> {
        self.models.values().filter(move |info| info.kind == kind)
    }

    /// Number of registered models
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether no model is registered
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Get the settings this registry was built with
    pub fn config(&self) -> &ModelsConfig {
        &self.config
    }
}
