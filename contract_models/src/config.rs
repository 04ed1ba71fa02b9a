//! Configuration handling for contract_models

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Load configuration from a TOML file
pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    let config_str = fs::read_to_string(path).map_err(|e| {
        Error::ConfigError(format!("Failed to read config file {}: {}", path.display(), e))
    })?;

    let config = parse(&config_str)?;
    tracing::debug!(path = %path.display(), "Loaded configuration");

    Ok(config)
}

/// Parse configuration from a TOML string
pub fn parse(config_str: &str) -> Result<Config> {
    toml::from_str(config_str)
        .map_err(|e| Error::ConfigError(format!("Failed to parse config file: {}", e)))
}

/// Represents the complete contract_models configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub models: ModelsConfig,
    pub type_mapping: TypeMappingConfig,
    pub logging: Option<LoggingConfig>,
    pub output: OutputConfig,
}

/// Model registration configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ModelsConfig {
    /// Naming style applied to model names when deriving collection names
    pub naming_style: String,
    pub pluralize_collections: bool,
    /// Reject duplicate registrations instead of replacing them
    pub strict: bool,
    /// Model names that are never registered
    pub exclude: Vec<String>,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            naming_style: "snake_case".to_string(),
            pluralize_collections: true,
            strict: true,
            exclude: Vec::new(),
        }
    }
}

/// Type mapping configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct TypeMappingConfig {
    pub custom: Vec<CustomTypeMapping>,
}

/// Custom type mapping
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CustomTypeMapping {
    pub rust_type: String,
    pub json_type: String,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
    pub format: String,
    pub stdout: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            format: "text".to_string(),
            stdout: true,
        }
    }
}

/// Catalog output configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            pretty: true,
        }
    }
}

/// Serialization format for rendered catalogs
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Yaml,
    Toml,
}
