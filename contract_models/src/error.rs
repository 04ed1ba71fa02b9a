//! Error types for contract_models

use thiserror::Error;

/// Result type for contract_models operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for contract_models
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Model registration error: {0}")]
    ModelRegistrationError(String),

    #[error("Model already registered: {0}")]
    DuplicateModel(String),

    #[error("Unknown model: {0}")]
    UnknownModel(String),

    #[error("Missing model exports: {}", .0.join(", "))]
    MissingExports(Vec<String>),

    #[error("Type mapping error: {0}")]
    TypeMappingError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// Convert Serde JSON errors to contract_models errors
impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::SerializationError(error.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(error: serde_yaml::Error) -> Self {
        Error::SerializationError(error.to_string())
    }
}

/// Convert TOML deserialization errors to contract_models errors
impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Error::ConfigError(error.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(error: toml::ser::Error) -> Self {
        Error::SerializationError(error.to_string())
    }
}
