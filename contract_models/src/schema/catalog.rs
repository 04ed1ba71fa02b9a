//! Catalog of registered models
//!
//! A catalog is the serializable description of a registry, with every
//! field's Rust type mapped to a JSON type.

use serde::{Deserialize, Serialize};

use crate::config::{Config, OutputFormat, TypeMappingConfig};
use crate::error::{Error, Result};
use crate::models::{ModelInfo, ModelKind, ModelRegistry};

/// JSON type of a field, with an optional string format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonType {
    #[serde(rename = "type")]
    pub json_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl JsonType {
    fn plain(json_type: &str) -> Self {
        Self {
            json_type: json_type.to_string(),
            format: None,
        }
    }

    fn formatted(json_type: &str, format: &str) -> Self {
        Self {
            json_type: json_type.to_string(),
            format: Some(format.to_string()),
        }
    }
}

/// Serializable description of every registered model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub models: Vec<ModelDocument>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDocument {
    pub name: String,
    pub kind: ModelKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<String>,
    #[serde(default)]
    pub fields: Vec<FieldDocument>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDocument {
    pub name: String,
    pub rust_type: String,
    #[serde(flatten)]
    pub json_type: JsonType,
    pub nullable: bool,
    pub primary_key: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flattened_from: Option<String>,
}

impl Catalog {
    /// Describe every model of a registry, in registration order
    pub fn from_registry(registry: &ModelRegistry, config: &Config) -> Result<Self> {
        let models = registry
            .get_models()
            .values()
            .map(|info| document_model(info, registry, &config.type_mapping))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { models })
    }

    /// Get a model document by name
    pub fn model(&self, name: &str) -> Option<&ModelDocument> {
        self.models.iter().find(|model| model.name == name)
    }

    /// Render the catalog in the given format
    pub fn render(&self, format: OutputFormat, pretty: bool) -> Result<String> {
        let rendered = match format {
            OutputFormat::Json if pretty => serde_json::to_string_pretty(self)?,
            OutputFormat::Json => serde_json::to_string(self)?,
            OutputFormat::Yaml => serde_yaml::to_string(self)?,
            OutputFormat::Toml if pretty => toml::to_string_pretty(self)?,
            OutputFormat::Toml => toml::to_string(self)?,
        };

        Ok(rendered)
    }
}

fn document_model(
    info: &ModelInfo,
    registry: &ModelRegistry,
    type_mapping: &TypeMappingConfig,
) -> Result<ModelDocument> {
    let fields = info
        .fields
        .iter()
        .map(|field| {
            let json_type = map_type_to_json_type(&field.rust_type, type_mapping, registry)
                .map_err(|e| {
                    Error::TypeMappingError(format!("{}.{}: {}", info.name, field.name, e))
                })?;

            Ok(FieldDocument {
                name: field.name.clone(),
                rust_type: field.rust_type.clone(),
                json_type,
                nullable: field.nullable,
                primary_key: field.primary_key,
                reference: field.reference.as_ref().map(ToString::to_string),
                comment: field.comment.clone(),
                flattened_from: field.flattened_from.clone(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ModelDocument {
        name: info.name.clone(),
        kind: info.kind,
        collection: info.collection_name.clone(),
        variants: info.variants.clone(),
        fields,
    })
}

/// Strip a `Wrapper<...>` around a type, returning the inner type
fn strip_generic<'a>(rust_type: &'a str, wrapper: &str) -> Option<&'a str> {
    let base = rust_type.split('<').next()?;
    let base_name = base.rsplit("::").next()?;

    if base_name != wrapper {
        return None;
    }

    rust_type
        .strip_prefix(base)?
        .strip_prefix('<')?
        .strip_suffix('>')
}

/// Map Rust type to JSON type
pub fn map_type_to_json_type(
    rust_type: &str,
    config: &TypeMappingConfig,
    registry: &ModelRegistry,
) -> Result<JsonType> {
    // First check for custom type mappings
    if let Some(mapping) = config.custom.iter().find(|m| m.rust_type == rust_type) {
        return Ok(JsonType::plain(&mapping.json_type));
    }

    if let Some(inner) = strip_generic(rust_type, "Option") {
        return map_type_to_json_type(inner, config, registry);
    }

    if strip_generic(rust_type, "Vec").is_some() {
        return Ok(JsonType::plain("array"));
    }

    let base = rust_type
        .split('<')
        .next()
        .and_then(|path| path.rsplit("::").next())
        .unwrap_or(rust_type);

    // Default mappings
    let json_type = match base {
        "String" | "&str" | "str" => JsonType::plain("string"),
        "i8" | "i16" | "i32" | "i64" | "isize" | "u8" | "u16" | "u32" | "u64" | "usize" => {
            JsonType::plain("integer")
        }
        "f32" | "f64" => JsonType::plain("number"),
        "bool" => JsonType::plain("boolean"),
        "NaiveDate" => JsonType::formatted("string", "date"),
        "DateTime" | "NaiveDateTime" => JsonType::formatted("string", "date-time"),
        "Uuid" => JsonType::formatted("string", "uuid"),
        "Value" | "HashMap" | "BTreeMap" | "IndexMap" => JsonType::plain("object"),
        other => match registry.get_model(other) {
            Some(info) if info.kind == ModelKind::Enumeration => JsonType::plain("string"),
            Some(_) => JsonType::plain("object"),
            None => {
                return Err(Error::TypeMappingError(format!(
                    "No mapping found for Rust type: {}",
                    rust_type
                )))
            }
        },
    };

    Ok(json_type)
}
