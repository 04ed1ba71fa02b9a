//! Tests for catalog generation and type mapping

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use contract_models::config::{Config, CustomTypeMapping, ModelsConfig, OutputFormat};
    use contract_models::schema::{map_type_to_json_type, Catalog, JsonType};
    use contract_models::{Error, Model, ModelRegistry, MODEL_NAMES};

    #[derive(Model)]
    #[model(kind = "request")]
    #[allow(dead_code)]
    struct Transfer {
        amount: Money,
    }

    #[allow(dead_code)]
    struct Money(i64);

    #[fixture]
    fn registry() -> ModelRegistry {
        ModelRegistry::builtin(&ModelsConfig::default()).unwrap()
    }

    fn json_type(json_type: &str, format: Option<&str>) -> JsonType {
        JsonType {
            json_type: json_type.to_string(),
            format: format.map(str::to_string),
        }
    }

    #[rstest]
    #[case("String", "string", None)]
    #[case("Option<String>", "string", None)]
    #[case("i64", "integer", None)]
    #[case("usize", "integer", None)]
    #[case("f64", "number", None)]
    #[case("bool", "boolean", None)]
    #[case("NaiveDate", "string", Some("date"))]
    #[case("Option<NaiveDate>", "string", Some("date"))]
    #[case("DateTime<Utc>", "string", Some("date-time"))]
    #[case("chrono::DateTime<chrono::Utc>", "string", Some("date-time"))]
    #[case("Option<serde_json::Value>", "object", None)]
    #[case("Vec<InvoiceLineItem>", "array", None)]
    #[case("Vec<T>", "array", None)]
    #[case("Status", "string", None)]
    #[case("ValidationResultBase", "object", None)]
    fn test_default_type_mappings(
        registry: ModelRegistry,
        #[case] rust_type: &str,
        #[case] expected: &str,
        #[case] format: Option<&str>,
    ) {
        let config = Config::default();
        assert_eq!(
            map_type_to_json_type(rust_type, &config.type_mapping, &registry).unwrap(),
            json_type(expected, format)
        );
    }

    #[rstest]
    fn test_custom_mappings_win(registry: ModelRegistry) {
        let mut config = Config::default();
        config.type_mapping.custom = vec![
            CustomTypeMapping {
                rust_type: "Money".to_string(),
                json_type: "number".to_string(),
            },
            CustomTypeMapping {
                rust_type: "String".to_string(),
                json_type: "text".to_string(),
            },
        ];

        assert_eq!(
            map_type_to_json_type("Money", &config.type_mapping, &registry).unwrap(),
            json_type("number", None)
        );
        assert_eq!(
            map_type_to_json_type("Option<String>", &config.type_mapping, &registry).unwrap(),
            json_type("text", None)
        );
    }

    #[rstest]
    fn test_unknown_type_is_an_error(registry: ModelRegistry) {
        let config = Config::default();
        let err = map_type_to_json_type("Money", &config.type_mapping, &registry).unwrap_err();

        assert!(matches!(err, Error::TypeMappingError(_)));
        assert!(err.to_string().contains("Money"));
    }

    #[rstest]
    fn test_catalog_documents_every_model(registry: ModelRegistry) {
        let catalog = Catalog::from_registry(&registry, &Config::default()).unwrap();

        let names: Vec<&str> = catalog.models.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, MODEL_NAMES.to_vec());

        let sow = catalog.model("Sow").unwrap();
        assert_eq!(sow.collection.as_deref(), Some("sows"));

        let budget = sow.fields.iter().find(|f| f.name == "budget").unwrap();
        assert_eq!(budget.json_type, json_type("number", None));

        let msa_id = sow.fields.iter().find(|f| f.name == "msa_id").unwrap();
        assert_eq!(msa_id.reference.as_deref(), Some("msas.id"));

        let status = catalog.model("Status").unwrap();
        assert!(status.fields.is_empty());
        assert_eq!(status.variants.len(), 4);
    }

    #[test]
    fn test_catalog_reports_unmapped_field() {
        let mut registry = ModelRegistry::new(&ModelsConfig::default());
        registry.register::<Transfer>().unwrap();

        let err = Catalog::from_registry(&registry, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("Transfer.amount"));

        let mut config = Config::default();
        config.type_mapping.custom.push(CustomTypeMapping {
            rust_type: "Money".to_string(),
            json_type: "integer".to_string(),
        });
        assert!(Catalog::from_registry(&registry, &config).is_ok());
    }

    #[rstest]
    fn test_json_rendering_round_trips(registry: ModelRegistry) {
        let catalog = Catalog::from_registry(&registry, &Config::default()).unwrap();

        for pretty in [true, false] {
            let rendered = catalog.render(OutputFormat::Json, pretty).unwrap();
            let parsed: Catalog = serde_json::from_str(&rendered).unwrap();
            assert_eq!(parsed, catalog);
        }

        let compact = catalog.render(OutputFormat::Json, false).unwrap();
        assert!(!compact.contains('\n'));
    }

    #[rstest]
    fn test_yaml_rendering(registry: ModelRegistry) {
        let catalog = Catalog::from_registry(&registry, &Config::default()).unwrap();
        let rendered = catalog.render(OutputFormat::Yaml, true).unwrap();

        assert!(rendered.contains("name: Sow"));
        assert!(rendered.contains("collection: invoice_line_items"));

        let parsed: serde_yaml::Value = serde_yaml::from_str(&rendered).unwrap();
        assert_eq!(parsed["models"].as_sequence().unwrap().len(), MODEL_NAMES.len());
    }

    #[rstest]
    fn test_toml_rendering(registry: ModelRegistry) {
        let catalog = Catalog::from_registry(&registry, &Config::default()).unwrap();
        let rendered = catalog.render(OutputFormat::Toml, true).unwrap();

        let parsed: toml::Value = toml::from_str(&rendered).unwrap();
        let models = parsed["models"].as_array().unwrap();
        assert_eq!(models.len(), MODEL_NAMES.len());
        assert_eq!(models[0]["name"].as_str(), Some("CompletionRequest"));
        assert_eq!(models[0]["kind"].as_str(), Some("request"));
    }
}
