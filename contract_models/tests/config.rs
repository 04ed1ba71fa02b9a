//! Tests for configuration loading and initialization

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    use contract_models::config::{self, OutputFormat};
    use contract_models::{configured_exports, init, Error, MODEL_NAMES};

    const FULL_CONFIG: &str = r###"
        [models]
        naming_style = "snake_case"
        pluralize_collections = false
        strict = false
        exclude = ["Prompt"]

        [type_mapping]
        custom = [
          { rust_type = "Money", json_type = "number" }
        ]

        [logging]
        level = "debug"
        format = "json"
        stdout = false
        file = "logs/contract_models.log"

        [output]
        format = "yaml"
        pretty = false
        "###;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = config::parse("").unwrap();

        assert_eq!(config.models.naming_style, "snake_case");
        assert!(config.models.pluralize_collections);
        assert!(config.models.strict);
        assert!(config.models.exclude.is_empty());
        assert!(config.type_mapping.custom.is_empty());
        assert!(config.logging.is_none());
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.pretty);
    }

    #[test]
    fn test_full_config() {
        let config = config::parse(FULL_CONFIG).unwrap();

        assert!(!config.models.pluralize_collections);
        assert!(!config.models.strict);
        assert_eq!(config.models.exclude, vec!["Prompt".to_string()]);
        assert_eq!(config.type_mapping.custom[0].rust_type, "Money");

        let logging = config.logging.unwrap();
        assert_eq!(logging.level, "debug");
        assert_eq!(logging.format, "json");
        assert_eq!(logging.file.as_deref(), Some("logs/contract_models.log"));

        assert_eq!(config.output.format, OutputFormat::Yaml);
        assert!(!config.output.pretty);
    }

    #[test]
    fn test_partial_section_keeps_field_defaults() {
        let config = config::parse("[models]\nstrict = false\n").unwrap();

        assert!(!config.models.strict);
        assert_eq!(config.models.naming_style, "snake_case");
        assert!(config.models.pluralize_collections);
    }

    #[test]
    fn test_invalid_config_is_a_config_error() {
        let err = config::parse("[output]\nformat = \"xml\"\n").unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));

        let err = config::parse("[models\n").unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("contract_models.toml");
        fs::write(&path, "[models]\npluralize_collections = false\n").unwrap();

        let config = config::load_from_file(&path).unwrap();
        assert!(!config.models.pluralize_collections);
    }

    #[test]
    fn test_missing_file_is_a_config_error() {
        let dir = tempdir().unwrap();
        let err = config::load_from_file(dir.path().join("missing.toml")).unwrap_err();

        assert!(matches!(err, Error::ConfigError(_)));
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn test_init_builds_configured_registry() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("contract_models.toml");
        fs::write(
            &path,
            "[models]\nexclude = [\"CompletionRequest\"]\npluralize_collections = false\n",
        )
        .unwrap();

        let (config, registry) = init(path.to_str().unwrap()).unwrap();

        assert_eq!(registry.len(), MODEL_NAMES.len() - 1);
        assert!(!registry.contains("CompletionRequest"));
        assert_eq!(
            registry.get_model("Sow").unwrap().collection_name.as_deref(),
            Some("sow")
        );
        assert!(!configured_exports(&config).contains(&"CompletionRequest"));
    }
}
