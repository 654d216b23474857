//! Tests for generator configuration.

use std::io::Write;

use soligen::{ConfigError, DEFAULT_MAX_DEPTH, GeneratorConfig};
use tempfile::NamedTempFile;

#[test]
fn empty_document_uses_defaults() {
    let config = GeneratorConfig::from_toml_str("").unwrap();
    assert_eq!(config, GeneratorConfig::default());
    assert_eq!(config.min_types, 1);
    assert_eq!(config.max_types, 3);
    assert_eq!(config.min_text_length, 1);
    assert_eq!(config.max_text_length, 5);
    assert_eq!(config.example_depth, 3);
    assert_eq!(config.num_examples, 5);
    assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
}

#[test]
fn partial_document_overrides_fields() {
    let config = GeneratorConfig::from_toml_str(
        r#"
        max_types = 6
        num_examples = 2
    "#,
    )
    .unwrap();
    assert_eq!(config.max_types, 6);
    assert_eq!(config.num_examples, 2);
    assert_eq!(config.min_types, 1);
}

#[test]
fn inverted_ranges_are_rejected() {
    let err = GeneratorConfig::from_toml_str("min_types = 4\nmax_types = 2").unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidRange { field: "types", min: 4, max: 2 }
    ));
    assert_eq!(err.to_string(), "invalid range for types: 4..=2");
}

#[test]
fn zero_counts_are_rejected() {
    assert!(matches!(
        GeneratorConfig::from_toml_str("min_text_length = 0"),
        Err(ConfigError::InvalidRange { field: "text_length", .. })
    ));
    assert!(matches!(
        GeneratorConfig::from_toml_str("max_depth = 0"),
        Err(ConfigError::InvalidRange { field: "max_depth", .. })
    ));
    assert!(matches!(
        GeneratorConfig::from_toml_str("num_examples = 0"),
        Err(ConfigError::InvalidRange { field: "num_examples", min: 0, max: 0 })
    ));
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(matches!(
        GeneratorConfig::from_toml_str("max_typos = 3"),
        Err(ConfigError::Toml { .. })
    ));
}

#[test]
fn load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "example_depth = 2").unwrap();
    let config = GeneratorConfig::load(file.path()).unwrap();
    assert_eq!(config.example_depth, 2);

    let err = GeneratorConfig::load(file.path().with_extension("missing")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
