//! Generator configuration.
//!
//! Loaded from TOML; every field has a default, so an empty file is valid.
//!
//! ```toml
//! min_types = 1
//! max_types = 3
//! min_text_length = 1
//! max_text_length = 5
//! example_depth = 3
//! num_examples = 5
//! max_depth = 16
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::resolver::DEFAULT_MAX_DEPTH;

/// Errors that occur while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error when reading the configuration.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML of the expected shape.
    #[error("invalid configuration: {source}")]
    Toml {
        #[from]
        source: toml::de::Error,
    },

    /// A `min_*`/`max_*` pair is inverted or starts at zero.
    #[error("invalid range for {field}: {min}..={max}")]
    InvalidRange {
        field: &'static str,
        min: usize,
        max: usize,
    },
}

/// Knobs for prompt construction and taxonomy sampling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Fewest background tags sampled per prompt.
    pub min_types: usize,
    /// Most background tags sampled per prompt.
    pub max_types: usize,
    /// Shortest requested text, in units.
    pub min_text_length: usize,
    /// Longest requested text, in units.
    pub max_text_length: usize,
    /// Taxonomy depth for document types and tag examples.
    pub example_depth: usize,
    /// Tag examples shown per category in annotated prompts.
    pub num_examples: usize,
    /// Taxonomy depth when resolving placeholders.
    pub max_depth: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_types: 1,
            max_types: 3,
            min_text_length: 1,
            max_text_length: 5,
            example_depth: 3,
            num_examples: 5,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl GeneratorConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let config: GeneratorConfig = toml::from_str(toml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let toml = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&toml)
    }

    /// Check that every range is non-empty and starts above zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("types", self.min_types, self.max_types)?;
        check_range("text_length", self.min_text_length, self.max_text_length)?;
        check_range("example_depth", self.example_depth, self.example_depth)?;
        check_range("max_depth", self.max_depth, self.max_depth)?;
        check_range("num_examples", self.num_examples, self.num_examples)?;
        Ok(())
    }
}

fn check_range(field: &'static str, min: usize, max: usize) -> Result<(), ConfigError> {
    if min == 0 || min > max {
        return Err(ConfigError::InvalidRange { field, min, max });
    }
    Ok(())
}
