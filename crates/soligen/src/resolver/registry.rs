//! Tag registry: the dispatch table from tag name to sampling function.

use std::collections::HashMap;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::LazyLock;

use soligen_vocab::{SyntheticField, TaxonomyCategory, normalize_tag};

use super::context::SampleContext;
use super::error::{RegistryError, ResolveError};
use super::samplers::{sample_taxonomy, synthetic_sampler};
use crate::template::TagGrammar;
use crate::types::Sample;

/// Sampling function signature.
///
/// Takes the spec being resolved and the sampling context, and returns one
/// sampled value with the identity of what produced it.
pub type SampleFn = fn(&TagSpec, &mut SampleContext<'_>) -> Result<Sample, ResolveError>;

/// Where a tag's values come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueSource {
    /// Members of a taxonomy category.
    Taxonomy { category: String },
    /// A field of the synthetic record generator.
    Synthetic { field: String },
}

impl ValueSource {
    /// The taxonomy category, for taxonomy-backed tags.
    pub fn category(&self) -> Option<&str> {
        match self {
            ValueSource::Taxonomy { category } => Some(category),
            ValueSource::Synthetic { .. } => None,
        }
    }
}

/// Immutable description of one recognized placeholder kind.
#[derive(Clone)]
pub struct TagSpec {
    /// Normalized tag name.
    pub name: String,
    /// Value source consulted by the sampler.
    pub source: ValueSource,
    /// Function producing one sample for this tag.
    pub sampler: SampleFn,
}

impl Debug for TagSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("TagSpec")
            .field("name", &self.name)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl TagSpec {
    /// A tag drawing labels from a taxonomy category of the same name.
    pub fn taxonomy(name: &str) -> Self {
        let name = normalize_tag(name);
        Self {
            source: ValueSource::Taxonomy {
                category: name.clone(),
            },
            name,
            sampler: sample_taxonomy,
        }
    }

    /// A tag backed by one of the built-in synthetic record fields.
    pub fn synthetic(field: SyntheticField) -> Self {
        Self {
            name: field.tag_name().to_string(),
            source: ValueSource::Synthetic {
                field: field.tag_name().to_string(),
            },
            sampler: synthetic_sampler(field),
        }
    }

    /// A tag with a caller-supplied sampler.
    pub fn custom(name: &str, source: ValueSource, sampler: SampleFn) -> Self {
        Self {
            name: normalize_tag(name),
            source,
            sampler,
        }
    }
}

/// Registry of tag specs, keyed by normalized name.
///
/// Registration order is preserved for listings.
#[derive(Debug, Default, Clone)]
pub struct TagRegistry {
    specs: HashMap<String, TagSpec>,
    order: Vec<String>,
}

impl TagRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every taxonomy category and synthetic field.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for category in TaxonomyCategory::ALL {
            registry.insert(TagSpec::taxonomy(category.tag_name()));
        }
        for field in SyntheticField::ALL {
            registry.insert(TagSpec::synthetic(field));
        }
        registry
    }

    /// Register a new tag kind.
    ///
    /// Returns an error if a tag with the same normalized name exists.
    pub fn register(&mut self, spec: TagSpec) -> Result<(), RegistryError> {
        if self.specs.contains_key(&spec.name) {
            return Err(RegistryError::DuplicateTag { name: spec.name });
        }
        self.insert(spec);
        Ok(())
    }

    fn insert(&mut self, spec: TagSpec) {
        self.order.push(spec.name.clone());
        self.specs.insert(spec.name.clone(), spec);
    }

    /// Get a spec by normalized name.
    pub fn get(&self, name: &str) -> Option<&TagSpec> {
        self.specs.get(name)
    }

    /// Check whether a tag is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.specs.contains_key(name)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Registered specs in registration order.
    pub fn specs(&self) -> impl Iterator<Item = &TagSpec> {
        self.order.iter().filter_map(|name| self.specs.get(name))
    }

    /// Number of registered tags.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if no tags are registered.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

static BUILTIN: LazyLock<Vocabulary> = LazyLock::new(|| {
    Vocabulary::new(TagRegistry::builtin()).expect("builtin tag vocabulary compiles")
});

/// A tag registry together with the grammar compiled from its names.
///
/// Keeping the two together guarantees that everything the scanner can
/// recognize has a sampler.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    registry: TagRegistry,
    grammar: TagGrammar,
}

impl Vocabulary {
    /// Compile the grammar for a registry.
    pub fn new(registry: TagRegistry) -> Result<Self, RegistryError> {
        let grammar = TagGrammar::new(registry.names())?;
        Ok(Self { registry, grammar })
    }

    /// The built-in vocabulary of taxonomy categories and synthetic fields.
    pub fn builtin() -> &'static Vocabulary {
        &BUILTIN
    }

    pub fn registry(&self) -> &TagRegistry {
        &self.registry
    }

    pub fn grammar(&self) -> &TagGrammar {
        &self.grammar
    }
}
