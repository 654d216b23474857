//! Error types for value resolution.

use strsim::levenshtein;
use thiserror::Error;

use crate::template::GrammarError;

/// An error that occurred while resolving an occurrence.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The occurrence names a tag outside the configured registry.
    #[error("unknown tag '{tag}'{}", format_suggestions(suggestions))]
    UnknownTag {
        tag: String,
        suggestions: Vec<String>,
    },

    /// A taxonomy category has no members at the requested depth.
    #[error("taxonomy category '{category}' has no members within depth {max_depth}")]
    EmptyCategory { category: String, max_depth: usize },

    /// A sampled taxonomy class has no label to substitute.
    #[error("taxonomy class '{iri}' sampled for tag '{tag}' has no usable label")]
    EmptyLabelSet { tag: String, iri: String },
}

/// An error that occurred while building a tag registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A tag with the same normalized name is already registered.
    #[error("tag '{name}' is already registered")]
    DuplicateTag { name: String },

    /// The registered names could not be compiled into a grammar.
    #[error(transparent)]
    Grammar(#[from] GrammarError),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Find the closest names to `name` by edit distance.
///
/// Returns up to three names, closest first. Names up to three characters
/// long tolerate one edit; longer names tolerate two.
pub fn compute_suggestions<'a>(name: &str, available: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let max_distance = if name.chars().count() <= 3 { 1 } else { 2 };
    let mut scored: Vec<(usize, &str)> = available
        .into_iter()
        .map(|candidate| (levenshtein(name, candidate), candidate))
        .filter(|(distance, candidate)| *distance <= max_distance && *candidate != name)
        .collect();
    scored.sort();
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
