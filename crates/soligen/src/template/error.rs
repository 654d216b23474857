//! Grammar construction errors.

use thiserror::Error;

/// An error that occurred while compiling a tag grammar.
#[derive(Debug, Error)]
pub enum GrammarError {
    /// No tag names were supplied.
    #[error("tag vocabulary is empty")]
    EmptyVocabulary,

    /// A tag name normalized to the empty string.
    #[error("tag name '{name}' is empty after normalization")]
    InvalidTagName { name: String },

    /// The compiled pattern was rejected by the regex engine.
    #[error("failed to compile tag pattern: {source}")]
    Pattern {
        #[from]
        source: regex::Error,
    },
}
