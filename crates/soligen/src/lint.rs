//! Static checks for templates.
//!
//! Placeholder-like text that the grammar does not recognize is left in the
//! output verbatim. That is deliberate for formatting, but it is usually a
//! mistake in a hand-written template, so the linter reports it.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use soligen_vocab::normalize_tag;

use crate::resolver::{Vocabulary, compute_suggestions};
use crate::template::TagGrammar;

/// Anything shaped like a placeholder, recognized or not.
static CANDIDATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<\|([^|<>]*)\|>").expect("candidate pattern compiles"));

/// A problem found in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateWarning {
    /// The tag name is not recognized.
    UnknownTag {
        name: String,
        range: Range<usize>,
        suggestions: Vec<String>,
    },

    /// The tag name is recognized only after normalization
    /// (e.g. `<|Area of Law|>` for `<|area_of_law|>`).
    UnnormalizedTag {
        name: String,
        normalized: String,
        key: Option<String>,
        range: Range<usize>,
    },

    /// The tag is recognized but the key is not a digit run or a single
    /// lowercase letter.
    InvalidKey {
        tag: String,
        key: String,
        range: Range<usize>,
    },
}

impl TemplateWarning {
    /// Byte range of the offending placeholder in the template.
    pub fn range(&self) -> Range<usize> {
        match self {
            TemplateWarning::UnknownTag { range, .. }
            | TemplateWarning::UnnormalizedTag { range, .. }
            | TemplateWarning::InvalidKey { range, .. } => range.clone(),
        }
    }

    /// Suggested fix, if there is one.
    pub fn help(&self) -> Option<String> {
        match self {
            TemplateWarning::UnknownTag { suggestions, .. } if !suggestions.is_empty() => {
                Some(format!("did you mean: {}?", suggestions.join(", ")))
            }
            TemplateWarning::UnknownTag { .. } => None,
            TemplateWarning::UnnormalizedTag {
                normalized, key, ..
            } => Some(match key {
                Some(key) => format!("write it as <|{normalized}:{key}|>"),
                None => format!("write it as <|{normalized}|>"),
            }),
            TemplateWarning::InvalidKey { tag, .. } => Some(format!(
                "keys are digits or one lowercase letter, e.g. <|{tag}:1|> or <|{tag}:a|>"
            )),
        }
    }
}

impl Display for TemplateWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            TemplateWarning::UnknownTag { name, .. } => {
                write!(f, "unknown tag '{name}' will be left as literal text")
            }
            TemplateWarning::UnnormalizedTag {
                name, normalized, ..
            } => write!(f, "tag '{name}' is not normalized (expected '{normalized}')"),
            TemplateWarning::InvalidKey { tag, key, .. } => {
                write!(f, "invalid key '{key}' for tag '{tag}'")
            }
        }
    }
}

/// Report placeholder-like text the vocabulary's grammar will not substitute.
///
/// Warnings are returned in template order.
pub fn lint_template(template: &str, vocabulary: &Vocabulary) -> Vec<TemplateWarning> {
    let grammar = vocabulary.grammar();
    let mut warnings = Vec::new();

    for captures in CANDIDATE.captures_iter(template) {
        let Some(whole) = captures.get(0) else {
            continue;
        };
        if grammar.pattern().find(whole.as_str()).is_some_and(|m| m.len() == whole.len()) {
            continue;
        }

        let body = captures.get(1).map_or("", |m| m.as_str());
        let (name, key) = match body.split_once(':') {
            Some((name, key)) => (name, Some(key)),
            None => (body, None),
        };
        let range = whole.range();

        if grammar.is_recognized(name) {
            if let Some(key) = key.filter(|key| !TagGrammar::is_valid_key(key)) {
                warnings.push(TemplateWarning::InvalidKey {
                    tag: name.to_string(),
                    key: key.to_string(),
                    range,
                });
            }
            continue;
        }

        let normalized = normalize_tag(name);
        if grammar.is_recognized(&normalized) {
            warnings.push(TemplateWarning::UnnormalizedTag {
                name: name.to_string(),
                normalized,
                key: key.map(str::to_string),
                range,
            });
        } else {
            warnings.push(TemplateWarning::UnknownTag {
                name: name.to_string(),
                suggestions: compute_suggestions(&normalized, vocabulary.registry().names()),
                range,
            });
        }
    }

    warnings
}
