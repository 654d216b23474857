//! Tag grammar compiled into one regular expression.

use std::collections::BTreeSet;

use regex::{CaptureMatches, Captures, Regex};
use soligen_vocab::normalize_tag;

use super::error::GrammarError;
use crate::types::{Occurrence, OccurrenceKey};

/// Named group holding the tag name.
const TAG_GROUP: &str = "tag";
/// Named group holding the optional occurrence key.
const KEY_GROUP: &str = "key";
/// Accepted key syntax: a run of digits or a single lowercase letter.
const KEY_PATTERN: &str = "[0-9]+|[a-z]";

/// The compiled placeholder grammar for a fixed set of recognized tags.
///
/// Matches `<|tag|>` and `<|tag:key|>` where `tag` is one of the recognized
/// names and `key` is `[0-9]+` or a single `[a-z]`. Unknown names never match.
///
/// # Example
///
/// ```
/// use soligen::template::TagGrammar;
///
/// let grammar = TagGrammar::new(["industry", "name"]).unwrap();
/// assert!(grammar.is_match("In the <|industry:1|> sector"));
/// assert!(!grammar.is_match("In the <|sector|> sector"));
/// ```
#[derive(Debug, Clone)]
pub struct TagGrammar {
    pattern: Regex,
    names: BTreeSet<String>,
}

impl TagGrammar {
    /// Compile a grammar from raw tag names, normalizing each one.
    pub fn new<I, S>(names: I) -> Result<Self, GrammarError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized = BTreeSet::new();
        for name in names {
            let tag = normalize_tag(name.as_ref());
            if tag.is_empty() {
                return Err(GrammarError::InvalidTagName {
                    name: name.as_ref().to_string(),
                });
            }
            normalized.insert(tag);
        }
        if normalized.is_empty() {
            return Err(GrammarError::EmptyVocabulary);
        }

        let alternatives = normalized
            .iter()
            .map(|name| regex::escape(name))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(
            r"<\|(?P<{TAG_GROUP}>{alternatives})(?::(?P<{KEY_GROUP}>{KEY_PATTERN}))?\|>"
        ))?;

        Ok(Self {
            pattern,
            names: normalized,
        })
    }

    /// The compiled matching rule.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Recognized tag names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Check whether a normalized tag name is recognized.
    pub fn is_recognized(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Check whether a key is valid placeholder key syntax.
    pub fn is_valid_key(key: &str) -> bool {
        let bytes = key.as_bytes();
        match bytes {
            [] => false,
            [b] if b.is_ascii_lowercase() => true,
            _ => bytes.iter().all(u8::is_ascii_digit),
        }
    }

    /// True if the text contains at least one recognized placeholder.
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Split a template into literal and placeholder segments, left to right.
    ///
    /// Segments cover the whole template without gaps; concatenating every
    /// segment's raw text reproduces the input.
    pub fn segments<'g, 't>(&'g self, template: &'t str) -> Segments<'g, 't> {
        Segments {
            template,
            matches: self.pattern.captures_iter(template),
            cursor: 0,
            pending: None,
        }
    }

    /// Build the occurrence described by a match of this grammar.
    fn occurrence(captures: &Captures<'_>) -> Occurrence {
        let tag = captures
            .name(TAG_GROUP)
            .map_or("", |m| m.as_str())
            .to_string();
        let key = captures
            .name(KEY_GROUP)
            .map(|m| OccurrenceKey::new(m.as_str()));
        Occurrence { tag, key }
    }
}

/// A piece of a template.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment<'t> {
    /// Text copied to the output verbatim.
    Literal(&'t str),
    /// A recognized placeholder.
    Placeholder {
        occurrence: Occurrence,
        /// The placeholder exactly as written in the template.
        raw: &'t str,
    },
}

impl Segment<'_> {
    /// The template text this segment covers.
    pub fn raw(&self) -> &str {
        match self {
            Segment::Literal(text) => text,
            Segment::Placeholder { raw, .. } => raw,
        }
    }
}

/// Iterator over the segments of a template. See [`TagGrammar::segments`].
pub struct Segments<'g, 't> {
    template: &'t str,
    matches: CaptureMatches<'g, 't>,
    cursor: usize,
    pending: Option<Segment<'t>>,
}

impl<'t> Iterator for Segments<'_, 't> {
    type Item = Segment<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(segment) = self.pending.take() {
            return Some(segment);
        }

        let Some(captures) = self.matches.next() else {
            if self.cursor < self.template.len() {
                let rest = &self.template[self.cursor..];
                self.cursor = self.template.len();
                return Some(Segment::Literal(rest));
            }
            return None;
        };

        let whole = captures.get(0)?;
        let placeholder = Segment::Placeholder {
            occurrence: TagGrammar::occurrence(&captures),
            raw: whole.as_str(),
        };
        let literal_start = self.cursor;
        self.cursor = whole.end();

        if whole.start() > literal_start {
            self.pending = Some(placeholder);
            Some(Segment::Literal(&self.template[literal_start..whole.start()]))
        } else {
            Some(placeholder)
        }
    }
}
