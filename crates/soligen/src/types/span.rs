use serde::{Deserialize, Serialize};

/// One substituted region of an annotated output.
///
/// `start` and `end` are half-open offsets counted in characters (Unicode
/// scalar values) of the final output text, not the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    /// Tag name of the placeholder that produced this span.
    pub tag: String,
    /// Taxonomy class IRI or synthetic field identity that was sampled.
    pub class_identity: String,
    /// The substituted text, equal to `text[start..end]` in characters.
    pub text: String,
}

impl Span {
    /// Number of characters covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True if the span covers no characters (an empty resolved value).
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Extract the characters this span covers from `text`.
    pub fn slice<'t>(&self, text: &'t str) -> &'t str {
        let byte_at = |char_offset: usize| {
            text.char_indices()
                .nth(char_offset)
                .map_or(text.len(), |(i, _)| i)
        };
        &text[byte_at(self.start)..byte_at(self.end)]
    }
}

/// Substituted text plus the spans of every placeholder, left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedText {
    pub text: String,
    pub spans: Vec<Span>,
}
