//! Substitution of resolved values into templates.
//!
//! Both entry points walk the template once, left to right, copying literal
//! text and replacing each recognized placeholder with the value resolved for
//! its occurrence. Rendering never fails: a placeholder whose occurrence has
//! no resolved value is copied through verbatim.

use tracing::debug;

use crate::resolver::ValueMap;
use crate::template::{Segment, TagGrammar};
use crate::types::{AnnotatedText, Span};

/// Replace every recognized placeholder with its resolved value.
///
/// Replacement is keyed on the exact placeholder, so `<|name:1|>` and
/// `<|name:2|>` are substituted independently. Text the grammar does not
/// recognize passes through unchanged.
pub fn substitute(template: &str, grammar: &TagGrammar, values: &ValueMap) -> String {
    let mut output = String::with_capacity(template.len());
    for segment in grammar.segments(template) {
        match segment {
            Segment::Literal(text) => output.push_str(text),
            Segment::Placeholder { occurrence, raw } => match values.get(&occurrence) {
                Some(sample) => output.push_str(&sample.value.to_string()),
                None => output.push_str(raw),
            },
        }
    }
    output
}

/// Substitute values and record a span for every replaced placeholder.
///
/// Span offsets are character offsets into the returned text. Spans are
/// emitted in output order and never overlap; each one carries the tag name
/// and the identity of the sampled class or field.
pub fn annotate(template: &str, grammar: &TagGrammar, values: &ValueMap) -> AnnotatedText {
    let mut text = String::with_capacity(template.len());
    let mut spans = Vec::new();
    // Output cursor in characters; the template cursor lives in `segments`.
    let mut cursor = 0;

    for segment in grammar.segments(template) {
        match segment {
            Segment::Literal(literal) => {
                text.push_str(literal);
                cursor += literal.chars().count();
            }
            Segment::Placeholder { occurrence, raw } => {
                let Some(sample) = values.get(&occurrence) else {
                    text.push_str(raw);
                    cursor += raw.chars().count();
                    continue;
                };
                let rendered = sample.value.to_string();
                let start = cursor;
                cursor += rendered.chars().count();
                text.push_str(&rendered);
                spans.push(Span {
                    start,
                    end: cursor,
                    tag: occurrence.tag,
                    class_identity: sample.identity.clone(),
                    text: rendered,
                });
            }
        }
    }

    debug!(spans = spans.len(), "annotated template");
    AnnotatedText { text, spans }
}
