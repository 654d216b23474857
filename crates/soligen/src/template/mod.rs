//! Placeholder grammar and template scanning.
//!
//! Templates are plain text with typed placeholders of the form `<|tag|>` or
//! `<|tag:key|>`. This module compiles the recognized tag names into a single
//! matching rule, splits templates into literal and placeholder segments, and
//! collects the distinct occurrences a template references.

pub mod error;
mod grammar;
mod scanner;

pub use error::GrammarError;
pub use grammar::{Segment, Segments, TagGrammar};
pub use scanner::{OccurrenceSet, scan};
