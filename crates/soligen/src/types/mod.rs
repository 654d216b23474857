mod occurrence;
mod span;
mod value;

pub use occurrence::{Occurrence, OccurrenceKey};
pub use span::{AnnotatedText, Span};
pub use value::{Sample, Value};
