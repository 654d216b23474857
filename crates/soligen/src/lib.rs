pub mod config;
pub mod formatter;
pub mod lint;
pub mod llm;
pub mod render;
pub mod resolver;
pub mod sources;
pub mod template;
pub mod types;

pub use config::{ConfigError, GeneratorConfig};
pub use formatter::TemplateFormatter;
pub use lint::{TemplateWarning, lint_template};
pub use resolver::{
    DEFAULT_MAX_DEPTH, RegistryError, ResolveError, TagRegistry, TagSpec, Vocabulary,
    compute_suggestions,
};
pub use sources::{ClassGraph, ClassRecord, FakeRecords, SyntheticRecordSource, TaxonomyHandle};
pub use template::{OccurrenceSet, TagGrammar, scan};
pub use types::{AnnotatedText, Occurrence, OccurrenceKey, Sample, Span, Value};
