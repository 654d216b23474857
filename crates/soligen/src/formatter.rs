//! High-level template formatting.
//!
//! [`TemplateFormatter`] wires the scanner, resolver, and renderer together
//! around one set of value sources.

use bon::Builder;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::render::{annotate, substitute};
use crate::resolver::{
    DEFAULT_MAX_DEPTH, ResolveError, SampleContext, ValueMap, Vocabulary, compute_suggestions,
    resolve,
};
use crate::sources::{FakeRecords, SyntheticRecordSource, TaxonomyHandle};
use crate::template::{OccurrenceSet, scan};
use crate::types::{AnnotatedText, Sample};

/// Formats templates by sampling a value for each placeholder occurrence.
///
/// Each call is self-contained: the occurrence set and value map are built
/// fresh and dropped afterwards, so a failed call leaves nothing behind that
/// could affect the next one. The taxonomy is only ever read.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use soligen::TemplateFormatter;
/// use soligen::sources::ClassGraph;
///
/// let graph = ClassGraph::from_json_str(r#"{
///     "categories": {"industry": "ex:Industry"},
///     "classes": [
///         {"iri": "ex:Industry", "label": "Industry"},
///         {"iri": "ex:Legal", "label": "Legal Services", "sub_class_of": ["ex:Industry"]}
///     ]
/// }"#).unwrap();
///
/// let mut formatter = TemplateFormatter::builder()
///     .taxonomy(&graph)
///     .rng(Box::new(StdRng::seed_from_u64(1)))
///     .build();
///
/// let text = formatter.format("The company operates in the <|industry|> industry.").unwrap();
/// assert_eq!(text, "The company operates in the Legal Services industry.");
/// ```
#[derive(Builder)]
pub struct TemplateFormatter<'a> {
    /// Read-only class taxonomy shared with other callers.
    taxonomy: &'a dyn TaxonomyHandle,

    /// Synthetic record generator.
    #[builder(default = Box::new(FakeRecords::new(StdRng::from_entropy())))]
    records: Box<dyn SyntheticRecordSource + 'a>,

    /// Random source for taxonomy and variant choices.
    #[builder(default = Box::new(StdRng::from_entropy()))]
    rng: Box<dyn RngCore + 'a>,

    /// Recognized tags and their grammar.
    #[builder(default = Vocabulary::builtin())]
    vocabulary: &'a Vocabulary,

    /// Depth limit when listing taxonomy category members.
    #[builder(default = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

impl<'a> TemplateFormatter<'a> {
    /// Format a template into plain text.
    pub fn format(&mut self, template: &str) -> Result<String, ResolveError> {
        let values = self.resolve(template)?;
        Ok(substitute(template, self.vocabulary.grammar(), &values))
    }

    /// Format a template into text plus the spans of every substitution.
    pub fn format_spans(&mut self, template: &str) -> Result<AnnotatedText, ResolveError> {
        let values = self.resolve(template)?;
        Ok(annotate(template, self.vocabulary.grammar(), &values))
    }

    /// Scan a template and resolve its occurrences without rendering.
    pub fn resolve(&mut self, template: &str) -> Result<ValueMap, ResolveError> {
        let occurrences = scan(template, self.vocabulary.grammar());
        self.resolve_occurrences(&occurrences, self.max_depth)
    }

    /// Draw one sample for a tag, listing taxonomy members down to
    /// `max_depth`.
    pub fn sample_tag(&mut self, tag: &str, max_depth: usize) -> Result<Sample, ResolveError> {
        let registry = self.vocabulary.registry();
        let spec = registry.get(tag).ok_or_else(|| ResolveError::UnknownTag {
            tag: tag.to_string(),
            suggestions: compute_suggestions(tag, registry.names()),
        })?;
        let mut ctx = SampleContext::with_max_depth(
            self.taxonomy,
            self.records.as_mut(),
            self.rng.as_mut(),
            max_depth,
        );
        (spec.sampler)(spec, &mut ctx)
    }

    fn resolve_occurrences(
        &mut self,
        occurrences: &OccurrenceSet,
        max_depth: usize,
    ) -> Result<ValueMap, ResolveError> {
        let mut ctx = SampleContext::with_max_depth(
            self.taxonomy,
            self.records.as_mut(),
            self.rng.as_mut(),
            max_depth,
        );
        resolve(occurrences, self.vocabulary.registry(), &mut ctx)
    }

    /// The vocabulary in use.
    pub fn vocabulary(&self) -> &'a Vocabulary {
        self.vocabulary
    }

    /// The taxonomy handle.
    pub fn taxonomy(&self) -> &'a dyn TaxonomyHandle {
        self.taxonomy
    }

    /// The random source, for callers that make their own choices alongside
    /// formatting (prompt construction, for example).
    pub fn rng(&mut self) -> &mut dyn RngCore {
        self.rng.as_mut()
    }

    /// Depth limit when listing taxonomy category members.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}
