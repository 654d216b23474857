//! Collects the distinct occurrences referenced by a template.

use std::collections::HashSet;
use std::slice::Iter;

use tracing::debug;

use super::grammar::{Segment, TagGrammar};
use crate::types::Occurrence;

/// The distinct occurrences of a template, in order of first appearance.
///
/// Repeated placeholders collapse into one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccurrenceSet {
    ordered: Vec<Occurrence>,
    seen: HashSet<Occurrence>,
}

impl OccurrenceSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an occurrence. Returns false if it was already present.
    pub fn insert(&mut self, occurrence: Occurrence) -> bool {
        if self.seen.contains(&occurrence) {
            return false;
        }
        self.seen.insert(occurrence.clone());
        self.ordered.push(occurrence);
        true
    }

    /// Check whether the set holds an occurrence.
    pub fn contains(&self, occurrence: &Occurrence) -> bool {
        self.seen.contains(occurrence)
    }

    /// Number of distinct occurrences.
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// True if the template referenced no recognized tags.
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Iterate in order of first appearance.
    pub fn iter(&self) -> Iter<'_, Occurrence> {
        self.ordered.iter()
    }
}

impl<'a> IntoIterator for &'a OccurrenceSet {
    type Item = &'a Occurrence;
    type IntoIter = Iter<'a, Occurrence>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Occurrence> for OccurrenceSet {
    fn from_iter<T: IntoIterator<Item = Occurrence>>(iter: T) -> Self {
        let mut set = OccurrenceSet::new();
        for occurrence in iter {
            set.insert(occurrence);
        }
        set
    }
}

/// Scan a template for recognized placeholders.
///
/// Placeholder-like text with an unknown tag name or malformed key is not an
/// error; it is simply not part of the result.
pub fn scan(template: &str, grammar: &TagGrammar) -> OccurrenceSet {
    let occurrences: OccurrenceSet = grammar
        .segments(template)
        .filter_map(|segment| match segment {
            Segment::Placeholder { occurrence, .. } => Some(occurrence),
            Segment::Literal(_) => None,
        })
        .collect();
    debug!(
        occurrences = occurrences.len(),
        template_len = template.len(),
        "scanned template"
    );
    occurrences
}
