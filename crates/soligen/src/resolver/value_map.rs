//! Resolved values keyed by occurrence.

use std::collections::HashMap;
use std::slice::Iter;

use crate::types::{Occurrence, Sample};

/// Mapping from occurrence to its sampled value for one formatting call.
///
/// Iteration follows insertion order.
#[derive(Debug, Clone, Default)]
pub struct ValueMap {
    entries: Vec<(Occurrence, Sample)>,
    index: HashMap<Occurrence, usize>,
}

impl ValueMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty map with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Insert or replace the sample for an occurrence.
    pub fn insert(&mut self, occurrence: Occurrence, sample: Sample) {
        if let Some(&position) = self.index.get(&occurrence) {
            self.entries[position].1 = sample;
        } else {
            self.index.insert(occurrence.clone(), self.entries.len());
            self.entries.push((occurrence, sample));
        }
    }

    /// Look up the sample for an occurrence.
    pub fn get(&self, occurrence: &Occurrence) -> Option<&Sample> {
        self.index
            .get(occurrence)
            .map(|&position| &self.entries[position].1)
    }

    /// Number of resolved occurrences.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing was resolved.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(occurrence, sample)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_, (Occurrence, Sample)> {
        self.entries.iter()
    }
}
