//! Sampling context carrying the value sources through one resolution.

use rand::RngCore;

use crate::sources::{SyntheticRecordSource, TaxonomyHandle};

/// Default traversal depth when listing taxonomy category members.
pub const DEFAULT_MAX_DEPTH: usize = 16;

/// Everything a sampling function may draw from.
///
/// All randomness goes through the injected random source, so a seeded
/// source makes resolution reproducible.
pub struct SampleContext<'a> {
    /// Read-only class taxonomy.
    taxonomy: &'a dyn TaxonomyHandle,
    /// Synthetic record generator.
    records: &'a mut dyn SyntheticRecordSource,
    /// Random source for member, label, and variant choices.
    rng: &'a mut dyn RngCore,
    /// Depth limit for taxonomy member listing.
    max_depth: usize,
}

impl<'a> SampleContext<'a> {
    /// Create a context with the default depth limit.
    pub fn new(
        taxonomy: &'a dyn TaxonomyHandle,
        records: &'a mut dyn SyntheticRecordSource,
        rng: &'a mut dyn RngCore,
    ) -> Self {
        Self::with_max_depth(taxonomy, records, rng, DEFAULT_MAX_DEPTH)
    }

    /// Create a context with a custom depth limit.
    pub fn with_max_depth(
        taxonomy: &'a dyn TaxonomyHandle,
        records: &'a mut dyn SyntheticRecordSource,
        rng: &'a mut dyn RngCore,
        max_depth: usize,
    ) -> Self {
        Self {
            taxonomy,
            records,
            rng,
            max_depth,
        }
    }

    /// The taxonomy handle.
    pub fn taxonomy(&self) -> &'a dyn TaxonomyHandle {
        self.taxonomy
    }

    /// The synthetic record generator.
    pub fn records(&mut self) -> &mut dyn SyntheticRecordSource {
        &mut *self.records
    }

    /// The random source.
    pub fn rng(&mut self) -> &mut dyn RngCore {
        &mut *self.rng
    }

    /// Depth limit for taxonomy member listing.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}
