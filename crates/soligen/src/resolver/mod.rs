//! Value resolution for scanned occurrences.
//!
//! Every distinct occurrence of a template is resolved independently to one
//! sampled value. Tag names are dispatched through a [`TagRegistry`] of
//! sampling functions, so new tag kinds are added by registration.

mod context;
mod error;
mod registry;
mod samplers;
mod value_map;

pub use context::{DEFAULT_MAX_DEPTH, SampleContext};
pub use error::{RegistryError, ResolveError, compute_suggestions};
pub use registry::{SampleFn, TagRegistry, TagSpec, ValueSource, Vocabulary};
pub use samplers::{sample_synthetic, sample_taxonomy, synthetic_sampler};
pub use value_map::ValueMap;

use tracing::debug;

use crate::template::OccurrenceSet;

/// Resolve every occurrence to a sampled value.
///
/// The result has exactly one entry per occurrence. On the first failure the
/// partially built map is dropped and the error is returned.
///
/// # Errors
///
/// - [`ResolveError::UnknownTag`] if an occurrence names a tag the registry
///   does not know
/// - [`ResolveError::EmptyCategory`] if a taxonomy category has no members
/// - [`ResolveError::EmptyLabelSet`] if a sampled class has no usable label
pub fn resolve(
    occurrences: &OccurrenceSet,
    registry: &TagRegistry,
    ctx: &mut SampleContext<'_>,
) -> Result<ValueMap, ResolveError> {
    let mut values = ValueMap::with_capacity(occurrences.len());
    for occurrence in occurrences {
        let spec = registry
            .get(&occurrence.tag)
            .ok_or_else(|| ResolveError::UnknownTag {
                tag: occurrence.tag.clone(),
                suggestions: compute_suggestions(&occurrence.tag, registry.names()),
            })?;
        let sample = (spec.sampler)(spec, ctx)?;
        values.insert(occurrence.clone(), sample);
    }
    debug!(resolved = values.len(), "resolved occurrences");
    Ok(values)
}
