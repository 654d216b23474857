//! Value sources consulted by the resolver.
//!
//! Both sources are external collaborators of the template engine: a
//! read-only hierarchical class taxonomy and a generator of realistic
//! synthetic record fields. The engine only depends on the traits; the
//! concrete implementations here are the ones the CLI wires up.

mod records;
mod taxonomy;

pub use records::{FakeRecords, SyntheticRecordSource};
pub use taxonomy::{ClassGraph, ClassRecord, TaxonomyError, TaxonomyHandle};
