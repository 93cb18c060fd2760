//! The Forte classification store.
//!
//! [`ClassificationStore`] owns every classification record, addressed by
//! [`ClassKey`](forte_types::ClassKey) and reachable from a pitch-class
//! bitmap through dense reverse indexes. [`store()`] is the process-wide
//! instance over the bundled dataset.

mod table;
mod validate;
mod warning;

pub use table::ClassificationStore;
pub use warning::ConstructionWarning;

use std::sync::OnceLock;

use forte_tables::BundledDataset;

/// Built on first use. Concurrent first callers block until the one
/// building thread finishes, then all share the result.
static STORE: OnceLock<ClassificationStore> = OnceLock::new();

/// The shared store over the bundled dataset.
#[must_use]
pub fn store() -> &'static ClassificationStore {
    STORE.get_or_init(|| {
        tracing::debug!("Building classification store from bundled dataset");
        ClassificationStore::build(&BundledDataset)
    })
}
