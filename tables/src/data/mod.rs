//! The bundled tables, stored as compile-time data.

mod forte;
mod inversion;
mod names;
mod tn_index;

use forte_types::CARDINALITIES;

use crate::RawEntry;

pub(crate) use forte::FORTE;
pub(crate) use inversion::INVERSION_DEFAULTS;
pub(crate) use names::NAMES;
pub(crate) use tn_index::TN_INDEXES;

/// Upper bound on the Forte index per cardinality when a set and its
/// inversion count as separate classes.
pub(crate) const MAX_INDEX_WITHOUT_INVERSION_EQUIVALENCE: [u8; CARDINALITIES] =
    [1, 1, 6, 19, 43, 66, 80, 66, 43, 19, 6, 1, 1];

/// Upper bound on the Forte index per cardinality under TnI equivalence.
pub(crate) const MAX_INDEX_WITH_INVERSION_EQUIVALENCE: [u8; CARDINALITIES] =
    [1, 1, 6, 12, 29, 38, 50, 38, 29, 12, 6, 1, 1];

const fn row(
    pitch_classes: &[u8],
    interval_class_vector: [u8; 6],
    invariance_vector: [u8; 8],
    z_relation: u8,
) -> Option<RawEntry> {
    Some(RawEntry::new(
        pitch_classes,
        interval_class_vector,
        invariance_vector,
        z_relation,
    ))
}
