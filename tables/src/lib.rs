//! Raw classification tables.
//!
//! [`RawDataset`] is the seam between the classification store and whoever
//! supplies Forte's tables. The store treats whatever comes through it as
//! already vetted input, so nothing here validates; the store does that at
//! construction.
//!
//! - [`BundledDataset`]: the standard tables compiled into the binary.
//! - [`InMemoryDataset`]: an owned copy that hosts can assemble or adjust at
//!   runtime.

mod bundled;
mod data;
mod memory;

pub use bundled::BundledDataset;
pub use memory::InMemoryDataset;

use forte_types::{
    Cardinality, ClassKey, ForteClass, ForteIndex, IntervalClassVector, InvarianceVector,
    PitchClassSet,
};

/// One row of Forte's table, with named fields in place of a positional tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEntry {
    pub pitch_classes: PitchClassSet,
    pub interval_class_vector: IntervalClassVector,
    pub invariance_vector: InvarianceVector,
    pub z_relation: Option<ForteIndex>,
}

impl RawEntry {
    /// Const constructor; `z_relation == 0` means the class has no Z-partner.
    #[must_use]
    pub const fn new(
        pitch_classes: &[u8],
        interval_class_vector: [u8; 6],
        invariance_vector: [u8; 8],
        z_relation: u8,
    ) -> Self {
        Self {
            pitch_classes: PitchClassSet::literal(pitch_classes),
            interval_class_vector: IntervalClassVector::new(interval_class_vector),
            invariance_vector: InvarianceVector::new(invariance_vector),
            z_relation: ForteIndex::from_raw(z_relation),
        }
    }
}

/// The logical tables a classification store is built from.
pub trait RawDataset {
    /// Rows for one cardinality, indexed by Forte index. Slot 0 is unused
    /// and absent rows are `None`.
    fn entries(&self, cardinality: Cardinality) -> &[Option<RawEntry>];

    /// The recorded representative of the inverted member of `class`.
    /// Present only for classes with a distinct inversion.
    fn inversion_default(&self, class: ForteClass) -> Option<PitchClassSet>;

    /// Dense position of `key` among the transposition classes of its
    /// cardinality.
    fn tn_index(&self, key: ClassKey) -> Option<u8>;

    /// Conventional names for `key`, in their recorded order.
    fn names(&self, key: ClassKey) -> Vec<&str>;

    /// Every key that carries a name record.
    fn named_keys(&self) -> Vec<ClassKey>;

    fn max_index_without_inversion_equivalence(&self, cardinality: Cardinality) -> u8;

    fn max_index_with_inversion_equivalence(&self, cardinality: Cardinality) -> u8;
}
