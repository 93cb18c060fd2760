//! Query API for Forte classification.
//!
//! [`Classifier`] answers every question a host asks of the catalogue:
//! classify a set, read a record's vectors, resolve a Z-partner, list names.
//! The free functions here run against the shared store over the bundled
//! dataset.

mod classification;
mod classifier;

pub use classification::{Classification, Operation};
pub use classifier::Classifier;

use forte_types::{EquivalenceMode, ForteError, PitchClassSet};

/// Classify against the bundled dataset.
pub fn classify(
    pitch_classes: PitchClassSet,
    mode: EquivalenceMode,
) -> Result<Classification, ForteError> {
    Classifier::global().classify(pitch_classes, mode)
}
