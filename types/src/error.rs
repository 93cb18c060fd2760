use thiserror::Error;

use crate::{ClassKey, PitchClassSet};

/// Failures surfaced by the classification store and query layer.
///
/// Every query failure is explicit: an unknown key, an out-of-range
/// number and an unclassifiable set are distinct shapes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForteError {
    #[error("no classification record for {0}")]
    NotFound(ClassKey),
    #[error("{what} {value} is outside {min}..={max}")]
    OutOfRange {
        what: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
    #[error("pitch-class set {0} has no classification")]
    NotClassifiable(PitchClassSet),
    #[error("unknown classification key {0}")]
    UnknownKey(ClassKey),
    #[error("pitch-class set {pitch_classes} is claimed by both {kept} and {rejected}")]
    ConstructionCollision {
        pitch_classes: PitchClassSet,
        kept: ClassKey,
        rejected: ClassKey,
    },
    #[error("classification dataset is invalid: {reason}")]
    InvalidDataset { reason: String },
}
