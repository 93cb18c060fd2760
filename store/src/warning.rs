use forte_types::{
    Cardinality, ClassKey, ForteClass, ForteError, ForteIndex, IntervalClassVector, PitchClassSet,
};
use thiserror::Error;

/// A dataset defect found while building the store.
///
/// None of these stop construction: the store keeps the first record it saw
/// and stays usable. [`ClassificationStore::build_strict`] turns the first
/// finding into an error instead.
///
/// [`ClassificationStore::build_strict`]: crate::ClassificationStore::build_strict
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionWarning {
    #[error("{0} has a distinct inversion but no recorded inverted set; using an empty placeholder")]
    MissingInversionDefault(ForteClass),
    #[error("pitch-class set {pitch_classes} maps to both {kept} and {rejected}; keeping {kept}")]
    Collision {
        pitch_classes: PitchClassSet,
        kept: ClassKey,
        rejected: ClassKey,
    },
    #[error("transposition class of {normal_form} maps to both {kept} and {rejected}; keeping {kept}")]
    TranspositionClassCollision {
        normal_form: PitchClassSet,
        kept: ClassKey,
        rejected: ClassKey,
    },
    #[error("{key} holds {pitch_classes}, which has the wrong cardinality")]
    CardinalityMismatch {
        key: ClassKey,
        pitch_classes: PitchClassSet,
    },
    #[error("{class} records interval-class vector {recorded} but its set yields {computed}")]
    IntervalVectorMismatch {
        class: ForteClass,
        recorded: IntervalClassVector,
        computed: IntervalClassVector,
    },
    #[error(
        "{class} invariance vector says distinct inversion = {recorded_distinct}, but its set disagrees"
    )]
    SymmetryMismatch {
        class: ForteClass,
        recorded_distinct: bool,
    },
    #[error("inverted set {pitch_classes} of {class} is not a transposition of the inverted prime form")]
    InvertedFormMismatch {
        class: ForteClass,
        pitch_classes: PitchClassSet,
    },
    #[error("{class} names Z-partner index {partner}, which has no record")]
    DanglingZRelation {
        class: ForteClass,
        partner: ForteIndex,
    },
    #[error("{class} and its Z-partner index {partner} have different interval-class vectors")]
    ZRelationVectorMismatch {
        class: ForteClass,
        partner: ForteIndex,
    },
    #[error("{0} has no dense transposition-class index")]
    MissingTnIndex(ClassKey),
    #[error("{key} has dense index {index}, outside 1..={max}")]
    TnIndexOutOfRange { key: ClassKey, index: u8, max: u8 },
    #[error("dense index {index} is claimed by both {kept} and {rejected}; keeping {kept}")]
    DuplicateTnIndex {
        index: u8,
        kept: ClassKey,
        rejected: ClassKey,
    },
    #[error("names are recorded for {0}, which has no classification record")]
    NamesForUnknownKey(ClassKey),
    #[error("cardinality {cardinality} bound {bound} is {recorded} but the data has {counted}")]
    BoundMismatch {
        cardinality: Cardinality,
        bound: &'static str,
        recorded: u8,
        counted: usize,
    },
    #[error(
        "cardinality {cardinality} allows more classes with inversion equivalence ({with}) than without ({without})"
    )]
    InvertedBounds {
        cardinality: Cardinality,
        with: u8,
        without: u8,
    },
    #[error("row {forte_index} of cardinality {cardinality} is beyond the bound {max}")]
    IndexOverflow {
        cardinality: Cardinality,
        forte_index: usize,
        max: u8,
    },
}

impl ConstructionWarning {
    /// The error strict construction reports for this finding.
    #[must_use]
    pub fn to_error(&self) -> ForteError {
        match *self {
            ConstructionWarning::Collision {
                pitch_classes,
                kept,
                rejected,
            } => ForteError::ConstructionCollision {
                pitch_classes,
                kept,
                rejected,
            },
            _ => ForteError::InvalidDataset {
                reason: self.to_string(),
            },
        }
    }
}

/// Collects findings during a build, logging each one as it arrives.
#[derive(Debug, Default)]
pub(crate) struct Findings(Vec<ConstructionWarning>);

impl Findings {
    pub(crate) fn push(&mut self, warning: ConstructionWarning) {
        tracing::warn!(%warning, "Classification dataset finding");
        self.0.push(warning);
    }

    pub(crate) fn into_inner(self) -> Vec<ConstructionWarning> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use forte_types::{Cardinality, ClassKey, ForteClass, ForteError, ForteIndex, InversionSign, PitchClassSet};

    use super::ConstructionWarning;

    fn class(c: u8, f: u8) -> ForteClass {
        ForteClass::new(Cardinality::new(c).unwrap(), ForteIndex::new(f).unwrap())
    }

    #[test]
    fn collision_maps_to_construction_collision() {
        let kept = ClassKey::from_parts(3, 11, InversionSign::Positive).unwrap();
        let rejected = ClassKey::from_parts(3, 12, InversionSign::Zero).unwrap();
        let warning = ConstructionWarning::Collision {
            pitch_classes: PitchClassSet::literal(&[0, 3, 7]),
            kept,
            rejected,
        };
        assert_eq!(
            warning.to_error(),
            ForteError::ConstructionCollision {
                pitch_classes: PitchClassSet::literal(&[0, 3, 7]),
                kept,
                rejected,
            }
        );
    }

    #[test]
    fn other_findings_map_to_invalid_dataset() {
        let warning = ConstructionWarning::MissingInversionDefault(class(3, 11));
        let ForteError::InvalidDataset { reason } = warning.to_error() else {
            panic!("expected InvalidDataset");
        };
        assert!(reason.starts_with("3-11 has a distinct inversion"));
    }
}
