//! The per-class classification record.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{ForteIndex, PitchClassSet};

/// Count of unordered pairs per interval class 1..=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntervalClassVector([u8; 6]);

impl IntervalClassVector {
    #[must_use]
    pub const fn new(counts: [u8; 6]) -> Self {
        Self(counts)
    }

    #[must_use]
    pub const fn as_array(&self) -> &[u8; 6] {
        &self.0
    }

    /// Total number of pairs, `n * (n - 1) / 2` for a set of `n` classes.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.iter().map(|&count| u32::from(count)).sum()
    }
}

impl fmt::Display for IntervalClassVector {
    /// `<001110>`; counts of ten or more switch to a comma-separated form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = if self.0.iter().all(|&count| count < 10) {
            ""
        } else {
            ","
        };
        let body: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "<{}>", body.join(separator))
    }
}

/// Morris invariance vector: how many pitch classes each member of the
/// T/I operation group holds fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvarianceVector([u8; 8]);

impl InvarianceVector {
    #[must_use]
    pub const fn new(counts: [u8; 8]) -> Self {
        Self(counts)
    }

    #[must_use]
    pub const fn as_array(&self) -> &[u8; 8] {
        &self.0
    }

    /// A zero second slot means no inversion maps the set onto itself, so
    /// the class splits into two directional members.
    #[must_use]
    pub const fn has_distinct_inversion(&self) -> bool {
        self.0[1] == 0
    }
}

impl fmt::Display for InvarianceVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", body.join(","))
    }
}

/// One classification record.
///
/// For a `Negative` key, `pitch_classes` holds the inverted set; the two
/// vectors are shared with the `Positive` member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TniStructure {
    pitch_classes: PitchClassSet,
    interval_class_vector: IntervalClassVector,
    invariance_vector: InvarianceVector,
    z_relation: Option<ForteIndex>,
}

impl TniStructure {
    #[must_use]
    pub const fn new(
        pitch_classes: PitchClassSet,
        interval_class_vector: IntervalClassVector,
        invariance_vector: InvarianceVector,
        z_relation: Option<ForteIndex>,
    ) -> Self {
        Self {
            pitch_classes,
            interval_class_vector,
            invariance_vector,
            z_relation,
        }
    }

    /// Same vectors and Z-partner, different representative set.
    #[must_use]
    pub const fn with_pitch_classes(self, pitch_classes: PitchClassSet) -> Self {
        Self {
            pitch_classes,
            ..self
        }
    }

    #[must_use]
    pub const fn pitch_classes(&self) -> PitchClassSet {
        self.pitch_classes
    }

    #[must_use]
    pub const fn interval_class_vector(&self) -> IntervalClassVector {
        self.interval_class_vector
    }

    #[must_use]
    pub const fn invariance_vector(&self) -> InvarianceVector {
        self.invariance_vector
    }

    /// Forte index of the Z-partner within the same cardinality.
    #[must_use]
    pub const fn z_relation(&self) -> Option<ForteIndex> {
        self.z_relation
    }

    #[must_use]
    pub const fn has_distinct_inversion(&self) -> bool {
        self.invariance_vector.has_distinct_inversion()
    }
}
