//! The result of classifying a pitch-class set.

use std::fmt;

use serde::Serialize;

use forte_types::{ClassKey, EquivalenceMode, ForteClass, PitchClassSet, TniStructure};

/// The T/I operation that carries a prime form onto the classified set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Operation {
    /// Transposition level applied last, 0..=11.
    pub transposition: u8,
    /// Whether the prime form is inverted first.
    pub inverted: bool,
}

impl Operation {
    pub const IDENTITY: Self = Self {
        transposition: 0,
        inverted: false,
    };

    /// `T_n` after an optional `I`.
    #[must_use]
    pub const fn apply(self, pitch_classes: PitchClassSet) -> PitchClassSet {
        let source = if self.inverted {
            pitch_classes.invert()
        } else {
            pitch_classes
        };
        source.transpose(self.transposition)
    }

    /// The operation mapping `from` onto `to`, preferring plain
    /// transposition when both work.
    #[must_use]
    pub fn between(from: PitchClassSet, to: PitchClassSet) -> Option<Self> {
        if let Some(transposition) = from.transposition_to(to) {
            return Some(Self {
                transposition,
                inverted: false,
            });
        }
        from.invert()
            .transposition_to(to)
            .map(|transposition| Self {
                transposition,
                inverted: true,
            })
    }
}

impl fmt::Display for Operation {
    /// `T7`, or `T7I` when inversion is involved.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.transposition)?;
        if self.inverted {
            f.write_str("I")?;
        }
        Ok(())
    }
}

/// Where a pitch-class set sits in Forte's catalogue.
///
/// `key` is the directional member the set belongs to in both modes. Under
/// [`EquivalenceMode::Tn`] the prime form and structure are that member's;
/// under [`EquivalenceMode::Tni`] they are the class's prime member, and
/// `operation` may include an inversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub pitch_classes: PitchClassSet,
    pub key: ClassKey,
    pub mode: EquivalenceMode,
    pub prime_form: PitchClassSet,
    pub structure: TniStructure,
    /// Satisfies `operation.apply(prime_form) == pitch_classes`.
    pub operation: Operation,
}

impl Classification {
    #[must_use]
    pub const fn class(&self) -> ForteClass {
        self.key.class()
    }
}

#[cfg(test)]
mod tests {
    use forte_types::{
        ClassKey, EquivalenceMode, IntervalClassVector, InvarianceVector, InversionSign,
        PitchClassSet, TniStructure,
    };
    use serde_json::json;

    use super::{Classification, Operation};

    #[test]
    fn between_prefers_transposition() {
        let minor = PitchClassSet::literal(&[0, 3, 7]);
        let op = Operation::between(minor, minor.transpose(5)).unwrap();
        assert_eq!(op.to_string(), "T5");
        assert_eq!(op.apply(minor), minor.transpose(5));

        let major = PitchClassSet::literal(&[2, 6, 9]);
        let op = Operation::between(minor, major).unwrap();
        assert!(op.inverted);
        assert_eq!(op.apply(minor), major);
        assert_eq!(op.to_string(), format!("T{}I", op.transposition));
    }

    #[test]
    fn between_fails_across_classes() {
        let minor = PitchClassSet::literal(&[0, 3, 7]);
        let augmented = PitchClassSet::literal(&[0, 4, 8]);
        assert_eq!(Operation::between(minor, augmented), None);
        assert_eq!(Operation::IDENTITY.apply(minor), minor);
    }

    #[test]
    fn classification_serializes_flat() {
        let minor = PitchClassSet::literal(&[0, 3, 7]);
        let major = PitchClassSet::literal(&[0, 4, 7]);
        let classification = Classification {
            pitch_classes: major,
            key: ClassKey::from_parts(3, 11, InversionSign::Negative).unwrap(),
            mode: EquivalenceMode::Tni,
            prime_form: minor,
            structure: TniStructure::new(
                minor,
                IntervalClassVector::new([0, 0, 1, 1, 1, 0]),
                InvarianceVector::new([1, 0, 0, 0, 5, 6, 5, 5]),
                None,
            ),
            operation: Operation::between(minor, major).unwrap(),
        };
        let value = serde_json::to_value(classification).unwrap();
        assert_eq!(value["key"], json!({"cardinality": 3, "forte_index": 11, "sign": "negative"}));
        assert_eq!(value["mode"], "tni");
        assert_eq!(value["pitch_classes"], json!([0, 4, 7]));
        assert_eq!(value["structure"]["interval_class_vector"], json!([0, 0, 1, 1, 1, 0]));
        assert_eq!(value["structure"]["z_relation"], json!(null));
        assert_eq!(value["operation"], json!({"transposition": 7, "inverted": true}));
    }
}
