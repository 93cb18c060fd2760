//! Twelve-bit pitch-class sets.
//!
//! A [`PitchClassSet`] stores one bit per pitch class, so transposition is a
//! 12-bit rotation and equality is a plain integer compare.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Cardinality, IntervalClassVector};

/// Number of pitch classes in twelve-tone equal temperament.
pub const PITCH_CLASSES: u8 = 12;

const MASK: u16 = (1 << PITCH_CLASSES) - 1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PitchClassError {
    #[error("pitch class {0} is outside 0..=11")]
    OutOfRange(u32),
    #[error("bitmap {0:#06x} has bits above pitch class 11")]
    InvalidBits(u16),
    #[error("cannot read a pitch class from {0:?}")]
    Malformed(String),
}

/// An unordered set of pitch classes.
///
/// Bit `n` is set when pitch class `n` is present. Bits above 11 are never set.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct PitchClassSet(u16);

impl PitchClassSet {
    pub const EMPTY: Self = Self(0);
    /// All twelve pitch classes.
    pub const AGGREGATE: Self = Self(MASK);

    pub fn from_bits(bits: u16) -> Result<Self, PitchClassError> {
        if bits & !MASK != 0 {
            return Err(PitchClassError::InvalidBits(bits));
        }
        Ok(Self(bits))
    }

    pub fn from_pitch_classes<I>(pitch_classes: I) -> Result<Self, PitchClassError>
    where
        I: IntoIterator<Item = u8>,
    {
        let mut bits = 0u16;
        for pc in pitch_classes {
            if pc >= PITCH_CLASSES {
                return Err(PitchClassError::OutOfRange(pc.into()));
            }
            bits |= 1 << pc;
        }
        Ok(Self(bits))
    }

    /// Build a set from literal pitch classes in const context.
    ///
    /// Panics (at compile time when used in a `const`) if any pitch class is
    /// 12 or above.
    #[must_use]
    pub const fn literal(pitch_classes: &[u8]) -> Self {
        let mut bits = 0u16;
        let mut i = 0;
        while i < pitch_classes.len() {
            assert!(pitch_classes[i] < PITCH_CLASSES, "pitch class out of range");
            bits |= 1 << pitch_classes[i];
            i += 1;
        }
        Self(bits)
    }

    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of pitch classes present.
    #[must_use]
    pub const fn len(self) -> u8 {
        self.0.count_ones() as u8
    }

    #[must_use]
    pub fn cardinality(self) -> Cardinality {
        Cardinality::from_count(self.len())
    }

    #[must_use]
    pub const fn contains(self, pc: u8) -> bool {
        pc < PITCH_CLASSES && self.0 & (1 << pc) != 0
    }

    /// Pitch classes in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..PITCH_CLASSES).filter(move |&pc| self.contains(pc))
    }

    /// T_n: add `n` (mod 12) to every pitch class.
    #[must_use]
    pub const fn transpose(self, n: u8) -> Self {
        let n = n % PITCH_CLASSES;
        if n == 0 {
            return self;
        }
        Self(((self.0 << n) | (self.0 >> (PITCH_CLASSES - n))) & MASK)
    }

    /// I: map every pitch class `pc` to `-pc` (mod 12).
    #[must_use]
    pub const fn invert(self) -> Self {
        let mut bits = self.0 & 1;
        let mut pc = 1;
        while pc < PITCH_CLASSES {
            if self.0 & (1 << pc) != 0 {
                bits |= 1 << (PITCH_CLASSES - pc);
            }
            pc += 1;
        }
        Self(bits)
    }

    /// The smallest bitmap among the twelve transpositions of this set.
    ///
    /// Returns the normal form together with the level `n` such that
    /// `normal.transpose(n) == self`. Two sets share a normal form exactly
    /// when they are transpositions of each other.
    #[must_use]
    pub fn transpositional_normal(self) -> (Self, u8) {
        let (shift, normal) = (0..PITCH_CLASSES)
            .map(|n| (n, self.transpose(n)))
            .min_by_key(|&(_, set)| set.0)
            .unwrap_or((0, self));
        (normal, (PITCH_CLASSES - shift) % PITCH_CLASSES)
    }

    /// The level `n` with `self.transpose(n) == other`, if there is one.
    #[must_use]
    pub fn transposition_to(self, other: Self) -> Option<u8> {
        if self.len() != other.len() {
            return None;
        }
        (0..PITCH_CLASSES).find(|&n| self.transpose(n) == other)
    }

    #[must_use]
    pub fn is_transposition_of(self, other: Self) -> bool {
        self.transposition_to(other).is_some()
    }

    /// True when `other` is a transposition of this set or of its inversion.
    #[must_use]
    pub fn is_tni_related(self, other: Self) -> bool {
        self.is_transposition_of(other) || self.invert().is_transposition_of(other)
    }

    /// True when some inversion maps the set onto itself.
    #[must_use]
    pub fn is_inversionally_symmetric(self) -> bool {
        self.invert().is_transposition_of(self)
    }

    /// Count, per interval class 1..=6, the unordered pairs realizing it.
    #[must_use]
    pub fn interval_class_vector(self) -> IntervalClassVector {
        let mut counts = [0u8; 6];
        for (slot, interval) in counts.iter_mut().zip(1..=6u8) {
            // Each pair {p, p + i} shows up once in the overlap; the tritone
            // pairs show up from both ends.
            let overlap = (self.0 & self.transpose(interval).0).count_ones() as u8;
            *slot = if interval == 6 { overlap / 2 } else { overlap };
        }
        IntervalClassVector::new(counts)
    }
}

impl fmt::Display for PitchClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, pc) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{pc}")?;
        }
        f.write_str("}")
    }
}

impl FromStr for PitchClassSet {
    type Err = PitchClassError;

    /// Accepts integers 0..=11 separated by commas and/or whitespace,
    /// optionally wrapped in `{}` or `[]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .or_else(|| {
                trimmed
                    .strip_prefix('[')
                    .and_then(|rest| rest.strip_suffix(']'))
            })
            .unwrap_or(trimmed);

        let mut pitch_classes = Vec::new();
        for token in inner
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
        {
            let value: u32 = token
                .parse()
                .map_err(|_| PitchClassError::Malformed(token.to_string()))?;
            let pc = u8::try_from(value)
                .ok()
                .filter(|&pc| pc < PITCH_CLASSES)
                .ok_or(PitchClassError::OutOfRange(value))?;
            pitch_classes.push(pc);
        }
        Self::from_pitch_classes(pitch_classes)
    }
}

impl TryFrom<Vec<u8>> for PitchClassSet {
    type Error = PitchClassError;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_pitch_classes(value)
    }
}

impl From<PitchClassSet> for Vec<u8> {
    fn from(value: PitchClassSet) -> Self {
        value.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{PitchClassError, PitchClassSet};
    use crate::IntervalClassVector;

    fn set(pcs: &[u8]) -> PitchClassSet {
        PitchClassSet::literal(pcs)
    }

    #[test]
    fn rejects_out_of_range_pitch_class() {
        assert_eq!(
            PitchClassSet::from_pitch_classes([0, 12]),
            Err(PitchClassError::OutOfRange(12))
        );
        assert_eq!(
            PitchClassSet::from_bits(0x1000),
            Err(PitchClassError::InvalidBits(0x1000))
        );
    }

    #[test]
    fn duplicates_collapse() {
        let pcs = PitchClassSet::from_pitch_classes([4, 0, 7, 4, 0]).unwrap();
        assert_eq!(pcs, set(&[0, 4, 7]));
        assert_eq!(pcs.len(), 3);
    }

    #[test]
    fn transpose_wraps_around_the_octave() {
        assert_eq!(set(&[0, 4, 7]).transpose(7), set(&[2, 7, 11]));
        assert_eq!(set(&[10, 11]).transpose(3), set(&[1, 2]));
        assert_eq!(set(&[0, 4, 7]).transpose(12), set(&[0, 4, 7]));
    }

    #[test]
    fn invert_maps_to_negation() {
        assert_eq!(set(&[0, 4, 7]).invert(), set(&[0, 5, 8]));
        assert_eq!(set(&[0, 6]).invert(), set(&[0, 6]));
        assert_eq!(set(&[1, 2, 3]).invert().invert(), set(&[1, 2, 3]));
    }

    #[test]
    fn normal_form_identifies_transpositions() {
        let (normal, level) = set(&[2, 6, 9]).transpositional_normal();
        assert_eq!(normal, set(&[0, 4, 7]).transpositional_normal().0);
        assert_eq!(normal.transpose(level), set(&[2, 6, 9]));
        assert_ne!(normal, set(&[0, 3, 7]).transpositional_normal().0);
    }

    #[test]
    fn major_and_minor_triads_are_tni_related_only() {
        let major = set(&[0, 4, 7]);
        let minor = set(&[0, 3, 7]);
        assert!(!major.is_transposition_of(minor));
        assert!(major.is_tni_related(minor));
        assert!(!major.is_inversionally_symmetric());
        assert!(set(&[0, 4, 8]).is_inversionally_symmetric());
    }

    #[test]
    fn interval_class_vector_counts_pairs() {
        assert_eq!(
            set(&[0, 4, 7]).interval_class_vector(),
            IntervalClassVector::new([0, 0, 1, 1, 1, 0])
        );
        assert_eq!(
            set(&[0, 3, 6, 9]).interval_class_vector(),
            IntervalClassVector::new([0, 0, 4, 0, 0, 2])
        );
        assert_eq!(
            PitchClassSet::AGGREGATE.interval_class_vector(),
            IntervalClassVector::new([12, 12, 12, 12, 12, 6])
        );
    }

    #[test]
    fn parses_common_spellings() {
        assert_eq!("0,4,7".parse::<PitchClassSet>().unwrap(), set(&[0, 4, 7]));
        assert_eq!("{0, 4, 7}".parse::<PitchClassSet>().unwrap(), set(&[0, 4, 7]));
        assert_eq!("[7 4 0]".parse::<PitchClassSet>().unwrap(), set(&[0, 4, 7]));
        assert_eq!("".parse::<PitchClassSet>().unwrap(), PitchClassSet::EMPTY);
        assert!(matches!(
            "0,x".parse::<PitchClassSet>(),
            Err(PitchClassError::Malformed(_))
        ));
    }

    #[test]
    fn oversized_numbers_are_out_of_range() {
        assert_eq!(
            "0 12".parse::<PitchClassSet>(),
            Err(PitchClassError::OutOfRange(12))
        );
        assert_eq!(
            "0,256".parse::<PitchClassSet>(),
            Err(PitchClassError::OutOfRange(256))
        );
    }

    #[test]
    fn display_lists_ascending() {
        assert_eq!(set(&[7, 0, 4]).to_string(), "{0,4,7}");
        assert_eq!(PitchClassSet::EMPTY.to_string(), "{}");
    }

    #[test]
    fn serde_uses_pitch_class_list() {
        let json = serde_json::to_string(&set(&[0, 4, 7])).unwrap();
        assert_eq!(json, "[0,4,7]");
        let back: PitchClassSet = serde_json::from_str("[11,0]").unwrap();
        assert_eq!(back, set(&[0, 11]));
        assert!(serde_json::from_str::<PitchClassSet>("[13]").is_err());
    }
}
