//! Classification keys: cardinality, Forte index and inversion sign.

use std::fmt;
use std::num::NonZeroU8;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ForteError;

/// Number of cardinality slots, including the unused cardinality 0.
pub const CARDINALITIES: usize = 13;

const CARDINALITY_NAMES: [&str; CARDINALITIES] = [
    "none",
    "monad",
    "diad",
    "trichord",
    "tetrachord",
    "pentachord",
    "hexachord",
    "septachord",
    "octachord",
    "nonachord",
    "decachord",
    "undecachord",
    "duodecachord",
];

/// Number of pitch classes in a set, 0..=12.
///
/// Cardinality 0 is a placeholder slot; no classification exists for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Cardinality(u8);

impl Cardinality {
    pub const MAX: u8 = 12;

    pub fn new(value: u8) -> Result<Self, ForteError> {
        if value > Self::MAX {
            return Err(ForteError::OutOfRange {
                what: "cardinality",
                value: value.into(),
                min: 0,
                max: Self::MAX.into(),
            });
        }
        Ok(Self(value))
    }

    pub(crate) const fn from_count(count: u8) -> Self {
        Self(count)
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Position of this cardinality in per-cardinality tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Every cardinality from 0 through 12.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=Self::MAX).map(Self)
    }

    /// Conventional name: "trichord", "hexachord", ...
    #[must_use]
    pub fn name(self) -> &'static str {
        CARDINALITY_NAMES[self.index()]
    }
}

impl TryFrom<u8> for Cardinality {
    type Error = ForteError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Cardinality> for u8 {
    fn from(value: Cardinality) -> Self {
        value.0
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of a class within its cardinality, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ForteIndex(NonZeroU8);

impl ForteIndex {
    pub fn new(value: u8) -> Result<Self, ForteError> {
        Self::from_raw(value).ok_or(ForteError::OutOfRange {
            what: "forte index",
            value: value.into(),
            min: 1,
            max: u8::MAX.into(),
        })
    }

    /// Const constructor for tables where 0 means "no index".
    #[must_use]
    pub const fn from_raw(value: u8) -> Option<Self> {
        match NonZeroU8::new(value) {
            Some(index) => Some(Self(index)),
            None => None,
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0.get() as usize
    }
}

impl TryFrom<u8> for ForteIndex {
    type Error = ForteError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ForteIndex> for u8 {
    fn from(value: ForteIndex) -> Self {
        value.get()
    }
}

impl fmt::Display for ForteIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which member of a transposition/inversion class a key names.
///
/// `Zero` marks a class that maps onto itself under inversion, so it has a
/// single entry. `Positive` and `Negative` are the two directional members
/// of a class whose inversion is a different transposition class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InversionSign {
    Positive,
    Zero,
    Negative,
}

impl InversionSign {
    #[must_use]
    pub const fn as_i8(self) -> i8 {
        match self {
            InversionSign::Positive => 1,
            InversionSign::Zero => 0,
            InversionSign::Negative => -1,
        }
    }

    #[must_use]
    pub const fn from_i8(value: i8) -> Option<Self> {
        match value {
            1 => Some(InversionSign::Positive),
            0 => Some(InversionSign::Zero),
            -1 => Some(InversionSign::Negative),
            _ => None,
        }
    }

    /// Forte-name suffix: "A" for the prime member, "B" for its inversion.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            InversionSign::Positive => "A",
            InversionSign::Zero => "",
            InversionSign::Negative => "B",
        }
    }

    /// The sign of the paired member. `Zero` has no pair and maps to itself.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            InversionSign::Positive => InversionSign::Negative,
            InversionSign::Zero => InversionSign::Zero,
            InversionSign::Negative => InversionSign::Positive,
        }
    }

    #[must_use]
    pub const fn is_directional(self) -> bool {
        !matches!(self, InversionSign::Zero)
    }
}

/// A class under transposition and inversion: cardinality plus Forte index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ForteClass {
    pub cardinality: Cardinality,
    pub forte_index: ForteIndex,
}

impl ForteClass {
    #[must_use]
    pub const fn new(cardinality: Cardinality, forte_index: ForteIndex) -> Self {
        Self {
            cardinality,
            forte_index,
        }
    }

    #[must_use]
    pub const fn with_sign(self, sign: InversionSign) -> ClassKey {
        ClassKey::new(self.cardinality, self.forte_index, sign)
    }
}

impl fmt::Display for ForteClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.cardinality, self.forte_index)
    }
}

/// Address of one classification record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClassKey {
    pub cardinality: Cardinality,
    pub forte_index: ForteIndex,
    pub sign: InversionSign,
}

impl ClassKey {
    #[must_use]
    pub const fn new(cardinality: Cardinality, forte_index: ForteIndex, sign: InversionSign) -> Self {
        Self {
            cardinality,
            forte_index,
            sign,
        }
    }

    /// Build a key from raw numbers, validating both ranges.
    pub fn from_parts(cardinality: u8, forte_index: u8, sign: InversionSign) -> Result<Self, ForteError> {
        Ok(Self::new(
            Cardinality::new(cardinality)?,
            ForteIndex::new(forte_index)?,
            sign,
        ))
    }

    #[must_use]
    pub const fn class(self) -> ForteClass {
        ForteClass::new(self.cardinality, self.forte_index)
    }

    /// Key of the paired member (itself for `Zero`).
    #[must_use]
    pub const fn opposite(self) -> Self {
        Self::new(self.cardinality, self.forte_index, self.sign.opposite())
    }
}

impl fmt::Display for ClassKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}{}",
            self.cardinality,
            self.forte_index,
            self.sign.suffix()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
    #[error("expected a Forte name such as 3-11B or 4-Z15A, got {0:?}")]
    Malformed(String),
    #[error(transparent)]
    Range(#[from] ForteError),
}

impl FromStr for ClassKey {
    type Err = KeyParseError;

    /// Parses `3-11`, `3-11A`, `3-11B` and `4-Z15A`.
    ///
    /// The `Z` marker is informational and ignored; no suffix means `Zero`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || KeyParseError::Malformed(s.to_string());
        let (cardinality, rest) = s.trim().split_once('-').ok_or_else(malformed)?;
        let cardinality: u32 = cardinality.trim().parse().map_err(|_| malformed())?;

        let rest = rest
            .strip_prefix('Z')
            .or_else(|| rest.strip_prefix('z'))
            .unwrap_or(rest);
        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        let (index, suffix) = rest.split_at(digits_end);
        let index: u32 = index.parse().map_err(|_| malformed())?;

        let sign = match suffix {
            "" => InversionSign::Zero,
            "A" | "a" => InversionSign::Positive,
            "B" | "b" => InversionSign::Negative,
            _ => return Err(malformed()),
        };

        let cardinality = u8::try_from(cardinality).map_err(|_| ForteError::OutOfRange {
            what: "cardinality",
            value: cardinality,
            min: 0,
            max: Cardinality::MAX.into(),
        })?;
        let index = u8::try_from(index).map_err(|_| ForteError::OutOfRange {
            what: "forte index",
            value: index,
            min: 1,
            max: u8::MAX.into(),
        })?;
        Self::from_parts(cardinality, index, sign).map_err(KeyParseError::from)
    }
}
