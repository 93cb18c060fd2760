//! Core domain types for Forte classification.
//!
//! This crate contains pure domain types with no IO and minimal dependencies:
//! pitch-class sets, classification keys, the per-class record, and the
//! error kinds shared by every layer.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod error;
mod key;
mod pitch_class_set;
mod structure;

pub use error::ForteError;
pub use key::{
    CARDINALITIES, Cardinality, ClassKey, ForteClass, ForteIndex, InversionSign, KeyParseError,
};
pub use pitch_class_set::{PITCH_CLASSES, PitchClassError, PitchClassSet};
pub use structure::{IntervalClassVector, InvarianceVector, TniStructure};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Equivalence Mode
// ============================================================================

/// Which operations count as "the same class" when classifying a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquivalenceMode {
    /// Transposition only: a set and its inversion are distinct classes.
    Tn,
    /// Transposition and inversion: a set and its inversion share a class.
    #[default]
    Tni,
}

impl EquivalenceMode {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            EquivalenceMode::Tn => "tn",
            EquivalenceMode::Tni => "tni",
        }
    }

    /// Parse a mode name, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tn" | "t" => Some(EquivalenceMode::Tn),
            "tni" | "ti" | "tn/tni" => Some(EquivalenceMode::Tni),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown equivalence mode {0:?} (expected \"tn\" or \"tni\")")]
pub struct ModeParseError(String);

impl FromStr for EquivalenceMode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ModeParseError(s.to_string()))
    }
}

impl fmt::Display for EquivalenceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
