//! Shared test utilities and fixtures

#![allow(dead_code)]

use forte_core::Classifier;
use forte_types::{ClassKey, ForteClass, PitchClassSet};

pub fn classifier() -> Classifier<'static> {
    Classifier::global()
}

pub fn key(text: &str) -> ClassKey {
    text.parse().unwrap()
}

pub fn class(text: &str) -> ForteClass {
    key(text).class()
}

pub fn set(pitch_classes: &[u8]) -> PitchClassSet {
    PitchClassSet::from_pitch_classes(pitch_classes.iter().copied()).unwrap()
}

/// Every non-empty subset of the twelve pitch classes.
pub fn all_sets() -> impl Iterator<Item = PitchClassSet> {
    (1..=0x0FFF_u16).map(|bits| PitchClassSet::from_bits(bits).unwrap())
}

/// The 24 operations T_n and T_nI as `(n, inverted)` pairs.
pub fn operations() -> impl Iterator<Item = (u8, bool)> {
    (0..12).flat_map(|n| [(n, false), (n, true)])
}

pub fn apply(pitch_classes: PitchClassSet, (n, inverted): (u8, bool)) -> PitchClassSet {
    let source = if inverted {
        pitch_classes.invert()
    } else {
        pitch_classes
    };
    source.transpose(n)
}
