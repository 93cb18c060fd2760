//! Representative of the inverted member for every class with a distinct
//! inversion, sorted by (cardinality, Forte index).

use forte_types::PitchClassSet;

pub(crate) const INVERSION_DEFAULTS: &[(u8, u8, PitchClassSet)] = &[
    (3, 2, PitchClassSet::literal(&[0, 2, 3])),
    (3, 3, PitchClassSet::literal(&[0, 3, 4])),
    (3, 4, PitchClassSet::literal(&[0, 4, 5])),
    (3, 5, PitchClassSet::literal(&[0, 5, 6])),
    (3, 7, PitchClassSet::literal(&[0, 3, 5])),
    (3, 8, PitchClassSet::literal(&[0, 4, 6])),
    (3, 11, PitchClassSet::literal(&[0, 4, 7])),
    (4, 2, PitchClassSet::literal(&[0, 2, 3, 4])),
    (4, 4, PitchClassSet::literal(&[0, 3, 4, 5])),
    (4, 5, PitchClassSet::literal(&[0, 4, 5, 6])),
    (4, 11, PitchClassSet::literal(&[0, 2, 4, 5])),
    (4, 12, PitchClassSet::literal(&[0, 3, 4, 6])),
    (4, 13, PitchClassSet::literal(&[0, 3, 5, 6])),
    (4, 14, PitchClassSet::literal(&[0, 4, 5, 7])),
    (4, 15, PitchClassSet::literal(&[0, 2, 5, 6])),
    (4, 16, PitchClassSet::literal(&[0, 2, 6, 7])),
    (4, 18, PitchClassSet::literal(&[0, 3, 6, 7])),
    (4, 19, PitchClassSet::literal(&[0, 3, 4, 8])),
    (4, 22, PitchClassSet::literal(&[0, 3, 5, 7])),
    (4, 27, PitchClassSet::literal(&[0, 3, 6, 8])),
    (4, 29, PitchClassSet::literal(&[0, 4, 6, 7])),
    (5, 2, PitchClassSet::literal(&[0, 2, 3, 4, 5])),
    (5, 3, PitchClassSet::literal(&[0, 1, 3, 4, 5])),
    (5, 4, PitchClassSet::literal(&[0, 3, 4, 5, 6])),
    (5, 5, PitchClassSet::literal(&[0, 4, 5, 6, 7])),
    (5, 6, PitchClassSet::literal(&[0, 1, 4, 5, 6])),
    (5, 7, PitchClassSet::literal(&[0, 1, 5, 6, 7])),
    (5, 9, PitchClassSet::literal(&[0, 2, 4, 5, 6])),
    (5, 10, PitchClassSet::literal(&[0, 2, 3, 5, 6])),
    (5, 11, PitchClassSet::literal(&[0, 3, 4, 5, 7])),
    (5, 13, PitchClassSet::literal(&[0, 2, 3, 4, 8])),
    (5, 14, PitchClassSet::literal(&[0, 2, 5, 6, 7])),
    (5, 16, PitchClassSet::literal(&[0, 3, 4, 6, 7])),
    (5, 18, PitchClassSet::literal(&[0, 2, 3, 6, 7])),
    (5, 19, PitchClassSet::literal(&[0, 1, 4, 6, 7])),
    (5, 20, PitchClassSet::literal(&[0, 1, 5, 7, 8])),
    (5, 21, PitchClassSet::literal(&[0, 3, 4, 7, 8])),
    (5, 23, PitchClassSet::literal(&[0, 2, 4, 5, 7])),
    (5, 24, PitchClassSet::literal(&[0, 2, 4, 6, 7])),
    (5, 25, PitchClassSet::literal(&[0, 3, 5, 6, 8])),
    (5, 26, PitchClassSet::literal(&[0, 3, 4, 6, 8])),
    (5, 27, PitchClassSet::literal(&[0, 3, 5, 7, 8])),
    (5, 28, PitchClassSet::literal(&[0, 2, 5, 6, 8])),
    (5, 29, PitchClassSet::literal(&[0, 2, 5, 7, 8])),
    (5, 30, PitchClassSet::literal(&[0, 2, 4, 7, 8])),
    (5, 31, PitchClassSet::literal(&[0, 2, 3, 6, 9])),
    (5, 32, PitchClassSet::literal(&[0, 1, 4, 7, 9])),
    (5, 36, PitchClassSet::literal(&[0, 3, 5, 6, 7])),
    (5, 38, PitchClassSet::literal(&[0, 3, 6, 7, 8])),
    (6, 2, PitchClassSet::literal(&[0, 2, 3, 4, 5, 6])),
    (6, 3, PitchClassSet::literal(&[0, 1, 3, 4, 5, 6])),
    (6, 5, PitchClassSet::literal(&[0, 1, 4, 5, 6, 7])),
    (6, 9, PitchClassSet::literal(&[0, 2, 4, 5, 6, 7])),
    (6, 10, PitchClassSet::literal(&[0, 2, 3, 4, 6, 7])),
    (6, 11, PitchClassSet::literal(&[0, 2, 3, 5, 6, 7])),
    (6, 12, PitchClassSet::literal(&[0, 1, 3, 5, 6, 7])),
    (6, 14, PitchClassSet::literal(&[0, 3, 4, 5, 7, 8])),
    (6, 15, PitchClassSet::literal(&[0, 3, 4, 6, 7, 8])),
    (6, 16, PitchClassSet::literal(&[0, 2, 3, 4, 7, 8])),
    (6, 17, PitchClassSet::literal(&[0, 1, 4, 6, 7, 8])),
    (6, 18, PitchClassSet::literal(&[0, 1, 3, 6, 7, 8])),
    (6, 19, PitchClassSet::literal(&[0, 1, 4, 5, 7, 8])),
    (6, 21, PitchClassSet::literal(&[0, 2, 4, 5, 6, 8])),
    (6, 22, PitchClassSet::literal(&[0, 2, 4, 6, 7, 8])),
    (6, 24, PitchClassSet::literal(&[0, 2, 4, 5, 7, 8])),
    (6, 25, PitchClassSet::literal(&[0, 2, 3, 5, 7, 8])),
    (6, 27, PitchClassSet::literal(&[0, 2, 3, 5, 6, 9])),
    (6, 30, PitchClassSet::literal(&[0, 2, 3, 6, 8, 9])),
    (6, 31, PitchClassSet::literal(&[0, 1, 4, 6, 8, 9])),
    (6, 33, PitchClassSet::literal(&[0, 2, 4, 6, 7, 9])),
    (6, 34, PitchClassSet::literal(&[0, 2, 4, 6, 8, 9])),
    (6, 36, PitchClassSet::literal(&[0, 3, 4, 5, 6, 7])),
    (6, 39, PitchClassSet::literal(&[0, 3, 4, 5, 6, 8])),
    (6, 40, PitchClassSet::literal(&[0, 3, 5, 6, 7, 8])),
    (6, 41, PitchClassSet::literal(&[0, 2, 5, 6, 7, 8])),
    (6, 43, PitchClassSet::literal(&[0, 2, 3, 6, 7, 8])),
    (6, 44, PitchClassSet::literal(&[0, 1, 2, 5, 8, 9])),
    (6, 46, PitchClassSet::literal(&[0, 2, 4, 5, 6, 9])),
    (6, 47, PitchClassSet::literal(&[0, 2, 3, 4, 7, 9])),
    (7, 2, PitchClassSet::literal(&[0, 2, 3, 4, 5, 6, 7])),
    (7, 3, PitchClassSet::literal(&[0, 3, 4, 5, 6, 7, 8])),
    (7, 4, PitchClassSet::literal(&[0, 1, 3, 4, 5, 6, 7])),
    (7, 5, PitchClassSet::literal(&[0, 1, 2, 4, 5, 6, 7])),
    (7, 6, PitchClassSet::literal(&[0, 1, 4, 5, 6, 7, 8])),
    (7, 7, PitchClassSet::literal(&[0, 1, 2, 5, 6, 7, 8])),
    (7, 9, PitchClassSet::literal(&[0, 2, 4, 5, 6, 7, 8])),
    (7, 10, PitchClassSet::literal(&[0, 2, 3, 4, 5, 6, 9])),
    (7, 11, PitchClassSet::literal(&[0, 2, 3, 4, 5, 7, 8])),
    (7, 13, PitchClassSet::literal(&[0, 2, 3, 4, 6, 7, 8])),
    (7, 14, PitchClassSet::literal(&[0, 1, 3, 5, 6, 7, 8])),
    (7, 16, PitchClassSet::literal(&[0, 1, 3, 4, 5, 6, 9])),
    (7, 18, PitchClassSet::literal(&[0, 1, 4, 6, 7, 8, 9])),
    (7, 19, PitchClassSet::literal(&[0, 1, 2, 3, 6, 8, 9])),
    (7, 20, PitchClassSet::literal(&[0, 1, 2, 5, 7, 8, 9])),
    (7, 21, PitchClassSet::literal(&[0, 1, 3, 4, 5, 8, 9])),
    (7, 23, PitchClassSet::literal(&[0, 2, 4, 5, 6, 7, 9])),
    (7, 24, PitchClassSet::literal(&[0, 2, 4, 6, 7, 8, 9])),
    (7, 25, PitchClassSet::literal(&[0, 2, 3, 5, 6, 7, 9])),
    (7, 26, PitchClassSet::literal(&[0, 2, 4, 5, 6, 8, 9])),
    (7, 27, PitchClassSet::literal(&[0, 2, 4, 5, 7, 8, 9])),
    (7, 28, PitchClassSet::literal(&[0, 2, 3, 4, 6, 8, 9])),
    (7, 29, PitchClassSet::literal(&[0, 2, 3, 5, 7, 8, 9])),
    (7, 30, PitchClassSet::literal(&[0, 1, 3, 5, 7, 8, 9])),
    (7, 31, PitchClassSet::literal(&[0, 2, 3, 5, 6, 8, 9])),
    (7, 32, PitchClassSet::literal(&[0, 1, 3, 5, 6, 8, 9])),
    (7, 36, PitchClassSet::literal(&[0, 2, 3, 5, 6, 7, 8])),
    (7, 38, PitchClassSet::literal(&[0, 1, 3, 4, 6, 7, 8])),
    (8, 2, PitchClassSet::literal(&[0, 2, 3, 4, 5, 6, 7, 8])),
    (8, 4, PitchClassSet::literal(&[0, 1, 3, 4, 5, 6, 7, 8])),
    (8, 5, PitchClassSet::literal(&[0, 1, 2, 4, 5, 6, 7, 8])),
    (8, 11, PitchClassSet::literal(&[0, 2, 4, 5, 6, 7, 8, 9])),
    (8, 12, PitchClassSet::literal(&[0, 2, 3, 4, 5, 6, 8, 9])),
    (8, 13, PitchClassSet::literal(&[0, 2, 3, 5, 6, 7, 8, 9])),
    (8, 14, PitchClassSet::literal(&[0, 2, 3, 4, 5, 7, 8, 9])),
    (8, 15, PitchClassSet::literal(&[0, 1, 3, 5, 6, 7, 8, 9])),
    (8, 16, PitchClassSet::literal(&[0, 1, 2, 4, 6, 7, 8, 9])),
    (8, 18, PitchClassSet::literal(&[0, 1, 3, 4, 6, 7, 8, 9])),
    (8, 19, PitchClassSet::literal(&[0, 1, 3, 4, 5, 7, 8, 9])),
    (8, 22, PitchClassSet::literal(&[0, 1, 2, 3, 5, 7, 9, 10])),
    (8, 27, PitchClassSet::literal(&[0, 1, 2, 4, 6, 7, 9, 10])),
    (8, 29, PitchClassSet::literal(&[0, 2, 3, 4, 6, 7, 8, 9])),
    (9, 2, PitchClassSet::literal(&[0, 2, 3, 4, 5, 6, 7, 8, 9])),
    (9, 3, PitchClassSet::literal(&[0, 1, 3, 4, 5, 6, 7, 8, 9])),
    (9, 4, PitchClassSet::literal(&[0, 1, 2, 4, 5, 6, 7, 8, 9])),
    (9, 5, PitchClassSet::literal(&[0, 1, 2, 3, 5, 6, 7, 8, 9])),
    (9, 7, PitchClassSet::literal(&[0, 1, 2, 3, 4, 5, 7, 9, 10])),
    (9, 8, PitchClassSet::literal(&[0, 1, 2, 3, 4, 6, 8, 9, 10])),
    (9, 11, PitchClassSet::literal(&[0, 1, 2, 3, 5, 6, 8, 9, 10])),
];
