//! Dense transposition-class numbering: every (cardinality, Forte index,
//! sign) key gets a position 1..=n within its cardinality.

use forte_types::InversionSign::{self, Negative, Positive, Zero};

pub(crate) const TN_INDEXES: &[(u8, u8, InversionSign, u8)] = &[
    (1, 1, Zero, 1),
    (2, 1, Zero, 1),
    (2, 2, Zero, 2),
    (2, 3, Zero, 3),
    (2, 4, Zero, 4),
    (2, 5, Zero, 5),
    (2, 6, Zero, 6),
    (3, 1, Zero, 1),
    (3, 2, Positive, 2),
    (3, 2, Negative, 3),
    (3, 3, Positive, 4),
    (3, 3, Negative, 5),
    (3, 4, Positive, 6),
    (3, 4, Negative, 7),
    (3, 5, Positive, 8),
    (3, 5, Negative, 9),
    (3, 6, Zero, 10),
    (3, 7, Positive, 11),
    (3, 7, Negative, 12),
    (3, 8, Positive, 13),
    (3, 8, Negative, 14),
    (3, 9, Zero, 15),
    (3, 10, Zero, 16),
    (3, 11, Positive, 17),
    (3, 11, Negative, 18),
    (3, 12, Zero, 19),
    (4, 1, Zero, 1),
    (4, 2, Positive, 2),
    (4, 2, Negative, 3),
    (4, 3, Zero, 4),
    (4, 4, Positive, 5),
    (4, 4, Negative, 6),
    (4, 5, Positive, 7),
    (4, 5, Negative, 8),
    (4, 6, Zero, 9),
    (4, 7, Zero, 10),
    (4, 8, Zero, 11),
    (4, 9, Zero, 12),
    (4, 10, Zero, 13),
    (4, 11, Positive, 14),
    (4, 11, Negative, 15),
    (4, 12, Positive, 16),
    (4, 12, Negative, 17),
    (4, 13, Positive, 18),
    (4, 13, Negative, 19),
    (4, 14, Positive, 20),
    (4, 14, Negative, 21),
    (4, 15, Positive, 22),
    (4, 15, Negative, 23),
    (4, 16, Positive, 24),
    (4, 16, Negative, 25),
    (4, 17, Zero, 26),
    (4, 18, Positive, 27),
    (4, 18, Negative, 28),
    (4, 19, Positive, 29),
    (4, 19, Negative, 30),
    (4, 20, Zero, 31),
    (4, 21, Zero, 32),
    (4, 22, Positive, 33),
    (4, 22, Negative, 34),
    (4, 23, Zero, 35),
    (4, 24, Zero, 36),
    (4, 25, Zero, 37),
    (4, 26, Zero, 38),
    (4, 27, Positive, 39),
    (4, 27, Negative, 40),
    (4, 28, Zero, 41),
    (4, 29, Positive, 42),
    (4, 29, Negative, 43),
    (5, 1, Zero, 1),
    (5, 2, Positive, 2),
    (5, 2, Negative, 3),
    (5, 3, Positive, 4),
    (5, 3, Negative, 5),
    (5, 4, Positive, 6),
    (5, 4, Negative, 7),
    (5, 5, Positive, 8),
    (5, 5, Negative, 9),
    (5, 6, Positive, 10),
    (5, 6, Negative, 11),
    (5, 7, Positive, 12),
    (5, 7, Negative, 13),
    (5, 8, Zero, 14),
    (5, 9, Positive, 15),
    (5, 9, Negative, 16),
    (5, 10, Positive, 17),
    (5, 10, Negative, 18),
    (5, 11, Positive, 19),
    (5, 11, Negative, 20),
    (5, 12, Zero, 21),
    (5, 13, Positive, 22),
    (5, 13, Negative, 23),
    (5, 14, Positive, 24),
    (5, 14, Negative, 25),
    (5, 15, Zero, 26),
    (5, 16, Positive, 27),
    (5, 16, Negative, 28),
    (5, 17, Zero, 29),
    (5, 18, Positive, 30),
    (5, 18, Negative, 31),
    (5, 19, Positive, 32),
    (5, 19, Negative, 33),
    (5, 20, Positive, 34),
    (5, 20, Negative, 35),
    (5, 21, Positive, 36),
    (5, 21, Negative, 37),
    (5, 22, Zero, 38),
    (5, 23, Positive, 39),
    (5, 23, Negative, 40),
    (5, 24, Positive, 41),
    (5, 24, Negative, 42),
    (5, 25, Positive, 43),
    (5, 25, Negative, 44),
    (5, 26, Positive, 45),
    (5, 26, Negative, 46),
    (5, 27, Positive, 47),
    (5, 27, Negative, 48),
    (5, 28, Positive, 49),
    (5, 28, Negative, 50),
    (5, 29, Positive, 51),
    (5, 29, Negative, 52),
    (5, 30, Positive, 53),
    (5, 30, Negative, 54),
    (5, 31, Positive, 55),
    (5, 31, Negative, 56),
    (5, 32, Positive, 57),
    (5, 32, Negative, 58),
    (5, 33, Zero, 59),
    (5, 34, Zero, 60),
    (5, 35, Zero, 61),
    (5, 36, Positive, 62),
    (5, 36, Negative, 63),
    (5, 37, Zero, 64),
    (5, 38, Positive, 65),
    (5, 38, Negative, 66),
    (6, 1, Zero, 1),
    (6, 2, Positive, 2),
    (6, 2, Negative, 3),
    (6, 3, Positive, 4),
    (6, 3, Negative, 5),
    (6, 4, Zero, 6),
    (6, 5, Positive, 7),
    (6, 5, Negative, 8),
    (6, 6, Zero, 9),
    (6, 7, Zero, 10),
    (6, 8, Zero, 11),
    (6, 9, Positive, 12),
    (6, 9, Negative, 13),
    (6, 10, Positive, 14),
    (6, 10, Negative, 15),
    (6, 11, Positive, 16),
    (6, 11, Negative, 17),
    (6, 12, Positive, 18),
    (6, 12, Negative, 19),
    (6, 13, Zero, 20),
    (6, 14, Positive, 21),
    (6, 14, Negative, 22),
    (6, 15, Positive, 23),
    (6, 15, Negative, 24),
    (6, 16, Positive, 25),
    (6, 16, Negative, 26),
    (6, 17, Positive, 27),
    (6, 17, Negative, 28),
    (6, 18, Positive, 29),
    (6, 18, Negative, 30),
    (6, 19, Positive, 31),
    (6, 19, Negative, 32),
    (6, 20, Zero, 33),
    (6, 21, Positive, 34),
    (6, 21, Negative, 35),
    (6, 22, Positive, 36),
    (6, 22, Negative, 37),
    (6, 23, Zero, 38),
    (6, 24, Positive, 39),
    (6, 24, Negative, 40),
    (6, 25, Positive, 41),
    (6, 25, Negative, 42),
    (6, 26, Zero, 43),
    (6, 27, Positive, 44),
    (6, 27, Negative, 45),
    (6, 28, Zero, 46),
    (6, 29, Zero, 47),
    (6, 30, Positive, 48),
    (6, 30, Negative, 49),
    (6, 31, Positive, 50),
    (6, 31, Negative, 51),
    (6, 32, Zero, 52),
    (6, 33, Positive, 53),
    (6, 33, Negative, 54),
    (6, 34, Positive, 55),
    (6, 34, Negative, 56),
    (6, 35, Zero, 57),
    (6, 36, Positive, 58),
    (6, 36, Negative, 59),
    (6, 37, Zero, 60),
    (6, 38, Zero, 61),
    (6, 39, Positive, 62),
    (6, 39, Negative, 63),
    (6, 40, Positive, 64),
    (6, 40, Negative, 65),
    (6, 41, Positive, 66),
    (6, 41, Negative, 67),
    (6, 42, Zero, 68),
    (6, 43, Positive, 69),
    (6, 43, Negative, 70),
    (6, 44, Positive, 71),
    (6, 44, Negative, 72),
    (6, 45, Zero, 73),
    (6, 46, Positive, 74),
    (6, 46, Negative, 75),
    (6, 47, Positive, 76),
    (6, 47, Negative, 77),
    (6, 48, Zero, 78),
    (6, 49, Zero, 79),
    (6, 50, Zero, 80),
    (7, 1, Zero, 1),
    (7, 2, Positive, 2),
    (7, 2, Negative, 3),
    (7, 3, Positive, 4),
    (7, 3, Negative, 5),
    (7, 4, Positive, 6),
    (7, 4, Negative, 7),
    (7, 5, Positive, 8),
    (7, 5, Negative, 9),
    (7, 6, Positive, 10),
    (7, 6, Negative, 11),
    (7, 7, Positive, 12),
    (7, 7, Negative, 13),
    (7, 8, Zero, 14),
    (7, 9, Positive, 15),
    (7, 9, Negative, 16),
    (7, 10, Positive, 17),
    (7, 10, Negative, 18),
    (7, 11, Positive, 19),
    (7, 11, Negative, 20),
    (7, 12, Zero, 21),
    (7, 13, Positive, 22),
    (7, 13, Negative, 23),
    (7, 14, Positive, 24),
    (7, 14, Negative, 25),
    (7, 15, Zero, 26),
    (7, 16, Positive, 27),
    (7, 16, Negative, 28),
    (7, 17, Zero, 29),
    (7, 18, Positive, 30),
    (7, 18, Negative, 31),
    (7, 19, Positive, 32),
    (7, 19, Negative, 33),
    (7, 20, Positive, 34),
    (7, 20, Negative, 35),
    (7, 21, Positive, 36),
    (7, 21, Negative, 37),
    (7, 22, Zero, 38),
    (7, 23, Positive, 39),
    (7, 23, Negative, 40),
    (7, 24, Positive, 41),
    (7, 24, Negative, 42),
    (7, 25, Positive, 43),
    (7, 25, Negative, 44),
    (7, 26, Positive, 45),
    (7, 26, Negative, 46),
    (7, 27, Positive, 47),
    (7, 27, Negative, 48),
    (7, 28, Positive, 49),
    (7, 28, Negative, 50),
    (7, 29, Positive, 51),
    (7, 29, Negative, 52),
    (7, 30, Positive, 53),
    (7, 30, Negative, 54),
    (7, 31, Positive, 55),
    (7, 31, Negative, 56),
    (7, 32, Positive, 57),
    (7, 32, Negative, 58),
    (7, 33, Zero, 59),
    (7, 34, Zero, 60),
    (7, 35, Zero, 61),
    (7, 36, Positive, 62),
    (7, 36, Negative, 63),
    (7, 37, Zero, 64),
    (7, 38, Positive, 65),
    (7, 38, Negative, 66),
    (8, 1, Zero, 1),
    (8, 2, Positive, 2),
    (8, 2, Negative, 3),
    (8, 3, Zero, 4),
    (8, 4, Positive, 5),
    (8, 4, Negative, 6),
    (8, 5, Positive, 7),
    (8, 5, Negative, 8),
    (8, 6, Zero, 9),
    (8, 7, Zero, 10),
    (8, 8, Zero, 11),
    (8, 9, Zero, 12),
    (8, 10, Zero, 13),
    (8, 11, Positive, 14),
    (8, 11, Negative, 15),
    (8, 12, Positive, 16),
    (8, 12, Negative, 17),
    (8, 13, Positive, 18),
    (8, 13, Negative, 19),
    (8, 14, Positive, 20),
    (8, 14, Negative, 21),
    (8, 15, Positive, 22),
    (8, 15, Negative, 23),
    (8, 16, Positive, 24),
    (8, 16, Negative, 25),
    (8, 17, Zero, 26),
    (8, 18, Positive, 27),
    (8, 18, Negative, 28),
    (8, 19, Positive, 29),
    (8, 19, Negative, 30),
    (8, 20, Zero, 31),
    (8, 21, Zero, 32),
    (8, 22, Positive, 33),
    (8, 22, Negative, 34),
    (8, 23, Zero, 35),
    (8, 24, Zero, 36),
    (8, 25, Zero, 37),
    (8, 26, Zero, 38),
    (8, 27, Positive, 39),
    (8, 27, Negative, 40),
    (8, 28, Zero, 41),
    (8, 29, Positive, 42),
    (8, 29, Negative, 43),
    (9, 1, Zero, 1),
    (9, 2, Positive, 2),
    (9, 2, Negative, 3),
    (9, 3, Positive, 4),
    (9, 3, Negative, 5),
    (9, 4, Positive, 6),
    (9, 4, Negative, 7),
    (9, 5, Positive, 8),
    (9, 5, Negative, 9),
    (9, 6, Zero, 10),
    (9, 7, Positive, 11),
    (9, 7, Negative, 12),
    (9, 8, Positive, 13),
    (9, 8, Negative, 14),
    (9, 9, Zero, 15),
    (9, 10, Zero, 16),
    (9, 11, Positive, 17),
    (9, 11, Negative, 18),
    (9, 12, Zero, 19),
    (10, 1, Zero, 1),
    (10, 2, Zero, 2),
    (10, 3, Zero, 3),
    (10, 4, Zero, 4),
    (10, 5, Zero, 5),
    (10, 6, Zero, 6),
    (11, 1, Zero, 1),
    (12, 1, Zero, 1),
];
