//! Conventional names, keyed like the transposition-class table. Keys
//! without a conventional name are absent.

use forte_types::InversionSign::{self, Negative, Positive, Zero};

pub(crate) const NAMES: &[(u8, u8, InversionSign, &[&str])] = &[
    (1, 1, Zero, &["unison", "monad", "singleton"]),
    (2, 1, Zero, &["interval class 1", "minor second", "m2", "half step", "semitone"]),
    (2, 2, Zero, &["interval class 2", "major second", "M2", "whole step", "whole tone"]),
    (2, 3, Zero, &["interval class 3", "minor third", "m3"]),
    (2, 4, Zero, &["interval class 4", "major third", "M3"]),
    (2, 5, Zero, &["interval class 5", "perfect fourth", "P4"]),
    (2, 6, Zero, &["tritone", "diminished fifth", "augmented fourth"]),
    (3, 1, Zero, &["chromatic trimirror"]),
    (3, 2, Positive, &["phrygian trichord"]),
    (3, 2, Negative, &["minor trichord"]),
    (3, 3, Positive, &["major-minor trichord"]),
    (3, 3, Negative, &["major-minor trichord"]),
    (3, 4, Positive, &["incomplete major-seventh chord"]),
    (3, 4, Negative, &["incomplete major-seventh chord"]),
    (3, 5, Positive, &["tritone-fourth"]),
    (3, 5, Negative, &["tritone-fourth"]),
    (3, 6, Zero, &["whole-tone trichord"]),
    (3, 7, Positive, &["incomplete minor-seventh chord"]),
    (3, 7, Negative, &["incomplete dominant-seventh chord"]),
    (3, 8, Positive, &["incomplete dominant-seventh chord", "Italian augmented sixth chord"]),
    (3, 8, Negative, &["incomplete half-diminished seventh chord"]),
    (3, 9, Zero, &["quartal trichord"]),
    (3, 10, Zero, &["diminished triad"]),
    (3, 11, Positive, &["minor triad"]),
    (3, 11, Negative, &["major triad"]),
    (3, 12, Zero, &["augmented triad", "equal 3-part octave division"]),
    (4, 1, Zero, &["chromatic tetramirror", "BACH"]),
    (4, 2, Positive, &["major-second tetracluster"]),
    (4, 2, Negative, &["major-second tetracluster"]),
    (4, 3, Zero, &["alternating tetramirror"]),
    (4, 4, Positive, &["minor third tetracluster"]),
    (4, 4, Negative, &["minor third tetracluster"]),
    (4, 5, Positive, &["major third tetracluster"]),
    (4, 5, Negative, &["major third tetracluster"]),
    (4, 6, Zero, &["perfect fourth tetramirror"]),
    (4, 7, Zero, &["Arabian tetramirror"]),
    (4, 8, Zero, &["double-fourth tetramirror"]),
    (4, 9, Zero, &["double tritone tetramirror"]),
    (4, 10, Zero, &["minor tetramirror"]),
    (4, 11, Positive, &["phrygian tetrachord"]),
    (4, 11, Negative, &["lydian tetrachord", "major tetrachord"]),
    (4, 12, Positive, &["harmonic minor tetrachord"]),
    (4, 12, Negative, &["major-third diminished tetrachord"]),
    (4, 13, Positive, &["minor-second diminished tetrachord"]),
    (4, 13, Negative, &["perfect-fourth diminished tetrachord"]),
    (4, 14, Positive, &["major-second minor tetrachord"]),
    (4, 14, Negative, &["perfect-fourth major tetrachord"]),
    (4, 15, Positive, &["all-interval tetrachord"]),
    (4, 15, Negative, &["all-interval tetrachord"]),
    (4, 16, Positive, &["minor-second quartal tetrachord"]),
    (4, 16, Negative, &["tritone quartal tetrachord"]),
    (4, 17, Zero, &["major-minor tetramirror"]),
    (4, 18, Positive, &["major-diminished tetrachord"]),
    (4, 18, Negative, &["minor-diminished tetrachord"]),
    (4, 19, Positive, &["minor-augmented tetrachord"]),
    (4, 19, Negative, &["augmented major tetrachord"]),
    (4, 20, Zero, &["major seventh chord"]),
    (4, 21, Zero, &["whole-tone tetramirror"]),
    (4, 22, Positive, &["major-second major tetrachord"]),
    (4, 22, Negative, &["perfect-fourth minor tetrachord"]),
    (4, 23, Zero, &["quartal tetramirror"]),
    (4, 24, Zero, &["augmented seventh chord"]),
    (4, 25, Zero, &["Messiaen's truncated mode 6", "French augmented sixth chord"]),
    (4, 26, Zero, &["minor seventh chord"]),
    (4, 27, Positive, &["half-diminished seventh chord"]),
    (
        4,
        27,
        Negative,
        &[
            "dominant seventh chord",
            "major minor seventh chord",
            "German augmented sixth chord",
            "Swiss augmented sixth chord",
        ],
    ),
    (4, 28, Zero, &["diminished seventh chord", "equal 4-part octave division"]),
    (4, 29, Positive, &["all-interval tetrachord"]),
    (4, 29, Negative, &["all-interval tetrachord"]),
    (5, 1, Zero, &["chromatic pentamirror"]),
    (5, 2, Positive, &["major-second pentacluster"]),
    (5, 2, Negative, &["major-second pentacluster"]),
    (5, 3, Positive, &["minor-second major pentachord"]),
    (5, 3, Negative, &["Spanish pentacluster"]),
    (5, 4, Positive, &["blues pentacluster"]),
    (5, 4, Negative, &["minor-third pentacluster"]),
    (5, 5, Positive, &["major-third pentacluster"]),
    (5, 5, Negative, &["major-third pentacluster"]),
    (5, 6, Positive, &["Asian pentacluster", "quasi raga Megharanji"]),
    (5, 6, Negative, &["Asian pentacluster"]),
    (5, 7, Positive, &["double pentacluster", "quasi raga Nabhomani"]),
    (5, 7, Negative, &["double pentacluster"]),
    (5, 8, Zero, &["tritone-symmetric pentamirror"]),
    (5, 9, Positive, &["tritone-expanding pentachord"]),
    (5, 9, Negative, &["tritone-contracting pentachord"]),
    (5, 10, Positive, &["alternating pentachord"]),
    (5, 10, Negative, &["alternating pentachord"]),
    (5, 11, Positive, &["center-cluster pentachord"]),
    (5, 11, Negative, &["center-cluster pentachord"]),
    (5, 12, Zero, &["locrian pentachord"]),
    (5, 13, Positive, &["augmented pentacluster"]),
    (5, 13, Negative, &["augmented pentacluster"]),
    (5, 14, Positive, &["double-seconds triple-fourth pentachord"]),
    (5, 14, Negative, &["double-seconds triple-fourth pentachord"]),
    (5, 15, Zero, &["asymmetric pentamirror"]),
    (5, 16, Positive, &["major-minor-diminished pentachord"]),
    (5, 16, Negative, &["major-minor diminished pentachord"]),
    (5, 17, Zero, &["minor-major ninth chord"]),
    (5, 18, Positive, &["Roma (Gypsy) pentachord"]),
    (5, 18, Negative, &["Roma (Gypsy) pentachord"]),
    (5, 19, Positive, &["Javanese pentachord"]),
    (5, 19, Negative, &["Balinese pentachord"]),
    (5, 20, Positive, &["Balinese Pelog pentatonic", "quasi raga Bhupala", "quasi raga Bibhas"]),
    (5, 20, Negative, &["Hirajoshi pentatonic", "Iwato", "Sakura", "quasi raga Saveri"]),
    (
        5,
        21,
        Positive,
        &[
            "major-augmented ninth chord",
            "Syrian pentatonic",
            "quasi raga Megharanji",
        ],
    ),
    (5, 21, Negative, &["Lebanese pentachord", "augmented-minor chord"]),
    (5, 22, Zero, &["Persian pentamirror", "quasi raga Ramkali"]),
    (5, 23, Positive, &["dorian pentachord", "minor pentachord"]),
    (5, 23, Negative, &["major pentachord"]),
    (5, 24, Positive, &["phrygian pentachord"]),
    (5, 24, Negative, &["lydian pentachord"]),
    (5, 25, Positive, &["diminished-major ninth chord"]),
    (5, 25, Negative, &["minor-diminished ninth chord"]),
    (5, 26, Positive, &["diminished-augmented ninth chord"]),
    (5, 26, Negative, &["augmented-diminished ninth chord"]),
    (5, 27, Positive, &["major-ninth chord"]),
    (5, 27, Negative, &["minor-ninth chord"]),
    (5, 28, Positive, &["augmented-sixth pentachord"]),
    (5, 28, Negative, &["Javanese pentatonic", "augmented-sixth pentachord"]),
    (5, 29, Positive, &["Kumoi pentachord"]),
    (5, 29, Negative, &["Kumoi pentachord"]),
    (5, 30, Positive, &["enigmatic pentachord"]),
    (5, 30, Negative, &["enigmatic pentachord", "altered pentatonic"]),
    (5, 31, Positive, &["diminished minor-ninth chord"]),
    (5, 31, Negative, &["flat-ninth pentachord", "quasi raga Ranjaniraga"]),
    (5, 32, Positive, &["Neapolitan pentachord"]),
    (5, 32, Negative, &["Neapolitan pentachord"]),
    (5, 33, Zero, &["whole-tone pentachord"]),
    (
        5,
        34,
        Zero,
        &[
            "dominant-ninth",
            "major-minor",
            "Prometheus pentamirror",
            "dominant pentatonic",
        ],
    ),
    (
        5,
        35,
        Zero,
        &[
            "major pentatonic",
            "black-key scale",
            "blues pentatonic",
            "slendro",
            "quartal pentamirror",
        ],
    ),
    (5, 36, Positive, &["major-seventh pentacluster"]),
    (5, 36, Negative, &["minor-seventh pentacluster"]),
    (5, 37, Zero, &["center-cluster pentamirror"]),
    (5, 38, Positive, &["diminished pentacluster"]),
    (5, 38, Negative, &["diminished pentacluster"]),
    (
        6,
        1,
        Zero,
        &[
            "A all combinatorial (P6, I11, RI5, RI11)",
            "chromatic hexamirror",
            "first-order all-combinatorial",
        ],
    ),
    (6, 2, Positive, &["combinatorial I (I11)"]),
    (6, 2, Negative, &["combinatorial I (I1)"]),
    (6, 4, Zero, &["combinatorial RI (RI6)"]),
    (6, 5, Positive, &["combinatorial I (I11)"]),
    (6, 5, Negative, &["combinatorial I (I3)"]),
    (6, 6, Zero, &["double cluster hexamirror"]),
    (
        6,
        7,
        Zero,
        &[
            "B all combinatorial (P3, P9, I5, R6, R12, R8)",
            "Messiaen's mode 5",
            "second-order all combinatorial",
        ],
    ),
    (6, 8, Zero, &["D all combinatorial (P6, I1, RI7)"]),
    (6, 9, Positive, &["combinatorial I (I11)"]),
    (6, 9, Negative, &["combinatorial I (I3)"]),
    (6, 13, Zero, &["alternating hexamirror", "combinatorial I (I7)"]),
    (6, 14, Positive, &["combinatorial P (P6)"]),
    (6, 14, Negative, &["combinatorial P (P6)"]),
    (6, 15, Positive, &["combinatorial I (I11)"]),
    (6, 15, Negative, &["combinatorial I (I5)"]),
    (6, 16, Positive, &["combinatorial I (I3)"]),
    (6, 16, Negative, &["combinatorial I (I1)", "quasi raga Megha"]),
    (6, 17, Positive, &["all tri-chord hexachord"]),
    (6, 17, Negative, &["all tri-chord hexachord (inverted form)"]),
    (6, 18, Positive, &["combinatorial I (I11)"]),
    (6, 18, Negative, &["combinatorial I (I5)"]),
    (
        6,
        20,
        Zero,
        &[
            "E all combinatorial (P2, P6, P10, I3, I7, R4, R8, RI1, RI5, RI9)",
            "Messiaen's truncated mode 3",
            "Genus tertium",
            "third-order all combinatorial",
        ],
    ),
    (6, 21, Positive, &["combinatorial I (I1)"]),
    (6, 21, Negative, &["combinatorial I (I3)"]),
    (6, 22, Positive, &["combinatorial I (I11)"]),
    (6, 22, Negative, &["combinatorial I (I5)"]),
    (6, 23, Zero, &["combinatorial RI (RI8)", "super-locrian hexamirror"]),
    (6, 24, Negative, &["melodic-minor hexachord"]),
    (6, 25, Positive, &["locrian hexachord"]),
    (6, 25, Negative, &["minor hexachord"]),
    (6, 26, Zero, &["phrygian hexamirror", "combinatorial RI (RI8)"]),
    (6, 27, Positive, &["combinatorial I (I11)"]),
    (6, 27, Negative, &["combinatorial I (I1)", "pyramid hexachord"]),
    (6, 28, Zero, &["double-phrygian hexachord", "combinatorial RI (RI6)"]),
    (6, 29, Zero, &["combinatorial RI (RI9)"]),
    (
        6,
        30,
        Positive,
        &[
            "Messiaen's truncated mode 2",
            "minor-bitonal hexachord",
            "combinatorial R (R6)",
            "combinatorial I (I1, I7)",
        ],
    ),
    (
        6,
        30,
        Negative,
        &[
            "Stravinsky's Petrushka-chord",
            "Messiaen's truncated mode 2",
            "major-bitonal hexachord",
            "combinatorial R (R6)",
            "combinatorial I (I1, I7)",
        ],
    ),
    (6, 31, Positive, &["combinatorial I (I7)"]),
    (6, 31, Negative, &["combinatorial I (I11)"]),
    (
        6,
        32,
        Zero,
        &[
            "Guidonian hexachord",
            "C all combinatorial (P6, I3, RI9)",
            "major hexamirror",
            "quartal hexamirror",
            "first-order all combinatorial",
        ],
    ),
    (6, 33, Positive, &["dorian hexachord", "combinatorial I (I6)"]),
    (6, 33, Negative, &["dominant-eleventh", "lydian hexachord", "combinatorial I (I1)"]),
    (
        6,
        34,
        Positive,
        &[
            "Scriabin's Mystic-chord",
            "Prometheus hexachord",
            "combinatorial I (I11)",
        ],
    ),
    (6, 34, Negative, &["augmented-eleventh", "harmonic hexachord", "combinatorial I (I7)"]),
    (
        6,
        35,
        Zero,
        &[
            "whole tone scale",
            "6 equal part division",
            "F all-combinatorial (P1, P3, P5, P7, P9, P11, I1, I3, I5, I7, I9, I11, R2, R4, R6, R8, R10, RI2, RI4, RI6, RI8, RI10)",
            "Messiaen's mode 1",
            "sixth-order all combinatorial",
        ],
    ),
    (6, 37, Zero, &["combinatorial RI (RI4)"]),
    (6, 38, Zero, &["combinatorial RI (RI3)"]),
    (6, 42, Zero, &["combinatorial RI (RI3)"]),
    (6, 43, Positive, &["complement of all tri-chord hexachord"]),
    (6, 43, Negative, &["complement of all-tri-chord hexachord (inverted form)"]),
    (6, 44, Positive, &["Schoenberg Anagram hexachord"]),
    (6, 44, Negative, &["quasi raga Bauli"]),
    (6, 45, Zero, &["combinatorial RI (RI6)"]),
    (6, 47, Negative, &["blues scale"]),
    (6, 48, Zero, &["combinatorial RI (RI2)"]),
    (6, 49, Zero, &["combinatorial RI (RI4)", "Prometheus Neapolitan mode"]),
    (6, 50, Zero, &["combinatorial RI (RI1)"]),
    (7, 1, Zero, &["chromatic heptamirror"]),
    (7, 16, Positive, &["Debussy's heptatonic"]),
    (7, 20, Positive, &["chromatic phrygian inverse"]),
    (
        7,
        20,
        Negative,
        &[
            "Greek chromatic",
            "chromatic mixolydian",
            "chromatic dorian",
            "quasi raga Pantuvarali",
            "mela Kanakangi",
        ],
    ),
    (7, 21, Negative, &["Roma (Gypsy) hepatonic"]),
    (
        7,
        22,
        Zero,
        &[
            "double harmonic scale",
            "major Roma (Gypsy)",
            "Hungarian minor",
            "double harmonic scale",
            "quasi raga Mayamdavagaula",
        ],
    ),
    (7, 23, Negative, &["tritone major heptachord"]),
    (7, 24, Negative, &["mystic heptachord", "Enigmatic heptatonic"]),
    (7, 27, Negative, &["modified blues"]),
    (7, 30, Positive, &["Neapolitan-minor mode"]),
    (7, 31, Positive, &["alternating heptachord", "Hungarian major mode"]),
    (7, 31, Negative, &["diminished scale", "alternating heptachord"]),
    (
        7,
        32,
        Positive,
        &[
            "harmonic minor scale",
            "harmonic minor collection",
            "Spanish Roma (Gypsy)",
            "mela Kiravani",
        ],
    ),
    (
        7,
        32,
        Negative,
        &[
            "harmonic major scale (inverted)",
            "harmonic minor collection (inverted)",
            "mela Cakravana",
            "quasi raga Ahir Bhairav",
        ],
    ),
    (7, 33, Zero, &["Neapolitan-major mode", "leading-whole-tone mode"]),
    (
        7,
        34,
        Zero,
        &[
            "melodic minor ascending scale",
            "jazz minor",
            "augmented thirteenth heptamirror",
            "harmonic/super-locrian",
        ],
    ),
    (
        7,
        35,
        Zero,
        &[
            "major scale",
            "major diatonic heptachord",
            "natural minor scale",
            "dominant thirteenth",
            "locrian",
            "phrygian",
            "major inverse",
        ],
    ),
    (8, 1, Zero, &["chromatic octamirror"]),
    (8, 9, Zero, &["Messiaen's mode 4"]),
    (8, 11, Negative, &["blues octatonic"]),
    (8, 13, Positive, &["blues octatonic"]),
    (8, 16, Negative, &["enigmatic octachord"]),
    (8, 22, Negative, &["Spanish octatonic scale"]),
    (8, 23, Zero, &["Greek", "quartal octachord", "diatonic octad"]),
    (8, 25, Zero, &["Messiaen's mode 6"]),
    (8, 26, Zero, &["Spanish phrygian", "blues"]),
    (
        8,
        28,
        Zero,
        &[
            "octatonic scale",
            "Messiaen's mode 2",
            "alternating octatonic scale",
            "diminished scale",
        ],
    ),
    (9, 1, Zero, &["chromatic nonamirror"]),
    (9, 7, Positive, &["nonatonic blues"]),
    (9, 11, Negative, &["diminishing nonachord"]),
    (9, 12, Zero, &["Messiaen's mode 3", "Tsjerepnin"]),
    (10, 1, Zero, &["chromatic decamirror"]),
    (10, 5, Zero, &["major-minor mixed"]),
    (10, 6, Zero, &["Messiaen's mode 7"]),
    (11, 1, Zero, &["chromatic undecamirror"]),
    (
        12,
        1,
        Zero,
        &[
            "aggregate",
            "dodecachord",
            "twelve-tone chromatic",
            "chromatic scale",
            "dodecamirror",
        ],
    ),
];
