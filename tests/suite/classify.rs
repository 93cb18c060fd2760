//! Classification laws checked over every non-empty pitch-class set.

use forte_core::{Operation, classify};
use forte_types::{EquivalenceMode, ForteError, InversionSign, PitchClassSet};

use crate::common::{all_sets, apply, classifier, key, operations, set};

#[test]
fn every_set_classifies_in_both_modes() {
    let classifier = classifier();
    for pitch_classes in all_sets() {
        for mode in [EquivalenceMode::Tn, EquivalenceMode::Tni] {
            let result = classifier
                .classify(pitch_classes, mode)
                .unwrap_or_else(|err| panic!("{pitch_classes} under {mode}: {err}"));
            assert_eq!(result.pitch_classes, pitch_classes);
            assert_eq!(result.mode, mode);
            assert_eq!(result.key.cardinality, pitch_classes.cardinality());
            assert_eq!(
                result.operation.apply(result.prime_form),
                pitch_classes,
                "{pitch_classes} under {mode}"
            );
            assert_eq!(result.structure.pitch_classes(), result.prime_form);
        }
    }
}

#[test]
fn tni_result_is_invariant_under_all_operations() {
    let classifier = classifier();
    for pitch_classes in all_sets() {
        let expected = classifier
            .classify(pitch_classes, EquivalenceMode::Tni)
            .unwrap();
        for operation in operations() {
            let image = apply(pitch_classes, operation);
            let result = classifier.classify(image, EquivalenceMode::Tni).unwrap();
            assert_eq!(result.class(), expected.class(), "{image}");
            assert_eq!(result.prime_form, expected.prime_form, "{image}");
            assert_eq!(
                result.structure.interval_class_vector(),
                expected.structure.interval_class_vector()
            );
        }
    }
}

#[test]
fn tn_result_is_invariant_under_transposition() {
    let classifier = classifier();
    for pitch_classes in all_sets() {
        let expected = classifier
            .classify(pitch_classes, EquivalenceMode::Tn)
            .unwrap();
        for n in 1..12 {
            let result = classifier
                .classify(pitch_classes.transpose(n), EquivalenceMode::Tn)
                .unwrap();
            assert_eq!(result.key, expected.key);
            assert_eq!(result.prime_form, expected.prime_form);
            assert!(!result.operation.inverted);
        }
    }
}

#[test]
fn tn_inversion_lands_on_the_opposite_member() {
    let classifier = classifier();
    for pitch_classes in all_sets() {
        let original = classifier
            .classify(pitch_classes, EquivalenceMode::Tn)
            .unwrap();
        let inverted = classifier
            .classify(pitch_classes.invert(), EquivalenceMode::Tn)
            .unwrap();
        assert_eq!(inverted.key, original.key.opposite(), "{pitch_classes}");
        if original.key.sign == InversionSign::Zero {
            assert_eq!(inverted.prime_form, original.prime_form);
        }
    }
}

#[test]
fn major_and_minor_triads_share_a_class() {
    let major = set(&[0, 4, 7]);
    let minor = set(&[0, 3, 7]);

    let tn = classify(major, EquivalenceMode::Tn).unwrap();
    assert_eq!(tn.key, key("3-11B"));
    assert_eq!(tn.prime_form, major);
    assert_eq!(tn.operation, Operation::IDENTITY);

    let tni = classify(major, EquivalenceMode::Tni).unwrap();
    assert_eq!(tni.key, key("3-11B"));
    assert_eq!(tni.prime_form, minor);
    assert_eq!(tni.operation.to_string(), "T7I");

    for mode in [EquivalenceMode::Tn, EquivalenceMode::Tni] {
        let result = classify(minor, mode).unwrap();
        assert_eq!(result.key, key("3-11A"));
        assert_eq!(result.prime_form, minor);
        assert_eq!(result.operation, Operation::IDENTITY);
    }
}

#[test]
fn symmetric_sets_never_need_inversion() {
    let classifier = classifier();
    for pitch_classes in all_sets().filter(|s| s.is_inversionally_symmetric()) {
        let result = classifier
            .classify(pitch_classes, EquivalenceMode::Tni)
            .unwrap();
        assert_eq!(result.key.sign, InversionSign::Zero, "{pitch_classes}");
        assert!(!result.operation.inverted, "{pitch_classes}");
    }
}

#[test]
fn empty_set_is_not_classifiable() {
    let empty = PitchClassSet::default();
    assert_eq!(
        classify(empty, EquivalenceMode::Tni),
        Err(ForteError::NotClassifiable(empty))
    );
}

#[test]
fn whole_tone_scale_is_six_thirty_five() {
    let whole_tone = set(&[1, 3, 5, 7, 9, 11]);
    let result = classify(whole_tone, EquivalenceMode::Tni).unwrap();
    assert_eq!(classifier().forte_name(result.key).unwrap(), "6-35");
    assert_eq!(result.prime_form, set(&[0, 2, 4, 6, 8, 10]));
    assert_eq!(result.operation.to_string(), "T1");
}
