//! Structural laws of the classification store over the bundled dataset.

use forte_store::store;
use forte_types::{Cardinality, ForteClass, ForteIndex, InversionSign};

#[test]
fn bundled_dataset_has_no_findings() {
    assert!(store().warnings().is_empty(), "{:?}", store().warnings());
}

#[test]
fn every_class_is_either_symmetric_or_a_pair() {
    let store = store();
    for (class, prime) in store.classes() {
        let zero = store.get(class.with_sign(InversionSign::Zero));
        let positive = store.get(class.with_sign(InversionSign::Positive));
        let negative = store.get(class.with_sign(InversionSign::Negative));
        match (zero, positive, negative) {
            (Some(_), None, None) => assert!(!prime.has_distinct_inversion(), "{class}"),
            (None, Some(_), Some(_)) => assert!(prime.has_distinct_inversion(), "{class}"),
            other => panic!("{class} has an invalid layout: {other:?}"),
        }
    }
}

#[test]
fn every_indexed_slot_below_the_bound_is_populated() {
    let store = store();
    for cardinality in Cardinality::all().skip(1) {
        for index in 1..=store.max_forte_index(cardinality, true) {
            let class = ForteClass::new(cardinality, ForteIndex::new(index).unwrap());
            assert!(store.canonical_key(class).is_some(), "{class} missing");
        }
    }
}

#[test]
fn pairs_share_both_vectors() {
    let store = store();
    for (class, _) in store.classes() {
        let (Some(positive), Some(negative)) = (
            store.get(class.with_sign(InversionSign::Positive)),
            store.get(class.with_sign(InversionSign::Negative)),
        ) else {
            continue;
        };
        assert_eq!(
            positive.interval_class_vector(),
            negative.interval_class_vector(),
            "{class}"
        );
        assert_eq!(
            positive.invariance_vector(),
            negative.invariance_vector(),
            "{class}"
        );
        assert_eq!(positive.z_relation(), negative.z_relation(), "{class}");
        assert!(
            negative
                .pitch_classes()
                .is_transposition_of(positive.pitch_classes().invert()),
            "{class}"
        );
    }
}

#[test]
fn reverse_lookup_round_trips() {
    let store = store();
    let mut checked = 0;
    for cardinality in Cardinality::all() {
        for (key, record) in store.members(cardinality) {
            let found = store.reverse_lookup(record.pitch_classes());
            assert_eq!(found, Some(key));
            assert_eq!(
                store.get(key).map(|r| r.pitch_classes()),
                Some(record.pitch_classes())
            );
            checked += 1;
        }
    }
    assert_eq!(checked, 351);
}

#[test]
fn inversion_equivalence_only_merges() {
    let store = store();
    for cardinality in Cardinality::all() {
        assert!(
            store.max_forte_index(cardinality, true) <= store.max_forte_index(cardinality, false),
            "cardinality {cardinality}"
        );
    }
    let hexachords = Cardinality::new(6).unwrap();
    assert_eq!(store.max_forte_index(hexachords, false), 80);
    assert_eq!(store.max_forte_index(hexachords, true), 50);
}

#[test]
fn record_counts_match_bounds() {
    let store = store();
    for cardinality in Cardinality::all().skip(1) {
        assert_eq!(
            store.members(cardinality).count(),
            usize::from(store.max_forte_index(cardinality, false)),
            "cardinality {cardinality}"
        );
    }
    assert_eq!(store.class_count(), 223);
    assert_eq!(store.len(), 351);
}

#[test]
fn dense_index_follows_member_order() {
    let store = store();
    for cardinality in Cardinality::all().skip(1) {
        for (position, (key, _)) in store.members(cardinality).enumerate() {
            let expected = u8::try_from(position + 1).unwrap();
            assert_eq!(store.tn_index(key), Some(expected), "{key}");
            assert_eq!(store.key_for_tn_index(cardinality, expected), Some(key));
        }
    }
}

#[test]
fn recorded_vectors_agree_with_pitch_classes() {
    for (class, record) in store().classes() {
        let pitch_classes = record.pitch_classes();
        assert_eq!(pitch_classes.len(), class.cardinality.get(), "{class}");
        assert_eq!(
            pitch_classes.interval_class_vector(),
            record.interval_class_vector(),
            "{class}"
        );
        assert_eq!(
            record.has_distinct_inversion(),
            !pitch_classes.is_inversionally_symmetric(),
            "{class}"
        );
    }
}
