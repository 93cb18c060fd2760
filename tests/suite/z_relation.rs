//! Z-related classes: shared interval content, distinct set classes.

use forte_types::{Cardinality, ForteError, IntervalClassVector, InversionSign};

use crate::common::{class, classifier, key, set};

#[test]
fn partners_share_vectors_but_not_classes() {
    let classifier = classifier();
    let store = classifier.store();
    let mut pairs = 0;
    for (forte_class, record) in store.classes() {
        let origin = store.canonical_key(forte_class).unwrap();
        let Some((partner, partner_record)) = classifier.z_relation(origin).unwrap() else {
            continue;
        };
        pairs += 1;
        assert_ne!(partner.class(), forte_class);
        assert_eq!(partner.cardinality, forte_class.cardinality);
        assert_eq!(
            partner_record.interval_class_vector(),
            record.interval_class_vector(),
            "{forte_class}"
        );
        assert!(
            !partner_record
                .pitch_classes()
                .is_tni_related(record.pitch_classes()),
            "{forte_class} and {partner}"
        );

        let (back, _) = classifier.z_relation(partner).unwrap().unwrap();
        assert_eq!(back.class(), forte_class);
    }
    // 23 Z-pairs, each seen from both ends.
    assert_eq!(pairs, 46);
}

#[test]
fn z_partner_resolves_to_canonical_member() {
    let classifier = classifier();
    for origin in ["6-17A", "6-17B"] {
        let (partner, record) = classifier.z_relation(key(origin)).unwrap().unwrap();
        assert_eq!(partner, key("6-43A"));
        assert_eq!(record.pitch_classes(), set(&[0, 1, 2, 5, 6, 8]));
    }
    assert_eq!(classifier.forte_name(key("6-17A")).unwrap(), "6-Z17A");
    assert_eq!(classifier.forte_class_name(class("6-43A")).unwrap(), "6-Z43");
    assert_eq!(
        classifier.interval_class_vector(key("6-17B")).unwrap(),
        IntervalClassVector::new([3, 2, 2, 3, 3, 2])
    );
}

#[test]
fn non_z_class_has_no_partner() {
    let classifier = classifier();
    assert_eq!(classifier.z_relation(key("3-11A")).unwrap(), None);
    assert_eq!(classifier.z_relation(key("6-35")).unwrap(), None);
}

#[test]
fn z_relation_of_unknown_key_fails() {
    let missing = key("3-11A").class().with_sign(InversionSign::Zero);
    assert_eq!(
        classifier().z_relation(missing),
        Err(ForteError::UnknownKey(missing))
    );
}

#[test]
fn all_interval_tetrachords_by_vector() {
    let classifier = classifier();
    let classes = classifier.classes_with_interval_class_vector(IntervalClassVector::new([1; 6]));
    assert_eq!(classes, vec![class("4-15A"), class("4-29A")]);

    let tetrachords = Cardinality::new(4).unwrap();
    assert!(
        classes
            .iter()
            .all(|forte_class| forte_class.cardinality == tetrachords)
    );
    assert!(
        classifier
            .classes_with_interval_class_vector(IntervalClassVector::new([9; 6]))
            .is_empty()
    );
}
