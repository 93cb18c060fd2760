//! Conventional names attached to keys.

use forte_store::{ClassificationStore, ConstructionWarning};
use forte_tables::{BundledDataset, InMemoryDataset};
use forte_types::{Cardinality, ForteError};

use crate::common::{classifier, key};

#[test]
fn named_members_differ_by_direction() {
    let classifier = classifier();
    assert_eq!(classifier.names(key("3-11A")).unwrap(), ["minor triad"]);
    assert_eq!(classifier.names(key("3-11B")).unwrap(), ["major triad"]);
    assert_eq!(
        classifier.names(key("3-12")).unwrap(),
        ["augmented triad", "equal 3-part octave division"]
    );
}

#[test]
fn unnamed_key_has_no_names() {
    let classifier = classifier();
    assert!(classifier.names(key("6-3A")).unwrap().is_empty());
    assert!(classifier.names(key("6-3B")).unwrap().is_empty());
    assert!(classifier.names(key("6-10A")).unwrap().is_empty());
    assert!(!classifier.names(key("4-27B")).unwrap().is_empty());
}

#[test]
fn every_key_without_a_name_record_yields_empty_names() {
    let classifier = classifier();
    let mut unnamed = 0;
    for cardinality in Cardinality::all() {
        for (member, _) in classifier.members(cardinality) {
            let names = classifier.names(member).unwrap();
            assert_eq!(names, classifier.store().names(member), "{member}");
            if names.is_empty() {
                unnamed += 1;
            }
        }
    }
    assert_eq!(unnamed, 351 - 229);
}

#[test]
fn names_of_unknown_key_fail() {
    let missing = key("3-11");
    assert_eq!(
        classifier().names(missing),
        Err(ForteError::UnknownKey(missing))
    );
}

#[test]
fn names_for_a_missing_key_are_dropped() {
    let mut dataset = InMemoryDataset::from_dataset(&BundledDataset);
    dataset.set_names(key("3-11"), ["triad"]);

    let store = ClassificationStore::build(&dataset);
    assert_eq!(
        store.warnings(),
        [ConstructionWarning::NamesForUnknownKey(key("3-11"))]
    );
    assert!(store.names(key("3-11")).is_empty());
    assert_eq!(store.names(key("3-11B")), ["major triad"]);
}
