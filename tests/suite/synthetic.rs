//! Stores built from hand-assembled datasets.

use forte_core::{Classifier, Operation};
use forte_store::{ClassificationStore, ConstructionWarning};
use forte_tables::{InMemoryDataset, RawEntry};
use forte_types::{Cardinality, EquivalenceMode, ForteError, ForteIndex, PitchClassSet};

use crate::common::{key, set};

/// A single trichord class, `{0,3,7}` and its inversion, at Forte index 1.
fn triad_dataset() -> InMemoryDataset {
    let trichords = Cardinality::new(3).unwrap();
    let index = ForteIndex::new(1).unwrap();
    let mut dataset = InMemoryDataset::new();
    dataset
        .set_entry(
            trichords,
            index,
            Some(RawEntry::new(
                &[0, 3, 7],
                [0, 0, 1, 1, 1, 0],
                [1, 0, 0, 0, 1, 0, 0, 0],
                0,
            )),
        )
        .set_inversion_default(key("3-1A").class(), Some(set(&[0, 4, 7])))
        .set_tn_index(key("3-1A"), Some(1))
        .set_tn_index(key("3-1B"), Some(2))
        .set_names(key("3-1B"), ["major triad"])
        .set_bounds(trichords, 2, 1);
    dataset
}

#[test]
fn minimal_dataset_builds_cleanly() {
    let store = ClassificationStore::build_strict(&triad_dataset()).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.class_count(), 1);

    let classifier = Classifier::new(&store);
    let result = classifier
        .classify(set(&[2, 6, 9]), EquivalenceMode::Tni)
        .unwrap();
    assert_eq!(result.key, key("3-1B"));
    assert_eq!(result.prime_form, set(&[0, 3, 7]));
    assert_eq!(result.operation.to_string(), "T9I");
    assert_eq!(classifier.names(result.key).unwrap(), ["major triad"]);
    assert_eq!(classifier.key_for_tn_index(result.key.cardinality, 2), Ok(key("3-1B")));
}

#[test]
fn sets_outside_the_dataset_are_not_classifiable() {
    let store = ClassificationStore::build(&triad_dataset());
    let classifier = Classifier::new(&store);
    let cluster = set(&[0, 1, 2]);
    assert_eq!(
        classifier.classify(cluster, EquivalenceMode::Tn),
        Err(ForteError::NotClassifiable(cluster))
    );
    assert!(matches!(
        classifier.lookup(key("3-2A")),
        Err(ForteError::OutOfRange { max: 1, .. })
    ));
}

#[test]
fn missing_inversion_default_falls_back_to_the_prime_member() {
    let mut dataset = triad_dataset();
    dataset.set_inversion_default(key("3-1A").class(), None);

    let store = ClassificationStore::build(&dataset);
    assert_eq!(
        store.warnings(),
        [ConstructionWarning::MissingInversionDefault(key("3-1A").class())]
    );
    assert_eq!(
        store.get(key("3-1B")).map(|record| record.pitch_classes()),
        Some(PitchClassSet::EMPTY)
    );
    assert_eq!(store.reverse_lookup(set(&[0, 4, 7])), None);

    let classifier = Classifier::new(&store);
    let tn = classifier
        .classify(set(&[0, 4, 7]), EquivalenceMode::Tn)
        .unwrap();
    assert_eq!(tn.key, key("3-1B"));
    assert_eq!(tn.prime_form, set(&[0, 4, 7]));
    assert_eq!(tn.operation, Operation::IDENTITY);

    let tni = classifier
        .classify(set(&[0, 4, 7]), EquivalenceMode::Tni)
        .unwrap();
    assert_eq!(tni.key, key("3-1B"));
    assert_eq!(tni.prime_form, set(&[0, 3, 7]));
    assert_eq!(tni.operation.to_string(), "T7I");

    assert_eq!(
        classifier.transposed_normal_form(key("3-1B")),
        Ok(set(&[0, 4, 7]))
    );
    assert!(matches!(
        ClassificationStore::build_strict(&dataset),
        Err(ForteError::InvalidDataset { .. })
    ));
}

#[test]
fn duplicate_rows_collide() {
    let diads = Cardinality::new(2).unwrap();
    let row = RawEntry::new(&[0, 1], [1, 0, 0, 0, 0, 0], [1, 1, 0, 0, 9, 9, 8, 8], 0);
    let mut dataset = InMemoryDataset::new();
    dataset
        .set_entry(diads, ForteIndex::new(1).unwrap(), Some(row))
        .set_entry(diads, ForteIndex::new(2).unwrap(), Some(row))
        .set_tn_index(key("2-1"), Some(1))
        .set_tn_index(key("2-2"), Some(2))
        .set_bounds(diads, 2, 2);

    let store = ClassificationStore::build(&dataset);
    assert!(store.warnings().contains(&ConstructionWarning::Collision {
        pitch_classes: set(&[0, 1]),
        kept: key("2-1"),
        rejected: key("2-2"),
    }));
    assert_eq!(store.reverse_lookup(set(&[0, 1])), Some(key("2-1")));

    assert_eq!(
        ClassificationStore::build_strict(&dataset).unwrap_err(),
        ForteError::ConstructionCollision {
            pitch_classes: set(&[0, 1]),
            kept: key("2-1"),
            rejected: key("2-2"),
        }
    );
}
