//! Consistency checks run once the store is assembled.
//!
//! Each check compares what the dataset records against what the pitch
//! classes themselves imply. Cardinality 0 is a placeholder slot and is
//! exempt from the bound checks.

use forte_types::{Cardinality, ForteClass, InversionSign, TniStructure};

use crate::table::ClassificationStore;
use crate::warning::{ConstructionWarning, Findings};

pub(crate) fn check(store: &ClassificationStore, findings: &mut Findings) {
    for (class, prime) in store.classes() {
        check_class(store, class, prime, findings);
    }
    for cardinality in Cardinality::all().skip(1) {
        check_bounds(store, cardinality, findings);
    }
}

fn check_class(
    store: &ClassificationStore,
    class: ForteClass,
    prime: &TniStructure,
    findings: &mut Findings,
) {
    let pitch_classes = prime.pitch_classes();
    if pitch_classes.len() != class.cardinality.get() {
        let sign = if prime.has_distinct_inversion() {
            InversionSign::Positive
        } else {
            InversionSign::Zero
        };
        findings.push(ConstructionWarning::CardinalityMismatch {
            key: class.with_sign(sign),
            pitch_classes,
        });
    }

    let computed = pitch_classes.interval_class_vector();
    if computed != prime.interval_class_vector() {
        findings.push(ConstructionWarning::IntervalVectorMismatch {
            class,
            recorded: prime.interval_class_vector(),
            computed,
        });
    }

    if prime.has_distinct_inversion() == pitch_classes.is_inversionally_symmetric() {
        findings.push(ConstructionWarning::SymmetryMismatch {
            class,
            recorded_distinct: prime.has_distinct_inversion(),
        });
    }

    if let Some(inverted) = store.get(class.with_sign(InversionSign::Negative)) {
        let inverted = inverted.pitch_classes();
        // An empty set is the missing-default placeholder, already reported.
        if !inverted.is_empty() && !inverted.is_transposition_of(pitch_classes.invert()) {
            findings.push(ConstructionWarning::InvertedFormMismatch {
                class,
                pitch_classes: inverted,
            });
        }
    }

    if let Some(partner) = prime.z_relation() {
        let partner_record = store
            .canonical_key(ForteClass::new(class.cardinality, partner))
            .and_then(|key| store.get(key));
        match partner_record {
            None => findings.push(ConstructionWarning::DanglingZRelation { class, partner }),
            Some(record) if record.interval_class_vector() != prime.interval_class_vector() => {
                findings.push(ConstructionWarning::ZRelationVectorMismatch { class, partner });
            }
            Some(_) => {}
        }
    }
}

fn check_bounds(store: &ClassificationStore, cardinality: Cardinality, findings: &mut Findings) {
    let with = store.max_forte_index(cardinality, true);
    let without = store.max_forte_index(cardinality, false);
    if with > without {
        findings.push(ConstructionWarning::InvertedBounds {
            cardinality,
            with,
            without,
        });
    }

    let classes: Vec<ForteClass> = store
        .classes()
        .map(|(class, _)| class)
        .filter(|class| class.cardinality == cardinality)
        .collect();
    for class in &classes {
        if class.forte_index.get() > with {
            findings.push(ConstructionWarning::IndexOverflow {
                cardinality,
                forte_index: class.forte_index.index(),
                max: with,
            });
        }
    }
    if classes.len() != usize::from(with) {
        findings.push(ConstructionWarning::BoundMismatch {
            cardinality,
            bound: "with inversion equivalence",
            recorded: with,
            counted: classes.len(),
        });
    }

    let members = store.members(cardinality).count();
    if members != usize::from(without) {
        findings.push(ConstructionWarning::BoundMismatch {
            cardinality,
            bound: "without inversion equivalence",
            recorded: without,
            counted: members,
        });
    }
}
