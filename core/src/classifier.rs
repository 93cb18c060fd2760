use forte_store::ClassificationStore;
use forte_types::{
    Cardinality, ClassKey, EquivalenceMode, ForteClass, ForteError, ForteIndex,
    IntervalClassVector, InvarianceVector, InversionSign, PitchClassSet, TniStructure,
};

use crate::classification::{Classification, Operation};

/// Read-only queries over a [`ClassificationStore`].
///
/// Every failure is explicit: an index beyond the dataset bounds is
/// `OutOfRange`, a well-formed key with no record is `NotFound` (from
/// lookups) or `UnknownKey` (from attribute accessors), and a set with no
/// class is `NotClassifiable`.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    store: &'a ClassificationStore,
}

impl Classifier<'static> {
    /// Queries against the process-wide store over the bundled dataset.
    #[must_use]
    pub fn global() -> Self {
        Self::new(forte_store::store())
    }
}

impl<'a> Classifier<'a> {
    #[must_use]
    pub const fn new(store: &'a ClassificationStore) -> Self {
        Self { store }
    }

    #[must_use]
    pub const fn store(&self) -> &'a ClassificationStore {
        self.store
    }

    /// Classify `pitch_classes` under `mode`.
    ///
    /// The matched key is the directional member the set belongs to, so
    /// `{0,4,7}` is `3-11B` in both modes. TN mode reports that member's own
    /// form; TnI mode reports the class's prime form and the operation
    /// (possibly inverting) that reaches the input from it.
    pub fn classify(
        &self,
        pitch_classes: PitchClassSet,
        mode: EquivalenceMode,
    ) -> Result<Classification, ForteError> {
        let not_classifiable = || ForteError::NotClassifiable(pitch_classes);
        if pitch_classes.is_empty() {
            return Err(not_classifiable());
        }

        let key = self.resolve(pitch_classes).ok_or_else(not_classifiable)?;
        let source = match mode {
            EquivalenceMode::Tn => key,
            EquivalenceMode::Tni => self
                .store
                .canonical_key(key.class())
                .ok_or_else(not_classifiable)?,
        };
        let record = self.store.get(source).ok_or_else(not_classifiable)?;
        let prime_form = self.representative(source).ok_or_else(not_classifiable)?;
        let operation =
            Operation::between(prime_form, pitch_classes).ok_or_else(not_classifiable)?;

        tracing::trace!(%pitch_classes, %key, %operation, "Classified");
        Ok(Classification {
            pitch_classes,
            key,
            mode,
            prime_form,
            structure: record.with_pitch_classes(prime_form),
            operation,
        })
    }

    /// The key whose record is a transposition of `pitch_classes`.
    ///
    /// An inverted member whose recorded set is the empty placeholder is not
    /// in the reverse index; it is found through its prime member instead.
    fn resolve(&self, pitch_classes: PitchClassSet) -> Option<ClassKey> {
        if let Some(key) = self.store.transposition_class(pitch_classes) {
            return Some(key);
        }
        let mirrored = self.store.transposition_class(pitch_classes.invert())?;
        let paired = mirrored.opposite();
        let is_placeholder = paired != mirrored
            && self
                .store
                .get(paired)
                .is_some_and(|record| record.pitch_classes().is_empty());
        is_placeholder.then_some(paired)
    }

    /// The recorded set of `key`, or for a placeholder the inversion of its
    /// prime member brought to transpositional normal form.
    fn representative(&self, key: ClassKey) -> Option<PitchClassSet> {
        let recorded = self.store.get(key)?.pitch_classes();
        if !recorded.is_empty() || key.sign != InversionSign::Negative {
            return Some(recorded);
        }
        let prime = self.store.get(key.opposite())?.pitch_classes();
        Some(prime.invert().transpositional_normal().0)
    }

    fn check_range(&self, class: ForteClass) -> Result<(), ForteError> {
        let max = self.store.max_forte_index(class.cardinality, true);
        if class.forte_index.get() > max {
            return Err(ForteError::OutOfRange {
                what: "Forte index",
                value: class.forte_index.get().into(),
                min: 1,
                max: max.into(),
            });
        }
        Ok(())
    }

    /// The record for `key`.
    pub fn lookup(&self, key: ClassKey) -> Result<&'a TniStructure, ForteError> {
        self.check_range(key.class())?;
        self.store.get(key).ok_or(ForteError::NotFound(key))
    }

    fn known(&self, key: ClassKey) -> Result<&'a TniStructure, ForteError> {
        self.store.get(key).ok_or(ForteError::UnknownKey(key))
    }

    pub fn interval_class_vector(&self, key: ClassKey) -> Result<IntervalClassVector, ForteError> {
        Ok(self.known(key)?.interval_class_vector())
    }

    pub fn invariance_vector(&self, key: ClassKey) -> Result<InvarianceVector, ForteError> {
        Ok(self.known(key)?.invariance_vector())
    }

    /// The Z-partner's prime-member key and full record, or `None` when the
    /// class has no partner.
    pub fn z_relation(
        &self,
        key: ClassKey,
    ) -> Result<Option<(ClassKey, &'a TniStructure)>, ForteError> {
        let Some(partner) = self.known(key)?.z_relation() else {
            return Ok(None);
        };
        let class = ForteClass::new(key.cardinality, partner);
        let partner_key = self
            .store
            .canonical_key(class)
            .ok_or(ForteError::NotFound(class.with_sign(InversionSign::Zero)))?;
        let record = self
            .store
            .get(partner_key)
            .ok_or(ForteError::NotFound(partner_key))?;
        Ok(Some((partner_key, record)))
    }

    /// Recorded names, possibly none. An unknown key is an error, not an
    /// empty list.
    pub fn names(&self, key: ClassKey) -> Result<&'a [String], ForteError> {
        self.known(key)?;
        Ok(self.store.names(key))
    }

    /// `3-11B`, `4-Z15A`, `6-Z17`: Forte index with a `Z` for classes that
    /// have a Z-partner, then the member suffix.
    pub fn forte_name(&self, key: ClassKey) -> Result<String, ForteError> {
        let record = self.known(key)?;
        Ok(format_forte_name(key.class(), record, key.sign.suffix()))
    }

    /// Like [`forte_name`](Self::forte_name) without the member suffix.
    pub fn forte_class_name(&self, class: ForteClass) -> Result<String, ForteError> {
        let key = self.canonical(class)?;
        let record = self.known(key)?;
        Ok(format_forte_name(class, record, ""))
    }

    fn canonical(&self, class: ForteClass) -> Result<ClassKey, ForteError> {
        self.check_range(class)?;
        self.store
            .canonical_key(class)
            .ok_or(ForteError::NotFound(class.with_sign(InversionSign::Zero)))
    }

    /// Pitch classes of the class's prime member.
    pub fn prime_form(&self, class: ForteClass) -> Result<PitchClassSet, ForteError> {
        let key = self.canonical(class)?;
        self.representative(key).ok_or(ForteError::NotFound(key))
    }

    /// Pitch classes recorded for `key` itself; for a `Negative` key this is
    /// the inverted member.
    pub fn transposed_normal_form(&self, key: ClassKey) -> Result<PitchClassSet, ForteError> {
        self.known(key)?;
        self.representative(key).ok_or(ForteError::UnknownKey(key))
    }

    /// `[Zero]` for a symmetric class, `[Negative, Positive]` for a pair.
    pub fn inversions_available(
        &self,
        cardinality: Cardinality,
        forte_index: ForteIndex,
    ) -> Result<&'static [InversionSign], ForteError> {
        let class = ForteClass::new(cardinality, forte_index);
        self.check_range(class)?;
        self.store
            .signs(class)
            .ok_or(ForteError::NotFound(class.with_sign(InversionSign::Zero)))
    }

    /// Every class, of any cardinality, with this interval content.
    ///
    /// More than one result means the classes are Z-related.
    #[must_use]
    pub fn classes_with_interval_class_vector(
        &self,
        interval_class_vector: IntervalClassVector,
    ) -> Vec<ForteClass> {
        self.store
            .classes()
            .filter(|(_, record)| record.interval_class_vector() == interval_class_vector)
            .map(|(class, _)| class)
            .collect()
    }

    /// Every record of one cardinality, prime members before inversions.
    pub fn members(
        &self,
        cardinality: Cardinality,
    ) -> impl Iterator<Item = (ClassKey, &'a TniStructure)> + use<'a> {
        self.store.members(cardinality)
    }

    pub fn tn_index(&self, key: ClassKey) -> Result<u8, ForteError> {
        self.known(key)?;
        self.store.tn_index(key).ok_or(ForteError::NotFound(key))
    }

    pub fn key_for_tn_index(
        &self,
        cardinality: Cardinality,
        tn_index: u8,
    ) -> Result<ClassKey, ForteError> {
        let max = self.store.max_forte_index(cardinality, false);
        if tn_index == 0 || tn_index > max {
            return Err(ForteError::OutOfRange {
                what: "TN index",
                value: tn_index.into(),
                min: 1,
                max: max.into(),
            });
        }
        self.store
            .key_for_tn_index(cardinality, tn_index)
            .ok_or_else(|| ForteError::InvalidDataset {
                reason: format!("no key at TN index {tn_index} of cardinality {cardinality}"),
            })
    }

    #[must_use]
    pub fn max_forte_index(&self, cardinality: Cardinality, inversion_equivalent: bool) -> u8 {
        self.store.max_forte_index(cardinality, inversion_equivalent)
    }
}

fn format_forte_name(class: ForteClass, record: &TniStructure, suffix: &str) -> String {
    let z = if record.z_relation().is_some() { "Z" } else { "" };
    format!("{}-{z}{}{suffix}", class.cardinality, class.forte_index)
}

#[cfg(test)]
mod tests {
    use forte_store::ClassificationStore;
    use forte_tables::{BundledDataset, InMemoryDataset};
    use forte_types::{
        Cardinality, ClassKey, EquivalenceMode, ForteClass, ForteError, ForteIndex, InversionSign,
        PitchClassSet,
    };

    use super::Classifier;

    fn key(text: &str) -> ClassKey {
        text.parse().unwrap()
    }

    fn class(c: u8, f: u8) -> ForteClass {
        ForteClass::new(Cardinality::new(c).unwrap(), ForteIndex::new(f).unwrap())
    }

    #[test]
    fn major_triad_in_both_modes() {
        let classifier = Classifier::global();
        let major = PitchClassSet::literal(&[2, 6, 9]);

        let tn = classifier.classify(major, EquivalenceMode::Tn).unwrap();
        assert_eq!(tn.key, key("3-11B"));
        assert_eq!(tn.prime_form, PitchClassSet::literal(&[0, 4, 7]));
        assert_eq!(tn.operation.to_string(), "T2");

        let tni = classifier.classify(major, EquivalenceMode::Tni).unwrap();
        assert_eq!(tni.key, key("3-11B"));
        assert_eq!(tni.prime_form, PitchClassSet::literal(&[0, 3, 7]));
        assert!(tni.operation.inverted);
        assert_eq!(tni.operation.apply(tni.prime_form), major);
        assert_eq!(tni.structure.pitch_classes(), tni.prime_form);
    }

    #[test]
    fn empty_set_is_not_classifiable() {
        let err = Classifier::global()
            .classify(PitchClassSet::EMPTY, EquivalenceMode::Tni)
            .unwrap_err();
        assert_eq!(err, ForteError::NotClassifiable(PitchClassSet::EMPTY));
    }

    #[test]
    fn aggregate_classifies() {
        let result = Classifier::global()
            .classify(PitchClassSet::AGGREGATE, EquivalenceMode::Tn)
            .unwrap();
        assert_eq!(result.key, key("12-1"));
    }

    #[test]
    fn lookup_failures_are_distinct() {
        let classifier = Classifier::global();
        assert!(matches!(
            classifier.lookup(key("3-13")),
            Err(ForteError::OutOfRange { max: 12, .. })
        ));
        assert_eq!(
            classifier.lookup(key("3-12A")),
            Err(ForteError::NotFound(key("3-12A")))
        );
        assert_eq!(
            classifier.interval_class_vector(key("3-12A")),
            Err(ForteError::UnknownKey(key("3-12A")))
        );
    }

    #[test]
    fn forte_names() {
        let classifier = Classifier::global();
        assert_eq!(classifier.forte_name(key("3-11B")).unwrap(), "3-11B");
        assert_eq!(classifier.forte_name(key("4-15A")).unwrap(), "4-Z15A");
        assert_eq!(classifier.forte_name(key("6-17A")).unwrap(), "6-Z17A");
        assert_eq!(classifier.forte_class_name(class(4, 29)).unwrap(), "4-Z29");
        assert_eq!(classifier.forte_class_name(class(3, 12)).unwrap(), "3-12");
    }

    #[test]
    fn inversions_available_by_symmetry() {
        let classifier = Classifier::global();
        let trichords = Cardinality::new(3).unwrap();
        assert_eq!(
            classifier
                .inversions_available(trichords, ForteIndex::new(11).unwrap())
                .unwrap(),
            &[InversionSign::Negative, InversionSign::Positive]
        );
        assert_eq!(
            classifier
                .inversions_available(trichords, ForteIndex::new(12).unwrap())
                .unwrap(),
            &[InversionSign::Zero]
        );
        assert!(matches!(
            classifier.inversions_available(trichords, ForteIndex::new(19).unwrap()),
            Err(ForteError::OutOfRange { .. })
        ));
    }

    #[test]
    fn names_distinguish_empty_from_unknown() {
        let classifier = Classifier::global();
        assert_eq!(classifier.names(key("3-11B")).unwrap(), ["major triad"]);
        assert_eq!(
            classifier.names(key("3-11")),
            Err(ForteError::UnknownKey(key("3-11")))
        );
    }

    #[test]
    fn tn_index_round_trip() {
        let classifier = Classifier::global();
        let trichords = Cardinality::new(3).unwrap();
        assert_eq!(classifier.tn_index(key("3-11A")).unwrap(), 17);
        assert_eq!(classifier.key_for_tn_index(trichords, 17).unwrap(), key("3-11A"));
        assert!(matches!(
            classifier.key_for_tn_index(trichords, 20),
            Err(ForteError::OutOfRange { max: 19, .. })
        ));
    }

    #[test]
    fn placeholder_inversion_still_classifies() {
        let mut dataset = InMemoryDataset::from_dataset(&BundledDataset);
        dataset.set_inversion_default(class(3, 11), None);
        let store = ClassificationStore::build(&dataset);
        let classifier = Classifier::new(&store);

        let major = PitchClassSet::literal(&[4, 8, 11]);
        let tn = classifier.classify(major, EquivalenceMode::Tn).unwrap();
        assert_eq!(tn.key, key("3-11B"));
        assert_eq!(tn.prime_form, PitchClassSet::literal(&[0, 4, 7]));
        assert_eq!(tn.operation.apply(tn.prime_form), major);

        let tni = classifier.classify(major, EquivalenceMode::Tni).unwrap();
        assert_eq!(tni.key, key("3-11B"));
        assert_eq!(tni.prime_form, PitchClassSet::literal(&[0, 3, 7]));

        assert_eq!(
            classifier.transposed_normal_form(key("3-11B")).unwrap(),
            PitchClassSet::literal(&[0, 4, 7])
        );
    }
}
