use std::collections::BTreeMap;

use forte_types::{
    CARDINALITIES, Cardinality, ClassKey, ForteClass, ForteIndex, InversionSign, PitchClassSet,
};

use crate::{RawDataset, RawEntry};

/// An owned dataset that can be assembled or edited at runtime.
///
/// Hosts with their own tables fill one from scratch; tests usually start
/// from [`InMemoryDataset::from_dataset`] and perturb a single row.
#[derive(Debug, Clone)]
pub struct InMemoryDataset {
    entries: Vec<Vec<Option<RawEntry>>>,
    inversion_defaults: BTreeMap<ForteClass, PitchClassSet>,
    tn_indexes: BTreeMap<ClassKey, u8>,
    names: BTreeMap<ClassKey, Vec<String>>,
    max_without: [u8; CARDINALITIES],
    max_with: [u8; CARDINALITIES],
}

impl Default for InMemoryDataset {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDataset {
    /// An empty dataset with every bound at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: vec![Vec::new(); CARDINALITIES],
            inversion_defaults: BTreeMap::new(),
            tn_indexes: BTreeMap::new(),
            names: BTreeMap::new(),
            max_without: [0; CARDINALITIES],
            max_with: [0; CARDINALITIES],
        }
    }

    /// Copy every table out of `source`.
    #[must_use]
    pub fn from_dataset(source: &impl RawDataset) -> Self {
        let mut dataset = Self::new();
        for cardinality in Cardinality::all() {
            let rows = source.entries(cardinality);
            dataset.entries[cardinality.index()] = rows.to_vec();
            dataset.max_without[cardinality.index()] =
                source.max_index_without_inversion_equivalence(cardinality);
            dataset.max_with[cardinality.index()] =
                source.max_index_with_inversion_equivalence(cardinality);

            for (index, row) in rows.iter().enumerate() {
                let (Some(_), Ok(raw)) = (row, u8::try_from(index)) else {
                    continue;
                };
                let Some(forte_index) = ForteIndex::from_raw(raw) else {
                    continue;
                };
                let class = ForteClass::new(cardinality, forte_index);
                if let Some(default) = source.inversion_default(class) {
                    dataset.inversion_defaults.insert(class, default);
                }
                for sign in [InversionSign::Positive, InversionSign::Zero, InversionSign::Negative] {
                    let key = class.with_sign(sign);
                    if let Some(tn_index) = source.tn_index(key) {
                        dataset.tn_indexes.insert(key, tn_index);
                    }
                }
            }
        }
        for key in source.named_keys() {
            let names = source.names(key).into_iter().map(str::to_owned).collect();
            dataset.names.insert(key, names);
        }
        dataset
    }

    /// Place `entry` at `forte_index`, growing the row list as needed.
    /// `None` clears the slot.
    pub fn set_entry(
        &mut self,
        cardinality: Cardinality,
        forte_index: ForteIndex,
        entry: Option<RawEntry>,
    ) -> &mut Self {
        let rows = &mut self.entries[cardinality.index()];
        if rows.len() <= forte_index.index() {
            rows.resize(forte_index.index() + 1, None);
        }
        rows[forte_index.index()] = entry;
        self
    }

    /// `None` removes the recorded default.
    pub fn set_inversion_default(
        &mut self,
        class: ForteClass,
        pitch_classes: Option<PitchClassSet>,
    ) -> &mut Self {
        match pitch_classes {
            Some(set) => self.inversion_defaults.insert(class, set),
            None => self.inversion_defaults.remove(&class),
        };
        self
    }

    pub fn set_tn_index(&mut self, key: ClassKey, tn_index: Option<u8>) -> &mut Self {
        match tn_index {
            Some(index) => self.tn_indexes.insert(key, index),
            None => self.tn_indexes.remove(&key),
        };
        self
    }

    /// An empty list removes the name record.
    pub fn set_names<I, S>(&mut self, key: ClassKey, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            self.names.remove(&key);
        } else {
            self.names.insert(key, names);
        }
        self
    }

    pub fn set_bounds(
        &mut self,
        cardinality: Cardinality,
        without_inversion_equivalence: u8,
        with_inversion_equivalence: u8,
    ) -> &mut Self {
        self.max_without[cardinality.index()] = without_inversion_equivalence;
        self.max_with[cardinality.index()] = with_inversion_equivalence;
        self
    }
}

impl RawDataset for InMemoryDataset {
    fn entries(&self, cardinality: Cardinality) -> &[Option<RawEntry>] {
        &self.entries[cardinality.index()]
    }

    fn inversion_default(&self, class: ForteClass) -> Option<PitchClassSet> {
        self.inversion_defaults.get(&class).copied()
    }

    fn tn_index(&self, key: ClassKey) -> Option<u8> {
        self.tn_indexes.get(&key).copied()
    }

    fn names(&self, key: ClassKey) -> Vec<&str> {
        self.names
            .get(&key)
            .map(|names| names.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    fn named_keys(&self) -> Vec<ClassKey> {
        self.names.keys().copied().collect()
    }

    fn max_index_without_inversion_equivalence(&self, cardinality: Cardinality) -> u8 {
        self.max_without[cardinality.index()]
    }

    fn max_index_with_inversion_equivalence(&self, cardinality: Cardinality) -> u8 {
        self.max_with[cardinality.index()]
    }
}
