//! The classification store: dense key table plus reverse indexes.

use std::collections::BTreeMap;
use std::fmt;

use forte_tables::RawDataset;
use forte_types::{
    CARDINALITIES, Cardinality, ClassKey, ForteClass, ForteError, ForteIndex, InversionSign,
    PITCH_CLASSES, PitchClassSet, TniStructure,
};

use crate::validate;
use crate::warning::{ConstructionWarning, Findings};

/// One slot per possible 12-bit pattern.
const BITMAPS: usize = 1 << PITCH_CLASSES;

const SYMMETRIC_SIGNS: &[InversionSign] = &[InversionSign::Zero];
const PAIRED_SIGNS: &[InversionSign] = &[InversionSign::Negative, InversionSign::Positive];

/// Everything stored under one (cardinality, Forte index).
///
/// A class is either a single inversion-symmetric record or a
/// positive/negative pair, never both and never a lone half.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Vacant,
    Symmetric(TniStructure),
    Pair {
        positive: TniStructure,
        negative: TniStructure,
    },
}

impl Slot {
    fn get(&self, sign: InversionSign) -> Option<&TniStructure> {
        match (self, sign) {
            (Slot::Symmetric(record), InversionSign::Zero)
            | (Slot::Pair { positive: record, .. }, InversionSign::Positive)
            | (Slot::Pair { negative: record, .. }, InversionSign::Negative) => Some(record),
            _ => None,
        }
    }

    /// Prime member first, then its inversion.
    fn records(&self) -> impl Iterator<Item = (InversionSign, &TniStructure)> {
        let records = match self {
            Slot::Vacant => [None, None],
            Slot::Symmetric(record) => [Some((InversionSign::Zero, record)), None],
            Slot::Pair { positive, negative } => [
                Some((InversionSign::Positive, positive)),
                Some((InversionSign::Negative, negative)),
            ],
        };
        records.into_iter().flatten()
    }
}

fn forte_index_at(index: usize) -> Option<ForteIndex> {
    u8::try_from(index).ok().and_then(ForteIndex::from_raw)
}

fn classes_of(
    slots: &[Vec<Slot>],
    cardinality: Cardinality,
) -> impl Iterator<Item = (ForteClass, &Slot)> {
    slots[cardinality.index()]
        .iter()
        .enumerate()
        .filter_map(move |(index, slot)| {
            let forte_index = forte_index_at(index)?;
            (*slot != Slot::Vacant).then_some((ForteClass::new(cardinality, forte_index), slot))
        })
}

fn members_of(
    slots: &[Vec<Slot>],
    cardinality: Cardinality,
) -> impl Iterator<Item = (ClassKey, &TniStructure)> {
    classes_of(slots, cardinality).flat_map(|(class, slot)| {
        slot.records()
            .map(move |(sign, record)| (class.with_sign(sign), record))
    })
}

fn all_records(slots: &[Vec<Slot>]) -> impl Iterator<Item = (ClassKey, &TniStructure)> {
    Cardinality::all().flat_map(move |cardinality| members_of(slots, cardinality))
}

/// Immutable table of every classification record.
///
/// Records are addressed by [`ClassKey`] in constant time, and two
/// 4096-entry arrays map a pitch-class bitmap back to its key: one by exact
/// set, one by transposition class. Built once from a [`RawDataset`];
/// nothing mutates it afterwards, so shared references are all a reader
/// needs.
pub struct ClassificationStore {
    slots: Vec<Vec<Slot>>,
    exact: Box<[Option<ClassKey>]>,
    transposition_classes: Box<[Option<ClassKey>]>,
    tn_indexes: BTreeMap<ClassKey, u8>,
    keys_by_tn_index: Vec<Vec<Option<ClassKey>>>,
    names: BTreeMap<ClassKey, Vec<String>>,
    max_without: [u8; CARDINALITIES],
    max_with: [u8; CARDINALITIES],
    warnings: Vec<ConstructionWarning>,
}

impl ClassificationStore {
    /// Best-effort construction.
    ///
    /// Dataset defects are logged and kept in [`warnings`](Self::warnings);
    /// the store is usable either way.
    #[must_use]
    pub fn build(dataset: &impl RawDataset) -> Self {
        let mut findings = Findings::default();

        let mut max_without = [0; CARDINALITIES];
        let mut max_with = [0; CARDINALITIES];
        let mut slots = Vec::with_capacity(CARDINALITIES);
        for cardinality in Cardinality::all() {
            max_without[cardinality.index()] =
                dataset.max_index_without_inversion_equivalence(cardinality);
            max_with[cardinality.index()] = dataset.max_index_with_inversion_equivalence(cardinality);
            slots.push(load_slots(dataset, cardinality, &mut findings));
        }

        let (exact, transposition_classes) = index_pitch_classes(&slots, &mut findings);
        let (tn_indexes, keys_by_tn_index) =
            load_tn_indexes(dataset, &slots, &max_without, &mut findings);
        let names = load_names(dataset, &slots, &mut findings);

        let mut store = Self {
            slots,
            exact,
            transposition_classes,
            tn_indexes,
            keys_by_tn_index,
            names,
            max_without,
            max_with,
            warnings: Vec::new(),
        };
        validate::check(&store, &mut findings);
        store.warnings = findings.into_inner();

        tracing::info!(
            records = store.len(),
            classes = store.class_count(),
            warnings = store.warnings.len(),
            "Classification store ready"
        );
        store
    }

    /// Construction that refuses a dataset with any finding.
    ///
    /// The first finding becomes the error: a reverse-lookup collision is
    /// reported as [`ForteError::ConstructionCollision`], anything else as
    /// [`ForteError::InvalidDataset`].
    pub fn build_strict(dataset: &impl RawDataset) -> Result<Self, ForteError> {
        let store = Self::build(dataset);
        match store.warnings.first() {
            Some(warning) => Err(warning.to_error()),
            None => Ok(store),
        }
    }

    fn slot(&self, class: ForteClass) -> Option<&Slot> {
        self.slots[class.cardinality.index()].get(class.forte_index.index())
    }

    /// Direct lookup. Absent when the key was never inserted, including a
    /// directional sign asked of a symmetric class and the reverse.
    #[must_use]
    pub fn get(&self, key: ClassKey) -> Option<&TniStructure> {
        self.slot(key.class())?.get(key.sign)
    }

    /// Key whose record holds exactly this bitmap.
    ///
    /// Exact only: a transposed or inverted input misses. Use
    /// [`transposition_class`](Self::transposition_class) for transposed
    /// input.
    #[must_use]
    pub fn reverse_lookup(&self, pitch_classes: PitchClassSet) -> Option<ClassKey> {
        self.exact
            .get(usize::from(pitch_classes.bits()))
            .copied()
            .flatten()
    }

    /// Key whose record is a transposition of `pitch_classes`.
    #[must_use]
    pub fn transposition_class(&self, pitch_classes: PitchClassSet) -> Option<ClassKey> {
        let (normal, _) = pitch_classes.transpositional_normal();
        self.transposition_classes
            .get(usize::from(normal.bits()))
            .copied()
            .flatten()
    }

    /// Upper bound on the Forte index of `cardinality`, with or without
    /// inversion equivalence.
    #[must_use]
    pub fn max_forte_index(&self, cardinality: Cardinality, inversion_equivalent: bool) -> u8 {
        if inversion_equivalent {
            self.max_with[cardinality.index()]
        } else {
            self.max_without[cardinality.index()]
        }
    }

    /// Signs recorded for `class`: `[Zero]` for a symmetric class,
    /// `[Negative, Positive]` for a pair.
    #[must_use]
    pub fn signs(&self, class: ForteClass) -> Option<&'static [InversionSign]> {
        match self.slot(class)? {
            Slot::Vacant => None,
            Slot::Symmetric(_) => Some(SYMMETRIC_SIGNS),
            Slot::Pair { .. } => Some(PAIRED_SIGNS),
        }
    }

    /// The key of the class's prime member: `Zero` or `Positive`.
    #[must_use]
    pub fn canonical_key(&self, class: ForteClass) -> Option<ClassKey> {
        let (sign, _) = self.slot(class)?.records().next()?;
        Some(class.with_sign(sign))
    }

    /// Every record of one cardinality, in Forte order with each prime
    /// member before its inversion.
    pub fn members(
        &self,
        cardinality: Cardinality,
    ) -> impl Iterator<Item = (ClassKey, &TniStructure)> {
        members_of(&self.slots, cardinality)
    }

    /// Every class of every cardinality with its prime-member record.
    pub fn classes(&self) -> impl Iterator<Item = (ForteClass, &TniStructure)> {
        Cardinality::all().flat_map(move |cardinality| {
            classes_of(&self.slots, cardinality).filter_map(|(class, slot)| {
                let (_, record) = slot.records().next()?;
                Some((class, record))
            })
        })
    }

    /// Names in recorded order; empty when the key has none.
    #[must_use]
    pub fn names(&self, key: ClassKey) -> &[String] {
        self.names.get(&key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Position of `key` among the transposition classes of its cardinality.
    #[must_use]
    pub fn tn_index(&self, key: ClassKey) -> Option<u8> {
        self.tn_indexes.get(&key).copied()
    }

    #[must_use]
    pub fn key_for_tn_index(&self, cardinality: Cardinality, tn_index: u8) -> Option<ClassKey> {
        self.keys_by_tn_index[cardinality.index()]
            .get(usize::from(tn_index))
            .copied()
            .flatten()
    }

    /// Findings from construction, in the order they were found.
    #[must_use]
    pub fn warnings(&self) -> &[ConstructionWarning] {
        &self.warnings
    }

    /// Number of records (keys), counting both members of a pair.
    #[must_use]
    pub fn len(&self) -> usize {
        all_records(&self.slots).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        all_records(&self.slots).next().is_none()
    }

    /// Number of classes under transposition and inversion.
    #[must_use]
    pub fn class_count(&self) -> usize {
        Cardinality::all()
            .map(|cardinality| classes_of(&self.slots, cardinality).count())
            .sum()
    }
}

impl fmt::Debug for ClassificationStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassificationStore")
            .field("records", &self.len())
            .field("classes", &self.class_count())
            .field("named", &self.names.len())
            .field("warnings", &self.warnings)
            .finish_non_exhaustive()
    }
}

fn load_slots(
    dataset: &impl RawDataset,
    cardinality: Cardinality,
    findings: &mut Findings,
) -> Vec<Slot> {
    let rows = dataset.entries(cardinality);
    let mut slots = vec![Slot::Vacant; rows.len()];

    for (index, row) in rows.iter().enumerate() {
        let (Some(entry), Some(forte_index)) = (row, forte_index_at(index)) else {
            continue;
        };
        let class = ForteClass::new(cardinality, forte_index);
        let record = TniStructure::new(
            entry.pitch_classes,
            entry.interval_class_vector,
            entry.invariance_vector,
            entry.z_relation,
        );

        slots[index] = if record.has_distinct_inversion() {
            let inverted = dataset.inversion_default(class).unwrap_or_else(|| {
                findings.push(ConstructionWarning::MissingInversionDefault(class));
                PitchClassSet::EMPTY
            });
            Slot::Pair {
                positive: record,
                negative: record.with_pitch_classes(inverted),
            }
        } else {
            Slot::Symmetric(record)
        };
    }
    slots
}

type BitmapIndex = Box<[Option<ClassKey>]>;

/// Exact and transposition-class reverse indexes. First insertion wins.
///
/// Empty sets are placeholders for a missing inversion default and carry no
/// lookup information, so neither index holds them.
fn index_pitch_classes(slots: &[Vec<Slot>], findings: &mut Findings) -> (BitmapIndex, BitmapIndex) {
    let mut exact = vec![None; BITMAPS].into_boxed_slice();
    let mut transposition_classes = vec![None; BITMAPS].into_boxed_slice();

    for (key, record) in all_records(slots) {
        let pitch_classes = record.pitch_classes();
        if pitch_classes.is_empty() {
            continue;
        }

        let slot: &mut Option<ClassKey> = &mut exact[usize::from(pitch_classes.bits())];
        match *slot {
            Some(kept) => findings.push(ConstructionWarning::Collision {
                pitch_classes,
                kept,
                rejected: key,
            }),
            None => *slot = Some(key),
        }

        let (normal_form, _) = pitch_classes.transpositional_normal();
        let slot: &mut Option<ClassKey> = &mut transposition_classes[usize::from(normal_form.bits())];
        match *slot {
            Some(kept) => findings.push(ConstructionWarning::TranspositionClassCollision {
                normal_form,
                kept,
                rejected: key,
            }),
            None => *slot = Some(key),
        }
    }
    (exact, transposition_classes)
}

fn load_tn_indexes(
    dataset: &impl RawDataset,
    slots: &[Vec<Slot>],
    max_without: &[u8; CARDINALITIES],
    findings: &mut Findings,
) -> (BTreeMap<ClassKey, u8>, Vec<Vec<Option<ClassKey>>>) {
    let mut tn_indexes = BTreeMap::new();
    let mut keys_by_tn_index = Vec::with_capacity(CARDINALITIES);

    for cardinality in Cardinality::all() {
        let max = max_without[cardinality.index()];
        let mut keys = vec![None; usize::from(max) + 1];

        for (key, _) in members_of(slots, cardinality) {
            match dataset.tn_index(key) {
                None => findings.push(ConstructionWarning::MissingTnIndex(key)),
                Some(index) if index == 0 || index > max => {
                    findings.push(ConstructionWarning::TnIndexOutOfRange { key, index, max });
                }
                Some(index) => match keys[usize::from(index)] {
                    Some(kept) => findings.push(ConstructionWarning::DuplicateTnIndex {
                        index,
                        kept,
                        rejected: key,
                    }),
                    None => {
                        keys[usize::from(index)] = Some(key);
                        tn_indexes.insert(key, index);
                    }
                },
            }
        }
        keys_by_tn_index.push(keys);
    }
    (tn_indexes, keys_by_tn_index)
}

fn load_names(
    dataset: &impl RawDataset,
    slots: &[Vec<Slot>],
    findings: &mut Findings,
) -> BTreeMap<ClassKey, Vec<String>> {
    let mut names = BTreeMap::new();
    for key in dataset.named_keys() {
        let known = slots[key.cardinality.index()]
            .get(key.forte_index.index())
            .and_then(|slot| slot.get(key.sign))
            .is_some();
        if !known {
            findings.push(ConstructionWarning::NamesForUnknownKey(key));
            continue;
        }
        let recorded: Vec<String> = dataset.names(key).into_iter().map(str::to_owned).collect();
        if !recorded.is_empty() {
            names.insert(key, recorded);
        }
    }
    names
}
