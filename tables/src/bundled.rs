use forte_types::{Cardinality, ClassKey, ForteClass, InversionSign, PitchClassSet};

use crate::data::{
    FORTE, INVERSION_DEFAULTS, MAX_INDEX_WITH_INVERSION_EQUIVALENCE,
    MAX_INDEX_WITHOUT_INVERSION_EQUIVALENCE, NAMES, TN_INDEXES,
};
use crate::{RawDataset, RawEntry};

/// Forte's tables as compiled into this crate.
///
/// Zero-sized; every lookup reads `const` data. The keyed tables are sorted,
/// so lookups are binary searches.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledDataset;

fn sort_key(key: ClassKey) -> (u8, u8, InversionSign) {
    (key.cardinality.get(), key.forte_index.get(), key.sign)
}

impl RawDataset for BundledDataset {
    fn entries(&self, cardinality: Cardinality) -> &[Option<RawEntry>] {
        FORTE[cardinality.index()]
    }

    fn inversion_default(&self, class: ForteClass) -> Option<PitchClassSet> {
        let wanted = (class.cardinality.get(), class.forte_index.get());
        INVERSION_DEFAULTS
            .binary_search_by_key(&wanted, |&(c, f, _)| (c, f))
            .ok()
            .map(|i| INVERSION_DEFAULTS[i].2)
    }

    fn tn_index(&self, key: ClassKey) -> Option<u8> {
        TN_INDEXES
            .binary_search_by_key(&sort_key(key), |&(c, f, sign, _)| (c, f, sign))
            .ok()
            .map(|i| TN_INDEXES[i].3)
    }

    fn names(&self, key: ClassKey) -> Vec<&str> {
        NAMES
            .binary_search_by_key(&sort_key(key), |&(c, f, sign, _)| (c, f, sign))
            .ok()
            .map(|i| NAMES[i].3.to_vec())
            .unwrap_or_default()
    }

    fn named_keys(&self) -> Vec<ClassKey> {
        NAMES
            .iter()
            .filter_map(|&(c, f, sign, _)| ClassKey::from_parts(c, f, sign).ok())
            .collect()
    }

    fn max_index_without_inversion_equivalence(&self, cardinality: Cardinality) -> u8 {
        MAX_INDEX_WITHOUT_INVERSION_EQUIVALENCE[cardinality.index()]
    }

    fn max_index_with_inversion_equivalence(&self, cardinality: Cardinality) -> u8 {
        MAX_INDEX_WITH_INVERSION_EQUIVALENCE[cardinality.index()]
    }
}

#[cfg(test)]
mod tests {
    use forte_types::{Cardinality, ClassKey, ForteClass, ForteIndex, InversionSign, PitchClassSet};

    use super::BundledDataset;
    use crate::RawDataset;
    use crate::data::{INVERSION_DEFAULTS, NAMES, TN_INDEXES};

    fn card(c: u8) -> Cardinality {
        Cardinality::new(c).unwrap()
    }

    #[test]
    fn keyed_tables_are_sorted_for_binary_search() {
        assert!(INVERSION_DEFAULTS.windows(2).all(|w| (w[0].0, w[0].1) < (w[1].0, w[1].1)));
        assert!(
            TN_INDEXES
                .windows(2)
                .all(|w| (w[0].0, w[0].1, w[0].2) < (w[1].0, w[1].1, w[1].2))
        );
        assert!(
            NAMES
                .windows(2)
                .all(|w| (w[0].0, w[0].1, w[0].2) < (w[1].0, w[1].1, w[1].2))
        );
    }

    #[test]
    fn row_counts_match_bounds() {
        let dataset = BundledDataset;
        for cardinality in Cardinality::all().skip(1) {
            let rows = dataset.entries(cardinality);
            let present = rows.iter().filter(|row| row.is_some()).count();
            assert_eq!(
                present,
                usize::from(dataset.max_index_with_inversion_equivalence(cardinality)),
                "cardinality {cardinality}"
            );
            assert!(rows[0].is_none());
        }
        assert!(dataset.entries(card(0)).is_empty());
    }

    #[test]
    fn minor_triad_row() {
        let row = BundledDataset.entries(card(3))[11].unwrap();
        assert_eq!(row.pitch_classes, PitchClassSet::literal(&[0, 3, 7]));
        assert!(row.invariance_vector.has_distinct_inversion());
        assert_eq!(row.z_relation, None);
    }

    #[test]
    fn z_partner_is_recorded_both_ways() {
        let rows = BundledDataset.entries(card(4));
        assert_eq!(rows[15].unwrap().z_relation, ForteIndex::from_raw(29));
        assert_eq!(rows[29].unwrap().z_relation, ForteIndex::from_raw(15));
    }

    #[test]
    fn inversion_default_lookup() {
        let class = ForteClass::new(card(3), ForteIndex::new(11).unwrap());
        assert_eq!(
            BundledDataset.inversion_default(class),
            Some(PitchClassSet::literal(&[0, 4, 7]))
        );
        let symmetric = ForteClass::new(card(3), ForteIndex::new(10).unwrap());
        assert_eq!(BundledDataset.inversion_default(symmetric), None);
    }

    #[test]
    fn names_and_tn_indexes() {
        let major = ClassKey::from_parts(3, 11, InversionSign::Negative).unwrap();
        assert_eq!(BundledDataset.names(major), vec!["major triad"]);
        assert_eq!(BundledDataset.tn_index(major), Some(18));

        let unnamed = ClassKey::from_parts(5, 1, InversionSign::Zero).unwrap();
        assert_eq!(BundledDataset.tn_index(unnamed), Some(1));
        assert_eq!(BundledDataset.named_keys().len(), NAMES.len());
    }
}
