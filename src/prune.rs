use rayon::prelude::*;

use crate::frequent::Level;
use crate::itemset::Itemset;

/// True iff every subset of `candidate` with one item removed is a frequent
/// itemset of `level`. A candidate of the wrong size finds no subsets and
/// is rejected.
pub fn survives_downward_closure(candidate: &Itemset, level: &Level) -> bool {
    candidate.cardinality() == level.level() + 1
        && candidate
            .items()
            .all(|item| level.contains(&candidate.without(item)))
}

/// Drops candidates that have an infrequent subset; order is preserved.
pub fn prune(candidates: Vec<Itemset>, level: &Level) -> Vec<Itemset> {
    candidates
        .into_par_iter()
        .filter(|candidate| survives_downward_closure(candidate, level))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{prune, survives_downward_closure};
    use crate::frequent::{FrequentItemset, Level};
    use crate::item::Item;
    use crate::itemset::Itemset;

    fn itemset(ids: &[u32]) -> Itemset {
        Itemset::from_items(5, ids.iter().map(|&i| Item::with_id(i))).unwrap()
    }

    fn level(k: usize, sets: &[&[u32]]) -> Level {
        let mut level = Level::new(k);
        for ids in sets {
            level.insert(FrequentItemset::new(itemset(ids), 1, 2));
        }
        level
    }

    #[test]
    fn test_all_subsets_frequent() {
        let pairs = level(2, &[&[1, 2], &[1, 3], &[2, 3]]);
        assert!(survives_downward_closure(&itemset(&[1, 2, 3]), &pairs));
    }

    #[test]
    fn test_missing_subset_rejects_candidate() {
        // {2,3} is not frequent, so {1,2,3} cannot be either, even though
        // it can be joined from {1,2} and {1,3}.
        let pairs = level(2, &[&[1, 2], &[1, 3], &[3, 4]]);
        assert!(!survives_downward_closure(&itemset(&[1, 2, 3]), &pairs));
    }

    #[test]
    fn test_wrong_size_fails_closed() {
        let pairs = level(2, &[&[1, 2], &[1, 3], &[2, 3]]);
        assert!(!survives_downward_closure(&itemset(&[1, 2]), &pairs));
        assert!(!survives_downward_closure(&itemset(&[1, 2, 3, 4]), &pairs));
    }

    #[test]
    fn test_prune_keeps_order() {
        let pairs = level(2, &[&[1, 2], &[1, 3], &[2, 3], &[2, 4], &[3, 4]]);
        let survivors = prune(
            vec![itemset(&[2, 3, 4]), itemset(&[1, 2, 4]), itemset(&[1, 2, 3])],
            &pairs,
        );
        assert_eq!(survivors, vec![itemset(&[2, 3, 4]), itemset(&[1, 2, 3])]);
    }
}
