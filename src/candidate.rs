use rayon::prelude::*;

use crate::frequent::Level;
use crate::itemset::Itemset;
use crate::itemset_table::ItemsetTable;

/// Joins every pair of level-k frequent itemsets that share k-1 items into
/// a size k+1 candidate, and removes duplicate candidates.
///
/// Candidates come out in a deterministic order: by the position of the
/// first itemset of the pair that produced them.
pub fn generate_candidates(level: &Level) -> Vec<Itemset> {
    let itemsets = level.itemsets();
    let k = level.level();
    let joined: Vec<Itemset> = (0..itemsets.len())
        .into_par_iter()
        .flat_map(|i| {
            let a = &itemsets[i].itemset;
            itemsets[i + 1..]
                .iter()
                .map(|other| &other.itemset)
                .filter(|&b| b != a && a.union_cardinality(b) == k + 1)
                .map(|b| a.union(b))
                .collect::<Vec<Itemset>>()
        })
        .collect();
    dedupe(joined)
}

fn dedupe(candidates: Vec<Itemset>) -> Vec<Itemset> {
    let mut seen: ItemsetTable<()> = ItemsetTable::new();
    let mut unique = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if seen.insert(candidate.clone(), ()) {
            unique.push(candidate);
        }
    }
    unique
}
