use rayon::prelude::*;

use crate::encoder::TransactionStore;
use crate::itemset::Itemset;

/// Number of transactions containing every item of `itemset`.
pub fn count_containing(itemset: &Itemset, store: &TransactionStore) -> usize {
    store
        .transactions()
        .iter()
        .filter(|transaction| transaction.is_superset(itemset))
        .count()
}

pub fn support_fraction(count: usize, num_transactions: usize) -> f64 {
    if num_transactions == 0 {
        return 0.0;
    }
    count as f64 / num_transactions as f64
}

/// An itemset is frequent when it occurs at all and meets the threshold;
/// a zero threshold does not make never-seen itemsets frequent.
pub fn is_frequent(support: f64, min_support: f64) -> bool {
    support > 0.0 && support >= min_support
}

/// Counts the transactions containing each candidate with one scan of the
/// transaction store per candidate, candidates counted in parallel. Order is
/// preserved.
pub fn count_support(candidates: Vec<Itemset>, store: &TransactionStore) -> Vec<(Itemset, usize)> {
    candidates
        .into_par_iter()
        .map(|candidate| {
            let count = count_containing(&candidate, store);
            (candidate, count)
        })
        .collect()
}
