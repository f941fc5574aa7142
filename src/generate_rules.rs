use rayon::prelude::*;

use crate::frequent::{FrequentItemset, FrequentItemsetStore};
use crate::rule::Rule;

/// Derives rules from every pair of frequent itemsets (A, B) where B is a
/// smaller subset of A, as B => A \ B.
///
/// Rules are numbered from 1 in a deterministic order: by A, then by B, both
/// in store order.
pub fn generate_rules(
    store: &FrequentItemsetStore,
    min_confidence: f64,
    min_lift: Option<f64>,
) -> Vec<Rule> {
    let itemsets: Vec<&FrequentItemset> = store.iter().collect();
    let mut rules: Vec<Rule> = itemsets
        .par_iter()
        .filter(|itemset| itemset.level >= 2)
        .flat_map(|&itemset| {
            // Store order is level order, so every candidate antecedent
            // comes before the first itemset of the same level.
            itemsets
                .iter()
                .take_while(|antecedent| antecedent.level < itemset.level)
                .filter_map(|antecedent| {
                    Rule::make(antecedent, itemset, store, min_confidence, min_lift)
                })
                .collect::<Vec<Rule>>()
        })
        .collect();

    let mut next_index = 1;
    for rule in rules.iter_mut() {
        rule.index = next_index;
        next_index += 1;
    }
    rules
}
