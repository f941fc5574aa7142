use std::collections::{BTreeMap, BTreeSet};

use apriori::{mine, MiningConfig, NoDiagnostics};
use proptest::prelude::*;

type Baskets = Vec<Vec<u8>>;

fn pairs(baskets: &Baskets) -> Vec<(usize, String)> {
    let mut pairs = vec![];
    for (tid, basket) in baskets.iter().enumerate() {
        for item in basket {
            pairs.push((tid, format!("i{}", item)));
        }
    }
    pairs
}

// Transaction count of every itemset that occurs at all, by enumerating
// subsets of the item domain.
fn brute_force_counts(baskets: &Baskets) -> BTreeMap<Vec<String>, usize> {
    let transactions: Vec<BTreeSet<String>> = baskets
        .iter()
        .map(|b| b.iter().map(|i| format!("i{}", i)).collect())
        .collect();
    let items: Vec<String> = transactions
        .iter()
        .flat_map(|t| t.iter().cloned())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect();
    let mut counts = BTreeMap::new();
    for mask in 1u32..(1u32 << items.len()) {
        let subset: Vec<String> = items
            .iter()
            .enumerate()
            .filter(|&(i, _)| mask & (1u32 << i) != 0)
            .map(|(_, item)| item.clone())
            .collect();
        let count = transactions
            .iter()
            .filter(|t| subset.iter().all(|item| t.contains(item)))
            .count();
        if count > 0 {
            counts.insert(subset, count);
        }
    }
    counts
}

fn brute_force(baskets: &Baskets, min_support: f64) -> BTreeMap<Vec<String>, f64> {
    let n = baskets.len() as f64;
    brute_force_counts(baskets)
        .into_iter()
        .map(|(itemset, count)| (itemset, count as f64 / n))
        .filter(|&(_, support)| support >= min_support)
        .collect()
}

// Every rule B => A \ B over frequent A with confidence count(A) / count(B)
// at or above the threshold.
fn brute_force_rules(
    baskets: &Baskets,
    min_support: f64,
    min_confidence: f64,
) -> BTreeSet<(Vec<String>, Vec<String>)> {
    let counts = brute_force_counts(baskets);
    let frequent = brute_force(baskets, min_support);
    let mut rules = BTreeSet::new();
    for itemset in frequent.keys().filter(|itemset| itemset.len() > 1) {
        let count = counts[itemset];
        for mask in 1u32..(1u32 << itemset.len()) - 1 {
            let (antecedent, consequent): (Vec<String>, Vec<String>) = itemset
                .iter()
                .enumerate()
                .map(|(i, item)| (mask & (1u32 << i) != 0, item.clone()))
                .fold((vec![], vec![]), |(mut a, mut c), (in_antecedent, item)| {
                    if in_antecedent {
                        a.push(item);
                    } else {
                        c.push(item);
                    }
                    (a, c)
                });
            if count as f64 / counts[&antecedent] as f64 >= min_confidence {
                rules.insert((antecedent, consequent));
            }
        }
    }
    rules
}

fn baskets() -> impl Strategy<Value = Baskets> {
    prop::collection::vec(prop::collection::vec(0u8..6, 1..5), 1..12)
}

proptest! {
    #[test]
    fn mined_itemsets_match_brute_force(baskets in baskets(), min_support in 0.0f64..1.0) {
        let result = mine(&MiningConfig::new(min_support, 0.0), pairs(&baskets), &mut NoDiagnostics)
            .unwrap();
        let mined: BTreeMap<Vec<String>, f64> = result
            .itemset_records()
            .into_iter()
            .map(|(labels, support, level)| {
                assert_eq!(labels.len(), level);
                (labels, support)
            })
            .collect();
        prop_assert_eq!(mined, brute_force(&baskets, min_support));
    }

    #[test]
    fn frequent_itemsets_are_downward_closed(baskets in baskets(), min_support in 0.0f64..0.6) {
        let result = mine(&MiningConfig::new(min_support, 0.0), pairs(&baskets), &mut NoDiagnostics)
            .unwrap();
        let mined: BTreeMap<Vec<String>, f64> = result
            .itemset_records()
            .into_iter()
            .map(|(labels, support, _)| (labels, support))
            .collect();
        for (itemset, &support) in &mined {
            prop_assert!(support >= min_support);
            if itemset.len() < 2 {
                continue;
            }
            for skip in 0..itemset.len() {
                let subset: Vec<String> = itemset
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| i != skip)
                    .map(|(_, item)| item.clone())
                    .collect();
                let subset_support = mined.get(&subset);
                prop_assert!(subset_support.is_some());
                // Support never grows as items are added.
                prop_assert!(*subset_support.unwrap() >= support);
            }
        }
    }

    #[test]
    fn rules_respect_confidence(
        baskets in baskets(),
        min_support in 0.05f64..0.6,
        min_confidence in 0.0f64..1.0,
    ) {
        let config = MiningConfig::new(min_support, min_confidence);
        let result = mine(&config, pairs(&baskets), &mut NoDiagnostics).unwrap();
        let supports: BTreeMap<Vec<String>, f64> = result
            .itemset_records()
            .into_iter()
            .map(|(labels, support, _)| (labels, support))
            .collect();
        for rule in result.rule_records() {
            let mut union: Vec<String> = rule
                .antecedent
                .iter()
                .chain(rule.consequent.iter())
                .cloned()
                .collect();
            union.sort();
            prop_assert!(rule.antecedent.iter().all(|a| !rule.consequent.contains(a)));
            let union_support = supports[&union];
            let antecedent_support = supports[&rule.antecedent];
            prop_assert!((rule.confidence - union_support / antecedent_support).abs() < 1e-12);
            prop_assert!(rule.confidence >= min_confidence);
            prop_assert!(rule.support >= min_support);
            if rule.confidence == 1.0 {
                prop_assert_eq!(rule.conviction, 0.0);
            } else {
                prop_assert!(rule.conviction.is_finite());
            }
        }
    }

    #[test]
    fn every_confident_rule_is_generated(
        baskets in baskets(),
        min_support in 0.05f64..0.6,
        min_confidence in 0.0f64..1.0,
    ) {
        let config = MiningConfig::new(min_support, min_confidence);
        let result = mine(&config, pairs(&baskets), &mut NoDiagnostics).unwrap();
        let mined: BTreeSet<(Vec<String>, Vec<String>)> = result
            .rule_records()
            .into_iter()
            .map(|rule| (rule.antecedent, rule.consequent))
            .collect();
        prop_assert_eq!(mined.len(), result.rules.len());
        prop_assert_eq!(mined, brute_force_rules(&baskets, min_support, min_confidence));
    }
}
