use std::hash::Hash;

use crate::apriori::find_frequent_itemsets;
use crate::config::MiningConfig;
use crate::diagnostics::{Diagnostics, MiningEvent, TerminationReason};
use crate::encoder::TransactionEncoder;
use crate::error::MiningError;
use crate::frequent::FrequentItemsetStore;
use crate::generate_rules::generate_rules;
use crate::itemizer::Itemizer;
use crate::output::RuleRecord;
use crate::rule::{labels, Rule};

/// Everything one mining run produces. The itemizer is kept so results can
/// be translated back to labels.
#[derive(Debug)]
pub struct MiningResult {
    pub itemizer: Itemizer,
    pub num_transactions: usize,
    pub frequent_itemsets: FrequentItemsetStore,
    pub rules: Vec<Rule>,
    pub termination: TerminationReason,
}

impl MiningResult {
    pub fn rule_records(&self) -> Vec<RuleRecord> {
        self.rules
            .iter()
            .map(|rule| RuleRecord::from_rule(rule, &self.itemizer))
            .collect()
    }

    /// `(labels, support, level)` for every frequent itemset.
    pub fn itemset_records(&self) -> Vec<(Vec<String>, f64, usize)> {
        self.frequent_itemsets
            .iter()
            .map(|frequent| {
                let labels = labels(&frequent.itemset, &self.itemizer)
                    .into_iter()
                    .map(String::from)
                    .collect();
                (labels, frequent.support, frequent.level)
            })
            .collect()
    }
}

/// Mines frequent itemsets and association rules from a
/// `(transaction_id, item_label)` relation.
///
/// Duplicate pairs are collapsed. An input where nothing is frequent is
/// not an error; it yields an empty result.
pub fn mine<I, T, L>(
    config: &MiningConfig,
    transactions: I,
    diagnostics: &mut dyn Diagnostics,
) -> Result<MiningResult, MiningError>
where
    I: IntoIterator<Item = (T, L)>,
    T: Hash + Eq,
    L: AsRef<str>,
{
    config.validate()?;

    let mut encoder = TransactionEncoder::new();
    for (transaction_id, label) in transactions {
        encoder.add(transaction_id, label.as_ref());
    }
    let (itemizer, store) = encoder.finish()?;
    diagnostics.event(MiningEvent::ItemsDiscovered {
        count: itemizer.len(),
    });
    diagnostics.event(MiningEvent::TransactionsDiscovered { count: store.len() });

    let search = find_frequent_itemsets(&store, config, diagnostics)?;
    let rules = generate_rules(&search.store, config.min_confidence, config.min_lift);
    diagnostics.event(MiningEvent::RulesGenerated { count: rules.len() });

    Ok(MiningResult {
        itemizer,
        num_transactions: store.len(),
        frequent_itemsets: search.store,
        rules,
        termination: search.termination,
    })
}
