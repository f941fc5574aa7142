use std::hash::{Hash, Hasher};

use crate::frequent::{FrequentItemset, FrequentItemsetStore};
use crate::item::sort_labels;
use crate::itemizer::Itemizer;
use crate::itemset::Itemset;

/// An association rule `antecedent => consequent`.
#[derive(Clone, Debug)]
pub struct Rule {
    /// Position in the generated rule sequence, starting at 1.
    pub index: usize,
    pub antecedent: Itemset,
    pub consequent: Itemset,
    /// Support of antecedent and consequent together.
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
    pub conviction: f64,
}

impl PartialEq for Rule {
    fn eq(&self, other: &Rule) -> bool {
        self.antecedent == other.antecedent && self.consequent == other.consequent
    }
}

// Can't derive Eq as f64 doesn't satisfy Eq.
impl Eq for Rule {}

impl Hash for Rule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.antecedent.hash(state);
        self.consequent.hash(state);
    }
}

/// `(1 - support(consequent)) / (1 - confidence)`, reported as 0 rather
/// than infinity when the rule always holds.
pub fn conviction(consequent_support: f64, confidence: f64) -> f64 {
    if confidence >= 1.0 {
        return 0.0;
    }
    (1.0 - consequent_support) / (1.0 - confidence)
}

impl Rule {
    // Creates the rule antecedent => (itemset \ antecedent) if it passes the
    // confidence and lift thresholds. Both sides must be recorded as
    // frequent; a missing consequent means the rule is skipped.
    pub fn make(
        antecedent: &FrequentItemset,
        itemset: &FrequentItemset,
        store: &FrequentItemsetStore,
        min_confidence: f64,
        min_lift: Option<f64>,
    ) -> Option<Rule> {
        if itemset.level < 2
            || antecedent.level == 0
            || antecedent.level >= itemset.level
            || !itemset.itemset.is_superset(&antecedent.itemset)
        {
            return None;
        }

        let consequent = itemset.itemset.set_minus(&antecedent.itemset);
        let c = store.get(&consequent)?;

        // From counts, so a ratio equal to the threshold is exact.
        let confidence = itemset.count as f64 / antecedent.count as f64;
        if confidence < min_confidence {
            return None;
        }

        let lift = (itemset.count as f64 * store.num_transactions() as f64)
            / (antecedent.count as f64 * c.count as f64);
        if let Some(min_lift) = min_lift {
            if lift < min_lift {
                return None;
            }
        }

        Some(Rule {
            index: 0,
            antecedent: antecedent.itemset.clone(),
            consequent,
            support: itemset.support,
            confidence,
            lift,
            conviction: conviction(c.support, confidence),
        })
    }

    pub fn antecedent_labels<'a>(&self, itemizer: &'a Itemizer) -> Vec<&'a str> {
        labels(&self.antecedent, itemizer)
    }

    pub fn consequent_labels<'a>(&self, itemizer: &'a Itemizer) -> Vec<&'a str> {
        labels(&self.consequent, itemizer)
    }

    pub fn to_string(&self, itemizer: &Itemizer) -> String {
        [
            self.antecedent_labels(itemizer).join(" "),
            " => ".to_owned(),
            self.consequent_labels(itemizer).join(" "),
        ]
        .join("")
    }
}

pub fn labels<'a>(itemset: &Itemset, itemizer: &'a Itemizer) -> Vec<&'a str> {
    let mut a: Vec<&str> = itemset.items().map(|id| itemizer.str_of(id)).collect();
    sort_labels(&mut a);
    a
}
