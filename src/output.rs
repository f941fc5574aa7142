use std::borrow::Cow;
use std::io::Write;
use std::str::FromStr;

use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::error::MiningError;
use crate::frequent::FrequentItemsetStore;
use crate::itemizer::Itemizer;
use crate::rule::{labels, Rule};

/// A rule translated back to item labels.
#[derive(Clone, PartialEq, Debug)]
pub struct RuleRecord {
    pub index: usize,
    pub antecedent: Vec<String>,
    pub consequent: Vec<String>,
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
    pub conviction: f64,
}

impl RuleRecord {
    pub fn from_rule(rule: &Rule, itemizer: &Itemizer) -> RuleRecord {
        RuleRecord {
            index: rule.index,
            antecedent: to_owned_labels(rule.antecedent_labels(itemizer)),
            consequent: to_owned_labels(rule.consequent_labels(itemizer)),
            support: rule.support,
            confidence: rule.confidence,
            lift: rule.lift,
            conviction: rule.conviction,
        }
    }
}

fn to_owned_labels(labels: Vec<&str>) -> Vec<String> {
    labels.into_iter().map(String::from).collect()
}

/// Output ordering for rules.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RuleOrder {
    Generated,
    Confidence,
    Lift,
    Support,
}

impl FromStr for RuleOrder {
    type Err = String;
    fn from_str(s: &str) -> Result<RuleOrder, String> {
        match s {
            "generated" => Ok(RuleOrder::Generated),
            "confidence" => Ok(RuleOrder::Confidence),
            "lift" => Ok(RuleOrder::Lift),
            "support" => Ok(RuleOrder::Support),
            _ => Err(format!(
                "unknown sort order '{}', expected generated, confidence, lift or support",
                s
            )),
        }
    }
}

/// Sorts by the chosen measure, highest first; ties keep generation order.
pub fn sort_rules(rules: &mut [Rule], order: RuleOrder) {
    let key = |rule: &Rule| -> OrderedFloat<f64> {
        match order {
            RuleOrder::Generated => OrderedFloat(0.0),
            RuleOrder::Confidence => OrderedFloat(rule.confidence),
            RuleOrder::Lift => OrderedFloat(rule.lift),
            RuleOrder::Support => OrderedFloat(rule.support),
        }
    };
    rules.sort_by(|a, b| key(b).cmp(&key(a)).then(a.index.cmp(&b.index)));
}

/// Destination for materialized rules.
pub trait RuleSink {
    fn write_rule(&mut self, record: &RuleRecord) -> Result<(), MiningError>;
}

impl RuleSink for Vec<RuleRecord> {
    fn write_rule(&mut self, record: &RuleRecord) -> Result<(), MiningError> {
        self.push(record.clone());
        Ok(())
    }
}

/// Writes rules as CSV, items within a side separated by spaces.
pub struct CsvRuleWriter<W: Write> {
    output: W,
}

impl<W: Write> CsvRuleWriter<W> {
    pub fn new(mut output: W) -> Result<CsvRuleWriter<W>, MiningError> {
        writeln!(
            output,
            "Index,Antecedent,Consequent,Support,Confidence,Lift,Conviction"
        )?;
        Ok(CsvRuleWriter { output })
    }

    pub fn into_inner(self) -> W {
        self.output
    }
}

impl<W: Write> RuleSink for CsvRuleWriter<W> {
    fn write_rule(&mut self, record: &RuleRecord) -> Result<(), MiningError> {
        writeln!(
            self.output,
            "{},{},{},{},{},{},{}",
            record.index,
            csv_field(&record.antecedent.join(" ")),
            csv_field(&record.consequent.join(" ")),
            record.support,
            record.confidence,
            record.lift,
            record.conviction
        )?;
        Ok(())
    }
}

fn csv_field(field: &str) -> Cow<str> {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Translates rules to labels and hands them to `sink` in order.
/// Returns the number of rules written.
pub fn materialize(
    rules: &[Rule],
    itemizer: &Itemizer,
    sink: &mut dyn RuleSink,
) -> Result<usize, MiningError> {
    for rule in rules {
        sink.write_rule(&RuleRecord::from_rule(rule, itemizer))?;
    }
    Ok(rules.len())
}

/// Writes every frequent itemset as `Itemset,Support,Level`.
pub fn write_itemsets<W: Write>(
    mut output: W,
    store: &FrequentItemsetStore,
    itemizer: &Itemizer,
) -> Result<(), MiningError> {
    writeln!(output, "Itemset,Support,Level")?;
    for frequent in store.iter() {
        let items = labels(&frequent.itemset, itemizer).iter().join(" ");
        writeln!(
            output,
            "{},{},{}",
            csv_field(&items),
            frequent.support,
            frequent.level
        )?;
    }
    Ok(())
}
