//! Level-wise (Apriori) frequent itemset mining and association rule
//! generation.
//!
//! Items are mapped to a dense id domain, transactions are encoded as bit
//! vectors over that domain, and frequent itemsets are found breadth first:
//! candidates of size k+1 are joined from frequent itemsets of size k,
//! pruned by downward closure, then counted against the transactions.
//! Rules are derived afterwards from pairs of frequent itemsets.

pub mod apriori;
pub mod candidate;
pub mod config;
pub mod diagnostics;
pub mod encoder;
pub mod error;
pub mod frequent;
pub mod generate_rules;
pub mod item;
pub mod item_counter;
pub mod itemizer;
pub mod itemset;
pub mod itemset_table;
pub mod mine;
pub mod output;
pub mod prune;
pub mod rule;
pub mod support;
pub mod transaction_reader;

pub use crate::config::MiningConfig;
pub use crate::diagnostics::{
    Diagnostics, EventLog, MiningEvent, NoDiagnostics, TerminationReason, TracingDiagnostics,
};
pub use crate::error::MiningError;
pub use crate::itemset::Itemset;
pub use crate::mine::{mine, MiningResult};
pub use crate::output::{RuleOrder, RuleRecord};
