use std::fmt;

use tracing::{debug, info};

/// Why the level loop stopped.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TerminationReason {
    /// The last level produced no frequent itemsets.
    NoFrequentItemsets,
    /// The configured maximum itemset size was reached.
    MaxLevelReached,
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TerminationReason::NoFrequentItemsets => write!(f, "no frequent itemsets"),
            TerminationReason::MaxLevelReached => write!(f, "maximum level reached"),
        }
    }
}

/// Progress reported while mining.
#[derive(Clone, PartialEq, Debug)]
pub enum MiningEvent {
    ItemsDiscovered {
        count: usize,
    },
    TransactionsDiscovered {
        count: usize,
    },
    LevelCompleted {
        level: usize,
        candidates: usize,
        survivors: usize,
        frequent: usize,
    },
    Terminated {
        level: usize,
        reason: TerminationReason,
    },
    RulesGenerated {
        count: usize,
    },
}

/// Receiver for progress events. Mining results never depend on which
/// implementation is plugged in.
pub trait Diagnostics {
    fn event(&mut self, event: MiningEvent);
}

/// Discards every event.
pub struct NoDiagnostics;

impl Diagnostics for NoDiagnostics {
    fn event(&mut self, _event: MiningEvent) {}
}

/// Forwards events to `tracing`.
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn event(&mut self, event: MiningEvent) {
        match event {
            MiningEvent::ItemsDiscovered { count } => info!(items = count, "items discovered"),
            MiningEvent::TransactionsDiscovered { count } => {
                info!(transactions = count, "transactions discovered")
            }
            MiningEvent::LevelCompleted {
                level,
                candidates,
                survivors,
                frequent,
            } => debug!(level, candidates, survivors, frequent, "level completed"),
            MiningEvent::Terminated { level, reason } => {
                info!(level, reason = %reason, "level search terminated")
            }
            MiningEvent::RulesGenerated { count } => info!(rules = count, "rules generated"),
        }
    }
}

/// Keeps every event in order.
#[derive(Default, Debug)]
pub struct EventLog {
    pub events: Vec<MiningEvent>,
}

impl Diagnostics for EventLog {
    fn event(&mut self, event: MiningEvent) {
        self.events.push(event);
    }
}
