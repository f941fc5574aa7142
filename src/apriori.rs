// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::candidate::generate_candidates;
use crate::config::MiningConfig;
use crate::diagnostics::{Diagnostics, MiningEvent, TerminationReason};
use crate::encoder::TransactionStore;
use crate::error::MiningError;
use crate::frequent::{FrequentItemset, FrequentItemsetStore, Level};
use crate::item_counter::ItemCounter;
use crate::itemset::Itemset;
use crate::prune::prune;
use crate::support::{count_support, is_frequent, support_fraction};

/// Outcome of the level-wise search.
#[derive(Debug)]
pub struct LevelSearch {
    pub store: FrequentItemsetStore,
    pub termination: TerminationReason,
}

/// Level 1 is seeded straight from single item counts; there is no join.
fn frequent_items(
    transactions: &TransactionStore,
    min_support: f64,
    diagnostics: &mut dyn Diagnostics,
) -> Result<Level, MiningError> {
    let item_count = ItemCounter::from_transactions(transactions);
    let num_transactions = transactions.len();
    let mut level = Level::new(1);
    let frequent = item_count.items_where(|count| {
        is_frequent(support_fraction(count as usize, num_transactions), min_support)
    });
    for (item, count) in frequent {
        let itemset = Itemset::singleton(transactions.domain(), item)?;
        level.insert(FrequentItemset::new(itemset, count as usize, num_transactions));
    }
    diagnostics.event(MiningEvent::LevelCompleted {
        level: 1,
        candidates: item_count.num_items(),
        survivors: item_count.num_items(),
        frequent: level.len(),
    });
    Ok(level)
}

/// Builds level k+1 from the complete level k: join, prune by downward
/// closure, count support, filter by minimum support.
fn next_level(
    previous: &Level,
    transactions: &TransactionStore,
    config: &MiningConfig,
    diagnostics: &mut dyn Diagnostics,
) -> Result<Level, MiningError> {
    let level = previous.level() + 1;
    let candidates = generate_candidates(previous);
    let num_candidates = candidates.len();
    let survivors = prune(candidates, previous);
    let num_survivors = survivors.len();
    if let Some(limit) = config.max_candidates {
        if num_survivors > limit {
            return Err(MiningError::CandidateLimitExceeded {
                level,
                candidates: num_survivors,
                limit,
            });
        }
    }

    let num_transactions = transactions.len();
    let mut next = Level::new(level);
    for (itemset, count) in count_support(survivors, transactions) {
        if is_frequent(support_fraction(count, num_transactions), config.min_support) {
            next.insert(FrequentItemset::new(itemset, count, num_transactions));
        }
    }
    diagnostics.event(MiningEvent::LevelCompleted {
        level,
        candidates: num_candidates,
        survivors: num_survivors,
        frequent: next.len(),
    });
    Ok(next)
}

/// Runs the breadth-first search until a level yields no frequent
/// itemsets. Each level is fully built before the next one starts.
pub fn find_frequent_itemsets(
    transactions: &TransactionStore,
    config: &MiningConfig,
    diagnostics: &mut dyn Diagnostics,
) -> Result<LevelSearch, MiningError> {
    let mut store = FrequentItemsetStore::new(transactions.len());
    let singles = frequent_items(transactions, config.min_support, diagnostics)?;
    if singles.is_empty() {
        return Ok(finish(store, 1, TerminationReason::NoFrequentItemsets, diagnostics));
    }

    // The newest complete level is held outside the store until it has been
    // joined, then appended.
    let mut current = singles;
    loop {
        let level = current.level();
        if config.max_level == Some(level) {
            store.push_level(current);
            return Ok(finish(store, level, TerminationReason::MaxLevelReached, diagnostics));
        }
        // No itemset can be larger than the item domain.
        if level >= transactions.domain() {
            store.push_level(current);
            return Ok(finish(store, level + 1, TerminationReason::NoFrequentItemsets, diagnostics));
        }
        let next = next_level(&current, transactions, config, diagnostics)?;
        store.push_level(current);
        if next.is_empty() {
            return Ok(finish(store, level + 1, TerminationReason::NoFrequentItemsets, diagnostics));
        }
        current = next;
    }
}

fn finish(
    store: FrequentItemsetStore,
    level: usize,
    reason: TerminationReason,
    diagnostics: &mut dyn Diagnostics,
) -> LevelSearch {
    diagnostics.event(MiningEvent::Terminated { level, reason });
    LevelSearch {
        store,
        termination: reason,
    }
}
