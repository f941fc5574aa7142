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

use std::fmt;
use std::hash::Hasher;

use fnv::FnvHasher;
use itertools::Itertools;

use crate::error::MiningError;
use crate::item::Item;

const WORD_BITS: usize = 64;

/// A set of items over the fixed domain `[1, m]`, stored as a bit vector.
///
/// Two itemsets are equal iff their bit patterns (and domains) are equal.
/// Every binary operation requires both operands to share a domain; mixing
/// domains is a programming error and panics.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Itemset {
    domain: usize,
    words: Vec<u64>,
}

fn words_for(domain: usize) -> usize {
    (domain + WORD_BITS - 1) / WORD_BITS
}

impl Itemset {
    pub fn empty(domain: usize) -> Itemset {
        Itemset {
            domain,
            words: vec![0; words_for(domain)],
        }
    }

    pub fn from_items<I>(domain: usize, items: I) -> Result<Itemset, MiningError>
    where
        I: IntoIterator<Item = Item>,
    {
        let mut itemset = Itemset::empty(domain);
        for item in items {
            if item.id() == 0 || item.id() as usize > domain {
                return Err(MiningError::ItemOutOfDomain {
                    item: item.id(),
                    domain,
                });
            }
            itemset.set(item);
        }
        Ok(itemset)
    }

    pub fn singleton(domain: usize, item: Item) -> Result<Itemset, MiningError> {
        Itemset::from_items(domain, Some(item))
    }

    fn set(&mut self, item: Item) {
        let index = item.bit_index();
        self.words[index / WORD_BITS] |= 1u64 << (index % WORD_BITS);
    }

    fn check_domain(&self, other: &Itemset) {
        assert_eq!(
            self.domain, other.domain,
            "itemsets from different item domains"
        );
    }

    pub fn domain(&self) -> usize {
        self.domain
    }

    pub fn contains(&self, item: Item) -> bool {
        if item.id() == 0 || item.id() as usize > self.domain {
            return false;
        }
        let index = item.bit_index();
        self.words[index / WORD_BITS] & (1u64 << (index % WORD_BITS)) != 0
    }

    pub fn cardinality(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    fn zip_with<F>(&self, other: &Itemset, f: F) -> Itemset
    where
        F: Fn(u64, u64) -> u64,
    {
        self.check_domain(other);
        Itemset {
            domain: self.domain,
            words: self
                .words
                .iter()
                .zip(other.words.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }

    pub fn union(&self, other: &Itemset) -> Itemset {
        self.zip_with(other, |a, b| a | b)
    }

    pub fn intersection(&self, other: &Itemset) -> Itemset {
        self.zip_with(other, |a, b| a & b)
    }

    pub fn set_minus(&self, other: &Itemset) -> Itemset {
        self.zip_with(other, |a, b| a & !b)
    }

    // Size of the union without materializing it.
    pub fn union_cardinality(&self, other: &Itemset) -> usize {
        self.check_domain(other);
        self.words
            .iter()
            .zip(other.words.iter())
            .map(|(&a, &b)| (a | b).count_ones() as usize)
            .sum()
    }

    /// True iff every item of `other` is also in `self`.
    pub fn is_superset(&self, other: &Itemset) -> bool {
        self.check_domain(other);
        self.words
            .iter()
            .zip(other.words.iter())
            .all(|(&a, &b)| a & b == b)
    }

    // Copy of this itemset with `item` removed.
    pub fn without(&self, item: Item) -> Itemset {
        let mut itemset = self.clone();
        if self.contains(item) {
            let index = item.bit_index();
            itemset.words[index / WORD_BITS] &= !(1u64 << (index % WORD_BITS));
        }
        itemset
    }

    /// Items in increasing id order.
    pub fn items(&self) -> Items {
        Items {
            words: &self.words,
            word_index: 0,
            current: self.words.first().cloned().unwrap_or(0),
        }
    }

    /// Deterministic hash of the bit pattern, used to bucket itemsets.
    /// Equal itemsets always hash equal; unequal itemsets may collide.
    pub fn canonical_hash(&self) -> u64 {
        let mut hasher = FnvHasher::default();
        for &word in &self.words {
            hasher.write_u64(word);
        }
        hasher.finish()
    }
}

pub struct Items<'a> {
    words: &'a [u64],
    word_index: usize,
    current: u64,
}

impl<'a> Iterator for Items<'a> {
    type Item = Item;
    fn next(&mut self) -> Option<Item> {
        loop {
            if self.current != 0 {
                let bit = self.current.trailing_zeros() as usize;
                self.current &= self.current - 1;
                return Some(Item::from_bit_index(self.word_index * WORD_BITS + bit));
            }
            self.word_index += 1;
            if self.word_index >= self.words.len() {
                return None;
            }
            self.current = self.words[self.word_index];
        }
    }
}

impl fmt::Display for Itemset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{{}}}", self.items().join(" "))
    }
}
