use fnv::FnvHashMap;

use crate::itemset::Itemset;

/// Map keyed by itemset that buckets on the canonical hash and confirms
/// every hit with an exact bit-pattern comparison, so two distinct itemsets
/// that happen to share a hash are never merged.
#[derive(Debug)]
pub struct ItemsetTable<V> {
    buckets: FnvHashMap<u64, Vec<(Itemset, V)>>,
    len: usize,
}

impl<V> ItemsetTable<V> {
    pub fn new() -> ItemsetTable<V> {
        ItemsetTable {
            buckets: FnvHashMap::default(),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `itemset` unless an equal itemset is already present.
    /// Returns whether the insert happened; an existing value is kept.
    pub fn insert(&mut self, itemset: Itemset, value: V) -> bool {
        let hash = itemset.canonical_hash();
        self.insert_hashed(hash, itemset, value)
    }

    pub(crate) fn insert_hashed(&mut self, hash: u64, itemset: Itemset, value: V) -> bool {
        let bucket = self.buckets.entry(hash).or_insert_with(Vec::new);
        if bucket.iter().any(|(existing, _)| *existing == itemset) {
            return false;
        }
        bucket.push((itemset, value));
        self.len += 1;
        true
    }

    pub fn get(&self, itemset: &Itemset) -> Option<&V> {
        self.get_hashed(itemset.canonical_hash(), itemset)
    }

    pub(crate) fn get_hashed(&self, hash: u64, itemset: &Itemset) -> Option<&V> {
        self.buckets.get(&hash).and_then(|bucket| {
            bucket
                .iter()
                .find(|(existing, _)| existing == itemset)
                .map(|(_, value)| value)
        })
    }

    pub fn contains(&self, itemset: &Itemset) -> bool {
        self.get(itemset).is_some()
    }
}

impl<V> Default for ItemsetTable<V> {
    fn default() -> ItemsetTable<V> {
        ItemsetTable::new()
    }
}
