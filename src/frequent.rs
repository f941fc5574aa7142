use crate::itemset::Itemset;
use crate::itemset_table::ItemsetTable;
use crate::support::support_fraction;

/// An itemset whose support met the minimum support threshold.
#[derive(Clone, Debug)]
pub struct FrequentItemset {
    pub itemset: Itemset,
    pub level: usize,
    /// Number of transactions containing the itemset.
    pub count: usize,
    pub support: f64,
    pub hash: u64,
}

impl FrequentItemset {
    pub fn new(itemset: Itemset, count: usize, num_transactions: usize) -> FrequentItemset {
        FrequentItemset {
            level: itemset.cardinality(),
            hash: itemset.canonical_hash(),
            itemset,
            count,
            support: support_fraction(count, num_transactions),
        }
    }
}

/// All frequent itemsets of one cardinality, with an exact lookup index.
#[derive(Debug)]
pub struct Level {
    level: usize,
    itemsets: Vec<FrequentItemset>,
    index: ItemsetTable<usize>,
}

impl Level {
    pub fn new(level: usize) -> Level {
        Level {
            level,
            itemsets: vec![],
            index: ItemsetTable::new(),
        }
    }

    pub fn level(&self) -> usize {
        self.level
    }

    /// Adds a frequent itemset of this level; duplicates are ignored.
    pub fn insert(&mut self, frequent: FrequentItemset) -> bool {
        assert_eq!(frequent.level, self.level, "itemset inserted at wrong level");
        let position = self.itemsets.len();
        if !self
            .index
            .insert_hashed(frequent.hash, frequent.itemset.clone(), position)
        {
            return false;
        }
        self.itemsets.push(frequent);
        true
    }

    pub fn itemsets(&self) -> &[FrequentItemset] {
        &self.itemsets
    }

    pub fn len(&self) -> usize {
        self.itemsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.itemsets.is_empty()
    }

    pub fn get(&self, itemset: &Itemset) -> Option<&FrequentItemset> {
        self.index
            .get(itemset)
            .map(|&position| &self.itemsets[position])
    }

    pub fn contains(&self, itemset: &Itemset) -> bool {
        self.index.contains(itemset)
    }
}

/// Append-only collection of frequent itemsets, partitioned by level.
/// Level `k + 1` can only be added once level `k` is complete.
#[derive(Debug)]
pub struct FrequentItemsetStore {
    num_transactions: usize,
    levels: Vec<Level>,
}

impl FrequentItemsetStore {
    pub fn new(num_transactions: usize) -> FrequentItemsetStore {
        FrequentItemsetStore {
            num_transactions,
            levels: vec![],
        }
    }

    /// Size of the transaction store the supports were measured against.
    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    pub fn push_level(&mut self, level: Level) {
        assert_eq!(
            level.level(),
            self.levels.len() + 1,
            "levels must be added in order"
        );
        self.levels.push(level);
    }

    pub fn level(&self, level: usize) -> Option<&Level> {
        if level == 0 {
            return None;
        }
        self.levels.get(level - 1)
    }

    pub fn num_levels(&self) -> usize {
        self.levels.len()
    }

    pub fn len(&self) -> usize {
        self.levels.iter().map(|l| l.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, itemset: &Itemset) -> Option<&FrequentItemset> {
        self.level(itemset.cardinality())
            .and_then(|level| level.get(itemset))
    }

    pub fn support_of(&self, itemset: &Itemset) -> Option<f64> {
        self.get(itemset).map(|f| f.support)
    }

    /// Every frequent itemset, in level order then insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &FrequentItemset> {
        self.levels.iter().flat_map(|level| level.itemsets().iter())
    }
}

#[cfg(test)]
mod tests {
    use super::{FrequentItemset, FrequentItemsetStore, Level};
    use crate::item::Item;
    use crate::itemset::Itemset;

    fn itemset(ids: &[u32]) -> Itemset {
        Itemset::from_items(5, ids.iter().map(|&i| Item::with_id(i))).unwrap()
    }

    #[test]
    fn test_store() {
        let mut singles = Level::new(1);
        assert!(singles.insert(FrequentItemset::new(itemset(&[1]), 2, 4)));
        assert!(singles.insert(FrequentItemset::new(itemset(&[2]), 3, 4)));
        assert!(!singles.insert(FrequentItemset::new(itemset(&[1]), 2, 4)));
        let mut pairs = Level::new(2);
        pairs.insert(FrequentItemset::new(itemset(&[1, 2]), 1, 4));

        let mut store = FrequentItemsetStore::new(4);
        assert!(store.is_empty());
        store.push_level(singles);
        store.push_level(pairs);

        assert_eq!(store.num_levels(), 2);
        assert_eq!(store.num_transactions(), 4);
        assert_eq!(store.len(), 3);
        assert_eq!(store.get(&itemset(&[2])).map(|f| f.count), Some(3));
        assert_eq!(store.support_of(&itemset(&[2])), Some(0.75));
        assert_eq!(store.support_of(&itemset(&[2, 1])), Some(0.25));
        assert_eq!(store.support_of(&itemset(&[3])), None);
        assert_eq!(store.support_of(&itemset(&[1, 2, 3])), None);
        assert!(store.level(0).is_none());
        assert_eq!(store.level(2).map(|l| l.len()), Some(1));

        let levels: Vec<usize> = store.iter().map(|f| f.level).collect();
        assert_eq!(levels, vec![1, 1, 2]);
    }

    #[test]
    #[should_panic]
    fn test_levels_added_out_of_order() {
        let mut store = FrequentItemsetStore::new(1);
        store.push_level(Level::new(2));
    }

    #[test]
    #[should_panic]
    fn test_wrong_level_insert() {
        Level::new(1).insert(FrequentItemset::new(itemset(&[1, 2]), 1, 2));
    }
}
