use std::hash::Hash;

use fnv::FnvHashMap;

use crate::error::MiningError;
use crate::item::Item;
use crate::itemizer::Itemizer;
use crate::itemset::Itemset;

/// Encoded transactions, one itemset per distinct transaction id.
/// Read-only once built.
#[derive(Debug)]
pub struct TransactionStore {
    domain: usize,
    transactions: Vec<Itemset>,
}

impl TransactionStore {
    pub fn new(domain: usize, transactions: Vec<Itemset>) -> TransactionStore {
        debug_assert!(transactions.iter().all(|t| t.domain() == domain));
        TransactionStore {
            domain,
            transactions,
        }
    }
    pub fn domain(&self) -> usize {
        self.domain
    }
    pub fn len(&self) -> usize {
        self.transactions.len()
    }
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
    pub fn transactions(&self) -> &[Itemset] {
        &self.transactions
    }
}

/// Groups `(transaction_id, label)` pairs into one itemset per transaction
/// id, assigning dense item ids as labels are first seen. Duplicate pairs
/// collapse.
pub struct TransactionEncoder<T> {
    itemizer: Itemizer,
    transaction_index: FnvHashMap<T, usize>,
    transactions: Vec<Vec<Item>>,
}

impl<T: Hash + Eq> TransactionEncoder<T> {
    pub fn new() -> TransactionEncoder<T> {
        TransactionEncoder {
            itemizer: Itemizer::new(),
            transaction_index: FnvHashMap::default(),
            transactions: vec![],
        }
    }

    pub fn add(&mut self, transaction_id: T, label: &str) {
        let item = self.itemizer.id_of(label);
        let next_index = self.transactions.len();
        let index = *self
            .transaction_index
            .entry(transaction_id)
            .or_insert(next_index);
        if index == next_index {
            self.transactions.push(vec![]);
        }
        self.transactions[index].push(item);
    }

    /// Builds the transaction store now that the item domain is known.
    pub fn finish(self) -> Result<(Itemizer, TransactionStore), MiningError> {
        let domain = self.itemizer.len();
        if domain == 0 {
            return Err(MiningError::EmptyDomain);
        }
        let transactions = self
            .transactions
            .into_iter()
            .map(|items| Itemset::from_items(domain, items))
            .collect::<Result<Vec<Itemset>, MiningError>>()?;
        Ok((self.itemizer, TransactionStore::new(domain, transactions)))
    }
}

impl<T: Hash + Eq> Default for TransactionEncoder<T> {
    fn default() -> TransactionEncoder<T> {
        TransactionEncoder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::TransactionEncoder;
    use crate::error::MiningError;

    #[test]
    fn test_encode() {
        let mut encoder = TransactionEncoder::new();
        for &(tid, label) in &[
            (10, "beer"),
            (20, "chips"),
            (10, "diapers"),
            (10, "beer"),
            (30, "beer"),
        ] {
            encoder.add(tid, label);
        }
        let (itemizer, store) = encoder.finish().unwrap();
        assert_eq!(store.domain(), 3);
        assert_eq!(store.len(), 3);

        let first: Vec<&str> = store.transactions()[0]
            .items()
            .map(|i| itemizer.str_of(i))
            .collect();
        assert_eq!(first, vec!["beer", "diapers"]);
        assert_eq!(store.transactions()[1].cardinality(), 1);
        assert_eq!(store.transactions()[2].cardinality(), 1);
    }

    #[test]
    fn test_empty_input() {
        let encoder: TransactionEncoder<u32> = TransactionEncoder::new();
        match encoder.finish() {
            Err(MiningError::EmptyDomain) => {}
            other => panic!("unexpected {:?}", other.map(|(_, s)| s.len())),
        }
    }
}
