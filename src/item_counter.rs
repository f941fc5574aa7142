use crate::encoder::TransactionStore;
use crate::item::Item;

/// Per-item transaction counts, indexed by item id.
pub struct ItemCounter {
    counter: Vec<u32>,
}

impl ItemCounter {
    pub fn new() -> ItemCounter {
        ItemCounter { counter: vec![] }
    }
    pub fn from_transactions(store: &TransactionStore) -> ItemCounter {
        let mut item_count = ItemCounter::new();
        for transaction in store.transactions() {
            for item in transaction.items() {
                item_count.add(&item, 1);
            }
        }
        item_count
    }
    pub fn add(&mut self, item: &Item, count: u32) {
        let index = item.id() as usize;
        if self.counter.len() <= index {
            self.counter.resize(index + 1, 0);
        }
        self.counter[index] += count;
    }
    pub fn get(&self, item: &Item) -> u32 {
        let index = item.id() as usize;
        if index >= self.counter.len() {
            0
        } else {
            self.counter[index]
        }
    }
    pub fn num_items(&self) -> usize {
        self.counter.iter().filter(|&&count| count > 0).count()
    }
    // Items in increasing id order whose count passes `keep`.
    pub fn items_where<F>(&self, keep: F) -> Vec<(Item, u32)>
    where
        F: Fn(u32) -> bool,
    {
        let mut v: Vec<(Item, u32)> = vec![];
        for i in 1..self.counter.len() {
            if self.counter[i] > 0 && keep(self.counter[i]) {
                v.push((Item::with_id(i as u32), self.counter[i]));
            }
        }
        v
    }
}

impl Default for ItemCounter {
    fn default() -> ItemCounter {
        ItemCounter::new()
    }
}
