use std::fmt;

/// A dense item id in `[1, m]`, assigned by the `Itemizer`.
#[derive(Copy, Clone, Hash, PartialOrd, PartialEq, Eq, Ord, Debug)]
pub struct Item {
    id: u32,
}

impl Item {
    pub fn with_id(id: u32) -> Item {
        Item { id }
    }
    pub fn id(&self) -> u32 {
        self.id
    }
    // Position of this item's bit in an itemset; ids start at 1.
    pub fn bit_index(&self) -> usize {
        self.id as usize - 1
    }
    pub fn from_bit_index(index: usize) -> Item {
        Item::with_id(index as u32 + 1)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

// If all labels convert to an integer, order by that integer,
// otherwise order lexicographically.
pub fn sort_labels(a: &mut Vec<&str>) {
    let all_labels_convert_to_ints = a.iter().all(|x| x.parse::<i64>().is_ok());
    if all_labels_convert_to_ints {
        a.sort_by_key(|x| x.parse::<i64>().unwrap_or(0));
    } else {
        a.sort();
    }
}
