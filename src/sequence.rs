use std::fmt::{Display, Formatter, Result};
use std::ops::Index;

use itertools::Itertools;
use serde::Serialize;

use crate::matching::{itemset_contains, locate, Cursor};

pub type Item = String;

/// Builds a [`Sequence`] from bracketed groups of items.
///
/// Every item is converted with `to_string`, so both `sequence![["a", "b"], ["c"]]`
/// and `sequence![[1, 2], [3]]` work.
#[macro_export]
macro_rules! sequence {
    ($([$($item:expr),* $(,)?]),* $(,)?) => {
        $crate::sequence::Sequence::new(vec![
            $($crate::sequence::ItemSet::new(vec![$($item.to_string()),*])),*
        ])
    };
}

/// A group of items that occur together.
///
/// Items are kept sorted and free of duplicates, so two itemsets holding the
/// same items compare equal and containment is a plain ordered scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemSet {
    items: Vec<Item>,
}

impl ItemSet {
    pub fn new(mut items: Vec<Item>) -> Self {
        items.sort_unstable();
        items.dedup();
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|x| x == item)
    }

    /// Whether every item of `other` is also in this itemset.
    pub fn contains_itemset(&self, other: &ItemSet) -> bool {
        itemset_contains(&other.items, &self.items)
    }
}

impl AsRef<[Item]> for ItemSet {
    fn as_ref(&self) -> &[Item] {
        &self.items
    }
}

impl Index<usize> for ItemSet {
    type Output = Item;

    fn index(&self, index: usize) -> &Item {
        &self.items[index]
    }
}

impl<S: Into<Item>> FromIterator<S> for ItemSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

impl Display for ItemSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "({})", self.items.iter().join(" "))
    }
}

/// A time-ordered list of itemsets, one record of a [`Database`].
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Sequence {
    itemsets: Vec<ItemSet>,
}

impl Sequence {
    pub fn new(itemsets: Vec<ItemSet>) -> Self {
        Self { itemsets }
    }

    pub fn itemsets(&self) -> &[ItemSet] {
        &self.itemsets
    }

    /// Number of itemsets. See [`Sequence::item_count`] for the number of items.
    pub fn len(&self) -> usize {
        self.itemsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.itemsets.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.itemsets.iter().map(ItemSet::len).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ItemSet> {
        self.itemsets.iter()
    }

    pub fn push(&mut self, itemset: ItemSet) {
        self.itemsets.push(itemset);
    }

    pub fn contains_item(&self, item: &str) -> bool {
        self.itemsets.iter().any(|itemset| itemset.contains(item))
    }

    /// Earliest position at which `pattern` is fully embedded in this sequence.
    pub fn locate(&self, pattern: &Sequence) -> Option<Cursor> {
        locate(&pattern.itemsets, &self.itemsets)
    }

    pub fn embeds(&self, pattern: &Sequence) -> bool {
        self.locate(pattern).is_some()
    }
}

impl Index<usize> for Sequence {
    type Output = ItemSet;

    fn index(&self, index: usize) -> &ItemSet {
        &self.itemsets[index]
    }
}

impl FromIterator<ItemSet> for Sequence {
    fn from_iter<I: IntoIterator<Item = ItemSet>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for itemset in &self.itemsets {
            write!(f, "{}", itemset)?;
        }
        Ok(())
    }
}

/// The fixed input of one mining run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Database {
    sequences: Vec<Sequence>,
}

impl Database {
    pub fn new(sequences: Vec<Sequence>) -> Self {
        Self { sequences }
    }

    pub fn sequences(&self) -> &[Sequence] {
        &self.sequences
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sequence> {
        self.sequences.iter()
    }

    pub fn contains_item(&self, item: &str) -> bool {
        self.sequences.iter().any(|sequence| sequence.contains_item(item))
    }

    /// Number of sequences containing `item` at least once.
    pub fn item_support(&self, item: &str) -> usize {
        self.sequences
            .iter()
            .filter(|sequence| sequence.contains_item(item))
            .count()
    }

    /// Number of sequences that embed `pattern`, by direct embedding checks.
    pub fn support(&self, pattern: &Sequence) -> usize {
        self.sequences
            .iter()
            .filter(|sequence| sequence.embeds(pattern))
            .count()
    }
}

impl Index<usize> for Database {
    type Output = Sequence;

    fn index(&self, index: usize) -> &Sequence {
        &self.sequences[index]
    }
}

impl FromIterator<Sequence> for Database {
    fn from_iter<I: IntoIterator<Item = Sequence>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
