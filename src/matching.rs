//! Subsequence matching at the itemset and sequence level.
//!
//! Both routines are greedy: each needle element is matched against its
//! earliest occurrence, which makes the reported position the earliest one
//! possible. Projection relies on this.

/// Position of the last consumed item of an embedding: the itemset index in
/// the sequence and the item index inside that itemset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cursor {
    pub itemset: usize,
    pub item: usize,
}

impl Cursor {
    pub const START: Cursor = Cursor {
        itemset: 0,
        item: 0,
    };

    pub fn new(itemset: usize, item: usize) -> Self {
        Self { itemset, item }
    }
}

/// Index into `haystack` of the item that completes a match of `needle`.
///
/// Returns `None` when `needle` does not occur in order, and also for an
/// empty `needle`, which consumes nothing.
pub fn match_itemset<T: PartialEq>(needle: &[T], haystack: &[T]) -> Option<usize> {
    let mut wanted = needle.iter().peekable();

    for (position, item) in haystack.iter().enumerate() {
        if wanted.peek() == Some(&item) {
            wanted.next();
            if wanted.peek().is_none() {
                return Some(position);
            }
        }
    }

    None
}

/// Whether `needle`'s items occur in `haystack` in the same relative order.
pub fn itemset_contains<T: PartialEq>(needle: &[T], haystack: &[T]) -> bool {
    needle.is_empty() || match_itemset(needle, haystack).is_some()
}

/// Earliest position at which `prefix` is embedded in `sequence`.
///
/// Each prefix itemset must be matched by a distinct sequence itemset, later
/// than the one matching the previous prefix itemset. An empty prefix is
/// embedded everywhere and locates at [`Cursor::START`].
pub fn locate<T, S>(prefix: &[S], sequence: &[S]) -> Option<Cursor>
where
    T: PartialEq,
    S: AsRef<[T]>,
{
    let mut pending = prefix.iter();
    let mut needle = match pending.next() {
        Some(needle) => needle,
        None => return Some(Cursor::START),
    };

    for (position, itemset) in sequence.iter().enumerate() {
        if let Some(item) = match_itemset(needle.as_ref(), itemset.as_ref()) {
            match pending.next() {
                Some(next) => needle = next,
                None => return Some(Cursor::new(position, item)),
            }
        }
    }

    None
}
