use bitvec::prelude::*;

use crate::{
    matching::{match_itemset, Cursor},
    mining::projection::ProjectionIndex,
    types::{EncodedSequence, ItemId, ItemIds, Pattern, SupportCount},
};

/// One-item growth step of a prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Extension {
    /// Append the item to the last itemset of the prefix.
    SameItemset(ItemId),
    /// Append a new itemset holding only the item.
    NewItemset(ItemId),
}

impl Extension {
    pub fn item(&self) -> ItemId {
        match *self {
            Extension::SameItemset(item) | Extension::NewItemset(item) => item,
        }
    }

    pub fn grow(&self, prefix: &[ItemIds]) -> Pattern {
        let mut pattern = prefix.to_vec();
        match *self {
            Extension::SameItemset(item) if !pattern.is_empty() => {
                let last = pattern.len() - 1;
                pattern[last].push(item);
            }
            extension => pattern.push(vec![extension.item()]),
        }
        pattern
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub extension: Extension,
    pub support: SupportCount,
}

/// Every one-item extension of `prefix` reachable in the projected database,
/// with the number of projected sequences supporting it.
///
/// A sequence contributes at most once per item and extension kind, however
/// often the item recurs after its cursor. Candidates come out ordered:
/// same-itemset extensions first, then new-itemset ones, each by item id.
pub fn extend(
    sequences: &[EncodedSequence],
    index: &ProjectionIndex,
    prefix: &[ItemIds],
    num_items: usize,
) -> Vec<Candidate> {
    let mut same_counts: Vec<SupportCount> = vec![0; num_items];
    let mut new_counts: Vec<SupportCount> = vec![0; num_items];
    let mut same_seen = bitvec![0; num_items];
    let mut new_seen = bitvec![0; num_items];

    for (id, cursor) in index.iter() {
        let sequence = &sequences[id];

        match prefix.last() {
            None => mark_itemsets(&sequence[cursor.itemset..], &mut new_seen),
            Some(last) => {
                mark_same_itemset(sequence, cursor, last, &mut same_seen);
                mark_itemsets(&sequence[cursor.itemset + 1..], &mut new_seen);
            }
        }

        tally(&mut same_seen, &mut same_counts);
        tally(&mut new_seen, &mut new_counts);
    }

    let same = same_counts
        .into_iter()
        .enumerate()
        .filter(|&(_, support)| support > 0)
        .map(|(item, support)| Candidate {
            extension: Extension::SameItemset(item),
            support,
        });
    let new = new_counts
        .into_iter()
        .enumerate()
        .filter(|&(_, support)| support > 0)
        .map(|(item, support)| Candidate {
            extension: Extension::NewItemset(item),
            support,
        });

    same.chain(new).collect()
}

/// Items that can join the last prefix itemset: those after the cursor in its
/// own itemset, and those after a re-match of the last prefix itemset in any
/// later itemset.
fn mark_same_itemset(
    sequence: &[ItemIds],
    cursor: Cursor,
    last: &[ItemId],
    seen: &mut BitSlice,
) {
    mark(&sequence[cursor.itemset][cursor.item + 1..], seen);

    for itemset in &sequence[cursor.itemset + 1..] {
        if let Some(position) = match_itemset(last, itemset) {
            mark(&itemset[position + 1..], seen);
        }
    }
}

fn mark_itemsets(itemsets: &[ItemIds], seen: &mut BitSlice) {
    for itemset in itemsets {
        mark(itemset, seen);
    }
}

fn mark(items: &[ItemId], seen: &mut BitSlice) {
    for &item in items {
        seen.set(item, true);
    }
}

fn tally(seen: &mut BitSlice, counts: &mut [SupportCount]) {
    for item in seen.iter_ones() {
        counts[item] += 1;
    }
    seen.fill(false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;
    use std::collections::HashMap;

    fn supports(candidates: &[Candidate]) -> HashMap<Extension, SupportCount> {
        candidates
            .iter()
            .map(|candidate| (candidate.extension, candidate.support))
            .collect()
    }

    #[test]
    fn test_grow() {
        let prefix = vec![vec![0], vec![1]];
        assert_eq!(
            Extension::SameItemset(3).grow(&prefix),
            vec![vec![0], vec![1, 3]]
        );
        assert_eq!(
            Extension::NewItemset(3).grow(&prefix),
            vec![vec![0], vec![1], vec![3]]
        );
        assert_eq!(Extension::NewItemset(2).grow(&[]), vec![vec![2]]);
    }

    #[test]
    fn test_empty_prefix_counts_each_sequence_once() {
        let sequences = vec![vec![vec![0, 1], vec![0]], vec![vec![1]]];
        let index = ProjectionIndex::initial(sequences.len());

        let candidates = extend(&sequences, &index, &[], 2);

        assert_eq!(
            supports(&candidates),
            hashmap! {
                Extension::NewItemset(0) => 1,
                Extension::NewItemset(1) => 2,
            }
        );
    }

    #[test]
    fn test_extensions_after_cursor() {
        // (0)(0 1 2)(2) projected on (0): cursor sits on the first itemset.
        let sequences = vec![vec![vec![0], vec![0, 1, 2], vec![2]]];
        let prefix = vec![vec![0]];
        let index = ProjectionIndex::initial(1).project(&sequences, &prefix);

        let candidates = extend(&sequences, &index, &prefix, 3);

        assert_eq!(
            supports(&candidates),
            hashmap! {
                Extension::SameItemset(1) => 1,
                Extension::SameItemset(2) => 1,
                Extension::NewItemset(0) => 1,
                Extension::NewItemset(1) => 1,
                Extension::NewItemset(2) => 1,
            }
        );
    }

    #[test]
    fn test_items_before_cursor_are_ignored() {
        let sequences = vec![vec![vec![2], vec![0, 1]]];
        let prefix = vec![vec![1]];
        let index = ProjectionIndex::initial(1).project(&sequences, &prefix);

        assert!(extend(&sequences, &index, &prefix, 3).is_empty());
    }

    #[test]
    fn test_candidate_order() {
        let sequences = vec![vec![vec![0, 2], vec![1]]];
        let prefix = vec![vec![0]];
        let index = ProjectionIndex::initial(1).project(&sequences, &prefix);

        let extensions: Vec<Extension> = extend(&sequences, &index, &prefix, 3)
            .into_iter()
            .map(|candidate| candidate.extension)
            .collect();

        assert_eq!(
            extensions,
            vec![Extension::SameItemset(2), Extension::NewItemset(1)]
        );
    }
}
