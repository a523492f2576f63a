use std::collections::{BTreeSet, HashMap};

use crate::{
    sequence::{Database, ItemSet, Sequence},
    types::{EncodedSequence, ItemId, ItemIds, ItemName, Pattern, ReverseLookup},
};

/// Dense ids for the item labels of one database.
///
/// Ids are handed out in ascending label order, so comparing ids is the same
/// as comparing labels. That is the canonical item order patterns grow in.
#[derive(Debug, Clone, Default)]
pub struct Inventory<'l> {
    names: Vec<ItemName<'l>>,
    reverse_lookup: ReverseLookup<'l>,
}

impl<'l> Inventory<'l> {
    pub fn build(database: &'l Database) -> Self {
        let names: Vec<ItemName<'l>> = database
            .iter()
            .flat_map(Sequence::iter)
            .flat_map(ItemSet::iter)
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let reverse_lookup = names
            .iter()
            .enumerate()
            .map(|(item_id, &name)| (name, item_id))
            .collect::<HashMap<_, _>>();

        Self {
            names,
            reverse_lookup,
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn id(&self, name: &str) -> Option<ItemId> {
        self.reverse_lookup.get(name).copied()
    }

    pub fn name(&self, item_id: ItemId) -> ItemName<'l> {
        self.names[item_id]
    }

    /// Canonical id form of every sequence: each itemset sorted and de-duplicated.
    ///
    /// `database` must be the one this inventory was built from.
    pub fn encode(&self, database: &Database) -> Vec<EncodedSequence> {
        database
            .iter()
            .map(|sequence| {
                sequence
                    .iter()
                    .map(|itemset| self.encode_itemset(itemset))
                    .collect::<EncodedSequence>()
            })
            .collect()
    }

    fn encode_itemset(&self, itemset: &ItemSet) -> ItemIds {
        let mut items: ItemIds = itemset
            .iter()
            .filter_map(|name| self.id(name))
            .collect();
        items.sort_unstable();
        items.dedup();
        items
    }

    pub fn decode(&self, pattern: &Pattern) -> Sequence {
        pattern
            .iter()
            .map(|items| {
                items
                    .iter()
                    .map(|&item_id| self.name(item_id).to_owned())
                    .collect::<ItemSet>()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_label_order() {
        let database = Database::new(vec![
            crate::sequence![["milk", "bread"]],
            crate::sequence![["cheese"], ["bread"]],
        ]);
        let inventory = Inventory::build(&database);

        assert_eq!(inventory.len(), 3);
        assert_eq!(inventory.id("bread"), Some(0));
        assert_eq!(inventory.id("cheese"), Some(1));
        assert_eq!(inventory.id("milk"), Some(2));
        assert_eq!(inventory.id("eggs"), None);
        assert_eq!(inventory.name(1), "cheese");
    }

    #[test]
    fn test_encode_sorts_and_dedups_itemsets() {
        let database = Database::new(vec![crate::sequence![["c", "a", "c"], ["b"]]]);
        let inventory = Inventory::build(&database);

        assert_eq!(inventory.encode(&database), vec![vec![vec![0, 2], vec![1]]]);
    }

    #[test]
    fn test_decode() {
        let database = Database::new(vec![crate::sequence![["x", "y"], ["z"]]]);
        let inventory = Inventory::build(&database);

        let decoded = inventory.decode(&vec![vec![0, 1], vec![2]]);
        assert_eq!(decoded, crate::sequence![["x", "y"], ["z"]]);
    }

    #[test]
    fn test_empty_database() {
        let database = Database::default();
        let inventory = Inventory::build(&database);
        assert!(inventory.is_empty());
        assert!(inventory.encode(&database).is_empty());
    }
}
