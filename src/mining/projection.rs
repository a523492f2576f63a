use crate::{
    matching::{locate, Cursor},
    types::{EncodedSequence, ItemIds, SequenceId},
};

/// Pseudo-projection of the database on the current prefix.
///
/// Holds, in ascending sequence id order, one cursor per sequence that still
/// embeds the prefix. Sequences that stopped supporting the prefix are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectionIndex {
    entries: Vec<(SequenceId, Cursor)>,
}

impl ProjectionIndex {
    /// Index of the empty prefix: every sequence, matching from the start.
    pub fn initial(num_sequences: usize) -> Self {
        Self {
            entries: (0..num_sequences).map(|id| (id, Cursor::START)).collect(),
        }
    }

    /// Re-embeds `prefix` in every sequence still present in this index.
    ///
    /// The earliest embedding is recomputed from the start of each sequence
    /// since an extension can move it.
    pub fn project(&self, sequences: &[EncodedSequence], prefix: &[ItemIds]) -> Self {
        let entries = self
            .entries
            .iter()
            .filter_map(|&(id, _)| locate(prefix, &sequences[id]).map(|cursor| (id, cursor)))
            .collect();

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SequenceId, Cursor)> + '_ {
        self.entries.iter().copied()
    }

    #[cfg(test)]
    fn cursor(&self, id: SequenceId) -> Option<Cursor> {
        self.entries
            .binary_search_by_key(&id, |&(entry_id, _)| entry_id)
            .ok()
            .map(|position| self.entries[position].1)
    }
}
