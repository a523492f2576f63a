use std::collections::HashMap;
use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, trace};

use crate::{
    inventory::Inventory,
    sequence::Database,
    types::{EncodedSequence, ItemIds, PatternCounts, PatternIdCounts, SupportCount},
};

pub mod candidates;
pub mod projection;

use candidates::extend;
use projection::ProjectionIndex;

/// Mine every pattern of at most `max_length` items supported by at least
/// `min_support` sequences of `database`.
///
/// `min_support` is an absolute sequence count. Convert a relative threshold
/// with [`MinSupport::to_count`](crate::config::MinSupport::to_count) first.
pub fn prefix_span(
    database: &Database,
    min_support: SupportCount,
    max_length: usize,
) -> PatternCounts {
    PrefixSpan::new(min_support, max_length).mine(database)
}

/// Depth-first PrefixSpan miner over pseudo-projected databases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixSpan {
    min_support: SupportCount,
    max_length: usize,
}

impl PrefixSpan {
    pub fn new(min_support: SupportCount, max_length: usize) -> Self {
        Self {
            min_support,
            max_length,
        }
    }

    pub fn mine(&self, database: &Database) -> PatternCounts {
        self.run(database, None).unwrap_or_default()
    }

    /// Like [`PrefixSpan::mine`], but gives up as soon as `cancel` is set.
    ///
    /// The flag is checked once per search frame. A cancelled run returns
    /// `None`: partial results are not reported.
    pub fn mine_until_cancelled(
        &self,
        database: &Database,
        cancel: &AtomicBool,
    ) -> Option<PatternCounts> {
        self.run(database, Some(cancel))
    }

    fn run(&self, database: &Database, cancel: Option<&AtomicBool>) -> Option<PatternCounts> {
        let inventory = Inventory::build(database);
        let sequences = inventory.encode(database);

        debug!(
            sequences = sequences.len(),
            items = inventory.len(),
            min_support = self.min_support,
            max_length = self.max_length,
            "mining sequential patterns"
        );

        let search = Search {
            sequences: &sequences,
            num_items: inventory.len(),
            min_support: self.min_support,
            max_length: self.max_length,
            cancel,
        };
        let mut found: PatternIdCounts = HashMap::new();
        let index = ProjectionIndex::initial(sequences.len());

        if search.grow(&[], 0, &index, &mut found).is_break() {
            debug!(found = found.len(), "mining cancelled");
            return None;
        }

        let patterns: PatternCounts = found
            .iter()
            .map(|(pattern, &support)| (inventory.decode(pattern), support))
            .collect();
        debug!(patterns = patterns.len(), "mining finished");

        Some(patterns)
    }
}

struct Search<'a> {
    sequences: &'a [EncodedSequence],
    num_items: usize,
    min_support: SupportCount,
    max_length: usize,
    cancel: Option<&'a AtomicBool>,
}

impl Search<'_> {
    /// One search frame: `prefix` holds `prefix_length` items and `index` is
    /// its projection.
    fn grow(
        &self,
        prefix: &[ItemIds],
        prefix_length: usize,
        index: &ProjectionIndex,
        found: &mut PatternIdCounts,
    ) -> ControlFlow<()> {
        if self.is_cancelled() {
            return ControlFlow::Break(());
        }
        if prefix_length >= self.max_length {
            return ControlFlow::Continue(());
        }
        // No extension is supported by more sequences than the prefix.
        if index.is_empty() || index.len() < self.min_support {
            return ControlFlow::Continue(());
        }

        let candidates = extend(self.sequences, index, prefix, self.num_items);

        for candidate in candidates
            .into_iter()
            .filter(|candidate| candidate.support >= self.min_support)
        {
            let pattern = candidate.extension.grow(prefix);
            trace!(?pattern, support = candidate.support, "frequent pattern");

            if prefix_length + 1 < self.max_length {
                let projected = index.project(self.sequences, &pattern);
                let descent = self.grow(&pattern, prefix_length + 1, &projected, found);
                found.insert(pattern, candidate.support);
                if descent.is_break() {
                    return ControlFlow::Break(());
                }
            } else {
                found.insert(pattern, candidate.support);
            }
        }

        ControlFlow::Continue(())
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .map_or(false, |cancel| cancel.load(Ordering::Relaxed))
    }
}
