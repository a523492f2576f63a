use std::collections::HashMap;

use crate::sequence::Sequence;

pub type ItemId = usize;
pub type ItemName<'l> = &'l str;

/// Sorted, de-duplicated item ids of one itemset.
pub type ItemIds = Vec<ItemId>;
pub type EncodedSequence = Vec<ItemIds>;
pub type Pattern = Vec<ItemIds>;

pub type SequenceId = usize;
pub type SupportCount = usize;

pub type ReverseLookup<'l> = HashMap<ItemName<'l>, ItemId>;
pub type PatternIdCounts = HashMap<Pattern, SupportCount>;

/// Mined patterns keyed by structural equality.
pub type PatternCounts = HashMap<Sequence, SupportCount>;
