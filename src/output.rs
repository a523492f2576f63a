use std::io::{self, Write};

use clap::ValueEnum;
use itertools::Itertools;
use serde::Serialize;

use crate::{
    sequence::Sequence,
    types::{PatternCounts, SupportCount},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One `<pattern> #SUP: <support>` line per pattern
    #[default]
    Text,
    /// A JSON array of `{"pattern": [[..]], "support": n}` objects
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MinedPattern<'a> {
    pub pattern: &'a Sequence,
    pub support: SupportCount,
}

/// Patterns by descending support, ties in ascending pattern order.
pub fn sorted_patterns(patterns: &PatternCounts) -> Vec<MinedPattern<'_>> {
    patterns
        .iter()
        .map(|(pattern, &support)| MinedPattern { pattern, support })
        .sorted_by(|a, b| {
            b.support
                .cmp(&a.support)
                .then_with(|| a.pattern.cmp(b.pattern))
        })
        .collect()
}

/// Writes the patterns holding at least `min_length` items.
pub fn write_patterns<W: Write>(
    writer: &mut W,
    patterns: &PatternCounts,
    min_length: usize,
    format: OutputFormat,
) -> io::Result<()> {
    let rows: Vec<MinedPattern<'_>> = sorted_patterns(patterns)
        .into_iter()
        .filter(|row| row.pattern.item_count() >= min_length)
        .collect();

    match format {
        OutputFormat::Text => {
            for row in &rows {
                writeln!(writer, "{} #SUP: {}", row.pattern, row.support)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, &rows)?;
            writeln!(writer)?;
        }
    }

    writer.flush()
}
