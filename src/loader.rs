use std::{fs, mem, path::Path};

use clap::ValueEnum;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::{
    error::LoadError,
    sequence::{Database, Item, ItemSet, Sequence},
};

const ITEMSET_END: &str = "-1";
const SEQUENCE_END: &str = "-2";
const ITEM_SEPARATOR: char = ':';

/// Text layout of a sequence file. Either way there is one sequence per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InputFormat {
    /// Pick per line: SPMF when a `-1` or `-2` token is present, colon otherwise
    #[default]
    Auto,
    /// Space separated items, `-1` closing each itemset, optional `-2` ending the line
    Spmf,
    /// Space separated itemsets, `:` separated items
    Colon,
}

/// A database together with everything that was skipped while building it.
#[derive(Debug, Default)]
pub struct Loaded {
    pub database: Database,
    pub errors: Vec<LoadError>,
}

/// Reads a sequence file. A missing or unreadable file gives an empty
/// database and an [`LoadError::Unreadable`] entry instead of failing.
pub fn read_sequence_file(path: impl AsRef<Path>, format: InputFormat) -> Loaded {
    let path = path.as_ref();

    match fs::read_to_string(path) {
        Ok(contents) => {
            let lines: Vec<&str> = contents.lines().collect();
            parse_sequences(&path.display().to_string(), &lines, format)
        }
        Err(source) => {
            let error = LoadError::Unreadable {
                path: path.to_owned(),
                source,
            };
            warn!(%error, "continuing with an empty database");
            Loaded {
                database: Database::default(),
                errors: vec![error],
            }
        }
    }
}

/// Parses one sequence per line, keeping the line order. Blank lines are
/// ignored; malformed lines are skipped and reported.
pub fn parse_sequences<S: AsRef<str> + Sync>(
    source_name: &str,
    lines: &[S],
    format: InputFormat,
) -> Loaded {
    let parsed: Vec<Result<Option<Sequence>, String>> = lines
        .par_iter()
        .map(|line| parse_line(line.as_ref(), format))
        .collect();

    let mut sequences = Vec::with_capacity(parsed.len());
    let mut errors = vec![];

    for (number, result) in parsed.into_iter().enumerate() {
        match result {
            Ok(Some(sequence)) => sequences.push(sequence),
            Ok(None) => {}
            Err(reason) => {
                let error = LoadError::MalformedLine {
                    source_name: source_name.to_owned(),
                    line: number + 1,
                    reason,
                };
                warn!(%error, "skipping malformed line");
                errors.push(error);
            }
        }
    }

    debug!(
        source = source_name,
        sequences = sequences.len(),
        skipped = errors.len(),
        "loaded sequences"
    );

    Loaded {
        database: Database::new(sequences),
        errors,
    }
}

/// Parses a single line. `Ok(None)` means the line holds no sequence.
pub fn parse_line(line: &str, format: InputFormat) -> Result<Option<Sequence>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let sequence = match format {
        InputFormat::Spmf => parse_spmf(line)?,
        InputFormat::Colon => parse_colon(line)?,
        InputFormat::Auto if is_spmf(line) => parse_spmf(line)?,
        InputFormat::Auto => parse_colon(line)?,
    };

    if sequence.is_empty() {
        Ok(None)
    } else {
        Ok(Some(sequence))
    }
}

fn is_spmf(line: &str) -> bool {
    line.split_whitespace()
        .any(|token| token == ITEMSET_END || token == SEQUENCE_END)
}

fn parse_spmf(line: &str) -> Result<Sequence, String> {
    let mut itemsets = vec![];
    let mut items: Vec<Item> = vec![];
    let mut tokens = line.split_whitespace();

    while let Some(token) = tokens.next() {
        match token {
            ITEMSET_END => {
                if items.is_empty() {
                    return Err(format!("empty itemset before {:?}", ITEMSET_END));
                }
                itemsets.push(ItemSet::new(mem::take(&mut items)));
            }
            SEQUENCE_END => {
                if let Some(extra) = tokens.next() {
                    return Err(format!("unexpected {:?} after {:?}", extra, SEQUENCE_END));
                }
                break;
            }
            item => items.push(item.to_owned()),
        }
    }

    if !items.is_empty() {
        itemsets.push(ItemSet::new(items));
    }

    Ok(Sequence::new(itemsets))
}

fn parse_colon(line: &str) -> Result<Sequence, String> {
    line.split_whitespace()
        .map(|group| {
            let items: Vec<Item> = group.split(ITEM_SEPARATOR).map(str::to_owned).collect();
            if items.iter().any(String::is_empty) {
                Err(format!("empty item in {:?}", group))
            } else {
                Ok(ItemSet::new(items))
            }
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Sequence::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence;

    #[test]
    fn test_parse_spmf_line() {
        assert_eq!(
            parse_line("1 -1 1 2 3 -1 4 -1 -2", InputFormat::Spmf),
            Ok(Some(sequence![[1], [1, 2, 3], [4]]))
        );
    }

    #[test]
    fn test_parse_spmf_without_terminators() {
        assert_eq!(
            parse_line("a b -1 c", InputFormat::Spmf),
            Ok(Some(sequence![["a", "b"], ["c"]]))
        );
    }

    #[test]
    fn test_parse_spmf_malformed() {
        assert!(parse_line("1 -1 -1 2 -1 -2", InputFormat::Spmf).is_err());
        assert!(parse_line("1 -1 -2 3", InputFormat::Spmf).is_err());
    }

    #[test]
    fn test_parse_colon_line() {
        assert_eq!(
            parse_line("a:b c d:e:f", InputFormat::Colon),
            Ok(Some(sequence![["a", "b"], ["c"], ["d", "e", "f"]]))
        );
        assert!(parse_line("a::b", InputFormat::Colon).is_err());
        assert!(parse_line("a: b", InputFormat::Colon).is_err());
    }

    #[test]
    fn test_parsed_itemsets_are_sorted() {
        let parsed = parse_line("b:a:b c", InputFormat::Colon);
        assert_eq!(parsed, Ok(Some(sequence![["a", "b"], ["c"]])));
        assert_eq!(
            parse_line("3 1 -1 2 -1 -2", InputFormat::Spmf),
            Ok(Some(sequence![[1, 3], [2]]))
        );
    }

    #[test]
    fn test_parse_auto() {
        assert_eq!(
            parse_line("1 2 -1 3 -1 -2", InputFormat::Auto),
            Ok(Some(sequence![[1, 2], [3]]))
        );
        assert_eq!(
            parse_line("1:2 3", InputFormat::Auto),
            Ok(Some(sequence![[1, 2], [3]]))
        );
    }

    #[test]
    fn test_blank_lines_hold_no_sequence() {
        assert_eq!(parse_line("   ", InputFormat::Auto), Ok(None));
        assert_eq!(parse_line("-2", InputFormat::Spmf), Ok(None));
    }

    #[test]
    fn test_parse_sequences_keeps_order_and_reports_lines() {
        let lines = ["1 -1 2 -1 -2", "", "3 -1 -1 -2", "4 -1 -2"];
        let loaded = parse_sequences("inline", &lines, InputFormat::Spmf);

        assert_eq!(
            loaded.database,
            Database::new(vec![sequence![[1], [2]], sequence![[4]]])
        );
        assert_eq!(loaded.errors.len(), 1);
        assert!(matches!(
            &loaded.errors[0],
            LoadError::MalformedLine { line: 3, .. }
        ));
    }

    #[test]
    fn test_missing_file_gives_empty_database() {
        let loaded = read_sequence_file("does/not/exist.txt", InputFormat::Auto);

        assert!(loaded.database.is_empty());
        assert!(matches!(
            loaded.errors.as_slice(),
            [LoadError::Unreadable { .. }]
        ));
    }
}
