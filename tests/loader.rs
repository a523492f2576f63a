use std::io::Write;

use prefixspan::{prefix_span, read_sequence_file, sequence, InputFormat, LoadError};
use tempfile::NamedTempFile;

const DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data");

fn data_file(name: &str) -> String {
    format!("{}/{}", DATA_DIR, name)
}

#[test]
fn test_read_sample_files() {
    for (name, expected_len) in [
        ("sample.txt", 4),
        ("sample_colon.txt", 4),
        ("empty.txt", 0),
        ("missing.txt", 0),
    ] {
        let loaded = read_sequence_file(data_file(name), InputFormat::Auto);
        assert_eq!(loaded.database.len(), expected_len, "{}", name);
    }
}

#[test]
fn test_both_formats_load_the_same_database() {
    let spmf = read_sequence_file(data_file("sample.txt"), InputFormat::Spmf);
    let colon = read_sequence_file(data_file("sample_colon.txt"), InputFormat::Colon);

    assert!(spmf.errors.is_empty());
    assert!(colon.errors.is_empty());
    assert_eq!(spmf.database, colon.database);
    assert_eq!(spmf.database[0], sequence![[1], [1, 2, 3], [1, 3], [4], [3, 6]]);
}

#[test]
fn test_mining_a_loaded_file() {
    let loaded = read_sequence_file(data_file("sample.txt"), InputFormat::Auto);
    let patterns = prefix_span(&loaded.database, 2, 100);

    assert_eq!(patterns[&sequence![[1]]], 4);
    assert_eq!(patterns[&sequence![[1, 2]]], 2);
}

#[test]
fn test_missing_file_is_reported() {
    let loaded = read_sequence_file(data_file("missing.txt"), InputFormat::Auto);

    assert!(loaded.database.is_empty());
    match loaded.errors.as_slice() {
        [error @ LoadError::Unreadable { .. }] => {
            assert!(error.to_string().contains("missing.txt"));
        }
        other => panic!("unexpected errors: {:?}", other),
    }
}

#[test]
fn test_malformed_lines_are_skipped() {
    let loaded = read_sequence_file(data_file("malformed.txt"), InputFormat::Spmf);

    assert_eq!(
        loaded.database.sequences(),
        &[sequence![[1], [2]], sequence![[2], [1]]]
    );
    assert_eq!(loaded.errors.len(), 1);
    assert!(loaded.errors[0].to_string().contains("malformed.txt:2"));
}

#[test]
fn test_read_temporary_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "bread:milk eggs").unwrap();
    writeln!(file, "bread eggs:milk").unwrap();

    let loaded = read_sequence_file(file.path(), InputFormat::Auto);

    assert_eq!(loaded.database.len(), 2);
    let patterns = prefix_span(&loaded.database, 2, 10);
    assert_eq!(patterns[&sequence![["bread"], ["eggs"]]], 2);
    assert!(!patterns.contains_key(&sequence![["bread", "milk"]]));
}
