// tests/unit_reader.rs
//! Tests for the line-delimited record reader.

use std::io::Write;

use costar_core::record::{read_records, RecordReader};
use tempfile::NamedTempFile;

fn dataset(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    for line in lines {
        writeln!(file, "{line}").expect("write line");
    }
    file
}

#[test]
fn test_reads_well_formed_records() {
    let file = dataset(&[
        r#"{"title":"Heat","genres":["Crime","Thriller"],"actors":[["nm1","Al Pacino"],["nm2","Robert De Niro"]]}"#,
        r#"{"title":"Ronin","genres":["Action"],"actors":[["nm2","Robert De Niro"]]}"#,
    ]);

    let (records, stats) = read_records(file.path()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(stats.parsed, 2);
    assert_eq!(stats.malformed, 0);
    assert_eq!(records[0].title.as_deref(), Some("Heat"));
    assert_eq!(records[0].actors.len(), 2);
    assert_eq!(records[0].actors[0].0, "nm1");
    assert_eq!(records[0].genres, vec!["Crime", "Thriller"]);
}

#[test]
fn test_skips_and_counts_malformed_lines() {
    let file = dataset(&[
        r#"{"title":"Good","actors":[["nm1","A"],["nm2","B"]]}"#,
        r#"{"title":"Broken""#,
        "not json at all",
        r#"{"title":"Also good","actors":[]}"#,
    ]);

    let (records, stats) = read_records(file.path()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(stats.parsed, 2);
    assert_eq!(stats.malformed, 2);
}

#[test]
fn test_blank_lines_ignored() {
    let file = dataset(&[
        "",
        r#"{"actors":[["nm1","A"]]}"#,
        "   ",
        "",
    ]);

    let (records, stats) = read_records(file.path()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(stats.blank, 3);
    assert_eq!(stats.malformed, 0);
}

#[test]
fn test_genres_accepts_joined_string() {
    let file = dataset(&[
        r#"{"genres":"Action, Sci-Fi ,  ","actors":[["nm1","A"]]}"#,
    ]);
    let (records, _) = read_records(file.path()).unwrap();
    assert_eq!(records[0].genres, vec!["Action", "Sci-Fi"]);
}

#[test]
fn test_casts_alias_for_actors() {
    let file = dataset(&[r#"{"casts":[["nm1","A"],["nm2","B"]]}"#]);
    let (records, _) = read_records(file.path()).unwrap();
    assert_eq!(records[0].actors.len(), 2);
}

#[test]
fn test_missing_fields_default_empty() {
    let file = dataset(&[r#"{"title":"Bare"}"#]);
    let (records, stats) = read_records(file.path()).unwrap();
    assert_eq!(stats.parsed, 1);
    assert!(records[0].actors.is_empty());
    assert!(records[0].genres.is_empty());
}

#[test]
fn test_open_missing_file_is_io_error() {
    let err = RecordReader::open(std::path::Path::new("no/such/movies.json")).unwrap_err();
    assert!(matches!(err, costar_core::error::CostarError::Io { .. }));
}

#[test]
fn test_streaming_cap_with_take() {
    let file = dataset(&[
        r#"{"actors":[["nm1","A"]]}"#,
        r#"{"actors":[["nm2","B"]]}"#,
        r#"{"actors":[["nm3","C"]]}"#,
    ]);
    let mut reader = RecordReader::open(file.path()).unwrap();
    let records: Vec<_> = reader.by_ref().take(2).collect();
    assert_eq!(records.len(), 2);
    assert_eq!(reader.stats().parsed, 2);
}
