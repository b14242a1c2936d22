//! File-based CSV ingestion tests.

use std::fs;

use reorg_ingest::{IngestError, read_csv_table};

#[test]
fn reads_a_csv_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.csv");
    fs::write(&path, "name,email\nAda,ada@example.com\n").unwrap();

    let table = read_csv_table(&path).unwrap();
    assert_eq!(table.headers, ["name", "email"]);
    assert_eq!(table.rows, [["Ada", "ada@example.com"]]);

    let rows = table.to_rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["email"].render(), "ada@example.com");
}

#[test]
fn quoted_cells_keep_embedded_commas() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.csv");
    fs::write(&path, "label,qty\n\"Widget, large\",7\n").unwrap();

    let table = read_csv_table(&path).unwrap();
    assert_eq!(table.rows, [["Widget, large", "7"]]);
}

#[test]
fn missing_file_surfaces_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = read_csv_table(&dir.path().join("absent.csv"));
    assert!(matches!(result, Err(IngestError::Io(_))));
}
