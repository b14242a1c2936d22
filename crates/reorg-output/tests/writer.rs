use std::fs;

use reorg_model::row_from_pairs;
use reorg_output::write_rows_file;

#[test]
fn writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let headers = vec!["Name".to_string()];
    let rows = vec![row_from_pairs([("Name", "ada")])];

    write_rows_file(&path, &headers, &rows).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "Name\nada\n");
}
