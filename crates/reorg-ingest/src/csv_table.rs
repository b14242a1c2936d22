//! CSV decoding into a header/rows table and engine row maps.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use reorg_model::{CellValue, Row};

use crate::error::{IngestError, Result};

/// A decoded CSV file: normalized headers plus string cells.
///
/// Cells stay textual even when they look numeric; the engine coerces on
/// demand. Short records are padded with empty cells so every row has one
/// cell per header.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Convert to engine rows keyed by header name.
    ///
    /// Headers with an empty name are dropped; when a header repeats, the
    /// last occurrence wins.
    pub fn to_rows(&self) -> Vec<Row> {
        self.rows
            .iter()
            .map(|cells| {
                self.headers
                    .iter()
                    .zip(cells)
                    .filter(|(header, _)| !header.is_empty())
                    .map(|(header, cell)| (header.clone(), CellValue::Text(cell.clone())))
                    .collect()
            })
            .collect()
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim_matches('\u{feff}').to_string()
}

/// Read a CSV file into a [`CsvTable`].
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    debug!(path = %path.display(), "reading csv file");
    read_csv_from_reader(File::open(path)?)
}

/// Read CSV content from any reader into a [`CsvTable`].
///
/// Records with fewer cells than the header are padded with empty strings;
/// extra cells beyond the header are kept out of the table.
pub fn read_csv_from_reader<R: Read>(reader: R) -> Result<CsvTable> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_reader(reader);

    let mut records = rdr.records();
    let Some(first) = records.next() else {
        return Err(IngestError::EmptyInput);
    };
    let headers: Vec<String> = first?.iter().map(normalize_header).collect();
    let width = headers.len();

    let mut rows = Vec::new();
    for record in records {
        let record = record?;
        let mut cells: Vec<String> = record.iter().take(width).map(normalize_cell).collect();
        cells.resize(width, String::new());
        rows.push(cells);
    }

    debug!(columns = headers.len(), rows = rows.len(), "decoded csv table");
    Ok(CsvTable { headers, rows })
}
