//! CSV encoding of transformed or projected rows.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use tracing::debug;

use reorg_model::{CellValue, Row};

use crate::error::Result;

/// Write rows under the given header order.
///
/// Works for both output shapes: the in-place transform (source headers) and
/// the export projection (display-name headers). A field absent from a row
/// encodes as an empty cell.
pub fn write_rows<W: Write>(writer: W, headers: &[String], rows: &[Row]) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_writer(writer);
    wtr.write_record(headers)?;
    for row in rows {
        let record: Vec<String> = headers
            .iter()
            .map(|header| row.get(header).map(CellValue::render).unwrap_or_default())
            .collect();
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write rows to a file, creating or truncating it.
pub fn write_rows_file(path: &Path, headers: &[String], rows: &[Row]) -> Result<()> {
    debug!(path = %path.display(), rows = rows.len(), "writing csv output");
    write_rows(File::create(path)?, headers, rows)
}

/// Encode rows into an in-memory CSV string.
pub fn rows_to_csv_string(headers: &[String], rows: &[Row]) -> Result<String> {
    let mut buffer = Vec::new();
    write_rows(&mut buffer, headers, rows)?;
    Ok(String::from_utf8(buffer)?)
}
