//! Dataset transformation and export projection.
//!
//! Two independent operations that callers compose: [`transform_rows`]
//! applies column pipelines in place-shape (same field keys as the input),
//! and [`project_rows`] re-keys rows to the columns' display names for the
//! final deliverable. Neither mutates its input.

use reorg_model::{CellValue, Column, Row};
use tracing::debug;

use crate::pipeline::run_column;

/// Apply every configured column pipeline across all rows.
///
/// Returns new rows with the same field keys as the input. Columns without
/// rules leave their field untouched; a column whose source field is absent
/// from a row is skipped for that row. When no column carries any rule the
/// input is returned as-is (cloned), since an empty pipeline is identity.
pub fn transform_rows(rows: &[Row], columns: &[Column]) -> Vec<Row> {
    if columns.iter().all(|column| column.rules.is_empty()) {
        return rows.to_vec();
    }

    let ruled: Vec<&Column> = columns
        .iter()
        .filter(|column| !column.rules.is_empty())
        .collect();

    rows.iter()
        .map(|row| {
            let mut out = row.clone();
            for column in &ruled {
                match row.get(&column.source_name) {
                    Some(value) => {
                        out.insert(
                            column.source_name.clone(),
                            run_column(value, &column.rules),
                        );
                    }
                    None => {
                        debug!(
                            field = %column.source_name,
                            "source field absent from row, skipping column"
                        );
                    }
                }
            }
            out
        })
        .collect()
}

/// Build export rows keyed by each column's display name.
///
/// Values are taken from the row's source field, defaulting to empty text
/// when the field is missing. This projection does not run rules; compose it
/// with [`transform_rows`] when the deliverable needs transformed values.
pub fn project_rows(rows: &[Row], columns: &[Column]) -> Vec<Row> {
    let mut ordered: Vec<&Column> = columns.iter().collect();
    ordered.sort_by_key(|column| column.position);

    rows.iter()
        .map(|row| {
            ordered
                .iter()
                .map(|column| {
                    let value = row
                        .get(&column.source_name)
                        .cloned()
                        .unwrap_or_else(|| CellValue::Text(String::new()));
                    (column.display_name.clone(), value)
                })
                .collect()
        })
        .collect()
}
