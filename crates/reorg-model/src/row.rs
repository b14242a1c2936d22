//! Row representation at the engine boundary.

use std::collections::BTreeMap;

use crate::value::CellValue;

/// A decoded input or output row: source field name to scalar value.
///
/// Absent fields are simply absent from the map; the engine never fabricates
/// defaults outside the export projection.
pub type Row = BTreeMap<String, CellValue>;

/// Build a row from `(field, value)` pairs. Test and adapter convenience.
pub fn row_from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Row
where
    K: Into<String>,
    V: Into<CellValue>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}
