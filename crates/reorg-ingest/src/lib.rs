pub mod csv_table;
pub mod error;

pub use csv_table::{CsvTable, read_csv_from_reader, read_csv_table};
pub use error::{IngestError, Result};
