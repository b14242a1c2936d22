//! Export boundary: filename resolution and CSV encoding.

pub mod error;
pub mod filename;
pub mod writer;

pub use error::{OutputError, Result};
pub use filename::{
    DATE_TOKEN, DEFAULT_OUTPUT_NAME, ORIGINAL_NAME_TOKEN, resolve_output_filename,
    resolve_output_filename_today,
};
pub use writer::{rows_to_csv_string, write_rows, write_rows_file};
