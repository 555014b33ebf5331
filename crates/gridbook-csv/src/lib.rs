//! # gridbook-csv
//!
//! CSV export and import for a single gridbook sheet.
//!
//! Export and import are deliberately asymmetric: the writer quotes and
//! escapes fields that need it, while the reader splits lines on raw
//! commas without interpreting quotes. A CSV round trip is therefore
//! lossy exactly for cells containing a comma, a quote, or a newline.

mod error;
mod reader;
mod writer;

pub use error::{CsvError, CsvResult};
pub use reader::CsvReader;
pub use writer::{csv_file_name, CsvWriter};
