//! CSV reader

use std::io::Read;

use crate::error::CsvResult;

/// Naive CSV reader for grid data
///
/// Splits input on `\n` (tolerating a preceding `\r`), drops empty
/// lines, and splits each line on raw commas. Quoted fields are NOT
/// unescaped; this mirrors the export side only for cells free of
/// commas, quotes, and newlines, and is intentionally lossy otherwise.
pub struct CsvReader;

impl CsvReader {
    /// Read grid data from a reader
    pub fn read<R: Read>(mut reader: R) -> CsvResult<Vec<Vec<String>>> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self::read_str(&text))
    }

    /// Parse grid data from a string
    pub fn read_str(text: &str) -> Vec<Vec<String>> {
        text.split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .filter(|line| !line.is_empty())
            .map(|line| line.split(',').map(String::from).collect())
            .collect()
    }
}
