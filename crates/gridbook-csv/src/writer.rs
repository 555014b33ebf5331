//! CSV writer

use std::io::Write;

use csv::{Terminator, WriterBuilder};
use gridbook_core::Sheet;

use crate::error::CsvResult;

/// CSV writer for a single sheet
///
/// Rows are terminated by LF; a field is quoted only when it contains a
/// comma, a quote, or a line break, with internal quotes doubled.
pub struct CsvWriter;

impl CsvWriter {
    /// Write a sheet's grid to a writer
    pub fn write<W: Write>(sheet: &Sheet, writer: W) -> CsvResult<()> {
        let mut csv_writer = WriterBuilder::new()
            .terminator(Terminator::Any(b'\n'))
            .from_writer(writer);

        for row in &sheet.data {
            csv_writer.write_record(row)?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Render a sheet's grid as a CSV string
    pub fn write_string(sheet: &Sheet) -> CsvResult<String> {
        let mut buf = Vec::new();
        Self::write(sheet, &mut buf)?;
        // The csv crate only emits valid UTF-8 for UTF-8 input.
        Ok(String::from_utf8(buf).expect("CSV output is UTF-8"))
    }
}

/// Download-style file name for a sheet's CSV export
///
/// Whitespace runs in the sheet name are replaced by `_`, then `.csv` is
/// appended.
pub fn csv_file_name(sheet: &Sheet) -> String {
    let mut name = String::new();
    let mut in_space = false;
    for ch in sheet.name().chars() {
        if ch.is_whitespace() {
            if !in_space {
                name.push('_');
            }
            in_space = true;
        } else {
            name.push(ch);
            in_space = false;
        }
    }
    name.push_str(".csv");
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sheet_from(rows: &[&[&str]]) -> Sheet {
        let mut sheet = Sheet::with_size("S", rows.len(), rows[0].len());
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                sheet.set_cell(r, c, *cell).unwrap();
            }
        }
        sheet
    }

    #[test]
    fn test_plain_cells_unquoted() {
        let sheet = sheet_from(&[&["a", "b"], &["c", "d"]]);
        assert_eq!(CsvWriter::write_string(&sheet).unwrap(), "a,b\nc,d\n");
    }

    #[test]
    fn test_quotes_only_when_needed() {
        let sheet = sheet_from(&[&["x", "y,z", "has \"quotes\"", "multi\nline"]]);
        assert_eq!(
            CsvWriter::write_string(&sheet).unwrap(),
            "x,\"y,z\",\"has \"\"quotes\"\"\",\"multi\nline\"\n"
        );
    }

    #[test]
    fn test_empty_cells() {
        let sheet = Sheet::with_size("S", 2, 3);
        assert_eq!(CsvWriter::write_string(&sheet).unwrap(), ",,\n,,\n");
    }

    #[test]
    fn test_csv_file_name() {
        let sheet = Sheet::new("Q1  Budget report");
        assert_eq!(csv_file_name(&sheet), "Q1_Budget_report.csv");

        let sheet = Sheet::new("Plain");
        assert_eq!(csv_file_name(&sheet), "Plain.csv");
    }
}
