//! Sheet type - a named rectangular grid of text cells

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::{DEFAULT_COLS, DEFAULT_ROWS};

/// Priority label attached to a sheet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    /// Normal priority (default)
    #[default]
    Normal,
    /// High priority
    High,
    /// Low priority
    Low,
}

impl Priority {
    /// The label as shown to users
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Normal => "Normal",
            Priority::High => "High",
            Priority::Low => "Low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Normal" => Ok(Priority::Normal),
            "High" => Ok(Priority::High),
            "Low" => Ok(Priority::Low),
            other => Err(format!("Unknown priority: {}", other)),
        }
    }
}

/// A sheet (single grid in a workbook)
///
/// A sheet holds rows of text cells. The grid is rectangular: every row
/// has the same length once any structural operation completes. A sheet
/// always retains at least one row and one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    /// Sheet name
    pub name: String,
    /// Priority label
    #[serde(default)]
    pub priority: Priority,
    /// Free-text comments
    #[serde(default)]
    pub comments: String,
    /// Rows of cells, row-major
    pub data: Vec<Vec<String>>,
}

impl Sheet {
    /// Create a new sheet with the default grid size
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self::with_size(name, DEFAULT_ROWS, DEFAULT_COLS)
    }

    /// Create a new sheet with the given grid size
    pub fn with_size<S: Into<String>>(name: S, rows: usize, cols: usize) -> Self {
        Self {
            name: name.into(),
            priority: Priority::Normal,
            comments: String::new(),
            data: vec![vec![String::new(); cols]; rows],
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    /// Number of columns (the width of row 0)
    pub fn column_count(&self) -> usize {
        self.data.first().map_or(0, |r| r.len())
    }

    /// Get a cell's text, if the indices are in bounds
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.data.get(row)?.get(col).map(String::as_str)
    }

    /// Replace a cell's text
    pub fn set_cell<S: Into<String>>(&mut self, row: usize, col: usize, value: S) -> Result<()> {
        let rows = self.row_count();
        if row >= rows {
            return Err(Error::RowOutOfBounds(row, rows));
        }
        let cols = self.column_count();
        if col >= cols {
            return Err(Error::ColumnOutOfBounds(col, cols));
        }
        self.data[row][col] = value.into();
        Ok(())
    }

    /// Append a new row of empty cells
    ///
    /// The new row's width matches the current column count, or 1 if the
    /// sheet somehow has no columns.
    pub fn add_row(&mut self) {
        let cols = self.column_count().max(1);
        self.data.push(vec![String::new(); cols]);
    }

    /// Remove the last row
    ///
    /// Returns `false` without changing anything when only one row
    /// remains; a sheet never drops below one row.
    pub fn delete_row(&mut self) -> bool {
        if self.data.len() <= 1 {
            return false;
        }
        self.data.pop();
        true
    }

    /// Append an empty cell to every row
    pub fn add_column(&mut self) {
        for row in &mut self.data {
            row.push(String::new());
        }
    }

    /// Remove the last cell of every row
    ///
    /// Returns `false` without changing anything when only one column
    /// remains.
    pub fn delete_column(&mut self) -> bool {
        if self.column_count() <= 1 {
            return false;
        }
        for row in &mut self.data {
            row.pop();
        }
        true
    }

    /// Replace the grid with a fresh default-sized empty one
    ///
    /// The name is kept; priority and comments reset to their defaults.
    pub fn clear(&mut self) {
        let name = std::mem::take(&mut self.name);
        *self = Sheet::new(name);
    }

    /// Replace the grid contents wholesale
    ///
    /// Rows are padded with empty cells to the widest row's length so
    /// the grid stays rectangular; empty input resets to the default
    /// grid size.
    pub fn replace_data(&mut self, rows: Vec<Vec<String>>) {
        if rows.is_empty() {
            self.data = vec![vec![String::new(); DEFAULT_COLS]; DEFAULT_ROWS];
            return;
        }
        let width = rows.iter().map(Vec::len).max().unwrap_or(1).max(1);
        self.data = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
    }

    /// Find the first cell containing `query` as a substring
    ///
    /// Scans in row-major order (top to bottom, left to right) with a
    /// case-sensitive raw containment check. Returns `None` for an empty
    /// query or when nothing matches.
    pub fn find(&self, query: &str) -> Option<(usize, usize)> {
        if query.is_empty() {
            return None;
        }
        for (r, row) in self.data.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if cell.contains(query) {
                    return Some((r, c));
                }
            }
        }
        None
    }

    /// Check that every row has the same length as row 0
    pub fn is_rectangular(&self) -> bool {
        let cols = self.column_count();
        self.data.iter().all(|r| r.len() == cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_sheet_dimensions() {
        let sheet = Sheet::new("Sheet1");
        assert_eq!(sheet.row_count(), DEFAULT_ROWS);
        assert_eq!(sheet.column_count(), DEFAULT_COLS);
        assert_eq!(sheet.priority, Priority::Normal);
        assert_eq!(sheet.comments, "");
        assert!(sheet.is_rectangular());
    }

    #[test]
    fn test_add_row_preserves_rectangularity() {
        let mut sheet = Sheet::with_size("S", 2, 3);
        sheet.add_row();
        assert_eq!(sheet.row_count(), 3);
        assert!(sheet.is_rectangular());

        sheet.add_column();
        assert_eq!(sheet.column_count(), 4);
        assert!(sheet.is_rectangular());
    }

    #[test]
    fn test_delete_guards() {
        let mut sheet = Sheet::with_size("S", 1, 1);
        assert!(!sheet.delete_row());
        assert!(!sheet.delete_column());
        assert_eq!(sheet.row_count(), 1);
        assert_eq!(sheet.column_count(), 1);

        let mut sheet = Sheet::with_size("S", 2, 2);
        assert!(sheet.delete_row());
        assert!(sheet.delete_column());
        assert!(!sheet.delete_row());
        assert!(!sheet.delete_column());
    }

    #[test]
    fn test_set_cell_bounds() {
        let mut sheet = Sheet::with_size("S", 2, 2);
        sheet.set_cell(1, 1, "x").unwrap();
        assert_eq!(sheet.cell(1, 1), Some("x"));

        assert!(matches!(
            sheet.set_cell(2, 0, "y"),
            Err(Error::RowOutOfBounds(2, 2))
        ));
        assert!(matches!(
            sheet.set_cell(0, 2, "y"),
            Err(Error::ColumnOutOfBounds(2, 2))
        ));
    }

    #[test]
    fn test_clear_resets_grid_and_metadata() {
        let mut sheet = Sheet::with_size("Kept", 2, 2);
        sheet.set_cell(0, 0, "data").unwrap();
        sheet.priority = Priority::High;
        sheet.comments = "note".into();

        sheet.clear();

        assert_eq!(sheet.name(), "Kept");
        assert_eq!(sheet.row_count(), DEFAULT_ROWS);
        assert_eq!(sheet.column_count(), DEFAULT_COLS);
        assert_eq!(sheet.cell(0, 0), Some(""));
        assert_eq!(sheet.priority, Priority::Normal);
        assert_eq!(sheet.comments, "");
    }

    #[test]
    fn test_find_row_major_order() {
        let mut sheet = Sheet::with_size("S", 2, 2);
        sheet.set_cell(0, 0, "a").unwrap();
        sheet.set_cell(0, 1, "bx").unwrap();
        sheet.set_cell(1, 0, "c").unwrap();
        sheet.set_cell(1, 1, "d").unwrap();

        assert_eq!(sheet.find("x"), Some((0, 1)));
        assert_eq!(sheet.find(""), None);
        assert_eq!(sheet.find("zzz"), None);
    }

    #[test]
    fn test_find_is_case_sensitive() {
        let mut sheet = Sheet::with_size("S", 1, 1);
        sheet.set_cell(0, 0, "Hello").unwrap();
        assert_eq!(sheet.find("hello"), None);
        assert_eq!(sheet.find("Hell"), Some((0, 0)));
    }

    #[test]
    fn test_replace_data_pads_ragged_rows() {
        let mut sheet = Sheet::new("S");
        sheet.replace_data(vec![
            vec!["a".into(), "b".into(), "c".into()],
            vec!["d".into()],
        ]);
        assert_eq!(sheet.row_count(), 2);
        assert_eq!(sheet.column_count(), 3);
        assert!(sheet.is_rectangular());
        assert_eq!(sheet.cell(1, 2), Some(""));
    }

    #[test]
    fn test_replace_data_empty_resets_to_default() {
        let mut sheet = Sheet::with_size("S", 1, 1);
        sheet.replace_data(Vec::new());
        assert_eq!(sheet.row_count(), DEFAULT_ROWS);
        assert_eq!(sheet.column_count(), DEFAULT_COLS);
    }

    #[test]
    fn test_priority_parse_roundtrip() {
        for p in [Priority::Normal, Priority::High, Priority::Low] {
            assert_eq!(p.as_str().parse::<Priority>().unwrap(), p);
        }
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn test_serde_shape() {
        let sheet = Sheet::with_size("S", 1, 1);
        let json = serde_json::to_value(&sheet).unwrap();
        assert_eq!(json["name"], "S");
        assert_eq!(json["priority"], "Normal");
        assert_eq!(json["comments"], "");
        assert_eq!(json["data"][0][0], "");

        // Metadata fields default when absent
        let parsed: Sheet = serde_json::from_str(r#"{"name":"T","data":[["v"]]}"#).unwrap();
        assert_eq!(parsed.priority, Priority::Normal);
        assert_eq!(parsed.comments, "");
        assert_eq!(parsed.cell(0, 0), Some("v"));
    }
}
