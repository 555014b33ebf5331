//! Workbook type - the main document structure

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sheet::{Priority, Sheet};

/// A workbook (ordered collection of sheets plus the active selector)
///
/// A workbook always contains at least one sheet, and `active` always
/// indexes into `sheets`. Deleting the last remaining sheet replaces it
/// with a fresh default sheet instead of leaving the workbook empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workbook {
    /// Sheets in the workbook, insertion order is display order
    pub sheets: Vec<Sheet>,
    /// Active sheet index
    #[serde(default)]
    pub active: usize,
}

impl Workbook {
    /// Create a new workbook with one default sheet named `Sheet1`
    pub fn new() -> Self {
        Self {
            sheets: vec![Sheet::new("Sheet1")],
            active: 0,
        }
    }

    /// Get the number of sheets
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Get a sheet by index
    pub fn sheet(&self, index: usize) -> Option<&Sheet> {
        self.sheets.get(index)
    }

    /// Get a mutable sheet by index
    pub fn sheet_mut(&mut self, index: usize) -> Option<&mut Sheet> {
        self.sheets.get_mut(index)
    }

    /// Iterate over all sheets
    pub fn sheets(&self) -> impl Iterator<Item = &Sheet> {
        self.sheets.iter()
    }

    /// Get the active sheet index
    pub fn active(&self) -> usize {
        self.active
    }

    /// Get the active sheet
    pub fn active_sheet(&self) -> &Sheet {
        &self.sheets[self.active]
    }

    /// Get the active sheet mutably
    pub fn active_sheet_mut(&mut self) -> &mut Sheet {
        &mut self.sheets[self.active]
    }

    /// Set the active sheet index
    pub fn set_active(&mut self, index: usize) -> Result<()> {
        if index >= self.sheets.len() {
            return Err(Error::SheetOutOfBounds(index, self.sheets.len()));
        }
        self.active = index;
        Ok(())
    }

    /// Append a new default sheet and make it active
    ///
    /// When `name` is `None` or empty, a synthesized name of the form
    /// `Sheet<N>` with N = current count + 1 is used. Duplicate names are
    /// allowed by convention. Returns the new sheet's index.
    pub fn add_sheet(&mut self, name: Option<&str>) -> usize {
        let name = match name {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => format!("Sheet{}", self.sheets.len() + 1),
        };
        self.sheets.push(Sheet::new(name));
        self.active = self.sheets.len() - 1;
        self.active
    }

    /// Rename the active sheet
    ///
    /// An empty name leaves the current name unchanged.
    pub fn rename_active(&mut self, name: &str) {
        if !name.is_empty() {
            self.active_sheet_mut().set_name(name);
        }
    }

    /// Delete the active sheet
    ///
    /// When only one sheet exists it is replaced by a fresh default
    /// `Sheet1` rather than removed; otherwise the active sheet is
    /// removed and the selection moves to `max(0, active - 1)`.
    pub fn delete_active(&mut self) {
        if self.sheets.len() == 1 {
            self.sheets[0] = Sheet::new("Sheet1");
            self.active = 0;
            return;
        }
        self.sheets.remove(self.active);
        self.active = self.active.saturating_sub(1);
    }

    /// Set the active sheet's priority
    pub fn set_priority(&mut self, priority: Priority) {
        self.active_sheet_mut().priority = priority;
    }

    /// Set the active sheet's comments
    pub fn set_comments<S: Into<String>>(&mut self, comments: S) {
        self.active_sheet_mut().comments = comments.into();
    }

    /// Clamp `active` into bounds
    ///
    /// Used after deserializing external state, which may carry an
    /// out-of-range index.
    pub fn clamp_active(&mut self) {
        if self.active >= self.sheets.len() {
            self.active = self.sheets.len().saturating_sub(1);
        }
    }
}

impl Default for Workbook {
    fn default() -> Self {
        Self::new()
    }
}
