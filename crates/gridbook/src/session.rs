//! Session: the explicit command interface over a workbook
//!
//! Every user action the editor exposes (row/column edits, sheet
//! management, saves, imports) is a method here, so any front end - UI,
//! CLI, or test harness - drives the same code path. Mutating commands
//! apply to the in-memory workbook and then schedule a debounced local
//! save, mirroring the editor's mutate-then-autosave flow.

use std::sync::Arc;

use gridbook_core::{Priority, Workbook};
use gridbook_csv::{CsvReader, CsvResult, CsvWriter};
use gridbook_remote::{BatchReport, RemoteClient, RemoteConfig, RemoteResult};
use gridbook_store::{
    export_portable, import_portable, KeyValueStore, LocalStore, SaveReceipt, StoreResult,
};

/// An editing session: one workbook plus its local persistence
pub struct Session {
    workbook: Workbook,
    store: LocalStore,
}

impl Session {
    /// Start a session backed by `store`, loading any persisted workbook
    ///
    /// Loading is fail-soft; a missing or malformed record yields a
    /// fresh default workbook.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let store = LocalStore::new(store);
        let workbook = store.load();
        Self { workbook, store }
    }

    /// Start a session from an existing workbook and store
    pub fn from_parts(workbook: Workbook, store: LocalStore) -> Self {
        Self { workbook, store }
    }

    /// The current workbook
    pub fn workbook(&self) -> &Workbook {
        &self.workbook
    }

    /// Enable or disable debounced autosave
    pub fn set_autosave(&mut self, enabled: bool) {
        self.store.set_autosave(enabled);
    }

    fn autosave(&self) {
        self.store.save(&self.workbook);
    }

    // === Grid edits (active sheet) ===

    /// Append a row to the active sheet
    pub fn add_row(&mut self) {
        self.workbook.active_sheet_mut().add_row();
        self.autosave();
    }

    /// Remove the last row of the active sheet; `false` if it was the
    /// only row
    pub fn delete_row(&mut self) -> bool {
        let changed = self.workbook.active_sheet_mut().delete_row();
        if changed {
            self.autosave();
        }
        changed
    }

    /// Append a column to the active sheet
    pub fn add_column(&mut self) {
        self.workbook.active_sheet_mut().add_column();
        self.autosave();
    }

    /// Remove the last column of the active sheet; `false` if it was
    /// the only column
    pub fn delete_column(&mut self) -> bool {
        let changed = self.workbook.active_sheet_mut().delete_column();
        if changed {
            self.autosave();
        }
        changed
    }

    /// Replace a cell's text on the active sheet
    pub fn set_cell<S: Into<String>>(
        &mut self,
        row: usize,
        col: usize,
        value: S,
    ) -> gridbook_core::Result<()> {
        self.workbook.active_sheet_mut().set_cell(row, col, value)?;
        self.autosave();
        Ok(())
    }

    /// Find the first active-sheet cell containing `query`
    pub fn find(&self, query: &str) -> Option<(usize, usize)> {
        self.workbook.active_sheet().find(query)
    }

    // === Sheet management ===

    /// Add a new sheet (default name when `None`/empty) and select it
    pub fn new_sheet(&mut self, name: Option<&str>) -> usize {
        let index = self.workbook.add_sheet(name);
        self.autosave();
        index
    }

    /// Rename the active sheet; an empty name is a no-op
    pub fn rename_sheet(&mut self, name: &str) {
        self.workbook.rename_active(name);
        self.autosave();
    }

    /// Delete the active sheet (the sole sheet is replaced, not removed)
    pub fn delete_sheet(&mut self) {
        self.workbook.delete_active();
        self.autosave();
    }

    /// Reset the active sheet to a fresh default grid, keeping its name
    pub fn clear_sheet(&mut self) {
        self.workbook.active_sheet_mut().clear();
        self.autosave();
    }

    /// Select the active sheet by index
    pub fn select_sheet(&mut self, index: usize) -> gridbook_core::Result<()> {
        self.workbook.set_active(index)?;
        self.autosave();
        Ok(())
    }

    /// Set the active sheet's priority
    pub fn set_priority(&mut self, priority: Priority) {
        self.workbook.set_priority(priority);
        self.autosave();
    }

    /// Set the active sheet's comments
    pub fn set_comments<S: Into<String>>(&mut self, comments: S) {
        self.workbook.set_comments(comments);
        self.autosave();
    }

    // === Local persistence ===

    /// Save immediately, bypassing the debounce window (the Ctrl+S path)
    pub fn save_local(&self) -> StoreResult<SaveReceipt> {
        self.store.save_now(&self.workbook)
    }

    /// Export the full workbook as portable JSON bytes
    pub fn export_json(&self) -> StoreResult<Vec<u8>> {
        export_portable(&self.workbook)
    }

    /// Replace the workbook from a portable JSON snapshot
    ///
    /// An invalid payload leaves the current workbook untouched.
    pub fn import_json(&mut self, bytes: &[u8]) -> StoreResult<()> {
        self.workbook = import_portable(bytes)?;
        self.autosave();
        Ok(())
    }

    /// Render the active sheet as CSV
    pub fn export_csv(&self) -> CsvResult<String> {
        CsvWriter::write_string(self.workbook.active_sheet())
    }

    /// Replace the active sheet's grid from CSV text
    pub fn import_csv(&mut self, text: &str) {
        let rows = CsvReader::read_str(text);
        self.workbook.active_sheet_mut().replace_data(rows);
        self.autosave();
    }

    // === Remote sync ===

    /// Push the active sheet to the remote; returns the remote path
    pub fn save_active_remote(&self, config: &RemoteConfig) -> RemoteResult<String> {
        let client = RemoteClient::new(config.clone())?;
        client.save_sheet(self.workbook.active_sheet())
    }

    /// Push every sheet to the remote, best-effort
    pub fn save_all_remote(&self, config: &RemoteConfig) -> RemoteResult<BatchReport> {
        let client = RemoteClient::new(config.clone())?;
        Ok(client.save_all(&self.workbook))
    }
}
