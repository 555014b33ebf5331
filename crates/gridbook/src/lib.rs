//! # gridbook
//!
//! A small multi-sheet grid editor library: named sheets of text cells,
//! a workbook holding them, local key/value persistence with debounced
//! autosave, CSV and JSON export/import, and push-to-remote sync via a
//! GitHub-style contents API.
//!
//! ## Example
//!
//! ```rust
//! use gridbook::prelude::*;
//! use std::sync::Arc;
//!
//! let mut session = Session::new(Arc::new(MemoryStore::new()));
//!
//! session.set_cell(0, 0, "Hello").unwrap();
//! session.new_sheet(Some("Budget"));
//! session.set_priority(Priority::High);
//!
//! let receipt = session.save_local().unwrap();
//! println!("Saved (local) {}", receipt.time_string());
//! ```

pub mod prelude;
pub mod session;

pub use session::Session;

// Re-export core types
pub use gridbook_core::{Error, Priority, Result, Sheet, Workbook, DEFAULT_COLS, DEFAULT_ROWS};

// Re-export persistence types
pub use gridbook_store::{
    export_portable, import_portable, Debouncer, FileStore, KeyValueStore, LocalStore,
    MemoryStore, SaveReceipt, StoreError, StoreResult, STORAGE_KEY,
};

// Re-export CSV types
pub use gridbook_csv::{csv_file_name, CsvError, CsvReader, CsvResult, CsvWriter};

// Re-export remote sync types
pub use gridbook_remote::{
    remote_path, sanitize_sheet_name, BatchReport, FileOutcome, RemoteClient, RemoteConfig,
    RemoteError, RemoteResult,
};
