//! # gridbook-core
//!
//! Core data structures for the gridbook spreadsheet library.
//!
//! This crate provides the fundamental types used throughout gridbook:
//! - [`Sheet`] - A named rectangular grid of text cells
//! - [`Workbook`] - An ordered collection of sheets plus the active selector
//! - [`Priority`] - Per-sheet priority label
//!
//! ## Example
//!
//! ```rust
//! use gridbook_core::Workbook;
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.active_sheet_mut();
//!
//! sheet.set_cell(0, 0, "Hello").unwrap();
//! sheet.set_cell(0, 1, "World").unwrap();
//!
//! assert_eq!(sheet.cell(0, 1), Some("World"));
//! ```

pub mod error;
pub mod sheet;
pub mod workbook;

// Re-exports for convenience
pub use error::{Error, Result};
pub use sheet::{Priority, Sheet};
pub use workbook::Workbook;

/// Default number of rows in a freshly created sheet
pub const DEFAULT_ROWS: usize = 10;

/// Default number of columns in a freshly created sheet
pub const DEFAULT_COLS: usize = 6;
