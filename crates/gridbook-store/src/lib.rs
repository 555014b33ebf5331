//! # gridbook-store
//!
//! Local persistence for gridbook workbooks: a small key/value store
//! abstraction, a debounced autosave path, fail-soft loading, and
//! portable JSON snapshots.

mod debounce;
mod error;
mod kv;
mod local;

pub use debounce::Debouncer;
pub use error::{StoreError, StoreResult};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use local::{export_portable, import_portable, LocalStore, SaveReceipt, STORAGE_KEY};
