//! Prelude module - common imports for gridbook users
//!
//! ```rust
//! use gridbook::prelude::*;
//! ```

pub use crate::{
    csv_file_name,
    export_portable,
    import_portable,
    remote_path,
    sanitize_sheet_name,

    BatchReport,
    CsvReader,
    CsvWriter,
    // Error types
    Error,
    FileStore,
    KeyValueStore,
    LocalStore,
    MemoryStore,
    Priority,
    RemoteClient,
    RemoteConfig,
    RemoteError,
    Result,
    SaveReceipt,
    // Command interface
    Session,
    // Main types
    Sheet,
    StoreError,
    Workbook,
};
