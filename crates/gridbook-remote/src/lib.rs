//! # gridbook-remote
//!
//! Pushes sheets as individual JSON files to a GitHub-style contents
//! API. Saving a sheet is a two-step read-modify-write: fetch the
//! file's current version token (sha) if it exists, then PUT the new
//! content, including the token for an update or omitting it for a
//! create. There are no retries; a stale token surfaces as a plain
//! failure from the remote side.

mod client;
mod config;
mod error;
mod path;

pub use client::{BatchReport, FileOutcome, RemoteClient};
pub use config::RemoteConfig;
pub use error::{RemoteError, RemoteResult};
pub use path::{remote_path, sanitize_sheet_name};
