//! Workbook persistence: autosave, fail-soft loading, portable snapshots

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local};
use gridbook_core::Workbook;

use crate::debounce::Debouncer;
use crate::error::{StoreError, StoreResult};
use crate::kv::KeyValueStore;

/// Fixed key the workbook record lives under
pub const STORAGE_KEY: &str = "gridbook.workbook.v1";

/// Quiet period for debounced autosave
const DEBOUNCE_WINDOW: Duration = Duration::from_millis(350);

/// Receipt for a completed local save
#[derive(Debug, Clone)]
pub struct SaveReceipt {
    /// Wall-clock time of the write
    pub saved_at: DateTime<Local>,
}

impl SaveReceipt {
    /// Local time of the save, formatted for a status line
    pub fn time_string(&self) -> String {
        self.saved_at.format("%H:%M:%S").to_string()
    }
}

/// Local persistence for a workbook
///
/// Wraps a [`KeyValueStore`] with the two save paths the editor uses: a
/// debounced autosave that coalesces rapid edits, and an immediate save
/// that writes synchronously. Loading is fail-soft and never errors.
pub struct LocalStore {
    store: Arc<dyn KeyValueStore>,
    debouncer: Debouncer,
    autosave: bool,
}

impl LocalStore {
    /// Create a store with the default 350ms debounce window
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_debounce(store, DEBOUNCE_WINDOW)
    }

    /// Create a store with a custom debounce window
    pub fn with_debounce(store: Arc<dyn KeyValueStore>, window: Duration) -> Self {
        Self {
            store,
            debouncer: Debouncer::new(window),
            autosave: true,
        }
    }

    /// Enable or disable the debounced autosave path
    ///
    /// [`save_now`](Self::save_now) is unaffected.
    pub fn set_autosave(&mut self, enabled: bool) {
        self.autosave = enabled;
        if !enabled {
            self.debouncer.cancel();
        }
    }

    /// Whether debounced autosave is enabled
    pub fn autosave(&self) -> bool {
        self.autosave
    }

    /// Schedule a debounced save of the workbook's current state
    ///
    /// The snapshot is taken now; repeated calls within the quiet window
    /// coalesce into one write of the latest snapshot. Does nothing when
    /// autosave is disabled.
    pub fn save(&self, workbook: &Workbook) {
        if !self.autosave {
            return;
        }
        let snapshot = match serde_json::to_string(workbook) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!("Failed to serialize workbook for autosave: {}", e);
                return;
            }
        };
        let store = self.store.clone();
        self.debouncer.schedule(move || {
            if let Err(e) = store.put(STORAGE_KEY, &snapshot) {
                tracing::warn!("Autosave write failed: {}", e);
            } else {
                tracing::debug!("Autosaved workbook ({} bytes)", snapshot.len());
            }
        });
    }

    /// Save the workbook immediately, bypassing the debounce window
    ///
    /// Any still-pending debounced write is discarded so a stale
    /// snapshot cannot land after this one.
    pub fn save_now(&self, workbook: &Workbook) -> StoreResult<SaveReceipt> {
        self.debouncer.cancel();
        let snapshot = serde_json::to_string(workbook)?;
        self.store.put(STORAGE_KEY, &snapshot)?;
        tracing::debug!("Saved workbook ({} bytes)", snapshot.len());
        Ok(SaveReceipt {
            saved_at: Local::now(),
        })
    }

    /// Load the persisted workbook
    ///
    /// Fail-soft: a missing record, malformed JSON, or a record with no
    /// sheets all yield a fresh default workbook. An out-of-range active
    /// index is clamped.
    pub fn load(&self) -> Workbook {
        let Some(raw) = self.store.get(STORAGE_KEY) else {
            return Workbook::new();
        };
        match serde_json::from_str::<Workbook>(&raw) {
            Ok(mut wb) if !wb.sheets.is_empty() => {
                wb.clamp_active();
                wb
            }
            Ok(_) => Workbook::new(),
            Err(e) => {
                tracing::warn!("Discarding malformed workbook record: {}", e);
                Workbook::new()
            }
        }
    }
}

/// Serialize a full-workbook snapshot to portable JSON bytes
pub fn export_portable(workbook: &Workbook) -> StoreResult<Vec<u8>> {
    Ok(serde_json::to_vec(workbook)?)
}

/// Parse a portable snapshot back into a workbook
///
/// Rejects payloads lacking a top-level `sheets` field and payloads
/// whose sheet list is empty; a workbook may never have zero sheets.
pub fn import_portable(bytes: &[u8]) -> StoreResult<Workbook> {
    let mut wb: Workbook = serde_json::from_slice(bytes)?;
    if wb.sheets.is_empty() {
        return Err(StoreError::EmptySnapshot);
    }
    wb.clamp_active();
    Ok(wb)
}
