//! Slot store trait and in-memory implementation
//!
//! The trait defines the durability interface, allowing for different
//! implementations (SQLite, in-memory for tests).

use std::cell::RefCell;
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::error::StorageError;

/// Named-slot snapshot storage.
///
/// Each aggregate owns one well-known slot name and persists its whole state
/// there as a JSON snapshot.
pub trait SlotStore {
    /// Return the last-saved snapshot for a slot, if any
    fn load(&self, name: &str) -> Result<Option<String>, StorageError>;

    /// Atomically replace the snapshot stored under a slot
    fn save(&self, name: &str, snapshot: &str) -> Result<(), StorageError>;
}

/// In-memory slot store (for testing)
#[derive(Debug, Default)]
pub struct MemorySlots {
    slots: RefCell<HashMap<String, String>>,
}

impl MemorySlots {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStore for MemorySlots {
    fn load(&self, name: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.borrow().get(name).cloned())
    }

    fn save(&self, name: &str, snapshot: &str) -> Result<(), StorageError> {
        self.slots
            .borrow_mut()
            .insert(name.to_string(), snapshot.to_string());
        Ok(())
    }
}

/// Load and decode a slot.
///
/// Absent, unreadable, and corrupt snapshots all come back as `None`; the
/// owning store falls back to its defaults and stays authoritative for the
/// session.
pub fn load_slot<T: DeserializeOwned>(slots: &dyn SlotStore, name: &str) -> Option<T> {
    match slots.load(name) {
        Ok(Some(snapshot)) => match serde_json::from_str(&snapshot) {
            Ok(state) => Some(state),
            Err(e) => {
                warn!(slot = name, error = %e, "Discarding corrupt snapshot");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            warn!(slot = name, error = %e, "Failed to load snapshot");
            None
        }
    }
}

/// Encode and write a slot.
///
/// Best-effort: failures are logged, not returned to the mutating caller.
pub fn save_slot<T: Serialize>(slots: &dyn SlotStore, name: &str, state: &T) {
    let snapshot = match serde_json::to_string(state) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!(slot = name, error = %e, "Failed to encode snapshot");
            return;
        }
    };
    if let Err(e) = slots.save(name, &snapshot) {
        warn!(slot = name, error = %e, "Failed to save snapshot");
    }
}
