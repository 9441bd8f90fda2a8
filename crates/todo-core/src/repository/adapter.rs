//! Persistence Adapter
//!
//! Bridges the store to a single slot: whole-collection snapshots,
//! written after every mutation and read once at startup.

use crate::config::StoreConfig;
use crate::domain::{DomainResult, TodoItem};

use super::codec::{decode_snapshot, encode_snapshot, Snapshot};
use super::traits::SlotStorage;

/// Reads and writes collection snapshots under a fixed key
pub struct PersistenceAdapter<S> {
    storage: S,
    key: String,
}

impl<S: SlotStorage> PersistenceAdapter<S> {
    pub fn new(storage: S, config: &StoreConfig) -> Self {
        Self {
            storage,
            key: config.storage_key.clone(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Rehydrate the persisted collection.
    ///
    /// An empty slot yields an empty snapshot. Unreadable or corrupt data
    /// is logged and also yields an empty snapshot, so startup never fails.
    pub fn load(&self) -> Snapshot {
        let raw = match self.storage.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::debug!("[STORE] No saved todos under '{}'", self.key);
                return Snapshot::default();
            }
            Err(e) => {
                log::warn!("[STORE] Failed to read '{}': {}", self.key, e);
                return Snapshot::default();
            }
        };

        match decode_snapshot(&raw) {
            Ok(snapshot) => {
                log::debug!(
                    "[STORE] Loaded {} todos from '{}'",
                    snapshot.todos.len(),
                    self.key
                );
                snapshot
            }
            Err(e) => {
                log::warn!(
                    "[STORE] Discarding unreadable data under '{}' ({} bytes): {}",
                    self.key,
                    raw.len(),
                    e
                );
                Snapshot::default()
            }
        }
    }

    /// Write the full collection, replacing any prior value.
    pub fn save(&self, todos: &[TodoItem], next_id: u64) -> DomainResult<()> {
        let raw = encode_snapshot(todos, next_id)?;
        self.storage.write(&self.key, &raw)?;
        log::trace!("[STORE] Saved {} todos to '{}'", todos.len(), self.key);
        Ok(())
    }

    /// Remove the slot entirely
    pub fn clear(&self) -> DomainResult<()> {
        self.storage.remove(&self.key)
    }
}
