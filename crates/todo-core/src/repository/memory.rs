//! In-memory slot storage, used in tests and as a fallback when the
//! browser refuses access to localStorage.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::domain::DomainResult;

use super::traits::SlotStorage;

/// In-memory key-value slots.
///
/// Clones share the same slots, so a second store opened over a clone
/// sees what the first one wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a slot
    pub fn with_slot(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.slots.borrow_mut().insert(key.into(), value.into());
        self
    }

    /// Raw value currently held under `key`
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }
}

impl SlotStorage for MemoryStorage {
    fn read(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.raw(key))
    }

    fn write(&self, key: &str, value: &str) -> DomainResult<()> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> DomainResult<()> {
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_empty_slot() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.read("todos").unwrap(), None);
    }

    #[test]
    fn test_write_replaces_value() {
        let storage = MemoryStorage::new();
        storage.write("todos", "[]").unwrap();
        storage.write("todos", "[1]").unwrap();
        assert_eq!(storage.read("todos").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_clones_share_slots() {
        let storage = MemoryStorage::new();
        let other = storage.clone();
        storage.write("k", "v").unwrap();
        assert_eq!(other.raw("k").as_deref(), Some("v"));

        other.remove("k").unwrap();
        assert_eq!(storage.raw("k"), None);
    }
}
