//! Repository Layer - Core Traits
//!
//! Storage backends only move raw strings in and out of named slots.
//! Encoding is the adapter's job, so a backend has no serde dependency.
//! Implementations: browser localStorage, in-memory.

use crate::domain::DomainResult;

/// Durable key-value string storage
///
/// All operations are synchronous: each store mutation is fully written
/// before control returns to the caller.
pub trait SlotStorage {
    /// Read the value under `key`, `None` if the slot is empty
    fn read(&self, key: &str) -> DomainResult<Option<String>>;

    /// Replace the value under `key`
    fn write(&self, key: &str, value: &str) -> DomainResult<()>;

    /// Clear the slot
    fn remove(&self, key: &str) -> DomainResult<()>;
}

impl<S: SlotStorage + ?Sized> SlotStorage for Box<S> {
    fn read(&self, key: &str) -> DomainResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> DomainResult<()> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> DomainResult<()> {
        (**self).remove(key)
    }
}
