//! UpNext Core
//!
//! Layered architecture:
//! - domain: todo records, deadline helpers and errors
//! - repository: key-value slots and snapshot persistence
//! - store: the in-memory collection and its mutation operations

pub mod config;
pub mod domain;
pub mod repository;
pub mod store;

pub use config::StoreConfig;
pub use domain::{DomainError, DomainResult, TodoItem};
pub use repository::{MemoryStorage, PersistenceAdapter, SlotStorage, Snapshot};
pub use store::TodoStore;
