//! Repository Layer
//!
//! Key-value slot abstraction, snapshot codec and the persistence adapter.

mod adapter;
mod codec;
mod memory;
mod traits;


pub use adapter::PersistenceAdapter;
pub use codec::{decode_snapshot, encode_snapshot, Snapshot, SNAPSHOT_VERSION};
pub use memory::MemoryStorage;
pub use traits::SlotStorage;
