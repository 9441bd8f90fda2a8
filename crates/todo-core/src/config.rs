//! Store Configuration

/// Key of the slot the collection is persisted under.
///
/// Matches the key earlier builds of the app wrote, so existing
/// browser data is picked up on first launch.
pub const DEFAULT_STORAGE_KEY: &str = "todos";

/// Configuration for a [`crate::TodoStore`] and its persistence adapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Slot key the snapshot is written to
    pub storage_key: String,
}

impl StoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different slot key (e.g. to keep separate lists side by side)
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}
