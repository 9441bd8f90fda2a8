//! Domain Errors

use thiserror::Error;

/// Errors raised by storage and snapshot handling.
///
/// Validation rejections (empty text) and unknown ids are not errors;
/// store operations report those by returning `None`.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The underlying key-value slot could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Stored data could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Stored value is valid JSON but not a snapshot.
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// Snapshot was written by a newer build.
    #[error("Unsupported snapshot version {found} (supported up to {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },
}

impl DomainError {
    /// Creates a storage error from any displayable cause.
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
