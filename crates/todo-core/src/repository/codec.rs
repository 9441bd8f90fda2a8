//! Snapshot Codec
//!
//! The whole collection is persisted as one JSON document:
//!
//! ```json
//! {"version":1,"next_id":4,"todos":[{"id":3,"text":"Buy milk","completed":false,"deadline":""}]}
//! ```
//!
//! Older builds stored a bare array of todos with no envelope; that form is
//! still accepted on read and rewritten in the versioned form on next save.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{DomainError, DomainResult, TodoItem};

/// Current snapshot format version
pub const SNAPSHOT_VERSION: u32 = 1;

/// Decoded persisted state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    /// Next id the store should hand out, 0 when unknown (legacy data)
    pub next_id: u64,
    /// Collection in insertion order
    pub todos: Vec<TodoItem>,
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u32,
    next_id: u64,
    todos: &'a [TodoItem],
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    next_id: u64,
    todos: Vec<TodoItem>,
}

/// Encode a collection as a versioned snapshot document.
pub fn encode_snapshot(todos: &[TodoItem], next_id: u64) -> DomainResult<String> {
    let envelope = EnvelopeRef {
        version: SNAPSHOT_VERSION,
        next_id,
        todos,
    };
    Ok(serde_json::to_string(&envelope)?)
}

/// Decode a snapshot document, accepting the legacy bare-array form.
pub fn decode_snapshot(raw: &str) -> DomainResult<Snapshot> {
    let value: Value = serde_json::from_str(raw)?;

    if value.is_array() {
        let todos: Vec<TodoItem> = serde_json::from_value(value)?;
        return Ok(Snapshot { next_id: 0, todos });
    }

    // Objects must carry a version.
    let found = value
        .get("version")
        .and_then(Value::as_u64)
        .ok_or_else(|| DomainError::InvalidSnapshot("no version field".to_string()))?;
    let found = u32::try_from(found).unwrap_or(u32::MAX);
    if found == 0 || found > SNAPSHOT_VERSION {
        return Err(DomainError::UnsupportedVersion {
            found,
            supported: SNAPSHOT_VERSION,
        });
    }

    let envelope: Envelope = serde_json::from_value(value)?;
    Ok(Snapshot {
        next_id: envelope.next_id,
        todos: envelope.todos,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_envelope_layout() {
        let todos = vec![TodoItem::new(3, "Buy milk", "")];
        let raw = encode_snapshot(&todos, 4).unwrap();
        let value: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], 1);
        assert_eq!(value["next_id"], 4);
        assert_eq!(value["todos"][0]["text"], "Buy milk");
    }

    #[test]
    fn test_decode_envelope() {
        let raw = r#"{"version":1,"next_id":9,"todos":[{"id":8,"text":"a","completed":true,"deadline":"2024-01-01T10:00"}]}"#;
        let snapshot = decode_snapshot(raw).unwrap();
        assert_eq!(snapshot.next_id, 9);
        assert_eq!(snapshot.todos.len(), 1);
        assert!(snapshot.todos[0].completed);
    }

    #[test]
    fn test_decode_legacy_array() {
        let raw = r#"[{"id":1704103200000,"text":"Buy milk","completed":false,"deadline":""}]"#;
        let snapshot = decode_snapshot(raw).unwrap();
        assert_eq!(snapshot.next_id, 0);
        assert_eq!(snapshot.todos[0].id, 1_704_103_200_000);
    }

    #[test]
    fn test_decode_newer_version_rejected() {
        let raw = r#"{"version":2,"next_id":1,"todos":[]}"#;
        let err = decode_snapshot(raw).unwrap_err();
        assert!(matches!(
            err,
            DomainError::UnsupportedVersion { found: 2, supported: 1 }
        ));
    }

    #[test]
    fn test_decode_malformed() {
        assert!(matches!(
            decode_snapshot("{not json").unwrap_err(),
            DomainError::Serialization(_)
        ));
        assert!(decode_snapshot(r#"[{"id":"x"}]"#).is_err());
    }

    #[test]
    fn test_decode_unversioned_object() {
        assert!(matches!(
            decode_snapshot(r#"{"todos":[]}"#).unwrap_err(),
            DomainError::InvalidSnapshot(_)
        ));
        assert!(matches!(
            decode_snapshot("42").unwrap_err(),
            DomainError::InvalidSnapshot(_)
        ));
    }
}
