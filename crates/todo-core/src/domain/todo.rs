//! Todo Entity
//!
//! A single task record with an optional deadline.

use serde::{Deserialize, Serialize};

use super::deadline::{format_deadline, DeadlineLabel};

/// A task record.
///
/// Field names are the persisted wire names; do not rename.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier, increasing in creation order
    pub id: u64,
    /// Display text, never empty, trimmed
    pub text: String,
    /// Completion status
    pub completed: bool,
    /// `datetime-local` timestamp, or empty for no deadline
    #[serde(default)]
    pub deadline: String,
}

impl TodoItem {
    /// Create a new incomplete item
    pub fn new(id: u64, text: impl Into<String>, deadline: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            deadline: deadline.into(),
        }
    }

    pub fn has_deadline(&self) -> bool {
        !self.deadline.is_empty()
    }

    /// Display labels for the deadline, if set and well-formed
    pub fn deadline_label(&self) -> Option<DeadlineLabel> {
        format_deadline(&self.deadline)
    }
}

/// Number of todos not yet completed
pub fn count_remaining(todos: &[TodoItem]) -> usize {
    todos.iter().filter(|todo| !todo.completed).count()
}

/// Trim user-entered text, rejecting it when nothing is left.
pub fn normalize_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_creation() {
        let todo = TodoItem::new(1, "Buy milk", "2024-01-01T10:00");
        assert_eq!(todo.id, 1);
        assert_eq!(todo.text, "Buy milk");
        assert!(!todo.completed);
        assert!(todo.has_deadline());
        let label = todo.deadline_label().unwrap();
        assert_eq!(label.date, "01/01/2024");
        assert_eq!(label.time, "10:00");
    }

    #[test]
    fn test_no_deadline() {
        let todo = TodoItem::new(2, "Someday", "");
        assert!(!todo.has_deadline());
        assert_eq!(todo.deadline_label(), None);
    }

    #[test]
    fn test_unparseable_deadline_has_no_label() {
        let todo = TodoItem::new(3, "Later", "next week");
        assert!(todo.has_deadline());
        assert_eq!(todo.deadline_label(), None);
    }

    #[test]
    fn test_count_remaining() {
        let mut done = TodoItem::new(1, "done", "");
        done.completed = true;
        let todos = vec![done, TodoItem::new(2, "open", ""), TodoItem::new(3, "open", "")];
        assert_eq!(count_remaining(&todos), 2);
        assert_eq!(count_remaining(&[]), 0);
    }

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("  Buy milk \n"), Some("Buy milk".to_string()));
        assert_eq!(normalize_text(""), None);
        assert_eq!(normalize_text("   \t"), None);
    }

    #[test]
    fn test_wire_field_names() {
        let todo = TodoItem::new(7, "Call mum", "");
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 7, "text": "Call mum", "completed": false, "deadline": "" })
        );
    }

    #[test]
    fn test_missing_deadline_defaults_to_empty() {
        let todo: TodoItem =
            serde_json::from_str(r#"{"id":1,"text":"x","completed":true}"#).unwrap();
        assert_eq!(todo.deadline, "");
        assert!(todo.completed);
    }
}
