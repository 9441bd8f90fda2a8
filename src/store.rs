//! Reactive View State
//!
//! A read-only mirror of the TodoStore's collection, refreshed by its
//! observer, plus the inline-edit draft. Components read from here so each
//! row only re-renders when the fields it touches change.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::TodoItem;

/// In-progress inline edit of one todo
#[derive(Clone, Debug, PartialEq)]
pub struct EditDraft {
    pub id: u64,
    pub text: String,
    pub deadline: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All todos, insertion order
    pub todos: Vec<TodoItem>,
    /// Row currently being edited, with its edit buffers
    pub editing: Option<EditDraft>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the mirrored collection
pub fn store_set_todos(store: &AppStore, todos: &[TodoItem]) {
    *store.todos().write() = todos.to_vec();
}

/// Id of the row being edited, if any
pub fn store_editing_id(store: &AppStore) -> Option<u64> {
    store.editing().read().as_ref().map(|draft| draft.id)
}

/// Open the inline editor for `todo`, seeded with its current values
pub fn store_start_editing(store: &AppStore, todo: &TodoItem) {
    *store.editing().write() = Some(EditDraft {
        id: todo.id,
        text: todo.text.clone(),
        deadline: todo.deadline.clone(),
    });
}

/// Apply a change to the open draft; no-op when nothing is being edited
pub fn store_update_draft(store: &AppStore, update: impl FnOnce(&mut EditDraft)) {
    if let Some(draft) = store.editing().write().as_mut() {
        update(draft);
    }
}

pub fn store_stop_editing(store: &AppStore) {
    *store.editing().write() = None;
}
