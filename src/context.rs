//! Application Context
//!
//! Holds the TodoStore for the lifetime of the page and exposes its
//! mutations to components.

use leptos::prelude::*;
use todo_core::{SlotStorage, TodoItem, TodoStore};

/// The store as used in the browser: storage chosen at startup
pub type BrowserTodoStore = TodoStore<Box<dyn SlotStorage>>;

/// App-wide handle provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The store is not Send, so it lives in local arena storage
    todos: StoredValue<BrowserTodoStore, LocalStorage>,
}

impl AppContext {
    pub fn new(todos: BrowserTodoStore) -> Self {
        Self {
            todos: StoredValue::new_local(todos),
        }
    }

    /// Add a todo; `None` if the text was blank
    pub fn add(&self, text: &str, deadline: &str) -> Option<TodoItem> {
        self.todos
            .try_update_value(|store| store.add(text, deadline))
            .flatten()
    }

    pub fn toggle(&self, id: u64) -> Option<bool> {
        self.todos
            .try_update_value(|store| store.toggle(id))
            .flatten()
    }

    /// Save an edit; `None` if the text was blank or the todo is gone
    pub fn edit(&self, id: u64, text: &str, deadline: &str) -> Option<TodoItem> {
        self.todos
            .try_update_value(|store| store.edit(id, text, deadline))
            .flatten()
    }

    pub fn delete(&self, id: u64) -> Option<TodoItem> {
        self.todos
            .try_update_value(|store| store.delete(id))
            .flatten()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
