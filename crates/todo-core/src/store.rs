//! Todo Store
//!
//! Owns the authoritative in-memory collection. Every applied mutation is
//! written through the persistence adapter before observers are told and
//! before control returns to the caller.

use std::collections::HashSet;
use std::fmt;

use crate::config::StoreConfig;
use crate::domain::{count_remaining, normalize_text, TodoItem};
use crate::repository::{PersistenceAdapter, SlotStorage, Snapshot};

type Observer = Box<dyn Fn(&[TodoItem])>;

/// Ordered todo collection with write-through persistence.
///
/// Operations that cannot apply (empty text, unknown id) return `None`
/// and leave both memory and storage untouched.
pub struct TodoStore<S> {
    todos: Vec<TodoItem>,
    next_id: u64,
    adapter: PersistenceAdapter<S>,
    observers: Vec<Observer>,
}

impl<S: SlotStorage> TodoStore<S> {
    /// Open a store over `storage`, restoring whatever it holds.
    pub fn new(storage: S, config: &StoreConfig) -> Self {
        Self::open(PersistenceAdapter::new(storage, config))
    }

    /// Open a store over an existing adapter.
    pub fn open(adapter: PersistenceAdapter<S>) -> Self {
        let Snapshot { next_id, todos } = adapter.load();
        let (todos, next_id, repaired) = assign_unique_ids(todos, next_id);

        let store = Self {
            todos,
            next_id,
            adapter,
            observers: Vec::new(),
        };
        if repaired > 0 {
            log::warn!("[STORE] Reassigned {} todo ids", repaired);
            store.persist();
        }
        log::info!("[STORE] Opened with {} todos", store.todos.len());
        store
    }

    // ========================
    // Queries
    // ========================

    /// Current collection in insertion order
    pub fn list(&self) -> &[TodoItem] {
        &self.todos
    }

    pub fn get(&self, id: u64) -> Option<&TodoItem> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Number of incomplete todos
    pub fn remaining(&self) -> usize {
        count_remaining(&self.todos)
    }

    pub fn adapter(&self) -> &PersistenceAdapter<S> {
        &self.adapter
    }

    // ========================
    // Mutations
    // ========================

    /// Append a new todo. `None` if `text` is blank.
    pub fn add(&mut self, text: &str, deadline: &str) -> Option<TodoItem> {
        let Some(text) = normalize_text(text) else {
            log::debug!("[STORE] Ignoring add with empty text");
            return None;
        };

        let Some(id) = self.allocate_id() else {
            log::error!("[STORE] No todo ids left, ignoring add");
            return None;
        };

        let todo = TodoItem::new(id, text, deadline.trim());
        self.todos.push(todo.clone());
        log::debug!("[STORE] Added todo #{}", todo.id);
        self.changed();
        Some(todo)
    }

    /// Flip completion. Returns the new state, `None` if `id` is unknown.
    pub fn toggle(&mut self, id: u64) -> Option<bool> {
        let todo = self.todos.iter_mut().find(|todo| todo.id == id)?;
        todo.completed = !todo.completed;
        let completed = todo.completed;
        log::debug!("[STORE] Toggled todo #{} -> completed={}", id, completed);
        self.changed();
        Some(completed)
    }

    /// Replace text and deadline, keeping id and completion.
    /// `None` if `text` is blank or `id` is unknown.
    pub fn edit(&mut self, id: u64, text: &str, deadline: &str) -> Option<TodoItem> {
        let Some(text) = normalize_text(text) else {
            log::debug!("[STORE] Ignoring edit of #{} with empty text", id);
            return None;
        };

        let todo = self.todos.iter_mut().find(|todo| todo.id == id)?;
        todo.text = text;
        todo.deadline = deadline.trim().to_string();
        let updated = todo.clone();
        log::debug!("[STORE] Edited todo #{}", id);
        self.changed();
        Some(updated)
    }

    /// Remove a todo, returning it. `None` if `id` is unknown.
    pub fn delete(&mut self, id: u64) -> Option<TodoItem> {
        let index = self.todos.iter().position(|todo| todo.id == id)?;
        let removed = self.todos.remove(index);
        log::debug!("[STORE] Deleted todo #{}", id);
        self.changed();
        Some(removed)
    }

    // ========================
    // Observers
    // ========================

    /// Register a callback run with the full collection after each change.
    pub fn subscribe(&mut self, observer: impl Fn(&[TodoItem]) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn allocate_id(&mut self) -> Option<u64> {
        let id = self.next_id;
        self.next_id = id.checked_add(1)?;
        Some(id)
    }

    fn changed(&self) {
        self.persist();
        for observer in &self.observers {
            observer(&self.todos);
        }
    }

    /// In-memory state stays authoritative when a write fails; the next
    /// successful write carries the full collection anyway.
    fn persist(&self) {
        if let Err(e) = self.adapter.save(&self.todos, self.next_id) {
            log::error!(
                "[STORE] Failed to persist {} todos under '{}': {}",
                self.todos.len(),
                self.adapter.key(),
                e
            );
        }
    }
}

impl<S> fmt::Debug for TodoStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TodoStore")
            .field("todos", &self.todos)
            .field("next_id", &self.next_id)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Give every todo a distinct id and work out the next free one.
///
/// Returns the repaired list, the next id, and how many ids were changed.
/// When the stored ids leave no room above them, the whole collection is
/// renumbered from 1 in its current order.
fn assign_unique_ids(mut todos: Vec<TodoItem>, stored_next: u64) -> (Vec<TodoItem>, u64, usize) {
    let distinct = todos.iter().map(|todo| todo.id).collect::<HashSet<_>>().len();
    let duplicates = (todos.len() - distinct) as u64;
    let max_id = todos.iter().map(|todo| todo.id).max().unwrap_or(0);

    // Room for every repaired id plus one more to hand out
    let start = max_id
        .checked_add(1)
        .map(|next| next.max(stored_next).max(1))
        .filter(|next| next.checked_add(duplicates + 1).is_some());
    let Some(mut next_id) = start else {
        return renumber(todos);
    };

    let mut seen = HashSet::with_capacity(todos.len());
    let mut repaired = 0;
    for todo in &mut todos {
        if !seen.insert(todo.id) {
            todo.id = next_id;
            next_id += 1;
            seen.insert(todo.id);
            repaired += 1;
        }
    }
    (todos, next_id, repaired)
}

fn renumber(mut todos: Vec<TodoItem>) -> (Vec<TodoItem>, u64, usize) {
    log::warn!("[STORE] Todo ids exhausted, renumbering {} todos", todos.len());
    let mut repaired = 0;
    for (id, todo) in (1u64..).zip(todos.iter_mut()) {
        if todo.id != id {
            todo.id = id;
            repaired += 1;
        }
    }
    let next_id = todos.len() as u64 + 1;
    (todos, next_id, repaired)
}
