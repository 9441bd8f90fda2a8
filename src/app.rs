//! UpNext Frontend App
//!
//! Opens the todo store, wires it to the reactive state and lays out the page.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::domain::count_remaining;
use todo_core::{StoreConfig, TodoStore};

use crate::components::{NewTodoForm, TodoList};
use crate::context::AppContext;
use crate::storage::open_browser_storage;
use crate::store::{store_set_todos, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let app_store = Store::new(AppState::default());

    // Rehydrate once; afterwards the store pushes every change to app_store
    let mut todos = TodoStore::new(open_browser_storage(), &StoreConfig::default());
    store_set_todos(&app_store, todos.list());
    todos.subscribe(move |todos| store_set_todos(&app_store, todos));
    log::info!("[APP] Loaded {} todos", todos.len());

    provide_context(app_store);
    provide_context(AppContext::new(todos));

    let is_empty = move || app_store.todos().read().is_empty();
    let remaining = move || {
        let todos = app_store.todos().read();
        format!("{} of {} remaining", count_remaining(&todos), todos.len())
    };

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"UpNext"</h1>

                <NewTodoForm />

                <TodoList />

                <Show
                    when=is_empty
                    fallback=move || view! { <p class="item-count">{remaining}</p> }
                >
                    <p class="empty-state">"No todos yet. Add one above!"</p>
                </Show>
            </main>
        </div>
    }
}
