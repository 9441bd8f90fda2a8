//! Todo List Component

use leptos::prelude::*;
use todo_core::TodoItem;

use crate::components::TodoRow;
use crate::store::{use_app_store, AppStateStoreFields};

/// All todos in insertion order.
///
/// Rows are keyed on their full content, so any change to a todo
/// rebuilds just that row.
#[component]
pub fn TodoList() -> impl IntoView {
    let app_store = use_app_store();

    view! {
        <div class="todo-list">
            <For
                each=move || app_store.todos().get()
                key=|todo: &TodoItem| todo.clone()
                children=move |todo: TodoItem| view! { <TodoRow todo=todo /> }
            />
        </div>
    }
}
