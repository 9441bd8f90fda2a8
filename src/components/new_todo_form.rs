//! New Todo Form Component
//!
//! Text and deadline inputs for adding a todo.

use leptos::prelude::*;

use crate::context::use_app_context;

/// Form for creating new todos
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_app_context();

    let (new_text, set_new_text) = signal(String::new());
    let (new_deadline, set_new_deadline) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let added = ctx.add(&new_text.get_untracked(), &new_deadline.get_untracked());
        if added.is_some() {
            set_new_text.set(String::new());
            set_new_deadline.set(String::new());
        }
    };

    view! {
        <form class="new-todo-form" on:submit=add_todo>
            <div class="new-todo-row">
                <input
                    type="text"
                    placeholder="Add a new todo..."
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                />
                <input
                    type="datetime-local"
                    prop:value=move || new_deadline.get()
                    on:input=move |ev| set_new_deadline.set(event_target_value(&ev))
                />
            </div>

            <button type="submit">"+ Add"</button>
        </form>
    }
}
