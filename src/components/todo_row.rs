//! Todo Row Component
//!
//! One todo: completion toggle, text or inline editor, deadline, actions.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use todo_core::TodoItem;

use crate::components::DeadlineBadge;
use crate::context::use_app_context;
use crate::store::{
    store_editing_id, store_start_editing, store_stop_editing, store_update_draft, use_app_store,
    AppStateStoreFields,
};

/// A single todo row
#[component]
pub fn TodoRow(todo: TodoItem) -> impl IntoView {
    let ctx = use_app_context();
    let app_store = use_app_store();

    let id = todo.id;
    let completed = todo.completed;
    let is_editing = Memo::new(move |_| store_editing_id(&app_store) == Some(id));

    // Blank text keeps the editor open and the todo unchanged
    let save_edit = move || {
        let Some(draft) = app_store.editing().get_untracked() else { return };
        if draft.id != id {
            return;
        }
        if ctx.edit(id, &draft.text, &draft.deadline).is_some() {
            store_stop_editing(&app_store);
        }
    };

    let edit_group = NodeRef::<html::Span>::new();
    let edit_input = NodeRef::<html::Input>::new();
    Effect::new(move |_| {
        if let Some(input) = edit_input.get() {
            let _ = input.focus();
        }
    });

    let start_editing = {
        let todo = todo.clone();
        move |_| store_start_editing(&app_store, &todo)
    };

    view! {
        <div class=if completed { "todo-row completed" } else { "todo-row" }>
            <button
                class=if completed { "toggle-btn checked" } else { "toggle-btn" }
                on:click=move |_| {
                    ctx.toggle(id);
                }
            >
                {if completed { "✓" } else { "" }}
            </button>

            {move || if is_editing.get() {
                view! {
                    <span
                        class="edit-group"
                        node_ref=edit_group
                        on:focusout=move |ev: web_sys::FocusEvent| {
                            // Moving between the two inputs is not leaving the editor
                            let staying = ev
                                .related_target()
                                .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                                .zip(edit_group.get_untracked())
                                .map(|(target, group)| group.contains(Some(&target)))
                                .unwrap_or(false);
                            if !staying {
                                save_edit();
                            }
                        }
                    >
                        <input
                            type="text"
                            class="edit-text"
                            node_ref=edit_input
                            prop:value=move || {
                                app_store.editing().read().as_ref().map(|d| d.text.clone()).unwrap_or_default()
                            }
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                store_update_draft(&app_store, |draft| draft.text = value);
                            }
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    save_edit();
                                }
                            }
                        />
                        <input
                            type="datetime-local"
                            class="edit-deadline"
                            prop:value=move || {
                                app_store.editing().read().as_ref().map(|d| d.deadline.clone()).unwrap_or_default()
                            }
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                store_update_draft(&app_store, |draft| draft.deadline = value);
                            }
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    save_edit();
                                }
                            }
                        />
                    </span>
                }
                .into_any()
            } else {
                view! {
                    <span class="todo-text">{todo.text.clone()}</span>
                    <DeadlineBadge todo=todo.clone() />
                }
                .into_any()
            }}

            <div class="row-actions">
                <button class="edit-btn" on:click=start_editing>"✎"</button>
                <button
                    class="delete-btn"
                    on:click=move |_| {
                        if ctx.delete(id).is_some() && store_editing_id(&app_store) == Some(id) {
                            store_stop_editing(&app_store);
                        }
                    }
                >
                    "×"
                </button>
            </div>
        </div>
    }
}
