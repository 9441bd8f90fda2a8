//! Deadline Badge Component
//!
//! Shows a todo's deadline as separate date and time labels.

use leptos::prelude::*;
use todo_core::TodoItem;

/// Renders nothing without a deadline, and the raw text when it
/// cannot be parsed.
#[component]
pub fn DeadlineBadge(todo: TodoItem) -> impl IntoView {
    if !todo.has_deadline() {
        return ().into_any();
    }
    match todo.deadline_label() {
        Some(label) => view! {
            <span class="deadline">
                <span class="deadline-date">{label.date}</span>
                <span class="deadline-time">{label.time}</span>
            </span>
        }
        .into_any(),
        None => view! { <span class="deadline deadline-raw">{todo.deadline}</span> }.into_any(),
    }
}
