//! UI Components
//!
//! Reusable Leptos components.

mod deadline_badge;
mod new_todo_form;
mod todo_list;
mod todo_row;

pub use deadline_badge::DeadlineBadge;
pub use new_todo_form::NewTodoForm;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
