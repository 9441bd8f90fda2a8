//! Domain Layer
//!
//! Contains the todo record, deadline handling and the error type.
//! This layer does no I/O.

mod deadline;
mod error;
mod todo;

pub use deadline::DeadlineLabel;
pub use error::{DomainError, DomainResult};
pub use todo::{count_remaining, normalize_text, TodoItem};
